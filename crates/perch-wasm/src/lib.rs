//! WebAssembly bindings for the Perch positioning engine.
//!
//! Popovers, dropdowns, comboboxes, and tooltips call into this crate with
//! plain objects and apply the returned coordinates as fixed positioning.
//!
//! ## Example
//!
//! ```js
//! import { computePosition } from 'perch-wasm';
//!
//! const { x, y, placement } = computePosition(
//!   trigger.getBoundingClientRect().toJSON(),
//!   menu.getBoundingClientRect().toJSON(),
//!   { width: window.innerWidth, height: window.innerHeight },
//!   { placement: 'bottom-start', offset: 4 },
//! );
//!
//! Object.assign(menu.style, { left: `${x}px`, top: `${y}px` });
//! menu.dataset.placement = placement;
//! ```

use perch_core::{PerchError, Placement};
use wasm_bindgen::prelude::*;

mod types;

pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Get the version of the bindings.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Every placement token the engine accepts.
#[wasm_bindgen]
pub fn placements() -> Vec<String> {
    Placement::ALL.iter().map(|p| p.to_string()).collect()
}

/// Position a floating element next to a reference element.
///
/// `options` may be `undefined` or `null`, in which case the defaults apply.
#[wasm_bindgen(js_name = computePosition)]
pub fn compute_position(
    reference: JsValue,
    floating: JsValue,
    viewport: JsValue,
    options: JsValue,
) -> Result<JsValue, JsError> {
    let reference: RectJs = serde_wasm_bindgen::from_value(reference)
        .map_err(|e| JsError::new(&format!("Invalid reference rect: {}", e)))?;
    let floating: RectJs = serde_wasm_bindgen::from_value(floating)
        .map_err(|e| JsError::new(&format!("Invalid floating rect: {}", e)))?;
    let viewport: ViewportJs = serde_wasm_bindgen::from_value(viewport)
        .map_err(|e| JsError::new(&format!("Invalid viewport: {}", e)))?;
    let options: PositionOptionsJs = if options.is_undefined() || options.is_null() {
        PositionOptionsJs::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?
    };

    let result = resolve(reference, floating, viewport, options)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Validate JavaScript inputs and run the engine.
pub fn resolve(
    reference: RectJs,
    floating: RectJs,
    viewport: ViewportJs,
    options: PositionOptionsJs,
) -> Result<PositionResultJs, PerchError> {
    let reference = reference.into_core()?;
    let floating = floating.into_core()?;
    let viewport = viewport.into_core()?;
    let options = options.into_core()?;

    log::debug!("computePosition {} in {}x{}", options.placement, viewport.width, viewport.height);

    let result = perch_position::compute_position(&reference, &floating, viewport, &options);
    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_core::{GeometryError, PlacementError};

    fn rect(x: f64, y: f64, width: f64, height: f64) -> RectJs {
        RectJs { x, y, width, height }
    }

    #[test]
    fn test_resolve_flips_near_bottom() {
        let options: PositionOptionsJs = serde_json::from_str(r#"{ "placement": "bottom" }"#).unwrap();
        let result = resolve(
            rect(0.0, 160.0, 100.0, 100.0),
            rect(0.0, 0.0, 50.0, 50.0),
            ViewportJs { width: 1000.0, height: 200.0 },
            options,
        )
        .unwrap();
        assert_eq!(
            result,
            PositionResultJs { x: 25.0, y: 110.0, placement: "top".into() }
        );
    }

    #[test]
    fn test_dom_rect_json_is_accepted() {
        let json = r#"{ "x": 10, "y": 20, "width": 30, "height": 40,
                        "top": 20, "right": 40, "bottom": 60, "left": 10 }"#;
        let rect: RectJs = serde_json::from_str(json).unwrap();
        assert_eq!(rect.into_core().unwrap().bottom, 60.0);
    }

    #[test]
    fn test_empty_options_use_defaults() {
        let options: PositionOptionsJs = serde_json::from_str("{}").unwrap();
        let options = options.into_core().unwrap();
        assert_eq!(options, perch_position::PositionOptions::default());
    }

    #[test]
    fn test_invalid_placement_is_reported() {
        let options = PositionOptionsJs {
            placement: Some("middle".into()),
            ..Default::default()
        };
        let err = resolve(
            rect(0.0, 0.0, 10.0, 10.0),
            rect(0.0, 0.0, 10.0, 10.0),
            ViewportJs { width: 100.0, height: 100.0 },
            options,
        )
        .unwrap_err();
        assert!(matches!(err, PerchError::Placement(PlacementError::UnknownSide { .. })));
        assert!(err.to_string().contains("middle"));
    }

    #[test]
    fn test_invalid_viewport_is_reported() {
        let err = resolve(
            rect(0.0, 0.0, 10.0, 10.0),
            rect(0.0, 0.0, 10.0, 10.0),
            ViewportJs { width: 100.0, height: 0.0 },
            PositionOptionsJs::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PerchError::Geometry(GeometryError::InvalidViewport { .. })));
    }

    #[test]
    fn test_placements_lists_all_tokens() {
        let tokens = placements();
        assert_eq!(tokens.len(), 12);
        assert!(tokens.iter().any(|t| t == "right-end"));
        assert!(tokens.iter().any(|t| t == "left"));
    }
}
