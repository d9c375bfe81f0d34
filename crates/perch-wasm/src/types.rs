//! JavaScript-facing shapes for the bindings.

use perch_core::{GeometryError, PerchError, Placement, Rect, Viewport};
use perch_position::{PositionOptions, PositionResult};
use serde::{Deserialize, Serialize};

/// A bounding box from JavaScript.
///
/// Only the origin and size are read, so a serialized `DOMRect` works as is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectJs {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectJs {
    pub fn into_core(self) -> Result<Rect, GeometryError> {
        Rect::try_new(self.x, self.y, self.width, self.height)
    }
}

/// Viewport size from JavaScript, typically `innerWidth`/`innerHeight`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportJs {
    pub width: f64,
    pub height: f64,
}

impl ViewportJs {
    pub fn into_core(self) -> Result<Viewport, GeometryError> {
        Viewport::try_new(self.width, self.height)
    }
}

/// Positioning options from JavaScript. Missing fields take the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionOptionsJs {
    #[serde(default)]
    pub placement: Option<String>,
    #[serde(default)]
    pub offset: Option<f64>,
    #[serde(default)]
    pub padding: Option<f64>,
    #[serde(default)]
    pub flip: Option<bool>,
    #[serde(default)]
    pub shift: Option<bool>,
}

impl PositionOptionsJs {
    pub fn into_core(self) -> Result<PositionOptions, PerchError> {
        let mut opts = PositionOptions::default();
        if let Some(token) = self.placement {
            opts.placement = Placement::parse(&token)?;
        }
        if let Some(offset) = self.offset {
            opts.offset = offset;
        }
        if let Some(padding) = self.padding {
            opts.padding = padding;
        }
        if let Some(flip) = self.flip {
            opts.flip = flip;
        }
        if let Some(shift) = self.shift {
            opts.shift = shift;
        }
        opts.validate()?;
        Ok(opts)
    }
}

/// Result handed back to JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResultJs {
    pub x: f64,
    pub y: f64,
    pub placement: String,
}

impl From<PositionResult> for PositionResultJs {
    fn from(result: PositionResult) -> Self {
        Self {
            x: result.x,
            y: result.y,
            placement: result.placement.to_string(),
        }
    }
}
