//! Position computation from reference, floating element, and viewport.

use glam::DVec2;
use log::trace;
use perch_core::{PerchError, Placement, Rect, Viewport};

use crate::flip::{flip_alignment, flip_side, Candidate};
use crate::options::PositionOptions;
use crate::shift::shift_cross_axis;

/// Where to put the floating element.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionResult {
    /// Left edge in viewport coordinates
    pub x: f64,
    /// Top edge in viewport coordinates
    pub y: f64,
    /// Placement actually used, which differs from the request after a flip
    pub placement: Placement,
}

impl PositionResult {
    pub fn point(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Copy with coordinates snapped to whole pixels.
    pub fn rounded(&self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
            placement: self.placement,
        }
    }

    /// Inline style for a `position: fixed` element.
    pub fn to_css(&self) -> String {
        format!("left: {}px; top: {}px;", self.x, self.y)
    }

    /// True when the resolved placement differs from `requested`.
    pub fn was_flipped(&self, requested: Placement) -> bool {
        self.placement != requested
    }
}

/// Compute the position of `floating` next to `reference` inside `viewport`.
///
/// Runs the base placement, the offset, the side and alignment flips (if
/// enabled), and the cross-axis shift (if enabled), in that order. Only the
/// size of `floating` is read.
pub fn compute_position(
    reference: &Rect,
    floating: &Rect,
    viewport: Viewport,
    options: &PositionOptions,
) -> PositionResult {
    let mut candidate = Candidate::place(reference, floating, options.placement, options.offset);

    if options.flip {
        candidate = flip_side(candidate, reference, floating, viewport, options);
        candidate = flip_alignment(candidate, reference, floating, viewport, options);
    }

    let coords = if options.shift {
        shift_cross_axis(candidate, floating, viewport, options.padding)
    } else {
        candidate.coords
    };

    trace!(
        "position {} -> {} at ({}, {})",
        options.placement, candidate.placement, coords.x, coords.y
    );

    PositionResult {
        x: coords.x,
        y: coords.y,
        placement: candidate.placement,
    }
}

/// Validate the inputs, then [`compute_position`].
pub fn try_compute_position(
    reference: &Rect,
    floating: &Rect,
    viewport: Viewport,
    options: &PositionOptions,
) -> Result<PositionResult, PerchError> {
    reference.validate()?;
    floating.validate()?;
    viewport.validate()?;
    options.validate()?;
    Ok(compute_position(reference, floating, viewport, options))
}
