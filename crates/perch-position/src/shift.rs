//! Cross-axis shifting into the padded viewport.

use glam::DVec2;
use log::trace;
use perch_core::{Rect, Viewport};

use crate::flip::Candidate;
use crate::overflow::compute_overflow;

/// Slide the candidate along its cross axis until it respects `padding`.
///
/// The main-axis coordinate and the placement are never changed. When the
/// floating element is too large to fit, both edges overflow and the left (or
/// top) correction wins.
pub fn shift_cross_axis(
    candidate: Candidate,
    floating: &Rect,
    viewport: Viewport,
    padding: f64,
) -> DVec2 {
    let overflow = compute_overflow(candidate.coords, floating.size(), viewport, padding);
    let mut coords = candidate.coords;

    if candidate.placement.side.is_vertical() {
        if overflow.left > 0.0 {
            coords.x += overflow.left;
        } else if overflow.right > 0.0 {
            coords.x -= overflow.right;
        }
    } else if overflow.top > 0.0 {
        coords.y += overflow.top;
    } else if overflow.bottom > 0.0 {
        coords.y -= overflow.bottom;
    }

    if coords != candidate.coords {
        trace!(
            "shift {}: ({}, {}) -> ({}, {})",
            candidate.placement, candidate.coords.x, candidate.coords.y, coords.x, coords.y
        );
    }
    coords
}
