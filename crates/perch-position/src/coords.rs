//! Base coordinates for a placement, before any flip or shift.

use glam::DVec2;
use perch_core::{Alignment, Placement, Rect, Side};

/// Compute the floating element's top-left corner for a placement.
///
/// The main-axis coordinate puts the floating element flush against the
/// chosen side of the reference. The cross-axis coordinate starts centered
/// and is then overridden by a start or end alignment. Nothing is rounded.
pub fn compute_coords(reference: &Rect, floating: &Rect, placement: Placement) -> DVec2 {
    let mut coords = DVec2::new(
        reference.left + reference.width / 2.0 - floating.width / 2.0,
        reference.top + reference.height / 2.0 - floating.height / 2.0,
    );

    match placement.side {
        Side::Top => coords.y = reference.top - floating.height,
        Side::Bottom => coords.y = reference.bottom,
        Side::Left => coords.x = reference.left - floating.width,
        Side::Right => coords.x = reference.right,
    }

    if placement.side.is_vertical() {
        match placement.alignment {
            Alignment::Start => coords.x = reference.left,
            Alignment::End => coords.x = reference.right - floating.width,
            Alignment::Center => {}
        }
    } else {
        match placement.alignment {
            Alignment::Start => coords.y = reference.top,
            Alignment::End => coords.y = reference.bottom - floating.height,
            Alignment::Center => {}
        }
    }

    coords
}

/// Push coordinates away from the reference by `offset` along the main axis.
///
/// Negative offsets pull the floating element back over the reference.
pub fn apply_offset(coords: DVec2, side: Side, offset: f64) -> DVec2 {
    match side {
        Side::Top => DVec2::new(coords.x, coords.y - offset),
        Side::Bottom => DVec2::new(coords.x, coords.y + offset),
        Side::Left => DVec2::new(coords.x - offset, coords.y),
        Side::Right => DVec2::new(coords.x + offset, coords.y),
    }
}

/// Base coordinates with the offset already applied for the placement's side.
pub fn placed_coords(reference: &Rect, floating: &Rect, placement: Placement, offset: f64) -> DVec2 {
    apply_offset(compute_coords(reference, floating, placement), placement.side, offset)
}
