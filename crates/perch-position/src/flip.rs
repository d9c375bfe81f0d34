//! Side and alignment flipping.
//!
//! Both decisions compare the overflow of the current candidate against the
//! overflow of its mirror image and adopt the mirror only when it is strictly
//! smaller. Ties keep the current candidate.

use glam::DVec2;
use log::{debug, trace};
use perch_core::{Placement, Rect, Viewport};

use crate::coords::placed_coords;
use crate::options::PositionOptions;
use crate::overflow::compute_overflow;

/// A placement and the coordinates it resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub coords: DVec2,
    pub placement: Placement,
}

impl Candidate {
    /// The candidate for `placement` with the offset applied.
    pub fn place(reference: &Rect, floating: &Rect, placement: Placement, offset: f64) -> Self {
        Self {
            coords: placed_coords(reference, floating, placement, offset),
            placement,
        }
    }
}

/// Move to the opposite side if the main axis overflows and the other side
/// overflows less.
///
/// The flipped candidate is recomputed from scratch, offset included, rather
/// than mirrored from the current coordinates.
pub fn flip_side(
    current: Candidate,
    reference: &Rect,
    floating: &Rect,
    viewport: Viewport,
    options: &PositionOptions,
) -> Candidate {
    let size = floating.size();
    let overflow = compute_overflow(current.coords, size, viewport, options.padding)
        .toward(current.placement.side);
    if overflow <= 0.0 {
        return current;
    }

    let flipped = Candidate::place(reference, floating, current.placement.flip_side(), options.offset);
    let flipped_overflow = compute_overflow(flipped.coords, size, viewport, options.padding)
        .toward(flipped.placement.side);

    if flipped_overflow < overflow {
        debug!(
            "flip side {} -> {}: main-axis overflow {} -> {}",
            current.placement, flipped.placement, overflow, flipped_overflow
        );
        flipped
    } else {
        trace!(
            "keep side {}: main-axis overflow {} vs {} on {}",
            current.placement, overflow, flipped_overflow, flipped.placement
        );
        current
    }
}

/// Swap start and end alignment if the cross axis overflows and the other
/// alignment overflows less.
///
/// Only the cross-axis coordinate moves; the main-axis coordinate of
/// `current` (offset included) is kept as is. Centered placements never flip.
pub fn flip_alignment(
    current: Candidate,
    reference: &Rect,
    floating: &Rect,
    viewport: Viewport,
    options: &PositionOptions,
) -> Candidate {
    let size = floating.size();
    let Some(overflow) =
        compute_overflow(current.coords, size, viewport, options.padding).cross(current.placement)
    else {
        return current;
    };
    if overflow <= 0.0 {
        return current;
    }

    let placement = current.placement.flip_alignment();
    let mirrored = placed_coords(reference, floating, placement, options.offset);
    let coords = if placement.side.is_vertical() {
        DVec2::new(mirrored.x, current.coords.y)
    } else {
        DVec2::new(current.coords.x, mirrored.y)
    };

    match compute_overflow(coords, size, viewport, options.padding).cross(placement) {
        Some(flipped_overflow) if flipped_overflow < overflow => {
            debug!(
                "flip alignment {} -> {}: cross-axis overflow {} -> {}",
                current.placement, placement, overflow, flipped_overflow
            );
            Candidate { coords, placement }
        }
        _ => current,
    }
}
