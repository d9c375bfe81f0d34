//! Signed overflow past each viewport edge.

use glam::DVec2;
use perch_core::{Alignment, Placement, Side, Viewport};

/// How far the floating element crosses into the padding margin of each edge.
///
/// Positive values overflow by that many pixels; zero or negative values are
/// inside the padded viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overflow {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Overflow {
    /// Overflow on the edge a floating element placed on `side` extends toward.
    pub fn toward(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Overflow on the cross-axis edge a side+alignment is prone to cross.
    ///
    /// A start-aligned element grows toward the right (or bottom) edge and an
    /// end-aligned one toward the left (or top). Centered placements have no
    /// preferred direction and return `None`.
    pub fn cross(&self, placement: Placement) -> Option<f64> {
        match (placement.side.is_vertical(), placement.alignment) {
            (_, Alignment::Center) => None,
            (true, Alignment::Start) => Some(self.right),
            (true, Alignment::End) => Some(self.left),
            (false, Alignment::Start) => Some(self.bottom),
            (false, Alignment::End) => Some(self.top),
        }
    }

    /// True when no edge overflows.
    pub fn fits(&self) -> bool {
        self.top <= 0.0 && self.bottom <= 0.0 && self.left <= 0.0 && self.right <= 0.0
    }
}

/// Compute overflow for a floating element of `size` with its corner at `coords`.
pub fn compute_overflow(coords: DVec2, size: DVec2, viewport: Viewport, padding: f64) -> Overflow {
    Overflow {
        top: padding - coords.y,
        bottom: coords.y + size.y - viewport.height + padding,
        left: padding - coords.x,
        right: coords.x + size.x - viewport.width + padding,
    }
}
