//! Options accepted by [`compute_position`](crate::compute_position).

use perch_core::{OptionsError, Placement};

/// Positioning options.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PositionOptions {
    /// Requested placement; the result may differ after flipping
    pub placement: Placement,
    /// Gap between reference and floating element along the main axis
    pub offset: f64,
    /// Minimum margin kept from each viewport edge
    pub padding: f64,
    /// Swap side or alignment when that reduces overflow
    pub flip: bool,
    /// Clamp the cross axis into the padded viewport
    pub shift: bool,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            offset: 0.0,
            padding: 8.0,
            flip: true,
            shift: true,
        }
    }
}

impl PositionOptions {
    /// Options for a placement, every other field at its default.
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            ..Default::default()
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Reject offsets and paddings that would poison the arithmetic.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.offset.is_finite() {
            return Err(OptionsError::NonFiniteOffset(self.offset));
        }
        if !self.padding.is_finite() {
            return Err(OptionsError::NonFinitePadding(self.padding));
        }
        if self.padding < 0.0 {
            return Err(OptionsError::NegativePadding(self.padding));
        }
        Ok(())
    }
}
