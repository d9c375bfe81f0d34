//! Floating-element positioning for popovers, dropdowns, and tooltips.
//!
//! Given the bounding box of a reference element, the size of a floating
//! element, and the viewport size, this crate computes where the floating
//! element goes in fixed-position coordinates.
//!
//! # Pipeline
//!
//! 1. **Coordinates**: place the floating element against the requested side
//!    with the requested alignment, then push it away by the offset
//! 2. **Flip**: if the main axis overflows, try the opposite side; then, if
//!    the cross axis overflows, try the opposite alignment
//! 3. **Shift**: nudge along the cross axis to keep the padding margin
//!
//! # Example
//!
//! ```
//! use perch_position::{compute_position, PositionOptions};
//! use perch_core::{Placement, Rect, Viewport};
//!
//! let reference = Rect::new(0.0, 160.0, 100.0, 100.0);
//! let floating = Rect::from_size(50.0, 50.0);
//! let options = PositionOptions::default().with_placement("bottom".parse()?);
//!
//! let result = compute_position(&reference, &floating, Viewport::new(1000.0, 200.0), &options);
//! assert_eq!(result.placement.to_string(), "top");
//! assert_eq!((result.x, result.y), (25.0, 110.0));
//! # Ok::<(), perch_core::PlacementError>(())
//! ```

mod compute;
mod coords;
mod flip;
mod options;
mod overflow;
mod shift;

pub use compute::{compute_position, try_compute_position, PositionResult};
pub use coords::{apply_offset, compute_coords, placed_coords};
pub use flip::{flip_alignment, flip_side, Candidate};
pub use options::PositionOptions;
pub use overflow::{compute_overflow, Overflow};
pub use shift::shift_cross_axis;
