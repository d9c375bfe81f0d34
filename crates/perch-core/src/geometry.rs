//! Rectangles and viewport dimensions.
//!
//! Everything here is in fixed-position viewport coordinates: the origin is the
//! top-left corner of the viewport, x grows to the right and y grows downward.

use glam::DVec2;

use crate::errors::GeometryError;

/// Slack allowed between an edge field and the edge derived from origin and size.
const EDGE_TOLERANCE: f64 = 1e-6;

/// Axis-aligned bounding box, usually a snapshot of an element's client rect.
///
/// The redundant edge fields mirror the shape of a DOM rect so callers can copy
/// values across without arithmetic. Construct through [`Rect::new`] to keep
/// `right = left + width` and `bottom = top + height`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    /// Create a rect from its origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            top: y,
            right: x + width,
            bottom: y + height,
            left: x,
        }
    }

    /// Create a rect, rejecting non-finite values and negative sizes.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        for (field, value) in [("x", x), ("y", y), ("width", width), ("height", height)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { field, value });
            }
        }
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeSize { width, height });
        }
        Ok(Self::new(x, y, width, height))
    }

    /// Create a rect at the origin with the given size.
    ///
    /// Handy for floating elements, whose current position is never read.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Check every field: all finite, non-negative size, and edges that agree
    /// with the origin and size.
    ///
    /// The engine reads the edge fields, so a rect built by hand or
    /// deserialized field by field must keep them consistent.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let fields = [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ];
        let expected = Self::try_new(self.x, self.y, self.width, self.height)?;
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { field, value });
            }
        }

        let derived = [expected.top, expected.right, expected.bottom, expected.left];
        for ((field, value), expected) in fields.into_iter().zip(derived) {
            if (value - expected).abs() > EDGE_TOLERANCE {
                return Err(GeometryError::InconsistentEdge { field, value, expected });
            }
        }
        Ok(())
    }

    /// Top-left corner.
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    /// Width and height.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Center point.
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }
}

/// Size of the visible viewport the floating element must stay inside.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a viewport, rejecting non-finite or non-positive dimensions.
    pub fn try_new(width: f64, height: f64) -> Result<Self, GeometryError> {
        let viewport = Self::new(width, height);
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(GeometryError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}
