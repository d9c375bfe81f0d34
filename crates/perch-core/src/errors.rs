//! Error types for the Perch engine.

use thiserror::Error;

/// Top-level error type for the Perch engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerchError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// Errors while parsing a placement token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("Unknown side '{found}' in placement '{token}': expected top, bottom, left or right")]
    UnknownSide { token: String, found: String },

    #[error("Unknown alignment '{found}' in placement '{token}': expected start, center or end")]
    UnknownAlignment { token: String, found: String },

    #[error("Malformed placement '{token}': expected 'side' or 'side-alignment'")]
    Malformed { token: String },
}

/// Errors in caller-supplied geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Rectangle field '{field}' is not finite: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Rectangle edge '{field}' is {value} but origin and size give {expected}")]
    InconsistentEdge { field: &'static str, value: f64, expected: f64 },

    #[error("Rectangle has negative size: {width}x{height}")]
    NegativeSize { width: f64, height: f64 },

    #[error("Invalid viewport {width}x{height}: dimensions must be finite and positive")]
    InvalidViewport { width: f64, height: f64 },
}

/// Errors in positioning options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("Offset is not finite: {0}")]
    NonFiniteOffset(f64),

    #[error("Padding is not finite: {0}")]
    NonFinitePadding(f64),

    #[error("Padding must not be negative: {0}")]
    NegativePadding(f64),
}
