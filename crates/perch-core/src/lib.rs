//! Core types for the Perch floating-element positioning engine.
//!
//! This crate provides the value types shared by the engine and its bindings:
//! - Rectangles and viewport dimensions in fixed (viewport) coordinates
//! - Sides, alignments, and the twelve placement tokens
//! - Error types

pub mod errors;
pub mod geometry;
pub mod placement;

pub use errors::*;
pub use geometry::*;
pub use placement::*;

pub use glam::DVec2;
