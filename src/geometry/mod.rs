//! Geometry module - extruded solids for each shape kind
//!
//! This module provides:
//! - `Color` / `Gradient` for face shading
//! - `Face` / `Solid`, the renderer-facing face lists
//! - `GeometryBuilder` trait and the six builders, selected by `builder_for`

mod builders;
mod color;
mod solid;
mod traits;

pub use builders::build;
pub use color::Color;
