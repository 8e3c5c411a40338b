//! Shapes module - abstract shape descriptors and their random generation
//!
//! This module provides:
//! - `ShapeDescriptor` / `ShapeKind`: what a shape is, independent of geometry
//! - `RandomSource`: the injectable seam for all randomness
//! - `ShapeFactory`: random descriptors inside configured bounds

mod descriptor;
mod factory;
pub(crate) mod random;

pub use descriptor::{ShapeDescriptor, ShapeKind};
pub use factory::{ShapeBounds, ShapeFactory};
pub use random::{BoxedRandom, RngSource};
