//! Geometry builder trait definition
//!
//! A `GeometryBuilder` turns a `ShapeDescriptor` into a `Solid`. Builders are
//! stateless; the descriptor is always passed in explicitly, and the kind of
//! a descriptor selects its builder through `builder_for`.

use nalgebra::{Isometry3, Vector3};

use super::solid::Solid;
use crate::shapes::ShapeDescriptor;

/// A recipe that extrudes one shape kind into faces
///
/// Implementors only describe the shape in local coordinates (centered on
/// the origin, unrotated). Placement is shared by every kind and provided
/// by the default `build` method.
pub trait GeometryBuilder: Send + Sync {
    /// Build the solid in local coordinates
    fn build_local(&self, descriptor: &ShapeDescriptor) -> Solid;

    /// Get the name of this recipe
    fn name(&self) -> &'static str;

    /// Build the solid and move it into scene coordinates
    ///
    /// Given the same descriptor, the result is always identical.
    fn build(&self, descriptor: &ShapeDescriptor) -> Solid {
        let mut solid = self.build_local(descriptor);
        solid.transform(&placement(descriptor));
        solid
    }
}

/// Local-to-scene transform of a descriptor
///
/// Translate to `position`, then rotate about the depth axis by
/// `planar_rotation` (so local points are rotated first, then offset).
pub fn placement(descriptor: &ShapeDescriptor) -> Isometry3<f32> {
    Isometry3::new(
        descriptor.position.coords,
        Vector3::z() * descriptor.planar_rotation,
    )
}
