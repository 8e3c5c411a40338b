//! Shape descriptors - the abstract, immutable description of one shape
//!
//! A descriptor says *what* to draw (kind, placement, size, color). The
//! geometry builders turn it into faces on demand.

use nalgebra::Point3;

use crate::geometry::Color;

/// The six supported shape kinds
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ShapeKind {
    Trapezoid,
    Rectangle,
    Circle,
    SemiCircle,
    Triangle,
    Teardrop,
}

impl ShapeKind {
    /// Get all shape kinds
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Trapezoid,
            ShapeKind::Rectangle,
            ShapeKind::Circle,
            ShapeKind::SemiCircle,
            ShapeKind::Triangle,
            ShapeKind::Teardrop,
        ]
    }

    /// Get the display name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Trapezoid => "Trapezoid",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::SemiCircle => "Semicircle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Teardrop => "Teardrop",
        }
    }
}

/// One generated shape
///
/// Descriptors are `Copy` and never mutated once placed in the registry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeDescriptor {
    /// Which geometry recipe to use
    pub kind: ShapeKind,
    /// Center of the shape in scene coordinates
    pub position: Point3<f32>,
    /// Rotation about the depth (Z) axis, in [0, 2π)
    pub planar_rotation: f32,
    /// Characteristic size of the outline
    pub size: f32,
    /// Extrusion depth
    pub thickness: f32,
    /// Base fill color (gradient source)
    pub base_color: Color,
}

impl ShapeDescriptor {
    /// Create a descriptor at the origin with no rotation
    pub fn new(kind: ShapeKind, size: f32, thickness: f32, base_color: Color) -> Self {
        Self {
            kind,
            position: Point3::origin(),
            planar_rotation: 0.0,
            size,
            thickness,
            base_color,
        }
    }

    /// Place the descriptor (builder pattern)
    pub fn at(mut self, position: Point3<f32>) -> Self {
        self.position = position;
        self
    }

    /// Rotate the descriptor about the depth axis (builder pattern)
    pub fn rotated(mut self, angle: f32) -> Self {
        self.planar_rotation = angle;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_distinct() {
        let kinds = ShapeKind::all();
        assert_eq!(kinds.len(), 6);
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_builder_methods() {
        let d = ShapeDescriptor::new(ShapeKind::Circle, 120.0, 20.0, Color::gray(9))
            .at(Point3::new(1.0, 2.0, 3.0))
            .rotated(0.5);
        assert_eq!(d.position, Point3::new(1.0, 2.0, 3.0));
        assert!((d.planar_rotation - 0.5).abs() < 1e-6);
        assert_eq!(d.kind, ShapeKind::Circle);
    }
}
