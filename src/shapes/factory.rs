//! Shape factory - random descriptors inside configured bounds
//!
//! Positions are chosen so that a shape of `max_size` centered anywhere in the
//! allowed range stays clear of the canvas margin. Depth is only limited by
//! the canvas width and never checked against the margin.

use std::f32::consts::TAU;

use nalgebra::Point3;

use super::descriptor::{ShapeDescriptor, ShapeKind};
use super::random::BoxedRandom;

/// Fixed ranges for everything the factory randomizes
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeBounds {
    /// Canvas width in scene units
    pub canvas_width: f32,
    /// Canvas height in scene units
    pub canvas_height: f32,
    /// Distance kept clear along every canvas edge
    pub margin: f32,
    /// Largest extent assumed when keeping shapes inside the margin
    pub max_size: f32,
    /// Outline size range
    pub size: (f32, f32),
    /// Extrusion depth range
    pub thickness: (f32, f32),
}

impl Default for ShapeBounds {
    fn default() -> Self {
        Self {
            canvas_width: 1080.0,
            canvas_height: 1920.0,
            margin: 200.0,
            max_size: 360.0,
            size: (100.0, 300.0),
            thickness: (10.0, 45.0),
        }
    }
}

impl ShapeBounds {
    /// Largest |x| a shape center may take
    ///
    /// Collapses to 0 when the canvas is too small for the margin.
    pub fn x_limit(&self) -> f32 {
        Self::limit(self.canvas_width, self.margin, self.max_size)
    }

    /// Largest |y| a shape center may take
    pub fn y_limit(&self) -> f32 {
        Self::limit(self.canvas_height, self.margin, self.max_size)
    }

    /// Largest |z| a shape center may take
    pub fn z_limit(&self) -> f32 {
        (self.canvas_width / 2.0).max(0.0)
    }

    fn limit(extent: f32, margin: f32, max_size: f32) -> f32 {
        (extent / 2.0 - margin - max_size / 2.0).max(0.0)
    }
}

/// Produces one random descriptor per call
pub struct ShapeFactory {
    bounds: ShapeBounds,
    random: BoxedRandom,
}

impl ShapeFactory {
    /// Create a factory drawing from `random` within `bounds`
    pub fn new(bounds: ShapeBounds, random: BoxedRandom) -> Self {
        Self { bounds, random }
    }

    /// Create a new random descriptor
    pub fn create(&mut self) -> ShapeDescriptor {
        let kinds = ShapeKind::all();
        let kind = kinds[self.random.pick(kinds.len())];

        let x_limit = self.bounds.x_limit();
        let y_limit = self.bounds.y_limit();
        let z_limit = self.bounds.z_limit();

        let x = self.random.range(-x_limit, x_limit);
        let y = self.random.range(-y_limit, y_limit);
        let z = self.random.range(-z_limit, z_limit);
        let planar_rotation = self.random.range(0.0, TAU);
        let size = self.random.range(self.bounds.size.0, self.bounds.size.1);
        let base_color = self.random.color();
        let thickness = self.random.range(self.bounds.thickness.0, self.bounds.thickness.1);

        ShapeDescriptor {
            kind,
            position: Point3::new(x, y, z),
            planar_rotation,
            size,
            thickness,
            base_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::random::testing::ScriptedSource;
    use crate::shapes::random::RngSource;

    #[test]
    fn test_default_limits() {
        let bounds = ShapeBounds::default();
        assert!((bounds.x_limit() - 160.0).abs() < 0.001);
        assert!((bounds.y_limit() - 580.0).abs() < 0.001);
        assert!((bounds.z_limit() - 540.0).abs() < 0.001);
    }

    #[test]
    fn test_small_canvas_collapses_to_center() {
        let bounds = ShapeBounds {
            canvas_width: 300.0,
            canvas_height: 300.0,
            ..Default::default()
        };
        assert_eq!(bounds.x_limit(), 0.0);
        assert_eq!(bounds.y_limit(), 0.0);

        let mut factory = ShapeFactory::new(bounds, Box::new(RngSource::seeded(3)));
        for _ in 0..50 {
            let d = factory.create();
            assert_eq!(d.position.x, 0.0);
            assert_eq!(d.position.y, 0.0);
        }
    }

    #[test]
    fn test_descriptors_respect_ranges() {
        let bounds = ShapeBounds::default();
        let mut factory = ShapeFactory::new(bounds.clone(), Box::new(RngSource::seeded(42)));

        for _ in 0..2000 {
            let d = factory.create();
            assert!(d.size >= 100.0 && d.size <= 300.0);
            assert!(d.thickness >= 10.0 && d.thickness <= 45.0);
            assert!(d.planar_rotation >= 0.0 && d.planar_rotation < TAU);
            assert!(d.position.x.abs() <= bounds.x_limit());
            assert!(d.position.y.abs() <= bounds.y_limit());
            assert!(d.position.z.abs() <= bounds.z_limit());

            // The whole max-size footprint stays inside the margin
            let half_w = bounds.canvas_width / 2.0 - bounds.margin;
            let half_h = bounds.canvas_height / 2.0 - bounds.margin;
            assert!(d.position.x.abs() + bounds.max_size / 2.0 <= half_w + 0.001);
            assert!(d.position.y.abs() + bounds.max_size / 2.0 <= half_h + 0.001);
        }
    }

    #[test]
    fn test_every_kind_is_produced() {
        let mut factory = ShapeFactory::new(ShapeBounds::default(), Box::new(RngSource::seeded(5)));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(factory.create().kind);
        }
        assert_eq!(seen.len(), ShapeKind::all().len());
    }

    #[test]
    fn test_scripted_draws_map_to_fields() {
        // kind, x, y, z, rotation, size, color, thickness
        let script = vec![0.5, 0.0, 0.5, 0.75, 0.25, 0.5, 0.0, 1.0 - f32::EPSILON];
        let mut factory = ShapeFactory::new(
            ShapeBounds::default(),
            Box::new(ScriptedSource::new(script)),
        );
        let d = factory.create();
        assert_eq!(d.kind, ShapeKind::SemiCircle);
        assert!((d.position.x - (-160.0)).abs() < 0.001);
        assert!(d.position.y.abs() < 0.001);
        assert!((d.position.z - 270.0).abs() < 0.001);
        assert!((d.planar_rotation - TAU / 4.0).abs() < 0.001);
        assert!((d.size - 200.0).abs() < 0.001);
        assert!((d.thickness - 45.0).abs() < 0.001);
    }
}
