//! Solids - ordered lists of colored planar faces
//!
//! ## Coordinate System
//!
//! Local coordinates follow the sketch canvas:
//! - X: Right
//! - Y: Down (an outline's "top" edge has the smaller Y)
//! - Z: Depth; front caps sit at `+thickness / 2`, back caps at `-thickness / 2`
//!
//! Faces are drawn in list order (painter's algorithm), so builders emit them
//! back-to-front in the order the shape should layer.

use nalgebra::{Isometry3, Point3};
use thiserror::Error;

use super::color::Color;

/// Problems that make a solid unsafe to hand to a renderer
#[derive(Error, Debug, PartialEq)]
pub enum GeometryError {
    #[error("Solid has no faces")]
    EmptySolid,

    #[error("Face {face} has only {vertices} vertices")]
    DegenerateFace { face: usize, vertices: usize },

    #[error("Face {face} has a non-finite vertex")]
    NonFiniteVertex { face: usize },
}

/// A closed planar vertex loop with one fill color
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    /// Vertices in loop order (the last connects back to the first)
    pub vertices: Vec<Point3<f32>>,
    /// Fill color
    pub fill: Color,
}

impl Face {
    /// Create a face from vertices and a fill color
    pub fn new(vertices: Vec<Point3<f32>>, fill: Color) -> Self {
        Self { vertices, fill }
    }

    /// Build a face from a 2D outline lifted to depth `z`
    pub fn from_outline(outline: &[(f32, f32)], z: f32, fill: Color) -> Self {
        let vertices = outline.iter().map(|&(x, y)| Point3::new(x, y, z)).collect();
        Self::new(vertices, fill)
    }

    /// The quad spanning edge `a -> b` between depths `z_back` and `z_front`
    pub fn wall(a: (f32, f32), b: (f32, f32), z_back: f32, z_front: f32, fill: Color) -> Self {
        Self::new(
            vec![
                Point3::new(a.0, a.1, z_back),
                Point3::new(b.0, b.1, z_back),
                Point3::new(b.0, b.1, z_front),
                Point3::new(a.0, a.1, z_front),
            ],
            fill,
        )
    }
}

/// An ordered set of faces approximating one extruded shape
#[derive(Clone, Debug, PartialEq)]
pub struct Solid {
    /// Faces in draw order
    pub faces: Vec<Face>,
    /// Name of the recipe that produced this solid
    pub name: &'static str,
}

impl Solid {
    /// Create an empty solid
    pub fn new(name: &'static str) -> Self {
        Self {
            faces: Vec::new(),
            name,
        }
    }

    /// Append a face
    pub fn push(&mut self, face: Face) -> &mut Self {
        self.faces.push(face);
        self
    }

    /// Number of faces
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether the solid has no faces
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Apply a rigid transform to every vertex
    pub fn transform(&mut self, isometry: &Isometry3<f32>) {
        for face in &mut self.faces {
            for v in &mut face.vertices {
                *v = isometry.transform_point(v);
            }
        }
    }

    /// Check that every face is usable
    ///
    /// Coincident vertices (e.g. a zero-size shape) are allowed; the face is
    /// degenerate but harmless to draw.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.is_empty() {
            return Err(GeometryError::EmptySolid);
        }
        for (i, face) in self.faces.iter().enumerate() {
            if face.vertices.len() < 3 {
                return Err(GeometryError::DegenerateFace {
                    face: i,
                    vertices: face.vertices.len(),
                });
            }
            if face
                .vertices
                .iter()
                .any(|v| !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()))
            {
                return Err(GeometryError::NonFiniteVertex { face: i });
            }
        }
        Ok(())
    }
}
