//! The six extrusion recipes: Trapezoid, Rectangle, Circle, SemiCircle,
//! Triangle, Teardrop
//!
//! Every recipe produces colored caps at `±thickness / 2` and neutral gray
//! walls between them, with two exceptions:
//! - the semicircle is a fan of thin colored wall quads with no caps
//! - the teardrop is two half-drop caps with no walls (an open solid)
//!
//! Cap colors come from the descriptor's gradient. The trapezoid mixes it at
//! 0.9 (front) and 0.5 (back); every other kind mixes at 0.1.

use std::f32::consts::{PI, TAU};

use super::color::{Color, Gradient};
use super::solid::{Face, Solid};
use super::traits::GeometryBuilder;
use crate::shapes::{ShapeDescriptor, ShapeKind};

/// Gradient mix for caps of every kind except the trapezoid
const CAP_MIX: f32 = 0.1;

/// Trapezoid front cap mix
const TRAPEZOID_FRONT_MIX: f32 = 0.9;

/// Trapezoid back cap mix
const TRAPEZOID_BACK_MIX: f32 = 0.5;

/// Bottom edge width relative to the top edge
const TRAPEZOID_TAPER: f32 = 0.7;

/// Angular segments of the circle's side wall and disc
const CIRCLE_SEGMENTS: usize = 50;

/// Radius and height scale of the circle relative to size/thickness
const CIRCLE_SCALE: f32 = 0.6;

/// Depth at which the circle's colored disc floats
const CIRCLE_DISC_OFFSET: f32 = 20.0;

/// Angular step of the semicircle fan, in radians
const SEMICIRCLE_STEP: f32 = 0.05;

/// Points sampled per span of the teardrop outline
const TEARDROP_SAMPLES_PER_SPAN: usize = 12;

/// Get the builder for a shape kind
pub fn builder_for(kind: ShapeKind) -> &'static dyn GeometryBuilder {
    match kind {
        ShapeKind::Trapezoid => &Trapezoid,
        ShapeKind::Rectangle => &Rectangle,
        ShapeKind::Circle => &Circle,
        ShapeKind::SemiCircle => &SemiCircle,
        ShapeKind::Triangle => &Triangle,
        ShapeKind::Teardrop => &Teardrop,
    }
}

/// Build the placed solid for a descriptor using its kind's builder
pub fn build(descriptor: &ShapeDescriptor) -> Solid {
    builder_for(descriptor.kind).build(descriptor)
}

/// Front and back depth of a descriptor's caps
fn cap_depths(descriptor: &ShapeDescriptor) -> (f32, f32) {
    let half = descriptor.thickness / 2.0;
    (half, -half)
}

/// Push both caps of an outline
fn push_caps(solid: &mut Solid, outline: &[(f32, f32)], front: f32, back: f32, front_fill: Color, back_fill: Color) {
    solid.push(Face::from_outline(outline, front, front_fill));
    solid.push(Face::from_outline(outline, back, back_fill));
}

/// Push one gray wall per outline edge, including the closing edge
fn push_walls(solid: &mut Solid, outline: &[(f32, f32)], front: f32, back: f32) {
    let n = outline.len();
    for i in 0..n {
        solid.push(Face::wall(outline[i], outline[(i + 1) % n], back, front, Color::WALL));
    }
}

/// Points on a circle of `radius`, starting at angle 0
fn ring(radius: f32, segments: usize) -> Vec<(f32, f32)> {
    (0..segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Open uniform Catmull-Rom spline through `control[1..n-1]`
///
/// The first and last control points only steer the end tangents. Each
/// drawn span `p[i] -> p[i+1]` contributes `samples` points starting at
/// `p[i]`, and the final drawn point `p[n-2]` closes the list.
fn catmull_rom_open(control: &[(f32, f32)], samples: usize) -> Vec<(f32, f32)> {
    let n = control.len();
    if n < 4 || samples == 0 {
        return control.to_vec();
    }

    let mut points = Vec::with_capacity((n - 3) * samples + 1);
    for i in 1..n - 2 {
        let (p0, p1, p2, p3) = (control[i - 1], control[i], control[i + 1], control[i + 2]);

        for s in 0..samples {
            let t = s as f32 / samples as f32;
            let t2 = t * t;
            let t3 = t2 * t;
            let blend = |a: f32, b: f32, c: f32, d: f32| -> f32 {
                0.5 * (2.0 * b
                    + (-a + c) * t
                    + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
                    + (-a + 3.0 * b - 3.0 * c + d) * t3)
            };
            points.push((blend(p0.0, p1.0, p2.0, p3.0), blend(p0.1, p1.1, p2.1, p3.1)));
        }
    }
    points.push(control[n - 2]);
    points
}

/// Quadrilateral with a wide top edge (2·size) and a narrower bottom (1.4·size)
pub struct Trapezoid;

impl GeometryBuilder for Trapezoid {
    fn build_local(&self, descriptor: &ShapeDescriptor) -> Solid {
        let s = descriptor.size;
        let (front, back) = cap_depths(descriptor);
        let gradient = Gradient::from_base(descriptor.base_color);

        let outline = [
            (-s, -s / 2.0),
            (s, -s / 2.0),
            (s * TRAPEZOID_TAPER, s / 2.0),
            (-s * TRAPEZOID_TAPER, s / 2.0),
        ];

        let mut solid = Solid::new(self.name());
        push_caps(
            &mut solid,
            &outline,
            front,
            back,
            gradient.mix(TRAPEZOID_FRONT_MIX),
            gradient.mix(TRAPEZOID_BACK_MIX),
        );
        push_walls(&mut solid, &outline, front, back);
        solid
    }

    fn name(&self) -> &'static str {
        "Trapezoid"
    }
}

/// Square of side `size`
pub struct Rectangle;

impl GeometryBuilder for Rectangle {
    fn build_local(&self, descriptor: &ShapeDescriptor) -> Solid {
        let h = descriptor.size / 2.0;
        let (front, back) = cap_depths(descriptor);
        let fill = Gradient::from_base(descriptor.base_color).mix(CAP_MIX);

        let outline = [(-h, -h), (h, -h), (h, h), (-h, h)];

        let mut solid = Solid::new(self.name());
        push_caps(&mut solid, &outline, front, back, fill, fill);
        push_walls(&mut solid, &outline, front, back);
        solid
    }

    fn name(&self) -> &'static str {
        "Rectangle"
    }
}

/// Gray cylinder wall with a floating colored disc
///
/// The cylinder is shorter than the descriptor's thickness and carries no
/// caps of its own; the disc sits in front of it as decoration.
pub struct Circle;

impl GeometryBuilder for Circle {
    fn build_local(&self, descriptor: &ShapeDescriptor) -> Solid {
        let radius = descriptor.size * CIRCLE_SCALE;
        let half_height = descriptor.thickness * CIRCLE_SCALE / 2.0;
        let fill = Gradient::from_base(descriptor.base_color).mix(CAP_MIX);

        let outline = ring(radius, CIRCLE_SEGMENTS);

        let mut solid = Solid::new(self.name());
        push_walls(&mut solid, &outline, half_height, -half_height);
        solid.push(Face::from_outline(&outline, CIRCLE_DISC_OFFSET, fill));
        solid
    }

    fn name(&self) -> &'static str {
        "Circle"
    }
}

/// Half-disc arc of radius `size`, built as a fan of thin wall quads
pub struct SemiCircle;

impl GeometryBuilder for SemiCircle {
    fn build_local(&self, descriptor: &ShapeDescriptor) -> Solid {
        let r = descriptor.size;
        let (front, back) = cap_depths(descriptor);
        let fill = Gradient::from_base(descriptor.base_color).mix(CAP_MIX);

        // Every step whose start angle is <= π, so the last quad slightly overshoots
        let steps = (PI / SEMICIRCLE_STEP).floor() as usize + 1;

        let mut solid = Solid::new(self.name());
        for k in 0..steps {
            let a = k as f32 * SEMICIRCLE_STEP;
            let b = a + SEMICIRCLE_STEP;
            solid.push(Face::wall(
                (r * a.cos(), r * a.sin()),
                (r * b.cos(), r * b.sin()),
                back,
                front,
                fill,
            ));
        }
        solid
    }

    fn name(&self) -> &'static str {
        "Semicircle"
    }
}

/// Triangle with apex at (0, size/2) and base corners at (±size/2, -size/2)
pub struct Triangle;

impl GeometryBuilder for Triangle {
    fn build_local(&self, descriptor: &ShapeDescriptor) -> Solid {
        let h = descriptor.size / 2.0;
        let (front, back) = cap_depths(descriptor);
        let fill = Gradient::from_base(descriptor.base_color).mix(CAP_MIX);

        let outline = [(-h, -h), (h, -h), (0.0, h)];

        let mut solid = Solid::new(self.name());
        push_caps(&mut solid, &outline, front, back, fill, fill);
        push_walls(&mut solid, &outline, front, back);
        solid
    }

    fn name(&self) -> &'static str {
        "Triangle"
    }
}

/// Half drop: a curved edge from the tip around to the bottom, closed by a
/// straight chord back to the tip. Front and back faces only.
pub struct Teardrop;

impl Teardrop {
    /// Curve control points; the first and last only guide the tangents
    fn control_points(size: f32) -> [(f32, f32); 5] {
        [
            (-size / 2.0, size),
            (0.0, 0.0),
            (size / 2.0, size),
            (0.0, size * 2.5),
            (-size / 2.0, size),
        ]
    }
}

impl GeometryBuilder for Teardrop {
    fn build_local(&self, descriptor: &ShapeDescriptor) -> Solid {
        let (front, back) = cap_depths(descriptor);
        let fill = Gradient::from_base(descriptor.base_color).mix(CAP_MIX);

        let outline = catmull_rom_open(
            &Self::control_points(descriptor.size),
            TEARDROP_SAMPLES_PER_SPAN,
        );

        let mut solid = Solid::new(self.name());
        push_caps(&mut solid, &outline, front, back, fill, fill);
        solid
    }

    fn name(&self) -> &'static str {
        "Teardrop"
    }
}
