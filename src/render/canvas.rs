//! Scene canvas widget
//!
//! Draws the revealed shapes as flat-shaded solids inside a rectangle that
//! keeps the canvas aspect ratio. Faces are painted in insertion order with
//! no depth sorting, so later shapes always cover earlier ones.
//!
//! ## Coordinate System
//!
//! Canvas pixels, origin top-left, Y down. The scene origin maps to the
//! canvas centre.

use std::collections::HashSet;

use eframe::egui::{self, Color32, Mesh, Pos2, Rect, Vec2};

use super::camera::Camera;
use crate::animation::CollectiveRotation;
use crate::geometry::{self, Color};
use crate::shapes::ShapeDescriptor;

/// Display settings for the canvas
#[derive(Clone, Debug)]
pub struct CanvasSettings {
    /// Logical canvas width in pixels
    pub width: f32,
    /// Logical canvas height in pixels
    pub height: f32,
    /// Background gray level
    pub background: u8,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
            background: 200,
        }
    }
}

/// A face projected onto the canvas, in canvas pixels
#[derive(Clone, Debug)]
pub struct ProjectedFace {
    pub points: Vec<Pos2>,
    pub fill: Color32,
}

fn color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// The scene widget
pub struct SceneCanvas {
    pub settings: CanvasSettings,
    camera: Camera,
    /// Shapes already reported as unrenderable
    rejected: HashSet<usize>,
    /// Screen rectangle of the last frame
    last_rect: Option<Rect>,
}

impl SceneCanvas {
    pub fn new(settings: CanvasSettings) -> Self {
        let camera = Camera::for_canvas(settings.width, settings.height);
        Self {
            settings,
            camera,
            rejected: HashSet::new(),
            last_rect: None,
        }
    }

    /// Screen rectangle the canvas occupied on the last frame
    pub fn last_rect(&self) -> Option<Rect> {
        self.last_rect
    }

    /// Largest rectangle with the canvas aspect ratio centred in `available`
    pub fn fit(&self, available: Rect) -> Rect {
        let (w, h) = (self.settings.width, self.settings.height);
        if w <= 0.0 || h <= 0.0 {
            return available;
        }
        let scale = (available.width() / w).min(available.height() / h).max(0.0);
        Rect::from_center_size(available.center(), Vec2::new(w * scale, h * scale))
    }

    /// Build, rotate and project every shape, in draw order
    ///
    /// Shapes whose geometry fails validation are skipped and logged once.
    /// Faces with any vertex behind the camera are dropped.
    pub fn project(
        &mut self,
        shapes: &[ShapeDescriptor],
        transform: &CollectiveRotation,
    ) -> Vec<ProjectedFace> {
        let vp = self.camera.view_projection();
        let rotation = transform.rotation();
        let mut projected = Vec::new();

        for (index, shape) in shapes.iter().enumerate() {
            let solid = geometry::build(shape);
            if let Err(e) = solid.validate() {
                if self.rejected.insert(index) {
                    log::warn!("Skipping {} #{}: {}", solid.name, index + 1, e);
                }
                continue;
            }

            projected.reserve(solid.len());
            for face in &solid.faces {
                let points: Option<Vec<Pos2>> = face
                    .vertices
                    .iter()
                    .map(|v| {
                        self.camera
                            .project(&vp, &rotation.transform_point(v))
                            .map(|p| Pos2::new(p.x, p.y))
                    })
                    .collect();
                if let Some(points) = points {
                    projected.push(ProjectedFace {
                        points,
                        fill: color32(face.fill),
                    });
                }
            }
        }
        projected
    }

    /// Show the canvas filling the available space
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        shapes: &[ShapeDescriptor],
        transform: &CollectiveRotation,
    ) -> egui::Response {
        let available = ui.available_rect_before_wrap();
        let rect = self.fit(available);
        let response = ui.allocate_rect(rect, egui::Sense::hover());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, Color32::from_gray(self.settings.background));

        let faces = self.project(shapes, transform);
        let mesh = self.mesh(&faces, rect);
        if !mesh.is_empty() {
            painter.add(egui::Shape::mesh(mesh));
        }

        self.last_rect = Some(rect);
        response
    }

    /// Triangulate projected faces into a single mesh mapped onto `rect`
    ///
    /// Each face becomes a fan around its centroid. Triangle order follows
    /// face order, which keeps painter's order intact.
    pub fn mesh(&self, faces: &[ProjectedFace], rect: Rect) -> Mesh {
        let scale = Vec2::new(
            rect.width() / self.settings.width.max(f32::EPSILON),
            rect.height() / self.settings.height.max(f32::EPSILON),
        );
        let to_screen = |p: Pos2| rect.min + Vec2::new(p.x * scale.x, p.y * scale.y);

        let mut mesh = Mesh::default();
        for face in faces {
            if face.points.len() < 3 {
                continue;
            }
            let n = face.points.len() as f32;
            let sum = face
                .points
                .iter()
                .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
            let centre = (sum / n).to_pos2();

            let base = mesh.vertices.len() as u32;
            mesh.colored_vertex(to_screen(centre), face.fill);
            for p in &face.points {
                mesh.colored_vertex(to_screen(*p), face.fill);
            }
            let count = face.points.len() as u32;
            for i in 0..count {
                let a = base + 1 + i;
                let b = base + 1 + (i + 1) % count;
                mesh.add_triangle(base, a, b);
            }
        }
        mesh
    }
}
