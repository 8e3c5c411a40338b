//! Perspective camera for the sketch canvas
//!
//! The eye sits on the +Z axis at the distance where the z = 0 plane maps
//! one-to-one onto canvas pixels. Canvas Y points down, so projected Y is
//! not flipped when mapped to the screen.

use std::f32::consts::PI;

use nalgebra::{Matrix4, Point2, Point3, Vector3};

/// Default vertical field of view (60 degrees)
pub const DEFAULT_FOV: f32 = PI / 3.0;

/// Camera looking at the canvas centre
#[derive(Clone, Debug)]
pub struct Camera {
    /// Camera position
    pub position: Point3<f32>,
    /// Point the camera is looking at
    pub target: Point3<f32>,
    /// Up vector
    pub up: Vector3<f32>,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Canvas size in pixels (width, height)
    canvas: (f32, f32),
}

impl Camera {
    /// Camera framing a canvas of the given size
    pub fn for_canvas(width: f32, height: f32) -> Self {
        let fov = DEFAULT_FOV;
        let distance = eye_distance(height, fov);
        Self {
            position: Point3::new(0.0, 0.0, distance),
            target: Point3::origin(),
            up: Vector3::y(),
            fov,
            near: distance / 10.0,
            far: distance * 10.0,
            canvas: (width, height),
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix (perspective)
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let aspect = if self.canvas.1 > 0.0 {
            self.canvas.0 / self.canvas.1
        } else {
            1.0
        };
        Matrix4::new_perspective(aspect, self.fov, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a scene point to canvas pixels
    ///
    /// Returns `None` for points at or behind the near plane.
    pub fn project(&self, vp: &Matrix4<f32>, point: &Point3<f32>) -> Option<Point2<f32>> {
        let clip = vp * point.to_homogeneous();
        if !(clip.w > self.near * 0.5) {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        Some(Point2::new(
            (ndc_x + 1.0) * 0.5 * self.canvas.0,
            (ndc_y + 1.0) * 0.5 * self.canvas.1,
        ))
    }
}

/// Eye distance at which the z = 0 plane spans exactly `height` pixels
fn eye_distance(height: f32, fov: f32) -> f32 {
    let d = (height * 0.5) / (fov * 0.5).tan();
    if d.is_finite() && d > 0.0 {
        d
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point2<f32>, x: f32, y: f32) -> bool {
        (a.x - x).abs() < 0.05 && (a.y - y).abs() < 0.05
    }

    #[test]
    fn test_eye_distance_matches_sketch_default() {
        let camera = Camera::for_canvas(1080.0, 1920.0);
        let expected = 960.0 / (PI / 6.0).tan();
        assert!((camera.position.z - expected).abs() < 1e-2);
    }

    #[test]
    fn test_z_zero_plane_maps_to_pixels() {
        let camera = Camera::for_canvas(1080.0, 1920.0);
        let vp = camera.view_projection();

        let centre = camera.project(&vp, &Point3::origin()).unwrap();
        assert!(close(centre, 540.0, 960.0));

        // Y down: positive y lands below the centre
        let lower_right = camera.project(&vp, &Point3::new(100.0, 200.0, 0.0)).unwrap();
        assert!(close(lower_right, 640.0, 1160.0));
    }

    #[test]
    fn test_nearer_points_look_larger() {
        let camera = Camera::for_canvas(1080.0, 1920.0);
        let vp = camera.view_projection();
        let far = camera.project(&vp, &Point3::new(100.0, 0.0, -300.0)).unwrap();
        let near = camera.project(&vp, &Point3::new(100.0, 0.0, 300.0)).unwrap();
        assert!(near.x - 540.0 > far.x - 540.0);
    }

    #[test]
    fn test_points_behind_camera_are_rejected() {
        let camera = Camera::for_canvas(1080.0, 1920.0);
        let vp = camera.view_projection();
        let behind = Point3::new(0.0, 0.0, camera.position.z + 10.0);
        assert!(camera.project(&vp, &behind).is_none());
    }
}
