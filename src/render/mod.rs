//! Render module - drawing and recording the scene
//!
//! This module provides:
//! - A perspective camera matching the sketch canvas
//! - The egui scene canvas (flat-shaded faces, painter's order)
//! - PNG frame capture

mod camera;
mod canvas;
mod capture;

pub use canvas::{CanvasSettings, SceneCanvas};
pub use capture::FrameCapture;
