//! extrude-rs - Extruded shape reveal animation
//!
//! Shapes appear one at a time at random positions, sizes and colours,
//! then the whole collection performs a single collective rotation and
//! the animation halts on its final frame.
//!
//! ## Controls
//! - `C`: start/stop recording frames as PNG files

use eframe::egui;

mod animation;
mod geometry;
mod render;
mod settings;
mod shapes;

use animation::{Animation, CollectiveRotation, Phase};
use render::{CanvasSettings, FrameCapture, SceneCanvas};
use settings::AnimationSettings;
use shapes::ShapeKind;

/// Initial window height; width follows the canvas aspect ratio
const WINDOW_HEIGHT: f32 = 900.0;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting extrude-rs");

    let settings = AnimationSettings::load().validated();
    let aspect = if settings.canvas_height > 0.0 {
        settings.canvas_width / settings.canvas_height
    } else {
        1.0
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_HEIGHT * aspect, WINDOW_HEIGHT + 32.0])
            .with_title("extrude-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "extrude-rs",
        options,
        Box::new(move |cc| Ok(Box::new(ExtrudeApp::new(cc, settings)))),
    )
}

/// Main application state
struct ExtrudeApp {
    settings: AnimationSettings,
    animation: Animation,
    canvas: SceneCanvas,
    capture: FrameCapture,
    /// Frame number of the last tick
    frame: u64,
    /// Collective transform of the last tick
    transform: CollectiveRotation,
    /// Kind of the most recently revealed shape
    last_revealed: Option<ShapeKind>,
    /// Stop recording once the final frame's screenshot arrives
    finish_capture: bool,
}

impl ExtrudeApp {
    fn new(_cc: &eframe::CreationContext<'_>, settings: AnimationSettings) -> Self {
        let animation = Animation::from_settings(&settings);
        let canvas = SceneCanvas::new(CanvasSettings {
            width: settings.canvas_width,
            height: settings.canvas_height,
            background: settings.background,
        });
        let capture = FrameCapture::new(settings.capture_dir.clone());

        Self {
            settings,
            animation,
            canvas,
            capture,
            frame: 0,
            transform: CollectiveRotation::IDENTITY,
            last_revealed: None,
            finish_capture: false,
        }
    }

    fn toggle_capture(&mut self) {
        self.finish_capture = false;
        match self.capture.toggle() {
            Ok(recording) => self.sync_clock(recording),
            Err(e) => log::warn!("Capture toggle failed: {}", e),
        }
    }

    /// Step time at the configured frame rate while recording
    fn sync_clock(&mut self, recording: bool) {
        if self.settings.fixed_timestep {
            return;
        }
        if recording {
            self.animation.set_fixed_step(Some(self.settings.frame_rate));
        } else {
            self.animation.set_fixed_step(None);
        }
    }

    fn stop_capture(&mut self) {
        if let Err(e) = self.capture.stop() {
            log::warn!("Failed to finish capture: {}", e);
        }
        self.sync_clock(false);
    }

    /// Save a screenshot delivered by the backend as the next frame
    fn handle_screenshot(&mut self, ctx: &egui::Context, shot: &egui::ColorImage) {
        if !self.capture.is_recording() {
            return;
        }

        let cropped = match self.canvas.last_rect() {
            Some(rect) => shot.region(&rect, Some(ctx.pixels_per_point())),
            None => shot.clone(),
        };
        let [w, h] = cropped.size;
        let pixels: Vec<u8> = cropped.pixels.iter().flat_map(|c| c.to_array()).collect();

        match image::RgbaImage::from_raw(w as u32, h as u32, pixels) {
            Some(frame) => {
                if let Err(e) = self.capture.push_frame(&frame) {
                    log::warn!("Failed to save frame: {}", e);
                }
            }
            None => log::warn!("Screenshot buffer does not match {}x{}", w, h),
        }

        if self.finish_capture {
            self.finish_capture = false;
            self.stop_capture();
        }
    }
}

impl eframe::App for ExtrudeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Input: capture toggle and screenshots from the previous frame
        let (toggle, screenshots) = ctx.input(|i| {
            let shots: Vec<_> = i
                .raw
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Screenshot { image, .. } => Some(image.clone()),
                    _ => None,
                })
                .collect();
            (i.key_pressed(egui::Key::C), shots)
        });

        for shot in &screenshots {
            self.handle_screenshot(ctx, shot);
        }
        if toggle {
            self.toggle_capture();
        }

        if self.animation.is_advancing() {
            let report = self.animation.tick();
            self.frame = report.time.frame;
            self.transform = report.transform;
            if let Some(shape) = report.revealed {
                self.last_revealed = Some(shape.kind);
            }
            if report.phase == Phase::Complete && self.capture.is_recording() {
                self.finish_capture = true;
            }
        }

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("extrude-rs");
                ui.separator();

                let state = self.animation.state();
                ui.label(state.phase.name());
                ui.separator();
                ui.label(format!("Frame {}", self.frame));
                ui.separator();
                ui.label(format!(
                    "Shapes: {}/{}",
                    self.animation.shapes().len(),
                    self.animation.max_shapes()
                ));
                if let Some(kind) = self.last_revealed {
                    ui.label(format!("(last: {})", kind.name()));
                }
                ui.separator();
                ui.label(format!("Rotation: {:.0}%", state.rotation_progress * 100.0));

                if self.capture.is_recording() {
                    ui.separator();
                    let rec = ui.colored_label(
                        egui::Color32::from_rgb(220, 40, 40),
                        format!("● REC {}", self.capture.frame_count()),
                    );
                    if let Some(dir) = self.capture.session_dir() {
                        rec.on_hover_text(dir.display().to_string());
                    }
                }
            });
        });

        // Scene
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.canvas.show(ui, self.animation.shapes(), &self.transform);
            });

        if self.capture.is_recording() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot);
        }

        if self.animation.is_advancing() || self.capture.is_recording() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.capture.is_recording() {
            self.stop_capture();
        }
        self.settings.save();
    }
}
