use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::animation::SequenceTiming;
use crate::shapes::ShapeBounds;

/// Returns the path to the settings file: `~/.config/extrude-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("extrude-rs");
    path.push("settings.json");
    path
}

/// Default root for captured frame sequences
fn default_capture_dir() -> PathBuf {
    match dirs::video_dir() {
        Some(mut dir) => {
            dir.push("extrude-rs");
            dir
        }
        None => PathBuf::from("captures"),
    }
}

/// Persisted animation settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AnimationSettings {
    // Reveal
    pub max_shapes: usize,
    pub reveal_interval: u64,

    // Canvas and placement
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub margin: f32,
    pub max_size: f32,

    // Shape ranges
    pub size_min: f32,
    pub size_max: f32,
    pub thickness_min: f32,
    pub thickness_max: f32,

    // Timing (seconds)
    pub post_fill_delay: f64,
    pub rotation_duration: f64,
    pub frame_rate: f64,
    pub fixed_timestep: bool,

    // Randomness
    pub seed: Option<u64>,

    // Display
    pub background: u8,

    // Capture
    pub capture_dir: PathBuf,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            max_shapes: 45,
            reveal_interval: 2,

            canvas_width: 1080.0,
            canvas_height: 1920.0,
            margin: 200.0,
            max_size: 360.0,

            size_min: 100.0,
            size_max: 300.0,
            thickness_min: 10.0,
            thickness_max: 45.0,

            post_fill_delay: 0.5,
            rotation_duration: 8.5,
            frame_rate: 60.0,
            fixed_timestep: false,

            seed: None,

            background: 200,

            capture_dir: default_capture_dir(),
        }
    }
}

/// Swap a range into ascending order, warning if it was inverted
fn ordered(name: &str, min: f32, max: f32) -> (f32, f32) {
    if min > max {
        log::warn!("{} range {}..{} is inverted, swapping", name, min, max);
        (max, min)
    } else {
        (min, max)
    }
}

/// Replace a negative or non-finite value with a fallback
fn non_negative(name: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("{} = {} is invalid, using {}", name, value, fallback);
        fallback
    }
}

/// Replace a negative or non-finite duration with zero
fn duration(name: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("{} = {} is invalid, using 0", name, value);
        0.0
    }
}

impl AnimationSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.validated()
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Repair values the animation can't run with.
    pub fn validated(mut self) -> Self {
        if self.reveal_interval == 0 {
            log::warn!("reveal_interval = 0 is invalid, using 1");
            self.reveal_interval = 1;
        }

        self.canvas_width = non_negative("canvas_width", self.canvas_width, 1080.0);
        self.canvas_height = non_negative("canvas_height", self.canvas_height, 1920.0);
        self.margin = non_negative("margin", self.margin, 0.0);
        self.max_size = non_negative("max_size", self.max_size, 0.0);

        let size_min = non_negative("size_min", self.size_min, 100.0);
        let size_max = non_negative("size_max", self.size_max, 300.0);
        (self.size_min, self.size_max) = ordered("size", size_min, size_max);

        let thickness_min = non_negative("thickness_min", self.thickness_min, 10.0);
        let thickness_max = non_negative("thickness_max", self.thickness_max, 45.0);
        (self.thickness_min, self.thickness_max) = ordered("thickness", thickness_min, thickness_max);

        self.post_fill_delay = duration("post_fill_delay", self.post_fill_delay);
        self.rotation_duration = duration("rotation_duration", self.rotation_duration);

        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            log::warn!("frame_rate = {} is invalid, using 60", self.frame_rate);
            self.frame_rate = 60.0;
        }

        self
    }

    /// Placement and size ranges for the shape factory
    pub fn bounds(&self) -> ShapeBounds {
        ShapeBounds {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            margin: self.margin,
            max_size: self.max_size,
            size: (self.size_min, self.size_max),
            thickness: (self.thickness_min, self.thickness_max),
        }
    }

    /// Phase durations for the rotation controller
    pub fn timing(&self) -> SequenceTiming {
        SequenceTiming {
            post_fill_delay: self.post_fill_delay,
            rotation_duration: self.rotation_duration,
        }
    }
}
