//! Animation module - timing of the reveal and the collective rotation
//!
//! This module provides:
//! - `Clock` implementations (wall-clock and fixed-step)
//! - `ShapeRegistry`, the append-only list of revealed shapes
//! - `RevealScheduler`, which adds shapes at a fixed frame cadence
//! - `RotationController`, the Filling → Delay → Rotating → Complete machine
//! - `Animation`, the per-frame entry point combining all of the above

mod clock;
mod registry;
mod rotation;
mod scheduler;
mod sequence;

pub use rotation::{CollectiveRotation, Phase, SequenceTiming};
pub use sequence::Animation;
