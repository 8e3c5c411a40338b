//! Rotation controller - the phase machine behind the collective rotation
//!
//! ```text
//! Filling ──registry full──▶ PostFillDelay ──delay──▶ Rotating ──duration──▶ Complete
//! ```
//!
//! Transitions only move forward. Each timed phase starts at the instant its
//! predecessor's deadline expired, not at the frame that noticed it. A single
//! large time step can cross several phases at once.

use std::f32::consts::TAU;

use nalgebra::{Rotation3, Vector3};

/// Animation phases, in the only order they can occur
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Phase {
    /// Shapes are still being revealed
    Filling,
    /// Registry is full; holding still before rotating
    PostFillDelay,
    /// The collective rotation is running
    Rotating,
    /// Rotation finished; terminal
    Complete,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Filling => "Filling",
            Phase::PostFillDelay => "Waiting",
            Phase::Rotating => "Rotating",
            Phase::Complete => "Complete",
        }
    }
}

/// Durations of the timed phases, in seconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceTiming {
    /// Pause between the registry filling and the rotation starting
    pub post_fill_delay: f64,
    /// Length of the collective rotation
    pub rotation_duration: f64,
}

impl Default for SequenceTiming {
    fn default() -> Self {
        Self {
            post_fill_delay: 0.5,
            rotation_duration: 8.5,
        }
    }
}

/// Snapshot of the controller's state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Current phase
    pub phase: Phase,
    /// Time (seconds) at which the current phase began
    pub phase_start: f64,
    /// Rotation progress in [0, 1]; only meaningful while rotating or complete
    pub rotation_progress: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            phase: Phase::Filling,
            phase_start: 0.0,
            rotation_progress: 0.0,
        }
    }
}

/// The transform applied to the whole scene
///
/// One full turn about X and one full turn in the opposite sense about Z,
/// both driven by the same progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollectiveRotation {
    /// Angle about the X axis, in radians
    pub angle_x: f32,
    /// Angle about the Z axis, in radians
    pub angle_z: f32,
}

impl CollectiveRotation {
    pub const IDENTITY: CollectiveRotation = CollectiveRotation {
        angle_x: 0.0,
        angle_z: 0.0,
    };

    /// Angles at a given rotation progress
    pub fn from_progress(progress: f32) -> Self {
        Self {
            angle_x: TAU * progress,
            angle_z: -TAU * progress,
        }
    }

    /// Rotation matrix (X applied after Z)
    pub fn rotation(&self) -> Rotation3<f32> {
        Rotation3::from_axis_angle(&Vector3::x_axis(), self.angle_x)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.angle_z)
    }
}

/// Owns the animation state and advances it once per frame
pub struct RotationController {
    timing: SequenceTiming,
    state: AnimationState,
}

impl RotationController {
    /// Create a controller in the `Filling` phase
    pub fn new(timing: SequenceTiming) -> Self {
        Self {
            timing,
            state: AnimationState::default(),
        }
    }

    /// Advance the state machine to time `now`
    ///
    /// `registry_full` reports whether every shape has been revealed. Returns
    /// the phase after advancing.
    pub fn advance(&mut self, now: f64, registry_full: bool) -> Phase {
        loop {
            match self.state.phase {
                Phase::Filling => {
                    if !registry_full {
                        break;
                    }
                    self.enter(Phase::PostFillDelay, now);
                }
                Phase::PostFillDelay => {
                    let deadline = self.state.phase_start + self.timing.post_fill_delay;
                    if now < deadline {
                        break;
                    }
                    self.enter(Phase::Rotating, deadline);
                }
                Phase::Rotating => {
                    let elapsed = now - self.state.phase_start;
                    let progress = self.fraction(elapsed);
                    // Never move backwards, even if `now` does
                    self.state.rotation_progress = self.state.rotation_progress.max(progress);

                    if elapsed < self.timing.rotation_duration {
                        break;
                    }
                    let deadline = self.state.phase_start + self.timing.rotation_duration;
                    self.state.rotation_progress = 1.0;
                    self.enter(Phase::Complete, deadline);
                }
                Phase::Complete => break,
            }
        }
        self.state.phase
    }

    fn enter(&mut self, phase: Phase, at: f64) {
        log::info!("Animation phase {} -> {} at {:.3}s", self.state.phase.name(), phase.name(), at);
        self.state.phase = phase;
        self.state.phase_start = at;
    }

    /// Progress fraction of the rotation after `elapsed` seconds
    fn fraction(&self, elapsed: f64) -> f32 {
        if self.timing.rotation_duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.timing.rotation_duration).clamp(0.0, 1.0) as f32
    }

    /// Current state snapshot
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The collective transform for the current state
    ///
    /// Identity before rotating; held at the final (2π, -2π) once complete.
    pub fn transform(&self) -> CollectiveRotation {
        match self.state.phase {
            Phase::Filling | Phase::PostFillDelay => CollectiveRotation::IDENTITY,
            Phase::Rotating => CollectiveRotation::from_progress(self.state.rotation_progress),
            Phase::Complete => CollectiveRotation::from_progress(1.0),
        }
    }

    /// Whether frames should keep being requested
    pub fn is_advancing(&self) -> bool {
        self.state.phase != Phase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn controller() -> RotationController {
        RotationController::new(SequenceTiming::default())
    }

    #[test]
    fn test_stays_filling_until_full() {
        let mut c = controller();
        for i in 0..100 {
            assert_eq!(c.advance(i as f64 * 0.1, false), Phase::Filling);
        }
        assert_eq!(c.transform(), CollectiveRotation::IDENTITY);
        assert!(c.is_advancing());
    }

    #[test]
    fn test_delay_then_rotating() {
        let mut c = controller();
        let t = 3.0;
        assert_eq!(c.advance(t, true), Phase::PostFillDelay);
        assert_eq!(c.state().phase_start, t);

        assert_eq!(c.advance(t + 0.4, true), Phase::PostFillDelay);
        assert_eq!(c.transform(), CollectiveRotation::IDENTITY);

        assert_eq!(c.advance(t + 0.6, true), Phase::Rotating);
        assert!(c.state().rotation_progress > 0.0);
        assert!((c.state().phase_start - (t + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_completes_and_holds() {
        let mut c = controller();
        c.advance(1.0, true);
        c.advance(1.5, true);
        assert_eq!(c.phase(), Phase::Rotating);
        let r = c.state().phase_start;

        let half = c.advance(r + 4.25, true);
        assert_eq!(half, Phase::Rotating);
        assert!((c.state().rotation_progress - 0.5).abs() < 1e-4);
        let mid = c.transform();
        assert!((mid.angle_x - TAU / 2.0).abs() < 1e-3);
        assert!((mid.angle_z + TAU / 2.0).abs() < 1e-3);

        assert_eq!(c.advance(r + 8.5, true), Phase::Complete);
        assert!(!c.is_advancing());

        let end = c.transform();
        assert_eq!(end, CollectiveRotation { angle_x: TAU, angle_z: -TAU });
        for extra in 1..10 {
            c.advance(r + 8.5 + extra as f64, true);
            assert_eq!(c.transform(), end);
            assert_eq!(c.state().rotation_progress, 1.0);
        }
    }

    #[test]
    fn test_progress_monotonic_and_phases_forward() {
        let mut c = controller();
        let mut last_progress = 0.0;
        let mut last_phase = Phase::Filling;
        for frame in 0..1200 {
            let now = frame as f64 / 60.0;
            let phase = c.advance(now, frame >= 90);
            assert!(phase >= last_phase);
            assert!(c.state().rotation_progress >= last_progress);
            assert!((0.0..=1.0).contains(&c.state().rotation_progress));
            last_phase = phase;
            last_progress = c.state().rotation_progress;
        }
        assert_eq!(last_phase, Phase::Complete);
    }

    #[test]
    fn test_time_going_backwards_does_not_regress() {
        let mut c = controller();
        c.advance(0.0, true);
        c.advance(4.0, true);
        let p = c.state().rotation_progress;
        c.advance(2.0, true);
        assert_eq!(c.phase(), Phase::Rotating);
        assert_eq!(c.state().rotation_progress, p);
    }

    #[test]
    fn test_large_step_crosses_all_phases() {
        let mut c = controller();
        assert_eq!(c.advance(0.0, true), Phase::PostFillDelay);
        assert_eq!(c.advance(100.0, true), Phase::Complete);
        assert!((c.state().phase_start - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_durations() {
        let mut c = RotationController::new(SequenceTiming {
            post_fill_delay: 0.0,
            rotation_duration: 0.0,
        });
        assert_eq!(c.advance(5.0, true), Phase::Complete);
        assert_eq!(c.state().rotation_progress, 1.0);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let run = || {
            let mut c = controller();
            c.advance(0.0, true);
            c.advance(2.7, true);
            c.transform()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_full_turn_returns_to_identity_orientation() {
        let p = Point3::new(10.0, -20.0, 30.0);
        let end = CollectiveRotation::from_progress(1.0).rotation().transform_point(&p);
        assert!((end - p).norm() < 1e-3);

        let quarter = CollectiveRotation::from_progress(0.25).rotation().transform_point(&p);
        assert!((quarter - p).norm() > 1.0);
    }
}
