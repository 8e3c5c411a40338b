//! Animation - the per-frame entry point tying clock, reveal and rotation
//!
//! One `tick()` per displayed frame:
//! 1. the clock advances
//! 2. the rotation controller advances
//! 3. the reveal scheduler may append one shape
//!
//! Drawing is left to the caller, which reads `shapes()` and the
//! transform carried by each `FrameReport`.

use super::clock::{Clock, FixedStepClock, FrameTime, RealtimeClock};
use super::registry::ShapeRegistry;
use super::rotation::{AnimationState, CollectiveRotation, Phase, RotationController};
use super::scheduler::RevealScheduler;
use crate::settings::AnimationSettings;
use crate::shapes::{BoxedRandom, RngSource, ShapeDescriptor, ShapeFactory};

/// What happened during one frame
#[derive(Clone, Copy, Debug)]
pub struct FrameReport {
    /// Time stamp of the frame
    pub time: FrameTime,
    /// Phase after the frame
    pub phase: Phase,
    /// The shape revealed this frame, if any
    pub revealed: Option<ShapeDescriptor>,
    /// Collective transform to draw this frame with
    pub transform: CollectiveRotation,
}

/// The whole reveal-then-rotate sequence
pub struct Animation {
    clock: Box<dyn Clock>,
    registry: ShapeRegistry,
    scheduler: RevealScheduler,
    controller: RotationController,
    /// Time stamp of the last frame stepped
    last: FrameTime,
}

impl Animation {
    /// Assemble an animation from its parts
    pub fn new(
        clock: Box<dyn Clock>,
        registry: ShapeRegistry,
        scheduler: RevealScheduler,
        controller: RotationController,
    ) -> Self {
        Self {
            clock,
            registry,
            scheduler,
            controller,
            last: FrameTime::new(0, 0.0),
        }
    }

    /// Build an animation from (validated) settings
    pub fn from_settings(settings: &AnimationSettings) -> Self {
        let random: BoxedRandom = match settings.seed {
            Some(seed) => {
                log::info!("Using random seed {}", seed);
                Box::new(RngSource::seeded(seed))
            }
            None => Box::new(RngSource::from_entropy()),
        };

        let clock: Box<dyn Clock> = if settings.fixed_timestep {
            Box::new(FixedStepClock::new(settings.frame_rate))
        } else {
            Box::new(RealtimeClock::new())
        };

        let factory = ShapeFactory::new(settings.bounds(), random);
        Self::new(
            clock,
            ShapeRegistry::new(settings.max_shapes),
            RevealScheduler::new(settings.reveal_interval, factory),
            RotationController::new(settings.timing()),
        )
    }

    /// Advance one frame using the animation's own clock
    pub fn tick(&mut self) -> FrameReport {
        let time = self.clock.tick();
        self.step(time)
    }

    /// Switch between fixed-step and wall-clock time mid-run
    ///
    /// `Some(rate)` derives time from the frame count at `rate` fps, `None`
    /// follows the wall clock. Either way time continues from the last frame.
    pub fn set_fixed_step(&mut self, frame_rate: Option<f64>) {
        self.clock = match frame_rate {
            Some(rate) => Box::new(FixedStepClock::resume(rate, self.last)),
            None => Box::new(RealtimeClock::resume(self.last)),
        };
    }

    /// Advance one frame at an explicit time stamp
    pub fn step(&mut self, time: FrameTime) -> FrameReport {
        self.last = time;
        self.controller.advance(time.seconds, self.registry.is_full());

        let revealed = self.scheduler.tick(time.frame, &mut self.registry);
        if revealed.is_some() && self.registry.is_full() {
            log::info!(
                "All {} shapes revealed at frame {}",
                self.registry.capacity(),
                time.frame
            );
            // The delay starts on the frame the registry fills
            self.controller.advance(time.seconds, true);
        }

        FrameReport {
            time,
            phase: self.controller.phase(),
            revealed,
            transform: self.controller.transform(),
        }
    }

    /// Revealed shapes in draw order
    pub fn shapes(&self) -> &[ShapeDescriptor] {
        self.registry.shapes()
    }

    /// Registry capacity
    pub fn max_shapes(&self) -> usize {
        self.registry.capacity()
    }

    /// Current controller state
    pub fn state(&self) -> AnimationState {
        self.controller.state()
    }

    /// Whether the animation still changes from frame to frame
    pub fn is_advancing(&self) -> bool {
        self.controller.is_advancing()
    }
}
