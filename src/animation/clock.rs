//! Frame clocks - the time source driving reveal and rotation
//!
//! Frames are counted from 1, like a sketch's frame counter: the first
//! `tick()` reports frame 1.

use std::time::Instant;

/// Time stamp of one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Frame number (1 on the first tick)
    pub frame: u64,
    /// Seconds since the clock started
    pub seconds: f64,
}

impl FrameTime {
    pub fn new(frame: u64, seconds: f64) -> Self {
        Self { frame, seconds }
    }
}

/// A monotonic frame/time source
pub trait Clock: Send {
    /// Advance to the next frame and report its time stamp
    fn tick(&mut self) -> FrameTime;
}

/// Wall-clock time
pub struct RealtimeClock {
    start: Instant,
    offset: f64,
    frame: u64,
}

impl RealtimeClock {
    /// Start counting from now
    pub fn new() -> Self {
        Self::resume(FrameTime::new(0, 0.0))
    }

    /// Continue after `last`, with wall time running from now
    pub fn resume(last: FrameTime) -> Self {
        Self {
            start: Instant::now(),
            offset: last.seconds,
            frame: last.frame,
        }
    }
}

impl Default for RealtimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for RealtimeClock {
    fn tick(&mut self) -> FrameTime {
        self.frame += 1;
        FrameTime::new(self.frame, self.offset + self.start.elapsed().as_secs_f64())
    }
}

/// Time derived from the frame count at a fixed rate
///
/// Every frame is exactly `1 / frame_rate` seconds long, which keeps captured
/// sequences identical regardless of how fast frames are actually rendered.
pub struct FixedStepClock {
    step: f64,
    origin: FrameTime,
    frame: u64,
}

impl FixedStepClock {
    /// Create a clock running at `frame_rate` frames per second
    ///
    /// Non-positive or non-finite rates fall back to 60 fps.
    pub fn new(frame_rate: f64) -> Self {
        Self::resume(frame_rate, FrameTime::new(0, 0.0))
    }

    /// Continue after `last` at `frame_rate` frames per second
    pub fn resume(frame_rate: f64, last: FrameTime) -> Self {
        let rate = if frame_rate.is_finite() && frame_rate > 0.0 {
            frame_rate
        } else {
            60.0
        };
        Self {
            step: 1.0 / rate,
            origin: last,
            frame: last.frame,
        }
    }
}

impl Clock for FixedStepClock {
    fn tick(&mut self) -> FrameTime {
        self.frame += 1;
        let steps = (self.frame - self.origin.frame) as f64;
        FrameTime::new(self.frame, self.origin.seconds + steps * self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step() {
        let mut clock = FixedStepClock::new(60.0);
        let first = clock.tick();
        assert_eq!(first.frame, 1);
        assert!((first.seconds - 1.0 / 60.0).abs() < 1e-9);

        for _ in 0..59 {
            clock.tick();
        }
        let t = clock.tick();
        assert_eq!(t.frame, 61);
        assert!((t.seconds - 61.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_step_rejects_bad_rate() {
        let mut clock = FixedStepClock::new(0.0);
        assert!((clock.tick().seconds - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_realtime_is_monotonic() {
        let mut clock = RealtimeClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!(a.frame, 1);
        assert_eq!(b.frame, 2);
        assert!(b.seconds >= a.seconds);
    }

    #[test]
    fn test_fixed_step_resumes_after_last_frame() {
        let mut clock = FixedStepClock::resume(60.0, FrameTime::new(100, 3.25));
        let t = clock.tick();
        assert_eq!(t.frame, 101);
        assert!((t.seconds - (3.25 + 1.0 / 60.0)).abs() < 1e-9);

        clock.tick();
        let t = clock.tick();
        assert_eq!(t.frame, 103);
        assert!((t.seconds - (3.25 + 3.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_realtime_resumes_after_last_frame() {
        let mut clock = RealtimeClock::resume(FrameTime::new(40, 2.0));
        let t = clock.tick();
        assert_eq!(t.frame, 41);
        assert!(t.seconds >= 2.0);
    }
}
