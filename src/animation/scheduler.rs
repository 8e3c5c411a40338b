//! Reveal scheduler - adds one new shape every few frames until full

use super::registry::ShapeRegistry;
use crate::shapes::{ShapeDescriptor, ShapeFactory};

/// Decides, per frame, whether a new shape appears
pub struct RevealScheduler {
    /// Frames between reveals (at least 1)
    interval: u64,
    factory: ShapeFactory,
}

impl RevealScheduler {
    /// Create a scheduler revealing one shape every `interval` frames
    pub fn new(interval: u64, factory: ShapeFactory) -> Self {
        Self {
            interval: interval.max(1),
            factory,
        }
    }

    /// Run the scheduler for one frame
    ///
    /// Fires on frames that are a multiple of the interval while the registry
    /// has room, appending the new shape and returning it. Once the registry
    /// is full every call is a no-op.
    pub fn tick(&mut self, frame: u64, registry: &mut ShapeRegistry) -> Option<ShapeDescriptor> {
        if registry.is_full() || frame % self.interval != 0 {
            return None;
        }

        let shape = self.factory.create();
        match registry.push(shape) {
            Ok(()) => {
                log::debug!(
                    "Revealed {} #{} at frame {} (size {:.0}, depth {:.0})",
                    shape.kind.name(),
                    registry.len(),
                    frame,
                    shape.size,
                    shape.position.z
                );
                Some(shape)
            }
            Err(e) => {
                log::warn!("Dropped revealed shape: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{RngSource, ShapeBounds};

    fn scheduler(interval: u64) -> RevealScheduler {
        let factory = ShapeFactory::new(ShapeBounds::default(), Box::new(RngSource::seeded(9)));
        RevealScheduler::new(interval, factory)
    }

    #[test]
    fn test_fires_on_interval_only() {
        let mut scheduler = scheduler(2);
        let mut registry = ShapeRegistry::new(100);

        assert!(scheduler.tick(1, &mut registry).is_none());
        assert!(scheduler.tick(2, &mut registry).is_some());
        assert!(scheduler.tick(3, &mut registry).is_none());
        assert!(scheduler.tick(4, &mut registry).is_some());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_fills_five_by_frame_ten() {
        let mut scheduler = scheduler(2);
        let mut registry = ShapeRegistry::new(5);

        let mut previous = 0;
        for frame in 1..=10 {
            scheduler.tick(frame, &mut registry);
            assert!(registry.len() >= previous);
            assert!(registry.len() <= 5);
            previous = registry.len();
        }
        assert_eq!(registry.len(), 5);

        for frame in 11..=100 {
            assert!(scheduler.tick(frame, &mut registry).is_none());
        }
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_returned_shape_is_the_appended_one() {
        let mut scheduler = scheduler(1);
        let mut registry = ShapeRegistry::new(3);
        let shape = scheduler.tick(1, &mut registry).unwrap();
        assert_eq!(registry.shapes()[0], shape);
    }

    #[test]
    fn test_zero_interval_treated_as_every_frame() {
        let mut scheduler = scheduler(0);
        let mut registry = ShapeRegistry::new(3);
        for frame in 1..=3 {
            assert!(scheduler.tick(frame, &mut registry).is_some());
        }
    }
}
