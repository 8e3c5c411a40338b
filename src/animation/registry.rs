//! Shape registry - the append-only, capacity-bounded list of revealed shapes
//!
//! Insertion order is draw order. Nothing is ever removed or replaced.

use thiserror::Error;

use crate::shapes::ShapeDescriptor;

/// Errors raised by the registry
#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("Registry is full ({capacity} shapes)")]
    Full { capacity: usize },
}

/// Append-only list of accepted descriptors
#[derive(Clone, Debug)]
pub struct ShapeRegistry {
    shapes: Vec<ShapeDescriptor>,
    capacity: usize,
}

impl ShapeRegistry {
    /// Create an empty registry holding at most `capacity` shapes
    pub fn new(capacity: usize) -> Self {
        Self {
            shapes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a descriptor
    pub fn push(&mut self, shape: ShapeDescriptor) -> Result<(), RegistryError> {
        if self.is_full() {
            return Err(RegistryError::Full {
                capacity: self.capacity,
            });
        }
        self.shapes.push(shape);
        Ok(())
    }

    /// Number of shapes held
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Maximum number of shapes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the registry has reached its capacity
    pub fn is_full(&self) -> bool {
        self.shapes.len() >= self.capacity
    }

    /// Shapes in insertion (draw) order
    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;
    use crate::shapes::ShapeKind;

    fn shape(size: f32) -> ShapeDescriptor {
        ShapeDescriptor::new(ShapeKind::Rectangle, size, 20.0, Color::gray(100))
    }

    #[test]
    fn test_push_until_full() {
        let mut registry = ShapeRegistry::new(2);
        assert_eq!(registry.len(), 0);
        assert!(registry.push(shape(100.0)).is_ok());
        assert!(registry.push(shape(200.0)).is_ok());
        assert!(registry.is_full());
        assert_eq!(
            registry.push(shape(300.0)),
            Err(RegistryError::Full { capacity: 2 })
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut registry = ShapeRegistry::new(3);
        for size in [150.0, 110.0, 290.0] {
            registry.push(shape(size)).unwrap();
        }
        let sizes: Vec<f32> = registry.shapes().iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec![150.0, 110.0, 290.0]);
    }

    #[test]
    fn test_zero_capacity_is_immediately_full() {
        let registry = ShapeRegistry::new(0);
        assert!(registry.is_full());
    }
}
