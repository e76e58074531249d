use tracing::debug;

use crate::error::{FactoryError, Result};
use crate::factory_method::shape::{Circle, Rectangle, Shape};

/// Selector-driven shape creation over the same `Shape` products the
/// Factory Method example uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn new() -> Self {
        Self
    }

    /// Accepts `"CIRCLE"` and `"RECTANGLE"` exactly.
    pub fn get_shape(&self, selector: &str) -> Option<Box<dyn Shape>> {
        let shape: Box<dyn Shape> = match selector {
            "CIRCLE" => Box::new(Circle),
            "RECTANGLE" => Box::new(Rectangle),
            _ => {
                debug!(selector, "unrecognised shape selector");
                return None;
            }
        };
        debug!(name = shape.name(), "creating shape");
        Some(shape)
    }

    pub fn try_get_shape(&self, selector: &str) -> Result<Box<dyn Shape>> {
        self.get_shape(selector)
            .ok_or_else(|| FactoryError::unknown("shape", selector))
    }
}
