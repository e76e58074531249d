//! Shapes: the canonical Factory Method example.
//!
//! `ShapeFactory` is the creator, `Shape` the product. Each concrete factory
//! is tied to exactly one shape; the client only ever sees `Box<dyn Shape>`.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{FactoryError, Result};

// ============================================================================
// Products
// ============================================================================

/// The shapes this crate ships. Shapes added through a registry have no kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Rectangle];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
        }
    }

    /// Closed-set creation: no heap allocation, no vtable.
    pub fn create(self) -> AnyShape {
        match self {
            ShapeKind::Circle => AnyShape::Circle(Circle),
            ShapeKind::Rectangle => AnyShape::Rectangle(Rectangle),
        }
    }

    /// The concrete creator bound to this kind.
    pub fn factory(self) -> Box<dyn ShapeFactory> {
        match self {
            ShapeKind::Circle => Box::new(CircleFactory),
            ShapeKind::Rectangle => Box::new(RectangleFactory),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" => Ok(ShapeKind::Rectangle),
            other => Err(FactoryError::unknown("shape", other)),
        }
    }
}

pub trait Shape: Send + Sync {
    /// Lowercase variant name, e.g. `"circle"`.
    fn name(&self) -> &str;

    /// The line `draw` prints.
    fn render(&self) -> String;

    /// `None` for shapes outside [`ShapeKind`].
    fn kind(&self) -> Option<ShapeKind> {
        self.name().parse().ok()
    }

    fn draw(&self) {
        println!("{}", self.render());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Circle;

impl Shape for Circle {
    fn name(&self) -> &str {
        ShapeKind::Circle.as_str()
    }

    fn render(&self) -> String {
        "Drawing a circle".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle;

impl Shape for Rectangle {
    fn name(&self) -> &str {
        ShapeKind::Rectangle.as_str()
    }

    fn render(&self) -> String {
        "Drawing a rectangle".to_string()
    }
}

/// Tagged-union product for when the variant set is known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyShape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl AnyShape {
    /// Always known for the closed set.
    pub fn shape_kind(&self) -> ShapeKind {
        match self {
            AnyShape::Circle(_) => ShapeKind::Circle,
            AnyShape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }
}

impl Shape for AnyShape {
    fn name(&self) -> &str {
        self.shape_kind().as_str()
    }

    fn render(&self) -> String {
        match self {
            AnyShape::Circle(shape) => shape.render(),
            AnyShape::Rectangle(shape) => shape.render(),
        }
    }
}

// ============================================================================
// Creators
// ============================================================================

pub trait ShapeFactory: Send + Sync {
    /// Always returns a fresh shape; never fails.
    fn create_shape(&self) -> Box<dyn Shape>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CircleFactory;

impl ShapeFactory for CircleFactory {
    fn create_shape(&self) -> Box<dyn Shape> {
        debug!(kind = %ShapeKind::Circle, "creating shape");
        Box::new(Circle)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleFactory;

impl ShapeFactory for RectangleFactory {
    fn create_shape(&self) -> Box<dyn Shape> {
        debug!(kind = %ShapeKind::Rectangle, "creating shape");
        Box::new(Rectangle)
    }
}

/// Client routine: knows the creator only through the trait.
pub fn render_with(factory: &dyn ShapeFactory) -> String {
    factory.create_shape().render()
}
