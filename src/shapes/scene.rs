//! Scene - the ordered shape collection of one sketch
//!
//! Pattern factories append shapes to a scene; the sketch then advances and
//! renders every shape each frame in insertion order, so later shapes paint
//! over earlier ones.
//!
//! A scene records the canvas bounds it was laid out against. Factories read
//! them for centering and mirroring; they are not updated on resize.

use super::config::ShapeConfig;
use super::shape::Shape;
use crate::render::Surface;

/// Canvas size a scene is laid out against
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bounds of a surface as it reports itself right now
    pub fn of(surface: &dyn Surface) -> Self {
        Self::new(surface.width(), surface.height())
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Position from fractions of the canvas size
    pub fn at(&self, fx: f32, fy: f32) -> (f32, f32) {
        (self.width * fx, self.height * fy)
    }

    /// Reflect `x` across the vertical midline
    pub fn mirror_x(&self, x: f32) -> f32 {
        self.width - x
    }
}

/// An ordered collection of shapes
#[derive(Debug)]
pub struct Scene {
    shapes: Vec<Shape>,
    bounds: Bounds,
}

impl Scene {
    /// Create an empty scene
    pub fn new(bounds: Bounds) -> Self {
        Self {
            shapes: Vec::new(),
            bounds,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Build a shape from `config` and append it
    pub fn add(&mut self, config: ShapeConfig) -> &mut Self {
        self.shapes.push(Shape::new(config));
        self
    }

    /// Append an already-built shape
    pub fn push(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    /// Get the number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if scene is empty
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Shapes added since `start`
    #[cfg(test)]
    pub fn since(&self, start: usize) -> &[Shape] {
        &self.shapes[start.min(self.shapes.len())..]
    }

    /// Advance then render every shape, in insertion order
    pub fn draw(&mut self, surface: &mut dyn Surface, tick: u64) {
        for shape in &mut self.shapes {
            shape.advance(tick);
            shape.render(surface);
        }
    }
}
