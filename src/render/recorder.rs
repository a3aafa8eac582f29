//! Recording surface for tests
//!
//! Captures every call as a [`DrawCall`] so tests can assert on the exact
//! sequence a shape or sketch emits, without rasterizing anything.

use nalgebra::Point2;

use super::surface::Surface;
use crate::shapes::{ImageAsset, Rgba};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Push,
    Pop,
    Translate(f32, f32),
    Rotate(f32),
    Fill(Rgba),
    NoFill,
    Stroke(Rgba),
    StrokeWeight(f32),
    NoStroke,
    Background(Rgba),
    Ellipse(f32, f32, f32, f32),
    Rect(f32, f32, f32, f32),
    Line(f32, f32, f32, f32),
    Triangle([f32; 6]),
    Quad([f32; 8]),
    Point(f32, f32),
    Image(String, f32, f32, f32, f32),
}

impl DrawCall {
    /// Whether this call paints pixels (background excluded)
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            DrawCall::Ellipse(..)
                | DrawCall::Rect(..)
                | DrawCall::Line(..)
                | DrawCall::Triangle(..)
                | DrawCall::Quad(..)
                | DrawCall::Point(..)
                | DrawCall::Image(..)
        )
    }
}

pub struct Recorder {
    width: f32,
    height: f32,
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn primitive_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_primitive()).count()
    }

    /// Pushes minus pops
    pub fn depth(&self) -> i64 {
        self.calls.iter().fold(0, |depth, call| match call {
            DrawCall::Push => depth + 1,
            DrawCall::Pop => depth - 1,
            _ => depth,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for Recorder {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn push(&mut self) {
        self.calls.push(DrawCall::Push);
    }

    fn pop(&mut self) {
        self.calls.push(DrawCall::Pop);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::Translate(x, y));
    }

    fn rotate(&mut self, angle: f32) {
        self.calls.push(DrawCall::Rotate(angle));
    }

    fn fill(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn no_fill(&mut self) {
        self.calls.push(DrawCall::NoFill);
    }

    fn stroke(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Stroke(color));
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.calls.push(DrawCall::StrokeWeight(weight));
    }

    fn no_stroke(&mut self) {
        self.calls.push(DrawCall::NoStroke);
    }

    fn background(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Background(color));
    }

    fn ellipse(&mut self, center: Point2<f32>, width: f32, height: f32) {
        self.calls
            .push(DrawCall::Ellipse(center.x, center.y, width, height));
    }

    fn rect(&mut self, center: Point2<f32>, width: f32, height: f32) {
        self.calls.push(DrawCall::Rect(center.x, center.y, width, height));
    }

    fn line(&mut self, a: Point2<f32>, b: Point2<f32>) {
        self.calls.push(DrawCall::Line(a.x, a.y, b.x, b.y));
    }

    fn triangle(&mut self, a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) {
        self.calls
            .push(DrawCall::Triangle([a.x, a.y, b.x, b.y, c.x, c.y]));
    }

    fn quad(&mut self, a: Point2<f32>, b: Point2<f32>, c: Point2<f32>, d: Point2<f32>) {
        self.calls.push(DrawCall::Quad([
            a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y,
        ]));
    }

    fn point(&mut self, p: Point2<f32>) {
        self.calls.push(DrawCall::Point(p.x, p.y));
    }

    fn image(&mut self, image: &ImageAsset, center: Point2<f32>, width: f32, height: f32) {
        self.calls.push(DrawCall::Image(
            image.name().to_string(),
            center.x,
            center.y,
            width,
            height,
        ));
    }
}
