//! Surface trait definition
//!
//! `Surface` is the immediate-mode 2D drawing API every shape renders
//! through. It mirrors a classic canvas: a transform stack, a current fill
//! and stroke, and a handful of primitives. Style and transform are both
//! saved by [`push`](Surface::push) and restored by [`pop`](Surface::pop).
//!
//! ## Coordinate System
//!
//! - Origin at the top-left of the canvas, Y grows downward
//! - Units are pixels
//! - Angles are radians, positive rotation is clockwise on screen

use nalgebra::Point2;

use crate::shapes::{ImageAsset, Rgba};

/// An immediate-mode 2D drawing target
pub trait Surface {
    /// Current canvas width in pixels
    fn width(&self) -> f32;

    /// Current canvas height in pixels
    fn height(&self) -> f32;

    /// Save the transform and style
    fn push(&mut self);

    /// Restore the most recently pushed transform and style
    fn pop(&mut self);

    /// Move the origin
    fn translate(&mut self, x: f32, y: f32);

    /// Rotate around the current origin
    fn rotate(&mut self, angle: f32);

    /// Fill subsequent primitives with `color`
    fn fill(&mut self, color: Rgba);

    /// Stop filling
    fn no_fill(&mut self);

    /// Outline subsequent primitives with `color`
    fn stroke(&mut self, color: Rgba);

    /// Outline thickness in pixels
    fn stroke_weight(&mut self, weight: f32);

    /// Stop outlining
    fn no_stroke(&mut self);

    /// Blend `color` over the whole canvas, ignoring the transform.
    ///
    /// An opaque color clears the canvas; a translucent one fades what was
    /// drawn before (the trail effect).
    fn background(&mut self, color: Rgba);

    /// Ellipse centered at `center`
    fn ellipse(&mut self, center: Point2<f32>, width: f32, height: f32);

    /// Rectangle centered at `center`
    fn rect(&mut self, center: Point2<f32>, width: f32, height: f32);

    /// Line segment, drawn with the stroke only
    fn line(&mut self, a: Point2<f32>, b: Point2<f32>);

    fn triangle(&mut self, a: Point2<f32>, b: Point2<f32>, c: Point2<f32>);

    fn quad(&mut self, a: Point2<f32>, b: Point2<f32>, c: Point2<f32>, d: Point2<f32>);

    /// A dot with the stroke color, as wide as the stroke weight
    fn point(&mut self, p: Point2<f32>);

    /// Blit `image` centered at `center`, scaled to `width` x `height`
    fn image(&mut self, image: &ImageAsset, center: Point2<f32>, width: f32, height: f32);
}
