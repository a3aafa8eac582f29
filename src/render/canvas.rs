//! Canvas - the software raster surface
//!
//! Primitives are built as kurbo paths and recorded into a `vello_cpu`
//! render context. [`Canvas::flush`] rasterizes the recorded batch into a
//! persistent pixmap. Every batch opens by painting the previous pixmap, so
//! frames accumulate until a sketch calls
//! [`background`](Surface::background) with an opaque color.

use std::sync::Arc;

use nalgebra::Point2;
use vello_cpu::kurbo::{Affine, BezPath, Cap, Circle, Ellipse, Join, Point, Rect, Shape as _, Stroke};
use vello_cpu::peniko::{Color, ImageSampler};
use vello_cpu::{Image, ImageSource, Pixmap, RenderContext};

use super::surface::Surface;
use crate::shapes::{ImageAsset, Rgba};

/// Curve flattening tolerance in pixels
const TOLERANCE: f64 = 0.1;

/// Transform and style saved by `push`
#[derive(Clone, Copy, Debug)]
struct DrawState {
    transform: Affine,
    fill: Option<Rgba>,
    stroke: Option<Rgba>,
    stroke_weight: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill: Some(Rgba::WHITE),
            stroke: Some(Rgba::BLACK),
            stroke_weight: 1.0,
        }
    }
}

/// A raster drawing surface
pub struct Canvas {
    width: u16,
    height: u16,
    ctx: RenderContext,
    /// Content as of the last flush
    pixmap: Arc<Pixmap>,
    /// `ctx` holds commands that are not in `pixmap` yet
    pending: bool,
    state: DrawState,
    stack: Vec<DrawState>,
}

fn clamp_dimension(value: u32) -> u16 {
    u16::try_from(value.max(1)).unwrap_or(u16::MAX)
}

fn color(c: Rgba) -> Color {
    let [r, g, b, a] = c.to_u8();
    Color::from_rgba8(r, g, b, a)
}

fn point(p: Point2<f32>) -> Point {
    Point::new(f64::from(p.x), f64::from(p.y))
}

fn polygon(points: &[Point2<f32>], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(point(*p));
        } else {
            path.line_to(point(*p));
        }
    }
    if closed {
        path.close_path();
    }
    path
}

impl Canvas {
    /// Create a transparent canvas of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (clamp_dimension(width), clamp_dimension(height));
        Self {
            width,
            height,
            ctx: RenderContext::new(width, height),
            pixmap: Arc::new(Pixmap::new(width, height)),
            pending: false,
            state: DrawState::default(),
            stack: Vec::new(),
        }
    }

    /// Reallocate the buffer, discarding its content
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (clamp_dimension(width), clamp_dimension(height));
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.ctx = RenderContext::new(width, height);
            self.pixmap = Arc::new(Pixmap::new(width, height));
            self.pending = false;
        }
    }

    /// Reset the transform before a new frame.
    ///
    /// Unbalanced pushes from the previous frame are dropped; the style
    /// carries over.
    pub fn begin_frame(&mut self) {
        if !self.stack.is_empty() {
            log::debug!("Dropping {} unbalanced push(es)", self.stack.len());
            if let Some(first) = self.stack.first() {
                self.state.fill = first.fill;
                self.state.stroke = first.stroke;
                self.state.stroke_weight = first.stroke_weight;
            }
            self.stack.clear();
        }
        self.state.transform = Affine::IDENTITY;
    }

    /// Rasterize everything drawn since the last flush
    pub fn flush(&mut self) {
        if !self.pending {
            return;
        }
        self.ctx.flush();
        let mut target = Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut target);
        self.pixmap = Arc::new(target);
        self.ctx = RenderContext::new(self.width, self.height);
        self.pending = false;
    }

    pub fn size(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }

    /// Premultiplied RGBA bytes in row order, as of the last flush
    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Premultiplied RGBA of one pixel, transparent black outside the buffer
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let (w, h) = self.size();
        if x >= w || y >= h {
            return [0; 4];
        }
        let offset = (y as usize * w as usize + x as usize) * 4;
        let data = self.pixels();
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// The render context, opened with the previous content as underlay
    fn batch(&mut self) -> &mut RenderContext {
        if !self.pending {
            let bounds = self.bounds();
            self.ctx.set_transform(Affine::IDENTITY);
            self.ctx.set_paint_transform(Affine::IDENTITY);
            self.ctx.set_paint(Image {
                image: ImageSource::Pixmap(Arc::clone(&self.pixmap)),
                sampler: ImageSampler::default(),
            });
            self.ctx.fill_rect(&bounds);
            self.pending = true;
        }
        &mut self.ctx
    }

    fn outline(&self) -> Option<(Rgba, Stroke)> {
        let color = self.state.stroke?;
        if self.state.stroke_weight <= 0.0 {
            return None;
        }
        let stroke = Stroke::new(f64::from(self.state.stroke_weight))
            .with_join(Join::Miter)
            .with_caps(Cap::Round);
        Some((color, stroke))
    }

    /// Fill then outline a closed local-space path
    fn draw_closed(&mut self, path: BezPath) {
        let DrawState { transform, fill, .. } = self.state;
        let outline = self.outline();
        let ctx = self.batch();
        ctx.set_transform(transform);
        if let Some(fill) = fill {
            ctx.set_paint(color(fill));
            ctx.fill_path(&path);
        }
        if let Some((stroke_color, stroke)) = outline {
            ctx.set_stroke(stroke);
            ctx.set_paint(color(stroke_color));
            ctx.stroke_path(&path);
        }
    }
}

impl Surface for Canvas {
    fn width(&self) -> f32 {
        f32::from(self.width)
    }

    fn height(&self) -> f32 {
        f32::from(self.height)
    }

    fn push(&mut self) {
        self.stack.push(self.state);
    }

    fn pop(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("pop() without matching push()"),
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.state.transform = self.state.transform * Affine::translate((f64::from(x), f64::from(y)));
    }

    fn rotate(&mut self, angle: f32) {
        self.state.transform = self.state.transform * Affine::rotate(f64::from(angle));
    }

    fn fill(&mut self, color: Rgba) {
        self.state.fill = Some(color);
    }

    fn no_fill(&mut self) {
        self.state.fill = None;
    }

    fn stroke(&mut self, color: Rgba) {
        self.state.stroke = Some(color);
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.state.stroke_weight = weight.max(0.0);
    }

    fn no_stroke(&mut self) {
        self.state.stroke = None;
    }

    fn background(&mut self, background: Rgba) {
        if background.a >= 255.0 {
            // Covers everything, so neither the old content nor the
            // pending batch survives
            self.ctx = RenderContext::new(self.width, self.height);
            self.pending = true;
        }
        let bounds = self.bounds();
        let ctx = self.batch();
        ctx.set_transform(Affine::IDENTITY);
        ctx.set_paint(color(background));
        ctx.fill_rect(&bounds);
    }

    fn ellipse(&mut self, center: Point2<f32>, width: f32, height: f32) {
        let radii = (f64::from(width.abs()) / 2.0, f64::from(height.abs()) / 2.0);
        self.draw_closed(Ellipse::new(point(center), radii, 0.0).to_path(TOLERANCE));
    }

    fn rect(&mut self, center: Point2<f32>, width: f32, height: f32) {
        let size = (f64::from(width.abs()), f64::from(height.abs()));
        self.draw_closed(Rect::from_center_size(point(center), size).to_path(TOLERANCE));
    }

    fn line(&mut self, a: Point2<f32>, b: Point2<f32>) {
        let transform = self.state.transform;
        let Some((stroke_color, stroke)) = self.outline() else {
            return;
        };
        let ctx = self.batch();
        ctx.set_transform(transform);
        ctx.set_stroke(stroke);
        ctx.set_paint(color(stroke_color));
        ctx.stroke_path(&polygon(&[a, b], false));
    }

    fn triangle(&mut self, a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) {
        self.draw_closed(polygon(&[a, b, c], true));
    }

    fn quad(&mut self, a: Point2<f32>, b: Point2<f32>, c: Point2<f32>, d: Point2<f32>) {
        self.draw_closed(polygon(&[a, b, c, d], true));
    }

    fn point(&mut self, p: Point2<f32>) {
        let Some(stroke_color) = self.state.stroke else {
            return;
        };
        let radius = f64::from(self.state.stroke_weight) / 2.0;
        if radius <= 0.0 {
            return;
        }
        let transform = self.state.transform;
        let ctx = self.batch();
        ctx.set_transform(transform);
        ctx.set_paint(color(stroke_color));
        ctx.fill_path(&Circle::new(point(p), radius).to_path(TOLERANCE));
    }

    fn image(&mut self, image: &ImageAsset, center: Point2<f32>, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let (iw, ih) = (f64::from(image.width()), f64::from(image.height()));
        let (w, h) = (f64::from(width), f64::from(height));
        let placement = self.state.transform
            * Affine::translate((f64::from(center.x) - w / 2.0, f64::from(center.y) - h / 2.0))
            * Affine::scale_non_uniform(w / iw, h / ih);

        let ctx = self.batch();
        ctx.set_transform(placement);
        ctx.set_paint_transform(Affine::IDENTITY);
        ctx.set_paint(image.paint().clone());
        ctx.fill_rect(&Rect::new(0.0, 0.0, iw, ih));
    }
}
