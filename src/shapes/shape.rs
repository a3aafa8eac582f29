//! Shape - an animated drawable
//!
//! A shape owns immutable baselines (position, size, stroke weight, fill)
//! and one oscillator per attribute. [`Shape::advance`] recomputes every
//! current attribute from the baselines and the tick; [`Shape::render`]
//! paints the current state.
//!
//! ## Determinism
//!
//! Position, size, stroke weight and fill are pure functions of the
//! baselines, the oscillator parameters and the tick. The two exceptions
//! carry state on purpose:
//! - rotation accumulates `rotation_speed` every advance
//! - random color mode holds its last color between resampling ticks

use std::cell::Cell;
use std::sync::Arc;

use nalgebra::Point2;

use super::color::Rgba;
use super::config::{ShapeConfig, DEFAULT_STROKE_WEIGHT};
use super::image::ImageAsset;
use super::kind::{Extent, ShapeKind};
use crate::animation::{
    ColorOscillator, Oscillator, RandomColor, DEFAULT_RANDOM_INTERVAL, MIN_SIZE, MIN_STROKE,
};
use crate::render::Surface;

/// An animated primitive
#[derive(Debug)]
pub struct Shape {
    kind: ShapeKind,

    base_position: Point2<f32>,
    position: Point2<f32>,

    base_extent: Extent,
    extent: Extent,

    rotation: f32,
    rotation_speed: f32,

    base_fill: Rgba,
    fill: Rgba,
    stroke_color: Rgba,

    base_stroke_weight: f32,
    stroke_weight: f32,

    vertices: [Point2<f32>; 4],
    image: Option<Arc<ImageAsset>>,

    motion_x: Oscillator,
    motion_y: Oscillator,
    size_oscillator: Oscillator,
    stroke_oscillator: Oscillator,
    color_oscillator: ColorOscillator,
    random_color: Option<RandomColor>,

    warned: Cell<bool>,
}

impl Shape {
    /// Build a shape from its config, resolving every unset field to its default
    pub fn new(config: ShapeConfig) -> Self {
        let m = &config.motion;

        let extent = match config.kind.default_extent() {
            Extent::Diameter(d) => Extent::Diameter(config.size.unwrap_or(d)),
            Extent::Box { width, height } => Extent::Box {
                width: config.width.unwrap_or(width),
                height: config.height.unwrap_or(height),
            },
            Extent::Vertices => Extent::Vertices,
        };
        let base_extent = match (extent, m.base_size) {
            (Extent::Diameter(_), Some(base)) => Extent::Diameter(base),
            _ => extent,
        };

        let mut vertices = [Point2::origin(); 4];
        for (slot, (x, y)) in vertices.iter_mut().zip(config.vertices.iter()) {
            *slot = Point2::new(*x, *y);
        }

        let oscillator = |a: Option<f32>, f: Option<f32>, p: Option<f32>| {
            Oscillator::new(a.unwrap_or(0.0), f.unwrap_or(0.0), p.unwrap_or(0.0))
        };

        let random_color = if m.randomize_color.unwrap_or(false) {
            Some(RandomColor::new(
                m.random_color_interval.unwrap_or(DEFAULT_RANDOM_INTERVAL),
                m.random_seed,
            ))
        } else {
            None
        };

        let position = Point2::new(config.x, config.y);
        let stroke_weight = config.stroke_weight.unwrap_or(DEFAULT_STROKE_WEIGHT);

        Self {
            kind: config.kind,
            base_position: position,
            position,
            base_extent,
            extent,
            rotation: m.rotation.unwrap_or(0.0),
            rotation_speed: m.rotation_speed.unwrap_or(0.0),
            base_fill: config.color,
            fill: config.color,
            stroke_color: config.stroke_color,
            base_stroke_weight: m.base_stroke.unwrap_or(stroke_weight),
            stroke_weight,
            vertices,
            image: config.image.clone(),
            motion_x: oscillator(m.amplitude_x, m.frequency_x, m.offset_x),
            motion_y: oscillator(m.amplitude_y, m.frequency_y, m.offset_y),
            size_oscillator: oscillator(m.amplitude_size, m.frequency_size, m.offset_size),
            stroke_oscillator: oscillator(m.amplitude_stroke, m.frequency_stroke, m.offset_stroke),
            color_oscillator: ColorOscillator {
                amplitude: [
                    m.amplitude_r.unwrap_or(0.0),
                    m.amplitude_g.unwrap_or(0.0),
                    m.amplitude_b.unwrap_or(0.0),
                    m.amplitude_a.unwrap_or(0.0),
                ],
                frequency: m.frequency_color.unwrap_or(0.0),
                phase: m.offset_color.unwrap_or(0.0),
            },
            random_color,
            warned: Cell::new(false),
        }
    }

    /// Recompute every animated attribute for `tick`
    pub fn advance(&mut self, tick: u64) {
        self.rotation += self.rotation_speed;

        self.position = Point2::new(
            self.motion_x.apply(self.base_position.x, tick),
            self.motion_y.apply(self.base_position.y, tick),
        );

        self.extent = if self.size_oscillator.is_active() {
            self.base_extent
                .offset(self.size_oscillator.offset(tick), MIN_SIZE)
        } else {
            self.base_extent
        };

        self.stroke_weight =
            self.stroke_oscillator
                .apply_floored(self.base_stroke_weight, tick, MIN_STROKE);

        if let Some(random) = self.random_color.as_mut() {
            if let Some(color) = random.update(tick) {
                self.fill = color;
            }
        } else if self.color_oscillator.is_active() {
            self.fill = self.color_oscillator.apply(self.base_fill, tick);
        } else {
            self.fill = self.base_fill;
        }
    }

    /// Paint the current state.
    ///
    /// The primitive is always drawn around the local origin; the translate
    /// and rotate pushed here place it in the world.
    pub fn render(&self, surface: &mut dyn Surface) {
        let origin = Point2::origin();

        surface.push();
        surface.translate(self.position.x, self.position.y);
        surface.rotate(self.rotation);

        if self.kind == ShapeKind::Image {
            surface.no_fill();
            surface.no_stroke();
        } else {
            surface.fill(self.fill);
            if self.stroke_weight > 0.0 {
                surface.stroke(self.stroke_color);
                surface.stroke_weight(self.stroke_weight);
            } else {
                surface.no_stroke();
            }
        }

        let [v1, v2, v3, v4] = self.vertices;
        match (self.kind, self.extent) {
            (ShapeKind::Image, Extent::Box { width, height }) => {
                if let Some(image) = &self.image {
                    surface.image(image, origin, width, height);
                }
            }
            (ShapeKind::Circle, Extent::Diameter(d)) => surface.ellipse(origin, d, d),
            (ShapeKind::Ellipse, Extent::Box { width, height }) => {
                surface.ellipse(origin, width, height)
            }
            (ShapeKind::Rect, Extent::Box { width, height }) => surface.rect(origin, width, height),
            (ShapeKind::Square, Extent::Diameter(d)) => surface.rect(origin, d, d),
            (ShapeKind::Line, _) => surface.line(v1, v2),
            (ShapeKind::Triangle, _) => surface.triangle(v1, v2, v3),
            (ShapeKind::Quad, _) => surface.quad(v1, v2, v3, v4),
            (ShapeKind::Point, _) => surface.point(origin),
            (kind, _) => {
                if !self.warned.replace(true) {
                    log::warn!("Unknown shape kind {:?}, skipping draw", kind.name());
                }
            }
        }

        surface.pop();
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    /// Scalar size, for circle/square/point shapes
    pub fn size(&self) -> Option<f32> {
        match self.extent {
            Extent::Diameter(d) => Some(d),
            _ => None,
        }
    }

    /// Width and height, for ellipse/rect/image shapes
    pub fn dimensions(&self) -> Option<(f32, f32)> {
        match self.extent {
            Extent::Box { width, height } => Some((width, height)),
            _ => None,
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn fill(&self) -> Rgba {
        self.fill
    }

    pub fn stroke_weight(&self) -> f32 {
        self.stroke_weight
    }

    pub fn image(&self) -> Option<&Arc<ImageAsset>> {
        self.image.as_ref()
    }
}

/// Baselines and oscillators
#[cfg(test)]
impl Shape {
    pub fn base_position(&self) -> Point2<f32> {
        self.base_position
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn base_extent(&self) -> Extent {
        self.base_extent
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn base_fill(&self) -> Rgba {
        self.base_fill
    }

    pub fn stroke_color(&self) -> Rgba {
        self.stroke_color
    }

    pub fn base_stroke_weight(&self) -> f32 {
        self.base_stroke_weight
    }

    pub fn vertices(&self) -> &[Point2<f32>; 4] {
        &self.vertices
    }

    pub fn motion_x(&self) -> Oscillator {
        self.motion_x
    }

    pub fn motion_y(&self) -> Oscillator {
        self.motion_y
    }

    pub fn size_oscillator(&self) -> Oscillator {
        self.size_oscillator
    }

    pub fn stroke_oscillator(&self) -> Oscillator {
        self.stroke_oscillator
    }

    pub fn color_oscillator(&self) -> ColorOscillator {
        self.color_oscillator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{DrawCall, Recorder};
    use crate::shapes::Motion;
    use std::f32::consts::PI;

    fn everything_off() -> Vec<ShapeConfig> {
        vec![
            ShapeConfig::circle(60.0).at(10.0, 20.0),
            ShapeConfig::rect(190.0, 50.0).at(300.0, 200.0).rotation(PI),
            ShapeConfig::triangle((0.0, -60.0), (-60.0, 60.0), (60.0, 60.0)).at(5.0, 5.0),
            ShapeConfig::point().at(1.0, 2.0).stroke(Rgba::WHITE, 8.0),
        ]
    }

    #[test]
    fn test_baseline_reversion() {
        for config in everything_off() {
            let mut shape = Shape::new(config);
            for tick in 0..1000 {
                shape.advance(tick);
                assert_eq!(shape.position(), shape.base_position());
                assert_eq!(shape.extent(), shape.base_extent());
                assert_eq!(shape.stroke_weight(), shape.base_stroke_weight());
                assert_eq!(shape.fill(), shape.base_fill());
            }
        }
    }

    #[test]
    fn test_position_bounded() {
        let config = ShapeConfig::circle(50.0)
            .at(500.0, 300.0)
            .motion(Motion::new().move_x(250.0, -0.003, -PI).move_y(30.0, 0.04, 600.0));
        let mut shape = Shape::new(config);
        for tick in 0..5000 {
            shape.advance(tick);
            let p = shape.position();
            assert!(p.x >= 250.0 - 1e-3 && p.x <= 750.0 + 1e-3);
            assert!(p.y >= 270.0 - 1e-3 && p.y <= 330.0 + 1e-3);
        }
    }

    #[test]
    fn test_position_formula() {
        let config = ShapeConfig::circle(50.0)
            .at(100.0, 100.0)
            .motion(Motion::new().move_y(15.0, 0.02, PI * 0.1));
        let mut shape = Shape::new(config);
        shape.advance(50);
        let expected = 100.0 + 15.0 * (50.0f32 * 0.02 + PI * 0.1).sin();
        assert!((shape.position().y - expected).abs() < 1e-3);
        assert_eq!(shape.position().x, 100.0);
    }

    #[test]
    fn test_rotation_accumulates() {
        let config = ShapeConfig::square(15.0).motion(
            Motion::new()
                .with_rotation(PI / 4.0)
                .with_rotation_speed(0.002),
        );
        let mut shape = Shape::new(config);
        for tick in 1..=100 {
            shape.advance(tick);
        }
        assert!((shape.rotation() - (PI / 4.0 + 0.2)).abs() < 1e-4);
    }

    #[test]
    fn test_size_floor() {
        let config = ShapeConfig::circle(70.0).motion(Motion::new().pulse_size(150.0, 0.005, 0.0));
        let mut shape = Shape::new(config);
        for tick in 0..3000 {
            shape.advance(tick);
            let size = shape.size().unwrap();
            assert!(size >= 1.0 && size <= 220.0 + 1e-3);
        }
    }

    #[test]
    fn test_box_lockstep() {
        let config = ShapeConfig::ellipse(120.0, 20.0).motion(Motion::new().pulse_size(10.0, 0.1, 0.0));
        let mut shape = Shape::new(config);
        shape.advance(7);
        let (w, h) = shape.dimensions().unwrap();
        assert!(((w - 120.0) - (h - 20.0)).abs() < 1e-4);
    }

    #[test]
    fn test_base_size_override() {
        let config = ShapeConfig::circle(10.0).motion(Motion {
            base_size: Some(40.0),
            ..Default::default()
        });
        let mut shape = Shape::new(config);
        assert_eq!(shape.size(), Some(10.0));
        shape.advance(1);
        assert_eq!(shape.size(), Some(40.0));
    }

    #[test]
    fn test_stroke_floor() {
        let config = ShapeConfig::triangle((0.0, 0.0), (1.0, 0.0), (0.0, 1.0))
            .stroke(Rgba::BLACK, 2.0)
            .motion(Motion::new().pulse_stroke(6.0, 0.039, PI));
        let mut shape = Shape::new(config);
        for tick in 0..500 {
            shape.advance(tick);
            assert!(shape.stroke_weight() >= 0.0 && shape.stroke_weight() <= 8.0 + 1e-4);
        }
    }

    #[test]
    fn test_determinism() {
        let config = ShapeConfig::rect(20.0, 80.0)
            .at(400.0, 300.0)
            .motion(
                Motion::new()
                    .move_x(6.0, -0.01, PI / 2.0)
                    .move_y(8.0, 0.015, PI * 1.2)
                    .pulse_size(4.0, 0.3, 1.0)
                    .pulse_stroke(1.0, 0.1, 0.0)
                    .pulse_color([20.0, 30.0, 40.0, 50.0], 0.2, 0.0)
                    .with_rotation_speed(0.01),
            );
        let mut a = Shape::new(config.clone());
        let mut b = Shape::new(config);
        for tick in 0..300 {
            a.advance(tick);
            b.advance(tick);
            assert_eq!(a.position(), b.position());
            assert_eq!(a.extent(), b.extent());
            assert_eq!(a.fill(), b.fill());
            assert_eq!(a.stroke_weight(), b.stroke_weight());
            assert_eq!(a.rotation(), b.rotation());
        }
    }

    #[test]
    fn test_random_color_holds_between_intervals() {
        let config = ShapeConfig::circle(30.0).motion(Motion {
            random_seed: Some(3),
            ..Motion::new().random_color(12)
        });
        let mut shape = Shape::new(config);
        let mut previous = shape.fill();
        for tick in 1..200 {
            shape.advance(tick);
            if tick % 12 != 0 {
                assert_eq!(shape.fill(), previous, "changed at tick {tick}");
            }
            previous = shape.fill();
        }
    }

    #[test]
    fn test_random_color_overrides_rhythm() {
        let config = ShapeConfig::circle(30.0).motion(Motion {
            random_seed: Some(3),
            ..Motion::new()
                .random_color(5)
                .pulse_color([100.0, 100.0, 100.0, 0.0], 0.5, 0.0)
        });
        let mut shape = Shape::new(config);
        let base = shape.base_fill();
        for tick in 1..5 {
            shape.advance(tick);
            assert_eq!(shape.fill(), base);
        }
    }

    #[test]
    fn test_render_sequence() {
        let config = ShapeConfig::rect(20.0, 40.0)
            .at(100.0, 50.0)
            .fill(Rgba::gray(25.0))
            .stroke(Rgba::BLACK, 2.0)
            .rotation(PI / 2.0);
        let shape = Shape::new(config);
        let mut recorder = Recorder::new(1000.0, 600.0);
        shape.render(&mut recorder);
        assert_eq!(
            recorder.calls,
            vec![
                DrawCall::Push,
                DrawCall::Translate(100.0, 50.0),
                DrawCall::Rotate(PI / 2.0),
                DrawCall::Fill(Rgba::gray(25.0)),
                DrawCall::Stroke(Rgba::BLACK),
                DrawCall::StrokeWeight(2.0),
                DrawCall::Rect(0.0, 0.0, 20.0, 40.0),
                DrawCall::Pop,
            ]
        );
    }

    #[test]
    fn test_zero_stroke_disables_outline() {
        let shape = Shape::new(ShapeConfig::circle(60.0).stroke_weight(0.0));
        let mut recorder = Recorder::new(100.0, 100.0);
        shape.render(&mut recorder);
        assert!(recorder.calls.contains(&DrawCall::NoStroke));
        assert!(recorder.calls.contains(&DrawCall::Ellipse(0.0, 0.0, 60.0, 60.0)));
    }

    #[test]
    fn test_missing_image_is_silent() {
        let mut config = ShapeConfig::new(ShapeKind::Image).dimensions(50.0, 50.0);
        config.image = None;
        let shape = Shape::new(config);
        let mut recorder = Recorder::new(100.0, 100.0);
        shape.render(&mut recorder);
        assert_eq!(recorder.primitive_count(), 0);
        assert!(recorder.calls.contains(&DrawCall::NoFill));
        assert_eq!(recorder.calls.last(), Some(&DrawCall::Pop));
    }

    #[test]
    fn test_unknown_kind_draws_nothing() {
        let shape = Shape::new(ShapeConfig::new(ShapeKind::Unknown));
        let mut recorder = Recorder::new(100.0, 100.0);
        shape.render(&mut recorder);
        shape.render(&mut recorder);
        assert_eq!(recorder.primitive_count(), 0);
        assert_eq!(recorder.depth(), 0);
    }
}
