//! Classic demos - small sketches that paint the surface directly
//!
//! None of these build a [`Scene`](crate::shapes::Scene); they keep a few
//! numbers of their own and issue draw calls every tick.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Assets, Sketch};
use crate::render::Surface;
use crate::shapes::Rgba;

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// A square and a circle spinning about the canvas center
pub struct RotatingShapes {
    angle: f32,
}

impl RotatingShapes {
    /// Radians added every frame
    pub const SPEED: f32 = 0.02;

    pub fn new() -> Self {
        Self { angle: 0.0 }
    }

    #[cfg(test)]
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Default for RotatingShapes {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for RotatingShapes {
    fn name(&self) -> &str {
        "Rotating Shapes"
    }

    fn setup(&mut self, surface: &mut dyn Surface, _assets: &Assets) {
        surface.background(Rgba::gray(240.0));
    }

    fn draw(&mut self, surface: &mut dyn Surface, _tick: u64) {
        surface.background(Rgba::gray(240.0));
        surface.stroke(Rgba::BLACK);
        surface.stroke_weight(1.0);

        surface.push();
        surface.translate(surface.width() / 2.0, surface.height() / 2.0);
        surface.rotate(self.angle);

        surface.fill(Rgba::rgb(255.0, 100.0, 100.0));
        surface.rect(Point2::origin(), 50.0, 50.0);

        surface.rotate(std::f32::consts::FRAC_PI_4);
        surface.fill(Rgba::rgb(100.0, 255.0, 100.0));
        surface.ellipse(Point2::origin(), 40.0, 40.0);
        surface.pop();

        self.angle += Self::SPEED;
    }
}

/// Two dotted sine waves drifting across the middle of the canvas
#[derive(Default)]
pub struct WaveAnimation;

impl WaveAnimation {
    /// Horizontal distance between dots
    pub const STEP: usize = 5;

    pub fn new() -> Self {
        Self
    }
}

impl Sketch for WaveAnimation {
    fn name(&self) -> &str {
        "Wave Animation"
    }

    fn setup(&mut self, surface: &mut dyn Surface, _assets: &Assets) {
        surface.background(Rgba::BLACK);
    }

    fn draw(&mut self, surface: &mut dyn Surface, tick: u64) {
        surface.background(Rgba::gray_alpha(0.0, 10.0));
        surface.stroke(Rgba::WHITE);
        surface.stroke_weight(1.0);
        surface.no_fill();

        let (width, mid) = (surface.width(), surface.height() / 2.0);
        let t = tick as f32;
        let xs = (0..).map(|i| (i * Self::STEP) as f32).take_while(|x| *x < width);

        for x in xs.clone() {
            surface.point(Point2::new(x, mid + (x * 0.01 + t * 0.02).sin() * 50.0));
        }
        for x in xs {
            surface.point(Point2::new(x, mid + (x * 0.015 + t * 0.03).cos() * 30.0));
        }
    }
}

/// One random translucent circle per frame over a slowly darkening veil
pub struct RandomCircles {
    rng: StdRng,
}

impl RandomCircles {
    /// `seed` makes the sequence of circles reproducible
    pub fn new(seed: Option<u64>) -> Self {
        Self { rng: rng_from(seed) }
    }
}

impl Sketch for RandomCircles {
    fn name(&self) -> &str {
        "Random Circles"
    }

    fn setup(&mut self, surface: &mut dyn Surface, _assets: &Assets) {
        surface.background(Rgba::gray(10.0));
    }

    fn draw(&mut self, surface: &mut dyn Surface, _tick: u64) {
        let (width, height) = (surface.width(), surface.height());
        surface.background(Rgba::gray_alpha(50.0, 20.0));

        surface.no_stroke();
        surface.fill(Rgba::gray_alpha(10.0, 10.0));
        surface.rect(Point2::new(width / 2.0, height / 2.0), width, height);

        let center = Point2::new(
            self.rng.random_range(0.0..width.max(1.0)),
            self.rng.random_range(0.0..height.max(1.0)),
        );
        let size = self.rng.random_range(10.0..30.0);
        let color = Rgba::new(
            self.rng.random_range(0.0..255.0),
            self.rng.random_range(0.0..255.0),
            self.rng.random_range(0.0..255.0),
            self.rng.random_range(50.0..150.0),
        );
        surface.fill(color);
        surface.ellipse(center, size, size);
    }
}

/// A ball that reverses direction whenever it crosses an edge
pub struct ReflectingBall {
    position: Point2<f32>,
    velocity: (f32, f32),
    rng: StdRng,
}

impl ReflectingBall {
    pub const SIZE: f32 = 40.0;
    pub const COLOR: Rgba = Rgba::rgb(255.0, 100.0, 100.0);

    pub fn new() -> Self {
        Self::with_seed(None)
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            position: Point2::origin(),
            velocity: (0.0, 0.0),
            rng: rng_from(seed),
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    #[cfg(test)]
    pub fn velocity(&self) -> (f32, f32) {
        self.velocity
    }

    /// Move one step, flipping each velocity component whose edge is crossed
    fn step(&mut self, width: f32, height: f32) {
        let r = Self::SIZE / 2.0;
        self.position.x += self.velocity.0;
        self.position.y += self.velocity.1;

        if self.position.x + r > width || self.position.x - r < 0.0 {
            self.velocity.0 = -self.velocity.0;
        }
        if self.position.y + r > height || self.position.y - r < 0.0 {
            self.velocity.1 = -self.velocity.1;
        }
    }
}

impl Default for ReflectingBall {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for ReflectingBall {
    fn name(&self) -> &str {
        "Reflecting Ball"
    }

    fn setup(&mut self, surface: &mut dyn Surface, _assets: &Assets) {
        surface.background(Rgba::gray(200.0));
        self.position = Point2::new(surface.width() / 2.0, surface.height() / 2.0);
        self.velocity = (
            self.rng.random_range(-5.0..5.0),
            self.rng.random_range(-3.0..3.0),
        );
        log::debug!("Ball launched with velocity {:?}", self.velocity);
    }

    fn draw(&mut self, surface: &mut dyn Surface, _tick: u64) {
        surface.background(Rgba::gray_alpha(200.0, 4.0));
        self.step(surface.width(), surface.height());

        surface.stroke(Rgba::BLACK);
        surface.stroke_weight(1.0);
        surface.fill(Self::COLOR);
        surface.ellipse(self.position, Self::SIZE, Self::SIZE);
    }
}

/// A ball spiralling out of the canvas center, thrown back from the walls.
///
/// A wall hit recomputes the radius from the angle so the next frames land
/// near that wall; the vertical walls add a random factor, which keeps the
/// figure from settling into a fixed orbit.
pub struct SpiralBall {
    center: Point2<f32>,
    angle: f32,
    radius: f32,
    rng: StdRng,
}

impl SpiralBall {
    pub const SIZE: f32 = 30.0;
    pub const COLOR: Rgba = Rgba::rgb(5.0, 240.0, 210.0);

    /// Radians added to the angle every frame
    pub const ANGLE_STEP: f32 = 0.2;

    /// The ball turns at this fraction of the angle
    const TURN: f32 = 0.6;

    /// Smallest divisor a wall snap accepts
    const MIN_DIVISOR: f32 = 1e-3;

    pub fn new() -> Self {
        Self::with_seed(None)
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            center: Point2::origin(),
            angle: 0.0,
            radius: 1.0,
            rng: rng_from(seed),
        }
    }

    /// Radius added every frame
    fn growth() -> f32 {
        0.4 * 0.5f32.sin()
    }

    /// Advance one frame, returning where the ball is drawn
    fn step(&mut self, width: f32, height: f32) -> Point2<f32> {
        self.angle += Self::ANGLE_STEP;
        self.radius += Self::growth();

        let turn = Self::TURN * self.angle;
        let p = Point2::new(
            self.center.x + self.radius * turn.cos(),
            self.center.y + self.radius * turn.sin(),
        );
        let r = Self::SIZE / 2.0;

        if p.x + r > width || p.x - r < 0.0 {
            let edge = if p.x + r > width { width - r } else { r };
            self.snap(edge - self.center.x, self.angle.cos());
        }
        if p.y + r > height || p.y - r < 0.0 {
            let (edge, scale) = if p.y + r > height {
                (height - r, 3.0)
            } else {
                (r, 2.0)
            };
            let divisor = (scale * self.angle * self.rng.random::<f32>()).sin();
            self.snap(edge - self.center.y, divisor);
        }
        p
    }

    /// Reset the radius so `distance` is covered along `divisor`; a
    /// degenerate divisor throws the ball three times as far instead
    fn snap(&mut self, distance: f32, divisor: f32) {
        if divisor.abs() > Self::MIN_DIVISOR {
            self.radius = distance / divisor;
        } else {
            self.radius *= 3.0;
        }
    }
}

impl Default for SpiralBall {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for SpiralBall {
    fn name(&self) -> &str {
        "Spiral Ball"
    }

    fn setup(&mut self, surface: &mut dyn Surface, _assets: &Assets) {
        surface.background(Rgba::gray(10.0));
        self.center = Point2::new(surface.width() / 2.0, surface.height() / 2.0);
        self.angle = 0.0;
        self.radius = 1.0;
    }

    fn draw(&mut self, surface: &mut dyn Surface, _tick: u64) {
        surface.background(Rgba::gray_alpha(10.0, 2.0));
        let position = self.step(surface.width(), surface.height());

        surface.stroke(Rgba::BLACK);
        surface.stroke_weight(1.0);
        surface.fill(Self::COLOR);
        surface.ellipse(position, Self::SIZE, Self::SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{DrawCall, Recorder};

    fn surface() -> Recorder {
        Recorder::new(800.0, 600.0)
    }

    #[test]
    fn test_rotating_shapes_advance() {
        let mut sketch = RotatingShapes::new();
        let mut surface = surface();
        sketch.setup(&mut surface, &Assets::none());
        for tick in 1..=3 {
            sketch.draw(&mut surface, tick);
        }
        assert!((sketch.angle() - 3.0 * RotatingShapes::SPEED).abs() < 1e-6);
        assert_eq!(surface.depth(), 0);
        assert!(surface.calls.contains(&DrawCall::Rect(0.0, 0.0, 50.0, 50.0)));
        assert!(surface.calls.contains(&DrawCall::Ellipse(0.0, 0.0, 40.0, 40.0)));
    }

    #[test]
    fn test_wave_points() {
        let mut sketch = WaveAnimation::new();
        let mut surface = surface();
        sketch.setup(&mut surface, &Assets::none());
        surface.clear();
        sketch.draw(&mut surface, 1);

        // Two waves of 160 dots each across 800 px
        assert_eq!(surface.primitive_count(), 320);
        assert_eq!(surface.calls[0], DrawCall::Background(Rgba::gray_alpha(0.0, 10.0)));
        let first = surface
            .calls
            .iter()
            .find(|c| matches!(c, DrawCall::Point(..)))
            .cloned();
        assert_eq!(first, Some(DrawCall::Point(0.0, 300.0 + 0.02f32.sin() * 50.0)));
    }

    #[test]
    fn test_random_circles_reproducible() {
        let run = |seed| {
            let mut sketch = RandomCircles::new(Some(seed));
            let mut surface = surface();
            sketch.setup(&mut surface, &Assets::none());
            for tick in 1..=5 {
                sketch.draw(&mut surface, tick);
            }
            surface.calls
        };
        let calls = run(7);
        assert_eq!(calls, run(7));

        let circles: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Ellipse(x, y, w, h) => Some((*x, *y, *w, *h)),
                _ => None,
            })
            .collect();
        assert_eq!(circles.len(), 5);
        for (x, y, w, h) in circles {
            assert!((0.0..800.0).contains(&x) && (0.0..600.0).contains(&y));
            assert_eq!(w, h);
            assert!((10.0..30.0).contains(&w));
        }
    }

    #[test]
    fn test_ball_reflects_off_edges() {
        let mut ball = ReflectingBall::with_seed(Some(3));
        ball.position = Point2::new(775.0, 300.0);
        ball.velocity = (4.0, 0.0);
        ball.step(800.0, 600.0);
        assert_eq!(ball.position().x, 779.0);
        assert_eq!(ball.velocity(), (4.0, 0.0));
        ball.step(800.0, 600.0);
        assert_eq!(ball.velocity(), (-4.0, 0.0));

        ball.position = Point2::new(400.0, 22.0);
        ball.velocity = (0.0, -3.0);
        ball.step(800.0, 600.0);
        assert_eq!(ball.velocity(), (0.0, 3.0));
    }

    #[test]
    fn test_ball_starts_centered() {
        let mut ball = ReflectingBall::with_seed(Some(11));
        let mut surface = surface();
        ball.setup(&mut surface, &Assets::none());
        assert_eq!(ball.position(), Point2::new(400.0, 300.0));
        let (vx, vy) = ball.velocity();
        assert!((-5.0..5.0).contains(&vx));
        assert!((-3.0..3.0).contains(&vy));

        ball.draw(&mut surface, 1);
        assert!(surface.calls.contains(&DrawCall::Fill(ReflectingBall::COLOR)));
    }

    #[test]
    fn test_spiral_starts_at_center() {
        let mut ball = SpiralBall::with_seed(Some(1));
        let mut surface = surface();
        ball.setup(&mut surface, &Assets::none());
        assert_eq!(surface.calls, vec![DrawCall::Background(Rgba::gray(10.0))]);

        surface.clear();
        ball.draw(&mut surface, 1);
        let radius = 1.0 + SpiralBall::growth();
        let turn = 0.6 * SpiralBall::ANGLE_STEP;
        assert_eq!(surface.calls[0], DrawCall::Background(Rgba::gray_alpha(10.0, 2.0)));
        assert!(surface.calls.contains(&DrawCall::Fill(SpiralBall::COLOR)));
        assert!(surface.calls.contains(&DrawCall::Ellipse(
            400.0 + radius * turn.cos(),
            300.0 + radius * turn.sin(),
            SpiralBall::SIZE,
            SpiralBall::SIZE,
        )));
    }

    #[test]
    fn test_spiral_grows_until_a_wall() {
        let mut ball = SpiralBall::with_seed(Some(2));
        ball.center = Point2::new(400.0, 300.0);
        let mut last = ball.radius;
        for _ in 0..50 {
            ball.step(800.0, 600.0);
            assert!(ball.radius > last);
            last = ball.radius;
        }
    }

    #[test]
    fn test_spiral_snaps_back_from_right_wall() {
        let mut ball = SpiralBall::with_seed(Some(3));
        ball.center = Point2::new(50.0, 50.0);
        ball.radius = 40.0;

        // Drawn where it overshot, then pulled in for the next frame
        let p = ball.step(100.0, 100.0);
        assert!(p.x + SpiralBall::SIZE / 2.0 > 100.0);
        let expected = 35.0 / SpiralBall::ANGLE_STEP.cos();
        assert!((ball.radius - expected).abs() < 1e-4);
    }

    #[test]
    fn test_spiral_reproducible() {
        let run = |seed| {
            let mut ball = SpiralBall::with_seed(Some(seed));
            let mut surface = Recorder::new(200.0, 150.0);
            ball.setup(&mut surface, &Assets::none());
            for tick in 1..=300 {
                ball.draw(&mut surface, tick);
            }
            surface.calls
        };
        assert_eq!(run(9), run(9));
    }
}
