//! Connect - colored rings around a dark triangle knot
//!
//! A few dozen tinted rings share the canvas center, each tracing its own
//! Lissajous path; pulsing circles sit at the corners and edges. Three heavy
//! dark lines and a stack of triangles mark the middle. On a black background
//! with a long trail the translucent fills pile up into glowing loops.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::{Assets, Sketch};
use crate::patterns::{concentric_circles, independent_circles, independent_shapes, CircleConfig};
use crate::render::Surface;
use crate::shapes::{Bounds, Motion, Rgba, Scene, ShapeConfig};

const BASE_DIAMETER: f32 = 50.0;

const RING_STROKE: Rgba = Rgba::new(255.0, 255.0, 255.0, 90.0);

/// Length, color and weight of the spokes
const LINE_LENGTH: f32 = 150.0;
const LINE_COLOR: Rgba = Rgba::new(0.0, 0.0, 0.0, 200.0);
const LINE_WEIGHT: f32 = 12.0;

type Wave = (f32, f32, f32);

const STILL: Wave = (0.0, 0.0, 0.0);

fn ring(size: f32, color: Rgba, stroke: f32, speed: f32, x: Wave, y: Wave) -> CircleConfig {
    CircleConfig {
        stroke_weight: Some(stroke),
        stroke_color: RING_STROKE,
        motion: Motion::new()
            .with_rotation_speed(speed)
            .move_x(x.0, x.1, x.2)
            .move_y(y.0, y.1, y.2),
        ..CircleConfig::new(size, color)
    }
}

fn pulsing(mut circle: CircleConfig, pulse: Wave) -> CircleConfig {
    circle.motion = circle.motion.pulse_size(pulse.0, pulse.1, pulse.2);
    circle
}

fn center_rings() -> Vec<CircleConfig> {
    let d = BASE_DIAMETER;
    let magenta = Rgba::new(255.0, 25.0, 255.0, 10.0);
    let cyan = Rgba::new(25.0, 255.0, 255.0, 10.0);
    let amber = Rgba::new(250.0, 200.0, 0.0, 30.0);
    let red = Rgba::new(250.0, 2.0, 2.0, 10.0);
    let yellow = Rgba::new(255.0, 255.0, 25.0, 10.0);

    let mut breathing = ring(d + 20.0, magenta, 3.0, -5.015, STILL, (60.0, 0.02, FRAC_PI_2));
    breathing.motion = breathing
        .motion
        .pulse_size(150.0, 0.005, 0.0)
        .pulse_stroke(2.0, 0.008, FRAC_PI_2);

    let mut rings = vec![
        breathing,
        ring(d + 160.0, cyan, 1.0, -5.015, STILL, (400.0, 0.008, -FRAC_PI_2)),
        ring(d - 10.0, amber, 1.0, -5.015, (80.0, 0.04, 0.0), (400.0, 0.008, -FRAC_PI_2)),
        ring(d - 10.0, amber, 1.0, -5.015, (80.0, -0.04, 0.0), (400.0, 0.008, -FRAC_PI_2)),
        ring(d + 160.0, cyan, 1.0, 5.015, STILL, (420.0, 0.008, FRAC_PI_2)),
        ring(d - 20.0, red, 1.0, 5.015, (80.0, -0.04, 0.0), (420.0, 0.008, FRAC_PI_2)),
        ring(d - 20.0, red, 1.0, 5.015, (80.0, 0.04, 0.0), (420.0, 0.008, FRAC_PI_2)),
        ring(d + 100.0, yellow, 1.0, 5.015, (630.0, 0.002, PI), (390.0, 0.002, PI)),
        ring(d + 100.0, yellow, 1.0, 5.015, (630.0, -0.002, PI), (390.0, 0.002, PI)),
    ];

    // Wide sweeps; the second pair runs its height and size the other way
    let sweep = (100.0, 0.01, FRAC_PI_4);
    for ox in [FRAC_PI_2, -FRAC_PI_2] {
        rings.push(pulsing(
            ring(d + 80.0, yellow, 2.0, 0.01, (600.0, 0.004, ox), (80.0, 0.04, PI)),
            sweep,
        ));
    }
    for ox in [FRAC_PI_2, -FRAC_PI_2] {
        rings.push(pulsing(
            ring(d + 80.0, Rgba::new(255.0, 0.0, 25.0, 10.0), 2.0, 0.01, (600.0, 0.004, ox), (80.0, -0.04, PI)),
            (100.0, -0.01, FRAC_PI_4),
        ));
    }
    for ox in [FRAC_PI_2, -FRAC_PI_2] {
        rings.push(pulsing(
            ring(d + 80.0, Rgba::new(2.0, 255.0, 255.0, 10.0), 2.0, 0.01, (360.0, 0.02, ox), (300.0, 0.002, PI)),
            sweep,
        ));
    }

    // Narrow columns
    let navy = Rgba::new(0.0, 0.0, 120.0, 10.0);
    let scarlet = Rgba::new(255.0, 0.0, 0.0, 10.0);
    for fx in [0.02, -0.02] {
        rings.push(ring(d, navy, 2.0, 0.01, (100.0, fx, PI), (320.0, 0.002, FRAC_PI_2)));
    }
    for fx in [0.02, -0.02] {
        rings.push(pulsing(
            ring(d, scarlet, 2.0, 0.01, (100.0, fx, PI), (320.0, 0.002, FRAC_PI_2)),
            (60.0, 0.01, FRAC_PI_4),
        ));
    }

    // Diagonal loops, pulsing every other pair
    let crimson = Rgba::new(255.0, 2.0, 2.0, 10.0);
    let loops = [
        (crimson, 0.004, false),
        (Rgba::new(255.0, 255.0, 0.0, 10.0), 0.004, true),
        (crimson, -0.004, false),
        (Rgba::new(2.0, 2.0, 255.0, 10.0), -0.004, true),
    ];
    for (color, fy, pulses) in loops {
        for ox in [-FRAC_PI_2, FRAC_PI_2] {
            let circle = ring(d + 80.0, color, 2.0, 0.01, (430.0, 0.004, ox), (240.0, fy, -PI));
            rings.push(if pulses {
                pulsing(circle, (60.0, 0.01, FRAC_PI_4))
            } else {
                circle
            });
        }
    }

    rings
}

fn corner_circles(bounds: Bounds) -> Vec<CircleConfig> {
    let d = BASE_DIAMETER;
    let mut circles = Vec::new();

    // Three glowing beacons with rhythmic color
    let beacons = [
        ((0.32, 0.29), Rgba::new(230.0, 2.0, 2.0, 100.0), 0.0, [200.0, 120.0, 100.0, 20.0], 2.01),
        ((0.68, 0.29), Rgba::new(230.0, 230.0, 2.0, 20.0), FRAC_PI_2, [200.0, 120.0, 10.0, 20.0], 2.01),
        ((0.5, 0.9), Rgba::new(2.0, 230.0, 2.0, 20.0), FRAC_PI_2, [20.0, 220.0, 180.0, 20.0], 1.01),
    ];
    for ((fx, fy), color, size_offset, channels, frequency) in beacons {
        let (x, y) = bounds.at(fx, fy);
        circles.push(CircleConfig {
            x,
            y,
            stroke_weight: Some(15.0),
            motion: Motion::new()
                .with_rotation_speed(-5.015)
                .pulse_size(8.0, 0.085, size_offset)
                .pulse_stroke(5.0, 0.008, FRAC_PI_2)
                .pulse_color(channels, frequency, 0.0),
            ..CircleConfig::new(d + 24.0, color)
        });
    }

    // Swaying quarter markers
    let markers = [
        ((0.3, 0.3), Rgba::new(255.0, 0.0, 0.0, 10.0), 0.04, FRAC_PI_2),
        ((0.3, 0.7), Rgba::new(255.0, 255.0, 2.0, 10.0), -0.04, -FRAC_PI_2),
        ((0.7, 0.7), Rgba::new(255.0, 255.0, 2.0, 10.0), 0.04, -FRAC_PI_2),
        ((0.7, 0.3), Rgba::new(255.0, 0.0, 0.0, 10.0), -0.04, FRAC_PI_2),
    ];
    for ((fx, fy), color, frequency_x, offset_y) in markers {
        let (x, y) = bounds.at(fx, fy);
        circles.push(CircleConfig {
            x,
            y,
            stroke_weight: Some(4.0),
            motion: Motion {
                offset_y: Some(offset_y),
                ..Motion::new()
                    .with_rotation_speed(-5.015)
                    .move_x(80.0, frequency_x, 0.0)
                    .pulse_size(150.0, 0.005, 0.0)
                    .pulse_stroke(2.0, 0.008, FRAC_PI_2)
            },
            ..CircleConfig::new(d + 20.0, color)
        });
    }

    // Side orbiters: large faint ones, then small dense cores
    let green = Rgba::new(20.0, 240.0, 1.0, 5.0);
    let sides = [
        ((0.1, -FRAC_PI_2), -0.003),
        ((0.9, FRAC_PI_2), 0.003),
        ((0.1, -FRAC_PI_2), 0.003),
        ((0.9, FRAC_PI_2), -0.003),
    ];
    let side = |fx: f32, size: f32, color: Rgba, ox: f32, fy: f32| {
        let (x, y) = bounds.at(fx, 0.5);
        CircleConfig {
            x,
            y,
            stroke_weight: Some(2.0),
            motion: Motion::new()
                .with_rotation_speed(-0.01)
                .move_x(40.0, 0.03, ox)
                .move_y(150.0, fy, PI),
            ..CircleConfig::new(size, color)
        }
    };
    for ((fx, ox), fy) in sides {
        circles.push(pulsing(side(fx, 100.0, green, ox, fy), (60.0, -0.008, -FRAC_PI_2)));
    }
    let blue = Rgba::new(2.0, 20.0, 180.0, 25.0);
    let rose = Rgba::new(250.0, 1.0, 20.0, 30.0);
    for ((fx, ox), fy) in sides {
        let color = if fx < 0.5 { blue } else { rose };
        circles.push(side(fx, 30.0, color, ox, fy));
    }

    // Top and bottom spinners
    for (fy, color, direction) in [
        (0.85, Rgba::new(255.0, 255.0, 2.0, 10.0), 1.0),
        (0.15, Rgba::new(255.0, 2.0, 2.0, 10.0), -1.0),
    ] {
        let (x, y) = bounds.at(0.5, fy);
        circles.push(CircleConfig {
            x,
            y,
            stroke_weight: Some(2.0),
            motion: Motion::new()
                .with_rotation_speed(0.015)
                .move_x(30.0, 0.04 * direction, 0.0)
                .move_y(30.0, 0.04, FRAC_PI_2)
                .pulse_size(40.0, 0.008 * direction, PI),
            ..CircleConfig::new(30.0, color)
        });
    }

    circles
}

/// Three dark spokes hanging below the center
fn spokes(cx: f32, cy: f32) -> Vec<ShapeConfig> {
    let ends = [
        ((LINE_LENGTH, -LINE_LENGTH), 0.008, FRAC_PI_2),
        ((-LINE_LENGTH, -LINE_LENGTH), 0.008, FRAC_PI_4),
        ((0.0, LINE_LENGTH), 0.004, FRAC_PI_2),
    ];
    ends.into_iter()
        .map(|(end, frequency, offset)| {
            ShapeConfig::line((0.0, 0.0), end)
                .at(cx, cy + 50.0)
                .fill(LINE_COLOR)
                .stroke(LINE_COLOR, LINE_WEIGHT)
                .motion(Motion::new().pulse_stroke(5.0, frequency, offset))
        })
        .collect()
}

fn triangles(cx: f32, cy: f32) -> Vec<ShapeConfig> {
    let mut configs = Vec::new();

    // The big glowing frame
    let h = 43.3 * 3.0;
    configs.push(
        ShapeConfig::triangle((-150.0, h), (150.0, h), (0.0, -h))
            .fill(Rgba::new(20.0, 250.0, 205.0, 12.0))
            .stroke_weight(18.0)
            .motion(Motion {
                base_stroke: Some(15.0),
                ..Motion::new()
                    .pulse_stroke(6.0, 0.039, PI)
                    .pulse_color([120.0, 250.0, 100.0, 10.0], 0.01, 0.0)
            }),
    );

    // Small orbiting triangles
    let orbiters = [
        (Rgba::new(255.0, 255.0, 1.0, 12.0), 1.0, (-0.006, 0.006), FRAC_PI_2, 0.01),
        (Rgba::new(2.0, 255.0, 2.0, 12.0), 1.0, (-0.006, 0.006), -FRAC_PI_2, 0.01),
        (Rgba::new(1.0, 255.0, 255.0, 12.0), 2.0, (0.006, -0.006), FRAC_PI_2, -0.01),
        (Rgba::new(255.0, 2.0, 2.0, 12.0), 2.0, (-0.006, -0.006), -FRAC_PI_2, -0.01),
    ];
    for (color, stroke, (fx, fy), ox, speed) in orbiters {
        configs.push(
            ShapeConfig::triangle((-25.0, 25.0), (25.0, 25.0), (0.0, -43.3 / 2.0))
                .fill(color)
                .stroke_weight(stroke)
                .motion(
                    Motion::new()
                        .with_rotation_speed(speed)
                        .move_x(275.0, fx, ox)
                        .move_y(275.0, fy, PI),
                ),
        );
    }

    // Counter-rotating pairs, up then down
    let up = |speed: f32| {
        ShapeConfig::triangle((-150.0, 190.0), (150.0, 190.0), (0.0, -200.0))
            .fill(Rgba::new(200.0, 245.0, 2.0, 8.0))
            .stroke_weight(1.0)
            .motion(
                Motion::new()
                    .with_rotation_speed(speed)
                    .pulse_size(120.0, 3.03, FRAC_PI_4),
            )
    };
    let down = |speed: f32| {
        ShapeConfig::triangle((-150.0, -200.0), (150.0, -200.0), (0.0, 190.0))
            .fill(Rgba::new(200.0, 25.0, 2.0, 8.0))
            .stroke_weight(1.0)
            .motion(Motion::new().with_rotation_speed(speed))
    };
    configs.extend([up(-0.02), down(0.02), up(0.02), down(-0.02)]);

    configs.into_iter().map(|c| c.at(cx, cy)).collect()
}

pub struct Connect {
    scene: Option<Scene>,
}

impl Connect {
    pub fn new() -> Self {
        Self { scene: None }
    }

    #[cfg(test)]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }
}

impl Default for Connect {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for Connect {
    fn name(&self) -> &str {
        "Connect"
    }

    fn setup(&mut self, surface: &mut dyn Surface, _assets: &Assets) {
        surface.background(Rgba::BLACK);

        let bounds = Bounds::of(surface);
        let (cx, cy) = (bounds.center_x(), bounds.center_y());
        let mut scene = Scene::new(bounds);
        let none = Motion::new();

        concentric_circles(&mut scene, cx, cy, &center_rings(), &none);
        independent_circles(&mut scene, &corner_circles(bounds), &none);
        independent_shapes(&mut scene, &spokes(cx, cy), &none);
        independent_shapes(&mut scene, &triangles(cx, cy), &none);

        log::info!("Connect laid out {} shapes", scene.len());
        self.scene = Some(scene);
    }

    fn draw(&mut self, surface: &mut dyn Surface, tick: u64) {
        surface.background(Rgba::gray_alpha(10.0, 5.0));
        if let Some(scene) = self.scene.as_mut() {
            scene.draw(surface, tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{DrawCall, Recorder};
    use crate::shapes::ShapeKind;

    fn set_up() -> (Connect, Recorder) {
        let mut sketch = Connect::new();
        let mut surface = Recorder::new(1000.0, 600.0);
        sketch.setup(&mut surface, &Assets::none());
        (sketch, surface)
    }

    fn count(scene: &Scene, kind: ShapeKind) -> usize {
        scene.iter().filter(|s| s.kind() == kind).count()
    }

    #[test]
    fn test_layout() {
        let (sketch, surface) = set_up();
        assert_eq!(surface.calls, vec![DrawCall::Background(Rgba::BLACK)]);

        let scene = sketch.scene().unwrap();
        assert_eq!(count(scene, ShapeKind::Circle), 27 + 17);
        assert_eq!(count(scene, ShapeKind::Line), 3);
        assert_eq!(count(scene, ShapeKind::Triangle), 9);

        for ring in scene.iter().take(27) {
            assert_eq!((ring.base_position().x, ring.base_position().y), (500.0, 300.0));
            assert_eq!(ring.stroke_color(), RING_STROKE);
        }
    }

    #[test]
    fn test_spokes() {
        let (sketch, _) = set_up();
        let scene = sketch.scene().unwrap();
        let lines: Vec<_> = scene.iter().filter(|s| s.kind() == ShapeKind::Line).collect();
        for line in &lines {
            assert_eq!((line.base_position().x, line.base_position().y), (500.0, 350.0));
            assert_eq!(line.base_stroke_weight(), LINE_WEIGHT);
            assert_eq!(line.stroke_color(), LINE_COLOR);
        }
        let end = lines[2].vertices()[1];
        assert_eq!((end.x, end.y), (0.0, LINE_LENGTH));
    }

    #[test]
    fn test_frame_keeps_stroke_baseline() {
        let (sketch, _) = set_up();
        let frame = sketch
            .scene()
            .unwrap()
            .iter()
            .find(|s| s.kind() == ShapeKind::Triangle)
            .unwrap();
        assert_eq!(frame.base_stroke_weight(), 15.0);
        assert_eq!(frame.color_oscillator().frequency, 0.01);
    }

    #[test]
    fn test_draw_trail() {
        let (mut sketch, mut surface) = set_up();
        surface.clear();
        sketch.draw(&mut surface, 1);
        assert_eq!(surface.calls[0], DrawCall::Background(Rgba::gray_alpha(10.0, 5.0)));
        assert_eq!(surface.primitive_count(), 27 + 17 + 3 + 9);
        assert_eq!(surface.depth(), 0);
    }
}
