//! Play Practice - a field of faint circles orbiting the canvas center
//!
//! Dozens of near-transparent rings share the center as their anchor and
//! sweep out Lissajous paths of different sizes; six more circles orbit
//! their own anchors near the edges. On the light background with a slow
//! trail they leave soft gray loops.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::{Assets, Sketch};
use crate::patterns::{concentric_circles, independent_circles, CircleConfig};
use crate::render::Surface;
use crate::shapes::{Bounds, Motion, Rgba, Scene};

/// Diameter the ring sizes are derived from
const BASE_DIAMETER: f32 = 50.0;

type Wave = (f32, f32, f32);

fn ring(size: f32, color: Rgba, stroke: f32, speed: f32, x: Wave, y: Wave) -> CircleConfig {
    CircleConfig {
        stroke_weight: Some(stroke),
        motion: Motion::new()
            .with_rotation_speed(speed)
            .move_x(x.0, x.1, x.2)
            .move_y(y.0, y.1, y.2),
        ..CircleConfig::new(size, color)
    }
}

fn center_rings() -> Vec<CircleConfig> {
    let d = BASE_DIAMETER;
    let faint = Rgba::gray_alpha(255.0, 10.0);
    let soft = Rgba::gray_alpha(255.0, 80.0);
    let still = (0.0, 0.0, 0.0);

    let mut rings = vec![
        ring(d + 40.0, faint, 6.0, 0.008, (250.0, -0.003, -PI), (250.0, 0.003, FRAC_PI_4)),
        ring(d + 40.0, faint, 6.0, 0.008, (250.0, -0.003, PI), (250.0, 0.003, -FRAC_PI_4)),
        ring(d + 40.0, faint, 6.0, 0.008, (250.0, 0.003, PI), (250.0, 0.003, FRAC_PI_4)),
        ring(d + 40.0, faint, 6.0, 0.008, (250.0, 0.003, PI), (250.0, 0.003, -FRAC_PI_4)),
        ring(d + 40.0, soft, 1.0, 0.008, (250.0, -0.005, PI), (250.0, 0.005, FRAC_PI_2)),
        ring(d + 40.0, soft, 1.0, 0.008, (250.0, 0.005, PI), (250.0, 0.005, FRAC_PI_2)),
        ring(d + 40.0, soft, 1.0, 0.008, (205.0, 0.005, PI), (205.0, 0.005, -FRAC_PI_2)),
        ring(d + 40.0, soft, 1.0, 0.008, (205.0, -0.005, -PI), (205.0, 0.005, -FRAC_PI_2)),
    ];

    // The breathing ring: size and outline pulse as it bobs
    let mut breathing = ring(d + 20.0, faint, 10.0, -5.015, still, (60.0, 0.02, FRAC_PI_2));
    breathing.motion = breathing
        .motion
        .pulse_size(150.0, 0.005, 0.0)
        .pulse_stroke(5.0, 0.008, FRAC_PI_2);
    rings.push(breathing);

    rings.extend([
        ring(d + 160.0, faint, 1.0, -5.015, still, (400.0, 0.008, -FRAC_PI_2)),
        ring(d + 160.0, faint, 1.0, 5.015, still, (420.0, 0.008, FRAC_PI_2)),
        ring(d + 160.0, faint, 1.0, 5.015, (620.0, 0.004, -FRAC_PI_4), still),
        ring(d + 160.0, faint, 1.0, 5.015, (620.0, -0.004, FRAC_PI_4), still),
    ]);

    for (fx, fy) in [(0.002, 0.002), (-0.002, 0.002), (0.002, -0.002), (-0.002, -0.002)] {
        rings.push(ring(d + 100.0, faint, 1.0, 5.015, (630.0, fx, PI), (390.0, fy, PI)));
    }

    rings.extend([
        ring(d / 2.5, faint, 2.0, 0.01, (90.0, -0.005, PI), (100.0, -0.005, FRAC_PI_2)),
        ring(d / 3.0, Rgba::gray_alpha(240.0, 10.0), 2.0, 0.01, (120.0, 0.0095, 0.0), still),
        ring(d / 2.0, faint, 2.0, 0.01, (120.0, 0.005, PI), (120.0, 0.005, FRAC_PI_2)),
    ]);

    // Wide horizontal sweeps, then tall narrow ones
    for (ox, fy) in [(FRAC_PI_2, 0.04), (-FRAC_PI_2, 0.04), (FRAC_PI_2, -0.04), (-FRAC_PI_2, -0.04)] {
        rings.push(ring(d + 80.0, faint, 2.0, 0.01, (600.0, 0.004, ox), (80.0, fy, PI)));
    }
    for (ox, fy) in [(FRAC_PI_2, 0.002), (-FRAC_PI_2, 0.002), (FRAC_PI_2, -0.002), (-FRAC_PI_2, -0.002)] {
        rings.push(ring(d + 80.0, faint, 2.0, 0.01, (80.0, 0.02, ox), (300.0, fy, PI)));
    }

    for (fx, oy) in [
        (0.02, FRAC_PI_2),
        (-0.02, FRAC_PI_2),
        (-0.02, FRAC_PI_2 + 600.0),
        (0.02, FRAC_PI_2 + 600.0),
    ] {
        rings.push(ring(d, faint, 2.0, 0.01, (100.0, fx, PI), (320.0, 0.002, oy)));
    }

    rings.extend([
        ring(d + 80.0, faint, 2.0, 0.01, (430.0, 0.004, -FRAC_PI_2), (240.0, 0.004, -PI)),
        ring(d + 80.0, faint, 2.0, 0.01, (430.0, 0.004, FRAC_PI_2), (240.0, 0.004, -PI)),
        ring(d + 80.0, faint, 2.0, 0.01, (430.0, 0.004, FRAC_PI_2), (240.0, -0.004, -PI)),
        ring(d + 80.0, faint, 2.0, 0.01, (430.0, -0.004, -FRAC_PI_2), (240.0, -0.004, PI)),
    ]);

    rings
}

/// Edge orbiters. Their alpha is nearly zero, so they mostly show as outlines.
fn edge_circles(bounds: Bounds) -> Vec<CircleConfig> {
    let orbiter = |(x, y): (f32, f32), size: f32, alpha: f32, speed: f32, xw: Wave, yw: Wave, pulse: Wave| {
        let mut circle = ring(size, Rgba::gray_alpha(255.0, alpha), 2.0, speed, xw, yw);
        circle.x = x;
        circle.y = y;
        circle.motion = circle.motion.pulse_size(pulse.0, pulse.1, pulse.2);
        circle
    };
    let side_pulse = (60.0, -0.008, -FRAC_PI_2);

    vec![
        orbiter(bounds.at(0.1, 0.5), 60.0, 0.1, -0.01, (40.0, 0.03, -FRAC_PI_2), (120.0, -0.003, PI), side_pulse),
        orbiter(bounds.at(0.9, 0.5), 60.0, 0.1, -0.01, (40.0, 0.03, FRAC_PI_2), (120.0, 0.003, PI), side_pulse),
        orbiter(bounds.at(0.1, 0.5), 60.0, 0.1, -0.01, (40.0, 0.03, -FRAC_PI_2), (120.0, 0.003, PI), side_pulse),
        orbiter(bounds.at(0.9, 0.5), 60.0, 0.9, -0.01, (40.0, 0.03, FRAC_PI_2), (120.0, -0.003, PI), side_pulse),
        orbiter(bounds.at(0.5, 0.85), 30.0, 0.1, 0.015, (30.0, 0.04, 0.0), (30.0, 0.04, FRAC_PI_2), (40.0, 0.008, PI)),
        orbiter(bounds.at(0.5, 0.15), 30.0, 0.1, 0.015, (30.0, -0.04, 0.0), (30.0, 0.04, FRAC_PI_2), (40.0, -0.008, PI)),
    ]
}

pub struct PlayPractice {
    scene: Option<Scene>,
}

impl PlayPractice {
    pub fn new() -> Self {
        Self { scene: None }
    }

    #[cfg(test)]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }
}

impl Default for PlayPractice {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for PlayPractice {
    fn name(&self) -> &str {
        "Play Practice"
    }

    fn setup(&mut self, surface: &mut dyn Surface, _assets: &Assets) {
        surface.background(Rgba::gray(250.0));

        let bounds = Bounds::of(surface);
        let mut scene = Scene::new(bounds);
        let none = Motion::new();
        concentric_circles(
            &mut scene,
            bounds.center_x(),
            bounds.center_y(),
            &center_rings(),
            &none,
        );
        independent_circles(&mut scene, &edge_circles(bounds), &none);

        log::info!("Play Practice laid out {} circles", scene.len());
        self.scene = Some(scene);
    }

    fn draw(&mut self, surface: &mut dyn Surface, tick: u64) {
        surface.background(Rgba::gray_alpha(250.0, 10.0));
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

    fn set_up() -> (PlayPractice, Recorder) {
        let mut sketch = PlayPractice::new();
        let mut surface = Recorder::new(1000.0, 600.0);
        sketch.setup(&mut surface, &Assets::none());
        (sketch, surface)
    }

    #[test]
    fn test_field_layout() {
        let (sketch, surface) = set_up();
        assert_eq!(surface.calls, vec![DrawCall::Background(Rgba::gray(250.0))]);

        let scene = sketch.scene().unwrap();
        assert_eq!(scene.len(), 42);
        assert!(scene.iter().all(|s| s.kind() == ShapeKind::Circle));
        for shape in scene.iter().take(36) {
            assert_eq!((shape.base_position().x, shape.base_position().y), (500.0, 300.0));
            assert_eq!(shape.rotation(), 0.0);
        }

        let orbiters: Vec<_> = scene.since(36).iter().map(|s| s.base_position()).collect();
        assert_eq!((orbiters[0].x, orbiters[0].y), (100.0, 300.0));
        assert_eq!((orbiters[1].x, orbiters[1].y), (900.0, 300.0));
        assert!((orbiters[5].y - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_breathing_ring() {
        let (sketch, _) = set_up();
        let breathing = sketch.scene().unwrap().get(8).unwrap();
        assert_eq!(breathing.size(), Some(70.0));
        assert_eq!(breathing.size_oscillator().amplitude, 150.0);
        assert_eq!(breathing.stroke_oscillator().amplitude, 5.0);
        assert!(!breathing.motion_x().is_active());
    }

    #[test]
    fn test_draw_fades_then_paints_every_circle() {
        let (mut sketch, mut surface) = set_up();
        surface.clear();
        sketch.draw(&mut surface, 1);
        assert_eq!(surface.calls[0], DrawCall::Background(Rgba::gray_alpha(250.0, 10.0)));
        assert_eq!(surface.primitive_count(), 42);
    }
}
