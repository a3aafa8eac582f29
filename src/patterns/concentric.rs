//! Generic layouts - shapes sharing one anchor, or each at its own position
//!
//! These are the building blocks of the circle-field compositions and of
//! JSON sketch files. Every element's own `Motion` is merged over the shared
//! base, field by field.

use crate::shapes::{Motion, Rgba, Scene, ShapeConfig};

/// One circle of a circle field
#[derive(Clone, Debug)]
pub struct CircleConfig {
    /// Own anchor; ignored by [`concentric_circles`]
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Rgba,
    /// Outline weight, no outline when unset
    pub stroke_weight: Option<f32>,
    pub stroke_color: Rgba,
    pub motion: Motion,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            size: 50.0,
            color: Rgba::WHITE,
            stroke_weight: None,
            stroke_color: Rgba::BLACK,
            motion: Motion::default(),
        }
    }
}

impl CircleConfig {
    pub fn new(size: f32, color: Rgba) -> Self {
        Self {
            size,
            color,
            ..Default::default()
        }
    }

    fn config(&self, x: f32, y: f32, base: &Motion) -> ShapeConfig {
        ShapeConfig::circle(self.size)
            .at(x, y)
            .fill(self.color)
            .stroke(self.stroke_color, self.stroke_weight.unwrap_or(0.0))
            .motion(self.motion.or(base))
    }
}

/// Circles all anchored at `(cx, cy)`, in the order given
pub fn concentric_circles(scene: &mut Scene, cx: f32, cy: f32, circles: &[CircleConfig], base: &Motion) {
    for circle in circles {
        scene.add(circle.config(cx, cy, base));
    }
}

/// Circles each anchored at their own `(x, y)`
pub fn independent_circles(scene: &mut Scene, circles: &[CircleConfig], base: &Motion) {
    for circle in circles {
        scene.add(circle.config(circle.x, circle.y, base));
    }
}

/// A copy of `config` under `base`, unoutlined unless it sets a stroke weight
fn placed(config: &ShapeConfig, base: &Motion) -> ShapeConfig {
    let motion = config.motion.or(base);
    let weight = config.stroke_weight.unwrap_or(0.0);
    config.clone().stroke_weight(weight).motion(motion)
}

/// Arbitrary shapes re-anchored at `(cx, cy)`
pub fn concentric_shapes(scene: &mut Scene, cx: f32, cy: f32, shapes: &[ShapeConfig], base: &Motion) {
    for config in shapes {
        scene.add(placed(config, base).at(cx, cy));
    }
}

/// Arbitrary shapes at their own positions
pub fn independent_shapes(scene: &mut Scene, shapes: &[ShapeConfig], base: &Motion) {
    for config in shapes {
        scene.add(placed(config, base));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Surface;
    use crate::render::recorder::{DrawCall, Recorder};
    use crate::shapes::{Bounds, ShapeKind};

    fn scene() -> Scene {
        Scene::new(Bounds::new(1000.0, 600.0))
    }

    #[test]
    fn test_three_rings_share_center() {
        let mut scene = scene();
        let rings: Vec<_> = [50.0, 70.0, 90.0]
            .into_iter()
            .map(|size| CircleConfig::new(size, Rgba::WHITE))
            .collect();
        concentric_circles(&mut scene, 500.0, 300.0, &rings, &Motion::new());

        assert_eq!(scene.len(), 3);
        for (shape, size) in scene.iter().zip([50.0, 70.0, 90.0]) {
            assert_eq!((shape.position().x, shape.position().y), (500.0, 300.0));
            assert_eq!(shape.size(), Some(size));
            assert_eq!(shape.rotation(), 0.0);
            assert_eq!(shape.stroke_weight(), 0.0);
        }

        let mut recorder = Recorder::new(1000.0, 600.0);
        scene.draw(&mut recorder, 0);
        let ellipses: Vec<_> = recorder
            .calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Ellipse(..)))
            .cloned()
            .collect();
        assert_eq!(
            ellipses,
            vec![
                DrawCall::Ellipse(0.0, 0.0, 50.0, 50.0),
                DrawCall::Ellipse(0.0, 0.0, 70.0, 70.0),
                DrawCall::Ellipse(0.0, 0.0, 90.0, 90.0),
            ]
        );
        assert_eq!(recorder.width(), 1000.0);
    }

    #[test]
    fn test_circle_motion_beats_base() {
        let mut scene = scene();
        let base = Motion::new()
            .move_x(250.0, 0.003, 0.0)
            .with_rotation_speed(0.008);
        let circles = [
            CircleConfig {
                motion: Motion {
                    amplitude_x: Some(0.0),
                    ..Default::default()
                },
                ..CircleConfig::new(60.0, Rgba::WHITE)
            },
            CircleConfig::new(60.0, Rgba::WHITE),
        ];
        concentric_circles(&mut scene, 0.0, 0.0, &circles, &base);

        assert!(!scene.get(0).unwrap().motion_x().is_active());
        assert_eq!(scene.get(0).unwrap().rotation_speed(), 0.008);
        assert_eq!(scene.get(1).unwrap().motion_x().amplitude, 250.0);
    }

    #[test]
    fn test_independent_circles_keep_anchor() {
        let mut scene = scene();
        let circles = [
            CircleConfig {
                x: 100.0,
                y: 300.0,
                stroke_weight: Some(2.0),
                ..Default::default()
            },
            CircleConfig {
                x: 900.0,
                y: 300.0,
                ..Default::default()
            },
        ];
        independent_circles(&mut scene, &circles, &Motion::new());
        assert_eq!(scene.get(0).unwrap().base_position().x, 100.0);
        assert_eq!(scene.get(1).unwrap().base_position().x, 900.0);
        assert_eq!(scene.get(0).unwrap().stroke_weight(), 2.0);
    }

    #[test]
    fn test_generic_shapes() {
        let mut scene = scene();
        let configs = [
            ShapeConfig::rect(40.0, 20.0).at(10.0, 10.0).rotation(1.0),
            ShapeConfig::triangle((0.0, -10.0), (-10.0, 10.0), (10.0, 10.0)).at(20.0, 20.0),
        ];
        let base = Motion::new().with_rotation(0.5).move_y(5.0, 0.1, 0.0);

        concentric_shapes(&mut scene, 300.0, 200.0, &configs, &base);
        independent_shapes(&mut scene, &configs, &base);

        assert_eq!(scene.len(), 4);
        assert_eq!(scene.get(0).unwrap().base_position().x, 300.0);
        assert_eq!(scene.get(0).unwrap().rotation(), 1.0);
        assert_eq!(scene.get(1).unwrap().rotation(), 0.5);
        assert_eq!(scene.get(1).unwrap().kind(), ShapeKind::Triangle);
        assert_eq!(scene.get(3).unwrap().base_position().x, 20.0);
        assert_eq!(scene.get(3).unwrap().motion_y().amplitude, 5.0);
    }

    #[test]
    fn test_generic_shapes_default_to_no_outline() {
        let plain: ShapeConfig =
            serde_json::from_str(r#"{ "kind": "rect", "x": 0, "y": 0, "color": [255, 0, 0, 255] }"#)
                .unwrap();
        let outlined = ShapeConfig::square(10.0).stroke(Rgba::WHITE, 3.0);

        let mut scene = scene();
        concentric_shapes(&mut scene, 50.0, 50.0, &[plain.clone(), outlined.clone()], &Motion::new());
        independent_shapes(&mut scene, &[plain], &Motion::new());
        assert_eq!(scene.get(0).unwrap().stroke_weight(), 0.0);
        assert_eq!(scene.get(1).unwrap().stroke_weight(), 3.0);
        assert_eq!(scene.get(2).unwrap().stroke_weight(), 0.0);

        // Nothing outlines the unstroked rect
        let mut surface = Recorder::new(100.0, 100.0);
        scene.get(0).unwrap().render(&mut surface);
        assert!(surface.calls.contains(&DrawCall::NoStroke));
    }
}
