//! Ornaments - bottom ellipse rings and full-width lines

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::shapes::{Motion, Rgba, Scene, ShapeConfig};

/// One ring of a bottom ellipse set
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseConfig {
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
    pub rotation: f32,
}

impl Default for EllipseConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            color: Rgba::WHITE,
            rotation: 0.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BottomEllipsesOptions {
    pub x: f32,
    pub y: f32,
    /// Rings drawn at `x`
    pub left: Vec<EllipseConfig>,
    /// Rings drawn at the mirrored position `width - x`
    pub right: Vec<EllipseConfig>,
    pub motion: Motion,
}

/// Two mirrored sets of ellipse rings; ring `i` trails by `i * π/8`
pub fn concentric_bottom_ellipses(scene: &mut Scene, opts: &BottomEllipsesOptions) {
    let bounds = scene.bounds();
    for (x, rings) in [(opts.x, &opts.left), (bounds.mirror_x(opts.x), &opts.right)] {
        for (i, ring) in rings.iter().enumerate() {
            let motion = Motion::new()
                .with_rotation(ring.rotation)
                .or(&opts.motion.clone().shifted_x(i as f32 * PI / 8.0));
            scene.add(
                ShapeConfig::ellipse(ring.width, ring.height)
                    .at(x, opts.y)
                    .fill(ring.color)
                    .stroke_weight(2.0)
                    .motion(motion),
            );
        }
    }
}

#[derive(Clone, Debug)]
pub struct HorizontalLineOptions {
    pub y: f32,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub motion: Motion,
}

impl Default for HorizontalLineOptions {
    fn default() -> Self {
        Self {
            y: 0.0,
            stroke_color: Rgba::WHITE,
            stroke_weight: 3.0,
            motion: Motion::default(),
        }
    }
}

/// Line across the full canvas width, anchored at its left end
pub fn horizontal_line(scene: &mut Scene, opts: &HorizontalLineOptions) {
    let width = scene.bounds().width;
    scene.add(
        ShapeConfig::line((0.0, 0.0), (width, 0.0))
            .at(0.0, opts.y)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(opts.motion.clone()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Bounds, ShapeKind};

    #[test]
    fn test_bottom_ellipses_mirrored_sets() {
        let mut scene = Scene::new(Bounds::new(1000.0, 600.0));
        let ring = |w: f32| EllipseConfig {
            width: w,
            height: w / 2.0,
            ..Default::default()
        };
        concentric_bottom_ellipses(
            &mut scene,
            &BottomEllipsesOptions {
                x: 200.0,
                y: 560.0,
                left: vec![ring(120.0), ring(90.0), ring(60.0)],
                right: vec![ring(120.0), ring(90.0)],
                motion: Motion::new().move_x(4.0, 0.02, 0.5),
            },
        );
        assert_eq!(scene.len(), 5);
        assert_eq!(scene.get(2).unwrap().base_position().x, 200.0);
        assert_eq!(scene.get(3).unwrap().base_position().x, 800.0);
        assert!((scene.get(2).unwrap().motion_x().phase - (0.5 + PI / 4.0)).abs() < 1e-6);
        // Right set restarts its stagger
        assert_eq!(scene.get(3).unwrap().motion_x().phase, 0.5);
        assert_eq!(scene.get(4).unwrap().stroke_weight(), 2.0);
    }

    #[test]
    fn test_horizontal_line_spans_width() {
        let mut scene = Scene::new(Bounds::new(800.0, 600.0));
        horizontal_line(
            &mut scene,
            &HorizontalLineOptions {
                y: 300.0,
                ..Default::default()
            },
        );
        let line = scene.get(0).unwrap();
        assert_eq!(line.kind(), ShapeKind::Line);
        assert_eq!(line.base_position().y, 300.0);
        assert_eq!(line.vertices()[1].x, 800.0);
        assert_eq!(line.stroke_weight(), 3.0);
        assert_eq!(line.stroke_color(), Rgba::WHITE);
    }
}
