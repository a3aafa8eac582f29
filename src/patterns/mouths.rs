//! Mouths - triangles and ellipse pairs, mirrored left/right

use std::f32::consts::PI;

use super::Side;
use crate::shapes::{Motion, Rgba, Scene, ShapeConfig};

#[derive(Clone, Debug)]
pub struct TriangleMouthOptions {
    pub x: f32,
    pub y: f32,
    pub side: Side,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    pub motion: Motion,
}

impl Default for TriangleMouthOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            side: Side::Left,
            stroke_color: Rgba::BLACK,
            stroke_weight: 2.0,
            rotation: PI,
            motion: Motion::default(),
        }
    }
}

/// One large white triangle, pointing down by default
pub fn single_triangle_mouth(scene: &mut Scene, opts: &TriangleMouthOptions) {
    let x = opts.side.place_x(scene.bounds(), opts.x);
    scene.add(
        ShapeConfig::triangle((0.0, -60.0), (-60.0, 60.0), (60.0, 60.0))
            .at(x, opts.y)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(Motion::new().with_rotation(opts.rotation).or(&opts.motion)),
    );
}

#[derive(Clone, Debug)]
pub struct NestedTriangleMouthOptions {
    pub x: f32,
    pub y: f32,
    pub side: Side,
    pub outer_color: Rgba,
    pub middle_color: Rgba,
    pub inner_color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    /// Extra (phase, frequency) added to the y motion of each layer, outer first
    pub layer_y: [(f32, f32); 3],
    pub motion: Motion,
}

impl Default for NestedTriangleMouthOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            side: Side::Left,
            outer_color: Rgba::gray_alpha(0.0, 80.0),
            middle_color: Rgba::gray_alpha(0.0, 80.0),
            inner_color: Rgba::WHITE,
            stroke_color: Rgba::WHITE,
            stroke_weight: 4.0,
            rotation: PI,
            layer_y: [(0.0, 0.0); 3],
            motion: Motion::default(),
        }
    }
}

/// Three triangles sharing the top vertex, each narrower than the last
pub fn nested_triangle_mouths(scene: &mut Scene, opts: &NestedTriangleMouthOptions) {
    let x = opts.side.place_x(scene.bounds(), opts.x);
    let layers = [
        ((-80.0, 60.0), (80.0, 60.0), opts.outer_color),
        ((-50.0, 40.0), (50.0, 40.0), opts.middle_color),
        ((-35.0, 40.0), (35.0, 40.0), opts.inner_color),
    ];

    for ((v2, v3, color), (phase, frequency)) in layers.into_iter().zip(opts.layer_y) {
        let mut layer = Motion::new().with_rotation(opts.rotation);
        layer.offset_y = Some(opts.motion.offset_y.unwrap_or(0.0) + phase);
        layer.frequency_y = Some(opts.motion.frequency_y.unwrap_or(0.0) + frequency);
        scene.add(
            ShapeConfig::triangle((0.0, -60.0), v2, v3)
                .at(x, opts.y)
                .fill(color)
                .stroke(opts.stroke_color, opts.stroke_weight)
                .motion(layer.or(&opts.motion)),
        );
    }
}

#[derive(Clone, Debug)]
pub struct EllipseMouthOptions {
    pub x: f32,
    pub y: f32,
    pub side: Side,
    pub outer_size: (f32, f32),
    pub inner_size: (f32, f32),
    pub outer_color: Rgba,
    pub inner_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    /// Extra phase (x, y) for the inner ellipse
    pub inner_offset: (f32, f32),
    pub motion: Motion,
}

impl Default for EllipseMouthOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            side: Side::Left,
            outer_size: (190.0, 50.0),
            inner_size: (180.0, 30.0),
            outer_color: Rgba::WHITE,
            inner_color: Rgba::gray(20.0),
            stroke_weight: 2.0,
            rotation: PI,
            inner_offset: (0.0, 0.0),
            motion: Motion::default(),
        }
    }
}

/// Wide white ellipse with a dark slit inside
pub fn ellipse_mouth_pair(scene: &mut Scene, opts: &EllipseMouthOptions) {
    let x = opts.side.place_x(scene.bounds(), opts.x);
    let turn = Motion::new().with_rotation(opts.rotation);
    let (dx, dy) = opts.inner_offset;

    for ((w, h), color, base) in [
        (opts.outer_size, opts.outer_color, opts.motion.clone()),
        (opts.inner_size, opts.inner_color, opts.motion.clone().shifted(dx, dy)),
    ] {
        scene.add(
            ShapeConfig::ellipse(w, h)
                .at(x, opts.y)
                .fill(color)
                .stroke_weight(opts.stroke_weight)
                .motion(turn.clone().or(&base)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Bounds;

    fn scene() -> Scene {
        Scene::new(Bounds::new(1000.0, 600.0))
    }

    #[test]
    fn test_triangle_mouth_mirror() {
        let mut scene = scene();
        for side in Side::both() {
            single_triangle_mouth(
                &mut scene,
                &TriangleMouthOptions {
                    x: 187.5,
                    y: 552.0,
                    side,
                    ..Default::default()
                },
            );
        }
        let left = scene.get(0).unwrap().base_position();
        let right = scene.get(1).unwrap().base_position();
        assert_eq!(right.x, 1000.0 - left.x);
        assert_eq!(right.y, left.y);
        assert_eq!(scene.get(0).unwrap().fill(), Rgba::WHITE);
    }

    #[test]
    fn test_nested_mouth_layers() {
        let mut scene = scene();
        nested_triangle_mouths(
            &mut scene,
            &NestedTriangleMouthOptions {
                x: 350.0,
                y: 516.0,
                side: Side::Right,
                layer_y: [(0.0, 0.0), (0.2, 0.001), (0.3, 0.002)],
                motion: Motion::new().move_y(10.0, 0.03, 1.0),
                ..Default::default()
            },
        );
        assert_eq!(scene.len(), 3);
        for shape in scene.iter() {
            assert_eq!(shape.base_position().x, 650.0);
            assert_eq!(shape.vertices()[0].y, -60.0);
            assert_eq!(shape.motion_y().amplitude, 10.0);
        }
        let inner = scene.get(2).unwrap();
        assert!((inner.motion_y().phase - 1.3).abs() < 1e-6);
        assert!((inner.motion_y().frequency - 0.032).abs() < 1e-6);
        assert_eq!(scene.get(0).unwrap().vertices()[1].x, -80.0);
        assert_eq!(inner.vertices()[2].x, 35.0);
    }

    #[test]
    fn test_ellipse_mouth_inner_phase() {
        let mut scene = scene();
        ellipse_mouth_pair(
            &mut scene,
            &EllipseMouthOptions {
                inner_offset: (0.5, 0.25),
                motion: Motion::new().move_x(3.0, 0.01, 1.0),
                ..Default::default()
            },
        );
        let (outer, inner) = (scene.get(0).unwrap(), scene.get(1).unwrap());
        assert_eq!(outer.motion_x().phase, 1.0);
        assert_eq!(inner.motion_x().phase, 1.5);
        assert_eq!(inner.motion_y().phase, 0.25);
        assert_eq!(outer.dimensions(), Some((190.0, 50.0)));
        assert_eq!(outer.rotation(), PI);
    }
}
