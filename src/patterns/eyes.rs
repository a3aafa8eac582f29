//! Eyes - nested quads, circles, diamonds and dots
//!
//! Eyes are concentric: every layer sits on the same anchor and inner layers
//! trail the outer ones by a small phase step, so the eye breathes instead of
//! moving as one rigid block.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::shapes::{Motion, Rgba, Scene, ShapeConfig};

type Quad = [(f32, f32); 4];

#[derive(Clone, Debug)]
pub struct QuadEyeOptions {
    pub x: f32,
    pub y: f32,
    pub outer_color: Rgba,
    pub inner_color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub outer: Quad,
    pub inner: Quad,
    /// Extra phase (x, y) for the inner quad
    pub inner_offset: (f32, f32),
    pub motion: Motion,
}

impl Default for QuadEyeOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            outer_color: Rgba::WHITE,
            inner_color: Rgba::gray(25.0),
            stroke_color: Rgba::BLACK,
            stroke_weight: 1.0,
            outer: [(0.0, -5.0), (60.0, -5.0), (46.6, 15.55), (15.0, 15.55)],
            inner: [(10.0, 0.0), (50.0, 0.0), (44.0, 10.55), (17.0, 10.55)],
            inner_offset: (0.0, 0.0),
            motion: Motion::default(),
        }
    }
}

/// White quad with a dark quad inside; the inner one only follows position.
pub fn quad_eye_pair(scene: &mut Scene, opts: &QuadEyeOptions) {
    let [a, b, c, d] = opts.outer;
    scene.add(
        ShapeConfig::quad(a, b, c, d)
            .at(opts.x, opts.y)
            .fill(opts.outer_color)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(opts.motion.clone()),
    );

    let (dx, dy) = opts.inner_offset;
    let [a, b, c, d] = opts.inner;
    scene.add(
        ShapeConfig::quad(a, b, c, d)
            .at(opts.x, opts.y)
            .fill(opts.inner_color)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(opts.motion.position_only().shifted(dx, dy)),
    );
}

#[derive(Clone, Debug)]
pub struct ComplexEyeOptions {
    pub x: f32,
    pub y: f32,
    pub eyeball_size: f32,
    pub eyelid_size: (f32, f32),
    pub inside_eyelid_size: (f32, f32),
    pub pupil_size: f32,
    pub eyeball_color: Rgba,
    pub eyelid_color: Rgba,
    pub inside_eyelid_color: Rgba,
    pub pupil_color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub eyelid_rotation: f32,
    pub eyeball_rotation_speed: Option<f32>,
    pub pupil_rotation_speed: Option<f32>,
    /// Position overrides for both eyelids
    pub eyelid: Motion,
    /// Extra phase (x, y) for the inside eyelid
    pub inside_eyelid_offset: (f32, f32),
    pub motion: Motion,
}

impl Default for ComplexEyeOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            eyeball_size: 60.0,
            eyelid_size: (80.0, 40.0),
            inside_eyelid_size: (80.0, 20.0),
            pupil_size: 20.0,
            eyeball_color: Rgba::WHITE,
            eyelid_color: Rgba::gray_alpha(255.0, 90.0),
            inside_eyelid_color: Rgba::WHITE,
            pupil_color: Rgba::gray(12.0),
            stroke_color: Rgba::BLACK,
            stroke_weight: 1.0,
            eyelid_rotation: PI,
            eyeball_rotation_speed: None,
            pupil_rotation_speed: None,
            eyelid: Motion::default(),
            inside_eyelid_offset: (0.0, 0.0),
            motion: Motion::default(),
        }
    }
}

/// Eyeball, two eyelid ellipses and a pupil, in that paint order
pub fn complex_eye(scene: &mut Scene, opts: &ComplexEyeOptions) {
    let base = &opts.motion;

    scene.add(
        ShapeConfig::circle(opts.eyeball_size)
            .at(opts.x, opts.y)
            .fill(opts.eyeball_color)
            .stroke_weight(0.0)
            .motion(
                Motion {
                    rotation_speed: opts.eyeball_rotation_speed,
                    ..Motion::default()
                }
                .or(base),
            ),
    );

    let eyelid = opts
        .eyelid
        .position_only()
        .with_rotation(opts.eyelid_rotation)
        .or(base);
    let (dx, dy) = opts.inside_eyelid_offset;
    let inside = eyelid.clone().shifted(dx, dy);
    for ((w, h), color, motion) in [
        (opts.eyelid_size, opts.eyelid_color, eyelid),
        (opts.inside_eyelid_size, opts.inside_eyelid_color, inside),
    ] {
        scene.add(
            ShapeConfig::ellipse(w, h)
                .at(opts.x, opts.y)
                .fill(color)
                .stroke(opts.stroke_color, opts.stroke_weight)
                .motion(motion),
        );
    }

    let pupil = Motion {
        rotation_speed: opts.pupil_rotation_speed,
        ..Motion::default()
    };
    scene.add(
        ShapeConfig::circle(opts.pupil_size)
            .at(opts.x, opts.y)
            .fill(opts.pupil_color)
            .stroke_weight(0.0)
            .motion(pupil.or(&base.clone().shifted(PI * 0.05, PI * 0.05))),
    );
}

#[derive(Clone, Debug)]
pub struct SimpleEyeOptions {
    pub x: f32,
    pub y: f32,
    pub outer_size: f32,
    pub inner_size: f32,
    pub outer_color: Rgba,
    pub inner_color: Rgba,
    pub stroke_weight_outer: f32,
    pub stroke_weight_inner: f32,
    /// Overrides for the inner circle
    pub inner: Motion,
    pub motion: Motion,
}

impl Default for SimpleEyeOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            outer_size: 80.0,
            inner_size: 40.0,
            outer_color: Rgba::WHITE,
            inner_color: Rgba::gray(2.0),
            stroke_weight_outer: 0.0,
            stroke_weight_inner: 1.0,
            inner: Motion::default(),
            motion: Motion::default(),
        }
    }
}

/// Two nested circles; the inner one trails by `0.1π` unless overridden
pub fn simple_eye(scene: &mut Scene, opts: &SimpleEyeOptions) {
    scene.add(
        ShapeConfig::circle(opts.outer_size)
            .at(opts.x, opts.y)
            .fill(opts.outer_color)
            .stroke_weight(opts.stroke_weight_outer)
            .motion(opts.motion.clone()),
    );

    let trailing = opts.motion.clone().shifted(PI * 0.1, PI * 0.1);
    scene.add(
        ShapeConfig::circle(opts.inner_size)
            .at(opts.x, opts.y)
            .fill(opts.inner_color)
            .stroke_weight(opts.stroke_weight_inner)
            .motion(opts.inner.position_only().or(&trailing)),
    );
}

#[derive(Clone, Debug)]
pub struct NestedDiamondOptions {
    pub x: f32,
    pub y: f32,
    pub outer_size: f32,
    pub middle_square_size: f32,
    pub middle_diamond_size: f32,
    pub inner_square_size: f32,
    pub inner_diamond_size: f32,
    pub outer_color: Rgba,
    pub middle_square_color: Rgba,
    pub middle_diamond_color: Rgba,
    pub inner_square_color: Rgba,
    pub inner_diamond_color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    /// Rotation speed overrides for the four inner layers, outer to inner
    pub layer_rotation_speeds: [Option<f32>; 4],
    /// Phase step (x, y); layer `k` adds `k` steps
    pub stagger: (f32, f32),
    pub motion: Motion,
}

impl Default for NestedDiamondOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            outer_size: 80.0,
            middle_square_size: 70.0,
            middle_diamond_size: 40.0,
            inner_square_size: 40.0,
            inner_diamond_size: 15.0,
            outer_color: Rgba::WHITE,
            middle_square_color: Rgba::WHITE,
            middle_diamond_color: Rgba::WHITE,
            inner_square_color: Rgba::gray_alpha(255.0, 80.0),
            inner_diamond_color: Rgba::gray(20.0),
            stroke_color: Rgba::BLACK,
            stroke_weight: 1.0,
            layer_rotation_speeds: [None; 4],
            stagger: (0.0, 0.0),
            motion: Motion::default(),
        }
    }
}

/// Alternating diamonds and squares, five layers deep
pub fn nested_diamond_squares(scene: &mut Scene, opts: &NestedDiamondOptions) {
    let layers = [
        (opts.outer_size, opts.outer_color, FRAC_PI_4),
        (opts.middle_square_size, opts.middle_square_color, FRAC_PI_2),
        (opts.middle_diamond_size, opts.middle_diamond_color, FRAC_PI_4),
        (opts.inner_square_size, opts.inner_square_color, FRAC_PI_2),
        (opts.inner_diamond_size, opts.inner_diamond_color, FRAC_PI_2),
    ];

    for (k, (size, color, rotation)) in layers.into_iter().enumerate() {
        let mut layer = Motion::new().with_rotation(rotation);
        let base = if k == 0 {
            opts.motion.clone()
        } else {
            layer.rotation_speed = opts.layer_rotation_speeds[k - 1];
            let steps = k as f32;
            opts.motion
                .clone()
                .shifted(opts.stagger.0 * steps, opts.stagger.1 * steps)
        };
        scene.add(
            ShapeConfig::rect(size, size)
                .at(opts.x, opts.y)
                .fill(color)
                .stroke(opts.stroke_color, opts.stroke_weight)
                .motion(layer.or(&base)),
        );
    }
}

#[derive(Clone, Debug)]
pub struct DiamondSquareEyeOptions {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    pub motion: Motion,
}

impl Default for DiamondSquareEyeOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            size: 15.0,
            color: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            stroke_weight: 1.0,
            rotation: FRAC_PI_4,
            motion: Motion::default(),
        }
    }
}

/// A single small diamond
pub fn diamond_square_eye(scene: &mut Scene, opts: &DiamondSquareEyeOptions) {
    scene.add(
        ShapeConfig::rect(opts.size, opts.size)
            .at(opts.x, opts.y)
            .fill(opts.color)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(Motion::new().with_rotation(opts.rotation).or(&opts.motion)),
    );
}

#[derive(Clone, Debug)]
pub struct NestedRectEyeOptions {
    pub x: f32,
    pub y: f32,
    pub outer_size: (f32, f32),
    pub middle_size: (f32, f32),
    pub inner_size: (f32, f32),
    pub pupil_size: f32,
    pub outer_color: Rgba,
    pub middle_color: Rgba,
    pub inner_color: Rgba,
    pub pupil_color: Rgba,
    pub stroke_color: Rgba,
    /// Outline weights: outer, middle, inner, pupil
    pub stroke_weights: [f32; 4],
    pub rotation: f32,
    pub middle_offset: (f32, f32),
    pub inner_offset: (f32, f32),
    pub pupil_offset: (f32, f32),
    pub motion: Motion,
}

impl Default for NestedRectEyeOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            outer_size: (40.0, 50.0),
            middle_size: (30.0, 40.0),
            inner_size: (20.0, 25.0),
            pupil_size: 6.0,
            outer_color: Rgba::WHITE,
            middle_color: Rgba::gray_alpha(20.0, 80.0),
            inner_color: Rgba::gray(20.0),
            pupil_color: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            stroke_weights: [0.0, 1.0, 0.0, 0.0],
            rotation: FRAC_PI_2,
            middle_offset: (0.0, 0.0),
            inner_offset: (0.0, 0.0),
            pupil_offset: (0.0, 0.0),
            motion: Motion::default(),
        }
    }
}

/// Four nested rectangles ending in a small square pupil
pub fn nested_rect_eye(scene: &mut Scene, opts: &NestedRectEyeOptions) {
    let turn = Motion::new().with_rotation(opts.rotation);
    let layers = [
        (opts.outer_size, opts.outer_color, (0.0, 0.0)),
        (opts.middle_size, opts.middle_color, opts.middle_offset),
        (opts.inner_size, opts.inner_color, opts.inner_offset),
        ((opts.pupil_size, opts.pupil_size), opts.pupil_color, opts.pupil_offset),
    ];

    for (((w, h), color, (dx, dy)), stroke) in layers.into_iter().zip(opts.stroke_weights) {
        scene.add(
            ShapeConfig::rect(w, h)
                .at(opts.x, opts.y)
                .fill(color)
                .stroke(opts.stroke_color, stroke)
                .motion(turn.clone().or(&opts.motion.clone().shifted(dx, dy))),
        );
    }
}

#[derive(Clone, Debug)]
pub struct EyeDotsOptions {
    pub x: f32,
    pub y: f32,
    pub stroke_color: Rgba,
    /// Dot diameter
    pub stroke_weight: f32,
    /// Second dot `pair_offset_x` to the right, half a cycle out of phase
    pub paired: bool,
    pub pair_offset_x: f32,
    pub motion: Motion,
}

impl Default for EyeDotsOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            stroke_color: Rgba::WHITE,
            stroke_weight: 8.0,
            paired: false,
            pair_offset_x: 0.0,
            motion: Motion::default(),
        }
    }
}

pub fn eye_dots(scene: &mut Scene, opts: &EyeDotsOptions) {
    scene.add(
        ShapeConfig::point()
            .at(opts.x, opts.y)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(opts.motion.clone()),
    );

    if opts.paired {
        scene.add(
            ShapeConfig::point()
                .at(opts.x + opts.pair_offset_x, opts.y)
                .stroke(opts.stroke_color, opts.stroke_weight)
                .motion(opts.motion.clone().shifted_x(PI)),
        );
    }
}
