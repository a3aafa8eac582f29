//! Pillars, necks and connecting bars
//!
//! All of these are stacks of rectangles sharing one anchor. Most default to
//! a quarter or half turn so the long side reads vertically or horizontally.

use std::f32::consts::{FRAC_PI_2, PI};

use super::Side;
use crate::shapes::{Motion, Rgba, Scene, ShapeConfig};

/// Single rectangle, upside down by default
#[derive(Clone, Debug)]
pub struct PipeOptions {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    pub motion: Motion,
}

impl Default for PipeOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 550.0,
            color: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            stroke_weight: 2.0,
            rotation: PI,
            motion: Motion::default(),
        }
    }
}

pub fn vertical_pipe(scene: &mut Scene, opts: &PipeOptions) {
    scene.add(
        ShapeConfig::rect(opts.width, opts.height)
            .at(opts.x, opts.y)
            .fill(opts.color)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(Motion::new().with_rotation(opts.rotation).or(&opts.motion)),
    );
}

/// Thick and thin rectangle on one anchor
#[derive(Clone, Debug)]
pub struct LongNeckOptions {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height_thick: f32,
    pub height_thin: f32,
    pub color_thick: Rgba,
    pub color_thin: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    /// Extra phase for the thin rectangle
    pub offset_x_thin: f32,
    pub offset_y_thin: f32,
    pub motion: Motion,
}

impl Default for LongNeckOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 390.0,
            height_thick: 15.0,
            height_thin: 3.0,
            color_thick: Rgba::WHITE,
            color_thin: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            stroke_weight: 2.0,
            rotation: FRAC_PI_2,
            offset_x_thin: 0.0,
            offset_y_thin: 0.0,
            motion: Motion::default(),
        }
    }
}

/// The thin rectangle only inherits the position motion of the thick one.
pub fn long_neck_pair(scene: &mut Scene, opts: &LongNeckOptions) {
    let turn = Motion::new().with_rotation(opts.rotation);

    scene.add(
        ShapeConfig::rect(opts.width, opts.height_thick)
            .at(opts.x, opts.y)
            .fill(opts.color_thick)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(turn.clone().or(&opts.motion)),
    );

    let thin = opts
        .motion
        .position_only()
        .shifted(opts.offset_x_thin, opts.offset_y_thin);
    scene.add(
        ShapeConfig::rect(opts.width, opts.height_thin)
            .at(opts.x, opts.y)
            .fill(opts.color_thin)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(turn.or(&thin)),
    );
}

/// Short thick bar crossed by a very long thin one
#[derive(Clone, Debug)]
pub struct ForeheadOptions {
    pub center_x: f32,
    pub y: f32,
    pub thick_width: f32,
    pub thick_height: f32,
    pub thin_width: f32,
    pub thin_height: f32,
    pub thick_color: Rgba,
    pub thin_color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    pub offset_x_thin: f32,
    pub offset_y_thin: f32,
    pub motion: Motion,
}

impl Default for ForeheadOptions {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            y: 0.0,
            thick_width: 20.0,
            thick_height: 80.0,
            thin_width: 10.0,
            thin_height: 980.0,
            thick_color: Rgba::WHITE,
            thin_color: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            stroke_weight: 2.0,
            rotation: FRAC_PI_2,
            offset_x_thin: 0.0,
            offset_y_thin: 0.0,
            motion: Motion::default(),
        }
    }
}

pub fn central_forehead_rects(scene: &mut Scene, opts: &ForeheadOptions) {
    let turn = Motion::new().with_rotation(opts.rotation);

    scene.add(
        ShapeConfig::rect(opts.thick_width, opts.thick_height)
            .at(opts.center_x, opts.y)
            .fill(opts.thick_color)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(turn.clone().or(&opts.motion)),
    );

    let thin = opts
        .motion
        .clone()
        .shifted(opts.offset_x_thin, opts.offset_y_thin);
    scene.add(
        ShapeConfig::rect(opts.thin_width, opts.thin_height)
            .at(opts.center_x, opts.y)
            .fill(opts.thin_color)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(turn.or(&thin)),
    );
}

/// Three nested rectangles, outer to inner
#[derive(Clone, Debug)]
pub struct NestedPillarOptions {
    pub x: f32,
    pub y: f32,
    pub side: Side,
    pub outer_size: (f32, f32),
    pub middle_size: (f32, f32),
    pub inner_size: (f32, f32),
    pub outer_color: Rgba,
    pub middle_color: Rgba,
    pub inner_color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    /// Extra phase (x, y) for the middle rectangle
    pub middle_offset: (f32, f32),
    /// Extra phase (x, y) for the inner rectangle
    pub inner_offset: (f32, f32),
    pub motion: Motion,
}

impl Default for NestedPillarOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            side: Side::Left,
            outer_size: (390.0, 40.0),
            middle_size: (360.0, 25.0),
            inner_size: (320.0, 12.0),
            outer_color: Rgba::WHITE,
            middle_color: Rgba::WHITE,
            inner_color: Rgba::gray(25.0),
            stroke_color: Rgba::BLACK,
            stroke_weight: 2.0,
            rotation: FRAC_PI_2,
            middle_offset: (0.0, 0.0),
            inner_offset: (0.0, 0.0),
            motion: Motion::default(),
        }
    }
}

/// A fully transparent outer rectangle is drawn without its outline.
pub fn nested_rect_pillar(scene: &mut Scene, opts: &NestedPillarOptions) {
    let x = opts.side.place_x(scene.bounds(), opts.x);
    let turn = Motion::new().with_rotation(opts.rotation);
    let outer_stroke = if opts.outer_color.a == 0.0 {
        0.0
    } else {
        opts.stroke_weight
    };

    let layers = [
        (opts.outer_size, opts.outer_color, outer_stroke, (0.0, 0.0)),
        (opts.middle_size, opts.middle_color, opts.stroke_weight, opts.middle_offset),
        (opts.inner_size, opts.inner_color, opts.stroke_weight, opts.inner_offset),
    ];
    for (i, ((w, h), color, stroke, (dx, dy))) in layers.into_iter().enumerate() {
        let base = if i == 0 {
            opts.motion.clone()
        } else {
            opts.motion.clone().shifted(dx, dy)
        };
        scene.add(
            ShapeConfig::rect(w, h)
                .at(x, opts.y)
                .fill(color)
                .stroke(opts.stroke_color, stroke)
                .motion(turn.clone().or(&base)),
        );
    }
}

/// A column of small white bars
#[derive(Clone, Debug)]
pub struct RectStackOptions {
    pub x: f32,
    pub initial_y: f32,
    pub count: usize,
    pub spacing_y: f32,
    pub rect_width: f32,
    pub rect_height: f32,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    pub side: Side,
    /// Added per bar index to the phase and rotation speed
    pub stagger_offset_x: f32,
    pub stagger_offset_y: f32,
    pub stagger_rotation_speed: f32,
    pub motion: Motion,
}

impl Default for RectStackOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            initial_y: 0.0,
            count: 1,
            spacing_y: 10.0,
            rect_width: 25.0,
            rect_height: 8.0,
            stroke_color: Rgba::BLACK,
            stroke_weight: 2.0,
            rotation: FRAC_PI_2,
            side: Side::Left,
            stagger_offset_x: 0.0,
            stagger_offset_y: 0.0,
            stagger_rotation_speed: 0.0,
            motion: Motion::default(),
        }
    }
}

pub fn vertical_rect_stack(scene: &mut Scene, opts: &RectStackOptions) {
    let x = opts.side.place_x(scene.bounds(), opts.x);
    for i in 0..opts.count {
        let k = i as f32;
        let mut motion = Motion::new()
            .with_rotation(opts.rotation)
            .with_rotation_speed(
                opts.motion.rotation_speed.unwrap_or(0.0) + k * opts.stagger_rotation_speed,
            );
        motion.offset_x = Some(opts.motion.offset_x.unwrap_or(0.0) + k * opts.stagger_offset_x);
        motion.offset_y = Some(opts.motion.offset_y.unwrap_or(0.0) + k * opts.stagger_offset_y);
        scene.add(
            ShapeConfig::rect(opts.rect_width, opts.rect_height)
                .at(x, opts.initial_y + k * opts.spacing_y)
                .stroke(opts.stroke_color, opts.stroke_weight)
                .motion(motion.or(&opts.motion)),
        );
    }
}

/// Two bars either side of a center line
#[derive(Clone, Debug)]
pub struct BeingNeckOptions {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    /// Distance from the center to each bar, 5% of the width when unset
    pub horizontal_offset: Option<f32>,
    pub left_offset: (f32, f32),
    pub right_offset: (f32, f32),
    pub motion: Motion,
}

impl Default for BeingNeckOptions {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            width: 145.0,
            height: 10.0,
            color: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            stroke_weight: 1.0,
            rotation: FRAC_PI_2,
            horizontal_offset: None,
            left_offset: (0.0, 0.0),
            right_offset: (0.0, 0.0),
            motion: Motion::default(),
        }
    }
}

pub fn being_neck_pair(scene: &mut Scene, opts: &BeingNeckOptions) {
    let spread = opts
        .horizontal_offset
        .unwrap_or(scene.bounds().width * 0.05);
    let turn = Motion::new().with_rotation(opts.rotation);

    for (x, (dx, dy)) in [
        (opts.center_x - spread, opts.left_offset),
        (opts.center_x + spread, opts.right_offset),
    ] {
        scene.add(
            ShapeConfig::rect(opts.width, opts.height)
                .at(x, opts.center_y)
                .fill(opts.color)
                .stroke(opts.stroke_color, opts.stroke_weight)
                .motion(turn.clone().or(&opts.motion.clone().shifted(dx, dy))),
        );
    }
}

/// One short bar joining two motifs
#[derive(Clone, Debug)]
pub struct ConnectorOptions {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    pub motion: Motion,
}

impl Default for ConnectorOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 88.0,
            color: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            stroke_weight: 0.0,
            rotation: FRAC_PI_2,
            motion: Motion::default(),
        }
    }
}

pub fn connecting_vertical_rect(scene: &mut Scene, opts: &ConnectorOptions) {
    scene.add(
        ShapeConfig::rect(opts.width, opts.height)
            .at(opts.x, opts.y)
            .fill(opts.color)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(Motion::new().with_rotation(opts.rotation).or(&opts.motion)),
    );
}

/// A long bar with a two-layer mouth on it
#[derive(Clone, Debug)]
pub struct NeckMouthOptions {
    pub x: f32,
    pub y: f32,
    pub side: Side,
    pub neck_size: (f32, f32),
    pub mouth_outer_size: (f32, f32),
    pub mouth_inner_size: (f32, f32),
    pub neck_color: Rgba,
    pub mouth_outer_color: Rgba,
    pub mouth_inner_color: Rgba,
    pub stroke_color: Rgba,
    /// Neck outline only; the mouth is always outlined at 2
    pub stroke_weight: f32,
    pub rotation: f32,
    pub mouth_outer_offset: (f32, f32),
    pub mouth_inner_offset: (f32, f32),
    pub motion: Motion,
}

impl Default for NeckMouthOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            side: Side::Left,
            neck_size: (170.0, 30.0),
            mouth_outer_size: (40.0, 20.0),
            mouth_inner_size: (30.0, 20.0),
            neck_color: Rgba::WHITE,
            mouth_outer_color: Rgba::WHITE,
            mouth_inner_color: Rgba::gray(25.0),
            stroke_color: Rgba::BLACK,
            stroke_weight: 0.0,
            rotation: FRAC_PI_2,
            mouth_outer_offset: (0.0, 0.0),
            mouth_inner_offset: (0.0, 0.0),
            motion: Motion::default(),
        }
    }
}

const MOUTH_STROKE: f32 = 2.0;

pub fn long_rect_neck_with_mouth(scene: &mut Scene, opts: &NeckMouthOptions) {
    let x = opts.side.place_x(scene.bounds(), opts.x);
    let turn = Motion::new().with_rotation(opts.rotation);

    let (w, h) = opts.neck_size;
    scene.add(
        ShapeConfig::rect(w, h)
            .at(x, opts.y)
            .fill(opts.neck_color)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(turn.clone().or(&opts.motion)),
    );

    for ((w, h), color, (dx, dy)) in [
        (opts.mouth_outer_size, opts.mouth_outer_color, opts.mouth_outer_offset),
        (opts.mouth_inner_size, opts.mouth_inner_color, opts.mouth_inner_offset),
    ] {
        scene.add(
            ShapeConfig::rect(w, h)
                .at(x, opts.y)
                .fill(color)
                .stroke(opts.stroke_color, MOUTH_STROKE)
                .motion(turn.clone().or(&opts.motion.clone().shifted(dx, dy))),
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
    fn test_pipe_defaults_upside_down() {
        let mut scene = scene();
        vertical_pipe(&mut scene, &PipeOptions::default());
        let pipe = scene.get(0).unwrap();
        assert_eq!(pipe.rotation(), PI);
        assert_eq!(pipe.dimensions(), Some((20.0, 550.0)));
        assert_eq!(pipe.stroke_weight(), 2.0);
    }

    #[test]
    fn test_long_neck_thin_inherits_position_only() {
        let mut scene = scene();
        long_neck_pair(
            &mut scene,
            &LongNeckOptions {
                x: 100.0,
                y: 330.0,
                offset_y_thin: 0.5,
                motion: Motion::new()
                    .move_y(15.0, 0.02, 0.3)
                    .pulse_size(5.0, 0.1, 0.0),
                ..Default::default()
            },
        );
        assert_eq!(scene.len(), 2);
        let (thick, thin) = (scene.get(0).unwrap(), scene.get(1).unwrap());
        assert_eq!(thick.base_position(), thin.base_position());
        assert_eq!(thick.size_oscillator().amplitude, 5.0);
        assert_eq!(thin.size_oscillator().amplitude, 0.0);
        assert!((thin.motion_y().phase - 0.8).abs() < 1e-6);
        assert_eq!(thin.motion_y().amplitude, 15.0);
        assert_eq!(thin.rotation(), FRAC_PI_2);
    }

    #[test]
    fn test_pillar_mirrors_and_staggers() {
        let mut scene = scene();
        for side in Side::both() {
            nested_rect_pillar(
                &mut scene,
                &NestedPillarOptions {
                    x: 187.5,
                    y: 300.0,
                    side,
                    middle_offset: (0.0, 0.2),
                    inner_offset: (0.0, 0.4),
                    motion: Motion::new().move_y(4.0, 0.01, 1.0),
                    ..Default::default()
                },
            );
        }
        assert_eq!(scene.len(), 6);
        let left = scene.get(0).unwrap().base_position().x;
        let right = scene.get(3).unwrap().base_position().x;
        assert_eq!(right, 1000.0 - left);
        assert!((scene.get(2).unwrap().motion_y().phase - 1.4).abs() < 1e-6);
    }

    #[test]
    fn test_pillar_transparent_outer_has_no_outline() {
        let mut scene = scene();
        nested_rect_pillar(
            &mut scene,
            &NestedPillarOptions {
                outer_color: Rgba::gray_alpha(255.0, 0.0),
                ..Default::default()
            },
        );
        assert_eq!(scene.get(0).unwrap().stroke_weight(), 0.0);
        assert_eq!(scene.get(1).unwrap().stroke_weight(), 2.0);
    }

    #[test]
    fn test_rect_stack_stagger() {
        let mut scene = scene();
        vertical_rect_stack(
            &mut scene,
            &RectStackOptions {
                x: 50.0,
                initial_y: 100.0,
                count: 4,
                spacing_y: 20.0,
                side: Side::Right,
                stagger_offset_y: 0.25,
                stagger_rotation_speed: 0.001,
                motion: Motion::new().with_rotation_speed(0.01),
                ..Default::default()
            },
        );
        assert_eq!(scene.len(), 4);
        let last = scene.get(3).unwrap();
        assert_eq!(last.base_position().x, 950.0);
        assert_eq!(last.base_position().y, 160.0);
        assert!((last.motion_y().phase - 0.75).abs() < 1e-6);
        assert!((last.rotation_speed() - 0.013).abs() < 1e-6);
    }

    #[test]
    fn test_being_neck_default_spread() {
        let mut scene = scene();
        being_neck_pair(
            &mut scene,
            &BeingNeckOptions {
                center_x: 500.0,
                center_y: 200.0,
                ..Default::default()
            },
        );
        assert_eq!(scene.get(0).unwrap().base_position().x, 450.0);
        assert_eq!(scene.get(1).unwrap().base_position().x, 550.0);
    }

    #[test]
    fn test_neck_mouth_always_outlined() {
        let mut scene = scene();
        long_rect_neck_with_mouth(&mut scene, &NeckMouthOptions::default());
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.get(0).unwrap().stroke_weight(), 0.0);
        assert_eq!(scene.get(1).unwrap().stroke_weight(), MOUTH_STROKE);
        assert_eq!(scene.get(2).unwrap().stroke_weight(), MOUTH_STROKE);
    }

    #[test]
    fn test_explicit_rotation_beats_base() {
        let mut scene = scene();
        connecting_vertical_rect(
            &mut scene,
            &ConnectorOptions {
                rotation: 0.25,
                motion: Motion::new().with_rotation(3.0),
                ..Default::default()
            },
        );
        assert_eq!(scene.get(0).unwrap().rotation(), 0.25);
    }
}
