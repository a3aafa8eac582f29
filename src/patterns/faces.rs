//! Faces - groups of the Adinkrahene image
//!
//! Every element here is an image shape drawn from one shared asset. When the
//! asset failed to load the shapes are still added (so indices and phases
//! line up) but draw nothing.

use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use super::Side;
use crate::shapes::{ImageAsset, Motion, Rgba, Scene, ShapeConfig, ShapeKind};

fn image_config(image: &Option<Arc<ImageAsset>>, x: f32, y: f32, w: f32, h: f32) -> ShapeConfig {
    ShapeConfig {
        image: image.clone(),
        ..ShapeConfig::new(ShapeKind::Image)
            .dimensions(w, h)
            .at(x, y)
            .fill(Rgba::WHITE)
    }
}

/// Rotation-speed override merged on top of a staggered base
fn staggered(base: &Motion, speed: Option<f32>, step: f32) -> Motion {
    Motion {
        rotation_speed: speed,
        ..Motion::default()
    }
    .or(&base.clone().shifted(step, step))
}

#[derive(Clone, Debug)]
pub struct AdinkraheneFaceOptions {
    pub image: Option<Arc<ImageAsset>>,
    pub center_x: f32,
    pub center_y: f32,
    pub eye_size: (f32, f32),
    pub mouth_size: (f32, f32),
    /// Eye spacing as a fraction of the canvas width
    pub eye_offset_factor_x: f32,
    /// Eye height as a fraction of the canvas height (negative is up)
    pub eye_offset_factor_y: f32,
    /// Overrides for both eyes
    pub eye: Motion,
    /// Overrides for the mouth
    pub mouth: Motion,
    pub motion: Motion,
}

impl Default for AdinkraheneFaceOptions {
    fn default() -> Self {
        Self {
            image: None,
            center_x: 0.0,
            center_y: 0.0,
            eye_size: (50.0, 50.0),
            mouth_size: (160.0, 160.0),
            eye_offset_factor_x: 0.045,
            eye_offset_factor_y: -0.15,
            eye: Motion::default(),
            mouth: Motion::default(),
            motion: Motion::default(),
        }
    }
}

/// Two image eyes above one large image mouth.
///
/// The right eye runs half a cycle behind horizontally, the mouth a quarter
/// cycle behind on both axes, unless the overrides set those phases.
pub fn adinkrahene_face(scene: &mut Scene, opts: &AdinkraheneFaceOptions) {
    let bounds = scene.bounds();
    let eye_y = opts.center_y + bounds.height * opts.eye_offset_factor_y;
    let spread = bounds.width * opts.eye_offset_factor_x;
    let (eye_w, eye_h) = opts.eye_size;
    let base = &opts.motion;

    let eye = opts.eye.position_only().or(base);
    let right_eye = opts.eye.position_only().or(&base.clone().shifted_x(PI));
    for (x, motion) in [
        (opts.center_x - spread, eye),
        (opts.center_x + spread, right_eye),
    ] {
        scene.add(image_config(&opts.image, x, eye_y, eye_w, eye_h).motion(motion));
    }

    let (mouth_w, mouth_h) = opts.mouth_size;
    let mouth = opts
        .mouth
        .position_only()
        .or(&base.clone().shifted(FRAC_PI_2, FRAC_PI_2));
    scene.add(
        image_config(&opts.image, opts.center_x, opts.center_y, mouth_w, mouth_h).motion(mouth),
    );
}

#[derive(Clone, Debug, Default)]
pub struct StrangeBeingOptions {
    pub image: Option<Arc<ImageAsset>>,
    /// Left-most column of the group
    pub x: f32,
    /// Top row of the group
    pub y: f32,
    pub side: Side,
    pub stretched_rotation_speed: Option<f32>,
    pub mid_rotation_speed: Option<f32>,
    pub bottom_rotation_speed: Option<f32>,
    pub motion: Motion,
}

/// Six images in three rows of two: stretched, square, then a smaller pair
/// lower down. Each successive image trails by another `0.1π`.
pub fn strange_adinkra_being(scene: &mut Scene, opts: &StrangeBeingOptions) {
    let bounds = scene.bounds();
    let column = bounds.width * 0.125;
    let drop = bounds.height * 0.26;
    let column_x = |offset: f32| opts.side.place_x(bounds, opts.x + offset);

    let rows = [
        ((160.0, 100.0), opts.y, opts.stretched_rotation_speed),
        ((100.0, 100.0), opts.y, opts.mid_rotation_speed),
        ((80.0, 80.0), opts.y + drop, opts.bottom_rotation_speed),
    ];

    let mut step = 0;
    for ((w, h), y, speed) in rows {
        for offset in [column, 0.0] {
            step += 1;
            let motion = staggered(&opts.motion, speed, PI * 0.1 * step as f32);
            scene.add(image_config(&opts.image, column_x(offset), y, w, h).motion(motion));
        }
    }
}

#[derive(Clone, Debug)]
pub struct CentralGroupOptions {
    pub image: Option<Arc<ImageAsset>>,
    pub center_x: f32,
    pub center_y: f32,
    pub large_size: (f32, f32),
    pub bottom_eye_size: (f32, f32),
    pub long_eye_size: (f32, f32),
    pub large_rotation_speed: Option<f32>,
    pub bottom_eye_rotation_speed: Option<f32>,
    pub long_eye_rotation_speed: Option<f32>,
    pub motion: Motion,
}

impl Default for CentralGroupOptions {
    fn default() -> Self {
        Self {
            image: None,
            center_x: 0.0,
            center_y: 0.0,
            large_size: (210.0, 210.0),
            bottom_eye_size: (80.0, 80.0),
            long_eye_size: (100.0, 200.0),
            large_rotation_speed: None,
            bottom_eye_rotation_speed: None,
            long_eye_rotation_speed: None,
            motion: Motion::default(),
        }
    }
}

/// One large image at the center, a pair below it and a tall pair beside it
pub fn central_adinkra_group(scene: &mut Scene, opts: &CentralGroupOptions) {
    let bounds = scene.bounds();
    let (cx, cy) = (opts.center_x, opts.center_y);
    let bottom_dx = bounds.width * 0.07;
    let bottom_y = cy + bounds.height * 0.26;
    let long_dx = bounds.width * 0.05;

    let elements = [
        (cx, cy, opts.large_size, opts.large_rotation_speed),
        (cx + bottom_dx, bottom_y, opts.bottom_eye_size, opts.bottom_eye_rotation_speed),
        (cx - bottom_dx, bottom_y, opts.bottom_eye_size, opts.bottom_eye_rotation_speed),
        (cx + long_dx, cy, opts.long_eye_size, opts.long_eye_rotation_speed),
        (cx - long_dx, cy, opts.long_eye_size, opts.long_eye_rotation_speed),
    ];

    for (k, (x, y, (w, h), speed)) in elements.into_iter().enumerate() {
        let motion = staggered(&opts.motion, speed, PI * 0.1 * (k + 1) as f32);
        scene.add(image_config(&opts.image, x, y, w, h).motion(motion));
    }
}
