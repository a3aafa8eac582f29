//! Quad grid - rows of translucent panels

use crate::shapes::{Motion, Rgba, Scene, ShapeConfig};

/// Rotation speed every grid quad turns at, regardless of the base motion
const GRID_ROTATION_SPEED: f32 = 0.001;

#[derive(Clone, Debug)]
pub struct QuadGridOptions {
    pub rows: usize,
    pub per_row: usize,
    pub quad_width: f32,
    pub quad_height: f32,
    pub horizontal_spacing: f32,
    /// Extra gap between rows, added to the quad height
    pub vertical_padding: f32,
    /// Top-left corner of the first quad
    pub initial_x: f32,
    pub initial_y: f32,
    /// Only the x/y amplitude and frequency are used; phases are staggered
    pub motion: Motion,
}

impl Default for QuadGridOptions {
    fn default() -> Self {
        Self {
            rows: 1,
            per_row: 1,
            quad_width: 50.0,
            quad_height: 10.0,
            horizontal_spacing: 60.0,
            vertical_padding: 0.0,
            initial_x: 0.0,
            initial_y: 0.0,
            motion: Motion::default(),
        }
    }
}

/// Lay out `rows` x `per_row` quads anchored at their top-left corners.
///
/// Phases are staggered by grid distance: `offset_x = (row + col) * 0.1`,
/// `offset_y = (row + col) * 0.2`.
pub fn quad_grid(scene: &mut Scene, opts: &QuadGridOptions) {
    let (w, h) = (opts.quad_width, opts.quad_height);
    let base = Motion {
        amplitude_x: opts.motion.amplitude_x,
        frequency_x: opts.motion.frequency_x,
        amplitude_y: opts.motion.amplitude_y,
        frequency_y: opts.motion.frequency_y,
        ..Motion::default()
    };

    for row in 0..opts.rows {
        for col in 0..opts.per_row {
            let stagger = (row + col) as f32;
            let x = opts.initial_x + col as f32 * opts.horizontal_spacing;
            let y = opts.initial_y + row as f32 * (h + opts.vertical_padding);
            let motion = Motion {
                rotation: Some(0.0),
                rotation_speed: Some(GRID_ROTATION_SPEED),
                offset_x: Some(stagger * 0.1),
                offset_y: Some(stagger * 0.2),
                ..Motion::default()
            };
            scene.add(
                ShapeConfig::quad((0.0, 0.0), (w, 0.0), (w, h), (0.0, h))
                    .at(x, y)
                    .fill(Rgba::gray_alpha(255.0, 50.0))
                    .stroke(Rgba::BLACK, 1.0)
                    .motion(motion.or(&base)),
            );
        }
    }
}
