//! Triangles - pyramids and concentric stacks sharing one anchor

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::Side;
use crate::shapes::{Motion, Rgba, Scene, ShapeConfig};

/// Rotation speed added per layer so stacked triangles slowly drift apart
const LAYER_SPEED_STEP: f32 = 0.0001;

/// One layer of a triangle stack, vertices relative to the shared anchor
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleConfig {
    /// Top vertex height; the top vertex always sits at x = 0.
    /// Concentric stacks pin it at -60.
    pub v1y: f32,
    pub v2: (f32, f32),
    pub v3: (f32, f32),
    pub color: Rgba,
    pub stroke_weight: Option<f32>,
    pub rotation: Option<f32>,
    /// Phase added on top of the base motion
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            v1y: -60.0,
            v2: (-60.0, 60.0),
            v3: (60.0, 60.0),
            color: Rgba::WHITE,
            stroke_weight: None,
            rotation: None,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl TriangleConfig {
    pub fn new(v2: (f32, f32), v3: (f32, f32), color: Rgba) -> Self {
        Self {
            v2,
            v3,
            color,
            ..Default::default()
        }
    }
}

/// Per-layer motion: stacked rotation speed and phase, rotation left to the caller
fn layer_motion(base: &Motion, layer: &TriangleConfig, index: usize) -> Motion {
    Motion {
        rotation: layer.rotation,
        rotation_speed: Some(base.rotation_speed.unwrap_or(0.0) + index as f32 * LAYER_SPEED_STEP),
        ..Motion::default()
    }
    .or(&base.clone().shifted(layer.offset_x, layer.offset_y))
}

#[derive(Clone, Debug, Default)]
pub struct PyramidOptions {
    pub x: f32,
    pub y: f32,
    pub side: Side,
    pub triangles: Vec<TriangleConfig>,
    pub motion: Motion,
}

/// Stack of triangles with free top vertices, painted first to last
pub fn pyramid_triangles(scene: &mut Scene, opts: &PyramidOptions) {
    let x = opts.side.place_x(scene.bounds(), opts.x);
    for (i, layer) in opts.triangles.iter().enumerate() {
        scene.add(
            ShapeConfig::triangle((0.0, layer.v1y), layer.v2, layer.v3)
                .at(x, opts.y)
                .fill(layer.color)
                .stroke(Rgba::BLACK, layer.stroke_weight.unwrap_or(0.0))
                .motion(layer_motion(&opts.motion, layer, i)),
        );
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConcentricTrianglesOptions {
    pub x: f32,
    pub y: f32,
    pub side: Side,
    pub triangles: Vec<TriangleConfig>,
    pub motion: Motion,
}

/// Upright triangles sharing the top vertex `(0, -60)`, unstroked by default
pub fn concentric_bottom_triangles(scene: &mut Scene, opts: &ConcentricTrianglesOptions) {
    concentric_triangles(scene, opts, None, 0.0);
}

/// Like [`concentric_bottom_triangles`] but always turned upside down, with
/// a 1px outline by default
pub fn concentric_top_inverted_triangles(scene: &mut Scene, opts: &ConcentricTrianglesOptions) {
    concentric_triangles(scene, opts, Some(PI), 1.0);
}

fn concentric_triangles(
    scene: &mut Scene,
    opts: &ConcentricTrianglesOptions,
    rotation: Option<f32>,
    default_stroke: f32,
) {
    let x = opts.side.place_x(scene.bounds(), opts.x);
    for (i, layer) in opts.triangles.iter().enumerate() {
        let mut motion = layer_motion(&opts.motion, layer, i);
        if rotation.is_some() {
            motion.rotation = rotation;
        }
        scene.add(
            ShapeConfig::triangle((0.0, -60.0), layer.v2, layer.v3)
                .at(x, opts.y)
                .fill(layer.color)
                .stroke(Rgba::BLACK, layer.stroke_weight.unwrap_or(default_stroke))
                .motion(motion),
        );
    }
}

#[derive(Clone, Debug)]
pub struct InvertedTriangleOptions {
    pub x: f32,
    pub y: f32,
    pub vertices: [(f32, f32); 3],
    pub color: Rgba,
    pub stroke_color: Rgba,
    pub stroke_weight: f32,
    pub rotation: f32,
    pub motion: Motion,
}

impl Default for InvertedTriangleOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vertices: [(0.0, -60.0), (-60.0, 60.0), (60.0, 60.0)],
            color: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            stroke_weight: 4.0,
            rotation: PI,
            motion: Motion::default(),
        }
    }
}

/// A single triangle, upside down unless rotated otherwise
pub fn single_inverted_triangle(scene: &mut Scene, opts: &InvertedTriangleOptions) {
    let [v1, v2, v3] = opts.vertices;
    scene.add(
        ShapeConfig::triangle(v1, v2, v3)
            .at(opts.x, opts.y)
            .fill(opts.color)
            .stroke(opts.stroke_color, opts.stroke_weight)
            .motion(Motion::new().with_rotation(opts.rotation).or(&opts.motion)),
    );
}
