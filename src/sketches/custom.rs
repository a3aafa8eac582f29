//! Custom sketches - compositions read from JSON files
//!
//! A sketch file lists groups of shapes. Each group lays its shapes out
//! either around one shared anchor (`concentric`) or at their own positions
//! (`independent`), with a base motion merged under every shape's own:
//!
//! ```json
//! {
//!   "name": "Two rings",
//!   "background": [10],
//!   "trail": [10, 50],
//!   "groups": [
//!     {
//!       "layout": "concentric",
//!       "cx": 0.5, "cy": 0.5,
//!       "motion": { "rotation_speed": 0.01 },
//!       "shapes": [
//!         { "kind": "circle", "size": 80, "color": [255, 0, 0, 40] },
//!         { "kind": "square", "size": 40, "amplitude_x": 100, "frequency_x": 0.02 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Concentric anchors are fractions of the canvas size. Image shapes take
//! the group's `image`, loaded from the asset directory at setup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Assets, Sketch};
use crate::patterns::{concentric_shapes, independent_shapes};
use crate::render::Surface;
use crate::shapes::{Bounds, Motion, Rgba, Scene, ShapeConfig, ShapeKind};

/// Errors that can occur reading a sketch file
#[derive(Error, Debug)]
pub enum SketchFileError {
    #[error("Failed to read sketch file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid sketch file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No sketch file selected")]
    NoPath,
}

/// One laid-out group of shapes
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ShapeGroup {
    /// Every shape re-anchored at `(cx, cy)`, given as canvas fractions
    Concentric {
        #[serde(default = "half")]
        cx: f32,
        #[serde(default = "half")]
        cy: f32,
        #[serde(default)]
        motion: Motion,
        #[serde(default)]
        image: Option<String>,
        shapes: Vec<ShapeConfig>,
    },
    /// Shapes at their own `x`/`y`, in pixels
    Independent {
        #[serde(default)]
        motion: Motion,
        #[serde(default)]
        image: Option<String>,
        shapes: Vec<ShapeConfig>,
    },
}

fn half() -> f32 {
    0.5
}

impl ShapeGroup {
    pub fn shapes(&self) -> &[ShapeConfig] {
        match self {
            ShapeGroup::Concentric { shapes, .. } | ShapeGroup::Independent { shapes, .. } => shapes,
        }
    }

    fn image_name(&self) -> Option<&str> {
        match self {
            ShapeGroup::Concentric { image, .. } | ShapeGroup::Independent { image, .. } => {
                image.as_deref()
            }
        }
    }

    /// Append the group's shapes to `scene`
    fn build(&self, scene: &mut Scene, assets: &Assets) {
        let image = self.image_name().and_then(|name| assets.image_or_log(name));
        let shapes: Vec<ShapeConfig> = self
            .shapes()
            .iter()
            .map(|config| {
                let mut config = config.clone();
                if config.kind == ShapeKind::Image {
                    config.image = image.clone();
                }
                config
            })
            .collect();

        match self {
            ShapeGroup::Concentric { cx, cy, motion, .. } => {
                let (x, y) = scene.bounds().at(*cx, *cy);
                concentric_shapes(scene, x, y, &shapes, motion);
            }
            ShapeGroup::Independent { motion, .. } => {
                independent_shapes(scene, &shapes, motion);
            }
        }
    }
}

/// On-disk description of a sketch
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchFile {
    pub name: String,
    /// Opening background
    pub background: Rgba,
    /// Per-frame background, usually translucent
    pub trail: Rgba,
    pub groups: Vec<ShapeGroup>,
}

impl Default for SketchFile {
    fn default() -> Self {
        Self {
            name: "Custom".to_string(),
            background: Rgba::gray(10.0),
            trail: Rgba::gray_alpha(10.0, 50.0),
            groups: Vec::new(),
        }
    }
}

impl SketchFile {
    /// A small file to start editing from: two rings swaying around the center
    pub fn starter() -> Self {
        Self {
            name: "New sketch".to_string(),
            groups: vec![ShapeGroup::Concentric {
                cx: 0.5,
                cy: 0.5,
                motion: Motion::new()
                    .with_rotation_speed(0.01)
                    .move_x(120.0, 0.01, 0.0),
                image: None,
                shapes: vec![
                    ShapeConfig::circle(160.0).fill(Rgba::new(255.0, 25.0, 255.0, 20.0)),
                    ShapeConfig::circle(80.0)
                        .fill(Rgba::new(25.0, 255.0, 255.0, 30.0))
                        .motion(Motion::new().move_y(80.0, 0.02, 0.0)),
                ],
            }],
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SketchFileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SketchFileError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SketchFileError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Number of shapes across all groups
    pub fn shape_count(&self) -> usize {
        self.groups.iter().map(|g| g.shapes().len()).sum()
    }
}

/// A sketch built from a [`SketchFile`]
pub struct CustomSketch {
    file: SketchFile,
    source: Option<PathBuf>,
    scene: Option<Scene>,
}

impl CustomSketch {
    pub fn new(file: SketchFile) -> Self {
        Self {
            file,
            source: None,
            scene: None,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SketchFileError> {
        let path = path.as_ref();
        let file = SketchFile::load(path)?;
        log::info!(
            "Loaded sketch file {} ({} groups, {} shapes)",
            path.display(),
            file.groups.len(),
            file.shape_count()
        );
        Ok(Self {
            source: Some(path.to_path_buf()),
            ..Self::new(file)
        })
    }

    #[cfg(test)]
    pub fn file(&self) -> &SketchFile {
        &self.file
    }

    #[cfg(test)]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[cfg(test)]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }
}

impl Sketch for CustomSketch {
    fn name(&self) -> &str {
        &self.file.name
    }

    fn setup(&mut self, surface: &mut dyn Surface, assets: &Assets) {
        match &self.source {
            Some(path) => log::info!("Setting up {} from {}", self.file.name, path.display()),
            None => log::info!("Setting up {}", self.file.name),
        }
        surface.background(self.file.background);

        let mut scene = Scene::new(Bounds::of(surface));
        for group in &self.file.groups {
            group.build(&mut scene, assets);
        }

        let unknown = scene.iter().filter(|s| s.kind() == ShapeKind::Unknown).count();
        if unknown > 0 {
            log::warn!("{} shapes in {} have an unknown kind", unknown, self.file.name);
        }
        self.scene = Some(scene);
    }

    fn draw(&mut self, surface: &mut dyn Surface, tick: u64) {
        surface.background(self.file.trail);
        if let Some(scene) = self.scene.as_mut() {
            scene.draw(surface, tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recorder::{DrawCall, Recorder};

    const TWO_GROUPS: &str = r#"{
        "name": "Test",
        "background": [20],
        "trail": [20, 30],
        "groups": [
            {
                "layout": "concentric",
                "motion": { "rotation_speed": 0.01, "amplitude_x": 40, "frequency_x": 0.02 },
                "shapes": [
                    { "kind": "circle", "size": 80, "color": [255, 0, 0, 40] },
                    { "kind": "square", "size": 40, "amplitude_x": 0 }
                ]
            },
            {
                "layout": "independent",
                "shapes": [
                    { "kind": "triangle", "x": 100, "y": 50,
                      "vertices": [[0, -10], [-10, 10], [10, 10]] },
                    { "kind": "hexagon", "x": 10, "y": 10 }
                ]
            }
        ]
    }"#;

    fn set_up(json: &str) -> (CustomSketch, Recorder) {
        let mut sketch = CustomSketch::new(SketchFile::from_json(json).unwrap());
        let mut surface = Recorder::new(1000.0, 600.0);
        sketch.setup(&mut surface, &Assets::none());
        (sketch, surface)
    }

    #[test]
    fn test_parse() {
        let file = SketchFile::from_json(TWO_GROUPS).unwrap();
        assert_eq!(file.name, "Test");
        assert_eq!(file.background, Rgba::gray(20.0));
        assert_eq!(file.groups.len(), 2);
        assert_eq!(file.shape_count(), 4);
        assert!(matches!(file.groups[0], ShapeGroup::Concentric { cx, .. } if cx == 0.5));
    }

    #[test]
    fn test_layout_and_motion_merge() {
        let (sketch, surface) = set_up(TWO_GROUPS);
        assert_eq!(surface.calls, vec![DrawCall::Background(Rgba::gray(20.0))]);

        let scene = sketch.scene().unwrap();
        assert_eq!(scene.len(), 4);

        let circle = scene.get(0).unwrap();
        assert_eq!((circle.base_position().x, circle.base_position().y), (500.0, 300.0));
        assert_eq!(circle.fill(), Rgba::new(255.0, 0.0, 0.0, 40.0));
        assert_eq!(circle.motion_x().amplitude, 40.0);
        assert_eq!(circle.rotation_speed(), 0.01);

        // The square's own amplitude wins over the group's
        assert!(!scene.get(1).unwrap().motion_x().is_active());

        let triangle = scene.get(2).unwrap();
        assert_eq!(triangle.kind(), ShapeKind::Triangle);
        assert_eq!(triangle.base_position().x, 100.0);
        assert_eq!(scene.get(3).unwrap().kind(), ShapeKind::Unknown);
    }

    #[test]
    fn test_unknown_kind_draws_nothing() {
        let (mut sketch, mut surface) = set_up(TWO_GROUPS);
        surface.clear();
        sketch.draw(&mut surface, 1);
        assert_eq!(surface.calls[0], DrawCall::Background(Rgba::gray_alpha(20.0, 30.0)));
        assert_eq!(surface.primitive_count(), 3);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_shapes_without_stroke_weight_are_unoutlined() {
        let json = r#"{ "groups": [ { "layout": "concentric", "shapes": [
            { "kind": "rect", "x": 0, "y": 0, "color": [255, 0, 0, 255] },
            { "kind": "circle", "stroke_weight": 2 } ] } ] }"#;
        let (sketch, _) = set_up(json);
        let scene = sketch.scene().unwrap();
        assert_eq!(scene.get(0).unwrap().stroke_weight(), 0.0);
        assert_eq!(scene.get(1).unwrap().stroke_weight(), 2.0);
    }

    #[test]
    fn test_defaults_for_empty_file() {
        let file = SketchFile::from_json("{}").unwrap();
        assert_eq!(file.name, "Custom");
        assert!(file.groups.is_empty());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            SketchFile::from_json("{ \"groups\": 3 }"),
            Err(SketchFileError::Parse(_))
        ));
        assert!(matches!(
            CustomSketch::load("/definitely/not/here.json"),
            Err(SketchFileError::Io(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("mandala-custom-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sketch.json");

        let file = SketchFile::from_json(TWO_GROUPS).unwrap();
        file.save(&path).unwrap();
        let sketch = CustomSketch::load(&path).unwrap();
        assert_eq!(sketch.name(), "Test");
        assert_eq!(sketch.source(), Some(path.as_path()));
        assert_eq!(sketch.file().shape_count(), 4);

        SketchFile::starter().save(&path).unwrap();
        let mut starter = CustomSketch::load(&path).unwrap();
        let mut surface = Recorder::new(1000.0, 600.0);
        starter.setup(&mut surface, &Assets::none());
        let scene = starter.scene().unwrap();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.get(0).unwrap().base_position().x, 500.0);
        assert_eq!(scene.get(1).unwrap().motion_y().amplitude, 80.0);
        assert_eq!(scene.get(1).unwrap().rotation_speed(), 0.01);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_group_image_leaves_shape_empty() {
        let json = r#"{ "groups": [ { "layout": "independent", "image": "nope.png",
            "shapes": [ { "kind": "image", "width": 80, "height": 80 } ] } ] }"#;
        let (mut sketch, mut surface) = set_up(json);
        assert!(sketch.scene().unwrap().get(0).unwrap().image().is_none());
        surface.clear();
        sketch.draw(&mut surface, 1);
        assert_eq!(surface.primitive_count(), 0);
    }
}
