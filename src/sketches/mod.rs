//! Sketches module - complete artworks built from shapes and patterns
//!
//! A sketch is set up once against a surface and then asked to draw every
//! tick while its [`Player`] is running. Most sketches fill a [`Scene`] in
//! `setup` and replay it in `draw`; the classic demos paint directly.
//!
//! [`Scene`]: crate::shapes::Scene

mod classic;
mod connect;
mod custom;
mod first_image;
mod play_practice;
mod player;

pub use classic::{RandomCircles, ReflectingBall, RotatingShapes, SpiralBall, WaveAnimation};
pub use connect::Connect;
pub use custom::{CustomSketch, ShapeGroup, SketchFile, SketchFileError};
pub use first_image::FirstImage;
pub use play_practice::PlayPractice;
pub use player::{PlayState, Player};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::render::Surface;
use crate::shapes::{AssetError, ImageAsset};

/// An animated artwork
pub trait Sketch {
    /// Display name for the UI
    fn name(&self) -> &str;

    /// Paint the opening background and build any state.
    ///
    /// Layout reads the surface size at call time.
    fn setup(&mut self, surface: &mut dyn Surface, assets: &Assets);

    /// Paint one frame
    fn draw(&mut self, surface: &mut dyn Surface, tick: u64);

    /// The surface changed size. Shapes may keep their old coordinates.
    fn resize(&mut self, _width: f32, _height: f32) {}
}

/// Where image assets are read from
#[derive(Clone, Debug, Default)]
pub struct Assets {
    dir: Option<PathBuf>,
}

impl Assets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// No asset directory; loads look in `./assets`
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Load `name` from the asset directory
    pub fn image(&self, name: &str) -> Result<Arc<ImageAsset>, AssetError> {
        let dir = self.dir.as_deref().unwrap_or_else(|| Path::new("assets"));
        ImageAsset::load(dir.join(name))
    }

    /// Load `name`, logging instead of failing
    pub fn image_or_log(&self, name: &str) -> Option<Arc<ImageAsset>> {
        match self.image(name) {
            Ok(image) => {
                log::info!(
                    "Loaded image {} ({}x{})",
                    image.name(),
                    image.width(),
                    image.height()
                );
                Some(image)
            }
            Err(e) => {
                log::error!("Failed to load image {}: {}", name, e);
                None
            }
        }
    }
}

/// Every built-in sketch, for menus and settings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SketchKind {
    #[default]
    FirstImage,
    PlayPractice,
    Connect,
    RotatingShapes,
    WaveAnimation,
    RandomCircles,
    ReflectingBall,
    SpiralBall,
    Custom,
}

impl SketchKind {
    pub fn all() -> &'static [SketchKind] {
        &[
            SketchKind::FirstImage,
            SketchKind::PlayPractice,
            SketchKind::Connect,
            SketchKind::RotatingShapes,
            SketchKind::WaveAnimation,
            SketchKind::RandomCircles,
            SketchKind::ReflectingBall,
            SketchKind::SpiralBall,
            SketchKind::Custom,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SketchKind::FirstImage => "First Image",
            SketchKind::PlayPractice => "Play Practice",
            SketchKind::Connect => "Connect",
            SketchKind::RotatingShapes => "Rotating Shapes",
            SketchKind::WaveAnimation => "Wave Animation",
            SketchKind::RandomCircles => "Random Circles",
            SketchKind::ReflectingBall => "Reflecting Ball",
            SketchKind::SpiralBall => "Spiral Ball",
            SketchKind::Custom => "Custom (JSON)",
        }
    }

    /// Build a fresh sketch of this kind.
    ///
    /// `Custom` reads `custom_path`; a missing or broken file is an error.
    pub fn create(&self, custom_path: Option<&Path>) -> Result<Box<dyn Sketch>, SketchFileError> {
        let sketch: Box<dyn Sketch> = match self {
            SketchKind::FirstImage => Box::new(FirstImage::new()),
            SketchKind::PlayPractice => Box::new(PlayPractice::new()),
            SketchKind::Connect => Box::new(Connect::new()),
            SketchKind::RotatingShapes => Box::new(RotatingShapes::new()),
            SketchKind::WaveAnimation => Box::new(WaveAnimation::new()),
            SketchKind::RandomCircles => Box::new(RandomCircles::new(None)),
            SketchKind::ReflectingBall => Box::new(ReflectingBall::new()),
            SketchKind::SpiralBall => Box::new(SpiralBall::new()),
            SketchKind::Custom => {
                let path = custom_path.ok_or(SketchFileError::NoPath)?;
                Box::new(CustomSketch::load(path)?)
            }
        };
        Ok(sketch)
    }
}
