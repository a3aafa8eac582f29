//! Shapes module - the animated drawable model
//!
//! This module provides:
//! - `Shape`, the single animated primitive type
//! - `ShapeConfig` and `Motion`, its construction parameters
//! - `Scene`, the ordered collection a sketch draws every frame
//! - `ImageAsset`, shared raster images for image-kind shapes

mod color;
mod config;
mod image;
mod kind;
mod motion;
mod scene;
mod shape;

pub use color::Rgba;
pub use config::ShapeConfig;
pub use image::{AssetError, ImageAsset};
pub use kind::{Extent, ShapeKind};
pub use motion::Motion;
pub use scene::{Bounds, Scene};
pub use shape::Shape;
