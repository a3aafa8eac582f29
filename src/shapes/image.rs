//! Image assets - raster images shared by image-kind shapes
//!
//! An asset is decoded once and handed out as `Arc<ImageAsset>`; every shape
//! that shows it holds a clone of the handle, never a copy of the pixels.
//! The pixels are kept premultiplied, ready to be used as a canvas paint.

use std::fmt;
use std::path::Path as FilePath;
use std::sync::Arc;

use image::RgbaImage;
use thiserror::Error;
use vello_cpu::peniko::color::PremulRgba8;
use vello_cpu::peniko::ImageSampler;
use vello_cpu::{Image, ImageSource, Pixmap};

/// Errors that can occur while loading an image asset
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image has no pixels")]
    Empty,

    #[error("Image is too large ({0}x{1})")]
    TooLarge(u32, u32),
}

/// A decoded, read-only RGBA image
pub struct ImageAsset {
    name: String,
    width: u16,
    height: u16,
    paint: Image,
}

impl ImageAsset {
    /// Load and decode an image file
    pub fn load(path: impl AsRef<FilePath>) -> Result<Arc<Self>, AssetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let decoded = image::load_from_memory(&bytes)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image")
            .to_string();

        Self::from_rgba(name, decoded.to_rgba8()).map(Arc::new)
    }

    /// Wrap already-decoded pixels
    pub fn from_rgba(name: impl Into<String>, pixels: RgbaImage) -> Result<Self, AssetError> {
        let (w, h) = pixels.dimensions();
        if w == 0 || h == 0 {
            return Err(AssetError::Empty);
        }
        let (Ok(width), Ok(height)) = (u16::try_from(w), u16::try_from(h)) else {
            return Err(AssetError::TooLarge(w, h));
        };

        let mut translucent = false;
        let premul: Vec<PremulRgba8> = pixels
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                translucent |= a != 255;
                premultiply(r, g, b, a)
            })
            .collect();
        let pixmap = Pixmap::from_parts_with_opacity(premul, width, height, translucent);

        Ok(Self {
            name: name.into(),
            width,
            height,
            paint: Image {
                image: ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: ImageSampler::default(),
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// The pixels as a paint, spanning `(0, 0)..(width, height)` in user space
    pub fn paint(&self) -> &Image {
        &self.paint
    }

    /// Premultiplied RGBA of one texel
    #[cfg(test)]
    fn texel(&self, x: u16, y: u16) -> [u8; 4] {
        let ImageSource::Pixmap(pixmap) = &self.paint.image else {
            return [0; 4];
        };
        let offset = (usize::from(y) * usize::from(self.width) + usize::from(x)) * 4;
        let data = pixmap.data_as_u8_slice();
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }
}

fn premultiply(r: u8, g: u8, b: u8, a: u8) -> PremulRgba8 {
    let scale = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
    PremulRgba8 {
        r: scale(r),
        g: scale(g),
        b: scale(b),
        a,
    }
}

impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAsset")
            .field("name", &self.name)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
