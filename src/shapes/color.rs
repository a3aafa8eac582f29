//! RGBA color in the 0-255 channel range

use serde::{Deserialize, Serialize};

/// Four-channel color, each channel in 0.0..=255.0.
///
/// Channels are floats so oscillators can animate them smoothly; they are
/// quantized only when painted. Serialized as `[r, g, b, a]`; `[gray]`,
/// `[gray, alpha]` and `[r, g, b]` are accepted too.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255.0, 255.0, 255.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    /// Create a color with explicit alpha
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 255.0)
    }

    /// Opaque gray
    pub const fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    /// Gray with alpha
    pub const fn gray_alpha(v: f32, a: f32) -> Self {
        Self::new(v, v, v, a)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Quantize to 8-bit channels (rounded, clamped)
    pub fn to_u8(self) -> [u8; 4] {
        self.to_array().map(|c| c.round().clamp(0.0, 255.0) as u8)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

impl TryFrom<Vec<f32>> for Rgba {
    type Error = String;

    fn try_from(channels: Vec<f32>) -> Result<Self, Self::Error> {
        match channels.as_slice() {
            [v] => Ok(Rgba::gray(*v)),
            [v, a] => Ok(Rgba::gray_alpha(*v, *a)),
            [r, g, b] => Ok(Rgba::rgb(*r, *g, *b)),
            [r, g, b, a] => Ok(Rgba::new(*r, *g, *b, *a)),
            other => Err(format!(
                "color needs 1 to 4 channels, got {}",
                other.len()
            )),
        }
    }
}

impl From<Rgba> for Vec<f32> {
    fn from(c: Rgba) -> Self {
        c.to_array().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_defaults_alpha() {
        assert_eq!(Rgba::rgb(1.0, 2.0, 3.0).a, 255.0);
    }

    #[test]
    fn test_quantize() {
        assert_eq!(Rgba::new(-5.0, 12.4, 12.6, 300.0).to_u8(), [0, 12, 13, 255]);
    }

    #[test]
    fn test_json_forms() {
        let c: Rgba = serde_json::from_str("[255, 25, 255]").unwrap();
        assert_eq!(c, Rgba::rgb(255.0, 25.0, 255.0));

        let c: Rgba = serde_json::from_str("[20, 20, 20, 80]").unwrap();
        assert_eq!(c.a, 80.0);

        let c: Rgba = serde_json::from_str("[10]").unwrap();
        assert_eq!(c, Rgba::gray(10.0));

        let c: Rgba = serde_json::from_str("[10, 50]").unwrap();
        assert_eq!(c, Rgba::gray_alpha(10.0, 50.0));

        assert!(serde_json::from_str::<Rgba>("[]").is_err());
        assert!(serde_json::from_str::<Rgba>("[1, 2, 3, 4, 5]").is_err());
    }
}
