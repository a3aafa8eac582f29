//! ShapeConfig - everything needed to construct a shape
//!
//! Configs are plain data: pattern factories build them with the builder
//! methods below, and JSON sketch files deserialize straight into them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::image::ImageAsset;
use super::kind::ShapeKind;
use super::motion::Motion;

/// Outline thickness of a shape whose config leaves it unset
pub const DEFAULT_STROKE_WEIGHT: f32 = 1.0;

/// Construction parameters for a [`Shape`](super::Shape)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub kind: ShapeKind,
    /// Baseline position
    pub x: f32,
    pub y: f32,
    /// Scalar size for circle/square/point
    pub size: Option<f32>,
    /// Width and height for ellipse/rect/image
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Fill color
    pub color: Rgba,
    pub stroke_color: Rgba,
    /// Outline thickness; unset means [`DEFAULT_STROKE_WEIGHT`] unless the
    /// factory placing the shape decides otherwise
    pub stroke_weight: Option<f32>,
    /// Up to four vertices relative to the position (line/triangle/quad)
    pub vertices: Vec<(f32, f32)>,
    /// Shared image for image-kind shapes
    #[serde(skip)]
    pub image: Option<Arc<ImageAsset>>,
    #[serde(flatten)]
    pub motion: Motion,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Circle,
            x: 0.0,
            y: 0.0,
            size: None,
            width: None,
            height: None,
            color: Rgba::WHITE,
            stroke_color: Rgba::BLACK,
            stroke_weight: None,
            vertices: Vec::new(),
            image: None,
            motion: Motion::default(),
        }
    }
}

impl ShapeConfig {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn circle(size: f32) -> Self {
        Self {
            size: Some(size),
            ..Self::new(ShapeKind::Circle)
        }
    }

    #[cfg(test)]
    pub fn square(size: f32) -> Self {
        Self {
            size: Some(size),
            ..Self::new(ShapeKind::Square)
        }
    }

    pub fn ellipse(width: f32, height: f32) -> Self {
        Self::new(ShapeKind::Ellipse).dimensions(width, height)
    }

    pub fn rect(width: f32, height: f32) -> Self {
        Self::new(ShapeKind::Rect).dimensions(width, height)
    }

    pub fn line(v1: (f32, f32), v2: (f32, f32)) -> Self {
        Self {
            vertices: vec![v1, v2],
            ..Self::new(ShapeKind::Line)
        }
    }

    pub fn triangle(v1: (f32, f32), v2: (f32, f32), v3: (f32, f32)) -> Self {
        Self {
            vertices: vec![v1, v2, v3],
            ..Self::new(ShapeKind::Triangle)
        }
    }

    pub fn quad(v1: (f32, f32), v2: (f32, f32), v3: (f32, f32), v4: (f32, f32)) -> Self {
        Self {
            vertices: vec![v1, v2, v3, v4],
            ..Self::new(ShapeKind::Quad)
        }
    }

    pub fn point() -> Self {
        Self::new(ShapeKind::Point)
    }

    pub fn image(image: Arc<ImageAsset>, width: f32, height: f32) -> Self {
        Self {
            image: Some(image),
            ..Self::new(ShapeKind::Image).dimensions(width, height)
        }
    }

    /// Set the baseline position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn dimensions(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn fill(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn stroke(mut self, color: Rgba, weight: f32) -> Self {
        self.stroke_color = color;
        self.stroke_weight = Some(weight);
        self
    }

    pub fn stroke_weight(mut self, weight: f32) -> Self {
        self.stroke_weight = Some(weight);
        self
    }

    pub fn rotation(mut self, rotation: f32) -> Self {
        self.motion.rotation = Some(rotation);
        self
    }

    /// Replace the animation parameters
    pub fn motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShapeConfig::default();
        assert_eq!(config.kind, ShapeKind::Circle);
        assert_eq!(config.color, Rgba::WHITE);
        assert_eq!(config.stroke_color, Rgba::BLACK);
        assert_eq!(config.stroke_weight, None);
    }

    #[test]
    fn test_builder() {
        let config = ShapeConfig::rect(20.0, 550.0)
            .at(500.0, 300.0)
            .fill(Rgba::new(12.0, 12.0, 12.0, 80.0))
            .stroke(Rgba::BLACK, 2.0)
            .rotation(1.5);
        assert_eq!(config.kind, ShapeKind::Rect);
        assert_eq!(config.stroke_weight, Some(2.0));
        assert_eq!((config.x, config.y), (500.0, 300.0));
        assert_eq!(config.width, Some(20.0));
        assert_eq!(config.motion.rotation, Some(1.5));
    }

    #[test]
    fn test_json_with_flattened_motion() {
        let json = r#"{
            "kind": "triangle",
            "x": 10, "y": 20,
            "color": [255, 255, 1, 12],
            "vertices": [[-25, 25], [25, 25], [0, -21.65]],
            "amplitude_x": 275,
            "rotation_speed": 0.01
        }"#;
        let config: ShapeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.kind, ShapeKind::Triangle);
        assert_eq!(config.vertices.len(), 3);
        assert_eq!(config.motion.amplitude_x, Some(275.0));
        assert_eq!(config.motion.rotation_speed, Some(0.01));
        // Unspecified fields keep their defaults
        assert_eq!(config.stroke_weight, None);
        assert!(config.image.is_none());
    }
}
