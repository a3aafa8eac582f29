//! Shape kinds and the size model each kind uses

use serde::{Deserialize, Serialize};

/// The primitive a shape draws
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ShapeKind {
    Circle,
    Ellipse,
    Rect,
    Square,
    Line,
    Triangle,
    Quad,
    Point,
    Image,
    /// A name that matched no primitive (e.g. a typo in a sketch file).
    /// Such shapes animate but never draw.
    Unknown,
}

impl ShapeKind {
    /// Every drawable kind
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Circle,
            ShapeKind::Ellipse,
            ShapeKind::Rect,
            ShapeKind::Square,
            ShapeKind::Line,
            ShapeKind::Triangle,
            ShapeKind::Quad,
            ShapeKind::Point,
            ShapeKind::Image,
        ]
    }

    /// Lowercase name, as used in sketch files
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Rect => "rect",
            ShapeKind::Square => "square",
            ShapeKind::Line => "line",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Quad => "quad",
            ShapeKind::Point => "point",
            ShapeKind::Image => "image",
            ShapeKind::Unknown => "unknown",
        }
    }

    /// Parse a kind name; anything unrecognised maps to `Unknown`
    pub fn from_name(name: &str) -> Self {
        ShapeKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .unwrap_or(ShapeKind::Unknown)
    }

    /// Default extent for this kind before any config is applied
    pub fn default_extent(&self) -> Extent {
        match self {
            ShapeKind::Circle | ShapeKind::Square | ShapeKind::Point => Extent::Diameter(50.0),
            ShapeKind::Ellipse | ShapeKind::Rect => Extent::Box {
                width: 50.0,
                height: 50.0,
            },
            ShapeKind::Image => Extent::Box {
                width: 100.0,
                height: 100.0,
            },
            ShapeKind::Line | ShapeKind::Triangle | ShapeKind::Quad | ShapeKind::Unknown => {
                Extent::Vertices
            }
        }
    }
}

impl From<String> for ShapeKind {
    fn from(name: String) -> Self {
        ShapeKind::from_name(&name)
    }
}

impl From<ShapeKind> for &'static str {
    fn from(kind: ShapeKind) -> Self {
        kind.name()
    }
}

/// How big a shape is.
///
/// Exactly one form is meaningful per kind: a single scalar for
/// circle/square/point, a width and height for ellipse/rect/image, and
/// nothing for vertex-defined kinds (line/triangle/quad).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent {
    /// Scalar size (diameter for circles, side for squares)
    Diameter(f32),
    /// Width and height, animated in lockstep
    Box { width: f32, height: f32 },
    /// Geometry comes entirely from the vertices
    Vertices,
}

impl Extent {
    /// Apply one shared size offset to every dimension, each floored at `min`
    pub fn offset(&self, delta: f32, min: f32) -> Extent {
        match *self {
            Extent::Diameter(d) => Extent::Diameter((d + delta).max(min)),
            Extent::Box { width, height } => Extent::Box {
                width: (width + delta).max(min),
                height: (height + delta).max(min),
            },
            Extent::Vertices => Extent::Vertices,
        }
    }
}
