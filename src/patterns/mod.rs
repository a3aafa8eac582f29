//! Patterns module - motif factories
//!
//! Each factory appends one structural motif (an eye, a neck pair, a ring of
//! circles...) to a [`Scene`](crate::shapes::Scene). Factories take an
//! options struct whose `Default` carries the motif's stock geometry and
//! colors, plus a base [`Motion`](crate::shapes::Motion) shared by every
//! element of the motif.
//!
//! ## Parameter precedence
//!
//! Element-specific values (stagger offsets, per-part rotation speeds,
//! per-part overrides) are built as a `Motion` of their own and merged with
//! [`Motion::or`](crate::shapes::Motion::or), so they always win over the
//! factory base, which wins over the shape default of "not animated".
//!
//! ## Mirroring
//!
//! Factories with a [`Side`] reflect their anchor across the vertical
//! midline of the scene bounds for [`Side::Right`]. Motion parameters are
//! left as given; callers pass negated speeds or shifted phases themselves
//! when they want a true mirror image.

mod concentric;
mod eyes;
mod faces;
mod grid;
mod mouths;
mod ornaments;
mod pillars;
mod triangles;

pub use concentric::{
    concentric_circles, concentric_shapes, independent_circles, independent_shapes, CircleConfig,
};
pub use eyes::{
    complex_eye, diamond_square_eye, eye_dots, nested_diamond_squares, nested_rect_eye,
    quad_eye_pair, simple_eye, ComplexEyeOptions, DiamondSquareEyeOptions, EyeDotsOptions,
    NestedDiamondOptions, NestedRectEyeOptions, QuadEyeOptions, SimpleEyeOptions,
};
pub use faces::{
    adinkrahene_face, central_adinkra_group, strange_adinkra_being, AdinkraheneFaceOptions,
    CentralGroupOptions, StrangeBeingOptions,
};
pub use grid::{quad_grid, QuadGridOptions};
pub use mouths::{
    ellipse_mouth_pair, nested_triangle_mouths, single_triangle_mouth, EllipseMouthOptions,
    NestedTriangleMouthOptions, TriangleMouthOptions,
};
pub use ornaments::{
    concentric_bottom_ellipses, horizontal_line, BottomEllipsesOptions, EllipseConfig,
    HorizontalLineOptions,
};
pub use pillars::{
    being_neck_pair, central_forehead_rects, connecting_vertical_rect, long_neck_pair,
    long_rect_neck_with_mouth, nested_rect_pillar, vertical_pipe, vertical_rect_stack,
    BeingNeckOptions, ConnectorOptions, ForeheadOptions, LongNeckOptions, NeckMouthOptions,
    NestedPillarOptions, PipeOptions, RectStackOptions,
};
pub use triangles::{
    concentric_bottom_triangles, concentric_top_inverted_triangles, pyramid_triangles,
    single_inverted_triangle, ConcentricTrianglesOptions, InvertedTriangleOptions,
    PyramidOptions, TriangleConfig,
};

use crate::shapes::Bounds;

/// Which half of a mirrored composition a motif belongs to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn both() -> [Side; 2] {
        [Side::Left, Side::Right]
    }

    /// Horizontal anchor for this side: `x` on the left, `width - x` on the right
    pub fn place_x(self, bounds: Bounds, x: f32) -> f32 {
        match self {
            Side::Left => x,
            Side::Right => bounds.mirror_x(x),
        }
    }
}
