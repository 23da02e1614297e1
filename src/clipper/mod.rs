//! Clipping against an axis-aligned rectangle.
//!
//! Two algorithms share one point classifier ([`Outcode`]) and one
//! segment/side intersection ([`ClipEdge::intersect`]):
//!
//! - [`polyline`]: Cohen-Sutherland, extended to walk whole open paths.
//!   A path may leave and re-enter the box, so it can split into several
//!   output paths.
//! - [`polygon`]: Sutherland-Hodgman, four half-plane passes over a closed
//!   ring. Produces at most one ring.
//!
//! All functions are pure. Nothing is shared between calls.

pub mod edge;
pub mod outcode;
pub mod polygon;
pub mod polyline;

pub use edge::ClipEdge;
pub use outcode::Outcode;
pub use polygon::clip_polygon;
pub use polyline::{clip_polyline, clip_segment};

use crate::bbox::BoundingBox;
use crate::error::ClipError;
use crate::math::coord::Coord;

/// Clips geometry against a fixed bounding box.
///
/// Holds nothing but the box, so it is `Copy` and can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clipper {
    bbox: BoundingBox,
}

impl Clipper {
    /// Creates a clipper for the given box.
    pub fn new(bbox: BoundingBox) -> Self {
        Self { bbox }
    }

    /// Returns the box this clipper clips against.
    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Clips an open path. See [`polyline::clip_polyline`].
    pub fn clip_polyline<P: Coord + Clone>(
        &self,
        points: &[P],
    ) -> Result<Vec<Vec<P>>, ClipError> {
        clip_polyline(points, &self.bbox)
    }

    /// Clips a closed ring. See [`polygon::clip_polygon`].
    pub fn clip_polygon<P: Coord + Clone>(&self, points: &[P]) -> Vec<P> {
        clip_polygon(points, &self.bbox)
    }

    /// Clips a single segment. See [`polyline::clip_segment`].
    pub fn clip_segment<P: Coord + Clone>(&self, a: &P, b: &P) -> Option<(P, P)> {
        clip_segment(a, b, &self.bbox)
    }
}

impl From<BoundingBox> for Clipper {
    fn from(bbox: BoundingBox) -> Self {
        Self::new(bbox)
    }
}

impl TryFrom<[f64; 4]> for Clipper {
    type Error = ClipError;

    /// Accepts bounds in `[min_x, min_y, max_x, max_y]` order.
    fn try_from(bounds: [f64; 4]) -> Result<Self, Self::Error> {
        BoundingBox::try_from(bounds).map(Self::new)
    }
}
