//! Point classification against the clip rectangle.
//!
//! Each point gets a 4-bit code, one bit per box side it lies beyond:
//!
//! ```text
//!           left   mid   right
//!    top    1001   1000   1010
//!    mid    0001   0000   0010
//! bottom    0101   0100   0110
//! ```
//!
//! Points on the boundary are inside on that axis.

use std::fmt;
use std::ops::BitOr;

use super::edge::ClipEdge;
use crate::bbox::BoundingBox;
use crate::math::coord::Coord;

/// Position of a point relative to a [`BoundingBox`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    /// Classifies `p` against `bbox`.
    #[inline]
    pub fn of<P: Coord>(p: &P, bbox: &BoundingBox) -> Self {
        let (x, y) = (p.x(), p.y());
        let mut code = 0;

        if x < bbox.min_x() {
            code |= Self::LEFT.0;
        } else if x > bbox.max_x() {
            code |= Self::RIGHT.0;
        }

        if y < bbox.min_y() {
            code |= Self::BOTTOM.0;
        } else if y > bbox.max_y() {
            code |= Self::TOP.0;
        }

        Self(code)
    }

    /// Raw bits, always in `0..=15`.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the point lies beyond `edge`.
    pub fn contains(self, edge: ClipEdge) -> bool {
        self.0 & edge.bit() != 0
    }

    /// Returns true if both points lie beyond a common side, which means
    /// the segment between them cannot cross the box.
    pub fn shares_side(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Picks a single side this point lies beyond, preferring top, then
    /// bottom, right and left. `None` for inside points.
    pub fn priority_edge(self) -> Option<ClipEdge> {
        [ClipEdge::Top, ClipEdge::Bottom, ClipEdge::Right, ClipEdge::Left]
            .into_iter()
            .find(|&edge| self.contains(edge))
    }
}

impl BitOr for Outcode {
    type Output = Self;
    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl fmt::Debug for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outcode({:04b})", self.0)
    }
}
