//! The four sides of the clip rectangle and segment/side intersection.

use super::outcode::Outcode;
use crate::bbox::BoundingBox;
use crate::math::coord::Coord;

/// One side of the clip rectangle, viewed as an infinite line.
///
/// Each side doubles as a half-plane: a point is inside the half-plane when
/// its [`Outcode`] does not carry this side's bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClipEdge {
    /// Line `x = min_x`, inside for `x >= min_x`
    Left,
    /// Line `x = max_x`, inside for `x <= max_x`
    Right,
    /// Line `y = min_y`, inside for `y >= min_y`
    Bottom,
    /// Line `y = max_y`, inside for `y <= max_y`
    Top,
}

impl ClipEdge {
    /// All sides, in the order polygons are clipped against them.
    pub const ALL: [ClipEdge; 4] = [Self::Left, Self::Right, Self::Bottom, Self::Top];

    /// The outcode bit for this side.
    pub fn bit(self) -> u8 {
        match self {
            Self::Left => Outcode::LEFT.bits(),
            Self::Right => Outcode::RIGHT.bits(),
            Self::Bottom => Outcode::BOTTOM.bits(),
            Self::Top => Outcode::TOP.bits(),
        }
    }

    /// Returns true if `p` is on the inner side of this edge (or on it).
    #[inline]
    pub fn is_inside<P: Coord>(self, p: &P, bbox: &BoundingBox) -> bool {
        !Outcode::of(p, bbox).contains(self)
    }

    /// Point where the segment `a -> b` meets this edge's line.
    ///
    /// The caller must only ask for an edge that `a` and `b` straddle.
    /// That keeps the denominator non-zero; it is not checked here.
    /// The result is built with [`Coord::from_xy`], so only X and Y are set.
    #[inline]
    pub fn intersect<P: Coord>(self, a: &P, b: &P, bbox: &BoundingBox) -> P {
        let (ax, ay) = (a.x(), a.y());
        let (bx, by) = (b.x(), b.y());

        match self {
            Self::Top => {
                let x = ax + (bx - ax) * (bbox.max_y() - ay) / (by - ay);
                P::from_xy(x, bbox.max_y())
            }
            Self::Bottom => {
                let x = ax + (bx - ax) * (bbox.min_y() - ay) / (by - ay);
                P::from_xy(x, bbox.min_y())
            }
            Self::Right => {
                let y = ay + (by - ay) * (bbox.max_x() - ax) / (bx - ax);
                P::from_xy(bbox.max_x(), y)
            }
            Self::Left => {
                let y = ay + (by - ay) * (bbox.min_x() - ax) / (bx - ax);
                P::from_xy(bbox.min_x(), y)
            }
        }
    }
}
