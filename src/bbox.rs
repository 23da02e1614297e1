//! Axis-aligned clip rectangle.

use crate::clipper::Outcode;
use crate::error::ClipError;
use crate::math::coord::Coord;

/// An axis-aligned rectangle `[min_x, max_x] x [min_y, max_y]`.
///
/// The constructors guarantee finite bounds with `min <= max` on both axes.
/// Zero-width or zero-height boxes are allowed and behave like any other
/// rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl BoundingBox {
    /// Creates a box from its corners.
    ///
    /// # Errors
    /// * [`ClipError::NonFiniteBoundingBox`] if any bound is NaN or infinite
    /// * [`ClipError::InvalidBoundingBox`] if `min_x > max_x` or `min_y > max_y`
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, ClipError> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(ClipError::NonFiniteBoundingBox);
        }
        if min_x > max_x || min_y > max_y {
            return Err(ClipError::InvalidBoundingBox {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }

        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Smallest box containing every point, or `None` for no points.
    ///
    /// Non-finite coordinates make the box invalid and also yield `None`.
    pub fn from_points<P: Coord>(points: &[P]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (mut min_x, mut min_y) = (first.x(), first.y());
        let (mut max_x, mut max_y) = (min_x, min_y);

        for p in rest {
            min_x = min_x.min(p.x());
            min_y = min_y.min(p.y());
            max_x = max_x.max(p.x());
            max_y = max_y.max(p.y());
        }

        Self::new(min_x, min_y, max_x, max_y).ok()
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Bounds in `[min_x, min_y, max_x, max_y]` order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains<P: Coord>(&self, p: &P) -> bool {
        Outcode::of(p, self).is_inside()
    }

    /// Returns true if the two boxes share at least one point.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }
}

impl TryFrom<[f64; 4]> for BoundingBox {
    type Error = ClipError;

    /// Accepts bounds in `[min_x, min_y, max_x, max_y]` order.
    fn try_from([min_x, min_y, max_x, max_y]: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(min_x, min_y, max_x, max_y)
    }
}
