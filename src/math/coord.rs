//! Coordinate access used by the clippers.
//!
//! The clipping algorithms only ever read X and Y and, when an edge is
//! crossed, build a fresh point from an X/Y pair. Any point type that can do
//! those three things can be clipped directly, without converting to
//! [`Vec2`](super::vec2::Vec2) first.

/// A 2D coordinate that the clippers can read and construct.
///
/// Types with extra ordinates (Z, M, ...) may implement this trait too.
/// Input vertices that survive clipping are cloned as-is, so their extra
/// ordinates are kept; points created on the box boundary come from
/// [`Coord::from_xy`] and only carry what that constructor fills in.
pub trait Coord {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// Build a new point at `(x, y)`.
    fn from_xy(x: f64, y: f64) -> Self;
}

impl Coord for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }

    fn from_xy(x: f64, y: f64) -> Self {
        [x, y]
    }
}

impl Coord for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }

    fn from_xy(x: f64, y: f64) -> Self {
        (x, y)
    }
}
