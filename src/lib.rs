//! Clipping of 2D polylines and polygons against an axis-aligned box.
//!
//! Typical use is cutting geometry down to a viewport or map tile before
//! rendering or storage. Open paths are clipped with Cohen-Sutherland and
//! may split into several pieces; closed rings are clipped with
//! Sutherland-Hodgman and stay a single ring.
//!
//! # Quick Start
//!
//! ```
//! use lineclip::prelude::*;
//!
//! let bbox = BoundingBox::new(0.0, 0.0, 30.0, 30.0)?;
//! let path = [Vec2::new(-10.0, 10.0), Vec2::new(10.0, 10.0), Vec2::new(10.0, -10.0)];
//!
//! let parts = clip_polyline(&path, &bbox)?;
//! assert_eq!(parts, vec![vec![
//!     Vec2::new(0.0, 10.0),
//!     Vec2::new(10.0, 10.0),
//!     Vec2::new(10.0, 0.0),
//! ]]);
//! # Ok::<(), lineclip::ClipError>(())
//! ```
//!
//! Any point type implementing [`Coord`] can be clipped, including plain
//! `[f64; 2]` and `(f64, f64)`.

pub mod bbox;
pub mod clipper;
pub mod error;
pub mod math;

pub use bbox::BoundingBox;
pub use clipper::{clip_polygon, clip_polyline, clip_segment, ClipEdge, Clipper, Outcode};
pub use error::ClipError;
pub use math::coord::Coord;
pub use math::vec2::Vec2;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use lineclip::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bbox::BoundingBox;
    pub use crate::clipper::{clip_polygon, clip_polyline, clip_segment, Clipper};
    pub use crate::error::ClipError;
    pub use crate::math::coord::Coord;
    pub use crate::math::vec2::Vec2;
}
