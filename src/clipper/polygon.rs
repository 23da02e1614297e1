//! Sutherland-Hodgman clipping of closed rings.
//!
//! The ring is clipped against each side of the box in turn, treating the
//! side as a half-plane. Each pass is an ordinary convex half-plane clip;
//! the rectangle is the intersection of the four half-planes.

use super::edge::ClipEdge;
use crate::bbox::BoundingBox;
use crate::math::coord::Coord;

/// Clips a closed ring against `bbox`.
///
/// The ring is read cyclically: the last point connects back to the first,
/// whether or not the input repeats its first point at the end. The result
/// may gain points on the boundary (including box corners) and is empty
/// when the ring lies entirely outside.
pub fn clip_polygon<P: Coord + Clone>(points: &[P], bbox: &BoundingBox) -> Vec<P> {
    let mut ring = points.to_vec();

    for edge in ClipEdge::ALL {
        ring = clip_against_edge(&ring, edge, bbox);

        if ring.is_empty() {
            log::debug!("polygon clipped away at {edge:?} edge");
            break;
        }
    }

    log::trace!(
        "clipped ring of {} points into {} points",
        points.len(),
        ring.len()
    );
    ring
}

/// One Sutherland-Hodgman pass: keeps the part of `ring` on the inner side
/// of `edge`, inserting a point wherever the ring crosses the edge line.
pub(crate) fn clip_against_edge<P: Coord + Clone>(
    ring: &[P],
    edge: ClipEdge,
    bbox: &BoundingBox,
) -> Vec<P> {
    let Some(mut prev) = ring.last() else {
        return Vec::new();
    };
    let mut prev_inside = edge.is_inside(prev, bbox);
    let mut output = Vec::with_capacity(ring.len() + 1);

    for p in ring {
        let inside = edge.is_inside(p, bbox);

        if inside != prev_inside {
            // prev -> p straddles the edge line
            output.push(edge.intersect(prev, p, bbox));
        }
        if inside {
            output.push(p.clone());
        }

        prev = p;
        prev_inside = inside;
    }

    output
}
