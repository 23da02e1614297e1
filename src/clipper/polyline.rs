//! Cohen-Sutherland clipping, extended from single segments to whole
//! polylines.
//!
//! The polyline is walked one segment at a time. Each segment is shortened
//! against the box until it is trivially accepted or rejected, and the
//! accepted pieces are stitched into runs. A run ends whenever the path
//! leaves the box, so a path that weaves in and out produces one output
//! polyline per visit.

use std::mem;

use super::outcode::Outcode;
use crate::bbox::BoundingBox;
use crate::error::ClipError;
use crate::math::coord::Coord;

/// Clips an open path against `bbox`.
///
/// Returns the inside runs in path order. Run endpoints that were cut by
/// the box are snapped onto its boundary. A path entirely outside the box
/// yields no runs; a path entirely inside yields a single run equal to
/// the input.
///
/// # Errors
/// [`ClipError::EmptyInput`] if `points` is empty.
pub fn clip_polyline<P: Coord + Clone>(
    points: &[P],
    bbox: &BoundingBox,
) -> Result<Vec<Vec<P>>, ClipError> {
    let first = points.first().ok_or(ClipError::EmptyInput)?;
    let mut code_a = Outcode::of(first, bbox);

    if points.len() == 1 {
        return Ok(if code_a.is_inside() {
            vec![vec![first.clone()]]
        } else {
            Vec::new()
        });
    }

    let last_segment = points.len() - 1;
    let mut part = Vec::new();
    let mut result = Vec::new();

    for (i, pair) in (1..).zip(points.windows(2)) {
        let mut a = pair[0].clone();
        let mut b = pair[1].clone();
        let last_code = Outcode::of(&b, bbox);
        let mut code_b = last_code;

        loop {
            match (code_a.priority_edge(), code_b.priority_edge()) {
                (None, None) => {
                    part.push(a);

                    if code_b != last_code {
                        // The segment left the box at `b`
                        part.push(b);
                        if i < last_segment {
                            result.push(mem::take(&mut part));
                        }
                    } else if i == last_segment {
                        part.push(b);
                    }
                    break;
                }
                _ if code_a.shares_side(code_b) => break,
                // Start endpoint first when both are outside
                (Some(edge), _) => {
                    a = edge.intersect(&a, &b, bbox);
                    code_a = Outcode::of(&a, bbox);
                }
                (None, Some(edge)) => {
                    b = edge.intersect(&a, &b, bbox);
                    code_b = Outcode::of(&b, bbox);
                }
            }
        }

        // `b` starts the next segment with its unclipped classification.
        code_a = last_code;
    }

    if !part.is_empty() {
        result.push(part);
    }

    log::trace!(
        "clipped polyline of {} points into {} parts",
        points.len(),
        result.len()
    );
    Ok(result)
}

/// Clips a single segment against `bbox`.
///
/// Returns the visible part, with cut ends moved onto the boundary, or
/// `None` when the segment misses the box.
pub fn clip_segment<P: Coord + Clone>(a: &P, b: &P, bbox: &BoundingBox) -> Option<(P, P)> {
    let (mut a, mut b) = (a.clone(), b.clone());
    let mut code_a = Outcode::of(&a, bbox);
    let mut code_b = Outcode::of(&b, bbox);

    loop {
        match (code_a.priority_edge(), code_b.priority_edge()) {
            (None, None) => return Some((a, b)),
            _ if code_a.shares_side(code_b) => return None,
            (Some(edge), _) => {
                a = edge.intersect(&a, &b, bbox);
                code_a = Outcode::of(&a, bbox);
            }
            (None, Some(edge)) => {
                b = edge.intersect(&a, &b, bbox);
                code_b = Outcode::of(&b, bbox);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use approx::assert_relative_eq;

    fn path(coords: &[(f64, f64)]) -> Vec<Vec2> {
        coords.iter().copied().map(Vec2::from).collect()
    }

    fn bbox(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
        BoundingBox::new(min_x, min_y, max_x, max_y).unwrap()
    }

    #[test]
    fn empty_input_is_rejected() {
        let points: [Vec2; 0] = [];
        assert_eq!(
            clip_polyline(&points, &bbox(0.0, 0.0, 1.0, 1.0)),
            Err(ClipError::EmptyInput)
        );
    }

    #[test]
    fn single_point() {
        let b = bbox(0.0, 0.0, 10.0, 10.0);
        let inside = [Vec2::new(5.0, 5.0)];
        assert_eq!(clip_polyline(&inside, &b).unwrap(), vec![inside.to_vec()]);

        let outside = [Vec2::new(15.0, 5.0)];
        assert!(clip_polyline(&outside, &b).unwrap().is_empty());
    }

    #[test]
    fn inside_path_is_unchanged() {
        let input = path(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let result = clip_polyline(&input, &bbox(0.0, 0.0, 30.0, 20.0)).unwrap();
        assert_eq!(result, vec![input]);
    }

    #[test]
    fn outside_segment_yields_nothing() {
        let input = path(&[(40.0, 40.0), (50.0, 50.0)]);
        let result = clip_polyline(&input, &bbox(0.0, 0.0, 30.0, 30.0)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn segment_crossing_the_whole_box() {
        let input = path(&[(-10.0, 5.0), (20.0, 5.0)]);
        let result = clip_polyline(&input, &bbox(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(result, vec![path(&[(0.0, 5.0), (10.0, 5.0)])]);
    }

    #[test]
    fn diagonal_past_a_corner_is_rejected() {
        // Both ends outside on different sides, the line misses the box.
        let input = path(&[(-5.0, 8.0), (8.0, 25.0)]);
        let result = clip_polyline(&input, &bbox(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn each_visit_becomes_its_own_part() {
        let input = path(&[(10.0, -10.0), (10.0, 30.0), (20.0, 30.0), (20.0, -10.0)]);
        let result = clip_polyline(&input, &bbox(0.0, 0.0, 20.0, 20.0)).unwrap();
        assert_eq!(
            result,
            vec![
                path(&[(10.0, 0.0), (10.0, 20.0)]),
                path(&[(20.0, 20.0), (20.0, 0.0)]),
            ]
        );
    }

    #[test]
    fn exit_on_last_segment_keeps_exit_point() {
        let input = path(&[(5.0, 5.0), (6.0, 6.0), (15.0, 6.0)]);
        let result = clip_polyline(&input, &bbox(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(result, vec![path(&[(5.0, 5.0), (6.0, 6.0), (10.0, 6.0)])]);
    }

    #[test]
    fn output_never_leaves_the_box() {
        let b = bbox(-3.5, -2.0, 4.25, 6.0);
        let input: Vec<Vec2> = (0..40)
            .map(|i| {
                let t = i as f64 * 0.7;
                Vec2::new(5.0 * t.cos(), 5.0 * t.sin() + 2.0)
            })
            .collect();

        let result = clip_polyline(&input, &b).unwrap();
        assert!(!result.is_empty());
        for p in result.iter().flatten() {
            assert!(b.contains(p), "{p:?} escaped {b:?}");
        }
    }

    #[test]
    fn zero_width_box_collapses_crossing_segment() {
        let input = path(&[(0.0, 5.0), (20.0, 5.0)]);
        let result = clip_polyline(&input, &bbox(5.0, 0.0, 5.0, 10.0)).unwrap();
        assert_eq!(result, vec![path(&[(5.0, 5.0), (5.0, 5.0)])]);
    }

    #[test]
    fn keeps_extra_ordinates_on_original_vertices() {
        #[derive(Clone, Debug, PartialEq)]
        struct Xyz(f64, f64, f64);

        impl Coord for Xyz {
            fn x(&self) -> f64 {
                self.0
            }
            fn y(&self) -> f64 {
                self.1
            }
            fn from_xy(x: f64, y: f64) -> Self {
                Xyz(x, y, f64::NAN)
            }
        }

        let input = [Xyz(1.0, 1.0, 7.0), Xyz(2.0, 2.0, 8.0), Xyz(20.0, 2.0, 9.0)];
        let result = clip_polyline(&input, &bbox(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0][..2], input[..2]);
        assert_eq!((result[0][2].0, result[0][2].1), (10.0, 2.0));
        assert!(result[0][2].2.is_nan());
    }

    #[test]
    fn segment_clipping() {
        let b = bbox(0.0, 0.0, 4096.0, 4096.0);

        let inside = clip_segment(&Vec2::new(10.0, 10.0), &Vec2::new(20.0, 20.0), &b);
        assert_eq!(inside, Some((Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0))));

        let outside = clip_segment(&Vec2::new(5000.0, 5000.0), &Vec2::new(5000.0, 6000.0), &b);
        assert_eq!(outside, None);

        let through_top = clip_segment(&Vec2::new(10.0, 100.0), &Vec2::new(10.0, 10000.0), &b);
        assert_eq!(through_top, Some((Vec2::new(10.0, 100.0), Vec2::new(10.0, 4096.0))));

        let (a, c) = clip_segment(&Vec2::new(-1000.0, 2000.0), &Vec2::new(2000.0, -1000.0), &b)
            .unwrap();
        assert_relative_eq!(a.x, 0.0);
        assert_relative_eq!(a.y, 1000.0);
        assert_relative_eq!(c.x, 1000.0);
        assert_relative_eq!(c.y, 0.0);
    }
}
