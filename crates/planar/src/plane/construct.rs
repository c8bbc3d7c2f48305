//! Constructions composed from the plane primitives.
//!
//! - `diameter`: farthest pair of a point set.
//! - `circle_by_diameter`, `circle_by_three_points`: circles from segments/triples.
//! - `find_nearest_circle_pair`: closest pair of circles.

use super::line::bisector_by_points;
use super::types::{Circle, GeomCfg, Point, Segment};
use crate::error::{GeomError, GeomResult};

/// Segment joining the two most distant points; the first maximal pair wins ties.
pub fn diameter(points: &[Point]) -> GeomResult<Segment> {
    if points.len() < 2 {
        return Err(GeomError::InsufficientInput {
            needed: 2,
            got: points.len(),
        });
    }
    let mut best = (0usize, 1usize);
    let mut best_d = f64::NEG_INFINITY;
    for i in 0..points.len() - 1 {
        for j in i + 1..points.len() {
            let d = points[i].distance(&points[j]);
            if d > best_d {
                best_d = d;
                best = (i, j);
            }
        }
    }
    Ok(Segment::new(points[best.0], points[best.1]))
}

/// Circle with `diameter` as its diameter.
pub fn circle_by_diameter(diameter: Segment) -> Circle {
    Circle::from_distance(diameter.midpoint(), diameter.length() / 2.0)
}

/// Circumcircle of three points (bisector intersection).
pub fn circle_by_three_points(a: Point, b: Point, c: Point) -> GeomResult<Circle> {
    circle_by_three_points_eps(a, b, c, GeomCfg::default().eps_det)
}

pub(crate) fn circle_by_three_points_eps(
    a: Point,
    b: Point,
    c: Point,
    eps_det: f64,
) -> GeomResult<Circle> {
    if a == b || b == c || c == a {
        return Err(GeomError::CoincidentPoints);
    }
    let center = bisector_by_points(a, b)?
        .cross_point_eps(&bisector_by_points(b, c)?, eps_det)
        .map_err(|e| match e {
            GeomError::ParallelLines => GeomError::CollinearPoints,
            other => other,
        })?;
    Ok(Circle::from_distance(center, center.distance(&a)))
}

/// Pair of circles with the smallest gap; the first minimal pair wins ties.
pub fn find_nearest_circle_pair(circles: &[Circle]) -> GeomResult<(Circle, Circle)> {
    if circles.len() < 2 {
        return Err(GeomError::InsufficientInput {
            needed: 2,
            got: circles.len(),
        });
    }
    let mut best = (0usize, 1usize);
    let mut best_d = f64::INFINITY;
    for i in 0..circles.len() - 1 {
        for j in i + 1..circles.len() {
            let d = circles[i].distance(&circles[j]);
            if d < best_d {
                best_d = d;
                best = (i, j);
            }
        }
    }
    Ok((circles[best.0], circles[best.1]))
}
