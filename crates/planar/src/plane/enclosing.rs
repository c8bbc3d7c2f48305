//! Minimum enclosing circle (iterative Welzl).
//!
//! Model
//! - Visit the points in a seeded random order, keeping the smallest circle of
//!   the prefix. A point outside the current circle must lie on the boundary of
//!   the next one, which restarts the search with one (then two) fixed boundary
//!   points. Expected O(n) with a random order.
//! - In-loop containment allows a slack of `eps_feas * radius`, relative to the
//!   current circle so the search behaves the same at every coordinate scale.
//!   The final radius is raised to the largest center-to-point distance, so
//!   the exact `Circle::contains` holds for every input point.
//!
//! Code cross-refs: `construct::{circle_by_diameter, circle_by_three_points}`

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::construct::{circle_by_diameter, circle_by_three_points_eps};
use super::types::{Circle, GeomCfg, Point, Segment};
use crate::error::{GeomError, GeomResult};

/// Smallest circle containing every point, with default tolerances.
pub fn min_containing_circle(points: &[Point]) -> GeomResult<Circle> {
    min_containing_circle_with(points, GeomCfg::default())
}

/// Smallest circle containing every point.
///
/// Errors: `EmptyInput` for no points. One point gives a zero-radius circle.
/// Two points give `circle_by_diameter` of the pair; its radius may grow by one
/// rounding step, since the half length can round below the distance from the
/// rounded midpoint to an endpoint and exact coverage wins.
pub fn min_containing_circle_with(points: &[Point], cfg: GeomCfg) -> GeomResult<Circle> {
    match points {
        [] => Err(GeomError::EmptyInput),
        [p] => Ok(Circle::degenerate(*p)),
        [a, b] => Ok(cover_exactly(circle_by_diameter(Segment::new(*a, *b)), points)),
        _ => {
            let mut order: Vec<Point> = points.to_vec();
            let mut rng = StdRng::seed_from_u64(cfg.shuffle_seed);
            order.shuffle(&mut rng);
            Ok(cover_exactly(welzl(&order, cfg), points))
        }
    }
}

fn welzl(pts: &[Point], cfg: GeomCfg) -> Circle {
    let mut circle = Circle::degenerate(pts[0]);
    for i in 1..pts.len() {
        if !covers(&circle, &pts[i], cfg) {
            circle = with_one_fixed(&pts[..i], pts[i], cfg);
        }
    }
    circle
}

fn with_one_fixed(pts: &[Point], q: Point, cfg: GeomCfg) -> Circle {
    let mut circle = Circle::degenerate(q);
    for j in 0..pts.len() {
        if !covers(&circle, &pts[j], cfg) {
            circle = with_two_fixed(&pts[..j], q, pts[j], cfg);
        }
    }
    circle
}

fn with_two_fixed(pts: &[Point], q1: Point, q2: Point, cfg: GeomCfg) -> Circle {
    let mut circle = circle_by_diameter(Segment::new(q1, q2));
    for p in pts {
        if !covers(&circle, p, cfg) {
            circle = circumcircle_or_widest(q1, q2, *p, cfg);
        }
    }
    circle
}

#[inline]
fn covers(circle: &Circle, p: &Point, cfg: GeomCfg) -> bool {
    circle.contains_eps(p, cfg.eps_feas * circle.radius())
}

/// Circumcircle, or the diameter circle of the farthest pair when the triple is degenerate.
fn circumcircle_or_widest(a: Point, b: Point, c: Point, cfg: GeomCfg) -> Circle {
    match circle_by_three_points_eps(a, b, c, cfg.eps_det) {
        Ok(circle) => circle,
        Err(err) => {
            tracing::debug!(?a, ?b, ?c, %err, "degenerate triple in enclosing search");
            let pairs = [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)];
            let mut widest = pairs[0];
            for s in &pairs[1..] {
                if s.length() > widest.length() {
                    widest = *s;
                }
            }
            circle_by_diameter(widest)
        }
    }
}

fn cover_exactly(circle: Circle, points: &[Point]) -> Circle {
    let center = circle.center();
    let reach = points
        .iter()
        .map(|p| center.distance(p))
        .fold(circle.radius(), f64::max);
    Circle::from_distance(center, reach)
}
