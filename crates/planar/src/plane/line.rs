//! Lines in normal form `y·cos(angle) = x·sin(angle) + b`, `angle ∈ [0, π)`.
//!
//! The angle is the slope direction folded into a half-turn, so every
//! non-degenerate pair of points (vertical ones included) maps to one line.
//! Intersections are solved as a 2×2 linear system and report parallel
//! lines instead of returning non-finite coordinates.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use nalgebra::{Matrix2, Vector2};

use super::types::{GeomCfg, Point, Segment};
use crate::error::{GeomError, GeomResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    b: f64,
    angle: f64,
}

impl Line {
    /// Line through `point` with inclination `angle`; `InvalidAngle` outside `[0, π)`.
    pub fn new(point: Point, angle: f64) -> GeomResult<Self> {
        if !(0.0..PI).contains(&angle) {
            return Err(GeomError::InvalidAngle(angle));
        }
        let (sin, cos) = angle.sin_cos();
        Ok(Self {
            b: point.y * cos - point.x * sin,
            angle,
        })
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Signed residual of `p` in the line equation; zero on the line.
    #[inline]
    pub fn residual(&self, p: &Point) -> f64 {
        let (sin, cos) = self.angle.sin_cos();
        p.y * cos - p.x * sin - self.b
    }

    /// Crossing point with the default parallel tolerance.
    pub fn cross_point(&self, other: &Line) -> GeomResult<Point> {
        self.cross_point_eps(other, GeomCfg::default().eps_det)
    }

    /// Solve `−sin θᵢ·x + cos θᵢ·y = bᵢ`. `ParallelLines` when `|det| <= eps_det`;
    /// det equals `sin(θ₂ − θ₁)`.
    pub fn cross_point_eps(&self, other: &Line, eps_det: f64) -> GeomResult<Point> {
        let (s1, c1) = self.angle.sin_cos();
        let (s2, c2) = other.angle.sin_cos();
        let m = Matrix2::new(-s1, c1, -s2, c2);
        let det = m.determinant();
        if det.abs() <= eps_det {
            return Err(GeomError::ParallelLines);
        }
        // inverse = adjugate / det
        let adj = Matrix2::new(c2, -c1, s2, -s1);
        Ok(Point::from(adj * Vector2::new(self.b, other.b) / det))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sin, cos) = self.angle.sin_cos();
        write!(f, "Line({cos} * y = {sin} * x + {})", self.b)
    }
}

/// Fold any angle into `[0, π)`.
pub(crate) fn normalize_angle(theta: f64) -> f64 {
    let mut t = theta.rem_euclid(PI);
    // rem_euclid may round up to exactly π
    if t >= PI {
        t -= PI;
    }
    t + 0.0
}

/// Line through two distinct points.
pub fn line_by_points(a: Point, b: Point) -> GeomResult<Line> {
    if a == b {
        return Err(GeomError::CoincidentPoints);
    }
    let theta = (b.y - a.y).atan2(b.x - a.x);
    Line::new(a, normalize_angle(theta))
}

pub fn line_by_segment(s: Segment) -> GeomResult<Line> {
    line_by_points(s.begin, s.end)
}

/// Perpendicular bisector of `ab`.
pub fn bisector_by_points(a: Point, b: Point) -> GeomResult<Line> {
    if a == b {
        return Err(GeomError::CoincidentPoints);
    }
    let theta = (b.y - a.y).atan2(b.x - a.x);
    Line::new(a.midpoint(&b), normalize_angle(theta + FRAC_PI_2))
}
