//! Basic plane value types and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons and the shuffle seed of the enclosing search.
//! - `Point`, `Segment`, `Circle`, `Triangle`: immutable value types.
//!
//! Containment predicates come in two flavours: `contains` is exact (inclusive
//! boundary, no epsilon) and `contains_eps` takes an explicit slack.
//!
//! Code cross-refs: `line::Line`, `construct::*`, `enclosing::min_containing_circle`

use nalgebra::Vector2;

use crate::error::{GeomError, GeomResult};

/// Geometry configuration (tolerances and seeds).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Below this `|det|` two lines are treated as parallel.
    pub eps_det: f64,
    /// Relative slack of containment checks inside the enclosing-circle search
    /// (a point counts as covered within `eps_feas * radius` of the boundary).
    pub eps_feas: f64,
    /// Seed of the point permutation used by the enclosing-circle search.
    pub shuffle_seed: u64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_feas: 1e-9,
            shuffle_seed: 0x5eed,
        }
    }
}

/// Point in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Segment between two points. Direction is ignored by `==`.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub begin: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.begin.distance(&self.end)
    }
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.begin.midpoint(&self.end)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.begin == other.begin && self.end == other.end)
            || (self.begin == other.end && self.end == other.begin)
    }
}

/// Circle with `radius >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Fails with `NegativeRadius` for negative or NaN radii and with
    /// `NonFinite` for an infinite radius or a non-finite center.
    pub fn new(center: Point, radius: f64) -> GeomResult<Self> {
        if radius.is_nan() || radius < 0.0 {
            return Err(GeomError::NegativeRadius(radius));
        }
        if !radius.is_finite() || !center.x.is_finite() || !center.y.is_finite() {
            return Err(GeomError::NonFinite);
        }
        Ok(Self { center, radius })
    }

    /// Zero-radius circle.
    #[inline]
    pub fn degenerate(center: Point) -> Self {
        Self {
            center,
            radius: 0.0,
        }
    }

    /// Caller guarantees `radius` is a distance (non-negative).
    #[inline]
    pub(crate) fn from_distance(center: Point, radius: f64) -> Self {
        debug_assert!(radius >= 0.0 || radius.is_nan(), "negative radius");
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Gap between two circles; 0 when they touch or overlap.
    pub fn distance(&self, other: &Circle) -> f64 {
        let gap = self.center.distance(&other.center) - (self.radius + other.radius);
        if gap > 0.0 {
            gap
        } else {
            0.0
        }
    }

    /// Point on or inside the circle (exact comparison).
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.center.distance(p) <= self.radius
    }

    /// Containment with slack: positive `eps` enlarges the disk, negative shrinks it.
    #[inline]
    pub fn contains_eps(&self, p: &Point, eps: f64) -> bool {
        self.center.distance(p) <= self.radius + eps
    }
}

/// Triangle on three distinct points. Vertex order is ignored by `==`.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    /// Collinear vertices are accepted (zero area); coincident ones are not.
    pub fn new(a: Point, b: Point, c: Point) -> GeomResult<Self> {
        if a == b || b == c || c == a {
            return Err(GeomError::CoincidentPoints);
        }
        Ok(Self { a, b, c })
    }

    pub fn half_perimeter(&self) -> f64 {
        half_perimeter(&self.a, &self.b, &self.c)
    }

    /// Heron's formula.
    pub fn area(&self) -> f64 {
        heron(&self.a, &self.b, &self.c)
    }

    /// Sub-triangle area test, no epsilon. Sensitive to rounding near the border.
    pub fn contains(&self, p: &Point) -> bool {
        self.contains_eps(p, 0.0)
    }

    pub fn contains_eps(&self, p: &Point, eps: f64) -> bool {
        let parts = heron(&self.a, &self.b, p) + heron(&self.b, &self.c, p) + heron(&self.c, &self.a, p);
        parts <= self.area() + eps
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        let mine = [self.a, self.b, self.c];
        [other.a, other.b, other.c].iter().all(|q| mine.contains(q))
    }
}

#[inline]
fn half_perimeter(a: &Point, b: &Point, c: &Point) -> f64 {
    (a.distance(b) + b.distance(c) + c.distance(a)) / 2.0
}

/// Heron's area. The product is clamped at zero: collinear input yields 0, not NaN.
fn heron(a: &Point, b: &Point, c: &Point) -> f64 {
    let p = half_perimeter(a, b, c);
    let prod = p * (p - a.distance(b)) * (p - b.distance(c)) * (p - c.distance(a));
    prod.max(0.0).sqrt()
}
