//! Curated API surface.
//!
//! Flat re-exports of every public construction and query, grouped the way
//! callers use them. Prefer these over reaching into submodules.

// Plane primitives and lines
pub use crate::plane::{
    bisector_by_points, line_by_points, line_by_segment, Circle, GeomCfg, Line, Point, Segment,
    Triangle,
};
// Plane constructions
pub use crate::plane::{
    circle_by_diameter, circle_by_three_points, diameter, find_nearest_circle_pair,
    min_containing_circle, min_containing_circle_with,
};
// Random point clouds
pub use crate::plane::rand::{
    draw_points, CloudShape, PointCloudCfg, PointCount, ReplayToken as CloudReplay,
};
// Hex grid
pub use crate::hex::{
    hexagon_by_three_points, min_containing_hexagon, path_between_hexes, Direction, HexPoint,
    HexSegment, Hexagon,
};

use nalgebra::{Matrix2, Vector2};

/// Signed area of the triangle `(a, b, c)`; positive for counter-clockwise order.
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    let m = Matrix2::from_columns(&[b.to_vec() - a.to_vec(), c.to_vec() - a.to_vec()]);
    m.determinant() / 2.0
}

/// Hex cell centre in the plane for unit hex size (flat-topped layout).
pub fn hex_center(p: HexPoint) -> Point {
    let (x, y) = (f64::from(p.x), f64::from(p.y));
    let v = Vector2::new(1.5 * x, 3f64.sqrt() * (y + x / 2.0));
    Point::from(v)
}
