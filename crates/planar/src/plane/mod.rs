//! Euclidean plane geometry.
//!
//! Purpose
//! - Value types (`Point`, `Segment`, `Circle`, `Triangle`), lines in normal
//!   form, circle constructions, and the minimum enclosing circle.
//! - Degenerate configurations surface as `GeomError` variants, never as NaN.
//!
//! Tolerances
//! - Public `contains` predicates are exact with an inclusive boundary.
//!   `contains_eps` and `GeomCfg` make any slack explicit at the call site.
//!
//! Code cross-refs: `crate::error::GeomError`, `crate::hex` (grid counterpart)

mod construct;
mod enclosing;
mod line;
pub mod rand;
mod types;

pub use construct::{circle_by_diameter, circle_by_three_points, diameter, find_nearest_circle_pair};
pub use enclosing::{min_containing_circle, min_containing_circle_with};
pub use line::{bisector_by_points, line_by_points, line_by_segment, Line};
pub use types::{Circle, GeomCfg, Point, Segment, Triangle};

#[cfg(test)]
mod tests;
