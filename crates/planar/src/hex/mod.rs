//! Hexagonal grid geometry.
//!
//! Purpose
//! - Integer counterpart of `crate::plane`: hex cells, regular hexagons,
//!   straight runs and their directions, shortest paths, and hexagons
//!   through or around given cells.
//!
//! Code cross-refs: `types::{HexPoint, Hexagon, HexSegment, Direction}`,
//! `path::path_between_hexes`, `cover::{hexagon_by_three_points, min_containing_hexagon}`

mod cover;
mod path;
mod types;

pub use cover::{hexagon_by_three_points, min_containing_hexagon};
pub use path::path_between_hexes;
pub use types::{Direction, HexPoint, HexSegment, Hexagon};
