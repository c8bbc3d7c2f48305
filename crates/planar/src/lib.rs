//! Planar and hex-grid geometry.
//!
//! Modules
//! - `plane`: points, segments, circles, triangles, lines in normal form,
//!   circle constructions and the minimum enclosing circle.
//! - `hex`: hex cells, hexagons, grid directions, shortest paths and
//!   hexagon covers.
//! - `error`: `GeomError`, shared by both.
//!
//! All operations are pure functions over `Copy` value types. Degenerate
//! input is reported through `GeomError`, never through NaN or a panic.

pub mod api;
pub mod error;
pub mod hex;
pub mod plane;

pub use error::{GeomError, GeomResult};
pub use plane::GeomCfg;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomError, GeomResult};
    pub use crate::hex::{Direction, HexPoint, HexSegment, Hexagon};
    pub use crate::plane::rand::{draw_points, CloudShape, PointCloudCfg, PointCount, ReplayToken};
    pub use crate::plane::{
        circle_by_diameter, circle_by_three_points, diameter, min_containing_circle, Circle,
        GeomCfg, Line, Point, Segment, Triangle,
    };
}
