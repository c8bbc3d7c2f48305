//! Error taxonomy shared by the plane and hex modules.
//!
//! - Invalid arguments (bad angle, too few inputs, negative radius) fail
//!   immediately with no partial result.
//! - Undefined configurations (parallel lines, coincident or collinear
//!   points) are reported explicitly instead of leaking NaN/∞.
//! - Hex results that do not fit the `i32` grid fail with `CoordinateOverflow`
//!   instead of wrapping.

use thiserror::Error;

/// Failures of geometric constructions and queries.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeomError {
    #[error("line angle {0} is outside [0, π)")]
    InvalidAngle(f64),

    #[error("need at least {needed} inputs, got {got}")]
    InsufficientInput { needed: usize, got: usize },

    #[error("input set is empty")]
    EmptyInput,

    #[error("lines are parallel; no unique crossing point")]
    ParallelLines,

    #[error("points coincide")]
    CoincidentPoints,

    #[error("points are collinear")]
    CollinearPoints,

    #[error("radius {0} is negative or not a number")]
    NegativeRadius(f64),

    #[error("coordinate or radius is not finite")]
    NonFinite,

    #[error("direction is INCORRECT")]
    IncorrectDirection,

    #[error("hex coordinate or radius outside the i32 range")]
    CoordinateOverflow,
}

/// Result type for geometric operations.
pub type GeomResult<T> = Result<T, GeomError>;
