//! Hexagons through and around sets of hexes.
//!
//! - `hexagon_by_three_points`: smallest hexagon with three hexes on its border.
//! - `min_containing_hexagon`: smallest hexagon covering a set of hexes.
//!
//! In cube coordinates the hex distance is the max-norm, so a hexagon of
//! radius `r` around `c` is the box `|c_k − p_k| <= r` cut by `Σ c_k = 0`.

use super::types::{HexPoint, Hexagon};
use crate::error::{GeomError, GeomResult};

/// Smallest hexagon with `a`, `b` and `c` all on its border, or `None`.
///
/// Three equal hexes give radius 0. Any border hexagon through the three
/// points can be shrunk to one of radius at most their largest pairwise
/// distance `d`, and no radius below `ceil(d / 2)` fits both ends of that
/// pair, so only those radii are searched.
pub fn hexagon_by_three_points(a: HexPoint, b: HexPoint, c: HexPoint) -> Option<Hexagon> {
    if a == b && b == c {
        return Some(Hexagon::from_radius(a, 0));
    }
    let d = a.distance(&b).max(b.distance(&c)).max(c.distance(&a));
    for r in (d + 1) / 2..=d {
        // radii past i32::MAX have no representable hexagon
        let radius = i32::try_from(r).ok()?;
        let found = a
            .ring(radius)
            .into_iter()
            .find(|center| center.distance(&b) == r && center.distance(&c) == r);
        if let Some(center) = found {
            return Some(Hexagon::from_radius(center, radius));
        }
    }
    None
}

/// Smallest hexagon containing every hex (border included).
///
/// Errors: `EmptyInput` for no hexes; `CoordinateOverflow` when the center or
/// radius of the answer does not fit in `i32`. One hex gives radius 0.
pub fn min_containing_hexagon(points: &[HexPoint]) -> GeomResult<Hexagon> {
    let first = points.first().ok_or(GeomError::EmptyInput)?.to_cube();
    let mut lo = first;
    let mut hi = first;
    for p in &points[1..] {
        let c = p.to_cube();
        for k in 0..3 {
            lo[k] = lo[k].min(c[k]);
            hi[k] = hi[k].max(c[k]);
        }
    }
    // each axis alone needs half its span; cube coordinates are i64 so spans cannot wrap
    let mut r = (0..3).map(|k| (hi[k] - lo[k] + 1) / 2).max().unwrap_or(0);
    loop {
        // feasible center coordinates per axis: [hi − r, lo + r]
        let floor: [i64; 3] = std::array::from_fn(|k| hi[k] - r);
        let ceil: [i64; 3] = std::array::from_fn(|k| lo[k] + r);
        let sum_floor: i64 = floor.iter().sum();
        let sum_ceil: i64 = ceil.iter().sum();
        if sum_floor <= 0 && 0 <= sum_ceil {
            let mut center = floor;
            let mut deficit = -sum_floor;
            for k in 0..3 {
                let step = deficit.min(ceil[k] - floor[k]);
                center[k] += step;
                deficit -= step;
            }
            debug_assert_eq!(center.iter().sum::<i64>(), 0);
            let radius = i32::try_from(r).map_err(|_| GeomError::CoordinateOverflow)?;
            let center = HexPoint::from_wide(center[0], center[2])?;
            return Ok(Hexagon::from_radius(center, radius));
        }
        r += 1;
    }
}
