//! Shortest hex paths by cube-coordinate interpolation.
//!
//! Sample the straight segment between the two cube positions at
//! `distance + 1` evenly spaced parameters and round every sample to the
//! nearest hex. Consecutive samples are one step apart, so the result is a
//! shortest path. The start is nudged by a tiny zero-sum offset so samples
//! falling exactly on a hex edge round the same way every time.

use super::types::HexPoint;

/// Zero-sum nudge applied to the start cube.
const NUDGE: [f64; 3] = [1e-6, 2e-6, -3e-6];

/// Fractional cube position.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cube([f64; 3]);

impl Cube {
    fn of(p: HexPoint) -> Self {
        let c = p.to_cube();
        Cube(c.map(|v| v as f64))
    }

    fn lerp(self, end: Cube, t: f64) -> Cube {
        let mut out = [0.0; 3];
        for k in 0..3 {
            out[k] = self.0[k] + t * (end.0[k] - self.0[k]);
        }
        Cube(out)
    }

    /// Round to the nearest hex, fixing the axis with the largest rounding error.
    fn round(self) -> HexPoint {
        let r = self.0.map(f64::round);
        let diff = [
            (r[0] - self.0[0]).abs(),
            (r[1] - self.0[1]).abs(),
            (r[2] - self.0[2]).abs(),
        ];
        // y is implied by x and z, so fixing y needs no work
        let (x, z) = if diff[0] > diff[1] && diff[0] > diff[2] {
            (-r[1] - r[2], r[2])
        } else if diff[1] > diff[2] {
            (r[0], r[2])
        } else {
            (r[0], -r[0] - r[1])
        };
        HexPoint::new(x as i32, z as i32)
    }
}

/// Shortest path from `from` to `to`, both included.
pub fn path_between_hexes(from: HexPoint, to: HexPoint) -> Vec<HexPoint> {
    let n = from.distance(&to);
    if n == 0 {
        return vec![from];
    }
    let mut start = Cube::of(from);
    for k in 0..3 {
        start.0[k] += NUDGE[k];
    }
    let end = Cube::of(to);
    let mut route = Vec::with_capacity(n as usize + 1);
    route.push(from);
    for i in 1..n {
        route.push(start.lerp(end, i as f64 / n as f64).round());
    }
    route.push(to);
    route
}
