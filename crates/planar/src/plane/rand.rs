//! Random point clouds in the plane (replay tokens).
//!
//! Purpose
//! - Small, deterministic samplers for benches, property tests and the CLI
//!   `sample` command. A draw is fully determined by `(cfg, token)`.
//!
//! Model
//! - `Square`: uniform in `[-h, h]²` around `center`.
//! - `Disk`: uniform in the disk of radius `h` (sqrt-radius sampling).
//! - `Ring`: uniform angle on the circle of radius `h`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudShape {
    Square,
    Disk,
    Ring,
}

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudCfg {
    pub count: PointCount,
    pub shape: CloudShape,
    /// Half side of the square, or radius of the disk/ring. Negative values are mirrored.
    pub half_extent: f64,
    pub center: Point,
}

impl Default for PointCloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(32),
            shape: CloudShape::Square,
            half_extent: 1.0,
            center: Point::new(0.0, 0.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point cloud.
pub fn draw_points(cfg: PointCloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let h = cfg.half_extent.abs();
    let c = cfg.center;
    (0..n)
        .map(|_| match cfg.shape {
            CloudShape::Square => Point::new(
                c.x + rng.gen_range(-1.0_f64..=1.0) * h,
                c.y + rng.gen_range(-1.0_f64..=1.0) * h,
            ),
            CloudShape::Disk => {
                let r = rng.gen::<f64>().sqrt() * h;
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Point::new(c.x + r * th.cos(), c.y + r * th.sin())
            }
            CloudShape::Ring => {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Point::new(c.x + h * th.cos(), c.y + h * th.sin())
            }
        })
        .collect()
}
