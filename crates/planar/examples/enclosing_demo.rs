//! Compare the enclosing circle with the farthest-pair circle on sample clouds.
//!
//! Usage:
//!   cargo run -p planar --example enclosing_demo -- square
//!   cargo run -p planar --example enclosing_demo -- ring
//!
//! Prints, per sample, the enclosing radius next to half the diameter. The
//! two agree only when the farthest pair spans the enclosing circle.

use planar::plane::rand::{draw_points, CloudShape, PointCloudCfg, PointCount, ReplayToken};
use planar::plane::{circle_by_diameter, diameter, min_containing_circle};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "square".to_string());
    let shape = match mode.as_str() {
        "square" => CloudShape::Square,
        "disk" => CloudShape::Disk,
        "ring" => CloudShape::Ring,
        _ => {
            eprintln!("usage: enclosing_demo [square|disk|ring]");
            return;
        }
    };
    let cfg = PointCloudCfg {
        count: PointCount::Uniform { min: 3, max: 20 },
        shape,
        ..PointCloudCfg::default()
    };
    for i in 0..5 {
        let pts = draw_points(cfg, ReplayToken::new(2025, i));
        let mec = min_containing_circle(&pts).unwrap();
        let half = circle_by_diameter(diameter(&pts).unwrap());
        println!(
            "sample {i}: n={}, enclosing r={:.6}, diameter r={:.6}",
            pts.len(),
            mec.radius(),
            half.radius()
        );
    }
}
