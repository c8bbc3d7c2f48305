mod io;
mod provenance;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use planar::api::hex_center;
use planar::hex::{min_containing_hexagon, path_between_hexes, HexPoint};
use planar::plane::rand::{draw_points, CloudShape, PointCloudCfg, PointCount, ReplayToken};
use planar::plane::{diameter, min_containing_circle_with, GeomCfg};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::io::{parse_hex, CircleJson, HexJson, HexagonJson, PointJson, SegmentJson};
use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Plane and hex-grid geometry tools")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Minimum enclosing circle of a JSON point list
    Enclose {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Relative containment slack used during the search
        #[arg(long)]
        eps: Option<f64>,
        /// Seed of the visiting order
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Farthest pair of a JSON point list
    Diameter {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a reproducible random point cloud
    Sample {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = Shape::Square)]
        shape: Shape,
        #[arg(long, default_value_t = 1.0)]
        half_extent: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Shortest hex path between two cells given as X,Y
    HexPath {
        #[arg(long, value_parser = parse_hex, allow_hyphen_values = true)]
        from: HexPoint,
        #[arg(long, value_parser = parse_hex, allow_hyphen_values = true)]
        to: HexPoint,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Smallest hexagon containing a JSON hex list
    HexCover {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Square,
    Disk,
    Ring,
}

impl From<Shape> for CloudShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::Square => CloudShape::Square,
            Shape::Disk => CloudShape::Disk,
            Shape::Ring => CloudShape::Ring,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Enclose {
            input,
            out,
            eps,
            seed,
        } => enclose(&input, out.as_deref(), eps, seed),
        Action::Diameter { input, out } => farthest_pair(&input, out.as_deref()),
        Action::Sample {
            count,
            seed,
            index,
            shape,
            half_extent,
            out,
        } => sample(count, ReplayToken::new(seed, index), shape, half_extent, out.as_deref()),
        Action::HexPath { from, to, out } => hex_path(from, to, out.as_deref()),
        Action::HexCover { input, out } => hex_cover(&input, out.as_deref()),
        Action::Report => report(),
    }
}

fn enclose(input: &Path, out: Option<&Path>, eps: Option<f64>, seed: Option<u64>) -> Result<()> {
    let mut cfg = GeomCfg::default();
    if let Some(eps) = eps {
        cfg.eps_feas = eps;
    }
    if let Some(seed) = seed {
        cfg.shuffle_seed = seed;
    }
    let points = io::read_points(input)?;
    tracing::info!(
        input = %input.display(),
        points = points.len(),
        eps = cfg.eps_feas,
        seed = cfg.shuffle_seed,
        "enclose"
    );
    let circle = min_containing_circle_with(&points, cfg)?;
    tracing::info!(radius = circle.radius(), "enclosing circle");
    let params = json!({
        "input": input.to_string_lossy(),
        "points": points.len(),
        "eps_feas": cfg.eps_feas,
        "shuffle_seed": cfg.shuffle_seed
    });
    emit(&CircleJson::from(circle), out, Payload::new("enclose", params))
}

fn farthest_pair(input: &Path, out: Option<&Path>) -> Result<()> {
    let points = io::read_points(input)?;
    tracing::info!(input = %input.display(), points = points.len(), "diameter");
    let seg = diameter(&points)?;
    let params = json!({ "input": input.to_string_lossy(), "points": points.len() });
    emit(&SegmentJson::from(seg), out, Payload::new("diameter", params))
}

fn sample(
    count: usize,
    tok: ReplayToken,
    shape: Shape,
    half_extent: f64,
    out: Option<&Path>,
) -> Result<()> {
    tracing::info!(count, seed = tok.seed, index = tok.index, ?shape, half_extent, "sample");
    let cfg = PointCloudCfg {
        count: PointCount::Fixed(count),
        shape: shape.into(),
        half_extent,
        ..PointCloudCfg::default()
    };
    let points: Vec<PointJson> = draw_points(cfg, tok).into_iter().map(PointJson::from).collect();
    let params = json!({
        "count": count,
        "seed": tok.seed,
        "index": tok.index,
        "shape": format!("{shape:?}"),
        "half_extent": half_extent
    });
    emit(&points, out, Payload::new("sample", params))
}

#[derive(Serialize)]
struct PathStep {
    hex: HexJson,
    center: PointJson,
}

fn hex_path(from: HexPoint, to: HexPoint, out: Option<&Path>) -> Result<()> {
    tracing::info!(%from, %to, "hex-path");
    let steps: Vec<PathStep> = path_between_hexes(from, to)
        .into_iter()
        .map(|h| PathStep {
            hex: h.into(),
            center: hex_center(h).into(),
        })
        .collect();
    let params = json!({
        "from": HexJson::from(from),
        "to": HexJson::from(to)
    });
    emit(&steps, out, Payload::new("hex-path", params))
}

fn hex_cover(input: &Path, out: Option<&Path>) -> Result<()> {
    let hexes = io::read_hexes(input)?;
    tracing::info!(input = %input.display(), hexes = hexes.len(), "hex-cover");
    let hexagon = min_containing_hexagon(&hexes)?;
    let params = json!({ "input": input.to_string_lossy(), "hexes": hexes.len() });
    emit(&HexagonJson::from(hexagon), out, Payload::new("hex-cover", params))
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "planar_version": planar::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Print to stdout, or write `out` plus its provenance sidecar.
fn emit<T: Serialize>(value: &T, out: Option<&Path>, payload: Payload) -> Result<()> {
    let Some(path) = out else {
        println!("{}", serde_json::to_string_pretty(value)?);
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)?;
    let sidecar = provenance::write_sidecar(path, payload)?;
    tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}
