//! JSON shapes for command inputs and outputs.

use anyhow::{Context, Result};
use planar::hex::{HexPoint, Hexagon};
use planar::plane::{Circle, Point, Segment};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointJson {
    pub x: f64,
    pub y: f64,
}

impl From<PointJson> for Point {
    fn from(p: PointJson) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for PointJson {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexJson {
    pub x: i32,
    pub y: i32,
}

impl From<HexJson> for HexPoint {
    fn from(h: HexJson) -> Self {
        HexPoint::new(h.x, h.y)
    }
}

impl From<HexPoint> for HexJson {
    fn from(h: HexPoint) -> Self {
        Self { x: h.x, y: h.y }
    }
}

#[derive(Debug, Serialize)]
pub struct CircleJson {
    pub center: PointJson,
    pub radius: f64,
}

impl From<Circle> for CircleJson {
    fn from(c: Circle) -> Self {
        Self {
            center: c.center().into(),
            radius: c.radius(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SegmentJson {
    pub begin: PointJson,
    pub end: PointJson,
    pub length: f64,
}

impl From<Segment> for SegmentJson {
    fn from(s: Segment) -> Self {
        Self {
            begin: s.begin.into(),
            end: s.end.into(),
            length: s.length(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HexagonJson {
    pub center: HexJson,
    pub radius: i32,
}

impl From<Hexagon> for HexagonJson {
    fn from(h: Hexagon) -> Self {
        Self {
            center: h.center().into(),
            radius: h.radius(),
        }
    }
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pts: Vec<PointJson> = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing points from {}", path.display()))?;
    Ok(pts.into_iter().map(Point::from).collect())
}

pub fn read_hexes(path: &Path) -> Result<Vec<HexPoint>> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let hexes: Vec<HexJson> = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing hexes from {}", path.display()))?;
    Ok(hexes.into_iter().map(HexPoint::from).collect())
}

/// Parse `X,Y` into a hex (clap value parser).
pub fn parse_hex(s: &str) -> std::result::Result<HexPoint, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(HexPoint::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_hex_accepts_pairs() {
        assert_eq!(parse_hex("2,5"), Ok(HexPoint::new(2, 5)));
        assert_eq!(parse_hex(" -1 , 3"), Ok(HexPoint::new(-1, 3)));
        assert!(parse_hex("2;5").is_err());
        assert!(parse_hex("a,5").is_err());
    }

    #[test]
    fn read_points_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        std::fs::write(&path, r#"[{"x": 0, "y": 0}, {"x": 4.5, "y": -1}]"#).unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(4.5, -1.0)]);
    }

    #[test]
    fn read_points_reports_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing points"));
    }

    #[test]
    fn circle_json_shape() {
        let c = Circle::new(Point::new(1.0, 2.0), 3.0).unwrap();
        let v = serde_json::to_value(CircleJson::from(c)).unwrap();
        assert_eq!(v["center"]["x"], 1.0);
        assert_eq!(v["radius"], 3.0);
    }
}
