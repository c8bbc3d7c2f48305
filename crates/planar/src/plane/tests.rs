use super::rand::{draw_points, CloudShape, PointCloudCfg, PointCount, ReplayToken};
use super::*;
use crate::error::GeomError;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// O(n³) reference: smallest candidate among pair and triple circles that covers all points.
fn brute_force_mec(points: &[Point]) -> Circle {
    let covers = |c: &Circle| points.iter().all(|p| c.contains_eps(p, 1e-9 * c.radius()));
    let mut best: Option<Circle> = None;
    let mut consider = |c: Circle| {
        if covers(&c) && best.as_ref().map_or(true, |b| c.radius() < b.radius()) {
            best = Some(c);
        }
    };
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            consider(circle_by_diameter(Segment::new(points[i], points[j])));
            for k in j + 1..points.len() {
                if let Ok(c) = circle_by_three_points(points[i], points[j], points[k]) {
                    consider(c);
                }
            }
        }
    }
    best.unwrap_or_else(|| Circle::degenerate(points[0]))
}

#[test]
fn point_distance_basics() {
    let a = pt(1.0, 2.0);
    let b = pt(4.0, 6.0);
    assert_eq!(a.distance(&a), 0.0);
    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(b.distance(&a), a.distance(&b));
    assert_eq!(a.midpoint(&b), pt(2.5, 4.0));
}

#[test]
fn circle_distance_and_containment() {
    let c1 = Circle::new(pt(0.0, 0.0), 1.0).unwrap();
    let c2 = Circle::new(pt(5.0, 0.0), 1.0).unwrap();
    let c3 = Circle::new(pt(1.5, 0.0), 1.0).unwrap();
    assert!((c1.distance(&c2) - 3.0).abs() < 1e-12);
    assert_eq!(c1.distance(&c3), 0.0);

    // boundary is inclusive
    let c = Circle::new(pt(0.0, 0.0), 5.0).unwrap();
    assert!(c.contains(&pt(3.0, 4.0)));
    assert!(!c.contains(&pt(3.0, 4.1)));
    assert!(c.contains_eps(&pt(3.0, 4.1), 0.1));
    assert!(!c.contains_eps(&pt(3.0, 4.0), -1e-9));
}

#[test]
fn circle_rejects_bad_radius_or_center() {
    assert_eq!(
        Circle::new(pt(0.0, 0.0), -1.0),
        Err(GeomError::NegativeRadius(-1.0))
    );
    assert!(Circle::new(pt(0.0, 0.0), f64::NAN).is_err());
    assert_eq!(Circle::new(pt(1.0, 1.0), 0.0).unwrap().radius(), 0.0);

    assert_eq!(Circle::new(pt(0.0, 0.0), f64::INFINITY), Err(GeomError::NonFinite));
    assert_eq!(Circle::new(pt(f64::NAN, 0.0), 1.0), Err(GeomError::NonFinite));
    assert_eq!(Circle::new(pt(0.0, f64::NEG_INFINITY), 1.0), Err(GeomError::NonFinite));
}

#[test]
fn segment_equality_ignores_direction() {
    let a = pt(0.0, 0.0);
    let b = pt(1.0, 2.0);
    assert_eq!(Segment::new(a, b), Segment::new(b, a));
    assert_ne!(Segment::new(a, b), Segment::new(a, pt(1.0, 2.5)));
}

#[test]
fn line_angle_range_is_enforced() {
    assert!(matches!(
        Line::new(pt(0.0, 0.0), PI),
        Err(GeomError::InvalidAngle(_))
    ));
    assert!(Line::new(pt(0.0, 0.0), -0.1).is_err());
    let l = Line::new(pt(1.0, 2.0), 0.0).unwrap();
    assert_eq!(l.b(), 2.0);
    assert!(l.residual(&pt(-7.0, 2.0)).abs() < 1e-12);
}

#[test]
fn line_by_points_normalizes_angle() {
    // negative slope folds into (π/2, π)
    let l = line_by_points(pt(0.0, 0.0), pt(1.0, -1.0)).unwrap();
    assert!((l.angle() - 3.0 * FRAC_PI_4).abs() < 1e-12);
    // direction does not matter
    let r = line_by_points(pt(1.0, -1.0), pt(0.0, 0.0)).unwrap();
    assert!((r.angle() - l.angle()).abs() < 1e-12);
    // horizontal right-to-left gives angle 0, not π
    let h = line_by_points(pt(3.0, 1.0), pt(-2.0, 1.0)).unwrap();
    assert_eq!(h.angle(), 0.0);
    // vertical pairs are fine
    let v = line_by_points(pt(1.0, 0.0), pt(1.0, 5.0)).unwrap();
    assert!((v.angle() - FRAC_PI_2).abs() < 1e-12);
    assert!(v.residual(&pt(1.0, -3.0)).abs() < 1e-12);
    assert_eq!(
        line_by_points(pt(1.0, 1.0), pt(1.0, 1.0)),
        Err(GeomError::CoincidentPoints)
    );
    let s = line_by_segment(Segment::new(pt(0.0, 1.0), pt(2.0, 3.0))).unwrap();
    assert!((s.angle() - FRAC_PI_4).abs() < 1e-12);
    assert!(s.residual(&pt(5.0, 6.0)).abs() < 1e-12);
}

#[test]
fn cross_point_solves_and_reports_parallel() {
    let horiz = Line::new(pt(0.0, 1.0), 0.0).unwrap();
    let vert = Line::new(pt(2.0, 0.0), FRAC_PI_2).unwrap();
    for (l1, l2) in [(horiz, vert), (vert, horiz)] {
        let p = l1.cross_point(&l2).unwrap();
        assert!((p.x - 2.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
    }

    let d1 = line_by_points(pt(0.0, 0.0), pt(1.0, 1.0)).unwrap();
    let d2 = line_by_points(pt(0.0, 2.0), pt(2.0, 0.0)).unwrap();
    let p = d1.cross_point(&d2).unwrap();
    assert!((p.x - 1.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);

    let shifted = Line::new(pt(0.0, 5.0), 0.0).unwrap();
    assert_eq!(horiz.cross_point(&shifted), Err(GeomError::ParallelLines));
}

#[test]
fn cross_point_near_parallel_threshold() {
    let base = Line::new(pt(0.0, 0.0), 0.0).unwrap();
    // sin(1e-6) is far above eps_det: a crossing far out, still on both lines
    let tilted = Line::new(pt(0.0, 1.0), 1e-6).unwrap();
    let p = base.cross_point(&tilted).unwrap();
    assert!(base.residual(&p).abs() < 1e-9);
    assert!(tilted.residual(&p).abs() < 1e-9);
    assert!((p.x + 1e6).abs() < 1.0);

    // below the tolerance the pair counts as parallel
    let almost = Line::new(pt(0.0, 1.0), 1e-13).unwrap();
    assert_eq!(base.cross_point(&almost), Err(GeomError::ParallelLines));
    assert!(base.cross_point_eps(&almost, 1e-14).is_ok());
}

#[test]
fn bisector_is_equidistant() {
    let a = pt(-1.0, 2.0);
    let b = pt(3.0, 5.0);
    let l = bisector_by_points(a, b).unwrap();
    assert!(l.residual(&a.midpoint(&b)).abs() < 1e-12);
    // walk along the bisector direction and check equidistance
    let m = a.midpoint(&b);
    let q = pt(m.x + 10.0 * l.angle().cos(), m.y + 10.0 * l.angle().sin());
    assert!((q.distance(&a) - q.distance(&b)).abs() < 1e-9);
    // vertical segment -> horizontal bisector
    let h = bisector_by_points(pt(0.0, 0.0), pt(0.0, 4.0)).unwrap();
    assert!(h.angle().abs() < 1e-12);
    assert!((h.b() - 2.0).abs() < 1e-12);
    assert!(bisector_by_points(a, a).is_err());
}

#[test]
fn triangle_area_and_containment() {
    let t = Triangle::new(pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 3.0)).unwrap();
    assert_eq!(t.half_perimeter(), 6.0);
    assert_eq!(t.area(), 6.0);
    assert!(t.contains(&pt(0.0, 0.0)));
    assert!(t.contains_eps(&pt(1.0, 1.0), 1e-9));
    assert!(!t.contains(&pt(5.0, 5.0)));
    assert!(!t.contains(&pt(-0.5, 1.0)));

    let flat = Triangle::new(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)).unwrap();
    assert_eq!(flat.area(), 0.0);

    assert_eq!(
        Triangle::new(pt(0.0, 0.0), pt(0.0, 0.0), pt(1.0, 1.0)),
        Err(GeomError::CoincidentPoints)
    );
    let u = Triangle::new(pt(0.0, 3.0), pt(0.0, 0.0), pt(4.0, 0.0)).unwrap();
    assert_eq!(t, u);
}

#[test]
fn diameter_picks_farthest_pair() {
    let s = diameter(&[pt(0.0, 0.0), pt(3.0, 0.0), pt(1.0, 1.0)]).unwrap();
    assert_eq!(s, Segment::new(pt(0.0, 0.0), pt(3.0, 0.0)));
    // tie: the first maximal pair wins
    let s = diameter(&[pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0)]).unwrap();
    assert_eq!(s, Segment::new(pt(0.0, 0.0), pt(1.0, 1.0)));
    assert_eq!(
        diameter(&[pt(0.0, 0.0)]),
        Err(GeomError::InsufficientInput { needed: 2, got: 1 })
    );
}

#[test]
fn circle_by_diameter_contains_endpoints() {
    let a = pt(1.0, 1.0);
    let b = pt(5.0, 4.0);
    let c = circle_by_diameter(Segment::new(a, b));
    assert_eq!(c.center(), pt(3.0, 2.5));
    assert_eq!(c.radius(), a.distance(&b) / 2.0);
    assert!(c.contains(&a) && c.contains(&b));
}

#[test]
fn circle_by_three_points_passes_through_all() {
    let pts = [pt(0.0, 0.0), pt(2.0, 0.0), pt(1.0, 1.0)];
    let c = circle_by_three_points(pts[0], pts[1], pts[2]).unwrap();
    for p in &pts {
        assert!((c.center().distance(p) - c.radius()).abs() < 1e-9);
    }
    assert!((c.center().x - 1.0).abs() < 1e-9 && c.center().y.abs() < 1e-9);

    // a vertical chord gives a horizontal bisector
    let pts = [pt(0.0, 0.0), pt(0.0, 2.0), pt(3.0, 1.0)];
    let c = circle_by_three_points(pts[0], pts[1], pts[2]).unwrap();
    for p in &pts {
        assert!((c.center().distance(p) - c.radius()).abs() < 1e-9);
    }

    assert_eq!(
        circle_by_three_points(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)),
        Err(GeomError::CollinearPoints)
    );
    assert_eq!(
        circle_by_three_points(pt(0.0, 0.0), pt(0.0, 0.0), pt(2.0, 2.0)),
        Err(GeomError::CoincidentPoints)
    );
}

#[test]
fn nearest_circle_pair() {
    let c = |x: f64, y: f64, r: f64| Circle::new(pt(x, y), r).unwrap();
    let circles = [c(0.0, 0.0, 1.0), c(10.0, 0.0, 1.0), c(4.0, 0.0, 1.0), c(0.0, 20.0, 3.0)];
    let (a, b) = find_nearest_circle_pair(&circles).unwrap();
    assert_eq!((a, b), (circles[0], circles[2]));
    assert!(matches!(
        find_nearest_circle_pair(&circles[..1]),
        Err(GeomError::InsufficientInput { got: 1, .. })
    ));
}

#[test]
fn enclosing_small_cases() {
    assert_eq!(min_containing_circle(&[]), Err(GeomError::EmptyInput));

    let p = pt(3.0, -2.0);
    let c = min_containing_circle(&[p]).unwrap();
    assert_eq!(c.center(), p);
    assert_eq!(c.radius(), 0.0);

    let a = pt(-1.0, 0.5);
    let b = pt(2.0, 4.5);
    let c = min_containing_circle(&[a, b]).unwrap();
    let d = circle_by_diameter(Segment::new(a, b));
    assert_eq!(c.center(), d.center());
    // only a rounding step apart, and only when the midpoint rounds off-center
    assert!(c.radius() >= d.radius());
    assert!(c.radius() - d.radius() <= 4.0 * f64::EPSILON * d.radius());
    assert!(c.contains(&a) && c.contains(&b));
}

#[test]
fn enclosing_is_scale_free() {
    let cross = [pt(-1.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), pt(0.0, -1.0)];
    for scale in [1e-12, 1e-10, 1e-3, 1.0, 1e4, 1e8] {
        let pts = cross.map(|p| pt(p.x * scale, p.y * scale));
        let c = min_containing_circle(&pts).unwrap();
        assert!(c.radius() <= scale * (1.0 + 1e-6), "scale {scale}: {c:?}");
        assert!(c.center().distance(&pt(0.0, 0.0)) <= 1e-6 * scale, "scale {scale}");
        assert!(pts.iter().all(|p| c.contains(p)));
    }

    // a tiny triangle far from the origin
    let pts = [pt(0.0, 0.0), pt(4.0, 0.0), pt(2.0, 3.0)].map(|p| pt(p.x * 1e-11 + 5.0e-9, p.y * 1e-11));
    let c = min_containing_circle(&pts).unwrap();
    assert!((c.radius() - 13.0 / 6.0 * 1e-11).abs() < 1e-6 * 1e-11);
}

#[test]
fn enclosing_with_loose_tolerance() {
    let cfg = GeomCfg {
        eps_feas: 1e-6,
        ..GeomCfg::default()
    };
    for index in 0..10 {
        let cloud = PointCloudCfg {
            count: PointCount::Uniform { min: 3, max: 12 },
            shape: CloudShape::Disk,
            half_extent: 1e-7,
            center: pt(0.0, 0.0),
        };
        let pts = draw_points(cloud, ReplayToken::new(9, index));
        let c = min_containing_circle_with(&pts, cfg).unwrap();
        let oracle = brute_force_mec(&pts);
        assert!(pts.iter().all(|p| c.contains(p)));
        assert!(c.radius() <= oracle.radius() * (1.0 + 1e-4), "index {index}");
    }
}

#[test]
fn enclosing_acute_and_obtuse_triangles() {
    let pts = [pt(0.0, 0.0), pt(4.0, 0.0), pt(2.0, 3.0)];
    let c = min_containing_circle(&pts).unwrap();
    assert!(pts.iter().all(|p| c.contains(p)));
    // acute: circumcircle, center (2, 5/6)
    assert!((c.radius() - 13.0 / 6.0).abs() < 1e-9);
    assert!((c.center().y - 5.0 / 6.0).abs() < 1e-9);

    // obtuse: the long side is a diameter
    let pts = [pt(0.0, 0.0), pt(4.0, 0.0), pt(2.0, 0.5)];
    let c = min_containing_circle(&pts).unwrap();
    assert!((c.radius() - 2.0).abs() < 1e-9);
    assert!(c.center().distance(&pt(2.0, 0.0)) < 1e-9);
}

#[test]
fn enclosing_degenerate_inputs() {
    let line: Vec<Point> = (0..4).map(|i| pt(i as f64, 0.0)).collect();
    let c = min_containing_circle(&line).unwrap();
    assert!((c.radius() - 1.5).abs() < 1e-12);
    assert!(line.iter().all(|p| c.contains(p)));

    let same = vec![pt(1.0, 1.0); 5];
    let c = min_containing_circle(&same).unwrap();
    assert_eq!(c.radius(), 0.0);

    // duplicates of the boundary points
    let dup = [pt(0.0, 0.0), pt(2.0, 0.0), pt(0.0, 0.0), pt(2.0, 0.0), pt(1.0, 0.2)];
    let c = min_containing_circle(&dup).unwrap();
    assert!((c.radius() - 1.0).abs() < 1e-9);
}

#[test]
fn enclosing_beats_farthest_pair_heuristic() {
    // Equilateral-ish triple plus a point near the far side: the farthest pair
    // does not lie on the optimal boundary.
    let pts = [pt(0.0, 0.0), pt(10.0, 0.0), pt(5.0, 8.0), pt(5.0, -1.0), pt(9.0, 2.0)];
    let c = min_containing_circle(&pts).unwrap();
    let oracle = brute_force_mec(&pts);
    assert!(pts.iter().all(|p| c.contains(p)));
    assert!(c.radius() <= oracle.radius() + 1e-9);
}

#[test]
fn enclosing_is_seed_independent() {
    let pts = draw_points(PointCloudCfg::default(), ReplayToken::new(7, 0));
    let r0 = min_containing_circle(&pts).unwrap().radius();
    for seed in 1..5 {
        let cfg = GeomCfg {
            shuffle_seed: seed,
            ..GeomCfg::default()
        };
        let r = min_containing_circle_with(&pts, cfg).unwrap().radius();
        assert!((r - r0).abs() < 1e-9);
    }
}

#[test]
fn enclosing_matches_brute_force_on_clouds() {
    for index in 0..20 {
        let cfg = PointCloudCfg {
            count: PointCount::Uniform { min: 3, max: 12 },
            shape: if index % 2 == 0 { CloudShape::Square } else { CloudShape::Disk },
            half_extent: 5.0,
            center: pt(1.0, -2.0),
        };
        let pts = draw_points(cfg, ReplayToken::new(42, index));
        let c = min_containing_circle(&pts).unwrap();
        let oracle = brute_force_mec(&pts);
        assert!(pts.iter().all(|p| c.contains(p)));
        assert!((c.radius() - oracle.radius()).abs() < 1e-6, "index {index}");
    }
}

#[test]
fn point_clouds_are_reproducible() {
    let cfg = PointCloudCfg {
        count: PointCount::Fixed(16),
        shape: CloudShape::Ring,
        half_extent: 2.0,
        center: pt(0.0, 0.0),
    };
    let a = draw_points(cfg, ReplayToken::new(1, 3));
    let b = draw_points(cfg, ReplayToken::new(1, 3));
    let c = draw_points(cfg, ReplayToken::new(1, 4));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 16);
    assert!(a.iter().all(|p| (p.distance(&cfg.center) - 2.0).abs() < 1e-12));
    // ring points lie on a circle of radius 2, so the enclosing radius cannot exceed it
    let mec = min_containing_circle(&a).unwrap();
    assert!(mec.radius() <= 2.0 + 1e-9);
}

fn arb_point() -> impl Strategy<Value = Point> {
    (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| Point::new(x, y))
}

/// Unit-box points blown up or shrunk by `10^k`, `k` in `-12..=8`, around a shifted origin.
fn arb_scaled_cloud(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Point>> {
    let unit = (-1.0f64..1.0, -1.0f64..1.0);
    (prop::collection::vec(unit, len), -12i32..=8, -3.0f64..3.0).prop_map(|(raw, k, shift)| {
        let scale = 10f64.powi(k);
        raw.into_iter()
            .map(|(x, y)| Point::new((x + shift) * scale, (y - shift) * scale))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_distance_symmetric(p in arb_point(), q in arb_point()) {
        prop_assert_eq!(p.distance(&p), 0.0);
        prop_assert_eq!(p.distance(&q), q.distance(&p));
    }

    #[test]
    fn prop_enclosing_covers_every_point(pts in prop::collection::vec(arb_point(), 1..40)) {
        let c = min_containing_circle(&pts).unwrap();
        for p in &pts {
            prop_assert!(c.contains(p));
        }
    }

    #[test]
    fn prop_enclosing_covers_scaled_clouds(pts in arb_scaled_cloud(1..40)) {
        let c = min_containing_circle(&pts).unwrap();
        for p in &pts {
            prop_assert!(c.contains(p));
        }
    }

    #[test]
    fn prop_enclosing_is_minimal(pts in prop::collection::vec(arb_point(), 2..9)) {
        let c = min_containing_circle(&pts).unwrap();
        let oracle = brute_force_mec(&pts);
        prop_assert!(c.radius() <= oracle.radius() * (1.0 + 1e-6));
    }

    #[test]
    fn prop_enclosing_is_minimal_at_any_scale(pts in arb_scaled_cloud(2..9)) {
        let c = min_containing_circle(&pts).unwrap();
        let oracle = brute_force_mec(&pts);
        prop_assert!(
            c.radius() <= oracle.radius() * (1.0 + 1e-6),
            "radius {} vs {}", c.radius(), oracle.radius()
        );
    }
}
