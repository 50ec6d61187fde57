// Copyright 2024 the Cropmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties of generated mask outlines over many bounds.

use cropmask::{
    generate_path, Ellipse, FillRule, MaskOverlay, MaskShape, Point, Rect, Shape, ShapeKind,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x5eed_c409;
const CASES: usize = 200;

fn random_bounds(rng: &mut StdRng) -> Rect {
    let origin = Point::new(rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0));
    let size = (rng.random_range(1.0..800.0), rng.random_range(1.0..800.0));
    Rect::from_origin_size(origin, size)
}

fn all_kinds() -> Vec<ShapeKind> {
    vec![
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Ellipse,
        ShapeKind::Circle,
        ShapeKind::rounded_rect(0.1),
        ShapeKind::Diamond,
        ShapeKind::Heart,
        ShapeKind::polygon(5),
        ShapeKind::Polygon {
            sides: 6,
            rotation_degrees: 30.0,
        },
        ShapeKind::arbitrary_path([
            (0.5, 0.0),
            (0.6, 0.3),
            (1.0, 0.5),
            (0.6, 0.8),
            (0.5, 1.0),
            (0.5, 0.7),
            (0.0, 0.5),
        ]),
    ]
}

#[test]
fn rectangle_bounding_box_is_bounds() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..CASES {
        let bounds = random_bounds(&mut rng);
        let path = generate_path(&ShapeKind::Rectangle, bounds);
        assert_eq!(path.bounding_box(), bounds);
        assert!(path.is_closed());
    }
}

#[test]
fn hexagon_in_square() {
    let path = generate_path(&ShapeKind::polygon(6), Rect::new(0.0, 0.0, 100.0, 100.0));
    let points: Vec<Point> = path.points().collect();
    assert_eq!(points.len(), 7);
    for pt in points {
        let d = pt.distance(Point::new(50.0, 50.0));
        assert!((d - 50.0).abs() < 1e-9, "{pt:?} is {d} from the center");
    }
}

#[test]
fn degenerate_paths_have_no_segments() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    for kind in [
        ShapeKind::arbitrary_path(Vec::<Point>::new()),
        ShapeKind::arbitrary_path([(0.5, 0.5)]),
        ShapeKind::arbitrary_path([(0.0, 0.0), (1.0, 1.0)]),
        ShapeKind::polygon(2),
    ] {
        assert!(kind.is_degenerate());
        let path = generate_path(&kind, bounds);
        assert_eq!(path.segments().count(), 0, "{kind}");
        assert_eq!(path.to_svg(), "");
    }
}

#[test]
fn diamond_vertices_are_edge_midpoints() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..CASES {
        let bounds = random_bounds(&mut rng);
        let Rect { x0, y0, x1, y1 } = bounds;
        let center = bounds.center();
        let expected = [
            Point::new(center.x, y0),
            Point::new(x1, center.y),
            Point::new(center.x, y1),
            Point::new(x0, center.y),
        ];
        let points: Vec<Point> = generate_path(&ShapeKind::Diamond, bounds).points().collect();
        assert_eq!(points.len(), 4);
        for (got, want) in points.iter().zip(expected) {
            assert!(got.is_near(want, 1e-9), "{got:?} != {want:?}");
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..CASES / 10 {
        let bounds = random_bounds(&mut rng);
        for kind in all_kinds() {
            let a = generate_path(&kind, bounds);
            let b = generate_path(&kind, bounds);
            assert_eq!(a, b, "{kind}");
            assert_eq!(a.to_svg(), b.to_svg(), "{kind}");
        }
    }
}

#[test]
fn zero_radius_rounded_rect_is_rectangle() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..CASES {
        let bounds = random_bounds(&mut rng);
        let flipped = Rect::new(bounds.x1, bounds.y1, bounds.x0, bounds.y0);
        for bounds in [bounds, flipped] {
            assert_eq!(
                generate_path(&ShapeKind::rounded_rect(0.0), bounds),
                generate_path(&ShapeKind::Rectangle, bounds)
            );
        }
    }
}

#[test]
fn every_outline_is_closed_and_inside_its_bounds() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..CASES / 10 {
        let bounds = random_bounds(&mut rng);
        // The heart's lobes only fit in square bounds.
        let square = bounds.inscribed_with_aspect_ratio(1.0);
        for kind in all_kinds() {
            let path = generate_path(&kind, square);
            assert!(path.is_closed(), "{kind}");
            let bbox = path.bounding_box();
            let slack = square.inflate(0.1, 0.1);
            assert!(
                slack.union(bbox) == slack,
                "{kind}: {bbox:?} outside {square:?}"
            );
        }
    }
}

#[test]
fn heart_is_symmetric() {
    let bounds = Rect::new(20.0, 10.0, 220.0, 210.0);
    let path = generate_path(&ShapeKind::Heart, bounds);
    let axis = bounds.center().x;
    let points: Vec<Point> = path.points().collect();
    for pt in &points {
        let mirrored = Point::new(2.0 * axis - pt.x, pt.y);
        assert!(
            points.iter().any(|q| q.is_near(mirrored, 1e-9)),
            "no mirror image of {pt:?}"
        );
    }
    let bbox = path.bounding_box();
    assert!((bbox.x0 + bbox.x1 - 2.0 * axis).abs() < 1e-9);
}

#[test]
fn ellipse_area_and_containment() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..CASES / 10 {
        let bounds = random_bounds(&mut rng);
        let (rx, ry) = (bounds.width() / 2.0, bounds.height() / 2.0);
        let path = generate_path(&ShapeKind::Ellipse, bounds);
        let exact = std::f64::consts::PI * rx * ry;
        assert!((path.area() - exact).abs() / exact < 1e-3);

        let ellipse = Ellipse::from_rect(bounds);
        for _ in 0..20 {
            let pt = Point::new(
                rng.random_range(bounds.x0..bounds.x1),
                rng.random_range(bounds.y0..bounds.y1),
            );
            let rel = pt - bounds.center();
            let d = (rel.x / rx).hypot(rel.y / ry);
            if (d - 1.0).abs() < 0.02 {
                continue;
            }
            assert_eq!(path.contains(pt), d < 1.0, "{pt:?} in {bounds:?}");
            assert_eq!(ellipse.contains(pt), d < 1.0);
        }
    }
}

#[test]
fn mask_shape_agrees_with_outline() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let bounds = Rect::new(0.0, 0.0, 300.0, 300.0);
    for kind in all_kinds() {
        let shape = MaskShape::new(kind.clone(), bounds);
        let path = shape.to_path(1e-3);
        for _ in 0..50 {
            let pt = Point::new(rng.random_range(0.0..300.0), rng.random_range(0.0..300.0));
            if path.segments().any(|seg| {
                let bb = cropmask::ParamCurveExtrema::bounding_box(&seg);
                bb.inflate(0.5, 0.5).contains(pt)
            }) {
                // Too close to the outline to compare approximations.
                continue;
            }
            assert_eq!(
                shape.contains_with(pt, FillRule::NonZero),
                path.contains(pt),
                "{kind} at {pt:?}"
            );
        }
    }
}

#[test]
fn overlay_follows_crop() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let frame = Rect::new(0.0, 0.0, 1000.0, 800.0);
    for _ in 0..CASES / 10 {
        let x0 = rng.random_range(10.0..400.0);
        let y0 = rng.random_range(10.0..300.0);
        let crop = Rect::new(
            x0,
            y0,
            x0 + rng.random_range(50.0..600.0),
            y0 + rng.random_range(50.0..500.0),
        );
        let mut overlay = MaskOverlay::new(frame, ShapeKind::Rectangle);
        overlay.adapt_to(crop);

        let bbox = overlay.hole_path().bounding_box();
        assert!((bbox.x0 - crop.x0).abs() < 1e-6);
        assert!((bbox.y0 - crop.y0).abs() < 1e-6);
        assert!((bbox.x1 - crop.x1).abs() < 1e-6);
        assert!((bbox.y1 - crop.y1).abs() < 1e-6);

        assert!(!overlay.is_masked(crop.center()));
        assert!(overlay.is_masked(Point::new(crop.x0 - 5.0, crop.y0 - 5.0)));
        assert!(!overlay.is_masked(Point::new(frame.x1 + 5.0, crop.y0)));
    }
}

#[test]
fn shape_kind_text_round_trips() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..CASES {
        let kind = match rng.random_range(0..3) {
            0 => ShapeKind::rounded_rect(rng.random_range(0.0..=1.0)),
            1 => ShapeKind::Polygon {
                sides: rng.random_range(3..64),
                rotation_degrees: rng.random_range(-360.0..360.0),
            },
            _ => {
                let n = rng.random_range(0..12);
                ShapeKind::arbitrary_path(
                    (0..n).map(|_| (rng.random_range(0.0..=1.0), rng.random_range(0.0..=1.0))),
                )
            }
        };
        let text = kind.to_string();
        let parsed: ShapeKind = text.parse().expect("displayed kinds parse");
        assert_eq!(parsed, kind, "{text}");
    }
}
