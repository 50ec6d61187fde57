// Copyright 2024 the Cropmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generation of mask outlines.
//!
//! Every [`ShapeKind`] is turned into a closed [`BezPath`] inside a
//! bounding [`Rect`]. Shapes given in normalized coordinates are mapped
//! with [`Rect::point_at`], so `(0, 0)` is the origin of the bounds and
//! `(1, 1)` the opposite corner.

use core::f64::consts::PI;

use alloc::vec::Vec;

use crate::{Arc, BezPath, Ellipse, PathEl, Point, Rect, RoundedRect, Shape, ShapeKind};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The default accuracy used when approximating arcs with cubic Béziers.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

const DIAMOND: [Point; 4] = [
    Point::new(0.5, 0.0),
    Point::new(1.0, 0.5),
    Point::new(0.5, 1.0),
    Point::new(0.0, 0.5),
];

/// Generate the outline of `shape` inside `bounds`, approximating arcs to
/// within [`DEFAULT_TOLERANCE`].
///
/// Generation never fails: degenerate shapes produce an empty path.
/// Rectangles, ellipses and rounded rectangles use [`Rect::abs`] of
/// `bounds`, so their outlines do not depend on which corner comes first.
///
/// # Examples
///
/// ```
/// use cropmask::{generate_path, Point, Rect, ShapeKind};
///
/// let path = generate_path(&ShapeKind::Diamond, Rect::new(0.0, 0.0, 100.0, 50.0));
/// let points: Vec<Point> = path.points().collect();
/// assert_eq!(
///     points,
///     [(50.0, 0.0), (100.0, 25.0), (50.0, 50.0), (0.0, 25.0)].map(Point::from)
/// );
/// assert!(path.is_closed());
/// ```
pub fn generate_path(shape: &ShapeKind, bounds: Rect) -> BezPath {
    generate_path_with_tolerance(shape, bounds, DEFAULT_TOLERANCE)
}

/// Generate the outline of `shape` inside `bounds`, approximating arcs to
/// within `tolerance`.
///
/// A `tolerance` that is not positive and finite is replaced by
/// [`DEFAULT_TOLERANCE`]. Very small tolerances are limited by
/// [`MAX_ARC_SUBDIVISIONS`](crate::MAX_ARC_SUBDIVISIONS).
pub fn generate_path_with_tolerance(shape: &ShapeKind, bounds: Rect, tolerance: f64) -> BezPath {
    let tolerance = if tolerance > 0.0 && tolerance.is_finite() {
        tolerance
    } else {
        log::debug!("tolerance {tolerance} replaced by {DEFAULT_TOLERANCE}");
        DEFAULT_TOLERANCE
    };
    match shape {
        ShapeKind::Rectangle | ShapeKind::Square => bounds.abs().to_path(tolerance),
        ShapeKind::Ellipse | ShapeKind::Circle => Ellipse::from_rect(bounds).to_path(tolerance),
        ShapeKind::RoundedRect { radius_ratio } => {
            rounded_rect(bounds, *radius_ratio).to_path(tolerance)
        }
        ShapeKind::Diamond => polyline(bounds, &DIAMOND),
        ShapeKind::Heart => heart(bounds, tolerance),
        ShapeKind::Polygon {
            sides,
            rotation_degrees,
        } => {
            if *sides < 3 {
                log::debug!("polygon with {sides} sides has no outline");
                return BezPath::new();
            }
            polyline(bounds, &polygon_points(*sides, *rotation_degrees))
        }
        ShapeKind::ArbitraryPath { points } => polyline(bounds, points),
    }
}

fn rounded_rect(bounds: Rect, radius_ratio: f64) -> RoundedRect {
    let size = bounds.abs().size();
    RoundedRect::from_rect(bounds, radius_ratio * size.min_side())
}

/// The vertices of a regular polygon in normalized coordinates.
///
/// There are `sides + 1` of them: the first vertex is repeated at the end.
fn polygon_points(sides: u32, rotation_degrees: f64) -> Vec<Point> {
    let step = 2.0 * PI / f64::from(sides);
    let offset = (90.0 + rotation_degrees).to_radians();
    (0..=sides)
        .map(|i| {
            let angle = step * f64::from(i) - offset;
            Point::new(0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin())
        })
        .collect()
}

/// A closed polyline through normalized points.
fn polyline(bounds: Rect, points: &[Point]) -> BezPath {
    let Some((first, rest)) = points.split_first().filter(|_| points.len() >= 3) else {
        log::debug!("{} points are too few for a mask outline", points.len());
        return BezPath::new();
    };
    let mut path = BezPath::new();
    path.move_to(bounds.point_at(*first));
    for pt in rest {
        path.line_to(bounds.point_at(*pt));
    }
    path.close_path();
    path
}

/// Two circular lobes meeting at a dip, with a point at the bottom.
fn heart(bounds: Rect, tolerance: f64) -> BezPath {
    let radius = (0.4 * bounds.width()).hypot(0.3 * bounds.height()) * 0.5;
    let left = Arc::circular(
        bounds.point_at(Point::new(0.3, 0.35)),
        radius,
        135f64.to_radians(),
        PI,
    );
    let right = Arc::circular(
        bounds.point_at(Point::new(0.7, 0.35)),
        radius,
        225f64.to_radians(),
        PI,
    );

    let mut path = BezPath::new();
    path.extend(left.path_elements(tolerance));
    path.line_to(bounds.point_at(Point::new(0.5, 0.2)));
    path.line_to(right.start_point());
    path.extend(right.append_iter(tolerance));
    path.line_to(bounds.point_at(Point::new(0.5, 0.95)));
    path.close_path();
    path
}

/// A [`ShapeKind`] placed in its bounds, usable as a [`Shape`].
///
/// Area, winding and bounding box are exact for the rectangle, ellipse and
/// rounded rectangle kinds, and computed from the generated outline
/// otherwise.
///
/// # Examples
///
/// ```
/// use cropmask::{MaskShape, Point, Rect, Shape, ShapeKind};
///
/// let circle = MaskShape::new(ShapeKind::Circle, Rect::new(0.0, 0.0, 20.0, 20.0));
/// assert!(circle.contains(Point::new(10.0, 10.0)));
/// assert!(!circle.contains(Point::new(1.0, 1.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskShape {
    /// The outline kind.
    pub kind: ShapeKind,
    /// The rectangle the outline is drawn in.
    pub bounds: Rect,
}

impl MaskShape {
    /// Place `kind` in `bounds`.
    #[inline]
    pub fn new(kind: ShapeKind, bounds: Rect) -> MaskShape {
        MaskShape { kind, bounds }
    }

    fn outline(&self) -> BezPath {
        generate_path(&self.kind, self.bounds)
    }
}

impl Shape for MaskShape {
    type PathElementsIter<'iter> = alloc::vec::IntoIter<PathEl>;

    fn path_elements(&self, tolerance: f64) -> Self::PathElementsIter<'_> {
        generate_path_with_tolerance(&self.kind, self.bounds, tolerance).into_iter()
    }

    fn to_path(&self, tolerance: f64) -> BezPath {
        generate_path_with_tolerance(&self.kind, self.bounds, tolerance)
    }

    fn area(&self) -> f64 {
        match &self.kind {
            ShapeKind::Rectangle | ShapeKind::Square => self.bounds.abs().area(),
            ShapeKind::Ellipse | ShapeKind::Circle => Ellipse::from_rect(self.bounds).area(),
            ShapeKind::RoundedRect { radius_ratio } => {
                rounded_rect(self.bounds, *radius_ratio).area()
            }
            _ => self.outline().area(),
        }
    }

    fn winding(&self, pt: Point) -> i32 {
        match &self.kind {
            ShapeKind::Rectangle | ShapeKind::Square => self.bounds.abs().winding(pt),
            ShapeKind::Ellipse | ShapeKind::Circle => Ellipse::from_rect(self.bounds).winding(pt),
            ShapeKind::RoundedRect { radius_ratio } => {
                rounded_rect(self.bounds, *radius_ratio).winding(pt)
            }
            _ => self.outline().winding(pt),
        }
    }

    fn bounding_box(&self) -> Rect {
        match &self.kind {
            ShapeKind::Rectangle
            | ShapeKind::Square
            | ShapeKind::Ellipse
            | ShapeKind::Circle
            | ShapeKind::RoundedRect { .. } => self.bounds.abs(),
            _ => self.outline().bounding_box(),
        }
    }

    fn as_rect(&self) -> Option<Rect> {
        match self.kind {
            ShapeKind::Rectangle | ShapeKind::Square => Some(self.bounds.abs()),
            ShapeKind::RoundedRect { radius_ratio } if radius_ratio <= 0.0 => {
                Some(self.bounds.abs())
            }
            _ => None,
        }
    }
}
