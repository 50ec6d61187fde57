// Copyright 2020 the Cropmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implements an axis-aligned ellipse shape.

use core::f64::consts::PI;
use core::iter;

use crate::arc::ArcAppendIter;
use crate::{Arc, PathEl, Point, Rect, Shape, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// An ellipse whose axes are aligned with the coordinate axes.
///
/// This is the outline used for the `Ellipse` and `Circle` mask kinds: the
/// ellipse inscribed in the mask bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    /// The center.
    pub center: Point,
    /// The horizontal and vertical radii.
    pub radii: Vec2,
}

impl Ellipse {
    /// A new ellipse with a given center and radii.
    #[inline]
    pub fn new(center: impl Into<Point>, radii: impl Into<Vec2>) -> Ellipse {
        Ellipse {
            center: center.into(),
            radii: radii.into(),
        }
    }

    /// Returns the largest ellipse that can be bounded by this [`Rect`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cropmask::{Ellipse, Point, Rect, Shape};
    ///
    /// let ellipse = Ellipse::from_rect(Rect::new(0.0, 0.0, 40.0, 20.0));
    /// assert_eq!(ellipse.center, Point::new(20.0, 10.0));
    /// assert!(ellipse.contains(Point::new(35.0, 10.0)));
    /// assert!(!ellipse.contains(Point::new(38.0, 2.0)));
    /// ```
    #[inline]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Ellipse {
            center: rect.center(),
            radii: Vec2::new(rect.width() * 0.5, rect.height() * 0.5),
        }
    }

    /// A circle with the given center and radius.
    #[inline]
    pub fn circle(center: impl Into<Point>, radius: f64) -> Ellipse {
        Ellipse::new(center, Vec2::splat(radius))
    }
}

impl Shape for Ellipse {
    type PathElementsIter<'iter> =
        iter::Chain<iter::Chain<iter::Once<PathEl>, ArcAppendIter>, iter::Once<PathEl>>;

    fn path_elements(&self, tolerance: f64) -> Self::PathElementsIter<'_> {
        Arc {
            center: self.center,
            radii: self.radii,
            start_angle: 0.0,
            sweep_angle: 2.0 * PI,
            x_rotation: 0.0,
        }
        .path_elements(tolerance)
        .chain(iter::once(PathEl::ClosePath))
    }

    #[inline]
    fn area(&self) -> f64 {
        PI * self.radii.x * self.radii.y
    }

    fn winding(&self, pt: Point) -> i32 {
        let Vec2 { x: rx, y: ry } = self.radii;
        if rx == 0.0 || ry == 0.0 {
            return 0;
        }
        let rel = pt - self.center;
        let nx = rel.x / rx;
        let ny = rel.y / ry;
        if nx * nx + ny * ny < 1.0 {
            if (rx > 0.0) ^ (ry > 0.0) {
                -1
            } else {
                1
            }
        } else {
            0
        }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        Rect::from_center_size(
            self.center,
            (2.0 * self.radii.x.abs(), 2.0 * self.radii.y.abs()),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{BezPath, Ellipse, Point, Rect, Shape};
    use core::f64::consts::PI;

    fn assert_approx_eq(x: f64, y: f64, eps: f64) {
        assert!((x - y).abs() < eps, "{x} != {y}");
    }

    #[test]
    fn area_sign() {
        let e = Ellipse::new((0.0, 0.0), (5.0, 2.0));
        let p: BezPath = e.to_path(1e-9);
        assert_approx_eq(e.area(), p.area(), 1e-6);
        assert_approx_eq(e.area(), 10.0 * PI, 1e-12);
        let pt = Point::new(3.0, 0.5);
        assert_eq!(e.winding(pt), 1);
        assert_eq!(p.winding(pt), 1);
    }

    #[test]
    fn inscribed_in_rect() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        let e = Ellipse::from_rect(rect);
        assert_eq!(e.bounding_box(), rect);
        let path = e.to_path(0.01);
        assert!(path.is_closed());
        let bbox = path.bounding_box();
        // Cubic arcs stay within the flattening tolerance of the ellipse.
        assert_approx_eq(bbox.x0, rect.x0, 0.02);
        assert_approx_eq(bbox.y0, rect.y0, 0.02);
        assert_approx_eq(bbox.x1, rect.x1, 0.02);
        assert_approx_eq(bbox.y1, rect.y1, 0.02);
    }

    #[test]
    fn circle_winding_matches_distance() {
        let c = Ellipse::circle((50.0, 50.0), 20.0);
        let path = c.to_path(1e-3);
        for (x, y) in [(50.0, 51.0), (65.0, 55.0), (69.0, 51.0), (71.0, 51.0), (35.0, 36.0)] {
            let pt = Point::new(x, y);
            let expected = i32::from(pt.distance(c.center) < 20.0);
            assert_eq!(c.winding(pt), expected, "{pt:?}");
            assert_eq!(path.winding(pt), expected, "{pt:?}");
        }
    }

    #[test]
    fn zero_radius() {
        let e = Ellipse::from_rect(Rect::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(e.area(), 0.0);
        assert_eq!(e.winding(Point::new(5.0, 5.0)), 0);
    }
}
