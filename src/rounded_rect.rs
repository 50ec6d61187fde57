// Copyright 2019 the Cropmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle with rounded corners.

use core::f64::consts::{FRAC_PI_2, PI};

use alloc::vec::Vec;

use crate::{Arc, PathEl, Point, Rect, Shape};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A rectangle with equally rounded corners.
///
/// The radius is clamped on construction so that it never exceeds half of
/// the shorter side, and negative radii become zero.
///
/// # Examples
///
/// ```
/// use cropmask::{Rect, RoundedRect};
///
/// let rr = RoundedRect::from_rect(Rect::new(0.0, 0.0, 100.0, 40.0), 50.0);
/// assert_eq!(rr.radius(), 20.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundedRect {
    /// Coordinates of the rectangle.
    rect: Rect,
    /// Radius of all four corners.
    radius: f64,
}

impl RoundedRect {
    /// A new rectangle from minimum and maximum coordinates and a corner
    /// radius.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64, radius: f64) -> RoundedRect {
        RoundedRect::from_rect(Rect::new(x0, y0, x1, y1), radius)
    }

    /// A new rounded rectangle from a [`Rect`] and a corner radius.
    pub fn from_rect(rect: Rect, radius: f64) -> RoundedRect {
        let rect = rect.abs();
        let max_radius = rect.width().min(rect.height()) * 0.5;
        let radius = if radius > 0.0 {
            radius.min(max_radius)
        } else {
            0.0
        };
        RoundedRect { rect, radius }
    }

    /// The underlying rectangle, with non-negative width and height.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The (clamped) corner radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    fn corner_arc(&self, center: (f64, f64), start_angle: f64) -> Arc {
        Arc::circular(center, self.radius, start_angle, FRAC_PI_2)
    }
}

impl Shape for RoundedRect {
    type PathElementsIter<'iter> = alloc::vec::IntoIter<PathEl>;

    /// The path starts at the left end of the top edge and runs clockwise
    /// (in a y-down space). Corners with zero radius contribute no curves,
    /// so a zero radius produces exactly the path of the plain rectangle.
    fn path_elements(&self, tolerance: f64) -> Self::PathElementsIter<'_> {
        let Rect { x0, y0, x1, y1 } = self.rect;
        let r = self.radius;
        let mut els = Vec::new();

        els.push(PathEl::MoveTo(Point::new(x0 + r, y0)));
        els.push(PathEl::LineTo(Point::new(x1 - r, y0)));
        if r > 0.0 {
            els.extend(self.corner_arc((x1 - r, y0 + r), -FRAC_PI_2).append_iter(tolerance));
        }
        els.push(PathEl::LineTo(Point::new(x1, y1 - r)));
        if r > 0.0 {
            els.extend(self.corner_arc((x1 - r, y1 - r), 0.0).append_iter(tolerance));
        }
        els.push(PathEl::LineTo(Point::new(x0 + r, y1)));
        if r > 0.0 {
            els.extend(self.corner_arc((x0 + r, y1 - r), FRAC_PI_2).append_iter(tolerance));
            els.push(PathEl::LineTo(Point::new(x0, y0 + r)));
            els.extend(self.corner_arc((x0 + r, y0 + r), PI).append_iter(tolerance));
        }
        els.push(PathEl::ClosePath);
        els.into_iter()
    }

    #[inline]
    fn area(&self) -> f64 {
        // A corner is a square with a quarter circle cut out.
        self.rect.area() - (4.0 - PI) * self.radius * self.radius
    }

    fn winding(&self, pt: Point) -> i32 {
        let center = self.center();
        let rel = pt - center;
        let half_w = self.rect.width() * 0.5;
        let half_h = self.rect.height() * 0.5;
        if rel.x.abs() >= half_w || rel.y.abs() >= half_h {
            return 0;
        }
        let r = self.radius;
        // Distance past the straight part of the edges, into a corner.
        let px = (rel.x.abs() - (half_w - r)).max(0.0);
        let py = (rel.y.abs() - (half_h - r)).max(0.0);
        if px * px + py * py <= r * r {
            1
        } else {
            0
        }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        self.rect
    }

    #[inline]
    fn as_rect(&self) -> Option<Rect> {
        (self.radius == 0.0).then_some(self.rect)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Rect, RoundedRect, Shape};

    #[test]
    fn area() {
        let epsilon = 1e-6;

        // Extremum: 0.0 radius corner -> rectangle
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let rounded_rect = RoundedRect::from_rect(rect, 0.0);
        assert!((rect.area() - rounded_rect.area()).abs() < epsilon);

        // Extremum: half-size radius corner -> circle
        let rounded_rect = RoundedRect::new(-50.0, -50.0, 50.0, 50.0, 50.0);
        assert!((rounded_rect.area() - core::f64::consts::PI * 2500.0).abs() < epsilon);

        let path = rounded_rect.to_path(1e-9);
        assert!((path.area() - rounded_rect.area()).abs() < 1e-3);
    }

    #[test]
    fn radius_clamped() {
        let rr = RoundedRect::from_rect(Rect::new(0.0, 0.0, 30.0, 10.0), 100.0);
        assert_eq!(rr.radius(), 5.0);
        let rr = RoundedRect::from_rect(Rect::new(0.0, 0.0, 30.0, 10.0), -2.0);
        assert_eq!(rr.radius(), 0.0);
    }

    #[test]
    fn zero_radius_is_rect_path() {
        let rect = Rect::new(3.0, 4.0, 53.0, 24.0);
        let rr = RoundedRect::from_rect(rect, 0.0);
        assert_eq!(rr.to_path(0.1), rect.to_path(0.1));
        assert_eq!(rr.as_rect(), Some(rect));
    }

    #[test]
    fn winding() {
        let rect = RoundedRect::new(-5.0, -5.0, 10.0, 20.0, 5.0);
        assert_eq!(rect.winding(Point::new(0.0, 0.0)), 1);
        assert_eq!(rect.winding(Point::new(-5.0, 0.0)), 0); // left edge
        assert_eq!(rect.winding(Point::new(0.0, 20.0)), 0); // bottom edge
        assert_eq!(rect.winding(Point::new(-10.0, 0.0)), 0);
        assert_eq!(rect.winding(Point::new(-4.5, -4.5)), 0); // cut-off corner
        assert_eq!(rect.winding(Point::new(-2.0, -2.0)), 1);

        let path = rect.to_path(1e-6);
        assert_eq!(path.winding(Point::new(-4.5, -4.5)), 0);
        assert_eq!(path.winding(Point::new(2.5, 7.5)), 1);
    }
}
