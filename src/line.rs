// Copyright 2018 the Cropmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use core::ops::Range;

use arrayvec::ArrayVec;

use crate::{ParamCurve, ParamCurveArea, ParamCurveExtrema, Point, MAX_EXTREMA};

/// A single line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        (self.p1 - self.p0).hypot()
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn subsegment(&self, range: Range<f64>) -> Line {
        // Endpoints stay exact so neighbouring segments share vertices.
        let at = |t: f64| {
            if t == 0.0 {
                self.p0
            } else if t == 1.0 {
                self.p1
            } else {
                self.eval(t)
            }
        };
        Line {
            p0: at(range.start),
            p1: at(range.end),
        }
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p1
    }
}

impl ParamCurveArea for Line {
    #[inline]
    fn signed_area(&self) -> f64 {
        self.p0.to_vec2().cross(self.p1.to_vec2()) * 0.5
    }
}

impl ParamCurveExtrema for Line {
    #[inline]
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        ArrayVec::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Line, ParamCurve, ParamCurveExtrema, Point, Rect};

    #[test]
    fn line_eval() {
        let l = Line::new((0.0, 0.0), (4.0, 2.0));
        assert_eq!(l.eval(0.5), Point::new(2.0, 1.0));
        assert_eq!(l.subsegment(0.5..1.0), Line::new((2.0, 1.0), (4.0, 2.0)));
    }

    #[test]
    fn subsegment_keeps_endpoints() {
        let l = Line::new((0.0, 689.759_410_889_186_5), (0.0, 237.011_432_908_085_3));
        assert_eq!(l.subsegment(0.0..1.0), l);
        assert_eq!(l.subsegment(0.25..1.0).p1, l.p1);
        assert_eq!(l.subsegment(0.0..0.25).p0, l.p0);
    }

    #[test]
    fn line_bbox() {
        let l = Line::new((3.0, -1.0), (-2.0, 5.0));
        assert_eq!(l.bounding_box(), Rect::new(-2.0, -1.0, 3.0, 5.0));
        assert!((l.length() - 61.0f64.sqrt()).abs() < 1e-12);
    }
}
