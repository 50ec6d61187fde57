// Copyright 2019 the Cropmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ellipse arc.

use core::f64::consts::{FRAC_PI_2, PI};
use core::iter;

use crate::{PathEl, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The largest number of cubic segments used for a full turn of an arc.
pub const MAX_ARC_SUBDIVISIONS: f64 = 1024.0;

/// A single elliptical arc segment.
///
/// Angles are in radians and increase clockwise in a y-down coordinate
/// system, so a positive `sweep_angle` draws clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// The arc's centre point.
    pub center: Point,
    /// The arc's radii, where the vector's x-component is the radius in the
    /// positive x direction after applying `x_rotation`.
    pub radii: Vec2,
    /// The start angle in radians.
    pub start_angle: f64,
    /// The angle between the start and end of the arc, in radians.
    pub sweep_angle: f64,
    /// How much the arc is rotated, in radians.
    pub x_rotation: f64,
}

impl Arc {
    /// Create a circular arc.
    #[inline]
    pub fn circular(center: impl Into<Point>, radius: f64, start_angle: f64, sweep_angle: f64) -> Arc {
        Arc {
            center: center.into(),
            radii: Vec2::splat(radius),
            start_angle,
            sweep_angle,
            x_rotation: 0.0,
        }
    }

    /// The point where the arc starts.
    #[inline]
    pub fn start_point(&self) -> Point {
        self.center + sample_ellipse(self.radii, self.x_rotation, self.start_angle)
    }

    /// The point where the arc ends.
    #[inline]
    pub fn end_point(&self) -> Point {
        self.center
            + sample_ellipse(
                self.radii,
                self.x_rotation,
                self.start_angle + self.sweep_angle,
            )
    }

    /// Create an iterator generating Bézier path elements.
    ///
    /// The generated elements can be appended to an existing Bézier path
    /// whose current point is the arc's start point. The number of curves
    /// is capped at [`MAX_ARC_SUBDIVISIONS`] per full turn, so a tiny or zero
    /// `tolerance` stays bounded.
    pub fn append_iter(&self, tolerance: f64) -> ArcAppendIter {
        let sign = if self.sweep_angle < 0.0 { -1.0 } else { 1.0 };
        let scaled_err = self.radii.x.abs().max(self.radii.y.abs()) / tolerance;
        // Number of subdivisions per ellipse based on error tolerance.
        // Note: this may slightly underestimate the error for quadrants.
        let n_err = (1.1163 * scaled_err).powf(1.0 / 6.0).max(3.999_999);
        let turns = self.sweep_angle.abs() * (1.0 / (2.0 * PI));
        let n = (n_err.min(MAX_ARC_SUBDIVISIONS) * turns).ceil();
        let angle_step = self.sweep_angle / n;
        let n = if n.is_finite() { n as usize } else { 0 };
        let arm_len = (4.0 / 3.0) * (angle_step / 4.0).tan().abs() * sign;
        let angle0 = self.start_angle;
        let p0 = sample_ellipse(self.radii, self.x_rotation, angle0);

        ArcAppendIter {
            idx: 0,

            center: self.center,
            radii: self.radii,
            x_rotation: self.x_rotation,
            n,
            arm_len,
            angle_step,

            p0,
            angle0,
        }
    }

    /// Path elements for the arc as a standalone open subpath: a `MoveTo`
    /// to the start point followed by the curves.
    pub fn path_elements(&self, tolerance: f64) -> iter::Chain<iter::Once<PathEl>, ArcAppendIter> {
        iter::once(PathEl::MoveTo(self.start_point())).chain(self.append_iter(tolerance))
    }
}

#[doc(hidden)]
#[derive(Debug)]
pub struct ArcAppendIter {
    idx: usize,

    center: Point,
    radii: Vec2,
    x_rotation: f64,
    n: usize,
    arm_len: f64,
    angle_step: f64,

    p0: Vec2,
    angle0: f64,
}

impl Iterator for ArcAppendIter {
    type Item = PathEl;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.n {
            return None;
        }

        let angle1 = self.angle0 + self.angle_step;
        let p0 = self.p0;
        let p1 = p0
            + self.arm_len * sample_ellipse(self.radii, self.x_rotation, self.angle0 + FRAC_PI_2);
        let p3 = sample_ellipse(self.radii, self.x_rotation, angle1);
        let p2 = p3
            - self.arm_len * sample_ellipse(self.radii, self.x_rotation, angle1 + FRAC_PI_2);

        self.angle0 = angle1;
        self.p0 = p3;
        self.idx += 1;

        Some(PathEl::CurveTo(
            self.center + p1,
            self.center + p2,
            self.center + p3,
        ))
    }
}

/// Take the ellipse radii, how the radii are rotated, and the sweep angle,
/// and return a point on the ellipse.
fn sample_ellipse(radii: Vec2, x_rotation: f64, angle: f64) -> Vec2 {
    let u = radii.x * angle.cos();
    let v = radii.y * angle.sin();
    rotate_pt(Vec2::new(u, v), x_rotation)
}

/// Rotate `pt` about the origin by `angle` radians.
fn rotate_pt(pt: Vec2, angle: f64) -> Vec2 {
    if angle == 0.0 {
        return pt;
    }
    Vec2::new(
        pt.x * angle.cos() - pt.y * angle.sin(),
        pt.x * angle.sin() + pt.y * angle.cos(),
    )
}
