// Copyright 2024 the Cropmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dimming overlay with a shaped hole.

use crate::{generate_path_with_tolerance, Affine, BezPath, FillRule, Point, Rect, Shape, ShapeKind};

/// Side length of the square a mask outline is first generated in, and the
/// size of the hole before it is adapted to a crop rect.
pub const MIN_OVERLAY_UNIT: f64 = 30.0;

/// Opacity of a freshly created overlay.
pub const DEFAULT_OPACITY: f64 = 0.5;

/// Arc accuracy for the outline template. The template is scaled up to the
/// crop rect, so it is generated much finer than [`DEFAULT_TOLERANCE`].
///
/// [`DEFAULT_TOLERANCE`]: crate::DEFAULT_TOLERANCE
const TEMPLATE_TOLERANCE: f64 = 1e-3;

const TEMPLATE_BOUNDS: Rect = Rect::new(0.0, 0.0, MIN_OVERLAY_UNIT, MIN_OVERLAY_UNIT);

/// A semi-transparent layer covering `frame`, with a hole in the shape of
/// a [`ShapeKind`].
///
/// The overlay is rendered as [`to_path`](Self::to_path) filled with the
/// even-odd rule: the frame rectangle is dimmed except where the hole
/// outline covers it.
///
/// # Examples
///
/// ```
/// use cropmask::{MaskOverlay, Point, Rect, ShapeKind};
///
/// let mut overlay = MaskOverlay::new(Rect::new(0.0, 0.0, 400.0, 300.0), ShapeKind::Circle);
/// overlay.adapt_to(Rect::new(100.0, 50.0, 300.0, 250.0));
///
/// assert!(!overlay.is_masked(Point::new(200.0, 160.0)));
/// assert!(overlay.is_masked(Point::new(105.0, 55.0)));
/// assert!(overlay.is_masked(Point::new(10.0, 10.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MaskOverlay {
    frame: Rect,
    shape: ShapeKind,
    hole: Rect,
    opacity: f64,
    template: BezPath,
}

impl MaskOverlay {
    /// Create an overlay over `frame` whose hole is a
    /// [`MIN_OVERLAY_UNIT`] square centered in the frame.
    pub fn new(frame: Rect, shape: ShapeKind) -> MaskOverlay {
        let frame = frame.abs();
        let template = generate_path_with_tolerance(&shape, TEMPLATE_BOUNDS, TEMPLATE_TOLERANCE);
        MaskOverlay {
            frame,
            shape,
            hole: Rect::from_center_size(frame.center(), (MIN_OVERLAY_UNIT, MIN_OVERLAY_UNIT)),
            opacity: DEFAULT_OPACITY,
            template,
        }
    }

    /// Set the opacity of the dimmed area, clamped to `[0, 1]`.
    ///
    /// A NaN opacity leaves the current value in place.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> MaskOverlay {
        self.set_opacity(opacity);
        self
    }

    /// Set the opacity of the dimmed area, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) {
        if !opacity.is_nan() {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    /// The opacity of the dimmed area.
    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// The rectangle covered by the overlay.
    #[inline]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The shape of the hole.
    #[inline]
    pub fn shape(&self) -> &ShapeKind {
        &self.shape
    }

    /// The rectangle the hole outline is drawn in.
    #[inline]
    pub fn hole(&self) -> Rect {
        self.hole
    }

    /// Move and scale the hole onto `crop`.
    pub fn adapt_to(&mut self, crop: Rect) {
        let crop = crop.abs();
        log::trace!("adapting {} mask from {:?} to {:?}", self.shape, self.hole, crop);
        self.hole = crop;
    }

    /// Change the shape of the hole, keeping its bounds.
    pub fn set_shape(&mut self, shape: ShapeKind) {
        if shape == self.shape {
            return;
        }
        log::debug!("mask shape changed from {} to {}", self.shape, shape);
        self.template = generate_path_with_tolerance(&shape, TEMPLATE_BOUNDS, TEMPLATE_TOLERANCE);
        self.shape = shape;
    }

    /// Change the rectangle covered by the overlay. The hole is unchanged.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame.abs();
    }

    /// The transform that maps the outline template onto the hole.
    #[inline]
    pub fn hole_transform(&self) -> Affine {
        Affine::map_rect(TEMPLATE_BOUNDS, self.hole)
    }

    /// The outline of the hole.
    pub fn hole_path(&self) -> BezPath {
        self.hole_transform() * &self.template
    }

    /// The full overlay path: the frame rectangle followed by the hole.
    ///
    /// This path is meant to be filled with [`fill_rule`](Self::fill_rule).
    pub fn to_path(&self) -> BezPath {
        let mut path = self.frame.to_path(0.0);
        path.extend(self.hole_path());
        path
    }

    /// The fill rule the overlay path is rendered with.
    #[inline]
    pub fn fill_rule(&self) -> FillRule {
        FillRule::EvenOdd
    }

    /// Whether `pt` is dimmed: inside the frame and outside the hole.
    pub fn is_masked(&self, pt: Point) -> bool {
        self.to_path().contains_with(pt, self.fill_rule())
    }
}
