// Copyright 2018 the Cropmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crop-mask outlines for image croppers.
//!
//! The cropmask library generates the closed paths used to cut a shaped
//! hole into a dimming overlay drawn above an image being cropped. The
//! region inside the outline stays visible; the rest of the overlay is
//! darkened. Outlines are rectangles, squares, ellipses, circles, rounded
//! rectangles, diamonds, hearts, regular polygons, or arbitrary polylines
//! given in coordinates normalized to their bounds.
//!
//! Underneath is a small set of 2D geometry vocabulary types ([`Point`],
//! [`Vec2`], [`Rect`], [`Affine`]), a Bézier path type ([`BezPath`]) and a
//! [`Shape`] trait for area, winding and hit testing.
//!
//! # Examples
//!
//! Generating an outline:
//! ```
//! use cropmask::{generate_path, Rect, Shape, ShapeKind};
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let hexagon = generate_path(&ShapeKind::polygon(6), bounds);
//! assert_eq!(hexagon.points().count(), 7);
//! assert!(hexagon.is_closed());
//! assert!(hexagon.contains(bounds.center()));
//! ```
//!
//! Building the overlay for a renderer that supports the even-odd rule:
//! ```
//! use cropmask::{FillRule, MaskOverlay, Rect, ShapeKind};
//!
//! let frame = Rect::new(0.0, 0.0, 640.0, 480.0);
//! let shape: ShapeKind = "rounded-rect(0.1)".parse().unwrap();
//! let mut overlay = MaskOverlay::new(frame, shape).with_opacity(0.6);
//! overlay.adapt_to(Rect::new(120.0, 40.0, 520.0, 440.0));
//!
//! let svg = overlay.to_path().to_svg();
//! assert!(svg.starts_with("M0,0 L640,0"));
//! assert_eq!(overlay.fill_rule(), FillRule::EvenOdd);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate still uses the `alloc` crate
//! regardless.
//!
//! The `serde` and `schemars` features derive serialization and JSON
//! schemas for the value types, and `mint` adds conversions for [`Point`]
//! and [`Vec2`].
//!
//! Diagnostics go through the [`log`] facade; no logger is installed.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    clippy::bool_to_int_with_if
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("cropmask requires either the `std` or `libm` feature");

extern crate alloc;

mod affine;
mod arc;
mod bezpath;
pub mod common;
mod cubicbez;
mod ellipse;
mod line;
mod mask;
mod overlay;
mod param_curve;
mod point;
mod rect;
mod rounded_rect;
mod shape;
mod shape_kind;
mod size;
mod svg;
mod vec2;

pub use crate::affine::*;
pub use crate::arc::*;
pub use crate::bezpath::*;
pub use crate::cubicbez::*;
pub use crate::ellipse::*;
pub use crate::line::*;
pub use crate::mask::*;
pub use crate::overlay::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::rounded_rect::*;
pub use crate::shape::*;
pub use crate::shape_kind::*;
pub use crate::size::*;
pub use crate::vec2::*;
