// Copyright 2018 the Cropmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path representation.

use core::fmt::{self, Write};

use alloc::string::String;

use crate::{BezPath, PathEl};

impl BezPath {
    /// Convert the path to an SVG path string representation.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, using relative movement).
    ///
    /// # Examples
    ///
    /// ```
    /// use cropmask::{Rect, Shape};
    ///
    /// let path = Rect::new(0.0, 0.0, 10.0, 5.0).to_path(0.1);
    /// assert_eq!(path.to_svg(), "M0,0 L10,0 L10,5 L0,5 Z");
    /// ```
    pub fn to_svg(&self) -> String {
        let mut buffer = String::new();
        self.write_svg(&mut buffer).unwrap();
        buffer
    }

    /// Write the SVG representation of this path to the provided writer.
    pub fn write_svg<W: Write>(&self, mut writer: W) -> fmt::Result {
        for (i, el) in self.elements().iter().enumerate() {
            if i > 0 {
                writer.write_char(' ')?;
            }
            match *el {
                PathEl::MoveTo(p) => write!(writer, "M{},{}", p.x, p.y)?,
                PathEl::LineTo(p) => write!(writer, "L{},{}", p.x, p.y)?,
                PathEl::CurveTo(p1, p2, p3) => write!(
                    writer,
                    "C{},{} {},{} {},{}",
                    p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
                )?,
                PathEl::ClosePath => writer.write_char('Z')?,
            }
        }

        Ok(())
    }
}
