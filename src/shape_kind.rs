// Copyright 2024 the Cropmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The kinds of mask outline, and their textual form.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};
use smallvec::SmallVec;

use crate::{Point, Rect};

/// The outline of the visible region of a crop mask.
///
/// Every kind is drawn inside a bounding [`Rect`]; see
/// [`generate_path`](crate::generate_path).
///
/// Kinds also have a compact text form, used for configuration:
///
/// ```
/// use cropmask::ShapeKind;
///
/// let kind: ShapeKind = "Polygon(6, 30)".parse().unwrap();
/// assert_eq!(kind, ShapeKind::Polygon { sides: 6, rotation_degrees: 30.0 });
/// assert_eq!(kind.to_string(), "polygon(6, 30)");
///
/// let diamond: ShapeKind = "path(0.5 0, 1 0.5, 0.5 1, 0 0.5)".parse().unwrap();
/// assert_eq!(diamond.to_string(), "path(0.5 0, 1 0.5, 0.5 1, 0 0.5)");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// The bounds themselves.
    Rectangle,
    /// The bounds themselves; hosts should keep square bounds.
    Square,
    /// The ellipse inscribed in the bounds.
    Ellipse,
    /// The ellipse inscribed in the bounds; hosts should keep square bounds.
    Circle,
    /// A rectangle with rounded corners.
    RoundedRect {
        /// Corner radius as a fraction of the shorter side of the bounds.
        radius_ratio: f64,
    },
    /// A rhombus through the midpoints of the bounds' edges.
    Diamond,
    /// A heart made of two circular lobes and a bottom point.
    Heart,
    /// A regular polygon inscribed in the ellipse of the bounds.
    Polygon {
        /// Number of sides.
        sides: u32,
        /// Rotation, in degrees, counterclockwise in a y-down space. With
        /// no rotation the first vertex is at the top center.
        rotation_degrees: f64,
    },
    /// A closed polyline through normalized points.
    ArbitraryPath {
        /// Vertices, with both coordinates in `[0, 1]` relative to the
        /// bounds.
        points: SmallVec<[Point; 8]>,
    },
}

impl ShapeKind {
    /// A rounded rectangle with the given corner radius ratio.
    #[inline]
    pub fn rounded_rect(radius_ratio: f64) -> ShapeKind {
        ShapeKind::RoundedRect { radius_ratio }
    }

    /// An unrotated regular polygon.
    #[inline]
    pub fn polygon(sides: u32) -> ShapeKind {
        ShapeKind::Polygon {
            sides,
            rotation_degrees: 0.0,
        }
    }

    /// A closed path through the given normalized points.
    pub fn arbitrary_path<I, P>(points: I) -> ShapeKind
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        ShapeKind::ArbitraryPath {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    /// The width over height ratio the bounds must keep for this kind, if
    /// any.
    #[inline]
    pub fn fixed_aspect_ratio(&self) -> Option<f64> {
        match self {
            ShapeKind::Square | ShapeKind::Circle => Some(1.0),
            _ => None,
        }
    }

    /// The largest rect centered in `rect` that honors
    /// [`fixed_aspect_ratio`](Self::fixed_aspect_ratio).
    ///
    /// ```
    /// use cropmask::{Rect, ShapeKind};
    ///
    /// let crop = Rect::new(0.0, 0.0, 300.0, 200.0);
    /// assert_eq!(ShapeKind::Circle.fit_bounds(crop), Rect::new(50.0, 0.0, 250.0, 200.0));
    /// assert_eq!(ShapeKind::Heart.fit_bounds(crop), crop);
    /// ```
    pub fn fit_bounds(&self, rect: Rect) -> Rect {
        match self.fixed_aspect_ratio() {
            Some(ratio) => rect.inscribed_with_aspect_ratio(ratio),
            None => rect,
        }
    }

    /// Check that every value lies in the range the text form accepts.
    ///
    /// Parsing only yields kinds that pass this check, and the text of a
    /// kind that passes parses back to an equal kind. Kinds built directly
    /// may fail it: `rounded-rect(2)` displays, but does not parse.
    ///
    /// ```
    /// use cropmask::{ShapeKind, ShapeParseError};
    ///
    /// assert_eq!(ShapeKind::polygon(6).validate(), Ok(()));
    /// assert_eq!(
    ///     ShapeKind::rounded_rect(2.0).validate(),
    ///     Err(ShapeParseError::OutOfRange("radius ratio"))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ShapeParseError> {
        let out_of_range = match self {
            ShapeKind::RoundedRect { radius_ratio } if !(0.0..=1.0).contains(radius_ratio) => {
                "radius ratio"
            }
            ShapeKind::Polygon { sides, .. } if *sides < 3 => "sides",
            ShapeKind::Polygon {
                rotation_degrees, ..
            } if !rotation_degrees.is_finite() => "rotation",
            ShapeKind::ArbitraryPath { points } if !points.iter().all(|p| p.is_normalized()) => {
                "path coordinate"
            }
            _ => return Ok(()),
        };
        Err(ShapeParseError::OutOfRange(out_of_range))
    }

    /// Whether this kind produces an empty path regardless of bounds.
    pub fn is_degenerate(&self) -> bool {
        match self {
            ShapeKind::Polygon { sides, .. } => *sides < 3,
            ShapeKind::ArbitraryPath { points } => points.len() < 3,
            _ => false,
        }
    }
}

/// The text form read by [`FromStr`]. It round-trips for kinds that pass
/// [`ShapeKind::validate`].
impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle => f.write_str("rect"),
            ShapeKind::Square => f.write_str("square"),
            ShapeKind::Ellipse => f.write_str("ellipse"),
            ShapeKind::Circle => f.write_str("circle"),
            ShapeKind::Diamond => f.write_str("diamond"),
            ShapeKind::Heart => f.write_str("heart"),
            ShapeKind::RoundedRect { radius_ratio } => write!(f, "rounded-rect({radius_ratio})"),
            ShapeKind::Polygon {
                sides,
                rotation_degrees,
            } => {
                if *rotation_degrees == 0.0 {
                    write!(f, "polygon({sides})")
                } else {
                    write!(f, "polygon({sides}, {rotation_degrees})")
                }
            }
            ShapeKind::ArbitraryPath { points } => {
                f.write_str("path(")?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} {}", p.x, p.y)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// An error which can be returned when parsing a [`ShapeKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeParseError {
    /// The name does not denote any shape kind.
    UnknownKind(String),
    /// Unbalanced parentheses, trailing input, or a path vertex that is not
    /// exactly two numbers.
    Malformed,
    /// The kind takes a different number of arguments.
    WrongArgCount {
        /// The canonical name of the kind.
        kind: &'static str,
        /// The number of arguments found.
        found: usize,
    },
    /// An argument is not a finite number (or not an integer where one is
    /// required).
    InvalidNumber(String),
    /// A number is outside the range allowed for the named parameter.
    OutOfRange(&'static str),
}

impl fmt::Display for ShapeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeParseError::UnknownKind(name) => write!(f, "unknown shape kind `{name}`"),
            ShapeParseError::Malformed => f.write_str("malformed shape kind"),
            ShapeParseError::WrongArgCount { kind, found } => {
                write!(f, "wrong number of arguments for `{kind}`: {found}")
            }
            ShapeParseError::InvalidNumber(text) => write!(f, "invalid number `{text}`"),
            ShapeParseError::OutOfRange(what) => write!(f, "{what} out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeParseError {}

impl FromStr for ShapeKind {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<ShapeKind, ShapeParseError> {
        let s = s.trim();
        let (name, args) = match s.find('(') {
            Some(open) => {
                let inner = s[open + 1..]
                    .strip_suffix(')')
                    .ok_or(ShapeParseError::Malformed)?;
                if inner.contains(['(', ')']) {
                    return Err(ShapeParseError::Malformed);
                }
                (s[..open].trim_end(), Some(inner.trim()))
            }
            None => {
                if s.contains(')') {
                    return Err(ShapeParseError::Malformed);
                }
                (s, None)
            }
        };
        let name = name.to_ascii_lowercase();
        let args = args.filter(|a| !a.is_empty());

        let kind = match name.as_str() {
            "rect" | "rectangle" => no_args("rect", args, ShapeKind::Rectangle)?,
            "square" => no_args("square", args, ShapeKind::Square)?,
            "ellipse" => no_args("ellipse", args, ShapeKind::Ellipse)?,
            "circle" => no_args("circle", args, ShapeKind::Circle)?,
            "diamond" => no_args("diamond", args, ShapeKind::Diamond)?,
            "heart" => no_args("heart", args, ShapeKind::Heart)?,
            "rounded-rect" => {
                let [ratio] = numbers::<1>("rounded-rect", args)?;
                ShapeKind::RoundedRect {
                    radius_ratio: parse_number(ratio)?,
                }
            }
            "polygon" => parse_polygon(args)?,
            "path" => parse_path(args)?,
            _ => return Err(ShapeParseError::UnknownKind(name)),
        };
        kind.validate()?;
        Ok(kind)
    }
}

fn no_args(
    kind: &'static str,
    args: Option<&str>,
    value: ShapeKind,
) -> Result<ShapeKind, ShapeParseError> {
    match args {
        None => Ok(value),
        Some(args) => Err(ShapeParseError::WrongArgCount {
            kind,
            found: args.split(',').count(),
        }),
    }
}

/// Split the comma separated arguments, requiring exactly `N` of them.
fn numbers<'a, const N: usize>(
    kind: &'static str,
    args: Option<&'a str>,
) -> Result<[&'a str; N], ShapeParseError> {
    let mut out = [""; N];
    let mut found = 0;
    for arg in args.into_iter().flat_map(|a| a.split(',')) {
        if let Some(slot) = out.get_mut(found) {
            *slot = arg.trim();
        }
        found += 1;
    }
    if found == N {
        Ok(out)
    } else {
        Err(ShapeParseError::WrongArgCount { kind, found })
    }
}

fn parse_number(text: &str) -> Result<f64, ShapeParseError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ShapeParseError::InvalidNumber(text.to_string())),
    }
}

fn parse_polygon(args: Option<&str>) -> Result<ShapeKind, ShapeParseError> {
    let found = args.map_or(0, |a| a.split(',').count());
    let (sides, rotation) = match found {
        1 => {
            let [sides] = numbers::<1>("polygon", args)?;
            (sides, None)
        }
        2 => {
            let [sides, rotation] = numbers::<2>("polygon", args)?;
            (sides, Some(rotation))
        }
        found => {
            return Err(ShapeParseError::WrongArgCount {
                kind: "polygon",
                found,
            })
        }
    };
    let sides = sides
        .parse::<u32>()
        .map_err(|_| ShapeParseError::InvalidNumber(sides.to_string()))?;
    let rotation_degrees = rotation.map(parse_number).transpose()?.unwrap_or(0.0);
    Ok(ShapeKind::Polygon {
        sides,
        rotation_degrees,
    })
}

fn parse_path(args: Option<&str>) -> Result<ShapeKind, ShapeParseError> {
    let mut points = SmallVec::new();
    for vertex in args.into_iter().flat_map(|a| a.split(',')) {
        let mut coords = vertex.split_whitespace();
        let (Some(x), Some(y), None) = (coords.next(), coords.next(), coords.next()) else {
            return Err(ShapeParseError::Malformed);
        };
        points.push(Point::new(parse_number(x)?, parse_number(y)?));
    }
    Ok(ShapeKind::ArbitraryPath { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<ShapeKind, ShapeParseError> {
        s.parse()
    }

    #[test]
    fn simple_kinds() {
        assert_eq!(parse("rect"), Ok(ShapeKind::Rectangle));
        assert_eq!(parse("Rectangle"), Ok(ShapeKind::Rectangle));
        assert_eq!(parse("  SQUARE "), Ok(ShapeKind::Square));
        assert_eq!(parse("ellipse"), Ok(ShapeKind::Ellipse));
        assert_eq!(parse("circle()"), Ok(ShapeKind::Circle));
        assert_eq!(parse("Diamond"), Ok(ShapeKind::Diamond));
        assert_eq!(parse("heart"), Ok(ShapeKind::Heart));
    }

    #[test]
    fn kinds_with_arguments() {
        assert_eq!(parse("rounded-rect(0.1)"), Ok(ShapeKind::rounded_rect(0.1)));
        assert_eq!(parse("polygon ( 5 )"), Ok(ShapeKind::polygon(5)));
        assert_eq!(
            parse("polygon(6,-15.5)"),
            Ok(ShapeKind::Polygon {
                sides: 6,
                rotation_degrees: -15.5
            })
        );
        assert_eq!(
            parse("path(0.5 0, 1 0.5,0 1)"),
            Ok(ShapeKind::arbitrary_path([(0.5, 0.0), (1.0, 0.5), (0.0, 1.0)]))
        );
        assert_eq!(
            parse("path()"),
            Ok(ShapeKind::ArbitraryPath {
                points: SmallVec::new()
            })
        );
    }

    #[test]
    fn display_round_trips() {
        let kinds = [
            ShapeKind::Rectangle,
            ShapeKind::Square,
            ShapeKind::Ellipse,
            ShapeKind::Circle,
            ShapeKind::Diamond,
            ShapeKind::Heart,
            ShapeKind::rounded_rect(0.1),
            ShapeKind::rounded_rect(1.0 / 3.0),
            ShapeKind::polygon(5),
            ShapeKind::Polygon {
                sides: 7,
                rotation_degrees: 12.25,
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
        ];
        for kind in kinds {
            let text = kind.to_string();
            assert_eq!(parse(&text), Ok(kind), "{text}");
        }
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse("star"),
            Err(ShapeParseError::UnknownKind("star".to_string()))
        );
        assert_eq!(parse("polygon(5"), Err(ShapeParseError::Malformed));
        assert_eq!(parse("polygon)5("), Err(ShapeParseError::Malformed));
        assert_eq!(parse("path(0.5 0 1)"), Err(ShapeParseError::Malformed));
        assert_eq!(
            parse("heart(1)"),
            Err(ShapeParseError::WrongArgCount {
                kind: "heart",
                found: 1
            })
        );
        assert_eq!(
            parse("rounded-rect"),
            Err(ShapeParseError::WrongArgCount {
                kind: "rounded-rect",
                found: 0
            })
        );
        assert_eq!(
            parse("polygon(5, 1, 2)"),
            Err(ShapeParseError::WrongArgCount {
                kind: "polygon",
                found: 3
            })
        );
        assert_eq!(
            parse("polygon(six)"),
            Err(ShapeParseError::InvalidNumber("six".to_string()))
        );
        assert_eq!(
            parse("polygon(6, NaN)"),
            Err(ShapeParseError::InvalidNumber("NaN".to_string()))
        );
        assert_eq!(parse("polygon(2)"), Err(ShapeParseError::OutOfRange("sides")));
        assert_eq!(
            parse("rounded-rect(1.5)"),
            Err(ShapeParseError::OutOfRange("radius ratio"))
        );
        assert_eq!(
            parse("path(0 0, 1.2 0, 0 1)"),
            Err(ShapeParseError::OutOfRange("path coordinate"))
        );
    }

    #[test]
    fn out_of_range_kinds_do_not_round_trip() {
        let kinds = [
            (ShapeKind::rounded_rect(2.0), "radius ratio"),
            (ShapeKind::rounded_rect(-0.1), "radius ratio"),
            (ShapeKind::polygon(2), "sides"),
            (
                ShapeKind::Polygon {
                    sides: 5,
                    rotation_degrees: f64::INFINITY,
                },
                "rotation",
            ),
            (
                ShapeKind::arbitrary_path([(0.0, 0.0), (2.0, 0.0), (0.0, 1.0)]),
                "path coordinate",
            ),
        ];
        for (kind, what) in kinds {
            assert_eq!(kind.validate(), Err(ShapeParseError::OutOfRange(what)), "{kind}");
            let text = kind.to_string();
            assert!(parse(&text).is_err(), "{text}");
        }
    }

    #[test]
    fn aspect_ratio_and_degeneracy() {
        assert_eq!(ShapeKind::Square.fixed_aspect_ratio(), Some(1.0));
        assert_eq!(ShapeKind::Circle.fixed_aspect_ratio(), Some(1.0));
        assert_eq!(ShapeKind::Ellipse.fixed_aspect_ratio(), None);
        assert_eq!(ShapeKind::polygon(6).fixed_aspect_ratio(), None);

        assert!(ShapeKind::polygon(2).is_degenerate());
        assert!(!ShapeKind::polygon(3).is_degenerate());
        assert!(ShapeKind::arbitrary_path([(0.0, 0.0), (1.0, 1.0)]).is_degenerate());
        assert!(!ShapeKind::Diamond.is_degenerate());

        let tall = Rect::new(0.0, 0.0, 100.0, 300.0);
        assert_eq!(
            ShapeKind::Square.fit_bounds(tall),
            Rect::new(0.0, 100.0, 100.0, 200.0)
        );
    }
}
