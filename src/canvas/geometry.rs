//! Points in pixel or normalized space and axis-aligned boxes

use crate::io::error::{TileError, invalid_parameter};
use num_traits::{Num, ToPrimitive};
use std::fmt::Display;
use std::str::FromStr;

/// A pair of coordinates
///
/// Pixel positions use `Point<i32>`, fractions of the canvas use `Point<f64>`.
/// The two spaces never meet inside one operation; conversion is explicit via
/// [`NormalizedPoint::to_pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point<T> {
    /// Horizontal coordinate
    pub x: T,
    /// Vertical coordinate
    pub y: T,
}

/// Absolute pixel position
pub type PixelPoint = Point<i32>;

/// Position as a fraction of canvas width and height
pub type NormalizedPoint = Point<f64>;

impl<T: Num + Copy> Point<T> {
    /// Create a point
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Formats as `x,y`, the same form [`FromStr`] accepts
impl<T: Display> Display for Point<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses `"x,y"`, optionally wrapped in parentheses
impl<T> FromStr for Point<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let Some((x, y)) = trimmed.split_once(',') else {
            return Err(invalid_parameter("point", &s, &"expected \"x,y\""));
        };
        let parse = |part: &str| {
            part.trim()
                .parse::<T>()
                .map_err(|e| invalid_parameter("point", &s, &e))
        };
        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

impl PixelPoint {
    /// Point shifted by the given deltas, saturating at the `i32` bounds
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Point shifted by another point treated as a vector
    pub const fn translate(self, by: Self) -> Self {
        self.offset(by.x, by.y)
    }

    /// Same position in floating point pixel space
    pub fn to_f64(self) -> Point<f64> {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl Point<f64> {
    /// Point shifted by the given deltas
    pub const fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Nearest pixel to a sub-pixel position
    ///
    /// Values beyond the `i32` range saturate.
    pub fn round(self) -> PixelPoint {
        Point::new(saturating_i32(self.x.round()), saturating_i32(self.y.round()))
    }

    /// Pixel under a normalized coordinate on a canvas of the given size
    ///
    /// Uses `floor(u * width), floor(v * height)`.
    pub fn to_pixel(self, width: u32, height: u32) -> PixelPoint {
        Point::new(
            saturating_i32((self.x * f64::from(width)).floor()),
            saturating_i32((self.y * f64::from(height)).floor()),
        )
    }

    /// Whether both components lie in `[0, 1)`
    pub fn is_normalized(self) -> bool {
        (0.0..1.0).contains(&self.x) && (0.0..1.0).contains(&self.y)
    }
}

/// Truncate a float to `i32`, saturating at the type's bounds
pub(crate) fn saturating_i32(value: f64) -> i32 {
    value.to_i32().unwrap_or(if value < 0.0 { i32::MIN } else { i32::MAX })
}

/// Inclusive axis-aligned pixel box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Leftmost column
    pub left: i32,
    /// Topmost row
    pub top: i32,
    /// Rightmost column
    pub right: i32,
    /// Bottom row
    pub bottom: i32,
}

impl Rect {
    /// Box spanning two corners in any order
    pub fn from_corners(a: PixelPoint, b: PixelPoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    /// Square box of the given radius around a center
    ///
    /// Sides saturate at the `i32` bounds.
    pub const fn around(center: PixelPoint, radius: i32) -> Self {
        Self {
            left: center.x.saturating_sub(radius),
            top: center.y.saturating_sub(radius),
            right: center.x.saturating_add(radius),
            bottom: center.y.saturating_add(radius),
        }
    }

    /// Smallest box containing every point, or `None` for no points
    pub fn bounding(points: &[PixelPoint]) -> Option<Self> {
        let first = points.first()?;
        Some(points.iter().fold(
            Self::from_corners(*first, *first),
            |acc, p| Self {
                left: acc.left.min(p.x),
                top: acc.top.min(p.y),
                right: acc.right.max(p.x),
                bottom: acc.bottom.max(p.y),
            },
        ))
    }

    /// Box grown by `amount` pixels on every side, saturating at the `i32`
    /// bounds
    pub const fn inflate(self, amount: i32) -> Self {
        Self {
            left: self.left.saturating_sub(amount),
            top: self.top.saturating_sub(amount),
            right: self.right.saturating_add(amount),
            bottom: self.bottom.saturating_add(amount),
        }
    }

    /// Overlap of two boxes, or `None` when they share no pixel
    pub fn intersect(self, other: Self) -> Option<Self> {
        let overlap = Self {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        (overlap.left <= overlap.right && overlap.top <= overlap.bottom).then_some(overlap)
    }

    /// Whether a pixel lies inside the box
    pub const fn contains(self, point: PixelPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Center in sub-pixel space
    pub fn center(self) -> Point<f64> {
        Point::new(
            f64::midpoint(f64::from(self.left), f64::from(self.right)),
            f64::midpoint(f64::from(self.top), f64::from(self.bottom)),
        )
    }

    /// Half extents in sub-pixel space
    pub fn radii(self) -> (f64, f64) {
        (
            (f64::from(self.right) - f64::from(self.left)) / 2.0,
            (f64::from(self.bottom) - f64::from(self.top)) / 2.0,
        )
    }
}
