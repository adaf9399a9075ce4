//! RGB/RGBA color values with validated construction

use crate::io::error::{Result, invalid_parameter};
use image::Rgba;
use std::fmt;
use std::str::FromStr;

/// An 8-bit color with optional alpha
///
/// Colors built from three channels are opaque. The channel count is kept so
/// the `--shadow` flag can insist on an explicit alpha channel.
///
/// Equality compares channel values only, so an opaque RGB color equals the
/// same color read back from an RGBA buffer.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
    has_alpha: bool,
}

impl Color {
    /// Opaque color from three channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: u8::MAX,
            has_alpha: false,
        }
    }

    /// Color with an explicit alpha channel
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a,
            has_alpha: true,
        }
    }

    /// Build a color from loosely typed channel values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The slice does not hold exactly three or four channels
    /// - Any channel lies outside `0..=255`
    pub fn from_channels(channels: &[i64]) -> Result<Self> {
        let bytes = channels
            .iter()
            .map(|&c| u8::try_from(c).ok().ok_or(c))
            .collect::<std::result::Result<Vec<u8>, i64>>()
            .map_err(|c| {
                invalid_parameter(
                    "color",
                    &format!("{channels:?}"),
                    &format!("channel {c} outside 0..=255"),
                )
            })?;

        match *bytes.as_slice() {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(invalid_parameter(
                "color",
                &format!("{channels:?}"),
                &format!("expected 3 or 4 channels, got {}", channels.len()),
            )),
        }
    }

    /// Red channel
    pub const fn red(self) -> u8 {
        self.r
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        self.g
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        self.b
    }

    /// Alpha channel (255 for colors built without one)
    pub const fn alpha(self) -> u8 {
        self.a
    }

    /// Whether the color was specified with four channels
    pub const fn has_alpha(self) -> bool {
        self.has_alpha
    }

    /// Channel values in `[r, g, b, a]` order
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Pixel value as stored in the raster buffer
    pub const fn to_rgba(self) -> Rgba<u8> {
        Rgba(self.to_array())
    }

    /// Color read back from a raster pixel
    pub const fn from_rgba(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::rgba(r, g, b, a)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Eq for Color {}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_array().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_alpha {
            write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        } else {
            write!(f, "({}, {}, {})", self.r, self.g, self.b)
        }
    }
}

/// Parses `"r,g,b"` or `"r,g,b,a"`, optionally wrapped in parentheses
impl FromStr for Color {
    type Err = crate::io::error::TileError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let channels = trimmed
            .split(',')
            .map(|part| part.trim().parse::<i64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| invalid_parameter("color", &s, &e))?;
        Self::from_channels(&channels)
    }
}
