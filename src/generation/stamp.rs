//! Manually placed pixels, optionally repeated across the canvas

use crate::canvas::color::Color;
use crate::canvas::geometry::{PixelPoint, Point};
use crate::canvas::surface::Canvas;

/// A single pixel stamped one or more times
///
/// Each axis of `repeats` is a copy count: `0` and `1` both mean one copy at
/// the origin, `n` spreads `n` copies `dimension / n` pixels apart starting
/// at the origin. Copies past the canvas edge are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelStamp {
    /// First pixel to set
    pub origin: PixelPoint,
    /// Stamp color, the line color when `None`
    pub color: Option<Color>,
    /// Copies along x and y
    pub repeats: (u32, u32),
}

impl PixelStamp {
    /// One pixel at `origin`
    pub const fn once(origin: PixelPoint, color: Option<Color>) -> Self {
        Self {
            origin,
            color,
            repeats: (0, 0),
        }
    }

    /// Pixel positions this stamp covers on a canvas of the given size
    pub fn positions(&self, width: u32, height: u32) -> Vec<PixelPoint> {
        let xs = axis_positions(self.origin.x, self.repeats.0, width);
        let ys = axis_positions(self.origin.y, self.repeats.1, height);

        ys.iter()
            .flat_map(|&y| xs.iter().map(move |&x| Point::new(x, y)))
            .collect()
    }

    /// Set every covered pixel, returning how many were set
    pub fn apply(&self, canvas: &mut Canvas, default_color: Color) -> usize {
        let color = self.color.unwrap_or(default_color);
        let positions = self.positions(canvas.width(), canvas.height());
        for point in &positions {
            canvas.set_pixel(point.x, point.y, color);
        }
        tracing::debug!(pixels = positions.len(), "applied pixel stamp");
        positions.len()
    }
}

fn axis_positions(origin: i32, repeats: u32, dimension: u32) -> Vec<i32> {
    let copies = repeats.max(1);
    let limit = i64::from(dimension);
    let step = i64::from(dimension / copies).max(1);

    (0..i64::from(copies))
        .map(|k| i64::from(origin) + k * step)
        .filter(|&p| (0..limit).contains(&p))
        .filter_map(|p| i32::try_from(p).ok())
        .collect()
}
