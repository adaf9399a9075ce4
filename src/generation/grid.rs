//! Grid-walk pattern generation for static tiles and animations
//!
//! A pattern is produced by visiting cell origins row by row on a fixed
//! stride (`thickness * repeat`) and drawing the same shape at each. Animated
//! patterns repeat the walk on a fresh canvas per frame and persist every
//! frame before starting the next.

use crate::canvas::geometry::{PixelPoint, Point};
use crate::canvas::surface::Canvas;
use crate::generation::frames::{Frame, FrameSequence};
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::io::output::OutputTarget;
use crate::shapes::config::{CurveConfig, ShapeConfig, TileStyle, stride};
use crate::shapes::rasterizer::ShapeRasterizer;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Number of frames in an animation, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameCount(NonZeroUsize);

impl FrameCount {
    /// Validated frame count
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or negative
    pub fn new(count: i64) -> Result<Self> {
        usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or_else(|| invalid_parameter("frames", &count, &"must be a positive integer"))
    }

    /// Number of frames
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for FrameCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejects non-numeric input as well as non-positive counts
impl FromStr for FrameCount {
    type Err = crate::io::error::TileError;

    fn from_str(s: &str) -> Result<Self> {
        let count = s
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid_parameter("frames", &s, &e))?;
        Self::new(count)
    }
}

/// Tiles a canvas with repeated grid cells or curves
#[derive(Debug, Clone, Copy)]
pub struct GridPatternGenerator {
    width: u32,
    height: u32,
    rasterizer: ShapeRasterizer,
}

impl GridPatternGenerator {
    /// Generator for tiles of the given size and palette
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is invalid for a canvas
    pub fn new(width: u32, height: u32, style: TileStyle) -> Result<Self> {
        // Validates dimensions the same way every frame canvas will
        Canvas::new(width, height, style.background)?;
        Ok(Self {
            width,
            height,
            rasterizer: ShapeRasterizer::new(style),
        })
    }

    /// Tile width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Tile height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Rasterizer used for every cell
    pub const fn rasterizer(&self) -> &ShapeRasterizer {
        &self.rasterizer
    }

    /// Fresh canvas filled with the background color
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be allocated
    pub fn blank_canvas(&self) -> Result<Canvas> {
        Canvas::new(self.width, self.height, self.rasterizer.style().background)
    }

    /// Cell origins from `start` to the canvas edge, row-major
    ///
    /// `y` runs over `start.y..height` and, for each row, `x` over
    /// `start.x..width`, both stepping by `stride`.
    pub fn cell_origins(&self, start: PixelPoint, stride: u32) -> Vec<PixelPoint> {
        let step = usize::try_from(stride.max(1)).unwrap_or(usize::MAX);
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);

        (start.y..height)
            .step_by(step)
            .flat_map(|y| (start.x..width).step_by(step).map(move |x| Point::new(x, y)))
            .collect()
    }

    /// Draw the grid pattern onto an existing canvas, returning the cell count
    pub fn draw_grid(&self, canvas: &mut Canvas, config: &ShapeConfig, start: PixelPoint) -> usize {
        let origins = self.cell_origins(start, config.stride(self.width, self.height));
        for &origin in &origins {
            self.rasterizer.draw_grid_cell(canvas, origin, config, None);
        }
        tracing::debug!(cells = origins.len(), "drew grid pattern");
        origins.len()
    }

    /// Draw the curve once per cell, moved to each cell origin
    pub fn draw_curves(
        &self,
        canvas: &mut Canvas,
        curve: &CurveConfig,
        repeat: Option<u32>,
        start: PixelPoint,
    ) -> usize {
        let step = stride(curve.thickness(), repeat, self.width, self.height);
        let origins = self.cell_origins(start, step);
        for &origin in &origins {
            self.rasterizer.draw_curve(canvas, &curve.translated(origin));
        }
        tracing::debug!(cells = origins.len(), "drew curve pattern");
        origins.len()
    }

    /// Static grid tile on a fresh canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be allocated
    pub fn render(&self, config: &ShapeConfig, start: PixelPoint) -> Result<Canvas> {
        let mut canvas = self.blank_canvas()?;
        self.draw_grid(&mut canvas, config, start);
        Ok(canvas)
    }

    /// Static curve tile on a fresh canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be allocated
    pub fn render_curves(
        &self,
        curve: &CurveConfig,
        repeat: Option<u32>,
        start: PixelPoint,
    ) -> Result<Canvas> {
        let mut canvas = self.blank_canvas()?;
        self.draw_curves(&mut canvas, curve, repeat, start);
        Ok(canvas)
    }

    /// Animated grid pattern, one persisted PNG per frame
    ///
    /// # Errors
    ///
    /// Returns the first frame failure; frames already written stay on disk
    pub fn animate(
        &self,
        config: &ShapeConfig,
        start: PixelPoint,
        frames: FrameCount,
        output: &OutputTarget,
    ) -> Result<FrameSequence> {
        self.animate_with(frames, output, |_| {}, |canvas, _| {
            self.draw_grid(canvas, config, start);
            Ok(())
        })
    }

    /// Animated curve pattern, one persisted PNG per frame
    ///
    /// # Errors
    ///
    /// Returns the first frame failure; frames already written stay on disk
    pub fn animate_curves(
        &self,
        curve: &CurveConfig,
        repeat: Option<u32>,
        start: PixelPoint,
        frames: FrameCount,
        output: &OutputTarget,
    ) -> Result<FrameSequence> {
        self.animate_with(frames, output, |_| {}, |canvas, _| {
            self.draw_curves(canvas, curve, repeat, start);
            Ok(())
        })
    }

    /// Frame loop shared by every animated pattern
    ///
    /// Each frame gets a fresh canvas, is drawn by `render`, saved as
    /// `{base}_frame_{index}.png`, then reported to `on_frame` with its index.
    ///
    /// # Errors
    ///
    /// Returns the first frame failure wrapped with its index
    pub fn animate_with<O, R>(
        &self,
        frames: FrameCount,
        output: &OutputTarget,
        mut on_frame: O,
        mut render: R,
    ) -> Result<FrameSequence>
    where
        O: FnMut(usize),
        R: FnMut(&mut Canvas, usize) -> Result<()>,
    {
        let mut sequence = FrameSequence::new();

        for index in 0..frames.get() {
            let mut canvas = self.blank_canvas().for_frame(index)?;
            render(&mut canvas, index).for_frame(index)?;
            let path = output.save_frame(&canvas, index).for_frame(index)?;
            tracing::debug!(index, path = %path.display(), "generated frame");
            sequence.push(Frame::File(path));
            on_frame(index);
        }

        Ok(sequence)
    }
}

/// Positions on a square tile, column by column
///
/// Starts at `(0, 0)`, walks `y` down by `spacing` until it reaches
/// `tile_size`, then moves `x` right by `spacing`. Stops when `x` leaves the
/// tile or after `limit` positions; a limit of `0` means no limit.
#[derive(Debug, Clone)]
pub struct PositionWalk {
    tile_size: i32,
    spacing: i32,
    next: Option<PixelPoint>,
    remaining: Option<usize>,
}

impl PositionWalk {
    /// Walk over a `tile_size` square
    ///
    /// # Errors
    ///
    /// Returns an error if `spacing` is zero
    pub fn new(tile_size: u32, spacing: u32, limit: Option<usize>) -> Result<Self> {
        if spacing == 0 {
            return Err(invalid_parameter("spacing", &spacing, &"must be greater than 0"));
        }
        let tile_size = i32::try_from(tile_size).unwrap_or(i32::MAX);
        let spacing = i32::try_from(spacing).unwrap_or(i32::MAX);

        Ok(Self {
            tile_size,
            spacing,
            next: (tile_size > 0).then_some(Point::new(0, 0)),
            remaining: limit.filter(|&l| l > 0),
        })
    }
}

impl Iterator for PositionWalk {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }
        let current = self.next?;

        let mut following = Point::new(current.x, current.y.saturating_add(self.spacing));
        if following.y >= self.tile_size {
            following = Point::new(current.x.saturating_add(self.spacing), 0);
        }
        self.next = (following.x < self.tile_size).then_some(following);
        self.remaining = self.remaining.map(|r| r - 1);

        Some(current)
    }
}
