//! Pixel stickers placed by normalized coordinates and tiled across a canvas
//!
//! A sticker is a small ordered set of `[0, 1)` coordinates (a grass blade, a
//! pebble). `repeat` turns it into a lattice of copies; `draw` rasterizes the
//! current set onto a canvas of the size the shape was created for.

use crate::canvas::color::Color;
use crate::canvas::geometry::{NormalizedPoint, PixelPoint, Point, Rect, saturating_i32};
use crate::canvas::surface::Canvas;
use crate::io::configuration::MIN_POLYGON_SIDES;
use crate::io::error::{Result, empty_state, invalid_parameter};
use std::f64::consts::TAU;

/// Ordered normalized coordinates drawn in a single color
#[derive(Debug, Clone, PartialEq)]
pub struct PixelShape {
    canvas_size: (u32, u32),
    coords: Vec<NormalizedPoint>,
    color: Color,
    rounded_edges: bool,
}

impl PixelShape {
    /// Shape bound to the pixel size of `canvas`
    ///
    /// Duplicate coordinates are kept; insertion order is draw order.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate lies outside `[0, 1)`
    pub fn new(
        canvas: &Canvas,
        coords: Vec<NormalizedPoint>,
        color: Color,
        rounded_edges: bool,
    ) -> Result<Self> {
        validate_coords(&coords)?;
        Ok(Self {
            canvas_size: (canvas.width(), canvas.height()),
            coords,
            color,
            rounded_edges,
        })
    }

    /// Current coordinate set
    pub fn coords(&self) -> &[NormalizedPoint] {
        &self.coords
    }

    /// Fill color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Whether coordinates are drawn as discs instead of single pixels
    pub const fn rounded_edges(&self) -> bool {
        self.rounded_edges
    }

    /// Pixel size of the canvas the shape targets
    pub const fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    /// Replace the coordinates, color and rounding together
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate lies outside `[0, 1)`; the shape is
    /// left unchanged
    pub fn reconfigure(
        &mut self,
        coords: Vec<NormalizedPoint>,
        color: Color,
        rounded_edges: bool,
    ) -> Result<()> {
        validate_coords(&coords)?;
        self.coords = coords;
        self.color = color;
        self.rounded_edges = rounded_edges;
        Ok(())
    }

    /// Rasterize every coordinate, later coordinates overwriting earlier ones
    ///
    /// Rounded shapes stamp a filled disc of `radius` pixels, others set one
    /// pixel. Returns the number of coordinates drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The shape holds no coordinates
    /// - The canvas size differs from the one the shape was created for
    pub fn draw(&self, canvas: &mut Canvas, radius: u32) -> Result<usize> {
        if self.coords.is_empty() {
            return Err(empty_state("draw pixel shape", &"shape has no coordinates"));
        }
        self.check_canvas(canvas)?;

        let (width, height) = self.canvas_size;
        let radius = i32::try_from(radius).unwrap_or(i32::MAX);
        for coord in &self.coords {
            let pixel = coord.to_pixel(width, height);
            if self.rounded_edges {
                canvas.fill_ellipse(Rect::around(pixel, radius), self.color);
            } else {
                canvas.set_pixel(pixel.x, pixel.y, self.color);
            }
        }

        tracing::debug!(count = self.coords.len(), "drew pixel shape");
        Ok(self.coords.len())
    }

    /// Replace the coordinates with a `count_x` by `count_y` lattice of copies
    ///
    /// Copy `(i, j)` is shifted by `(i * spacing.0, j * spacing.1)` pixels,
    /// converted to normalized units. Copies with a component at or past `1.0`
    /// are dropped. Nothing is drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero
    pub fn repeat(&mut self, count_x: u32, count_y: u32, spacing: (u32, u32)) -> Result<()> {
        if count_x == 0 || count_y == 0 {
            return Err(invalid_parameter(
                "count",
                &format!("({count_x}, {count_y})"),
                &"repeat counts must be greater than 0",
            ));
        }

        let (width, height) = (f64::from(self.canvas_size.0), f64::from(self.canvas_size.1));
        let (spacing_x, spacing_y) = (f64::from(spacing.0), f64::from(spacing.1));

        let mut tiled = Vec::with_capacity(self.coords.len());
        for i in 0..count_x {
            for j in 0..count_y {
                let shift_x = f64::from(i) * spacing_x / width;
                let shift_y = f64::from(j) * spacing_y / height;
                tiled.extend(
                    self.coords
                        .iter()
                        .map(|c| c.offset(shift_x, shift_y))
                        .filter(|c| c.x < 1.0 && c.y < 1.0),
                );
            }
        }

        tracing::debug!(
            before = self.coords.len(),
            after = tiled.len(),
            "repeated pixel shape"
        );
        self.coords = tiled;
        Ok(())
    }

    /// Draw a regular polygon onto the canvas as one filled, outlined shape
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas size differs from the one the shape was
    /// created for
    pub fn draw_polygon(&self, canvas: &mut Canvas, polygon: &PolygonConfig) -> Result<()> {
        self.check_canvas(canvas)?;
        let (width, height) = self.canvas_size;
        canvas.draw_polygon(
            &polygon.vertices(width, height),
            polygon.fill,
            polygon.outline,
        )
    }

    fn check_canvas(&self, canvas: &Canvas) -> Result<()> {
        let actual = (canvas.width(), canvas.height());
        if actual != self.canvas_size {
            return Err(invalid_parameter(
                "canvas",
                &format!("{}x{}", actual.0, actual.1),
                &format!(
                    "shape was created for a {}x{} canvas",
                    self.canvas_size.0, self.canvas_size.1
                ),
            ));
        }
        Ok(())
    }
}

/// Regular polygon in normalized canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonConfig {
    sides: u32,
    radius: f64,
    center: NormalizedPoint,
    fill: Color,
    outline: Color,
}

impl PolygonConfig {
    /// Validated polygon
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `sides` is below 3
    /// - `radius` is negative or not finite
    /// - `center` lies outside `[0, 1)`
    pub fn new(
        sides: u32,
        radius: f64,
        center: NormalizedPoint,
        fill: Color,
        outline: Color,
    ) -> Result<Self> {
        if sides < MIN_POLYGON_SIDES {
            return Err(invalid_parameter(
                "sides",
                &sides,
                &format!("a polygon needs at least {MIN_POLYGON_SIDES} sides"),
            ));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(invalid_parameter(
                "radius",
                &radius,
                &"must be a finite, non-negative fraction",
            ));
        }
        validate_coords(&[center])?;

        Ok(Self {
            sides,
            radius,
            center,
            fill,
            outline,
        })
    }

    /// Number of sides
    pub const fn sides(&self) -> u32 {
        self.sides
    }

    /// Vertex positions on a canvas of the given size
    ///
    /// Vertices sit `2π / sides` apart starting at three o'clock. The radius
    /// scales with width on x and height on y; offsets are truncated towards
    /// zero.
    pub fn vertices(&self, width: u32, height: u32) -> Vec<PixelPoint> {
        let center = self.center.to_pixel(width, height);
        let step = TAU / f64::from(self.sides);
        let reach_x = self.radius * f64::from(width);
        let reach_y = self.radius * f64::from(height);

        (0..self.sides)
            .map(|i| {
                let angle = f64::from(i) * step;
                center.offset(
                    saturating_i32(reach_x * angle.cos()),
                    saturating_i32(reach_y * angle.sin()),
                )
            })
            .collect()
    }
}

fn validate_coords(coords: &[NormalizedPoint]) -> Result<()> {
    match coords.iter().find(|c| !c.is_normalized()) {
        Some(bad) => Err(invalid_parameter(
            "coords",
            &format!("({}, {})", bad.x, bad.y),
            &"normalized coordinates must lie in [0, 1)",
        )),
        None => Ok(()),
    }
}

/// Convenience for building coordinate lists from tuples
pub fn normalized(points: &[(f64, f64)]) -> Vec<NormalizedPoint> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
