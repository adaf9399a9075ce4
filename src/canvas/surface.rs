//! Software raster surface backing every tile and animation frame
//!
//! Primitives clip silently at the canvas edge and overwrite pixels; there is
//! no alpha blending, so the last draw touching a pixel decides its value.

use crate::canvas::color::Color;
use crate::canvas::geometry::{PixelPoint, Point, Rect, saturating_i32};
use crate::io::configuration::{MAX_CANVAS_DIMENSION, OUTPUT_EXTENSION};
use crate::io::error::{Result, TileError, invalid_parameter};
use image::RgbaImage;
use std::path::Path;

/// Fixed-size RGBA pixel buffer with a background fill
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    background: Color,
}

impl Canvas {
    /// Create a canvas filled with the background color
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_CANVAS_DIMENSION`]
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        Ok(Self {
            image: RgbaImage::from_pixel(width, height, background.to_rgba()),
            background,
        })
    }

    /// Decode a PNG file into a canvas
    ///
    /// The background of a decoded canvas is taken from its top-left pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn open_png<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let image = image::open(&path_buf)
            .map_err(|e| TileError::ImageLoad {
                path: path_buf,
                source: e,
            })?
            .to_rgba8();

        Ok(Self::from_image(image))
    }

    /// Wrap an existing buffer
    pub fn from_image(image: RgbaImage) -> Self {
        let background = image
            .get_pixel_checked(0, 0)
            .copied()
            .map_or(Color::rgba(0, 0, 0, 0), Color::from_rgba);
        Self { image, background }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Larger of width and height
    pub fn max_dimension(&self) -> u32 {
        self.width().max(self.height())
    }

    /// Fill color the canvas was created with
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Underlying pixel buffer
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the canvas, yielding its pixel buffer
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Color at a pixel, or `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        self.image
            .get_pixel_checked(x, y)
            .copied()
            .map(Color::from_rgba)
    }

    /// Number of pixels holding exactly the given color
    pub fn count_color(&self, color: Color) -> usize {
        let target = color.to_rgba();
        self.image.pixels().filter(|&&p| p == target).count()
    }

    /// Set one pixel, ignoring positions outside the canvas
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            *pixel = color.to_rgba();
        }
    }

    /// Pixel box covering the whole canvas
    pub fn bounds(&self) -> Rect {
        Rect {
            left: 0,
            top: 0,
            right: i32::try_from(self.width()).unwrap_or(i32::MAX) - 1,
            bottom: i32::try_from(self.height()).unwrap_or(i32::MAX) - 1,
        }
    }

    /// Straight line between two pixels with a square pen of `thickness`
    ///
    /// Thickness is clamped to `1..=MAX_CANVAS_DIMENSION`. The segment is
    /// clipped to the region where the pen can still reach the canvas before
    /// it is traced.
    pub fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Color, thickness: u32) {
        let pen = i32::try_from(thickness.clamp(1, MAX_CANVAS_DIMENSION)).unwrap_or(1);
        // Pen covers [-(w-1)/2, w/2] around each traced pixel
        let low = -(pen - 1) / 2;
        let high = pen / 2;

        let canvas = self.bounds();
        let reach = Rect {
            left: -high,
            top: -high,
            right: canvas.right - low,
            bottom: canvas.bottom - low,
        }
        .inflate(1);
        let Some((from, to)) = clip_segment(from, to, reach) else {
            return;
        };

        let mut previous = None;
        for point in bresenham(from, to) {
            let pen_box = Rect {
                left: point.x.saturating_add(low),
                top: point.y.saturating_add(low),
                right: point.x.saturating_add(high),
                bottom: point.y.saturating_add(high),
            };
            let Some(visible) = pen_box.intersect(canvas) else {
                continue;
            };
            if previous == Some(visible) {
                continue;
            }
            self.fill_rect(visible, color);
            if visible == canvas {
                return;
            }
            previous = Some(visible);
        }
    }

    /// Filled ellipse inscribed in a bounding box
    ///
    /// Only the part of the box overlapping the canvas is visited.
    pub fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        let Some(visible) = bounds.intersect(self.bounds()) else {
            return;
        };
        let center = bounds.center();
        let (rx, ry) = bounds.radii();
        // Degenerate boxes still cover their own pixels
        let (rx, ry) = (rx.max(0.5), ry.max(0.5));

        for y in visible.top..=visible.bottom {
            for x in visible.left..=visible.right {
                let nx = (f64::from(x) - center.x) / rx;
                let ny = (f64::from(y) - center.y) / ry;
                if nx.mul_add(nx, ny * ny) <= 1.0 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    // Caller guarantees the box lies inside the canvas
    fn fill_rect(&mut self, area: Rect, color: Color) {
        for y in area.top..=area.bottom {
            for x in area.left..=area.right {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Outline of part of the ellipse inscribed in a bounding box
    ///
    /// Angles are in degrees, measured from three o'clock towards the bottom
    /// of the canvas.
    pub fn draw_arc(
        &mut self,
        bounds: Rect,
        start_degrees: i32,
        end_degrees: i32,
        color: Color,
        thickness: u32,
    ) {
        let center = bounds.center();
        let (rx, ry) = bounds.radii();
        let point_at = |degrees: i32| {
            let angle = f64::from(degrees).to_radians();
            Point::new(
                rx.mul_add(angle.cos(), center.x),
                ry.mul_add(angle.sin(), center.y),
            )
            .round()
        };

        let mut previous = point_at(start_degrees);
        for degrees in start_degrees.saturating_add(1)..=end_degrees {
            let next = point_at(degrees);
            self.draw_line(previous, next, color, thickness);
            previous = next;
        }
    }

    /// Closed polygon filled with `fill` and traced with `outline`
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three vertices are given
    pub fn draw_polygon(
        &mut self,
        vertices: &[PixelPoint],
        fill: Color,
        outline: Color,
    ) -> Result<()> {
        if vertices.len() < 3 {
            return Err(invalid_parameter(
                "vertices",
                &vertices.len(),
                &"a polygon needs at least 3 vertices",
            ));
        }

        self.fill_polygon(vertices, fill);

        for (index, &from) in vertices.iter().enumerate() {
            let to = vertices
                .get((index + 1) % vertices.len())
                .copied()
                .unwrap_or(from);
            self.draw_line(from, to, outline, 1);
        }

        Ok(())
    }

    // Even-odd scanline fill sampled at pixel centers
    fn fill_polygon(&mut self, vertices: &[PixelPoint], color: Color) {
        let canvas = self.bounds();
        let Some(visible) = Rect::bounding(vertices).and_then(|b| b.intersect(canvas)) else {
            return;
        };

        let edges: Vec<(Point<f64>, Point<f64>)> = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(a, b)| (a.to_f64(), b.to_f64()))
            .collect();

        let mut crossings = Vec::with_capacity(edges.len());
        for y in visible.top..=visible.bottom {
            let scan = f64::from(y) + 0.5;
            crossings.clear();

            for &(a, b) in &edges {
                if (a.y <= scan && scan < b.y) || (b.y <= scan && scan < a.y) {
                    let t = (scan - a.y) / (b.y - a.y);
                    crossings.push((b.x - a.x).mul_add(t, a.x));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                if let [start, end] = *span {
                    // Pixel x is inside when start <= x + 0.5 < end
                    let first = saturating_i32((start - 0.5).ceil()).max(visible.left);
                    let last = saturating_i32((end - 0.5).ceil())
                        .saturating_sub(1)
                        .min(visible.right);
                    for x in first..=last {
                        self.set_pixel(x, y, color);
                    }
                }
            }
        }
    }

    /// Encode the canvas as a lossless RGBA PNG
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not end in `.png`
    /// - The image cannot be written
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) != Some(OUTPUT_EXTENSION) {
            return Err(invalid_parameter(
                "path",
                &path.display(),
                &"output files must use the .png extension",
            ));
        }

        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| TileError::ImageExport {
                path: path.to_path_buf(),
                source: e,
            })
    }
}

fn validate_dimension(parameter: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be greater than 0"));
    }
    if value > MAX_CANVAS_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_CANVAS_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Liang-Barsky clip of a segment to an inclusive box
///
/// Endpoints already inside are returned untouched so on-canvas lines trace
/// exactly the same pixels. Clipped endpoints are rounded to the nearest pixel
/// and kept inside the box.
fn clip_segment(from: PixelPoint, to: PixelPoint, area: Rect) -> Option<(PixelPoint, PixelPoint)> {
    if area.contains(from) && area.contains(to) {
        return Some((from, to));
    }

    let (start, end) = (from.to_f64(), to.to_f64());
    let (dx, dy) = (end.x - start.x, end.y - start.y);
    let boundaries = [
        (-dx, start.x - f64::from(area.left)),
        (dx, f64::from(area.right) - start.x),
        (-dy, start.y - f64::from(area.top)),
        (dy, f64::from(area.bottom) - start.y),
    ];

    let (mut enter, mut leave) = (0.0_f64, 1.0_f64);
    for (p, q) in boundaries {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                enter = enter.max(t);
            } else {
                leave = leave.min(t);
            }
        }
    }
    if enter > leave {
        return None;
    }

    let at = |t: f64| {
        let point = Point::new(dx.mul_add(t, start.x), dy.mul_add(t, start.y)).round();
        Point::new(
            point.x.clamp(area.left, area.right),
            point.y.clamp(area.top, area.bottom),
        )
    };
    Some((at(enter), at(leave)))
}

/// Pixels visited by Bresenham's algorithm from `from` to `to`, both included
///
/// The path is produced lazily; steps are computed in `i64` so segments
/// spanning the full `i32` range do not overflow.
pub fn bresenham(from: PixelPoint, to: PixelPoint) -> Bresenham {
    let (x0, y0) = (i64::from(from.x), i64::from(from.y));
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    Bresenham {
        x: x0,
        y: y0,
        end: (x1, y1),
        dx,
        dy,
        sx: if x0 < x1 { 1 } else { -1 },
        sy: if y0 < y1 { 1 } else { -1 },
        err: dx + dy,
        finished: false,
    }
}

/// Iterator over a Bresenham path, see [`bresenham`]
#[derive(Debug, Clone)]
pub struct Bresenham {
    x: i64,
    y: i64,
    end: (i64, i64),
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    finished: bool,
}

impl Iterator for Bresenham {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let point = Point::new(i32::try_from(self.x).ok()?, i32::try_from(self.y).ok()?);
        if (self.x, self.y) == self.end {
            self.finished = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}
