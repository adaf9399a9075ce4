//! Single-shape drawing: grid cells, bezier curves and arcs with drop shadows
//!
//! A popped shape is drawn twice. The shadow pass goes first, offset by
//! [`SHADOW_OFFSET`] on both axes, so the main pass always lands on top.

use crate::canvas::color::Color;
use crate::canvas::geometry::{PixelPoint, Point, Rect};
use crate::canvas::surface::Canvas;
use crate::io::configuration::{BEZIER_SAMPLES, SHADOW_OFFSET};
use crate::shapes::config::{CurveConfig, EdgeSet, ShapeConfig, TileStyle};

/// Draws one decorated cell or curve at a time using a fixed palette
#[derive(Debug, Clone, Copy)]
pub struct ShapeRasterizer {
    style: TileStyle,
}

impl ShapeRasterizer {
    /// Rasterizer drawing with the given palette
    pub const fn new(style: TileStyle) -> Self {
        Self { style }
    }

    /// Palette in use
    pub const fn style(&self) -> TileStyle {
        self.style
    }

    /// Draw the visible edges of a canvas-sized rectangle anchored at `origin`
    ///
    /// `line_color` overrides the style's line color for the main pass; the
    /// shadow pass always uses the shadow color.
    pub fn draw_grid_cell(
        &self,
        canvas: &mut Canvas,
        origin: PixelPoint,
        config: &ShapeConfig,
        line_color: Option<Color>,
    ) {
        let color = line_color.unwrap_or(self.style.line);

        if config.pop() {
            let shadow_origin = origin.offset(SHADOW_OFFSET, SHADOW_OFFSET);
            draw_edges(
                canvas,
                shadow_origin,
                config.edges(),
                config.thickness(),
                self.style.shadow,
            );
        }
        draw_edges(canvas, origin, config.edges(), config.thickness(), color);
    }

    /// Draw a bezier curve, its closing triangle when closed, and its shadow
    /// when popped
    pub fn draw_curve(&self, canvas: &mut Canvas, curve: &CurveConfig) {
        if curve.pop() {
            let shadow = curve.translated(Point::new(SHADOW_OFFSET, SHADOW_OFFSET));
            draw_curve_pass(canvas, &shadow, self.style.shadow);
        }
        draw_curve_pass(canvas, curve, self.style.line);
    }

    /// Upper half of the ellipse bounding three points, grown by `thickness`
    pub fn draw_arc(
        &self,
        canvas: &mut Canvas,
        points: [PixelPoint; 3],
        thickness: u32,
        color: Option<Color>,
    ) {
        let Some(bounds) = Rect::bounding(&points) else {
            return;
        };
        let grow = i32::try_from(thickness).unwrap_or(i32::MAX);
        canvas.draw_arc(
            bounds.inflate(grow),
            0,
            180,
            color.unwrap_or(self.style.line),
            thickness,
        );
    }
}

fn draw_edges(
    canvas: &mut Canvas,
    origin: PixelPoint,
    edges: EdgeSet,
    thickness: u32,
    color: Color,
) {
    let width = i32::try_from(canvas.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(canvas.height()).unwrap_or(i32::MAX);
    let top_left = origin;
    let top_right = origin.offset(width, 0);
    let bottom_left = origin.offset(0, height);
    let bottom_right = origin.offset(width, height);

    if edges.top {
        canvas.draw_line(top_left, top_right, color, thickness);
    }
    if edges.bottom {
        canvas.draw_line(bottom_left, bottom_right, color, thickness);
    }
    if edges.left {
        canvas.draw_line(top_left, bottom_left, color, thickness);
    }
    if edges.right {
        canvas.draw_line(top_right, bottom_right, color, thickness);
    }
}

fn draw_curve_pass(canvas: &mut Canvas, curve: &CurveConfig, color: Color) {
    draw_bezier(
        canvas,
        [curve.start(), curve.control(), curve.end()],
        curve.thickness(),
        color,
    );

    if curve.is_closed() {
        let triangle = [
            (curve.start(), curve.end()),
            (curve.end(), curve.control()),
            (curve.control(), curve.start()),
        ];
        for (from, to) in triangle {
            canvas.draw_line(from, to, color, curve.thickness());
        }
    }
}

/// Point on the quadratic bezier `(1-t)^2 p0 + 2(1-t)t p1 + t^2 p2`
pub fn bezier_point(start: Point<f64>, control: Point<f64>, end: Point<f64>, t: f64) -> Point<f64> {
    let u = 1.0 - t;
    let (a, b, c) = (u * u, 2.0 * u * t, t * t);
    Point::new(
        c.mul_add(end.x, a.mul_add(start.x, b * control.x)),
        c.mul_add(end.y, a.mul_add(start.y, b * control.y)),
    )
}

/// Curve sampled at `t = 0.00, 0.01, ..., 1.00`
pub fn bezier_samples(start: PixelPoint, control: PixelPoint, end: PixelPoint) -> Vec<Point<f64>> {
    let (p0, p1, p2) = (start.to_f64(), control.to_f64(), end.to_f64());
    let segments = (BEZIER_SAMPLES - 1) as f64;
    (0..BEZIER_SAMPLES)
        .map(|i| bezier_point(p0, p1, p2, i as f64 / segments))
        .collect()
}

/// Piecewise-linear bezier: consecutive samples joined by straight lines
pub fn draw_bezier(canvas: &mut Canvas, points: [PixelPoint; 3], thickness: u32, color: Color) {
    let [start, control, end] = points;
    let samples = bezier_samples(start, control, end);

    for pair in samples.windows(2) {
        if let [from, to] = *pair {
            canvas.draw_line(from.round(), to.round(), color, thickness);
        }
    }
}
