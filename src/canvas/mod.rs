//! Raster surface, colors and coordinate types
//!
//! This module contains the drawing layer every generator writes into:
//! - Validated RGB/RGBA colors
//! - Pixel and normalized points, bounding boxes
//! - The canvas with its line, ellipse, arc and polygon primitives

/// Validated color values
pub mod color;
/// Points and bounding boxes
pub mod geometry;
/// Pixel buffer and drawing primitives
pub mod surface;

pub use color::Color;
pub use geometry::{NormalizedPoint, PixelPoint, Point, Rect};
pub use surface::Canvas;
