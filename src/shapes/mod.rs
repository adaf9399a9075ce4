//! Shape configuration and single-shape rasterization

/// Palette, edge flags and validated shape/curve settings
pub mod config;
/// Normalized pixel stickers and regular polygons
pub mod pixel;
/// Grid cell, bezier and arc drawing with drop shadows
pub mod rasterizer;

pub use config::{CurveConfig, EdgeSet, ShapeConfig, TileStyle};
pub use pixel::{PixelShape, PolygonConfig};
pub use rasterizer::ShapeRasterizer;
