//! Procedural sprite-sheet tile generation
//!
//! Tiles are drawn onto an in-memory canvas and persisted as PNG files:
//! grid borders with optional drop shadows, quadratic bezier decorations,
//! normalized pixel stickers tiled across the canvas and regular polygons.
//! Animated patterns are written one PNG per frame and can be reviewed with
//! an interactive playback loop.

#![forbid(unsafe_code)]

/// Pixel buffer, colors and drawing primitives
pub mod canvas;
/// Grid walks, frame sequences and pixel stamps
pub mod generation;
/// Command line, configuration, errors, output and playback
pub mod io;
/// Shape configurations and rasterizers built on the canvas
pub mod shapes;

pub use io::error::{Result, TileError};
