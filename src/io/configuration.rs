//! Rendering constants and runtime configuration defaults

use crate::canvas::color::Color;

// Tile geometry
/// Default tile width and height in pixels
pub const DEFAULT_TILE_SIZE: u32 = 32;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;

/// Diagonal pixel offset of the drop shadow drawn under popped shapes
pub const SHADOW_OFFSET: i32 = 5;

// Piecewise-linear approximation of quadratic curves
/// Number of parameter samples taken along a bezier curve (t = 0.00 ..= 1.00)
pub const BEZIER_SAMPLES: usize = 101;

// Default palette
/// Background fill used when none is given
pub const DEFAULT_BACKGROUND: Color = Color::rgb(255, 255, 255);
/// Line color used when none is given
pub const DEFAULT_LINE_COLOR: Color = Color::rgb(0, 0, 0);
/// Translucent black used for shadows
pub const DEFAULT_SHADOW_COLOR: Color = Color::rgba(0, 0, 0, 100);

// Pixel sticker defaults
/// Radius of rounded sticker pixels
pub const DEFAULT_STICKER_RADIUS: u32 = 2;
/// Default number of sticker copies along each axis
pub const DEFAULT_REPEAT_COUNT: u32 = 5;
/// Default pixel spacing between sticker copies
pub const DEFAULT_REPEAT_SPACING: u32 = 4;

// Polygons
/// Fewest sides a regular polygon may have
pub const MIN_POLYGON_SIDES: u32 = 3;
/// Default normalized polygon radius
pub const DEFAULT_POLYGON_RADIUS: f64 = 0.4;

// Output settings
/// Directory generated assets are written into
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "outputted_assets";
/// File name used when the caller does not name the output
pub const DEFAULT_OUTPUT_FILE: &str = "tile.png";
/// The only accepted persisted format
pub const OUTPUT_EXTENSION: &str = "png";
/// Infix between base name and frame index in animation file names
pub const FRAME_INFIX: &str = "_frame_";
/// Infix between base name and frame index in exported frame file names
pub const EXPORT_INFIX: &str = "_export_";

// Progress display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Playback settings
/// Frames per second of the interactive preview loop
pub const PLAYBACK_FPS: usize = 10;
