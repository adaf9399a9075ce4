//! Pattern generation over whole tiles and animation frame management
//!
//! This module contains the tile-level drivers:
//! - Grid and curve patterns walked on a fixed stride
//! - Frame sequences with a wrapping cursor
//! - Manually stamped pixels

/// Ordered frames and playback cursor
pub mod frames;
/// Grid walks, frame counts and position walks
pub mod grid;
/// Manual pixel placement
pub mod stamp;

pub use frames::{Frame, FrameSequence};
pub use grid::{FrameCount, GridPatternGenerator, PositionWalk};
pub use stamp::PixelStamp;
