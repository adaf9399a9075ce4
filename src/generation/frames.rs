//! Ordered animation frames with a wrapping playback cursor

use crate::canvas::surface::Canvas;
use crate::io::error::{Result, TileError, empty_state, invalid_parameter};
use std::path::{Path, PathBuf};

/// One rendered frame, either persisted or held in memory
#[derive(Debug, Clone)]
pub enum Frame {
    /// Frame written to a PNG file
    File(PathBuf),
    /// Frame kept as a canvas
    Buffer(Canvas),
}

impl Frame {
    /// Decode or clone the frame's pixels
    ///
    /// # Errors
    ///
    /// Returns an error if a file frame cannot be decoded
    pub fn load(&self) -> Result<Canvas> {
        match self {
            Self::File(path) => Canvas::open_png(path),
            Self::Buffer(canvas) => Ok(canvas.clone()),
        }
    }

    /// Path of a persisted frame
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Buffer(_) => None,
        }
    }
}

/// Frames in generation order plus a cursor for sequential review
///
/// Navigation wraps in both directions. Every navigation call on an empty
/// sequence is an error.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    cursor: usize,
}

impl FrameSequence {
    /// Empty sequence
    pub const fn new() -> Self {
        Self {
            frames: Vec::new(),
            cursor: 0,
        }
    }

    /// Add a frame at the end
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence holds no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Cursor position
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Frame at an index, independent of the cursor
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// All frames in order
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Frame under the cursor
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty
    pub fn current(&self) -> Result<&Frame> {
        self.frames
            .get(self.cursor)
            .ok_or_else(|| empty_state("read current frame", &"frame sequence is empty"))
    }

    /// Move the cursor forward, wrapping from the last frame to the first
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty
    pub fn advance(&mut self) -> Result<&Frame> {
        let len = self.non_empty_len("advance")?;
        self.cursor = (self.cursor + 1) % len;
        self.current()
    }

    /// Move the cursor back, wrapping from the first frame to the last
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty
    pub fn retreat(&mut self) -> Result<&Frame> {
        let len = self.non_empty_len("retreat")?;
        self.cursor = (self.cursor + len - 1) % len;
        self.current()
    }

    /// Persist frame `index` as a standalone PNG, regardless of the cursor
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `index` is out of range
    /// - The frame cannot be decoded
    /// - The destination directory or file cannot be written
    pub fn export(&self, index: usize, destination: &Path) -> Result<PathBuf> {
        let frame = self.frames.get(index).ok_or_else(|| {
            invalid_parameter(
                "index",
                &index,
                &format!("sequence holds {} frames", self.frames.len()),
            )
        })?;

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        frame.load()?.save_png(destination)?;
        tracing::info!(index, path = %destination.display(), "exported frame");
        Ok(destination.to_path_buf())
    }

    fn non_empty_len(&self, operation: &'static str) -> Result<usize> {
        if self.frames.is_empty() {
            return Err(empty_state(operation, &"frame sequence is empty"));
        }
        Ok(self.frames.len())
    }
}

impl FromIterator<Frame> for FrameSequence {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
