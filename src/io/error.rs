//! Error types and context management for tile generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tile generation operations
#[derive(Debug)]
pub enum TileError {
    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode a canvas to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Configuration value rejected before any mutation took place
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operation requested on a shape or sequence with nothing in it
    ///
    /// Occurs when:
    /// - Navigating a frame sequence that holds no frames
    /// - Drawing a pixel shape whose coordinate set is empty
    EmptyState {
        /// Operation that was attempted
        operation: &'static str,
        /// Description of the empty state
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Generation of a single animation frame failed
    Frame {
        /// Zero-based index of the frame being produced
        index: usize,
        /// Error that aborted the frame
        source: Box<TileError>,
    },

    /// Preview window backend failure
    Playback {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyState { operation, reason } => {
                write!(f, "Cannot {operation}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Frame { index, source } => {
                write!(f, "Frame {index} failed: {source}")
            }
            Self::Playback { reason } => {
                write!(f, "Playback error: {reason}")
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Frame { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for tile generation results
pub type Result<T> = std::result::Result<T, TileError>;

/// Enriches errors with the generation state they occurred in
pub trait WithContext<T> {
    /// Mark the error as belonging to the given animation frame
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`TileError::Frame`]
    fn for_frame(self, index: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<TileError>,
{
    fn for_frame(self, index: usize) -> Result<T> {
        self.map_err(|e| match e.into() {
            // Already attributed errors keep their original frame
            framed @ TileError::Frame { .. } => framed,
            other => TileError::Frame {
                index,
                source: Box::new(other),
            },
        })
    }
}

impl From<image::ImageError> for TileError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an empty state error
pub fn empty_state(operation: &'static str, reason: &impl ToString) -> TileError {
    TileError::EmptyState {
        operation,
        reason: reason.to_string(),
    }
}
