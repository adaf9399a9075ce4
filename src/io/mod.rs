//! Command line, configuration, errors and everything that touches the disk
//! or the terminal

/// Command-line parsing and the generation runner
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Output directory and file naming
pub mod output;
/// Interactive frame review
pub mod playback;
/// Terminal progress bars
pub mod progress;
