//! Interactive review of generated frames
//!
//! Playback is a small state machine over a [`FrameSequence`] driven by
//! [`PlaybackEvent`]s. The window that produces events and shows frames sits
//! behind the [`PlaybackWindow`] trait, so generation never depends on a UI
//! and the loop can be driven by a scripted window in tests.

use crate::canvas::surface::Canvas;
use crate::generation::frames::FrameSequence;
use crate::io::error::{Result, empty_state};
use crate::io::output::OutputTarget;
use std::path::PathBuf;

/// User input understood by the playback loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Show the next frame, wrapping to the first
    Next,
    /// Show the previous frame, wrapping to the last
    Previous,
    /// Export the frame on screen
    Export,
    /// Leave playback immediately
    Quit,
}

/// Outcome of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackControl {
    /// Keep playing
    Continue,
    /// The current frame was written to the given path
    Exported(PathBuf),
    /// Stop without rendering again
    Quit,
}

/// Source of input events and sink for rendered frames
pub trait PlaybackWindow {
    /// Whether the window is still open
    fn is_open(&self) -> bool;

    /// Events received since the last call
    fn poll_events(&mut self) -> Vec<PlaybackEvent>;

    /// Show a frame
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to display the frame
    fn present(&mut self, canvas: &Canvas) -> Result<()>;
}

/// Cursor-driven review of a frame sequence
pub struct Playback<'a> {
    sequence: &'a mut FrameSequence,
    exports: OutputTarget,
}

impl<'a> Playback<'a> {
    /// Playback over a non-empty sequence; exports are named after `exports`
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence holds no frames
    pub fn new(sequence: &'a mut FrameSequence, exports: OutputTarget) -> Result<Self> {
        if sequence.is_empty() {
            return Err(empty_state("start playback", &"frame sequence is empty"));
        }
        Ok(Self { sequence, exports })
    }

    /// Index of the frame on screen
    pub fn position(&self) -> usize {
        self.sequence.position()
    }

    /// Apply one event to the cursor
    ///
    /// # Errors
    ///
    /// Returns an error if navigation fails or an export cannot be written
    pub fn handle(&mut self, event: PlaybackEvent) -> Result<PlaybackControl> {
        match event {
            PlaybackEvent::Next => {
                self.sequence.advance()?;
                Ok(PlaybackControl::Continue)
            }
            PlaybackEvent::Previous => {
                self.sequence.retreat()?;
                Ok(PlaybackControl::Continue)
            }
            PlaybackEvent::Export => {
                let index = self.sequence.position();
                let path = self
                    .sequence
                    .export(index, &self.exports.export_path(index))?;
                Ok(PlaybackControl::Exported(path))
            }
            PlaybackEvent::Quit => Ok(PlaybackControl::Quit),
        }
    }

    /// Show frames until the window closes or a quit event arrives
    ///
    /// Events are handled before each render, so a quit stops the loop
    /// without drawing the current frame again.
    ///
    /// # Errors
    ///
    /// Returns the first navigation, export, decode or display failure
    pub fn run<W: PlaybackWindow>(&mut self, window: &mut W) -> Result<()> {
        while window.is_open() {
            for event in window.poll_events() {
                match self.handle(event)? {
                    PlaybackControl::Quit => {
                        tracing::debug!("playback quit");
                        return Ok(());
                    }
                    PlaybackControl::Exported(path) => {
                        tracing::info!(path = %path.display(), "frame exported from playback");
                    }
                    PlaybackControl::Continue => {}
                }
            }

            let canvas = self.sequence.current()?.load()?;
            window.present(&canvas)?;
        }
        Ok(())
    }
}

#[cfg(feature = "preview")]
pub use window::MinifbWindow;

#[cfg(feature = "preview")]
mod window {
    use super::{PlaybackEvent, PlaybackWindow};
    use crate::canvas::surface::Canvas;
    use crate::io::configuration::PLAYBACK_FPS;
    use crate::io::error::{Result, TileError};
    use minifb::{Key, KeyRepeat, Window, WindowOptions};

    /// Desktop window showing frames; arrows navigate, `E` exports, `X` or
    /// `Escape` quits
    pub struct MinifbWindow {
        window: Window,
        buffer: Vec<u32>,
    }

    impl MinifbWindow {
        /// Open a window sized to the frames
        ///
        /// # Errors
        ///
        /// Returns an error if the window cannot be created
        pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
            let mut window = Window::new(
                title,
                width as usize,
                height as usize,
                WindowOptions::default(),
            )
            .map_err(|e| TileError::Playback {
                reason: e.to_string(),
            })?;
            window.set_target_fps(PLAYBACK_FPS);
            Ok(Self {
                window,
                buffer: Vec::new(),
            })
        }
    }

    impl PlaybackWindow for MinifbWindow {
        fn is_open(&self) -> bool {
            self.window.is_open()
        }

        fn poll_events(&mut self) -> Vec<PlaybackEvent> {
            self.window
                .get_keys_pressed(KeyRepeat::No)
                .into_iter()
                .filter_map(|key| match key {
                    Key::Right => Some(PlaybackEvent::Next),
                    Key::Left => Some(PlaybackEvent::Previous),
                    Key::E => Some(PlaybackEvent::Export),
                    Key::X | Key::Escape => Some(PlaybackEvent::Quit),
                    _ => None,
                })
                .collect()
        }

        fn present(&mut self, canvas: &Canvas) -> Result<()> {
            // minifb expects 0RGB words
            self.buffer.clear();
            self.buffer.extend(canvas.image().pixels().map(|p| {
                let [r, g, b, _] = p.0;
                (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
            }));
            self.window
                .update_with_buffer(
                    &self.buffer,
                    canvas.width() as usize,
                    canvas.height() as usize,
                )
                .map_err(|e| TileError::Playback {
                    reason: e.to_string(),
                })
        }
    }
}
