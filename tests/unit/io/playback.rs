//! Tests for the playback state machine driven by a scripted window

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use tileforge::canvas::{Canvas, Color};
    use tileforge::generation::{Frame, FrameSequence};
    use tileforge::io::output::OutputTarget;
    use tileforge::io::playback::{Playback, PlaybackControl, PlaybackEvent, PlaybackWindow};
    use tileforge::{Result, TileError};

    // Replays one batch of events per poll and records what was shown
    struct ScriptedWindow {
        batches: VecDeque<Vec<PlaybackEvent>>,
        shown: Vec<u8>,
    }

    impl ScriptedWindow {
        fn new(batches: Vec<Vec<PlaybackEvent>>) -> Self {
            Self {
                batches: batches.into(),
                shown: Vec::new(),
            }
        }
    }

    impl PlaybackWindow for ScriptedWindow {
        fn is_open(&self) -> bool {
            !self.batches.is_empty()
        }

        fn poll_events(&mut self) -> Vec<PlaybackEvent> {
            self.batches.pop_front().unwrap_or_default()
        }

        fn present(&mut self, canvas: &Canvas) -> Result<()> {
            self.shown.push(canvas.background().red());
            Ok(())
        }
    }

    fn sequence() -> FrameSequence {
        (0..3u8)
            .map(|shade| Frame::Buffer(Canvas::new(2, 2, Color::rgb(shade, 0, 0)).unwrap()))
            .collect()
    }

    fn exports() -> OutputTarget {
        OutputTarget::new("unused", "tile.png").unwrap()
    }

    // Tests playback refuses an empty sequence
    // Verified by deferring the check to the first navigation
    #[test]
    fn test_empty_sequence_rejected() {
        let mut empty = FrameSequence::new();
        assert!(matches!(
            Playback::new(&mut empty, exports()),
            Err(TileError::EmptyState { .. })
        ));
    }

    // Tests navigation events move the cursor with wrap-around
    // Verified by ignoring previous events
    #[test]
    fn test_navigation_events() {
        let mut frames = sequence();
        let mut playback = Playback::new(&mut frames, exports()).unwrap();

        assert_eq!(
            playback.handle(PlaybackEvent::Previous).unwrap(),
            PlaybackControl::Continue
        );
        assert_eq!(playback.position(), 2);
        playback.handle(PlaybackEvent::Next).unwrap();
        assert_eq!(playback.position(), 0);
        assert_eq!(
            playback.handle(PlaybackEvent::Quit).unwrap(),
            PlaybackControl::Quit
        );
    }

    // Tests the loop renders after each batch of events
    // Verified by rendering before handling events
    #[test]
    fn test_run_renders_current_frame() {
        let mut frames = sequence();
        let mut window = ScriptedWindow::new(vec![
            vec![],
            vec![PlaybackEvent::Next],
            vec![PlaybackEvent::Next, PlaybackEvent::Next],
        ]);
        Playback::new(&mut frames, exports())
            .unwrap()
            .run(&mut window)
            .unwrap();

        assert_eq!(window.shown, vec![0, 1, 0]);
        assert_eq!(frames.position(), 0);
    }

    // Tests quit stops the loop without rendering again
    // Verified by presenting before returning
    #[test]
    fn test_quit_stops_immediately() {
        let mut frames = sequence();
        let mut window = ScriptedWindow::new(vec![
            vec![PlaybackEvent::Next],
            vec![PlaybackEvent::Quit, PlaybackEvent::Next],
            vec![PlaybackEvent::Next],
        ]);
        Playback::new(&mut frames, exports())
            .unwrap()
            .run(&mut window)
            .unwrap();

        assert_eq!(window.shown, vec![1]);
        assert_eq!(frames.position(), 1);
        assert_eq!(window.batches.len(), 1);
    }

    // Tests export writes the frame on screen to the export path
    // Verified by exporting the first frame
    #[test]
    fn test_export_current_frame() {
        let dir = tempfile::tempdir().unwrap();
        let mut frames = sequence();
        let target = OutputTarget::new(dir.path(), "tile.png").unwrap();
        let mut playback = Playback::new(&mut frames, target).unwrap();

        playback.handle(PlaybackEvent::Next).unwrap();
        let control = playback.handle(PlaybackEvent::Export).unwrap();

        let expected = dir.path().join("tile_export_1.png");
        assert_eq!(control, PlaybackControl::Exported(expected.clone()));
        let exported = Canvas::open_png(&expected).unwrap();
        assert_eq!(exported.pixel(0, 0), Some(Color::rgb(1, 0, 0)));
    }
}
