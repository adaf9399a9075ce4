//! Terminal progress display for frame generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} frames"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking frames written for one output
pub struct FrameProgress {
    bar: ProgressBar,
}

impl FrameProgress {
    /// Bar for `total` frames labelled with the output name
    pub fn new(label: &str, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Hidden bar, for quiet runs
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record that frame `index` has been written
    pub fn frame_done(&self, index: usize) {
        self.bar.set_position(index as u64 + 1);
    }

    /// Frames recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and remove the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
