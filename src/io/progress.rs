//! Progress display for the refinement and mixing phases

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across the generation phases
///
/// One bar tracks refinement levels, a second tracks backbite mixing. Both
/// live under a single `MultiProgress` so the display stays stable when the
/// phases hand over.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    level_bar: ProgressBar,
    mixing_bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create the display for the given number of refinement levels
    pub fn new(levels: usize) -> Self {
        let multi_progress = MultiProgress::new();
        let level_bar = multi_progress.add(ProgressBar::new(levels as u64));
        level_bar.set_style(PHASE_STYLE.clone());
        level_bar.set_message("Refining");

        Self {
            multi_progress,
            level_bar,
            mixing_bar: None,
        }
    }

    /// Record one completed refinement level
    pub fn complete_level(&self) {
        self.level_bar.inc(1);
    }

    /// Switch the display to the mixing phase
    pub fn start_mixing(&mut self, steps: usize) {
        self.level_bar.finish_with_message("Refined");
        let bar = self.multi_progress.add(ProgressBar::new(steps as u64));
        bar.set_style(PHASE_STYLE.clone());
        bar.set_message("Mixing");
        self.mixing_bar = Some(bar);
    }

    /// Record a chunk of completed backbite steps
    pub fn mixing_progress(&self, steps: u64) {
        if let Some(ref bar) = self.mixing_bar {
            bar.inc(steps);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.mixing_bar {
            bar.finish_with_message("Mixed");
        }
        let _ = self.multi_progress.clear();
    }
}
