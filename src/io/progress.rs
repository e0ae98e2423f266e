//! Terminal progress display for the stages of a mosaic run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::render::pipeline::{PipelineObserver, Stage};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:<24}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Shows one progress line per pipeline stage
///
/// Row-based stages (sampling and rendering) get a bar sized to the grid
/// height; the remaining stages show a spinner until they finish.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    active: Option<(Stage, ProgressBar)>,
    completed: Vec<Stage>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active stage
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            active: None,
            completed: Vec::new(),
        }
    }

    /// Stage currently being displayed
    pub fn active_stage(&self) -> Option<Stage> {
        self.active.as_ref().map(|(stage, _)| *stage)
    }

    /// Stages that have finished, in order
    pub fn completed_stages(&self) -> &[Stage] {
        &self.completed
    }

    /// Clear all progress lines
    pub fn finish(&self) {
        let _ = self.multi_progress.clear();
    }

    const fn is_row_based(stage: Stage) -> bool {
        matches!(stage, Stage::Sample | Stage::Render)
    }
}

impl PipelineObserver for ProgressManager {
    fn stage_started(&mut self, stage: Stage, total: usize) {
        let bar = if Self::is_row_based(stage) {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(STAGE_STYLE.clone());
            bar
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(STEP_STYLE.clone());
            bar
        };
        bar.set_message(stage.label());
        self.active = Some((stage, self.multi_progress.add(bar)));
    }

    fn row_completed(&mut self, stage: Stage, _row: usize) {
        if let Some((active, bar)) = &self.active
            && *active == stage
        {
            bar.inc(1);
        }
    }

    fn stage_finished(&mut self, stage: Stage) {
        if let Some((active, bar)) = self.active.take() {
            if active == stage {
                bar.finish_with_message(format!("✓ {}", stage.label()));
            } else {
                self.active = Some((active, bar));
            }
        }
        self.completed.push(stage);
    }
}
