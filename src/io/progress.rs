//! Progress display for a generation run

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PASS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for one generation run
///
/// The bar length is the number of flood passes, which dominate runtime;
/// scattering, border rendering, and encoding are reported through the
/// message text.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter sized to the flood pass count
    pub fn new(flood_passes: usize) -> Self {
        let bar = ProgressBar::new(flood_passes as u64);
        bar.set_style(PASS_STYLE.clone());
        bar.set_message("scattering seeds");
        Self { bar }
    }

    /// Record one completed flood pass at the given step size
    pub fn flood_pass_done(&self, step: usize) {
        self.bar.set_message(format!("flooding (step {step})"));
        self.bar.inc(1);
    }

    /// Announce that the raster is being encoded
    pub fn encoding(&self) {
        self.bar.set_message("encoding output");
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
