//! Search progress spinner

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::solver::{SearchObserver, SearchProgress};

/// Shows search progress on a terminal spinner
pub struct SpinnerObserver {
    bar: ProgressBar,
}

impl SpinnerObserver {
    /// Start a spinner labelled with the algorithm name
    ///
    /// # Panics
    ///
    /// Panics if the spinner template is invalid.
    #[must_use]
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {prefix} {msg} [{elapsed}]")
                .unwrap(),
        );
        bar.set_prefix(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SearchObserver for SpinnerObserver {
    fn on_progress(&mut self, progress: SearchProgress) {
        self.bar.set_message(format!(
            "{} expanded, {} queued, {} seen",
            progress.expanded, progress.frontier, progress.visited
        ));
    }
}

impl Drop for SpinnerObserver {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
