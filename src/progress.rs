//! Progress bar display for batch fetches

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "[{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Progress display for batch fetches
///
/// Draws to stderr and stays invisible when stderr is not a terminal.
pub struct ProgressDisplay {
    bar: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total dependency count
    pub fn new(total: usize) -> Self {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total as u64);
        bar.set_style(style);
        Self { bar }
    }

    /// A display that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show the dependency currently being fetched
    pub fn start(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Count one dependency as done
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
