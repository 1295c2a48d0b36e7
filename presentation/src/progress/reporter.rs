//! Spinner shown while a question is being answered

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Reports that work is in progress with a terminal spinner.
///
/// A disabled reporter draws nothing, so callers need no branching for `-q`.
pub struct ProgressReporter {
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start a spinner with `message`; finish it with [`ProgressReporter::finish`].
    pub fn start(&self, message: &str) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    pub fn finish(&self, spinner: Option<ProgressBar>) {
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_reporter_draws_nothing() {
        let reporter = ProgressReporter::new(false);
        let spinner = reporter.start("考え中...");
        assert!(spinner.is_none());
        reporter.finish(spinner);
    }
}
