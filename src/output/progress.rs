//! Progress reporting on stderr
//!
//! A single spinner names the stage currently running. Stage names are also
//! logged at info level so `--verbose` runs leave a trace even when the
//! spinner is hidden (stderr not a terminal, `--no-progress`).

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {msg}";

/// Progress reporter for the mapping stages
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; a disabled one only logs
    pub fn new(enabled: bool) -> Self {
        let spinner = if enabled {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
                spinner.set_style(style);
            }
            spinner.enable_steady_tick(Duration::from_millis(100));
            Some(spinner)
        } else {
            None
        };

        Self { spinner }
    }

    /// Announce the stage that is starting
    pub fn stage(&self, message: &str) {
        tracing::info!(stage = message, "starting stage");
        if let Some(spinner) = &self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    /// Clear the spinner once the report is ready
    pub fn finish(&self, message: &str) {
        tracing::info!("{}", message);
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        // runs that fail part-way never reach finish()
        if let Some(spinner) = &self.spinner {
            if !spinner.is_finished() {
                spinner.finish_and_clear();
            }
        }
    }
}
