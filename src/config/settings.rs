//! Validation of merged settings

use crate::error::{CodemapError, Result, ResultExt};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid.
    ///
    /// The scan path is not checked here; a missing target has its own exit
    /// status and is reported by the analyzer.
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.scan_path.as_os_str().is_empty() {
            return Err(CodemapError::config_error("Scan path must not be empty"));
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern)
                .with_context(|| format!("Invalid exclude pattern: {}", pattern))?;
        }

        if let Some(path) = &settings.output_file {
            if path.as_os_str().is_empty() {
                return Err(CodemapError::config_error("Output file path must not be empty"));
            }
            if path.is_dir() {
                return Err(CodemapError::config_error(format!(
                    "Output path is a directory: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}
