//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{CodemapError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".codemap.toml";

/// Prefix of the environment variables read by [`EnvConfig`]
pub const ENV_PREFIX: &str = "CODEMAP";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
}

impl FileConfig {
    /// File source for `.codemap.toml` in the working directory
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
        }
    }

    /// The first existing file among the default locations
    pub fn discover() -> Option<Self> {
        parser::default_config_locations()
            .into_iter()
            .find(|candidate| candidate.is_file())
            .map(Self::with_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the default configuration template at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(CodemapError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
}

impl EnvConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn parse_number(&self, key: &str) -> Result<Option<usize>> {
        match self.var(key) {
            Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
                CodemapError::config_error(format!(
                    "{}_{} must be a non-negative integer, got '{}'",
                    self.prefix, key, raw
                ))
            }),
            None => Ok(None),
        }
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = self.var("SCAN_PATH") {
            settings.scan_path = Some(PathBuf::from(path));
        }

        if let Some(exclude) = self.var("EXCLUDE") {
            settings.exclude_patterns = Some(
                exclude
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }

        settings.max_depth = self.parse_number("MAX_DEPTH")?;
        settings.max_files = self.parse_number("MAX_FILES")?;

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            settings.output_format = Some(format.parse().map_err(CodemapError::config_error)?);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ["SCAN_PATH", "EXCLUDE", "MAX_DEPTH", "MAX_FILES", "OUTPUT_FORMAT"]
            .iter()
            .any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
