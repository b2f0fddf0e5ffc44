//! Configuration management

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use parser::{create_default_config, default_config_locations, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;
}

/// Configuration builder for merging multiple sources
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge settings from a partial configuration; later merges win
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if !source.is_available() {
            return Ok(self);
        }
        tracing::debug!(source = source.name(), "loading configuration");
        Ok(self.merge(source.load()?))
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

/// Load configuration from every source with precedence
/// defaults < config file < environment < command line
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let cli = CliConfig::new(cli_args);
    let mut builder = ConfigBuilder::new();

    match cli.config_path() {
        // an explicitly named file must exist and parse
        Some(path) => {
            builder = builder.merge(FileConfig::with_path(path).load()?);
        }
        None => {
            if let Some(source) = FileConfig::discover() {
                match source.load() {
                    Ok(partial) => builder = builder.merge(partial),
                    Err(err) => tracing::warn!("ignoring {}: {}", source.name(), err),
                }
            }
        }
    }

    builder = builder.load_from(&EnvConfig::new(env_prefix))?;
    builder = builder.load_from(&cli)?;

    builder.build()
}
