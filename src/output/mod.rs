//! Output formatting and writing functionality

mod formatters;
mod progress;
#[cfg(test)]
mod tests;
mod writers;

pub use self::formatters::{format_map_json, format_map_markdown, mermaid_diagram};
pub use self::progress::ProgressReporter;
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::analysis::CodebaseMap;
use crate::models::config::{OutputFormat, Settings};

/// Trait for different output formatters
pub trait Formatter {
    /// Format a collected map into a string
    fn format(&self, map: &CodebaseMap) -> Result<String>;
}

/// Markdown report for people and language models
pub struct MarkdownFormatter {
    pub mermaid: bool,
}

impl MarkdownFormatter {
    pub fn new(mermaid: bool) -> Self {
        Self { mermaid }
    }
}

impl Formatter for MarkdownFormatter {
    fn format(&self, map: &CodebaseMap) -> Result<String> {
        Ok(format_map_markdown(map, self.mermaid))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, map: &CodebaseMap) -> Result<String> {
        format_map_json(map, self.pretty)
    }
}

/// Create a formatter based on the configured output format
pub fn create_formatter(settings: &Settings) -> Box<dyn Formatter> {
    match settings.output_format {
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(settings.mermaid)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}
