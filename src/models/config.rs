//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default tree depth limit
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Default file budget shared by the tree and the module descriptions
pub const DEFAULT_MAX_FILES: usize = 300;

/// Main configuration settings for codemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory to map
    pub scan_path: PathBuf,

    /// Extra glob patterns; matching entry names are skipped everywhere
    pub exclude_patterns: Vec<String>,

    /// Maximum directory depth rendered in the file tree
    pub max_depth: usize,

    /// Maximum number of entries listed in the tree and files described
    pub max_files: usize,

    /// Output format (markdown or json)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to include the Mermaid dependency diagram
    pub mermaid: bool,

    /// Whether to skip the dependency graph section entirely
    pub no_deps: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to show the progress spinner
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            exclude_patterns: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_files: DEFAULT_MAX_FILES,
            output_format: OutputFormat::Markdown,
            output_file: None,
            mermaid: false,
            no_deps: false,
            quiet: false,
            verbose: false,
            show_progress: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown report
    Markdown,
    /// JSON dump of the collected map
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub max_files: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub mermaid: Option<bool>,
    pub no_deps: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.scan_path.is_some() {
            self.scan_path = other.scan_path;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.max_files.is_some() {
            self.max_files = other.max_files;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.mermaid.is_some() {
            self.mermaid = other.mermaid;
        }
        if other.no_deps.is_some() {
            self.no_deps = other.no_deps;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let defaults = Settings::default();

        Settings {
            scan_path: self.scan_path.clone().unwrap_or(defaults.scan_path),
            exclude_patterns: self
                .exclude_patterns
                .clone()
                .unwrap_or(defaults.exclude_patterns),
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            max_files: self.max_files.unwrap_or(defaults.max_files),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            output_file: self.output_file.clone().or(defaults.output_file),
            mermaid: self.mermaid.unwrap_or(defaults.mermaid),
            no_deps: self.no_deps.unwrap_or(defaults.no_deps),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            show_progress: self.show_progress.unwrap_or(defaults.show_progress),
        }
    }
}
