//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
}

/// Flags lifted out of [`Args`]; `None` and `false` mean "not given"
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub exclude: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub max_files: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub mermaid: bool,
    pub no_deps: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    pub fn from_args(args: &Args) -> Self {
        Self {
            path: args.directory.clone(),
            exclude: if args.exclude.is_empty() {
                None
            } else {
                Some(args.exclude.clone())
            },
            max_depth: args.max_depth,
            max_files: args.max_files,
            output_format: args.format,
            output_file: args.output.clone(),
            mermaid: args.mermaid,
            no_deps: args.no_deps,
            quiet: args.quiet,
            verbose: args.verbose,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
        }
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let args = &self.args;
        let mut settings = PartialSettings {
            scan_path: args.path.clone(),
            exclude_patterns: args.exclude.clone(),
            max_depth: args.max_depth,
            max_files: args.max_files,
            output_format: args.output_format,
            output_file: args.output_file.clone(),
            ..Default::default()
        };

        // Boolean flags only ever switch a behaviour on
        if args.mermaid {
            settings.mermaid = Some(true);
        }
        if args.no_deps {
            settings.no_deps = Some(true);
        }
        if args.quiet {
            settings.quiet = Some(true);
        }
        if args.verbose {
            settings.verbose = Some(true);
        }
        if args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}
