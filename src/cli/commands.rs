//! Command implementations

use super::Args;
use crate::config::{load_config, CliArgs, ConfigSource, FileConfig};
use crate::core::Analyzer;
use crate::error::{CodemapError, Result};
use crate::output::{create_formatter, create_writer, ProgressReporter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Map the target directory
    Map(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Map(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Map(args) => {
                let settings = load_config(CliArgs::from_args(args))?;
                tracing::debug!(?settings, "resolved settings");

                let progress = ProgressReporter::new(!settings.quiet && settings.show_progress);
                let map = Analyzer::new(&settings)?.analyze_with_progress(|stage| progress.stage(stage))?;

                progress.stage("Rendering report");
                let rendered = create_formatter(&settings).format(&map)?;
                progress.finish(&format!("Mapped {} files", map.overview.total_files));

                create_writer(settings.output_file.as_deref()).write(&rendered)?;

                if let Some(path) = &settings.output_file {
                    eprintln!("Map written to: {}", path.display());
                }

                Ok(())
            }
            Command::Init => {
                let config = FileConfig::new();

                if config.is_available() {
                    eprintln!(
                        "Configuration file already exists at: {}",
                        config.path().display()
                    );
                    eprintln!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                config.create_default()?;

                eprintln!(
                    "Created default configuration file at: {}",
                    config.path().display()
                );
                Ok(())
            }
        }
    }

    /// Run the command and turn failures into an exit status
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(CodemapError::Interrupted) => {
                eprintln!("\n{}", CodemapError::Interrupted);
                CodemapError::Interrupted.exit_code()
            }
            Err(err) => {
                eprintln!("Error: {}", err.user_message());
                err.exit_code()
            }
        }
    }
}
