//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::models::config::OutputFormat;

/// codemap - generate a structural map of a codebase as markdown
#[derive(Parser, Debug)]
#[command(name = "codemap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a structural map of a codebase for LLM context")]
#[command(long_about = "codemap walks a directory and prints a single markdown document describing it: \
an overview with file counts, a README excerpt, an annotated file tree, likely entry points, \
one-line module descriptions and an import dependency graph.")]
#[command(after_help = "EXAMPLES:

    # Map the current directory to stdout
    codemap

    # Map a project and save the report
    codemap ./my-project -o CODEMAP.md

    # Shallow tree with a smaller file budget
    codemap ./my-project --max-depth 3 --max-files 100

    # Include a Mermaid diagram of local Python imports
    codemap ./my-project --mermaid

    # Skip the dependency graph and ignore snapshot files
    codemap ./my-project --no-deps --exclude '*.snap'

    # Machine-readable output
    codemap ./my-project --format json

    # Create a default .codemap.toml in the current directory
    codemap --init
")]
pub struct Args {
    /// Directory to map
    #[arg(value_name = "DIRECTORY", help = "Directory to map (defaults to the current directory)")]
    pub directory: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE", help = "Write the map to FILE instead of stdout (parent directories are created)")]
    pub output: Option<PathBuf>,

    /// Maximum tree depth
    #[arg(short = 'd', long, value_name = "N", help = "Deepest directory level shown in the file tree [default: 6]")]
    pub max_depth: Option<usize>,

    /// File budget
    #[arg(short = 'n', long, value_name = "N", help = "Maximum entries listed in the tree and files described [default: 300]")]
    pub max_files: Option<usize>,

    /// Include a Mermaid dependency diagram
    #[arg(long, help = "Append a Mermaid diagram of local Python imports to the dependency graph")]
    pub mermaid: bool,

    /// Skip the dependency graph
    #[arg(long, help = "Leave the dependency graph section out of the report")]
    pub no_deps: bool,

    /// Exclude entries matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob pattern for file or directory names to skip (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", help = "Output format: 'markdown' (default) or 'json'")]
    pub format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .codemap.toml if present)")]
    pub config: Option<PathBuf>,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors and hide the progress spinner")]
    pub quiet: bool,

    /// Show detailed progress
    #[arg(short, long, help = "Log each stage of the scan to stderr")]
    pub verbose: bool,

    /// Disable the progress spinner
    #[arg(long, help = "Disable the progress spinner (useful for CI environments)")]
    pub no_progress: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.codemap.toml) in the current directory")]
    pub init: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
