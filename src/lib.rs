//! codemap - a structural map of a codebase for automated readers
//!
//! This library walks a directory and collects an overview, an annotated file
//! tree, likely entry points, one-line module descriptions and an import
//! dependency graph, then renders them as a single markdown document.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use error::{CodemapError, ErrorSeverity, Result, ResultExt};
pub use models::{
    analysis::{CodebaseMap, OverviewStats},
    config::Settings,
    dependency_graph::{DependencyGraph, DependencyRecord},
    entry_point::{EntryCategory, EntryPoint},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
