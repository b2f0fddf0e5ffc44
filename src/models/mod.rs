//! Data models and structures for codemap

pub mod analysis;
pub mod config;
pub mod dependency_graph;
pub mod entry_point;
pub mod file_metadata;
pub mod package;

pub use analysis::{CodebaseMap, OverviewStats};
pub use config::Settings;
pub use dependency_graph::{DependencyGraph, DependencyRecord};
pub use entry_point::{EntryCategory, EntryPoint};
pub use file_metadata::{DirectoryEntry, EntryKind};
pub use package::PackageDetails;
