//! Parsing functionality for source files and manifests
//!
//! Python sources are parsed with tree-sitter; JavaScript family imports are
//! matched textually; package manifests are read with serde_json and toml.

pub mod classifier;
pub mod comments;
pub mod dependency_graph_builder;
pub mod entry_points;
pub mod js_imports;
pub mod manifest;
pub mod package_json;
pub mod python;

pub use classifier::{FileClassifier, BINARY_OR_UNREADABLE};
pub use dependency_graph_builder::DependencyGraphBuilder;
pub use entry_points::{EntryPointDetector, ENTRY_POINT_NAMES};
pub use package_json::PackageJsonParser;
pub use python::PythonParser;
