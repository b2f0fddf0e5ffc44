//! Core functionality for walking and mapping a directory

pub mod analyzer;
pub mod interrupt;
pub mod stats;
pub mod tree;
pub mod walker;

pub use analyzer::Analyzer;
pub use tree::TreeRenderer;
pub use walker::{SkipRules, Walker};
