//! Error handling for codemap
//!
//! Error types, the result alias, and context utilities.

pub mod context;
#[cfg(test)]
mod tests;
pub mod types;

pub use context::{degrade, ResultExt};
pub use types::{CodemapError, ErrorSeverity, Result};
