//! Shared helpers

pub mod text;

pub use text::{read_source, read_text_prefix, README_READ_LIMIT, SOURCE_READ_LIMIT};
