//! Output writing functionality
//!
//! This module provides writers for different output destinations.

use crate::error::{CodemapError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output; the report is followed by a newline
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", content)
            .and_then(|_| handle.flush())
            .map_err(|e| CodemapError::StdoutWrite { source: e })
    }
}

/// Writer for file output. Parent directories are created and an existing
/// file is overwritten; the content is written exactly as given.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn output_error(&self, source: io::Error) -> CodemapError {
        CodemapError::OutputWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.output_error(e))?;
            }
        }

        fs::write(&self.path, content).map_err(|e| self.output_error(e))
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<&Path>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}
