//! Bounded text reading shared by every stage

use crate::error::{CodemapError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes read from a source file for classification and import extraction
pub const SOURCE_READ_LIMIT: usize = 8192;

/// Bytes read from a README for the excerpt
pub const README_READ_LIMIT: usize = 1200;

/// Read at most `max_bytes` of `path` as UTF-8 text.
///
/// A multi-byte character cut by the limit is dropped rather than treated as
/// invalid; any other invalid sequence fails with [`CodemapError::Undecodable`].
pub fn read_text_prefix(path: &Path, max_bytes: usize) -> Result<String> {
    let file = File::open(path).map_err(|e| CodemapError::read_error(path, e))?;

    let mut buffer = Vec::with_capacity(max_bytes.min(64 * 1024));
    file.take(max_bytes as u64)
        .read_to_end(&mut buffer)
        .map_err(|e| CodemapError::read_error(path, e))?;

    match String::from_utf8(buffer) {
        Ok(text) => Ok(text),
        Err(err) => {
            let utf8_error = err.utf8_error();
            // error_len() is None only when the input ends mid-sequence
            if utf8_error.error_len().is_none() {
                let valid = utf8_error.valid_up_to();
                let mut bytes = err.into_bytes();
                bytes.truncate(valid);
                String::from_utf8(bytes).map_err(|_| CodemapError::Undecodable {
                    path: path.to_path_buf(),
                })
            } else {
                Err(CodemapError::Undecodable {
                    path: path.to_path_buf(),
                })
            }
        }
    }
}

/// Read a source file with the standard limit
pub fn read_source(path: &Path) -> Result<String> {
    read_text_prefix(path, SOURCE_READ_LIMIT)
}
