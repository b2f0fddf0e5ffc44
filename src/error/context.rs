//! Error context utilities
//!
//! Helpers for attaching context to errors and for downgrading per-file
//! failures to "no information" without aborting the run.

use crate::error::{CodemapError, ErrorSeverity, Result};
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Add file context to an error
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| CodemapError::Context {
            message: format!("{}: {}", context(), err),
        })
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            // walkdir wraps the io error it hit; look one level down as well
            let err_ref: &(dyn std::error::Error + 'static) = &err;
            let io_err = err_ref
                .downcast_ref::<std::io::Error>()
                .or_else(|| err_ref.source().and_then(|source| source.downcast_ref::<std::io::Error>()));
            if let Some(io_err) = io_err {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    return CodemapError::permission_denied(path.as_ref());
                }
            }

            CodemapError::directory_traversal_error(path.as_ref(), err.to_string())
        })
    }
}

/// Downgrade a per-file failure to `None`
///
/// Warnings are logged at debug level and swallowed. Anything more severe is
/// still swallowed here but logged at warn level so it stays visible.
pub fn degrade<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            match err.severity() {
                ErrorSeverity::Warning => tracing::debug!(error = %err, "skipping file contribution"),
                _ => tracing::warn!(error = %err, "skipping file contribution"),
            }
            None
        }
    }
}
