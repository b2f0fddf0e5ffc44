//! Error types and definitions for codemap
//!
//! Fatal conditions (bad root, interrupt, configuration and output failures)
//! surface as [`CodemapError`]. Per-file failures are produced with the same
//! type but are downgraded to "no information" by the stage that hit them.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - the file or directory is skipped
    Warning,
    /// Error level - the run fails with a generic exit status
    Error,
    /// Critical level - the run fails with a dedicated exit status
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for codemap operations
#[derive(Debug, Error)]
pub enum CodemapError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Target directory does not exist
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Target exists but is not a directory
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Run aborted by the user
    #[error("Aborted.")]
    Interrupted,

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Reading a file failed for a reason other than permissions
    #[error("Error reading {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8 text
    #[error("{path} is not valid UTF-8 text")]
    Undecodable { path: PathBuf },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// JSON parsing errors with file context
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// TOML manifest parsing errors
    #[error("TOML parsing error in {file}: {source}")]
    TomlParse {
        file: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Structurally valid manifest with an unexpected shape
    #[error("Invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// Python source could not be parsed
    #[error("Could not parse Python source: {message}")]
    SourceParse { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Errors wrapped with a caller-supplied message
    #[error("{message}")]
    Context { message: String },
}

impl CodemapError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - the offending file contributes nothing
            CodemapError::PermissionDenied { .. } => ErrorSeverity::Warning,
            CodemapError::FileRead { .. } => ErrorSeverity::Warning,
            CodemapError::Undecodable { .. } => ErrorSeverity::Warning,
            CodemapError::DirectoryTraversal { .. } => ErrorSeverity::Warning,
            CodemapError::JsonParse { .. } => ErrorSeverity::Warning,
            CodemapError::TomlParse { .. } => ErrorSeverity::Warning,
            CodemapError::InvalidManifest { .. } => ErrorSeverity::Warning,
            CodemapError::SourceParse { .. } => ErrorSeverity::Warning,

            // Critical errors - dedicated exit codes
            CodemapError::DirectoryNotFound { .. } => ErrorSeverity::Critical,
            CodemapError::NotADirectory { .. } => ErrorSeverity::Critical,
            CodemapError::Interrupted => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CodemapError::DirectoryNotFound { .. } | CodemapError::NotADirectory { .. } => 1,
            CodemapError::Interrupted => 130,
            _ => 2,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CodemapError::PermissionDenied { path } => {
                format!("permission denied - {}", path.display())
            }
            CodemapError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Run `codemap --init` to create one.",
                    path.display()
                )
            }
            CodemapError::OutputWrite { path, source } => {
                format!("Could not write map to '{}': {}", path.display(), source)
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        CodemapError::Io { source }
    }

    /// Create a read error for a specific file, mapping permission failures
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            CodemapError::PermissionDenied { path }
        } else {
            CodemapError::FileRead { path, source }
        }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        CodemapError::JsonParse {
            file: file.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        CodemapError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        CodemapError::PermissionDenied { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CodemapError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CodemapError {
    fn from(err: std::io::Error) -> Self {
        CodemapError::io_error(err)
    }
}

impl From<glob::PatternError> for CodemapError {
    fn from(err: glob::PatternError) -> Self {
        CodemapError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for CodemapError {
    fn from(err: serde_json::Error) -> Self {
        CodemapError::JsonSerialize { source: err }
    }
}

/// Result type alias for codemap operations
pub type Result<T> = std::result::Result<T, CodemapError>;
