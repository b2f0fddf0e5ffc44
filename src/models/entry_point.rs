//! Entry point records

use serde::{Serialize, Serializer};
use std::fmt;

/// Why a file was considered an execution starting point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryCategory {
    Docker,
    Build,
    Package,
    WebServer,
    ScriptFramework,
    GenericScript,
    ScriptGuard,
    NodeMain,
    NodeConfig,
    CliBinary,
}

impl EntryCategory {
    /// Label used in the report and for ordering
    pub fn label(&self) -> &'static str {
        match self {
            EntryCategory::Docker => "docker",
            EntryCategory::Build => "build",
            EntryCategory::Package => "package",
            EntryCategory::WebServer => "web-server",
            EntryCategory::ScriptFramework => "script-framework",
            EntryCategory::GenericScript => "generic-script",
            EntryCategory::ScriptGuard => "script-guard",
            EntryCategory::NodeMain => "node-main",
            EntryCategory::NodeConfig => "node-config",
            EntryCategory::CliBinary => "cli-binary",
        }
    }

    /// Categorize a canonical entry-point filename
    pub fn from_filename(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dockerfile" | "docker-compose.yml" | "docker-compose.yaml" => EntryCategory::Docker,
            "makefile" => EntryCategory::Build,
            "setup.py" | "pyproject.toml" | "setup.cfg" => EntryCategory::Package,
            "wsgi.py" | "asgi.py" => EntryCategory::WebServer,
            "manage.py" => EntryCategory::ScriptFramework,
            _ => EntryCategory::GenericScript,
        }
    }
}

impl fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for EntryCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A detected entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPoint {
    /// Path relative to the scanned root
    pub path: String,
    pub category: EntryCategory,
    pub reason: String,
}

impl EntryPoint {
    pub fn new(path: impl Into<String>, category: EntryCategory, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            category,
            reason: reason.into(),
        }
    }
}
