//! Directory walking functionality
//!
//! The skip predicate shared by every stage, and a sorted recursive walk that
//! never descends into skipped directories.

use crate::core::interrupt;
use crate::error::{degrade, CodemapError, Result, ResultExt};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names that are never listed or descended into
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    ".venv",
    "venv",
    "env",
    ".env",
    "dist",
    "build",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    "htmlcov",
    ".eggs",
    ".idea",
    ".vscode",
    "coverage",
    ".ruff_cache",
    ".DS_Store",
    "__pypackages__",
    "site-packages",
    "target",
    "vendor",
    ".nx",
];

/// Hidden directories that are still mapped
pub const ALLOWED_HIDDEN_DIRS: &[&str] = &[".github"];

/// Binary and generated file extensions
pub const SKIP_EXTENSIONS: &[&str] = &[
    ".pyc", ".pyo", ".pyd", ".so", ".dll", ".dylib", ".exe", ".bin", ".jpg", ".jpeg", ".png",
    ".gif", ".ico", ".webp", ".bmp", ".tiff", ".mp3", ".mp4", ".wav", ".avi", ".mov", ".pdf",
    ".docx", ".xlsx", ".zip", ".tar", ".gz", ".bz2", ".7z", ".rar", ".db", ".sqlite", ".sqlite3",
    ".wasm",
];

/// Minified asset suffixes
pub const MINIFIED_SUFFIXES: &[&str] = &[".min.js", ".min.css"];

/// The skip predicate
#[derive(Debug, Clone, Default)]
pub struct SkipRules {
    exclude_patterns: Vec<Pattern>,
}

impl SkipRules {
    /// Build rules with additional glob patterns matched against entry names
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        Ok(Self {
            exclude_patterns: compile_exclude_patterns(exclude_patterns)?,
        })
    }

    /// Whether an entry with this name and kind is excluded from every stage
    pub fn should_skip(&self, name: &str, is_dir: bool) -> bool {
        if is_dir {
            if SKIP_DIRS.contains(&name) {
                return true;
            }
            if name.starts_with('.') && !ALLOWED_HIDDEN_DIRS.contains(&name) {
                return true;
            }
        } else {
            let lowered = name.to_lowercase();
            if let Some(dot) = lowered.rfind('.') {
                // a leading dot alone (".gitignore") is not an extension
                if dot > 0 && SKIP_EXTENSIONS.contains(&&lowered[dot..]) {
                    return true;
                }
            }
            if MINIFIED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
                return true;
            }
        }

        self.is_excluded(name)
    }

    /// Check if a name matches any user exclude pattern
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.matches(name))
    }
}

/// Compile exclude patterns into glob patterns
pub fn compile_exclude_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| Pattern::new(pattern).map_err(CodemapError::from))
        .collect()
}

/// Sorted recursive walk below a root honouring [`SkipRules`]
pub struct Walker<'a> {
    root: PathBuf,
    rules: &'a SkipRules,
}

impl<'a> Walker<'a> {
    pub fn new(root: impl AsRef<Path>, rules: &'a SkipRules) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            rules,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every non-skipped entry below the root (the root itself excluded),
    /// depth first. Within a directory its files come before its
    /// subdirectories, each group in name order.
    ///
    /// Unlistable directories are logged and left out. Each item fails with
    /// `Interrupted` once Ctrl-C has been pressed.
    pub fn entries(&self) -> impl Iterator<Item = Result<DirEntry>> + '_ {
        WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter()
            .filter_entry(move |entry| !self.skips(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    let path = err.path().unwrap_or(self.root.as_path()).to_path_buf();
                    degrade(Err::<DirEntry, _>(err).with_file_context(path))
                }
            })
            .map(|entry| {
                interrupt::check()?;
                Ok(entry)
            })
    }

    /// Regular files only
    pub fn files(&self) -> impl Iterator<Item = Result<DirEntry>> + '_ {
        self.entries().filter(|entry| match entry {
            Ok(entry) => entry.file_type().is_file(),
            Err(_) => true,
        })
    }

    fn skips(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.rules.should_skip(&name, entry.file_type().is_dir())
    }
}
