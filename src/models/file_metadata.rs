//! Directory entries produced while walking the tree

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Kind of a listed filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// A single child of a directory listing
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    /// Build an entry from a path, following symlinks to decide the kind.
    ///
    /// Returns `None` for entries that are neither files nor directories
    /// (dangling symlinks, sockets).
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let metadata = fs::metadata(&path).ok()?;
        let kind = if metadata.is_dir() {
            EntryKind::Dir
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            return None;
        };
        let name = path.file_name()?.to_string_lossy().into_owned();

        Some(Self { path, name, kind })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Render `path` relative to `root` with `/` separators.
///
/// `.` components are dropped so `./cli.js` and `cli.js` render the same.
pub fn relative_path_string(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Lowercased extension including the leading dot, if any
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}
