//! ASCII file tree rendering

use crate::core::interrupt;
use crate::core::walker::SkipRules;
use crate::error::Result;
use crate::models::file_metadata::DirectoryEntry;
use std::fs;
use std::io;
use std::path::Path;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Renders the lines below a root's `NAME/` header
pub struct TreeRenderer<'a> {
    rules: &'a SkipRules,
    max_depth: usize,
    max_entries: usize,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(rules: &'a SkipRules, max_depth: usize, max_entries: usize) -> Self {
        Self {
            rules,
            max_depth,
            max_entries,
        }
    }

    pub fn render(&self, root: &Path) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        let mut emitted = 0;
        self.render_dir(root, "", 0, &mut emitted, &mut lines)?;
        Ok(lines)
    }

    fn render_dir(
        &self,
        dir: &Path,
        prefix: &str,
        depth: usize,
        emitted: &mut usize,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        interrupt::check()?;

        if depth > self.max_depth {
            lines.push(format!("{prefix}... (max depth reached)"));
            return Ok(());
        }

        let entries = match self.list(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(path = %dir.display(), error = %err, "cannot list directory");
                lines.push(format!("{prefix}{}", listing_marker(err.kind())));
                return Ok(());
            }
        };

        let total = entries.len();
        for (index, entry) in entries.iter().enumerate() {
            if *emitted >= self.max_entries {
                lines.push(format!("{prefix}... ({} more items truncated)", total - index));
                break;
            }

            let is_last = index + 1 == total;
            let (connector, continuation) = if is_last {
                (LAST_BRANCH, SPACE)
            } else {
                (BRANCH, PIPE)
            };

            lines.push(format!("{prefix}{connector}{}", entry.name));
            *emitted += 1;

            if entry.is_dir() {
                let child_prefix = format!("{prefix}{continuation}");
                self.render_dir(&entry.path, &child_prefix, depth + 1, emitted, lines)?;
            }
        }

        Ok(())
    }

    /// Non-skipped children, directories first, then case-insensitive name
    fn list(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries: Vec<DirectoryEntry> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| DirectoryEntry::from_path(entry.path()))
            .filter(|entry| !self.rules.should_skip(&entry.name, entry.is_dir()))
            .collect();

        entries.sort_by(|a, b| {
            b.is_dir()
                .cmp(&a.is_dir())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(entries)
    }
}

/// Line shown in place of a directory that cannot be listed
fn listing_marker(kind: io::ErrorKind) -> &'static str {
    match kind {
        io::ErrorKind::PermissionDenied => "[permission denied]",
        _ => "[unreadable directory]",
    }
}
