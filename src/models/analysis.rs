//! The collected map of a codebase

use crate::models::dependency_graph::DependencyGraph;
use crate::models::entry_point::EntryPoint;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Number of extensions listed in the overview
pub const TOP_EXTENSIONS: usize = 8;

/// File and directory counts for the overview section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    pub total_files: usize,
    pub total_dirs: usize,
    /// `(extension, count)` pairs, most frequent first
    pub top_extensions: Vec<(String, usize)>,
}

/// Insertion-ordered extension counter
///
/// Ties in the final ranking keep the order in which extensions were first
/// seen, so the counter cannot be a hash map.
#[derive(Debug, Default)]
pub struct ExtensionCounter {
    counts: Vec<(String, usize)>,
}

impl ExtensionCounter {
    pub fn record(&mut self, extension: &str) {
        match self.counts.iter_mut().find(|(ext, _)| ext == extension) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((extension.to_string(), 1)),
        }
    }

    /// Most frequent extensions; `sort_by` is stable so ties stay in
    /// first-seen order
    pub fn top(mut self, limit: usize) -> Vec<(String, usize)> {
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts.truncate(limit);
        self.counts
    }
}

/// Everything one run collects about a directory
#[derive(Debug, Clone, Serialize)]
pub struct CodebaseMap {
    pub project_name: String,
    pub root: PathBuf,
    pub overview: OverviewStats,
    pub readme_excerpt: Option<String>,
    pub tree: Vec<String>,
    pub entry_points: Vec<EntryPoint>,
    /// Relative path to one-line description
    pub descriptions: BTreeMap<String, String>,
    /// `None` when the dependency section was suppressed
    pub dependencies: Option<DependencyGraph>,
}
