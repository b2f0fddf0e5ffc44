//! Codebase analysis
//!
//! Runs every stage over the target directory and collects the results into a
//! [`CodebaseMap`]. Stages are independent walks sharing only the skip rules.

use crate::core::stats::collect_overview;
use crate::core::tree::TreeRenderer;
use crate::core::walker::{SkipRules, Walker};
use crate::error::{degrade, CodemapError, Result};
use crate::models::analysis::CodebaseMap;
use crate::models::config::Settings;
use crate::models::file_metadata::relative_path_string;
use crate::parsers::{DependencyGraphBuilder, EntryPointDetector, FileClassifier};
use crate::utils::{read_text_prefix, README_READ_LIMIT};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// README candidates, in order of preference
pub const README_NAMES: &[&str] = &["README.md", "README.rst", "README.txt", "README"];

/// Lines of the README kept in the excerpt
pub const README_EXCERPT_LINES: usize = 20;

/// Analyzer producing a [`CodebaseMap`] for one directory
pub struct Analyzer<'s> {
    settings: &'s Settings,
    rules: SkipRules,
}

impl<'s> Analyzer<'s> {
    /// Compile the skip rules for `settings`
    pub fn new(settings: &'s Settings) -> Result<Self> {
        Ok(Self {
            settings,
            rules: SkipRules::new(&settings.exclude_patterns)?,
        })
    }

    pub fn analyze(&self) -> Result<CodebaseMap> {
        self.analyze_with_progress(|_| {})
    }

    /// Run every stage, reporting each one to `on_stage` before it starts
    pub fn analyze_with_progress<F>(&self, on_stage: F) -> Result<CodebaseMap>
    where
        F: Fn(&str),
    {
        let root = resolve_root(&self.settings.scan_path)?;
        let project_name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        tracing::info!(root = %root.display(), "mapping codebase");

        let walker = Walker::new(&root, &self.rules);

        on_stage("Counting files");
        let overview = collect_overview(&walker)?;
        tracing::info!(
            files = overview.total_files,
            dirs = overview.total_dirs,
            "overview collected"
        );

        let readme_excerpt = readme_excerpt(&root);

        on_stage("Rendering file tree");
        let tree = TreeRenderer::new(&self.rules, self.settings.max_depth, self.settings.max_files)
            .render(&root)?;

        on_stage("Detecting entry points");
        let entry_points = EntryPointDetector::new()?.detect(&walker)?;
        tracing::info!(count = entry_points.len(), "entry points detected");

        on_stage("Describing modules");
        let descriptions = self.describe_files(&walker)?;
        tracing::info!(count = descriptions.len(), "modules described");

        let dependencies = if self.settings.no_deps {
            None
        } else {
            on_stage("Building dependency graph");
            let graph = DependencyGraphBuilder::new()?.build(&walker)?;
            tracing::info!(files = graph.len(), "dependency graph built");
            Some(graph)
        };

        Ok(CodebaseMap {
            project_name,
            root,
            overview,
            readme_excerpt,
            tree,
            entry_points,
            descriptions,
            dependencies,
        })
    }

    /// Descriptions for the first `max_files` files in walk order
    fn describe_files(&self, walker: &Walker<'_>) -> Result<BTreeMap<String, String>> {
        let mut classifier = FileClassifier::new()?;
        let mut descriptions = BTreeMap::new();

        for entry in walker.files().take(self.settings.max_files) {
            let entry = entry?;
            if let Some(description) = classifier.describe(entry.path()) {
                descriptions.insert(relative_path_string(entry.path(), walker.root()), description);
            }
        }

        Ok(descriptions)
    }
}

/// Check the target and make it absolute
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(CodemapError::DirectoryNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(CodemapError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    path.canonicalize().map_err(CodemapError::io_error)
}

/// First 20 lines of the first README found, stripped.
///
/// An unreadable README still yields an (empty) excerpt.
pub fn readme_excerpt(root: &Path) -> Option<String> {
    let path = README_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|candidate| candidate.exists())?;

    let content = degrade(read_text_prefix(&path, README_READ_LIMIT)).unwrap_or_default();
    let excerpt = content
        .lines()
        .take(README_EXCERPT_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    Some(excerpt.trim().to_string())
}
