//! Import dependency graph
//!
//! Maps each source file (relative path) to the module references it makes,
//! split into references that resolve inside the scanned tree and references
//! to outside packages.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// References made by a single file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyRecord {
    pub local: BTreeSet<String>,
    pub external: BTreeSet<String>,
}

impl DependencyRecord {
    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.external.is_empty()
    }
}

/// Per-file dependency records keyed by relative path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    files: BTreeMap<String, DependencyRecord>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file's references. Files without references are not stored.
    pub fn insert(&mut self, path: impl Into<String>, record: DependencyRecord) {
        if !record.is_empty() {
            self.files.insert(path.into(), record);
        }
    }

    pub fn get(&self, path: &str) -> Option<&DependencyRecord> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Iterate over files in path order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DependencyRecord)> {
        self.files.iter()
    }

    /// External packages ordered by the number of files importing them,
    /// ties broken by name, truncated to `limit`.
    pub fn top_external(&self, limit: usize) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in self.files.values() {
            for package in &record.external {
                *counts.entry(package.as_str()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked
    }

    /// Whether any file has at least one local reference
    pub fn has_local(&self) -> bool {
        self.files.values().any(|record| !record.local.is_empty())
    }

    /// Sorted, de-duplicated `(source, reference)` edges for local references
    /// made by files accepted by `filter`.
    pub fn local_edges<F>(&self, filter: F) -> Vec<(String, String)>
    where
        F: Fn(&str) -> bool,
    {
        let edges: BTreeSet<(String, String)> = self
            .files
            .iter()
            .filter(|(path, _)| filter(path))
            .flat_map(|(path, record)| {
                record
                    .local
                    .iter()
                    .map(move |target| (path.clone(), target.clone()))
            })
            .collect();
        edges.into_iter().collect()
    }
}
