//! Dependency graph construction from Python and JS/TS imports

use crate::core::walker::Walker;
use crate::error::{degrade, Result};
use crate::models::dependency_graph::{DependencyGraph, DependencyRecord};
use crate::models::file_metadata::{dotted_extension, relative_path_string};
use crate::parsers::js_imports::{is_js_extension, js_imports};
use crate::parsers::python::PythonParser;
use crate::utils::read_source;
use std::collections::HashSet;
use std::path::Path;

/// Builds the per-file import graph for a tree
pub struct DependencyGraphBuilder {
    python: PythonParser,
}

impl DependencyGraphBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            python: PythonParser::new()?,
        })
    }

    pub fn build(&mut self, walker: &Walker<'_>) -> Result<DependencyGraph> {
        let local_modules = local_python_modules(walker)?;
        let root = walker.root();
        let mut graph = DependencyGraph::new();

        for entry in walker.files() {
            let entry = entry?;
            let path = entry.path();
            let extension = dotted_extension(path).unwrap_or_default();

            let is_python = extension == ".py";
            if !is_python && !is_js_extension(&extension) {
                continue;
            }

            let source = match degrade(read_source(path)) {
                Some(source) => source,
                None => continue,
            };

            let record = if is_python {
                classify(self.python.imports(&source), |reference| {
                    local_modules.contains(reference)
                })
            } else {
                classify(js_imports(&source), |_| false)
            };

            graph.insert(relative_path_string(path, root), record);
        }

        tracing::debug!(files = graph.len(), "dependency graph built");
        Ok(graph)
    }
}

/// Split references into local and external. Relative references are always
/// local; bare names are local when `is_local_name` accepts them.
fn classify<F>(references: Vec<String>, is_local_name: F) -> DependencyRecord
where
    F: Fn(&str) -> bool,
{
    let mut record = DependencyRecord::default();
    for reference in references {
        if reference.starts_with('.') || is_local_name(&reference) {
            record.local.insert(reference);
        } else {
            record.external.insert(reference);
        }
    }
    record
}

/// Module names importable from the root: stems of top-level `.py` files and
/// the first directory of nested ones
fn local_python_modules(walker: &Walker<'_>) -> Result<HashSet<String>> {
    let mut modules = HashSet::new();

    for entry in walker.files() {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "py") {
            continue;
        }

        if let Some(name) = module_name(path, walker.root()) {
            modules.insert(name);
        }
    }

    Ok(modules)
}

fn module_name(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut components = relative.components();
    let first = components.next()?;

    if components.next().is_some() {
        Some(first.as_os_str().to_string_lossy().into_owned())
    } else {
        path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
    }
}
