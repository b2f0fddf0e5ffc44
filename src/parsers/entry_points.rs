//! Entry point detection
//!
//! A file is an entry point when its name is conventional for one, when it
//! guards a script body behind `__name__`, or when a package.json names it as
//! `main` or as an executable.

use crate::core::walker::Walker;
use crate::error::{degrade, Result};
use crate::models::entry_point::{EntryCategory, EntryPoint};
use crate::models::file_metadata::relative_path_string;
use crate::parsers::package_json::{PackageJsonParser, PACKAGE_JSON};
use crate::parsers::python::PythonParser;
use crate::utils::read_source;
use std::collections::HashSet;
use std::path::Path;

/// File names that conventionally start a program or build
pub const ENTRY_POINT_NAMES: &[&str] = &[
    "main.py",
    "__main__.py",
    "app.py",
    "run.py",
    "cli.py",
    "manage.py",
    "server.py",
    "wsgi.py",
    "asgi.py",
    "setup.py",
    "index.js",
    "index.ts",
    "app.js",
    "server.js",
    "main.js",
    "main.ts",
    "main.go",
    "main.rs",
    "Makefile",
    "Dockerfile",
    "docker-compose.yml",
    "docker-compose.yaml",
];

pub struct EntryPointDetector {
    python: PythonParser,
    seen: HashSet<String>,
    found: Vec<EntryPoint>,
}

impl EntryPointDetector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            python: PythonParser::new()?,
            seen: HashSet::new(),
            found: Vec::new(),
        })
    }

    /// Entry points below the walker's root, sorted by category then path
    pub fn detect(mut self, walker: &Walker<'_>) -> Result<Vec<EntryPoint>> {
        let root = walker.root();

        for entry in walker.files() {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy();
            let rel = relative_path_string(path, root);

            if ENTRY_POINT_NAMES.contains(&&*name) {
                self.add(
                    &rel,
                    EntryCategory::from_filename(&name),
                    format!("canonical entry-point filename `{}`", name),
                );
            }

            if name.ends_with(".py") {
                if let Some(source) = degrade(read_source(path)) {
                    if self.python.has_main_guard(&source) {
                        self.add(
                            &rel,
                            EntryCategory::ScriptGuard,
                            "contains `if __name__ == '__main__'`",
                        );
                    }
                }
            }

            if name == PACKAGE_JSON {
                self.package_entries(path, &rel, root);
            }
        }

        let mut found = self.found;
        found.sort_by(|a, b| {
            a.category
                .label()
                .cmp(b.category.label())
                .then_with(|| a.path.cmp(&b.path))
        });
        Ok(found)
    }

    fn package_entries(&mut self, manifest: &Path, manifest_rel: &str, root: &Path) {
        let details = match degrade(PackageJsonParser::parse_file(manifest)) {
            Some(details) => details,
            None => return,
        };
        let package_dir = manifest.parent().unwrap_or(root);

        if let Some(main) = &details.main {
            let target = package_dir.join(main);
            if target.exists() {
                self.add(
                    &relative_path_string(&target, root),
                    EntryCategory::NodeMain,
                    format!("referenced as `main` in {}", manifest_rel),
                );
            } else {
                self.add(
                    manifest_rel,
                    EntryCategory::NodeConfig,
                    format!("`main` field: {}", main),
                );
            }
        }

        for (bin_name, bin_path) in details.executables() {
            let target = package_dir.join(&bin_path);
            let rel = if target.exists() {
                relative_path_string(&target, root)
            } else {
                manifest_rel.to_string()
            };
            self.add(
                &rel,
                EntryCategory::CliBinary,
                format!("npm bin `{}`", bin_name),
            );
        }
    }

    /// First match for a path wins
    fn add(&mut self, rel: &str, category: EntryCategory, reason: impl Into<String>) {
        if self.seen.insert(rel.to_string()) {
            self.found.push(EntryPoint::new(rel, category, reason));
        }
    }
}
