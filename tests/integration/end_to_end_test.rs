//! End-to-end tests for codemap
//!
//! These tests build small projects on disk and run the full analysis over
//! them through the library API.

use codemap::{
    core::Analyzer,
    error::Result,
    models::{config::Settings, entry_point::EntryCategory},
    output::{Formatter, MarkdownFormatter},
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Write `files` below `root`, creating directories as needed
fn create_project(root: &Path, files: &[(&str, &str)]) -> Result<()> {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    }
    Ok(())
}

fn settings_for(path: PathBuf) -> Settings {
    Settings {
        scan_path: path,
        show_progress: false,
        ..Default::default()
    }
}

/// A small Python application with a local import chain
fn create_python_app(root: &Path) -> Result<()> {
    create_project(
        root,
        &[
            (
                "main.py",
                "\"\"\"Application entry.\"\"\"\nimport os\nimport utils\n\nif __name__ == \"__main__\":\n    utils.run()\n",
            ),
            (
                "utils.py",
                "\"\"\"Shared utilities.\"\"\"\nfrom helpers import shout\n\ndef run():\n    shout()\n",
            ),
            ("helpers.py", "# Output helpers\ndef shout():\n    print('hi')\n"),
            ("README.md", "# Demo App\n\nA tiny demo.\n"),
            ("node_modules/left-pad/index.js", "module.exports = 1;\n"),
            (".git/HEAD", "ref: refs/heads/main\n"),
        ],
    )
}

#[test]
fn test_python_app_map() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("demo-app");
    create_python_app(&root)?;

    let settings = settings_for(root.clone());
    let map = Analyzer::new(&settings)?.analyze()?;

    assert_eq!(map.project_name, "demo-app");
    assert_eq!(map.overview.total_files, 4);
    assert_eq!(map.overview.top_extensions[0], (".py".to_string(), 3));
    assert!(map.readme_excerpt.as_deref().unwrap().starts_with("# Demo App"));

    // skipped directories never show up
    assert!(map.tree.iter().all(|line| !line.contains("node_modules")));
    assert!(map.tree.iter().all(|line| !line.contains(".git")));

    let main = map
        .entry_points
        .iter()
        .find(|entry| entry.path == "main.py")
        .unwrap();
    assert_eq!(main.category, EntryCategory::GenericScript);

    assert_eq!(map.descriptions["main.py"], "Application entry.");
    assert_eq!(map.descriptions["utils.py"], "Shared utilities.");
    assert_eq!(map.descriptions["helpers.py"], "Output helpers");

    let graph = map.dependencies.as_ref().unwrap();
    let main_deps = graph.get("main.py").unwrap();
    assert!(main_deps.local.contains("utils"));
    assert!(main_deps.external.contains("os"));
    assert!(graph.get("utils.py").unwrap().local.contains("helpers"));
    assert!(!graph.contains("helpers.py"));

    Ok(())
}

#[test]
fn test_python_app_markdown_with_mermaid() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("demo-app");
    create_python_app(&root)?;

    let settings = Settings {
        mermaid: true,
        ..settings_for(root)
    };
    let map = Analyzer::new(&settings)?.analyze()?;
    let output = MarkdownFormatter::new(true).format(&map)?;

    assert!(output.contains("# Codebase Map: `demo-app`"));
    assert!(output.contains("- **`main.py`** imports: `utils`"));
    assert!(output.contains("- **`utils.py`** imports: `helpers`"));
    assert!(output.contains("- `os` (imported in 1 file)"));
    assert!(output.contains("N0[\"main\"] --> N1[\"utils\"]"));
    assert!(output.contains("N2[\"utils\"] --> N3[\"helpers\"]"));

    Ok(())
}

#[test]
fn test_node_package_entry_points() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("web");
    create_project(
        &root,
        &[
            (
                "package.json",
                r#"{"name": "web", "description": "Web frontend", "main": "lib/start.js", "bin": {"web-cli": "bin/cli.js"}}"#,
            ),
            ("lib/start.js", "// Starts the server\nimport express from 'express';\n"),
            ("bin/cli.js", "const run = require('../lib/start');\n"),
            ("app.min.js", "var a=1;"),
        ],
    )?;

    let map = Analyzer::new(&settings_for(root))?.analyze()?;

    let categories: Vec<(&str, EntryCategory)> = map
        .entry_points
        .iter()
        .map(|entry| (entry.path.as_str(), entry.category))
        .collect();
    assert!(categories.contains(&("lib/start.js", EntryCategory::NodeMain)));
    assert!(categories.contains(&("bin/cli.js", EntryCategory::CliBinary)));

    assert_eq!(map.descriptions["package.json"], "web - Web frontend");
    assert_eq!(map.descriptions["lib/start.js"], "Starts the server");

    let graph = map.dependencies.as_ref().unwrap();
    assert!(graph.get("lib/start.js").unwrap().external.contains("express"));
    assert!(graph.get("bin/cli.js").unwrap().local.contains("../lib/start"));

    // minified bundles are skipped everywhere
    assert!(!map.descriptions.contains_key("app.min.js"));
    assert!(map.tree.iter().all(|line| !line.contains("app.min.js")));

    Ok(())
}

#[test]
fn test_exclude_patterns_and_limits() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("proj");
    create_project(
        &root,
        &[
            ("a/b/c/deep.py", "\"\"\"Deep.\"\"\"\n"),
            ("snapshots/one.snap", "snapshot\n"),
            ("top.py", "\"\"\"Top.\"\"\"\n"),
        ],
    )?;

    let settings = Settings {
        exclude_patterns: vec!["snapshots".to_string()],
        max_depth: 1,
        no_deps: true,
        ..settings_for(root)
    };
    let map = Analyzer::new(&settings)?.analyze()?;

    assert!(map.dependencies.is_none());
    assert!(map.tree.iter().all(|line| !line.contains("snapshots")));
    assert!(map.tree.iter().all(|line| !line.contains("deep.py")));
    assert!(map.tree.iter().any(|line| line.contains("(max depth reached)")));
    // the depth limit only applies to the tree
    assert_eq!(map.descriptions["a/b/c/deep.py"], "Deep.");
    assert_eq!(map.overview.total_files, 2);

    Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("empty");
    fs::create_dir_all(&root)?;

    let map = Analyzer::new(&settings_for(root))?.analyze()?;

    assert_eq!(map.overview.total_files, 0);
    assert!(map.tree.is_empty());
    assert!(map.entry_points.is_empty());
    assert!(map.descriptions.is_empty());
    assert!(map.dependencies.as_ref().unwrap().is_empty());

    Ok(())
}
