//! Tests for output formatting

#[cfg(test)]
mod tests {
    use crate::models::analysis::{CodebaseMap, OverviewStats};
    use crate::models::dependency_graph::{DependencyGraph, DependencyRecord};
    use crate::models::entry_point::{EntryCategory, EntryPoint};
    use crate::output::{
        mermaid_diagram, FileWriter, Formatter, JsonFormatter, MarkdownFormatter, OutputWriter,
    };
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn record(local: &[&str], external: &[&str]) -> DependencyRecord {
        DependencyRecord {
            local: local.iter().map(|s| s.to_string()).collect(),
            external: external.iter().map(|s| s.to_string()).collect(),
        }
    }

    // Helper function to create a small but complete map
    fn create_test_map() -> CodebaseMap {
        let mut descriptions = BTreeMap::new();
        descriptions.insert("main.py".to_string(), "Application entry.".to_string());
        descriptions.insert("pkg/utils.py".to_string(), "Shared helpers.".to_string());

        let mut graph = DependencyGraph::new();
        graph.insert("main.py", record(&["utils"], &["requests", "os"]));
        graph.insert("pkg/utils.py", record(&[".helpers"], &["os"]));

        CodebaseMap {
            project_name: "demo".to_string(),
            root: PathBuf::from("/tmp/demo"),
            overview: OverviewStats {
                total_files: 3,
                total_dirs: 1,
                top_extensions: vec![(".py".to_string(), 3)],
            },
            readme_excerpt: Some("# Demo".to_string()),
            tree: vec!["├── pkg/".to_string(), "│   └── utils.py".to_string()],
            entry_points: vec![EntryPoint::new(
                "main.py",
                EntryCategory::ScriptGuard,
                "has `if __name__ == \"__main__\"`",
            )],
            descriptions,
            dependencies: Some(graph),
        }
    }

    fn empty_map() -> CodebaseMap {
        CodebaseMap {
            project_name: "empty".to_string(),
            root: PathBuf::from("/tmp/empty"),
            overview: OverviewStats::default(),
            readme_excerpt: None,
            tree: Vec::new(),
            entry_points: Vec::new(),
            descriptions: BTreeMap::new(),
            dependencies: Some(DependencyGraph::new()),
        }
    }

    #[test]
    fn test_markdown_sections_in_order() {
        let output = MarkdownFormatter::new(false).format(&create_test_map()).unwrap();

        assert!(output.starts_with("# Codebase Map: `demo`\n\n> Generated by codemap | Path: `/tmp/demo`\n\n"));
        let order = [
            "## Overview",
            "### README Excerpt",
            "## File Tree",
            "## Entry Points",
            "## Module Descriptions",
            "## Dependency Graph",
        ];
        let positions: Vec<usize> = order.iter().map(|h| output.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(output.contains("- **Files**: 3\n- **Directories**: 1\n- **Top file types**: `.py` (3)\n"));
        assert!(output.contains("```\ndemo/\n├── pkg/\n│   └── utils.py\n```"));
        assert!(output.contains("- **`main.py`** `[script-guard]` - has `if __name__ == \"__main__\"`"));
        assert!(!output.contains("Dependency Diagram"));
    }

    #[test]
    fn test_descriptions_grouped_by_directory() {
        let output = MarkdownFormatter::new(false).format(&create_test_map()).unwrap();

        assert!(output.contains("### `demo/`\n\n- **`main.py`** - Application entry.\n"));
        assert!(output.contains("### `pkg`\n\n- **`utils.py`** - Shared helpers.\n"));
        assert!(output.find("### `demo/`").unwrap() < output.find("### `pkg`").unwrap());
    }

    #[test]
    fn test_external_dependency_plural() {
        let output = MarkdownFormatter::new(false).format(&create_test_map()).unwrap();

        assert!(output.contains("- `os` (imported in 2 files)"));
        assert!(output.contains("- `requests` (imported in 1 file)\n"));
        assert!(output.contains("- **`main.py`** imports: `utils`"));
        assert!(output.contains("- **`pkg/utils.py`** imports: `.helpers`"));
    }

    #[test]
    fn test_empty_states() {
        let output = MarkdownFormatter::new(true).format(&empty_map()).unwrap();

        assert!(output.contains("_No entry points detected._"));
        assert!(output.contains("_No module descriptions found._"));
        assert!(output.contains("_No dependency information extracted._"));
        assert!(!output.contains("Top file types"));
        assert!(!output.contains("README Excerpt"));
        assert!(!output.contains("Dependency Diagram"));
    }

    #[test]
    fn test_no_local_dependencies_message() {
        let mut map = empty_map();
        let mut graph = DependencyGraph::new();
        graph.insert("main.py", record(&[], &["os"]));
        map.dependencies = Some(graph);

        let output = MarkdownFormatter::new(true).format(&map).unwrap();
        assert!(output.contains("### External Dependencies"));
        assert!(output.contains("_No local dependencies detected._"));
        assert!(!output.contains("Dependency Diagram"));
    }

    #[test]
    fn test_suppressed_dependency_section() {
        let mut map = create_test_map();
        map.dependencies = None;

        let output = MarkdownFormatter::new(true).format(&map).unwrap();
        assert!(!output.contains("Dependency Graph"));
    }

    #[test]
    fn test_mermaid_diagram() {
        let output = MarkdownFormatter::new(true).format(&create_test_map()).unwrap();

        assert!(output.contains("### Dependency Diagram (Mermaid)"));
        assert!(output.contains(
            "```mermaid\ngraph TD\n    N0[\"main\"] --> N1[\"utils\"]\n    N2[\"utils\"] --> N3[\"helpers\"]\n```"
        ));
    }

    #[test]
    fn test_mermaid_skips_non_python_sources() {
        let mut graph = DependencyGraph::new();
        graph.insert("app.js", record(&["./lib"], &[]));
        assert!(mermaid_diagram(&graph).is_empty());

        graph.insert("pkg/__init__.py", record(&["."], &[]));
        let lines = mermaid_diagram(&graph);
        assert_eq!(lines[2], "    N0[\"__init__\"] --> N1[\".\"]");
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter::new(true).format(&create_test_map()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["project_name"], "demo");
        assert_eq!(value["overview"]["total_files"], 3);
        assert_eq!(value["entry_points"][0]["category"], "script-guard");
        assert_eq!(value["dependencies"]["main.py"]["local"][0], "utils");
        assert_eq!(value["descriptions"]["pkg/utils.py"], "Shared helpers.");
    }

    #[test]
    fn test_file_writer_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs").join("nested").join("MAP.md");

        FileWriter::new(&path).write("# Map").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# Map");
    }

    #[test]
    fn test_file_writer_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("MAP.md");
        fs::write(&path, "old content that is longer").unwrap();

        FileWriter::new(&path).write("new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
