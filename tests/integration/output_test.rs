//! Report output through the command-line binary

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn codemap() -> Command {
    let mut cmd = Command::cargo_bin("codemap").unwrap();
    cmd.arg("--no-progress").env_remove("RUST_LOG");
    cmd
}

/// A project with a local import chain and one nested module
fn create_project() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let root = dir.path().join("sample");
    let files = [
        ("main.py", "import utils\nimport requests\n"),
        ("utils.py", "\"\"\"Utility functions.\"\"\"\nimport helpers\n"),
        ("helpers.py", "\"\"\"Helpers.\"\"\"\n"),
        ("pkg/sub/deep.py", "\"\"\"Deep module.\"\"\"\n"),
    ];
    for (rel, content) in files {
        write(&root, rel, content);
    }
    (dir, root)
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "codemap failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_markdown_to_stdout() {
    let (_dir, root) = create_project();

    let stdout = stdout_of(codemap().arg(&root));

    assert!(stdout.starts_with("# Codebase Map: `sample`\n"));
    assert!(stdout.ends_with('\n'));
    assert!(stdout.contains("## File Tree"));
    assert!(stdout.contains("### `sample/`"));
    assert!(stdout.contains("- **`utils.py`** - Utility functions."));
    assert!(stdout.contains("### `pkg/sub`"));
    assert!(stdout.contains("- **`main.py`** imports: `utils`"));
    assert!(stdout.contains("- **`utils.py`** imports: `helpers`"));
    assert!(stdout.contains("- `requests` (imported in 1 file)"));
    assert!(!stdout.contains("```mermaid"));
}

#[test]
fn test_no_deps_omits_dependency_section() {
    let (_dir, root) = create_project();

    let stdout = stdout_of(codemap().arg(&root).arg("--no-deps"));

    assert!(!stdout.contains("Dependency Graph"));
    assert!(stdout.contains("## Module Descriptions"));
}

#[test]
fn test_output_file_is_written() {
    let (dir, root) = create_project();
    let target = dir.path().join("reports").join("MAP.md");

    let output = codemap().arg(&root).arg("-o").arg(&target).output().unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Map written to:"));

    let written = fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("# Codebase Map: `sample`"));
    assert!(!written.ends_with("\n\n\n"));
}

#[test]
fn test_max_depth_limits_tree() {
    let (_dir, root) = create_project();

    let stdout = stdout_of(codemap().arg(&root).args(["--max-depth", "1"]));

    assert!(!stdout.contains("── deep.py"));
    assert!(stdout.contains("(max depth reached)"));
    // descriptions still cover files below the depth limit
    assert!(stdout.contains("- **`deep.py`** - Deep module."));
}

#[test]
fn test_max_files_truncates_tree() {
    let (_dir, root) = create_project();

    let stdout = stdout_of(codemap().arg(&root).args(["--max-files", "2"]));

    assert!(stdout.contains("more items truncated)"));
}

#[test]
fn test_mermaid_diagram() {
    let (_dir, root) = create_project();

    let stdout = stdout_of(codemap().arg(&root).arg("--mermaid"));

    assert!(stdout.contains("### Dependency Diagram (Mermaid)"));
    assert!(stdout.contains("```mermaid\ngraph TD\n"));
    assert!(stdout.contains("N0[\"main\"] --> N1[\"utils\"]"));
    assert!(stdout.contains("N2[\"utils\"] --> N3[\"helpers\"]"));
}

#[test]
fn test_json_format() {
    let (_dir, root) = create_project();

    let stdout = stdout_of(codemap().arg(&root).args(["--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["project_name"], "sample");
    assert_eq!(value["overview"]["total_files"], 4);
    assert_eq!(value["descriptions"]["utils.py"], "Utility functions.");
    assert_eq!(value["dependencies"]["main.py"]["external"][0], "requests");
}

#[test]
fn test_exclude_flag() {
    let (_dir, root) = create_project();

    let stdout = stdout_of(codemap().arg(&root).args(["--exclude", "pkg"]));

    assert!(!stdout.contains("pkg/sub"));
    assert!(!stdout.contains("deep.py"));
}
