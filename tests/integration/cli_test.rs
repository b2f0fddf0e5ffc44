use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

fn codemap() -> Command {
    let mut cmd = Command::cargo_bin("codemap").unwrap();
    cmd.arg("--no-progress").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_directory_exits_with_one() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let output = codemap().arg(&missing).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.to_lowercase().contains("not found"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_file_argument_exits_with_one() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "hello").unwrap();

    let output = codemap().arg(&file).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not a directory"));
}

#[test]
fn test_invalid_format_is_rejected() {
    let dir = tempdir().unwrap();

    let output = codemap()
        .arg(dir.path())
        .args(["--format", "csv"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let dir = tempdir().unwrap();

    let output = codemap().arg(dir.path()).args(["-q", "-v"]).output().unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    let output = codemap()
        .arg(dir.path())
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration file not found"));
}

#[test]
fn test_config_file_values_apply() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("proj");
    fs::create_dir_all(project.join("a/b")).unwrap();
    fs::write(project.join("a/b/deep.py"), "\"\"\"Deep module.\"\"\"\n").unwrap();
    let config = dir.path().join("codemap.toml");
    fs::write(&config, "max_depth = 1\nno_deps = true\n").unwrap();

    let output = codemap()
        .arg(&project)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("## Dependency Graph"));
    assert!(!stdout.contains("── deep.py"));
}

#[test]
fn test_init_creates_config_in_working_directory() {
    let dir = tempdir().unwrap();

    let output = codemap().current_dir(dir.path()).arg("--init").output().unwrap();

    assert!(output.status.success());
    let created = dir.path().join(".codemap.toml");
    let content = fs::read_to_string(&created).unwrap();
    assert!(content.contains("max_depth"));

    // a second run leaves the existing file alone
    fs::write(&created, "max_files = 10\n").unwrap();
    let output = codemap().current_dir(dir.path()).arg("--init").output().unwrap();
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&created).unwrap(), "max_files = 10\n");
}
