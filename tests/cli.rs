//! Integration tests for the CLI binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Run the binary inside `dir` with logging left at its default
fn cli(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_file-tool"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn create_empty_file() -> TestResult {
    let tmp = TempDir::new()?;

    cli(tmp.path())
        .args(["create", "test.txt"])
        .assert()
        .success()
        .stdout(contains("Created file: test.txt"));

    assert_eq!(fs::read_to_string(tmp.path().join("test.txt"))?, "");
    Ok(())
}

#[test]
fn create_with_content() -> TestResult {
    let tmp = TempDir::new()?;

    cli(tmp.path())
        .args(["create", "test.txt", "--content", "Hello"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(tmp.path().join("test.txt"))?, "Hello");
    Ok(())
}

#[test]
fn create_in_missing_directories() -> TestResult {
    let tmp = TempDir::new()?;

    cli(tmp.path())
        .args(["create", "a/b/test.txt", "-c", "nested"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("a").join("b").join("test.txt"))?,
        "nested"
    );
    Ok(())
}

#[test]
fn create_existing_file_fails() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("test.txt"), "existing")?;

    cli(tmp.path())
        .args(["create", "test.txt"])
        .assert()
        .code(1)
        .stderr(contains("Error: File already exists"));

    assert_eq!(fs::read_to_string(tmp.path().join("test.txt"))?, "existing");
    Ok(())
}

#[test]
fn create_with_illegal_character_fails() -> TestResult {
    let tmp = TempDir::new()?;

    cli(tmp.path())
        .args(["create", "bad*name.txt"])
        .assert()
        .failure()
        .stderr(contains("Error: Invalid characters in path component: bad*name.txt"));

    Ok(())
}

#[test]
fn copy_file() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("source.txt"), "content")?;

    cli(tmp.path())
        .args(["copy", "source.txt", "dest.txt"])
        .assert()
        .success()
        .stdout(contains("Copied source.txt to dest.txt"));

    assert_eq!(fs::read_to_string(tmp.path().join("dest.txt"))?, "content");
    Ok(())
}

#[test]
fn copy_nonexistent_source_fails() -> TestResult {
    let tmp = TempDir::new()?;

    cli(tmp.path())
        .args(["copy", "nonexistent.txt", "dest.txt"])
        .assert()
        .failure()
        .stderr(contains("Error: Source file not found"));

    assert!(!tmp.path().join("dest.txt").exists());
    Ok(())
}

#[test]
fn combine_files() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("first.txt"), "First\n")?;
    fs::write(tmp.path().join("second.txt"), "Second\n")?;

    cli(tmp.path())
        .args(["combine", "first.txt", "second.txt", "output.txt"])
        .assert()
        .success()
        .stdout(contains("Combined first.txt and second.txt into output.txt"));

    assert_eq!(
        fs::read_to_string(tmp.path().join("output.txt"))?,
        "First\nSecond\n"
    );
    Ok(())
}

#[test]
fn combine_missing_first_fails() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("second.txt"), "Second\n")?;

    cli(tmp.path())
        .args(["combine", "missing.txt", "second.txt", "output.txt"])
        .assert()
        .failure()
        .stderr(contains("Error: First file not found"));

    assert!(!tmp.path().join("output.txt").exists());
    Ok(())
}

#[test]
fn delete_file() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("test.txt"), "content")?;

    cli(tmp.path())
        .args(["delete", "test.txt"])
        .assert()
        .success()
        .stdout(contains("Deleted file: test.txt"));

    assert!(!tmp.path().join("test.txt").exists());
    Ok(())
}

#[test]
fn delete_nonexistent_file_fails() -> TestResult {
    let tmp = TempDir::new()?;

    cli(tmp.path())
        .args(["delete", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(contains("Error: File not found"));

    Ok(())
}

#[test]
fn quiet_flag_suppresses_confirmation() -> TestResult {
    let tmp = TempDir::new()?;

    cli(tmp.path())
        .args(["create", "test.txt", "--quiet"])
        .assert()
        .success()
        .stdout("");

    assert!(tmp.path().join("test.txt").exists());
    Ok(())
}

#[test]
fn malformed_settings_file_in_working_directory_is_ignored() -> TestResult {
    let tmp = TempDir::new()?;
    let settings = tmp.path().join("file-tool.toml");
    fs::write(&settings, "not = [valid toml")?;

    cli(tmp.path())
        .args(["delete", "file-tool.toml"])
        .assert()
        .success()
        .stdout(contains("Deleted file: file-tool.toml"));

    assert!(!settings.exists());
    Ok(())
}

#[test]
fn environment_does_not_configure_the_tool() -> TestResult {
    let tmp = TempDir::new()?;

    cli(tmp.path())
        .env("FILE_TOOL_QUIET", "maybe")
        .env("FILE_TOOL_LOG_LEVEL", "loud")
        .args(["create", "a.txt"])
        .assert()
        .success()
        .stdout(contains("Created file: a.txt"));

    assert!(tmp.path().join("a.txt").exists());
    Ok(())
}

#[test]
fn explicit_config_file_is_used() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("settings.toml"), "quiet = true\n")?;

    cli(tmp.path())
        .args(["--config", "settings.toml", "create", "test.txt"])
        .assert()
        .success()
        .stdout("");

    assert!(tmp.path().join("test.txt").exists());
    Ok(())
}

#[test]
fn invalid_explicit_config_aborts_before_running() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("settings.toml"), "log_level = \"loud\"\n")?;

    cli(tmp.path())
        .args(["--config", "settings.toml", "create", "test.txt"])
        .assert()
        .code(2)
        .stderr(contains("invalid configuration"));

    assert!(!tmp.path().join("test.txt").exists());
    Ok(())
}

#[test]
fn resolved_paths_and_sizes_are_logged() -> TestResult {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("first.txt"), "A\n")?;
    fs::write(tmp.path().join("second.txt"), "B\n")?;

    let resolved = tmp.path().canonicalize()?.join("output.txt");
    let assert = cli(tmp.path())
        .env("RUST_LOG", "info")
        .args(["combine", "first.txt", "second.txt", "output.txt"])
        .assert()
        .success();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("(4 bytes)"), "stderr: {stderr}");
    assert!(
        stderr.contains(&resolved.display().to_string()),
        "stderr: {stderr}"
    );
    Ok(())
}
