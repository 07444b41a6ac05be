// tests/integration_test.rs
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gh-changelog"))
}

#[test]
fn test_help() {
    let output = bin().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("gh-changelog"));
    assert!(stdout.contains("Generate a Markdown changelog"));
}

#[test]
fn test_generate_to_stdout() {
    let output = bin()
        .args([
            "--config",
            "tests/fixtures/changelog.toml",
            "--snapshot",
            "tests/fixtures/snapshot.json",
            "--stdout",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# Release History\n\n"));
    assert!(stdout.contains("## [v2.0](https://github.com/octo/widgets/tree/v2.0) (March 01, 2024)"));
    assert!(stdout.contains("- Add widget cache [\\#11](https://github.com/octo/widgets/pull/11) (@alice)"));
    assert!(stdout.contains(
        "- Crash when config has `[table]` [\\#10](https://github.com/octo/widgets/issues/10) \
         [bug](https://github.com/octo/widgets/labels/bug)\n"
    ));
    assert!(stdout.contains("- Docs for the new\\_api"));
    assert!(stdout.contains("## [Unreleased]"));
}

#[test]
fn test_write_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("CHANGELOG.md");

    let output = bin()
        .args([
            "--config",
            "tests/fixtures/changelog.toml",
            "--snapshot",
            "tests/fixtures/snapshot.json",
            "--unreleased-only",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(written.contains("## [Unreleased]"));
    assert!(!written.contains("## [v1.0]"));
}

#[test]
fn test_missing_snapshot_fails() {
    let output = bin()
        .args(["--snapshot", "/nonexistent/snapshot.json", "--stdout"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
