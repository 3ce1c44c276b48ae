use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::TestProject;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("includes").is_some(),
        "Config should have 'includes' field"
    );
    assert!(
        parsed.get("ignores").is_some(),
        "Config should have 'ignores' field"
    );
    assert!(
        parsed.get("tests").is_some(),
        "Config should have 'tests' field"
    );
    assert_eq!(parsed["includes"][0], "**/*.go");
    assert_eq!(parsed["tests"], false);

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let project = TestProject::new()?;

    assert_cmd_snapshot!(project.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .allsetrc.json

    ----- stderr -----
    ");

    assert!(project.root().join(".allsetrc.json").exists());

    let content = project.read_file(".allsetrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let project = TestProject::new()?;
    project.write_file(".allsetrc.json", "{}")?;

    let output = project.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: .allsetrc.json already exists"));

    Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
    let project = TestProject::new()?;
    project.write_file(".allsetrc.json", "not even json")?;

    let output = project.command().args(["init", "--force"]).output()?;
    assert!(
        output.status.success(),
        "init --force should replace the existing file. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let content = project.read_file(".allsetrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let project = TestProject::new()?;

    project.command().arg("init").output()?;

    project.write_file("main.go", "package main\n")?;

    let output = project.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
