use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::TestProject;

#[test]
fn test_check_missing_field() -> Result<()> {
    let project = TestProject::with_file(
        "main.go",
        r#"package main

type User struct {
	Name string
	Age  int
}

func demo() {
	u := User{ //allset
		Name: "a",
	}
	_ = u
}
"#,
    )?;

    assert_cmd_snapshot!(project.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: field Age is not set  missing-fields
      --> main.go:9:7
      |
    9 | 	u := User{ //allset
      |      ^


    ✘ 1 problems (1 error, 0 warnings)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_clean_project() -> Result<()> {
    let project = TestProject::with_file(
        "main.go",
        r#"package main

type User struct {
	Name string
	Age  int
}

func demo() {
	u := User{ //allset
		Name: "a",
		Age:  1,
	}
	_ = u
}
"#,
    )?;

    assert_cmd_snapshot!(project.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_ignore_directive() -> Result<()> {
    let project = TestProject::with_file(
        "main.go",
        r#"package main

type User struct {
	Name string
	Age  int
}

func demo() {
	u := User{ //allset ignore=Age
		Name: "a",
	}
	_ = u
}
"#,
    )?;

    let output = project.check_command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_non_keyed_literal() -> Result<()> {
    let project = TestProject::with_file(
        "main.go",
        r#"package main

type Point struct {
	X int
	Y int
}

func demo() {
	p := Point{ //allset
		1, 2,
	}
	_ = p
}
"#,
    )?;

    let output = project.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("directive is placed in a non-keyed literal"));
    assert!(stdout.contains("non-keyed-literal"));
    assert!(stdout.contains("hint: write the literal with Field: value pairs"));

    Ok(())
}

#[test]
fn test_check_unused_directive() -> Result<()> {
    let project = TestProject::with_file(
        "main.go",
        r#"package main

type User struct {
	Name string
}

//allset
func demo() {
	u := User{Name: "a"}
	_ = u
}
"#,
    )?;

    let output = project.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("directive is not used"));
    assert!(stdout.contains("unused-directive"));
    assert!(stdout.contains("--> main.go:7:1"));

    Ok(())
}

#[test]
fn test_check_invalid_directive() -> Result<()> {
    let project = TestProject::with_file(
        "main.go",
        r#"package main

type User struct {
	Name string
}

func demo() {
	u := User{ //allset ignore=
		Name: "a",
	}
	_ = u
}
"#,
    )?;

    let output = project.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid directive"));
    assert!(stdout.contains("hint: expected //allset or //allset ignore=Field1,Field2"));

    Ok(())
}

#[test]
fn test_check_parse_error() -> Result<()> {
    let project = TestProject::with_file("broken.go", "package main\n\nfunc demo( {\n")?;
    project.write_file(
        "ok.go",
        "package main\n\ntype T struct {\n\tA int\n}\n\nvar x = T{ //allset\n\tA: 1,\n}\n",
    )?;

    let output = project.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("error: syntax error in Go source"));
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("--> broken.go:0:0"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_check_parse_error_verbose_names_the_file() -> Result<()> {
    let project = TestProject::with_file("broken.go", "package main\n\nfunc demo( {\n")?;

    let output = project.check_command().arg("-v").output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning: broken.go"));
    assert!(!stderr.contains("could not be parsed (use -v for details)"));

    Ok(())
}

#[test]
fn test_check_skips_test_files_by_default() -> Result<()> {
    let project = TestProject::with_file(
        "main_test.go",
        r#"package main

type Helper struct {
	Name string
	Age  int
}

func demo() {
	h := Helper{ //allset
		Name: "a",
	}
	_ = h
}
"#,
    )?;

    let output = project.check_command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Checked 0 source files"));

    let output = project.check_command().arg("--tests").output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("field Age is not set"));

    Ok(())
}

#[test]
fn test_check_config_ignores() -> Result<()> {
    let project = TestProject::new()?;

    project.write_file(
        ".allsetrc.json",
        r#"{
         "ignores": ["generated/**"]
     }"#,
    )?;

    project.write_file(
        "generated/types.go",
        "package main\n\ntype G struct {\n\tA int\n}\n\nvar g = G{ //allset\n}\n",
    )?;
    project.write_file("main.go", "package main\n")?;

    let output = project.check_command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_check_config_tests_setting() -> Result<()> {
    let project = TestProject::new()?;

    project.write_file(".allsetrc.json", r#"{ "tests": true }"#)?;
    project.write_file(
        "main_test.go",
        "package main\n\ntype T struct {\n\tA int\n}\n\nvar x = T{ //allset\n}\n",
    )?;

    let output = project.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("field A is not set"));

    Ok(())
}

#[test]
fn test_check_invalid_config_pattern() -> Result<()> {
    let project = TestProject::new()?;

    project.write_file(".allsetrc.json", r#"{ "ignores": ["[bad"] }"#)?;
    project.write_file("main.go", "package main\n")?;

    let output = project.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_check_vendor_is_skipped() -> Result<()> {
    let project = TestProject::with_file(
        "vendor/dep/dep.go",
        "package dep\n\ntype D struct {\n\tA int\n}\n\nvar d = D{ //allset\n}\n",
    )?;
    project.write_file("main.go", "package main\n")?;

    let output = project.check_command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_check_path_argument() -> Result<()> {
    let project = TestProject::with_file(
        "sub/main.go",
        r#"package main

type User struct {
	Name string
	Age  int
}

var u = User{ //allset
	Name: "a",
}
"#,
    )?;

    let output = project.check_command().arg("sub").output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--> main.go:8:9"));

    Ok(())
}

#[test]
fn test_check_missing_path_is_an_error() -> Result<()> {
    let project = TestProject::new()?;

    let output = project.check_command().arg("nonexistent").output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Path does not exist or is not a directory"));

    Ok(())
}

#[test]
fn test_check_cross_package_uses_go_mod() -> Result<()> {
    let project = TestProject::with_file("go.mod", "module example.com/app\n\ngo 1.22\n")?;
    project.write_file(
        "models/user.go",
        "package models\n\ntype User struct {\n\tName string\n\tAge int\n}\n",
    )?;
    project.write_file(
        "main.go",
        "package main\n\nimport \"example.com/app/models\"\n\nvar u = models.User{ //allset\n\tName: \"a\",\n}\n",
    )?;

    let output = project.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("field Age is not set"));
    assert!(stdout.contains("--> main.go:5:9"));

    Ok(())
}

#[test]
fn test_check_verbose_notes() -> Result<()> {
    let project = TestProject::with_file("main.go", "package main\n")?;

    let output = project.check_command().arg("-v").output()?;
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Note: No .allsetrc.json found, using default configuration"));
    assert!(stderr.contains("Note: No go.mod module path found"));

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let project = TestProject::new()?;

    let output = project.command().arg("--help").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("check"));
    assert!(stdout.contains("init"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let project = TestProject::new()?;

    let output = project.command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));

    Ok(())
}
