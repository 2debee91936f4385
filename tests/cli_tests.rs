//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn unirule(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("unirule"));
    cmd.current_dir(dir).env_remove("UNIRULE_DEFAULT_PLATFORM").env_remove("UNIRULE_FORCE");
    cmd
}

fn init_demo(dir: &Path) {
    unirule(dir)
        .args(["init", "--name", "demo", "--tech", "Go+Gin,Redis", "--editor", "Trae"])
        .assert()
        .success();
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("unirule"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("unirule"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("unirule"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("platforms"));
}

#[test]
fn test_platforms_lists_builtin_adapters() {
    let tmp = TempDir::new().expect("tmp");
    unirule(tmp.path())
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("trae"))
        .stdout(predicate::str::contains(".cursor/rules.json"))
        .stdout(predicate::str::contains(".github/copilot-instructions.md"));
}

#[test]
fn test_generate_without_rules_dir_fails() {
    let tmp = TempDir::new().expect("tmp");
    unirule(tmp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("run `unirule init` first"));
}

#[test]
fn test_init_creates_rules_dir_and_patches_gitignore() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join(".gitignore"), "target/\n").expect("write gitignore");
    init_demo(tmp.path());

    let ruler = tmp.path().join(".ruler");
    for sub in ["global", "project", "templates"] {
        assert!(ruler.join(sub).is_dir(), "missing {sub}/");
    }
    assert!(ruler.join("config.yaml").is_file());
    assert!(ruler.join("global/go_rules.md").is_file());
    assert!(ruler.join("global/cache_rules.md").is_file());

    let tech_stack = fs::read_to_string(ruler.join("project/tech_stack.yaml")).expect("tech stack");
    assert!(tech_stack.contains("project_name: demo"));
    assert!(tech_stack.contains("Go+Gin"));

    let gitignore = fs::read_to_string(tmp.path().join(".gitignore")).expect("gitignore");
    assert_eq!(gitignore, "target/\n.ruler/\n");
}

#[test]
fn test_init_warns_without_gitignore() {
    let tmp = TempDir::new().expect("tmp");
    unirule(tmp.path())
        .args(["init", "--name", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No .gitignore found"));
}

#[test]
fn test_init_then_generate_writes_trae_rules() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());

    unirule(tmp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains(".trae/rules/project_rules.md"));

    let output = fs::read_to_string(tmp.path().join(".trae/rules/project_rules.md"))
        .expect("trae rules");
    assert!(output.starts_with("# demo 项目规则集"));
    assert!(output.contains("### 技术栈规范"));
    assert!(output.contains("### Go代码规范"));
    assert!(output.contains("unirule generate --platform=trae"));
}

#[test]
fn test_generate_refuses_to_overwrite_without_force() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());
    unirule(tmp.path()).arg("generate").assert().success();

    unirule(tmp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --force to overwrite"));

    unirule(tmp.path()).args(["generate", "--force"]).assert().success();
}

#[test]
fn test_generate_unknown_platform_lists_supported() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());
    unirule(tmp.path())
        .args(["generate", "--platform", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported platform \"vim\""))
        .stderr(predicate::str::contains("copilot, cursor, trae"));
}

#[test]
fn test_generate_cursor_to_stdout() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());

    let assert = unirule(tmp.path())
        .args(["generate", "--platform", "cursor", "--stdout"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["project"]["name"], "demo");
    assert_eq!(json["rules"][0]["scope"], "project");
    assert!(!tmp.path().join(".cursor").exists());
}

#[test]
fn test_generate_uses_platform_from_config() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());
    fs::write(tmp.path().join(".ruler/config.yaml"), "default_platform: copilot\n")
        .expect("write config");

    unirule(tmp.path()).arg("generate").assert().success();

    let output = fs::read_to_string(tmp.path().join(".github/copilot-instructions.md"))
        .expect("copilot instructions");
    assert!(output.starts_with("# Copilot instructions for demo"));
}

#[test]
fn test_generate_honours_output_root() {
    let tmp = TempDir::new().expect("tmp");
    let out = TempDir::new().expect("out");
    init_demo(tmp.path());

    unirule(tmp.path())
        .args(["generate", "--output-root", out.path().to_str().expect("utf8 path")])
        .assert()
        .success();

    assert!(out.path().join(".trae/rules/project_rules.md").is_file());
    assert!(!tmp.path().join(".trae").exists());
}

#[test]
fn test_generate_normalizes_config_platform_and_tolerates_bad_values() {
    let tmp = TempDir::new().expect("tmp");
    init_demo(tmp.path());
    fs::write(
        tmp.path().join(".ruler/config.yaml"),
        "default_platform: \" Cursor \"\nrule_priority: project\n",
    )
    .expect("write config");

    unirule(tmp.path()).arg("generate").assert().success();

    assert!(tmp.path().join(".cursor/rules.json").is_file());
}
