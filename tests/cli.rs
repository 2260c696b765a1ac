//! CLI behavior tests: demonstration, exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const CHECK_NUMBER: &str = "tests/fixtures/submissions/check_number.py";
const CALCULATE_SUM: &str = "tests/fixtures/submissions/calculate_sum.py";
const FIBONACCI: &str = "tests/fixtures/submissions/nested/fibonacci.py";
const SUBMISSIONS: &str = "tests/fixtures/submissions";

fn competence_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_competence"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn no_args_runs_demonstration() {
    let mut cmd = competence_cmd();
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Python Student Competence Analysis - Demonstration\n",
        ))
        .stdout(predicate::str::contains("Example 3:"))
        .stdout(predicate::str::contains("  Complexity Score: 0.30"))
        .stdout(predicate::str::contains("Generated Prompts (2):"));
}

#[test]
fn demo_subcommand_matches_default() {
    let default = competence_cmd().output().unwrap();
    let demo = competence_cmd().arg("demo").output().unwrap();
    assert!(demo.status.success());
    assert_eq!(default.stdout, demo.stdout);
}

#[test]
fn no_color_flag_disables_ansi() {
    let output = Command::new(env!("CARGO_BIN_EXE_competence"))
        .arg("--no-color")
        .arg(CALCULATE_SUM)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains('\u{1b}'));
}

#[test]
fn single_file_console_report() {
    let mut cmd = competence_cmd();
    cmd.arg(CALCULATE_SUM);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("calculate_sum.py"))
        .stdout(predicate::str::contains("  Misconceptions: 1"))
        .stdout(predicate::str::contains("1. [Conceptual]"))
        .stdout(predicate::str::contains("Difficulty: 3/5"));
}

#[test]
fn json_output_valid() {
    let mut cmd = competence_cmd();
    cmd.arg(CHECK_NUMBER).arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let v: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    let errors = v["analysis"]["syntax_errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().starts_with("Syntax error:"));
    assert_eq!(v["summary"]["total_prompts"], 1);
    assert_eq!(v["generated_prompts"][0]["category"], "debugging");
}

#[test]
fn directory_walk_skips_venv_and_other_extensions() {
    let mut cmd = competence_cmd();
    cmd.arg(SUBMISSIONS).arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    let paths: Vec<String> = v["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["path"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(paths.len(), 3, "got {:?}", paths);
    assert!(paths.iter().all(|p| p.ends_with(".py") && !p.contains("venv")));
    assert_eq!(v["summary"]["files_evaluated"], 3);
    assert_eq!(v["summary"]["files_with_syntax_errors"], 1);
    assert_eq!(v["summary"]["files_with_misconceptions"], 1);
    assert_eq!(v["summary"]["total_prompts"], 2);
}

#[test]
fn quiet_mode_one_line_per_file() {
    let mut cmd = competence_cmd();
    cmd.arg(FIBONACCI).arg("--quiet");
    cmd.assert().success().stdout(predicate::str::contains(
        "0 syntax, 0 misconceptions, complexity 0.30, 0 prompts",
    ));
}

#[test]
fn strict_fails_on_findings() {
    let mut cmd = competence_cmd();
    cmd.arg(CALCULATE_SUM).arg("--strict").arg("--quiet");
    cmd.assert().failure().code(1);
}

#[test]
fn strict_passes_clean_file() {
    let mut cmd = competence_cmd();
    cmd.arg(FIBONACCI).arg("--strict").arg("--quiet");
    cmd.assert().success();
}

#[test]
fn stdin_input() {
    let mut cmd = competence_cmd();
    cmd.arg("-").arg("--json").write_stdin("def f():\n    pass\n");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(v["code"], "def f():\n    pass\n");
    assert_eq!(v["summary"]["avg_difficulty"], 3.0);
}

#[test]
fn complexity_threshold_flag() {
    let mut cmd = competence_cmd();
    cmd.arg(FIBONACCI).arg("--complexity-threshold").arg("0.2");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. [Extension]"));
}

#[test]
fn invalid_threshold_exit_2() {
    let mut cmd = competence_cmd();
    cmd.arg(FIBONACCI).arg("--complexity-threshold").arg("7");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("complexityThreshold"));
}

#[test]
fn file_not_found_exit_2() {
    let mut cmd = competence_cmd();
    cmd.arg("nonexistent.py");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn config_file_threshold_and_ignore() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join(".competencerc.json"),
        r#"{"complexityThreshold": 0.05, "ignore": ["**/skip_*.py"]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("answer.py"), "x = 1\nif x:\n    pass\n").unwrap();
    fs::write(dir.path().join("skip_me.py"), "def f(:\n").unwrap();

    let mut cmd = competence_cmd();
    cmd.arg(dir.path()).arg("--quiet");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    assert!(s.contains("answer.py: 0 syntax, 0 misconceptions, complexity 0.10, 1 prompts"));
    assert!(!s.contains("skip_me.py"));
}

#[test]
fn init_creates_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".competencerc.json");
    let mut cmd = competence_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert().success();
    assert!(config_path.exists(), ".competencerc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("complexityThreshold"));
    assert!(content.contains("extensions"));
}

#[test]
fn init_does_not_overwrite() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".competencerc.json");
    fs::write(&config_path, "{}").unwrap();
    let mut cmd = competence_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "{}");
}
