// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A `jclint` command isolated from any user or project configuration.
fn jclint(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jclint").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn commit(repo: &git2::Repository, message: &str) {
    let sig = git2::Signature::now("テスト", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}

#[test]
fn lint_accepts_valid_message() {
    let dir = TempDir::new().unwrap();
    jclint(dir.path())
        .args(["lint", "fix(core): 日本語の件名\n\n日本語の本文"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found 0 problems, 0 warnings"));
}

#[test]
fn lint_rejects_missing_scope() {
    let dir = TempDir::new().unwrap();
    jclint(dir.path())
        .args(["lint", "fix: 日本語の件名\n\n日本語の本文"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[scope-empty]"))
        .stderr(predicate::str::contains("rejected"));
}

#[test]
fn lint_reads_stdin() {
    let dir = TempDir::new().unwrap();
    jclint(dir.path())
        .arg("lint")
        .write_stdin("fix(core): English subject\n\n日本語の本文\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("subjectは日本語で記述してください"));
}

#[test]
fn lint_is_the_default_command() {
    let dir = TempDir::new().unwrap();
    jclint(dir.path())
        .write_stdin("fix(core): 日本語の件名\n\n日本語の本文\n")
        .assert()
        .success();
}

#[test]
fn lint_json_output() {
    let dir = TempDir::new().unwrap();
    let output = jclint(dir.path())
        .args(["--format", "json", "lint", "FIX: English."])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["valid"], false);

    let names: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "type-enum",
            "type-case",
            "scope-empty",
            "subject-full-stop",
            "body-empty",
            "subject-japanese",
            "body-japanese",
        ]
    );
}

#[test]
fn warnings_fail_only_in_strict_mode() {
    let dir = TempDir::new().unwrap();
    let message = "fix(core): 日本語の件名\n日本語の本文";

    jclint(dir.path())
        .args(["lint", message])
        .assert()
        .success()
        .stdout(predicate::str::contains("[body-leading-blank]"));

    jclint(dir.path())
        .args(["--strict", "lint", message])
        .assert()
        .code(1);
}

#[test]
fn lint_edit_file_strips_comments() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    fs::write(
        &path,
        "fix(core): 日本語の件名\n\n日本語の本文\n\
         # Please enter the commit message for your changes.\n\
         # Lines starting with '#' will be ignored.\n",
    )
    .unwrap();

    jclint(dir.path())
        .args(["lint", "--edit"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn lint_edit_missing_file() {
    let dir = TempDir::new().unwrap();
    jclint(dir.path())
        .args(["lint", "--edit", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn config_overrides_apply() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("jclint.toml"),
        "[rules.\"scope-empty\"]\nlevel = 0\n",
    )
    .unwrap();

    jclint(dir.path())
        .args(["lint", "fix: 日本語の件名\n\n日本語の本文"])
        .assert()
        .success();
}

#[test]
fn config_fail_on_warning() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[ci]\nfail_on_warning = true\n").unwrap();

    jclint(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["lint", "fix(core): 日本語の件名\n日本語の本文"])
        .assert()
        .code(1);
}

#[test]
fn config_rejects_unknown_rule() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("jclint.toml"),
        "[rules.\"subject-klingon\"]\nlevel = 2\n",
    )
    .unwrap();

    jclint(dir.path())
        .args(["lint", "fix(core): 日本語の件名\n\n日本語の本文"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown rule: 'subject-klingon'"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    jclint(dir.path())
        .args(["--config", "missing.toml", "rules"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn rules_lists_the_policy() {
    let dir = TempDir::new().unwrap();
    let output = jclint(dir.path())
        .args(["--format", "json", "rules"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    let rules = json.as_array().unwrap();
    assert_eq!(rules.len(), 17);
    assert_eq!(rules[0]["name"], "type-enum");
    assert_eq!(rules[0]["value"].as_array().map(|v| v.len()), Some(11));

    let subject_case = rules.iter().find(|r| r["name"] == "subject-case").unwrap();
    assert_eq!(subject_case["level"], "disabled");

    jclint(dir.path())
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("subject-full-stop-japanese"));
}

#[test]
fn types_lists_all_types() {
    let dir = TempDir::new().unwrap();
    let output = jclint(dir.path())
        .args(["--format", "json", "types"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json.as_array().unwrap().len(), 11);
    assert_eq!(json[4]["type"], "feat");
    assert_eq!(json[4]["title"], "Features");
}

#[test]
fn check_lints_history() {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    commit(&repo, "chore(repo): 初期コミット\n\n初期化");
    commit(&repo, "feat(core): 機能を追加\n\n本文");

    jclint(dir.path()).arg("check").assert().success();

    commit(&repo, "fix: English subject\n");

    jclint(dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[subject-japanese]"));

    let output = jclint(dir.path())
        .args(["--format", "json", "check", "HEAD~2..HEAD"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let json = json_stdout(&output);
    let verdicts = json.as_array().unwrap();
    assert_eq!(verdicts.len(), 2);
    assert_eq!(verdicts[0]["valid"], false);
    assert_eq!(verdicts[1]["valid"], true);
}

#[test]
fn check_reports_resolved_sha() {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    commit(&repo, "chore(repo): 初期コミット\n\n初期化");
    commit(&repo, "feat(core): 機能を追加\n\n本文");
    let head = repo.head().unwrap().peel_to_commit().unwrap().id();
    let parent = repo.revparse_single("HEAD~1").unwrap().id();

    let output = jclint(dir.path())
        .args(["--format", "json", "check", "HEAD~1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json[0]["commit"], parent.to_string());
    assert_eq!(json[0]["valid"], true);
    assert_ne!(json[0]["commit"], head.to_string());
}

#[test]
fn check_outside_repository() {
    let dir = TempDir::new().unwrap();
    jclint(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Git error"));
}

#[test]
fn hooks_install_and_uninstall() {
    let dir = TempDir::new().unwrap();
    git2::Repository::init(dir.path()).unwrap();
    let hook = dir.path().join(".git").join("hooks").join("commit-msg");

    jclint(dir.path())
        .args(["hooks", "install"])
        .assert()
        .success();
    assert!(fs::read_to_string(&hook).unwrap().contains("jclint lint --edit"));

    jclint(dir.path())
        .args(["hooks", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("commit-msg: installed"));

    jclint(dir.path())
        .args(["hooks", "uninstall"])
        .assert()
        .success();
    assert!(!hook.exists());
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    jclint(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("jclint.toml").exists());

    jclint(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    jclint(dir.path()).args(["init", "--force"]).assert().success();

    // The generated file is picked up and keeps the built-in policy.
    jclint(dir.path())
        .args(["lint", "fix(core): 日本語の件名\n\n日本語の本文"])
        .assert()
        .success();
}
