use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const SCRIPT_DIR: &str = "Release/REAPER/Scripts/ReaPet";

fn asset_tree(files: &[&str]) -> TempDir {
    let temp_dir = tempdir().unwrap();
    for file in files {
        let path = temp_dir.path().join(SCRIPT_DIR).join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
    temp_dir
}

fn reaindex(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("reaindex").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG").arg("--no-colors");
    cmd
}

#[test]
fn test_generates_index_to_stdout() {
    let temp_dir = asset_tree(&["zyc_ReaPet.lua", "lib/stats.lua"]);

    reaindex(temp_dir.path())
        .args(["--commit", "abcdef1234"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#))
        .stdout(predicate::str::contains(r#"<index version="1" name="Zyc Scripts" commit="abcdef1">"#))
        .stdout(predicate::str::contains(
            r#"<source main="main">https://github.com/YichengZ/zyc-scripts/raw/main/Release/REAPER/Scripts/ReaPet/zyc_ReaPet.lua</source>"#,
        ))
        .stdout(predicate::str::contains(
            "<source>https://github.com/YichengZ/zyc-scripts/raw/main/Release/REAPER/Scripts/ReaPet/lib/stats.lua</source>",
        ))
        .stdout(predicate::str::ends_with("</index>\n"));
}

#[test]
fn test_overrides_repository_and_branch() {
    let temp_dir = asset_tree(&["zyc_ReaPet.lua"]);

    reaindex(temp_dir.path())
        .args(["--commit", "abcdef1", "--repo-url", "https://example.org/fork/", "-b", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://example.org/fork/raw/dev/Release/REAPER/Effects/zyc_LFO.jsfx",
        ))
        .stdout(predicate::str::contains(r#"<link rel="website">https://example.org/fork</link>"#));
}

#[test]
fn test_json_format() {
    let temp_dir = asset_tree(&["zyc_ReaPet.lua"]);

    let output = reaindex(temp_dir.path())
        .args(["--commit", "abcdef1", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["commit"], "abcdef1");
    assert_eq!(value["categories"].as_array().unwrap().len(), 2);
}

#[test]
fn test_output_file() {
    let temp_dir = asset_tree(&["zyc_ReaPet.lua"]);

    reaindex(temp_dir.path())
        .args(["--commit", "abcdef1", "-o", "index.xml"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(temp_dir.path().join("index.xml")).unwrap();
    assert!(written.contains(r#"commit="abcdef1""#));
}

#[test]
fn test_exclude_pattern() {
    let temp_dir = asset_tree(&["zyc_ReaPet.lua", "assets/draft.png", "assets/cat.png"]);

    reaindex(temp_dir.path())
        .args(["--commit", "abcdef1", "--exclude", "draft.*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("assets/cat.png"))
        .stdout(predicate::str::contains("draft.png").not());
}

#[test]
fn test_missing_asset_directory_is_not_fatal() {
    let temp_dir = tempdir().unwrap();

    reaindex(temp_dir.path())
        .args(["--commit", "abcdef1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<source main="main">"#));
}

#[test]
fn test_init_creates_config_once() {
    let temp_dir = tempdir().unwrap();

    reaindex(temp_dir.path())
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains(".reaindex.toml"));

    let config = fs::read_to_string(temp_dir.path().join(".reaindex.toml")).unwrap();
    assert!(config.contains("repo_url"));

    reaindex(temp_dir.path())
        .arg("--init")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_file_is_picked_up() {
    let temp_dir = asset_tree(&["zyc_ReaPet.lua"]);
    fs::write(
        temp_dir.path().join(".reaindex.toml"),
        "branch = \"release\"\ncommit = \"0123456789\"\n",
    )
    .unwrap();

    reaindex(temp_dir.path())
        .args(["--config", ".reaindex.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"commit="0123456""#))
        .stdout(predicate::str::contains("/raw/release/"));
}

#[test]
fn test_zero_arguments_ignore_stray_config_file() {
    let temp_dir = asset_tree(&["zyc_ReaPet.lua"]);
    fs::write(
        temp_dir.path().join(".reaindex.toml"),
        "branch = \"release\"\nexclude_patterns = [\"*.lua\"]\n",
    )
    .unwrap();

    reaindex(temp_dir.path())
        .args(["--commit", "abcdef1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<source main="main">https://github.com/YichengZ/zyc-scripts/raw/main/Release/REAPER/Scripts/ReaPet/zyc_ReaPet.lua</source>"#,
        ))
        .stdout(predicate::str::contains("/raw/release/").not());
}

#[test]
fn test_hidden_and_duplicate_main_files_are_left_out() {
    let temp_dir = asset_tree(&[
        "zyc_ReaPet.lua",
        "old_zyc_ReaPet.lua",
        ".hidden.lua",
        ".cache/x.json",
        "lib/stats.lua",
    ]);

    let output = reaindex(temp_dir.path())
        .args(["--commit", "abcdef1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let script_sources: Vec<&str> = stdout
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("<source") && line.contains("/Scripts/"))
        .collect();

    assert_eq!(
        script_sources,
        vec![
            r#"<source main="main">https://github.com/YichengZ/zyc-scripts/raw/main/Release/REAPER/Scripts/ReaPet/old_zyc_ReaPet.lua</source>"#,
            "<source>https://github.com/YichengZ/zyc-scripts/raw/main/Release/REAPER/Scripts/ReaPet/lib/stats.lua</source>",
        ]
    );
}

#[test]
fn test_invalid_config_is_critical() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join(".reaindex.toml"), "no_such_key = true\n").unwrap();

    reaindex(temp_dir.path())
        .args(["--commit", "abcdef1", "--config", ".reaindex.toml"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Critical Error"));
}

#[test]
fn test_missing_explicit_config_is_critical() {
    let temp_dir = tempdir().unwrap();

    reaindex(temp_dir.path())
        .args(["--commit", "abcdef1", "--config", "missing.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_commit_unavailable_outside_repository() {
    let temp_dir = asset_tree(&["zyc_ReaPet.lua"]);
    let ceiling = temp_dir.path().parent().unwrap();

    reaindex(temp_dir.path())
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--commit"));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let temp_dir = tempdir().unwrap();

    reaindex(temp_dir.path())
        .args(["--quiet", "--verbose"])
        .assert()
        .failure();
}
