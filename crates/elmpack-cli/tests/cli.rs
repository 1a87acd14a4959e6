//! End-to-end tests for the `elmpack` binary.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn elmpack(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("elmpack").unwrap();
    cmd.current_dir(project)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("ELMPACK_DEV_SERVER__PORT")
        .env_remove("ELMPACK_DEV_SERVER__HOST");
    cmd
}

fn project_with_entry() -> TempDir {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("index.js"),
        "import { Elm } from './Main.elm';\nElm.Main.init({ node: document.body });\n",
    )
    .unwrap();
    temp
}

fn print_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "print failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    elmpack(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("print"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("match"))
        .stdout(predicate::str::contains("candidates"));
}

#[test]
fn test_print_default_profile() {
    let temp = TempDir::new().unwrap();
    let value = print_json(elmpack(temp.path()).arg("print"));

    assert_eq!(value["entry"], "./src/index.js");
    assert_eq!(value["output"]["filename"], "index.js");
    assert_eq!(value["output"]["publicPath"], "/dist");
    assert_eq!(value["resolve"]["extensions"], serde_json::json!([".elm", ".js"]));
    assert_eq!(value["devtool"], "source-map");
    assert_eq!(value["devServer"]["host"], "0.0.0.0");
    assert_eq!(value["devServer"]["port"], 3000);
    assert_eq!(value["devServer"]["disableHostCheck"], true);

    let out_dir = value["output"]["path"].as_str().unwrap();
    assert!(Path::new(out_dir).is_absolute());
    assert!(out_dir.ends_with("dist"));
}

#[test]
fn test_print_respects_root_flag() {
    let temp = TempDir::new().unwrap();
    let value = print_json(elmpack(temp.path()).args(["print", "--root", "/srv/app"]));
    assert_eq!(value["output"]["path"], "/srv/app/dist");
}

#[test]
fn test_overrides_file_in_root_is_picked_up() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("elmpack.toml"),
        "[dev_server]\nport = 8080\nhost = \"127.0.0.1\"\n",
    )
    .unwrap();

    let value = print_json(elmpack(temp.path()).arg("print"));
    assert_eq!(value["devServer"]["port"], 8080);
    assert_eq!(value["devServer"]["host"], "127.0.0.1");
}

#[test]
fn test_env_overrides_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("elmpack.toml"), "[dev_server]\nport = 8080\n").unwrap();

    let value = print_json(
        elmpack(temp.path())
            .env("ELMPACK_DEV_SERVER__PORT", "4000")
            .arg("print"),
    );
    assert_eq!(value["devServer"]["port"], 4000);
}

#[test]
fn test_unrelated_prefixed_env_vars_are_ignored() {
    let temp = TempDir::new().unwrap();
    let value = print_json(
        elmpack(temp.path())
            .env("ELMPACK_LOG", "debug")
            .env("ELMPACK_HOME", "/opt/elmpack")
            .env("ELMPACK_DEV_SERVER__PORT", "4000")
            .arg("print"),
    );
    assert_eq!(value["devServer"]["port"], 4000);
    assert_eq!(value["entry"], "./src/index.js");
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    elmpack(temp.path())
        .args(["print", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_print_toml() {
    let temp = TempDir::new().unwrap();
    elmpack(temp.path())
        .args(["print", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("elm-webpack-loader"))
        .stdout(predicate::str::contains("./src/index.js"));
}

#[test]
fn test_printed_overrides_load_back() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("elmpack.toml"), "[dev_server]\nport = 8080\n").unwrap();
    let before = print_json(elmpack(temp.path()).arg("print"));

    let output = elmpack(temp.path())
        .args(["print", "--format", "toml", "--overrides"])
        .output()
        .unwrap();
    assert!(output.status.success(), "print failed: {output:?}");
    fs::write(temp.path().join("elmpack.toml"), &output.stdout).unwrap();

    let after = print_json(elmpack(temp.path()).arg("print"));
    assert_eq!(after, before);
    assert_eq!(after["devServer"]["port"], 8080);
}

#[test]
fn test_check_passes_with_entry() {
    let temp = project_with_entry();
    elmpack(temp.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_check_reports_missing_entry() {
    let temp = TempDir::new().unwrap();
    elmpack(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry point not found"));
}

#[test]
fn test_check_schema_only_skips_filesystem() {
    let temp = TempDir::new().unwrap();
    elmpack(temp.path())
        .args(["check", "--schema-only"])
        .assert()
        .success();
}

#[test]
fn test_check_reports_bad_override_field() {
    let temp = project_with_entry();
    fs::write(temp.path().join("elmpack.toml"), "[output]\npublic_path = \"dist\"\n").unwrap();

    elmpack(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("output.publicPath"));
}

#[test]
fn test_match_reports_loaders() {
    let temp = TempDir::new().unwrap();
    elmpack(temp.path())
        .args(["match", "src/Main.elm", "elm-stuff/Main.elm", "src/index.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/Main.elm\telm-webpack-loader"))
        .stdout(predicate::str::contains("elm-stuff/Main.elm\t(excluded)"))
        .stdout(predicate::str::contains("src/index.js\t(no rule)"));
}

#[test]
fn test_candidates_in_extension_order() {
    let temp = TempDir::new().unwrap();
    elmpack(temp.path())
        .args(["candidates", "./Page/Home"])
        .assert()
        .success()
        .stdout("./Page/Home.elm\n./Page/Home.js\n");
}
