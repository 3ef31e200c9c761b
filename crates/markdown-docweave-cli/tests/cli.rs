use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

const SAMPLE: &str = "# Quarterly Report\n\nRevenue is **up**.\n\n| Region | Total |\n|---|---|\n| North | 10 |\n\n- one\n- two\n";

/// A scratch directory used as both HOME and the input location, so no
/// real user configuration leaks into the run.
fn workspace() -> (TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.md");
    fs::write(&input, SAMPLE).unwrap();
    (dir, input)
}

fn cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("markdown-docweave");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn parse_prints_blocks_as_json() {
    let (dir, input) = workspace();
    cmd(&dir)
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "heading""#))
        .stdout(predicate::str::contains(r#""type": "table""#))
        .stdout(predicate::str::contains(r#""plain": "Revenue is up.""#));
}

#[test]
fn compile_prints_operations() {
    let (dir, input) = workspace();
    cmd(&dir)
        .args(["compile", "--brand", "corporate"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""op": "insert_text""#))
        .stdout(predicate::str::contains(r#""op": "create_list_run""#))
        .stdout(predicate::str::contains(r#""font_family": "Arial""#))
        .stdout(predicate::str::contains(r#""tables""#));
}

#[test]
fn publish_renders_document() {
    let (dir, input) = workspace();
    cmd(&dir)
        .args(["publish", "--brand", "editorial"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quarterly Report\nRevenue is up.\n"))
        .stdout(predicate::str::contains("| Region | Total |\n| North | 10 |\n"))
        .stdout(predicate::str::contains("one\ntwo\n"));
}

#[test]
fn publish_can_show_batches() {
    let (dir, input) = workspace();
    cmd(&dir)
        .args(["publish", "--brand", "modern", "--show-batches"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""op": "set_document_mode""#))
        .stdout(predicate::str::contains(r#""op": "insert_table_grid""#))
        .stdout(predicate::str::contains(r#""op": "style_table_cell""#));
}

#[test]
fn brands_lists_builtins() {
    let (dir, _) = workspace();
    cmd(&dir)
        .arg("brands")
        .assert()
        .success()
        .stdout("corporate\neditorial\nmodern\n");
}

#[test]
fn brands_file_adds_custom_brand() {
    let (dir, input) = workspace();
    let brands = dir.path().join("house.toml");
    fs::write(
        &brands,
        r#"
[brands.house.body]
font = "Georgia"
size = 12.0
color = { red = 0.1, green = 0.1, blue = 0.1 }
"#,
    )
    .unwrap();

    cmd(&dir)
        .arg("--brands-file")
        .arg(&brands)
        .arg("brands")
        .assert()
        .success()
        .stdout(predicate::str::contains("house"));

    cmd(&dir)
        .args(["compile", "--brand", "house"])
        .arg("--brands-file")
        .arg(&brands)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""font_family": "Georgia""#));
}

#[test]
fn default_brand_comes_from_config() {
    let (dir, input) = workspace();
    let config_dir = dir.path().join(".config").join("markdown-docweave");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "default_brand = \"corporate\"\n").unwrap();

    cmd(&dir)
        .arg("brands")
        .assert()
        .success()
        .stdout(predicate::str::contains("corporate (default)"));

    cmd(&dir)
        .arg("compile")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""font_family": "Arial""#));
}

#[test]
fn missing_brand_is_an_error() {
    let (dir, input) = workspace();
    cmd(&dir)
        .arg("publish")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no brand given"));
}

#[test]
fn unknown_brand_lists_available() {
    let (dir, input) = workspace();
    cmd(&dir)
        .args(["publish", "--brand", "neon"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unknown brand 'neon' (available: corporate, editorial, modern)",
        ));
}

#[test]
fn unreadable_input_is_reported() {
    let (dir, _) = workspace();
    cmd(&dir)
        .arg("parse")
        .arg(dir.path().join("absent.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}
