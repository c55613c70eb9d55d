mod common;

use bplate::capture::{capture, CaptureOptions};
use bplate::config::config_path;
use bplate::materialize::materialize;
use bplate::storage::Storage;
use common::{write, ScriptedPrompter};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_capture_then_init_reproduces_tree() {
    let data = TempDir::new().unwrap();
    let proj = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(proj.path().join("Cargo.toml"), "[package]");
    write(proj.path().join("src").join("main.rs"), "fn main() {}");
    write(proj.path().join("src").join("bin").join("tool.rs"), "");
    write(proj.path().join("docs").join("guide").join("intro.md"), "# Intro");

    let storage = Storage::new(data.path());
    let prompt = ScriptedPrompter::new(false, "rust-app");
    let captured = capture(&storage, &prompt, proj.path(), &CaptureOptions::default()).unwrap();

    let destination = out.path().join("generated");
    let report = materialize(&storage, "rust-app", &destination).unwrap();
    assert_eq!(report.files_copied, captured.files_copied);

    // The source gained a sidecar during capture; the generated tree must not have one.
    fs::remove_file(config_path(proj.path())).unwrap();
    assert!(!dir_diff::is_different(proj.path(), &destination).unwrap());
}

#[test]
fn test_init_excludes_ignored_files() {
    let data = TempDir::new().unwrap();
    let proj = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(config_path(proj.path()), r#"{"name": "py", "ignore_files": ["*.pyc", "venv"]}"#);
    write(proj.path().join("app.py"), "");
    write(proj.path().join("app.pyc"), "");
    write(proj.path().join("venv").join("bin").join("python"), "");
    write(proj.path().join("__pycache__").join("app.cpython.pyc"), "");

    let storage = Storage::new(data.path());
    let prompt = ScriptedPrompter::new(false, "");
    capture(&storage, &prompt, proj.path(), &CaptureOptions::default()).unwrap();

    let report = materialize(&storage, "py", out.path()).unwrap();
    assert_eq!(report.files_copied, 1);
    assert!(out.path().join("app.py").is_file());
    assert!(!out.path().join("app.pyc").exists());
    assert!(!out.path().join("venv").exists());
    assert!(!out.path().join("__pycache__").exists());
    assert!(!config_path(out.path()).exists());
}

#[test]
fn test_init_overwrites_existing_files() {
    let data = TempDir::new().unwrap();
    let proj = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write(proj.path().join("a.txt"), "stored");
    write(out.path().join("a.txt"), "local");
    write(out.path().join("untouched.txt"), "local");

    let storage = Storage::new(data.path());
    let prompt = ScriptedPrompter::new(false, "demo");
    capture(&storage, &prompt, proj.path(), &CaptureOptions::default()).unwrap();
    materialize(&storage, "demo", out.path()).unwrap();

    assert_eq!(fs::read_to_string(out.path().join("a.txt")).unwrap(), "stored");
    assert_eq!(fs::read_to_string(out.path().join("untouched.txt")).unwrap(), "local");
}
