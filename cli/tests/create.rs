//! # Linkdrop CLI Create Integration Tests
//!
//! File: cli/tests/create.rs
//!
//! Runs `linkdrop create` against real temporary directories and checks both
//! the command's output and what ends up on disk.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[cfg(unix)]
#[test]
fn test_create_defaults_name_to_source_file_name() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("create")
        .arg(&ws.source)
        .arg(&ws.dest)
        .arg("--no-reveal")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created link"));

    let link = ws.dest.join("doc.txt");
    assert!(link.is_symlink());
    assert_eq!(fs::read_link(&link).unwrap(), ws.source);
}

#[cfg(unix)]
#[test]
fn test_create_with_explicit_name() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["create", "--name", "renamed"])
        .arg(&ws.source)
        .arg(&ws.dest)
        .assert()
        .success();

    assert_eq!(fs::read_link(ws.dest.join("renamed")).unwrap(), ws.source);
    assert!(!ws.dest.join("doc.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_create_uses_destination_from_environment() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("create")
        .arg(&ws.source)
        .env("LINKDROP_DEST", &ws.dest)
        .assert()
        .success();

    assert!(ws.dest.join("doc.txt").is_symlink());
}

#[cfg(unix)]
#[test]
fn test_create_uses_configured_destination() {
    let ws = Workspace::new();
    fs::write(
        ws.root.path().join("config.toml"),
        format!("[links]\ndefault_destination = {:?}\n", ws.dest.display().to_string()),
    )
    .unwrap();

    ws.cmd().arg("create").arg(&ws.source).assert().success();
    assert!(ws.dest.join("doc.txt").is_symlink());
}

#[cfg(unix)]
#[test]
fn test_create_stores_backslash_source_verbatim() {
    let ws = Workspace::new();
    let backslashed = ws.root.path().join(r"a\b");
    fs::write(&backslashed, "right").unwrap();
    fs::write(ws.root.path().join("ab"), "wrong").unwrap();

    ws.cmd()
        .args(["create", "--name", "l", "--no-reveal"])
        .arg(&backslashed)
        .arg(&ws.dest)
        .assert()
        .success();

    let link = ws.dest.join("l");
    assert_eq!(fs::read_link(&link).unwrap(), backslashed);
    assert_eq!(fs::read_to_string(&link).unwrap(), "right");
}

#[cfg(unix)]
#[test]
fn test_create_keeps_literal_tilde_and_quotes() {
    let ws = Workspace::new();
    let odd = ws.root.path().join("'~quoted'");
    fs::write(&odd, "odd").unwrap();

    ws.cmd()
        .args(["create", "--no-reveal"])
        .arg(&odd)
        .arg(&ws.dest)
        .assert()
        .success();

    assert_eq!(fs::read_link(ws.dest.join("'~quoted'")).unwrap(), odd);
}

#[test]
fn test_create_refuses_to_overwrite_real_file() {
    let ws = Workspace::new();
    let occupied = ws.dest.join("doc.txt");
    fs::write(&occupied, "precious").unwrap();

    ws.cmd()
        .arg("create")
        .arg(&ws.source)
        .arg(&ws.dest)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Refusing to overwrite"));

    assert!(!occupied.is_symlink());
    assert_eq!(fs::read_to_string(&occupied).unwrap(), "precious");
}

#[test]
fn test_create_missing_source_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("create")
        .arg(ws.root.path().join("missing.txt"))
        .arg(&ws.dest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing exists at"));
    assert_eq!(fs::read_dir(&ws.dest).unwrap().count(), 0);
}

#[test]
fn test_create_destination_must_be_directory() {
    let ws = Workspace::new();
    let not_a_dir = ws.root.path().join("plain.txt");
    fs::write(&not_a_dir, "x").unwrap();

    ws.cmd()
        .arg("create")
        .arg(&ws.source)
        .arg(&not_a_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
    assert_eq!(fs::read_to_string(&not_a_dir).unwrap(), "x");
}

#[test]
fn test_create_rejects_name_with_separator() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["create", "--name", "nested/link"])
        .arg(&ws.source)
        .arg(&ws.dest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid link name"));
}

#[test]
fn test_create_rejects_empty_source() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["create", ""])
        .arg(&ws.dest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("SOURCE cannot be empty"));
}

#[cfg(unix)]
#[test]
fn test_reveal_failure_does_not_fail_create() {
    let ws = Workspace::new();
    fs::write(
        ws.root.path().join("config.toml"),
        "[reveal]\ncommand = \"linkdrop-no-such-reveal-program\"\n",
    )
    .unwrap();

    ws.cmd()
        .arg("create")
        .arg(&ws.source)
        .arg(&ws.dest)
        .arg("--reveal")
        .assert()
        .success();
    assert!(ws.dest.join("doc.txt").is_symlink());
}
