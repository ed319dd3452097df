//! # Linkdrop Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests. Each `.rs` file in `cli/tests/`
//! is compiled as its own test crate and pulls this module in with `mod common;`.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// # Get Linkdrop Command (`linkdrop_cmd`)
///
/// An `assert_cmd::Command` for the compiled `linkdrop` binary, isolated from
/// the user's environment: it reads an empty config file from `config_dir`
/// and ignores any `LINKDROP_DEST` set in the calling shell.
pub fn linkdrop_cmd(config_dir: &Path) -> Command {
    let config_path = config_dir.join("config.toml");
    if !config_path.exists() {
        std::fs::write(&config_path, "").expect("Failed to write empty test config");
    }
    let mut cmd = Command::cargo_bin("linkdrop").expect("Failed to find linkdrop binary for testing");
    cmd.env("LINKDROP_CONFIG", config_path)
        .env_remove("LINKDROP_DEST")
        .env_remove("RUST_LOG");
    cmd
}

/// A scratch area with a source file and an empty destination directory.
pub struct Workspace {
    pub root: TempDir,
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let source = root.path().join("doc.txt");
        std::fs::write(&source, "document").expect("Failed to write source file");
        let dest = root.path().join("Desktop");
        std::fs::create_dir(&dest).expect("Failed to create destination dir");
        Self { root, source, dest }
    }

    pub fn cmd(&self) -> Command {
        linkdrop_cmd(self.root.path())
    }
}
