//! # Linkdrop Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the commands and the core workflow, kept apart
//! from command-specific logic (`commands::`) and core types (`core::`).
//!
//! - **`fs`**: filesystem provider, path validation and link creation.
//! - **`ui`**: desktop interaction, i.e. revealing a link in the file browser.
//!

/// Filesystem operations (provider, validation, links).
pub mod fs;
/// Desktop interaction (reveal in file browser).
pub mod ui;
