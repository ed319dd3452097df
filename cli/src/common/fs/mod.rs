//! # Linkdrop Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Everything that touches the filesystem on behalf of the link workflow.
//!
//! ## Architecture
//!
//! - **`provider`**: the `FileSystem` trait (entry kind, symlink creation, link reading)
//!   and its `LocalFileSystem` implementation. The other modules only go through this trait.
//! - **`validate`**: `PathValidator` (existence and directory checks) and input normalization.
//! - **`links`**: `SymlinkCreator`, which creates a link only when its target path is free.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{links::SymlinkCreator, provider::LocalFileSystem, validate::PathValidator};
//!
//! let fs = LocalFileSystem;
//! PathValidator::new(&fs).validate(&dest, true)?;
//! let created = SymlinkCreator::new(&fs).create_link(&request)?;
//! ```
//!

/// Creating symbolic links with overwrite protection (`SymlinkCreator`).
pub mod links;
/// The `FileSystem` abstraction and the local implementation.
pub mod provider;
/// Path validation and normalization of raw path input.
pub mod validate;
