//! # Linkdrop Symbolic Link Creation
//!
//! File: cli/src/common/fs/links.rs
//!
//! ## Overview
//!
//! This module performs the one operation linkdrop exists for: creating a
//! symbolic link at `destination_dir/link_name` that points to `source`.
//!
//! ## Architecture
//!
//! `SymlinkCreator::create_link` enforces overwrite protection. If *anything*
//! occupies the target path (a file, a directory, another symlink, even a
//! dangling one) the request is refused with `AlreadyExists` and the
//! filesystem is left untouched. No backup, rename or replacement is ever
//! attempted.
//!
//! The link stores `source` exactly as given. Relative sources stay relative
//! (and are therefore resolved relative to the link's directory by the OS);
//! nothing is canonicalized.
//!
//! Native failures are classified through `LinkError::from_io`, so a failure
//! from the OS keeps its message and gains a kind (`PermissionDenied`, `Io`, ...).
//! If another process creates the target between the check and the call,
//! the OS reports `AlreadyExists` and that is what the caller sees.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{links::SymlinkCreator, provider::LocalFileSystem};
//! use crate::core::request::LinkRequest;
//!
//! let request = LinkRequest::new("/Users/x/doc.txt", "/Users/x/Desktop", "doc.txt")?;
//! let created = SymlinkCreator::new(&LocalFileSystem).create_link(&request)?;
//! assert_eq!(created, std::path::PathBuf::from("/Users/x/Desktop/doc.txt"));
//! ```
//!
use crate::common::fs::provider::FileSystem;
use crate::core::error::{LinkError, LinkOpResult};
use crate::core::request::LinkRequest;
use std::path::PathBuf;
use tracing::{info, warn};

/// Creates symbolic links without ever replacing an existing entry.
pub struct SymlinkCreator<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> SymlinkCreator<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Creates the link described by `request`.
    ///
    /// # Arguments
    ///
    /// * `request` - The source, destination directory and link name. The name has
    ///   already been checked to be a single path component.
    ///
    /// # Returns
    ///
    /// * `LinkOpResult<PathBuf>` - The path of the new link (`destination_dir/link_name`).
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if any entry is present at the target path.
    /// - `NotFound` if the destination directory disappeared before the link was created.
    /// - `PermissionDenied` / `Io` for other native failures, with the OS message attached.
    pub fn create_link(&self, request: &LinkRequest) -> LinkOpResult<PathBuf> {
        let target = request.target();
        info!(
            "Creating symlink '{}' in {:?} -> {:?}",
            request.link_name(),
            request.destination_dir(),
            request.source()
        );

        // Anything at all at the target blocks creation, including another symlink.
        let occupant = self
            .fs
            .entry_kind(&target)
            .map_err(|e| LinkError::from_io(&target, e))?;
        if let Some(kind) = occupant {
            warn!("Not overwriting existing {} at {:?}", kind, target);
            return Err(LinkError::AlreadyExists { path: target });
        }

        self.fs
            .create_symlink(&target, request.source())
            .map_err(|e| LinkError::from_io(&target, e))?;

        info!("Created symlink: {:?} -> {:?}", target, request.source());
        Ok(target)
    }
}
