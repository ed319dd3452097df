//! # Linkdrop Filesystem Provider
//!
//! File: cli/src/common/fs/provider.rs
//!
//! ## Overview
//!
//! The link pipeline never touches `std::fs` directly. It talks to a
//! `FileSystem` implementation, which exposes exactly the three capabilities
//! the pipeline needs:
//!
//! - **`entry_kind`**: what, if anything, is at a path (without following a final symlink).
//! - **`is_dir`**: whether a path resolves to a directory (following symlinks).
//! - **`create_symlink`** / **`read_link`**: create a link and read its stored target.
//!
//! `LocalFileSystem` is the real implementation. Tests substitute recording or
//! failing implementations to check which operations the pipeline performs.
//!
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Classification of whatever currently exists at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => f.write_str("file"),
            EntryKind::Directory => f.write_str("directory"),
            EntryKind::Symlink => f.write_str("symlink"),
        }
    }
}

/// Filesystem operations used by the validator and the link creator.
pub trait FileSystem: Send + Sync {
    /// Returns the kind of entry at `path`, or `None` if nothing exists there.
    /// A symlink is reported as `Symlink` even when its target is missing.
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>>;

    /// Returns `true` if `path` resolves, through any symlinks, to a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates a symbolic link at `at` storing `pointing_to` verbatim.
    fn create_symlink(&self, at: &Path, pointing_to: &Path) -> io::Result<()>;

    /// Reads the path stored in the symbolic link at `path`.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;
}

/// `FileSystem` backed by the local operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        // `symlink_metadata` so a dangling link still counts as occupying the path.
        match fs::symlink_metadata(path) {
            Ok(meta) => {
                let file_type = meta.file_type();
                let kind = if file_type.is_symlink() {
                    EntryKind::Symlink
                } else if file_type.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                trace!("Entry at {:?} is a {}", path, kind);
                Ok(Some(kind))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_symlink(&self, at: &Path, pointing_to: &Path) -> io::Result<()> {
        debug!("symlink({:?} -> {:?})", at, pointing_to);
        platform_symlink(at, pointing_to)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }
}

#[cfg(unix)]
fn platform_symlink(at: &Path, pointing_to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(pointing_to, at)
}

#[cfg(windows)]
fn platform_symlink(at: &Path, pointing_to: &Path) -> io::Result<()> {
    // Windows needs to know up front whether the link refers to a directory.
    if pointing_to.is_dir() {
        std::os::windows::fs::symlink_dir(pointing_to, at)
    } else {
        std::os::windows::fs::symlink_file(pointing_to, at)
    }
}

#[cfg(not(any(unix, windows)))]
fn platform_symlink(_at: &Path, _pointing_to: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "Symbolic links are not supported on this platform",
    ))
}
