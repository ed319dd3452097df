//! # Linkdrop Path Validation
//!
//! File: cli/src/common/fs/validate.rs
//!
//! ## Overview
//!
//! Turns raw path input into checked paths before any link is created.
//!
//! - **`normalize_input`**: cleans up a path as it arrives from a drop or a
//!   paste into the terminal (surrounding whitespace, shell quoting,
//!   backslash-escaped spaces, a leading `~`). It never canonicalizes: the
//!   link must store the source exactly as the user gave it.
//! - **`PathValidator::validate`**: checks that something exists at a path and,
//!   when asked, that it is a directory. The check is a snapshot of the
//!   filesystem at call time; callers must tolerate the entry changing before use.
//!
use crate::common::fs::provider::{EntryKind, FileSystem};
use crate::core::error::{LinkError, LinkOpResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A path that existed, with the kind of entry found, at the moment it was validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPath {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Validates candidate source and destination paths against a `FileSystem`.
pub struct PathValidator<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> PathValidator<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Checks that an entry exists at `path`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing exists at `path`.
    /// - `WrongKind` if `require_directory` is set and `path` does not resolve to a directory.
    ///   A symlink pointing at a directory is accepted.
    /// - `PermissionDenied` / `Io` if the metadata lookup itself fails.
    pub fn validate(&self, path: &Path, require_directory: bool) -> LinkOpResult<ValidatedPath> {
        let kind = self
            .fs
            .entry_kind(path)
            .map_err(|e| LinkError::from_io(path, e))?
            .ok_or_else(|| LinkError::NotFound {
                path: path.to_path_buf(),
            })?;

        if require_directory {
            let is_directory = match kind {
                EntryKind::Directory => true,
                EntryKind::Symlink => self.fs.is_dir(path),
                EntryKind::File => false,
            };
            if !is_directory {
                debug!("Rejecting {:?}: {} where a directory is required", path, kind);
                return Err(LinkError::WrongKind {
                    path: path.to_path_buf(),
                });
            }
        }

        debug!("Validated {:?} ({})", path, kind);
        Ok(ValidatedPath {
            path: path.to_path_buf(),
            kind,
        })
    }
}

/// Cleans up a raw path string as typed, pasted or dropped into a terminal.
pub fn normalize_input(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = strip_matching_quotes(trimmed);
    let unescaped = if unquoted.len() == trimmed.len() {
        unescape_shell(unquoted)
    } else {
        // Quoted input is taken literally.
        unquoted.to_string()
    };
    PathBuf::from(shellexpand::tilde(&unescaped).into_owned())
}

fn strip_matching_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(unix)]
fn unescape_shell(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

// Backslash is the separator on Windows.
#[cfg(not(unix))]
fn unescape_shell(s: &str) -> String {
    s.to_string()
}
