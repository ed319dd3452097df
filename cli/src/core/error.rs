//! # Linkdrop Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout linkdrop. There are two
//! layers:
//!
//! - `LinkError`: the classified outcome of a failed link operation. Every
//!   failure inside the validation / creation pipeline is returned as one of
//!   these values and never escapes the coordinator as anything else. Each
//!   variant maps onto a `LinkErrorKind` so callers can branch on the
//!   classification without string matching.
//! - `ToolError` + `Result<T>`: application-level failures (configuration,
//!   arguments) carried through `anyhow` in the command handlers.
//!
//! ## Examples
//!
//! ```rust
//! match coordinator.execute(source, dest, name).await {
//!     LinkResult::Created(path) => println!("Created {}", path.display()),
//!     LinkResult::Failed(e) if e.kind() == LinkErrorKind::AlreadyExists => {
//!         eprintln!("Something is already there: {e}");
//!     }
//!     LinkResult::Failed(e) => eprintln!("Error: {e}"),
//! }
//! ```
//!
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Classification of a failed link operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkErrorKind {
    /// Nothing exists at a path that was required to exist.
    NotFound,
    /// A directory was required but something else was found.
    WrongKind,
    /// The link target is already occupied (overwrite protection).
    AlreadyExists,
    /// The operating system refused access.
    PermissionDenied,
    /// The link name is empty or is not a single path component.
    InvalidName,
    /// Any other native failure.
    Io,
}

impl std::fmt::Display for LinkErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LinkErrorKind::NotFound => "not found",
            LinkErrorKind::WrongKind => "wrong kind",
            LinkErrorKind::AlreadyExists => "already exists",
            LinkErrorKind::PermissionDenied => "permission denied",
            LinkErrorKind::InvalidName => "invalid name",
            LinkErrorKind::Io => "i/o error",
        };
        f.write_str(label)
    }
}

/// A failed link operation, with the path involved and the native cause when there is one.
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Nothing exists at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not a directory", path.display())]
    WrongKind { path: PathBuf },

    #[error("Refusing to overwrite existing entry at {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Permission denied at {}: {source}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid link name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Link worker stopped before reporting a result: {reason}")]
    WorkerFailed { reason: String },
}

impl LinkError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> LinkErrorKind {
        match self {
            LinkError::NotFound { .. } => LinkErrorKind::NotFound,
            LinkError::WrongKind { .. } => LinkErrorKind::WrongKind,
            LinkError::AlreadyExists { .. } => LinkErrorKind::AlreadyExists,
            LinkError::PermissionDenied { .. } => LinkErrorKind::PermissionDenied,
            LinkError::InvalidName { .. } => LinkErrorKind::InvalidName,
            LinkError::Io { .. } | LinkError::WorkerFailed { .. } => LinkErrorKind::Io,
        }
    }

    /// Classifies a native I/O error that occurred while operating on `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => LinkError::NotFound { path },
            io::ErrorKind::AlreadyExists => LinkError::AlreadyExists { path },
            io::ErrorKind::PermissionDenied => LinkError::PermissionDenied { path, source },
            _ => LinkError::Io { path, source },
        }
    }
}

/// Result type for the link pipeline (validator, creator, coordinator).
pub type LinkOpResult<T> = std::result::Result<T, LinkError>;

/// Application errors raised outside the link pipeline.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error, used by command handlers.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let exists = LinkError::AlreadyExists {
            path: PathBuf::from("/tmp/desk/doc.txt"),
        };
        assert_eq!(
            exists.to_string(),
            "Refusing to overwrite existing entry at /tmp/desk/doc.txt"
        );

        let wrong = LinkError::WrongKind {
            path: PathBuf::from("/tmp/file.txt"),
        };
        assert_eq!(wrong.to_string(), "/tmp/file.txt is not a directory");

        let name = LinkError::InvalidName {
            name: "a/b".into(),
            reason: "must not contain a path separator",
        };
        assert_eq!(
            name.to_string(),
            "Invalid link name 'a/b': must not contain a path separator"
        );

        let cfg = ToolError::Config("bad destination".to_string());
        assert_eq!(cfg.to_string(), "Configuration error: bad destination");
    }

    #[test]
    fn test_from_io_classification() {
        let path = Path::new("/somewhere");
        let cases = [
            (io::ErrorKind::NotFound, LinkErrorKind::NotFound),
            (io::ErrorKind::AlreadyExists, LinkErrorKind::AlreadyExists),
            (io::ErrorKind::PermissionDenied, LinkErrorKind::PermissionDenied),
            (io::ErrorKind::Other, LinkErrorKind::Io),
            (io::ErrorKind::Unsupported, LinkErrorKind::Io),
        ];
        for (io_kind, expected) in cases {
            let err = LinkError::from_io(path, io::Error::new(io_kind, "native message"));
            assert_eq!(err.kind(), expected, "io kind {:?}", io_kind);
        }
    }

    #[test]
    fn test_native_message_is_surfaced() {
        let err = LinkError::from_io(
            Path::new("/ro/link"),
            io::Error::new(io::ErrorKind::PermissionDenied, "Operation not permitted"),
        );
        assert!(err.to_string().contains("Operation not permitted"));
        assert!(err.to_string().contains("/ro/link"));
    }

    #[test]
    fn test_worker_failure_is_io_kind() {
        let err = LinkError::WorkerFailed {
            reason: "task panicked".into(),
        };
        assert_eq!(err.kind(), LinkErrorKind::Io);
        assert_eq!(LinkErrorKind::Io.to_string(), "i/o error");
    }
}
