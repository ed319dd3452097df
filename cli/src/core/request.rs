//! # Link Request and Result
//!
//! File: cli/src/core/request.rs
//!
//! `LinkRequest` is built fresh for every operation and handed to the
//! coordinator, which consumes it once. Its constructor enforces the name
//! invariant, so a request that exists always names a single path component.
//! `LinkResult` is the terminal outcome reported back to the caller.
//!
use crate::core::error::{LinkError, LinkErrorKind, LinkOpResult};
use std::path::{Path, PathBuf};

/// One link-creation operation: create `destination_dir/link_name` pointing to `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    source: PathBuf,
    destination_dir: PathBuf,
    link_name: String,
}

impl LinkRequest {
    /// Builds a request, rejecting link names that are not a single, non-empty path component.
    pub fn new(
        source: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        link_name: impl Into<String>,
    ) -> LinkOpResult<Self> {
        let link_name = link_name.into();
        validate_link_name(&link_name)?;
        Ok(Self {
            source: source.into(),
            destination_dir: destination_dir.into(),
            link_name,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination_dir(&self) -> &Path {
        &self.destination_dir
    }

    pub fn link_name(&self) -> &str {
        &self.link_name
    }

    /// The path at which the link will be created.
    pub fn target(&self) -> PathBuf {
        self.destination_dir.join(&self.link_name)
    }
}

/// Checks that `name` can be used as the final component of the link path.
pub fn validate_link_name(name: &str) -> LinkOpResult<()> {
    let reason = if name.is_empty() {
        Some("must not be empty")
    } else if name.chars().any(std::path::is_separator) {
        Some("must not contain a path separator")
    } else if name == "." || name == ".." {
        Some("must not be a relative directory reference")
    } else if name.contains('\0') {
        Some("must not contain a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(LinkError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Terminal outcome of a coordinated link operation.
#[derive(Debug)]
pub enum LinkResult {
    /// The link was created at this path.
    Created(PathBuf),
    /// The operation stopped with this error; nothing was created.
    Failed(LinkError),
}

impl LinkResult {
    pub fn is_created(&self) -> bool {
        matches!(self, LinkResult::Created(_))
    }

    /// The failure classification, if the operation failed.
    pub fn error_kind(&self) -> Option<LinkErrorKind> {
        match self {
            LinkResult::Created(_) => None,
            LinkResult::Failed(e) => Some(e.kind()),
        }
    }
}

impl From<LinkOpResult<PathBuf>> for LinkResult {
    fn from(result: LinkOpResult<PathBuf>) -> Self {
        match result {
            Ok(path) => LinkResult::Created(path),
            Err(e) => LinkResult::Failed(e),
        }
    }
}
