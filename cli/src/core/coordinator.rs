//! # Link Operation Coordinator
//!
//! File: cli/src/core/coordinator.rs
//!
//! ## Overview
//!
//! Sequences one link operation and reports exactly one terminal outcome.
//!
//! ## Architecture
//!
//! The steps run in a fixed order and the first failure stops the sequence:
//!
//! 1. `source` exists (any kind of entry).
//! 2. `destination_dir` exists and resolves to a directory.
//! 3. `link_name` is a single, non-empty path component (checked while building the `LinkRequest`).
//! 4. `SymlinkCreator::create_link`.
//!
//! Nothing is written before step 4, so a failure never leaves partial state
//! behind and nothing is retried.
//!
//! The whole sequence runs on tokio's blocking pool (`spawn_blocking`) so the
//! caller's task is never blocked on filesystem calls. `execute` returns a
//! `PendingLink` future that yields the `LinkResult`; `execute_with` awaits it
//! and hands the result to a callback, once, on the caller's task. Only the
//! immutable inputs go in and only the `LinkResult` comes back.
//!
//! Operations are meant to be issued one at a time. The coordinator holds no
//! per-operation state, so it does not need locking.
//!
use crate::common::fs::links::SymlinkCreator;
use crate::common::fs::provider::{FileSystem, LocalFileSystem};
use crate::common::fs::validate::PathValidator;
use crate::core::error::LinkError;
use crate::core::request::{LinkRequest, LinkResult};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Runs link operations against a `FileSystem` off the calling task.
#[derive(Clone)]
pub struct OperationCoordinator {
    fs: Arc<dyn FileSystem>,
}

impl Default for OperationCoordinator {
    fn default() -> Self {
        Self::new(Arc::new(LocalFileSystem))
    }
}

impl std::fmt::Debug for OperationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationCoordinator").finish_non_exhaustive()
    }
}

impl OperationCoordinator {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Starts a link operation and returns a handle resolving to its outcome.
    ///
    /// Must be called from within a tokio runtime.
    pub fn execute(
        &self,
        source: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        link_name: impl Into<String>,
    ) -> PendingLink {
        let fs = Arc::clone(&self.fs);
        let source = source.into();
        let destination_dir = destination_dir.into();
        let link_name = link_name.into();
        debug!(
            "Dispatching link operation: source={:?} dest={:?} name='{}'",
            source, destination_dir, link_name
        );
        let handle = tokio::task::spawn_blocking(move || {
            run_sequence(fs.as_ref(), source, destination_dir, link_name)
        });
        PendingLink { handle }
    }

    /// Runs a link operation and passes the outcome to `on_complete` exactly once.
    pub async fn execute_with<F>(
        &self,
        source: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        link_name: impl Into<String>,
        on_complete: F,
    ) where
        F: FnOnce(LinkResult),
    {
        let result = self.execute(source, destination_dir, link_name).await;
        on_complete(result);
    }
}

/// Validation then creation, short-circuiting on the first failure.
fn run_sequence(
    fs: &dyn FileSystem,
    source: PathBuf,
    destination_dir: PathBuf,
    link_name: String,
) -> LinkResult {
    let validator = PathValidator::new(fs);
    let outcome = validator
        .validate(&source, false)
        .and_then(|src| {
            debug!("Source {:?} is a {}", src.path, src.kind);
            validator.validate(&destination_dir, true)
        })
        .and_then(|_| LinkRequest::new(source, destination_dir, link_name))
        .and_then(|request| SymlinkCreator::new(fs).create_link(&request));

    match &outcome {
        Ok(path) => info!("Link operation succeeded: {:?}", path),
        Err(e) => warn!("Link operation failed ({}): {}", e.kind(), e),
    }
    outcome.into()
}

/// An in-flight link operation. Resolves to its `LinkResult` once.
#[derive(Debug)]
pub struct PendingLink {
    handle: JoinHandle<LinkResult>,
}

impl Future for PendingLink {
    type Output = LinkResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle).poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(join_err) => LinkResult::Failed(LinkError::WorkerFailed {
                reason: join_err.to_string(),
            }),
        })
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::fs::provider::EntryKind;
    use crate::core::error::LinkErrorKind;
    use std::collections::HashMap;
    use std::io;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// In-memory filesystem that records every symlink it is asked to create.
    #[derive(Default)]
    struct RecordingFs {
        entries: Mutex<HashMap<PathBuf, EntryKind>>,
        created: Mutex<Vec<(PathBuf, PathBuf)>>,
    }

    impl RecordingFs {
        fn with(entries: &[(&str, EntryKind)]) -> Self {
            let fs = Self::default();
            {
                let mut map = fs.entries.lock().unwrap();
                for (path, kind) in entries {
                    map.insert(PathBuf::from(path), *kind);
                }
            }
            fs
        }

        fn created(&self) -> Vec<(PathBuf, PathBuf)> {
            self.created.lock().unwrap().clone()
        }
    }

    impl FileSystem for RecordingFs {
        fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
            Ok(self.entries.lock().unwrap().get(path).copied())
        }
        fn is_dir(&self, path: &Path) -> bool {
            self.entries.lock().unwrap().get(path) == Some(&EntryKind::Directory)
        }
        fn create_symlink(&self, at: &Path, pointing_to: &Path) -> io::Result<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(at.to_path_buf(), EntryKind::Symlink);
            self.created
                .lock()
                .unwrap()
                .push((at.to_path_buf(), pointing_to.to_path_buf()));
            Ok(())
        }
        fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
            self.created
                .lock()
                .unwrap()
                .iter()
                .find(|(at, _)| at == path)
                .map(|(_, to)| to.clone())
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such link"))
        }
    }

    fn coordinator_over(fs: &Arc<RecordingFs>) -> OperationCoordinator {
        OperationCoordinator::new(Arc::clone(fs) as Arc<dyn FileSystem>)
    }

    #[tokio::test]
    async fn test_desktop_scenario() {
        let fs = Arc::new(RecordingFs::with(&[
            ("/Users/x/doc.txt", EntryKind::File),
            ("/Users/x/Desktop", EntryKind::Directory),
        ]));
        let result = coordinator_over(&fs)
            .execute("/Users/x/doc.txt", "/Users/x/Desktop", "doc.txt")
            .await;

        match result {
            LinkResult::Created(path) => {
                assert_eq!(path, PathBuf::from("/Users/x/Desktop/doc.txt"))
            }
            LinkResult::Failed(e) => panic!("expected success, got {e}"),
        }
        assert_eq!(
            fs.read_link(Path::new("/Users/x/Desktop/doc.txt")).unwrap(),
            PathBuf::from("/Users/x/doc.txt")
        );
    }

    #[tokio::test]
    async fn test_existing_real_file_is_already_exists() {
        let fs = Arc::new(RecordingFs::with(&[
            ("/Users/x/doc.txt", EntryKind::File),
            ("/Users/x/Desktop", EntryKind::Directory),
            ("/Users/x/Desktop/doc.txt", EntryKind::File),
        ]));
        let result = coordinator_over(&fs)
            .execute("/Users/x/doc.txt", "/Users/x/Desktop", "doc.txt")
            .await;
        assert_eq!(result.error_kind(), Some(LinkErrorKind::AlreadyExists));
        assert!(fs.created().is_empty());
    }

    #[tokio::test]
    async fn test_destination_file_is_wrong_kind_and_untouched() {
        let fs = Arc::new(RecordingFs::with(&[
            ("/src", EntryKind::File),
            ("/not-a-dir", EntryKind::File),
        ]));
        let result = coordinator_over(&fs)
            .execute("/src", "/not-a-dir", "link")
            .await;
        assert_eq!(result.error_kind(), Some(LinkErrorKind::WrongKind));
        assert!(fs.created().is_empty());
    }

    #[tokio::test]
    async fn test_first_failure_short_circuits() {
        // Source missing, destination wrong kind and name invalid: source check wins.
        let fs = Arc::new(RecordingFs::with(&[("/file", EntryKind::File)]));
        let coordinator = coordinator_over(&fs);

        let result = coordinator.execute("/missing", "/file", "").await;
        assert_eq!(result.error_kind(), Some(LinkErrorKind::NotFound));

        // Destination check comes before the name check.
        let result = coordinator.execute("/file", "/file", "").await;
        assert_eq!(result.error_kind(), Some(LinkErrorKind::WrongKind));
        assert!(fs.created().is_empty());
    }

    #[tokio::test]
    async fn test_empty_name_rejected_before_creation() {
        let fs = Arc::new(RecordingFs::with(&[
            ("/src", EntryKind::File),
            ("/dest", EntryKind::Directory),
        ]));
        let result = coordinator_over(&fs).execute("/src", "/dest", "").await;
        assert_eq!(result.error_kind(), Some(LinkErrorKind::InvalidName));
        assert!(fs.created().is_empty());
    }

    #[tokio::test]
    async fn test_callback_invoked_exactly_once() {
        let fs = Arc::new(RecordingFs::with(&[
            ("/src", EntryKind::Directory),
            ("/dest", EntryKind::Directory),
        ]));
        let mut calls = Vec::new();
        coordinator_over(&fs)
            .execute_with("/src", "/dest", "alias", |result| calls.push(result))
            .await;

        assert_eq!(calls.len(), 1);
        assert!(calls[0].is_created());
        assert_eq!(fs.created().len(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_local_filesystem_end_to_end() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("doc.txt");
        let desktop = dir.path().join("Desktop");
        std::fs::write(&source, "content").unwrap();
        std::fs::create_dir(&desktop).unwrap();

        let coordinator = OperationCoordinator::default();
        let first = coordinator.execute(&source, &desktop, "doc.txt").await;
        assert!(first.is_created());
        assert_eq!(std::fs::read_link(desktop.join("doc.txt")).unwrap(), source);

        let second = coordinator.execute(&source, &desktop, "doc.txt").await;
        assert_eq!(second.error_kind(), Some(LinkErrorKind::AlreadyExists));
    }
}
