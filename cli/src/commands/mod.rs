//! # Linkdrop Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The presentation layer. Each command gathers a source, a destination
//! directory and a link name, hands them to the `OperationCoordinator`, and
//! renders the `LinkResult`. None of them touch the filesystem directly.
//!
//! ## Commands
//!
//! - `create`: one link from command-line arguments
//! - `name`: show the link name the resolver would pick for a sequence of drops
//! - `session`: an interactive, line-driven drop zone on stdin
//!
//! The reveal helpers below are shared by `create` and `session`.
//!
use crate::common::ui::reveal::{NoopRevealer, Revealer, SystemRevealer};
use crate::core::config::Config;
use std::path::Path;
use tracing::warn;

/// Creates a single link from command-line arguments.
pub mod create;
/// Prints the resolved link name for a sequence of sources.
pub mod name;
/// Interactive drop-zone session read from stdin.
pub mod session;

/// Whether to reveal new links: explicit flags win over the configured default.
pub(crate) fn reveal_enabled(reveal: bool, no_reveal: bool, cfg: &Config) -> bool {
    if reveal {
        true
    } else if no_reveal {
        false
    } else {
        cfg.links.reveal_after_create
    }
}

pub(crate) fn revealer_for(enabled: bool, cfg: &Config) -> Box<dyn Revealer> {
    if enabled {
        Box::new(SystemRevealer::new(cfg.reveal.command.clone()))
    } else {
        Box::new(NoopRevealer)
    }
}

/// Reveals `path`, logging rather than returning any failure.
pub(crate) fn reveal_quietly(revealer: &dyn Revealer, path: &Path) {
    if let Err(e) = revealer.reveal(path) {
        warn!("Could not reveal {}: {:#}", path.display(), e);
    }
}
