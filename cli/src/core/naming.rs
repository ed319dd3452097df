//! # Link Name Resolution
//!
//! File: cli/src/core/naming.rs
//!
//! ## Overview
//!
//! Decides what the new link will be called.
//!
//! `default_name` is the last component of the source path. `LinkNameResolver`
//! tracks the name field across source changes with two states:
//!
//! - **Auto** (initial): every source change overwrites the name with the
//!   source's default name.
//! - **Manual**: entered the moment the user edits the name. Source changes
//!   no longer touch the name.
//!
//! `clear` returns to Auto with an empty name.
//!
use std::path::Path;
use tracing::trace;

/// The last component of `source`, or an empty string when there is none (`/`, `..`).
pub fn default_name(source: &Path) -> String {
    source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Returns `name` unless it is empty, in which case the default name for `source`.
pub fn effective_name(name: &str, source: &Path) -> String {
    if name.is_empty() {
        default_name(source)
    } else {
        name.to_string()
    }
}

/// Whether the name field still follows the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameMode {
    #[default]
    Auto,
    Manual,
}

impl std::fmt::Display for NameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameMode::Auto => f.write_str("auto"),
            NameMode::Manual => f.write_str("manual"),
        }
    }
}

/// State of the link-name field.
#[derive(Debug, Clone, Default)]
pub struct LinkNameResolver {
    mode: NameMode,
    name: String,
}

impl LinkNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> NameMode {
        self.mode
    }

    /// Called whenever the source path changes. Only rewrites the name in Auto mode.
    pub fn source_changed(&mut self, source: &Path) {
        if self.mode == NameMode::Auto {
            self.name = default_name(source);
            trace!("Auto name now '{}'", self.name);
        }
    }

    /// A direct edit of the name field. Switches to Manual for good (until `clear`).
    pub fn edit(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.mode = NameMode::Manual;
        trace!("Manual name set to '{}'", self.name);
    }

    pub fn clear(&mut self) {
        self.mode = NameMode::Auto;
        self.name.clear();
    }
}
