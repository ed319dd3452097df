//! # Linkdrop UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Interaction with the user's desktop beyond the terminal. At present this is
//! the reveal service, which opens the platform file browser on a new link.
//!
//! - **`reveal`**: the `Revealer` trait, `SystemRevealer` (Finder, Explorer,
//!   `xdg-open`, or a configured command) and `NoopRevealer`.
//!
//! ```rust
//! use crate::common::ui::reveal::{Revealer, SystemRevealer};
//!
//! let revealer = SystemRevealer::new(None);
//! if let Err(e) = revealer.reveal(&created) {
//!     tracing::warn!("Could not reveal {}: {:#}", created.display(), e);
//! }
//! ```

/// Showing created links in the platform file browser.
pub mod reveal;
