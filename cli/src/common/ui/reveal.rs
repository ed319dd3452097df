//! # Reveal in File Browser
//!
//! File: cli/src/common/ui/reveal.rs
//!
//! Shows a newly created link in the platform file browser. Revealing is a
//! courtesy: callers log a failure here and carry on, the link itself is
//! already in place.
//!
use crate::core::error::Result;
use anyhow::{bail, Context};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Something that can show a path to the user.
pub trait Revealer: Send + Sync {
    fn reveal(&self, path: &Path) -> Result<()>;
}

/// Used when revealing is turned off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRevealer;

impl Revealer for NoopRevealer {
    fn reveal(&self, path: &Path) -> Result<()> {
        debug!("Reveal disabled, not showing {:?}", path);
        Ok(())
    }
}

/// Launches the platform file browser, or a configured command, without waiting for it.
///
/// The launched process is waited on from a background thread so it never
/// lingers as a zombie in a long-running session.
#[derive(Debug, Default, Clone)]
pub struct SystemRevealer {
    command: Option<String>,
}

impl SystemRevealer {
    /// `command` overrides the platform default. It receives the link's parent directory.
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    /// The program and arguments used to reveal `path`.
    pub fn invocation(&self, path: &Path) -> (String, Vec<OsString>) {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        if let Some(custom) = self.command.as_deref() {
            return (custom.to_string(), vec![parent.as_os_str().to_owned()]);
        }

        if cfg!(target_os = "macos") {
            // -R selects the item itself in Finder.
            ("open".to_string(), vec!["-R".into(), path.as_os_str().to_owned()])
        } else if cfg!(windows) {
            let mut select = OsString::from("/select,");
            select.push(path.as_os_str());
            ("explorer".to_string(), vec![select])
        } else {
            ("xdg-open".to_string(), vec![parent.as_os_str().to_owned()])
        }
    }
}

impl Revealer for SystemRevealer {
    fn reveal(&self, path: &Path) -> Result<()> {
        let (program, args) = self.invocation(path);
        if program.trim().is_empty() {
            bail!("Reveal command is empty");
        }
        info!("Revealing {:?} with {} {:?}", path, program, args);
        let mut child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch '{}' to reveal {:?}", program, path))?;

        std::thread::Builder::new()
            .name("reveal-reaper".to_string())
            .spawn(move || match child.wait() {
                Ok(status) => debug!("Reveal command '{}' exited with {}", program, status),
                Err(e) => warn!("Failed to wait for reveal command '{}': {}", program, e),
            })
            .context("Failed to start reveal reaper thread")?;
        Ok(())
    }
}
