//! # Linkdrop Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads the optional user configuration that supplies defaults for the
//! command line: where links go when no destination is given, whether to
//! reveal new links, and which program does the revealing. Configuration is
//! read-only input for the session; linkdrop never writes it back.
//!
//! ## Architecture
//!
//! Sources, in order of precedence:
//! 1. Command-line flags and `LINKDROP_DEST` (handled by clap in the commands)
//! 2. The user's `config.toml` in the platform config directory
//!    (e.g. `~/.config/linkdrop/config.toml`), or the file named by `LINKDROP_CONFIG`
//! 3. Built-in defaults (Desktop directory, no reveal)
//!
//! Paths are tilde-expanded and the result is validated before use.
//!
//! ## Examples
//!
//! ```toml
//! [links]
//! default_destination = "~/Desktop"
//! reveal_after_create = true
//!
//! [reveal]
//! command = "nautilus"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let dest = cfg.default_destination();
//! ```
//!
use crate::core::error::{Result, ToolError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "LINKDROP_CONFIG";

/// Represents the main configuration structure, loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
}

/// Defaults for link creation.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LinksConfig {
    /// Destination directory used when none is given (can use ~).
    pub default_destination: Option<String>,
    /// Show each new link in the file browser.
    #[serde(default)]
    pub reveal_after_create: bool,
}

/// Settings for the reveal service.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RevealConfig {
    /// Program to launch instead of the platform file browser.
    pub command: Option<String>,
}

impl Config {
    /// Destination for links when the user gives none:
    /// the configured directory, else the Desktop, else the current directory.
    pub fn default_destination(&self) -> PathBuf {
        if let Some(dest) = &self.links.default_destination {
            return PathBuf::from(dest);
        }
        dirs::desktop_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn load_config() -> Result<Config> {
    let mut config = match config_file_path()? {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => Config::default(),
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Locates the config file: `LINKDROP_CONFIG` if set (must exist), else the user config if present.
fn config_file_path() -> Result<Option<PathBuf>> {
    if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV) {
        let path = PathBuf::from(explicit);
        if !path.is_file() {
            return Err(anyhow!(ToolError::Config(format!(
                "{} points to '{}', which is not a file.",
                CONFIG_PATH_ENV,
                path.display()
            ))));
        }
        return Ok(Some(path));
    }

    let Some(proj_dirs) = ProjectDirs::from("com", "Linkdrop", "linkdrop") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.exists() {
        Ok(Some(config_path))
    } else {
        debug!("User configuration file not found at {}", config_path.display());
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut Config) {
    if let Some(dest) = config.links.default_destination.as_mut() {
        *dest = shellexpand::tilde(dest).into_owned();
        debug!("Expanded default destination: {}", dest);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(dest) = &config.links.default_destination {
        if dest.trim().is_empty() {
            return Err(anyhow!(ToolError::Config(
                "links.default_destination cannot be empty.".to_string()
            )));
        }
        let dest_path = Path::new(dest);
        if !dest_path.exists() {
            warn!(
                "Configured default destination '{}' does not exist.",
                dest_path.display()
            );
        } else if !dest_path.is_dir() {
            return Err(anyhow!(ToolError::Config(format!(
                "Configured default destination '{}' exists but is not a directory.",
                dest_path.display()
            ))));
        }
    }
    if let Some(command) = &config.reveal.command {
        if command.trim().is_empty() {
            return Err(anyhow!(ToolError::Config(
                "reveal.command cannot be empty.".to_string()
            )));
        }
    }
    Ok(())
}
