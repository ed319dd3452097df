//! # Linkdrop Create Command
//!
//! File: cli/src/commands/create.rs
//!
//! ## Overview
//!
//! Implements `linkdrop create`: one drop, one link.
//!
//! ## Workflow
//!
//! 1. Take the source and destination exactly as the shell passed them. The
//!    shell has already done its quoting and escaping, so nothing is rewritten.
//! 2. Fill in defaults: destination from `LINKDROP_DEST`, the config file, or the Desktop;
//!    link name from the last component of the source.
//! 3. Run the operation through the `OperationCoordinator`.
//! 4. Print the created link, optionally reveal it, or return the classified error.
//!
//! ```bash
//! # Link ~/doc.txt onto the Desktop as doc.txt
//! linkdrop create ~/doc.txt
//!
//! # Into a specific directory under another name, then show it
//! linkdrop create ~/Projects/site ~/Links --name site-current --reveal
//! ```
//!
use crate::commands::{reveal_enabled, reveal_quietly, revealer_for};
use crate::core::config;
use crate::core::coordinator::OperationCoordinator;
use crate::core::error::{Result, ToolError};
use crate::core::naming::effective_name;
use crate::core::request::LinkResult;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// # Create Arguments (`CreateArgs`)
#[derive(Parser, Debug)]
#[command(
    about = "Create a symbolic link to SOURCE inside DESTINATION_DIR",
    long_about = "Creates DESTINATION_DIR/NAME as a symbolic link to SOURCE.\n\
                  SOURCE is stored exactly as given (relative paths stay relative).\n\
                  Nothing that already exists at the target is ever replaced."
)]
pub struct CreateArgs {
    /// Path the link points to. Must exist.
    pub source: String,

    /// Directory to create the link in. Defaults to the configured destination, then the Desktop.
    #[arg(env = "LINKDROP_DEST")]
    pub destination: Option<String>,

    /// Name of the link. Defaults to the last component of SOURCE.
    #[arg(long, short)]
    pub name: Option<String>,

    /// Show the new link in the file browser.
    #[arg(long, conflicts_with = "no_reveal")]
    pub reveal: bool,

    /// Do not show the new link, even if the configuration says to.
    #[arg(long)]
    pub no_reveal: bool,
}

pub async fn handle_create(args: CreateArgs) -> Result<()> {
    info!("Handling create command...");
    if args.source.trim().is_empty() {
        return Err(ToolError::ArgumentParsing("SOURCE cannot be empty".to_string()).into());
    }
    let cfg = config::load_config()?;

    let source = PathBuf::from(&args.source);
    let destination = match args.destination.as_deref() {
        Some(raw) => PathBuf::from(raw),
        None => cfg.default_destination(),
    };
    let link_name = effective_name(args.name.as_deref().unwrap_or(""), &source);
    debug!(
        "Resolved create inputs: source={:?} destination={:?} name='{}'",
        source, destination, link_name
    );

    let coordinator = OperationCoordinator::default();
    let result = coordinator.execute(&source, &destination, link_name).await;
    debug!("Create finished, failure kind: {:?}", result.error_kind());
    match result {
        LinkResult::Created(path) => {
            println!("Created link {} -> {}", path.display(), source.display());
            let enabled = reveal_enabled(args.reveal, args.no_reveal, &cfg);
            reveal_quietly(revealer_for(enabled, &cfg).as_ref(), &path);
            Ok(())
        }
        LinkResult::Failed(e) => Err(e.into()),
    }
}
