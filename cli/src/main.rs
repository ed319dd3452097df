//! # Linkdrop Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the linkdrop CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up logging based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Link a file onto the Desktop
//! linkdrop create ~/Documents/report.pdf
//!
//! # Interactive drop zone with logging
//! linkdrop -vv session
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command handler
//! 4. Print any error and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Presentation layer: create, name, session
mod common; // Filesystem provider, validation, link creation, reveal
mod core; // Errors, config, request model, naming, coordinator

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "linkdrop",
    about = "Create symbolic links from dropped paths, never overwriting anything",
    long_about = "Creates a symbolic link in a destination directory pointing at a source path.\n\
                  The link name defaults to the source's last path component, and an\n\
                  existing file, directory or link at the target is never replaced.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "c")]
    Create(commands::create::CreateArgs),
    #[command(alias = "n")]
    Name(commands::name::NameArgs),
    #[command(alias = "s")]
    Session(commands::session::SessionArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Create(args) => commands::create::handle_create(args).await,
        Commands::Name(args) => commands::name::handle_name(args).await,
        Commands::Session(args) => commands::session::handle_session(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
