//! # Linkdrop Session Command
//!
//! File: cli/src/commands/session.rs
//!
//! ## Overview
//!
//! `linkdrop session` is a drop zone for the terminal. Paths dragged onto a
//! terminal window arrive as pasted text, so the session reads one command per
//! line and keeps the same state the windowed tool shows: a source, a
//! destination, a link name that follows the source until edited, and the
//! transient "creating" / "success" indicators.
//!
//! ## Commands
//!
//! | Line              | Effect                                                     |
//! |-------------------|------------------------------------------------------------|
//! | `source <path>`   | Set the source; in Auto mode the name follows it           |
//! | `dest <path>`     | Set the destination directory                              |
//! | `name <text>`     | Edit the name by hand (switches to Manual mode)            |
//! | `create`          | Create the link and report the outcome                     |
//! | `clear`           | Forget source, destination and name; back to Auto mode     |
//! | `status`          | Print the current state                                    |
//! | `help`            | List the commands                                          |
//! | `quit`            | End the session (so does end of input)                     |
//!
//! A failed `create` is reported on the session output and the session keeps
//! going, so the user can correct the inputs and try again.
//!
use crate::commands::{reveal_enabled, reveal_quietly, revealer_for};
use crate::common::fs::validate::normalize_input;
use crate::common::ui::reveal::Revealer;
use crate::core::config;
use crate::core::coordinator::OperationCoordinator;
use crate::core::error::Result;
use crate::core::naming::{effective_name, LinkNameResolver};
use crate::core::request::LinkResult;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

const HELP: &str = "Commands: source <path>, dest <path>, name <text>, create, clear, status, help, quit";

#[derive(Parser, Debug)]
#[command(
    about = "Interactive drop zone: paste or drag paths into the terminal",
    long_about = "Reads commands from stdin, one per line:\n\
                  source <path>, dest <path>, name <text>, create, clear, status, help, quit."
)]
pub struct SessionArgs {
    /// Show each new link in the file browser.
    #[arg(long, conflicts_with = "no_reveal")]
    pub reveal: bool,

    /// Do not show new links, even if the configuration says to.
    #[arg(long)]
    pub no_reveal: bool,
}

pub async fn handle_session(args: SessionArgs) -> Result<()> {
    info!("Starting interactive session...");
    let cfg = config::load_config()?;
    let revealer = revealer_for(reveal_enabled(args.reveal, args.no_reveal, &cfg), &cfg);

    let mut session = Session::new(
        OperationCoordinator::default(),
        revealer,
        cfg.default_destination(),
    );
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(stdin, std::io::stdout()).await
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Source(String),
    Dest(String),
    Name(String),
    Create,
    Clear,
    Status,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word.to_ascii_lowercase().as_str() {
        "" => SessionCommand::Blank,
        "source" | "src" => SessionCommand::Source(rest.to_string()),
        "dest" | "destination" => SessionCommand::Dest(rest.to_string()),
        "name" => SessionCommand::Name(rest.to_string()),
        "create" => SessionCommand::Create,
        "clear" => SessionCommand::Clear,
        "status" => SessionCommand::Status,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(word.to_string()),
    }
}

/// Transient presentation state. Nothing here outlives the session.
#[derive(Debug, Default)]
struct ViewState {
    source: Option<PathBuf>,
    destination: Option<PathBuf>,
    names: LinkNameResolver,
    is_creating_link: bool,
    show_success: bool,
}

pub struct Session {
    coordinator: OperationCoordinator,
    revealer: Box<dyn Revealer>,
    default_destination: PathBuf,
    view: ViewState,
}

impl Session {
    pub fn new(
        coordinator: OperationCoordinator,
        revealer: Box<dyn Revealer>,
        default_destination: PathBuf,
    ) -> Self {
        Self {
            coordinator,
            revealer,
            default_destination,
            view: ViewState::default(),
        }
    }

    /// Processes `input` line by line until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, mut out: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "linkdrop session. {}", HELP)?;
        out.flush()?;
        let mut lines = input.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read session input")?
        {
            let command = parse_command(&line);
            debug!("Session command: {:?}", command);
            if command == SessionCommand::Quit {
                break;
            }
            self.apply(command, &mut out).await?;
            out.flush()?;
        }
        info!("Session ended.");
        Ok(())
    }

    async fn apply<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<()> {
        match command {
            SessionCommand::Source(raw) if raw.is_empty() => writeln!(out, "usage: source <path>")?,
            SessionCommand::Source(raw) => {
                let source = normalize_input(&raw);
                self.view.names.source_changed(&source);
                self.view.source = Some(source);
                self.view.show_success = false;
                writeln!(out, "name: {} ({})", self.view.names.name(), self.view.names.mode())?;
            }
            SessionCommand::Dest(raw) if raw.is_empty() => writeln!(out, "usage: dest <path>")?,
            SessionCommand::Dest(raw) => {
                let destination = normalize_input(&raw);
                writeln!(out, "destination: {}", destination.display())?;
                self.view.destination = Some(destination);
                self.view.show_success = false;
            }
            SessionCommand::Name(text) => {
                self.view.names.edit(text);
                self.view.show_success = false;
                writeln!(out, "name: {} ({})", self.view.names.name(), self.view.names.mode())?;
            }
            SessionCommand::Create => self.create(out).await?,
            SessionCommand::Clear => {
                self.view.source = None;
                self.view.destination = None;
                self.view.names.clear();
                self.view.show_success = false;
                writeln!(out, "cleared")?;
            }
            SessionCommand::Status => self.write_status(out)?,
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Blank | SessionCommand::Quit => {}
            SessionCommand::Unknown(word) => {
                writeln!(out, "Unknown command '{}'. {}", word, HELP)?
            }
        }
        Ok(())
    }

    async fn create<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.view.is_creating_link {
            writeln!(out, "A link is already being created.")?;
            return Ok(());
        }
        let Some(source) = self.view.source.clone() else {
            writeln!(out, "Error: no source yet. Use 'source <path>' first.")?;
            return Ok(());
        };
        let destination = self.destination();
        let link_name = effective_name(self.view.names.name(), &source);

        self.view.is_creating_link = true;
        let view = &mut self.view;
        let revealer = self.revealer.as_ref();
        let mut reported: std::io::Result<()> = Ok(());
        self.coordinator
            .execute_with(source.clone(), destination, link_name, |result| {
                view.is_creating_link = false;
                view.show_success = result.is_created();
                reported = match result {
                    LinkResult::Created(path) => {
                        let written = writeln!(
                            out,
                            "Created link {} -> {}",
                            path.display(),
                            source.display()
                        );
                        reveal_quietly(revealer, &path);
                        written
                    }
                    LinkResult::Failed(e) => writeln!(out, "Error: {}", e),
                };
            })
            .await;
        reported?;
        Ok(())
    }

    fn destination(&self) -> PathBuf {
        self.view
            .destination
            .clone()
            .unwrap_or_else(|| self.default_destination.clone())
    }

    fn write_status<W: Write>(&self, out: &mut W) -> Result<()> {
        let source = self
            .view
            .source
            .as_ref()
            .map(|s| s.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());
        writeln!(out, "source: {}", source)?;
        writeln!(out, "destination: {}", self.destination().display())?;
        writeln!(out, "name: {} ({})", self.view.names.name(), self.view.names.mode())?;
        if self.view.show_success {
            writeln!(out, "last link created successfully")?;
        }
        Ok(())
    }
}
