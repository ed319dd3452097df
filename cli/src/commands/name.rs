//! # Linkdrop Name Command
//!
//! File: cli/src/commands/name.rs
//!
//! `linkdrop name SOURCE...` drops each source in turn onto a fresh
//! `LinkNameResolver` and prints the name it ends up holding. With
//! `--manual NAME` the name is edited by hand right after the first source,
//! so the later sources leave it alone.
//!
//! ```bash
//! linkdrop name /a/A.txt /b/B.txt          # B.txt
//! linkdrop name /a/A.txt /b/B.txt --manual notes   # notes
//! ```
//!
use crate::common::fs::validate::normalize_input;
use crate::core::error::Result;
use crate::core::naming::LinkNameResolver;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(about = "Show the link name chosen for a sequence of dropped sources")]
pub struct NameArgs {
    /// Sources, in the order they are dropped.
    #[arg(required = true)]
    pub sources: Vec<String>,

    /// Edit the name by hand after the first source.
    #[arg(long)]
    pub manual: Option<String>,
}

pub async fn handle_name(args: NameArgs) -> Result<()> {
    let resolver = resolve(&args);
    debug!("Resolver ended in {} mode", resolver.mode());
    println!("{}", resolver.name());
    Ok(())
}

fn resolve(args: &NameArgs) -> LinkNameResolver {
    let mut resolver = LinkNameResolver::new();
    for (i, raw) in args.sources.iter().enumerate() {
        resolver.source_changed(&normalize_input(raw));
        if i == 0 {
            if let Some(manual) = &args.manual {
                resolver.edit(manual.clone());
            }
        }
    }
    resolver
}
