//! Add command implementation

use std::path::PathBuf;

use console::style;

use crate::cli::AddArgs;
use crate::commands::helpers::{describe_integrity, open_workspace};
use crate::config::Settings;
use crate::error::Result;
use crate::operations::{AddOperation, AddOptions, Context};

/// Run add command
pub fn run(workspace: Option<PathBuf>, settings: &Settings, args: &AddArgs) -> Result<()> {
    let mut workspace = open_workspace(workspace)?;
    let ctx = Context::from_settings(settings)?;

    let outcome = AddOperation::new(&ctx, &mut workspace).execute(&AddOptions::from(args))?;

    println!(
        "{} {} -> {} ({}, {} bytes)",
        style("Added").green().bold(),
        style(&outcome.name).bold(),
        outcome.locked.path,
        describe_integrity(&outcome.locked.integrity),
        outcome.size
    );
    if !outcome.is_pinned() {
        println!(
            "  {} could not pin {} to a commit; locked by content hash",
            style("note:").yellow(),
            outcome.declared
        );
    }
    Ok(())
}
