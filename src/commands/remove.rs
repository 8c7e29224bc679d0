//! Remove command implementation

use std::path::PathBuf;

use console::style;

use crate::cli::RemoveArgs;
use crate::commands::helpers::open_workspace;
use crate::error::Result;
use crate::operations::{RemoveOperation, RemoveOptions};

/// Run remove command
pub fn run(workspace: Option<PathBuf>, args: &RemoveArgs) -> Result<()> {
    let mut workspace = open_workspace(workspace)?;
    let file_removed = RemoveOperation::new(&mut workspace).execute(&RemoveOptions::from(args))?;

    println!("{} {}", style("Removed").green().bold(), style(&args.name).bold());
    if file_removed {
        println!("  deleted vendored file");
    }
    Ok(())
}
