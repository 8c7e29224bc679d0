//! Init command implementation

use std::path::PathBuf;

use console::style;

use crate::commands::helpers::resolve_workspace_path;
use crate::error::Result;
use crate::workspace::Workspace;

/// Run init command
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let root = resolve_workspace_path(workspace)?;
    let workspace = Workspace::init(&root)?;

    println!(
        "{} {}",
        style("Created").green().bold(),
        workspace.manifest_path().display()
    );
    Ok(())
}
