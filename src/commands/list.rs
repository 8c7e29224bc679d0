//! List command implementation
//!
//! Lists declared dependencies with their sources and lock state.

use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers::open_workspace;
use crate::error::Result;
use crate::operations::ListOperation;
use crate::operations::list::{ListedDependency, LockState};

/// Run list command
pub fn run(workspace: Option<PathBuf>, args: &ListArgs) -> Result<()> {
    let workspace = open_workspace(workspace)?;
    let listed = ListOperation::new(&workspace).execute();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    if listed.is_empty() {
        println!("No dependencies declared.");
        return Ok(());
    }

    println!("Dependencies ({}):", listed.len());
    println!();
    for dependency in &listed {
        display_dependency(dependency);
    }
    Ok(())
}

fn display_dependency(dependency: &ListedDependency) {
    let bold = Style::new().bold();
    let state = match dependency.state {
        LockState::Locked => Style::new().green().apply_to("locked"),
        LockState::Missing => Style::new().red().apply_to("file missing"),
        LockState::Unlocked => Style::new().yellow().apply_to("not fetched"),
    };

    println!("  {} [{state}]", Style::new().bold().yellow().apply_to(&dependency.name));
    println!("    {} {}", bold.apply_to("Source:"), dependency.source);
    println!("    {} {}", bold.apply_to("Path:"), dependency.path);
    if let Some(integrity) = &dependency.integrity {
        println!("    {} {}", bold.apply_to("Integrity:"), integrity);
    }
}
