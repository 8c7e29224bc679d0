//! Check command implementation

use std::path::PathBuf;

use console::style;

use crate::cli::CheckArgs;
use crate::commands::helpers::{open_workspace, print_failures};
use crate::config::Settings;
use crate::error::{FiledepError, Result};
use crate::operations::{CheckOperation, Context};

/// Run check command
///
/// Fails when any dependency needs action or could not be checked.
pub fn run(workspace: Option<PathBuf>, settings: &Settings, args: &CheckArgs) -> Result<()> {
    let workspace = open_workspace(workspace)?;
    let ctx = Context::from_settings(settings)?;

    let plan = CheckOperation::new(&ctx, &workspace).execute(args)?;

    for name in &plan.up_to_date {
        println!("  {} {name}: up to date", style("✓").green().bold());
    }
    for (name, reason) in &plan.actions {
        println!("  {} {name}: {reason}", style("!").yellow().bold());
    }
    print_failures(&plan.failures);

    if !plan.failures.is_empty() {
        return Err(FiledepError::BatchFailed {
            failed: plan.failures.len(),
            total: plan.total(),
        });
    }
    if !plan.actions.is_empty() {
        return Err(FiledepError::OutOfDate {
            count: plan.actions.len(),
        });
    }
    if plan.total() == 0 {
        println!("No dependencies declared.");
    }
    Ok(())
}
