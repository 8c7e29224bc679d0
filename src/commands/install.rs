//! Install and update command implementation
//!
//! Both commands run the same batch: `install` fetches what reconciliation
//! flags, `update` forces every selected dependency.

use std::path::PathBuf;

use console::style;

use crate::commands::helpers::{describe_integrity, open_workspace, print_failures};
use crate::config::Settings;
use crate::error::Result;
use crate::operations::{BatchReport, Context, InstallOperation, InstallOptions};

/// Run install or update
pub fn run(workspace: Option<PathBuf>, settings: &Settings, options: &InstallOptions) -> Result<()> {
    let mut workspace = open_workspace(workspace)?;

    if workspace.manifest.dependencies.is_empty() && options.names.is_empty() {
        println!("Nothing to install.");
        return Ok(());
    }

    let ctx = Context::from_settings(settings)?;
    let report = InstallOperation::new(&ctx, &mut workspace).execute(options)?;

    print_report(&report);
    report.ensure_success()
}

fn print_report(report: &BatchReport) {
    for (outcome, reason) in &report.fetched {
        println!(
            "  {} {} -> {} ({}; {})",
            style("✓").green().bold(),
            style(&outcome.name).bold(),
            outcome.locked.path,
            describe_integrity(&outcome.locked.integrity),
            reason
        );
    }
    print_failures(&report.failures);

    println!(
        "Fetched {}, up to date {}, failed {}",
        report.fetched.len(),
        report.up_to_date.len(),
        report.failures.len()
    );
}
