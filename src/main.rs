//! filedep - single-file dependency manager
//!
//! Vendors individual files from GitHub repositories, records where each one
//! came from in a lockfile, and tells when a vendored copy has gone stale.

use clap::Parser;
use console::style;
use miette::Diagnostic;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod fetch;
mod hash;
mod logging;
mod operations;
mod progress;
mod reconcile;
mod resolver;
mod source;
#[cfg(test)]
mod test_fixtures;
mod transaction;
mod workspace;

use cli::{Cli, Commands};
use config::Settings;
use error::FiledepError;
use operations::InstallOptions;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let settings = Settings::from_cli(&cli);
    let result = match &cli.command {
        Commands::Init => commands::init::run(cli.workspace.clone()),
        Commands::Add(args) => commands::add::run(cli.workspace.clone(), &settings, args),
        Commands::Install(args) => {
            commands::install::run(cli.workspace.clone(), &settings, &InstallOptions::from(args))
        }
        Commands::Update(args) => {
            commands::install::run(cli.workspace.clone(), &settings, &InstallOptions::from(args))
        }
        Commands::Check(args) => commands::check::run(cli.workspace.clone(), &settings, args),
        Commands::Remove(args) => commands::remove::run(cli.workspace.clone(), args),
        Commands::List(args) => commands::list::run(cli.workspace.clone(), args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

/// Print an error with its help text to stderr
fn report_error(err: &FiledepError) {
    eprintln!("{} {err}", style("Error:").red().bold());
    if let Some(help) = err.help() {
        eprintln!("  {} {help}", style("help:").cyan());
    }
}
