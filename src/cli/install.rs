use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Fetch everything that is missing or stale:\n    filedep install\n\n\
                   Only some dependencies:\n    filedep install json inspect\n\n\
                   Re-fetch even when up to date:\n    filedep install --force")]
pub struct InstallArgs {
    /// Dependencies to install (defaults to all)
    pub names: Vec<String>,

    /// Fetch even dependencies that are up to date
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Update every dependency to the latest commit of its ref:\n    filedep update\n\n\
                   Update one dependency:\n    filedep update json")]
pub struct UpdateArgs {
    /// Dependencies to update (defaults to all)
    pub names: Vec<String>,
}
