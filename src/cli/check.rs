use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check every dependency:\n    filedep check\n\n\
                  Check one dependency:\n    filedep check json")]
pub struct CheckArgs {
    /// Dependencies to check (defaults to all)
    pub names: Vec<String>,
}
