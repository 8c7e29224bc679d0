use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a dependency and its file:\n    filedep remove json\n\n\
                  Stop tracking but keep the file:\n    filedep remove json --keep-file")]
pub struct RemoveArgs {
    /// Dependency name
    pub name: String,

    /// Keep the vendored file on disk
    #[arg(long)]
    pub keep_file: bool,
}
