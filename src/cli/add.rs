use clap::Parser;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Add with GitHub shorthand:\n    filedep add github:rxi/json.lua/json.lua@master\n\n\
                   Add from a GitHub URL:\n    filedep add https://github.com/rxi/json.lua/blob/master/json.lua\n\n\
                   Choose name and location:\n    filedep add github:rxi/json.lua/json.lua@master --name json --path vendor/json.lua")]
pub struct AddArgs {
    /// Source: github:owner/repo/path@ref, a raw.githubusercontent.com URL,
    /// or a github.com blob URL
    pub source: String,

    /// Dependency name (defaults to the file name without extension)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Local path relative to the project root (defaults to the file name)
    #[arg(long, short = 'p')]
    pub path: Option<String>,

    /// Replace an existing dependency with the same name
    #[arg(long, short = 'f')]
    pub force: bool,
}
