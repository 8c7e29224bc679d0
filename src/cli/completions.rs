use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    filedep completions bash > ~/.bash_completion.d/filedep\n\n\
                  Generate zsh completions:\n    filedep completions zsh > ~/.zfunc/_filedep\n\n\
                  Generate fish completions:\n    filedep completions fish > ~/.config/fish/completions/filedep.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
