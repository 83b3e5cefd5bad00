use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    notemark completions bash > ~/.bash_completion.d/notemark\n\n\
                  Generate zsh completions:\n    notemark completions zsh > ~/.zfunc/_notemark\n\n\
                  Generate fish completions:\n    notemark completions fish > ~/.config/fish/completions/notemark.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
