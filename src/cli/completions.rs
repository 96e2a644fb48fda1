use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundle-manifest completions bash > ~/.bash_completion.d/bundle-manifest\n\n\
                  Generate zsh completions:\n    bundle-manifest completions zsh > ~/.zfunc/_bundle-manifest\n\n\
                  Generate fish completions:\n    bundle-manifest completions fish > ~/.config/fish/completions/bundle-manifest.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
