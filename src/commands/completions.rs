//! Shell completions command

use bundle_manifest::error::Result;
use bundle_manifest::error::cli::invalid_argument;
use clap::CommandFactory;

use crate::cli::CompletionsArgs;

fn parse_shell(name: &str) -> Option<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(clap_complete::Shell::Bash),
        "elvish" => Some(clap_complete::Shell::Elvish),
        "fish" => Some(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Some(clap_complete::Shell::PowerShell),
        "zsh" => Some(clap_complete::Shell::Zsh),
        _ => None,
    }
}

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell).ok_or_else(|| {
        invalid_argument(format!(
            "Unknown shell: {} (supported: bash, elvish, fish, powershell, zsh)",
            args.shell
        ))
    })?;

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(
        shell,
        &mut cmd,
        "bundle-manifest",
        &mut std::io::stdout().lock(),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundle_manifest::ManifestError;

    #[test]
    fn test_parse_shell() {
        assert_eq!(parse_shell("bash"), Some(clap_complete::Shell::Bash));
        assert_eq!(parse_shell("elvish"), Some(clap_complete::Shell::Elvish));
        assert_eq!(parse_shell("fish"), Some(clap_complete::Shell::Fish));
        assert_eq!(parse_shell("pwsh"), Some(clap_complete::Shell::PowerShell));
        assert_eq!(parse_shell("Zsh"), Some(clap_complete::Shell::Zsh));
        assert_eq!(parse_shell("tcsh"), None);
    }

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_completions_uppercase() {
        let args = CompletionsArgs {
            shell: "ZSH".to_string(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_completions_unknown_shell() {
        let args = CompletionsArgs {
            shell: "tcsh".to_string(),
        };
        let err = run(args).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidArgument { .. }));
        assert!(err.to_string().contains("Unknown shell: tcsh"));
    }
}
