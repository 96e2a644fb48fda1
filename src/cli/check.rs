use clap::Parser;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check every structured header:\n    bundle-manifest check META-INF/MANIFEST.MF\n\n\
                  Check one header only:\n    bundle-manifest check MANIFEST.MF --header Import-Package\n\n\
                  Fail when any header has syntax errors:\n    bundle-manifest check MANIFEST.MF --strict")]
pub struct CheckArgs {
    /// Manifest file, or '-' for stdin
    pub path: PathBuf,

    /// Only check this header (case-sensitive name)
    #[arg(long)]
    pub header: Option<String>,

    /// Exit with an error when any structural error is found
    #[arg(long)]
    pub strict: bool,
}
