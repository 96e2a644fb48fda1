use clap::Parser;
use std::path::PathBuf;

/// Arguments for the fold command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Wrap a manifest at 72 columns:\n    bundle-manifest fold MANIFEST.MF > MANIFEST.folded.MF")]
pub struct FoldArgs {
    /// Manifest file, or '-' for stdin
    pub path: PathBuf,
}
