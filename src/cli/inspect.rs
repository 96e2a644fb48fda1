use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How a descriptor is printed
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled summary
    #[default]
    Text,
    Json,
    Yaml,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a bundle descriptor:\n    bundle-manifest inspect META-INF/MANIFEST.MF\n\n\
                  Read the manifest from stdin:\n    unzip -p bundle.jar META-INF/MANIFEST.MF | bundle-manifest inspect -\n\n\
                  Print the descriptor as JSON:\n    bundle-manifest inspect MANIFEST.MF --format json")]
pub struct InspectArgs {
    /// Manifest file, or '-' for stdin
    pub path: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text, env = "BUNDLE_MANIFEST_FORMAT")]
    pub format: OutputFormat,
}
