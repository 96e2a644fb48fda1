//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - inspect: Inspect command arguments
//! - check: Check command arguments
//! - fold: Fold command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod check;
pub mod completions;
pub mod fold;
pub mod inspect;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use fold::FoldArgs;
pub use inspect::{InspectArgs, OutputFormat};

/// Bundle manifest - header parser and descriptor inspector
///
/// Parse bundle manifests into typed descriptors and report header syntax errors.
#[derive(Parser, Debug)]
#[command(
    name = "bundle-manifest",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle manifest header parser and descriptor inspector",
    long_about = "Reads the main attributes of a bundle manifest (META-INF/MANIFEST.MF), parses \
                  structured headers such as Import-Package and Export-Package, and prints the \
                  resulting bundle descriptor or the header syntax errors it recovered from.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bundle-manifest inspect META-INF/MANIFEST.MF         \x1b[90m# Show the bundle descriptor\x1b[0m\n   \
                  bundle-manifest inspect MANIFEST.MF --format json    \x1b[90m# Descriptor as JSON\x1b[0m\n   \
                  bundle-manifest check MANIFEST.MF --strict           \x1b[90m# Fail on header syntax errors\x1b[0m\n   \
                  bundle-manifest fold MANIFEST.MF                     \x1b[90m# Wrap lines at 72 columns\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output (debug logging unless RUST_LOG is set)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the bundle descriptor built from a manifest
    Inspect(InspectArgs),

    /// Report structural errors in manifest headers
    Check(CheckArgs),

    /// Wrap manifest lines at 72 columns
    Fold(FoldArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
