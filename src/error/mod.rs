//! Error types and handling for bundle manifests
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`header`]: Structural header grammar errors (recoverable)
//! - [`manifest`]: Descriptor construction errors (fatal)
//! - [`version`]: Version and version range grammar errors
//! - [`fs`]: File system and decoding errors
//! - [`cli`]: Command line argument and output rendering errors

pub mod cli;
pub mod fs;
pub mod header;
pub mod manifest;
pub mod version;


pub use header::{HeaderSyntaxError, SyntaxErrorKind};
pub use version::{VersionError, VersionRangeError};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for manifest operations
#[derive(Error, Diagnostic, Debug)]
pub enum ManifestError {
    // Descriptor errors
    #[error("No {header} in the manifest")]
    #[diagnostic(
        code(bundle_manifest::bundle::missing_field),
        help("Every bundle manifest must declare a non-empty {header} header")
    )]
    MissingRequiredField { header: String },

    #[error("The {header} has an incorrect version: {text} ({source})")]
    #[diagnostic(
        code(bundle_manifest::version::malformed),
        help("Versions look like major[.minor[.micro[.qualifier]]], e.g. 1.2.3.beta")
    )]
    MalformedVersion {
        header: String,
        text: String,
        #[source]
        source: VersionError,
    },

    #[error("The {header} has an incorrect version range: {text} ({source})")]
    #[diagnostic(
        code(bundle_manifest::version::malformed_range),
        help("Ranges are either a bare version (at least) or an interval like [1.0,2.0)")
    )]
    MalformedVersionRange {
        header: String,
        text: String,
        #[source]
        source: VersionRangeError,
    },

    // Manifest decoding errors
    #[error("Invalid manifest line {line}: {reason}")]
    #[diagnostic(
        code(bundle_manifest::manifest::invalid_line),
        help("Main attributes are written as `Name: value`, continuation lines start with one space")
    )]
    InvalidManifestLine { line: usize, reason: String },

    #[error("Manifest is not valid UTF-8: {reason}")]
    #[diagnostic(code(bundle_manifest::manifest::invalid_encoding))]
    InvalidEncoding { reason: String },

    #[error("Found {count} structural error(s) in manifest headers")]
    #[diagnostic(
        code(bundle_manifest::header::invalid),
        help("Run without --strict to accept the headers with best-effort recovery")
    )]
    InvalidHeaders { count: usize },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(bundle_manifest::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bundle_manifest::fs::io_error))]
    IoError { message: String },

    // Command line errors
    #[error("Invalid argument: {message}")]
    #[diagnostic(code(bundle_manifest::cli::invalid_argument))]
    InvalidArgument { message: String },

    #[error("Failed to render {format}: {reason}")]
    #[diagnostic(code(bundle_manifest::cli::render_failed))]
    RenderFailed { format: String, reason: String },
}

impl From<std::io::Error> for ManifestError {
    fn from(err: std::io::Error) -> Self {
        ManifestError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for ManifestError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ManifestError::InvalidEncoding {
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ManifestError {
    fn from(err: serde_yaml::Error) -> Self {
        cli::render_failed("YAML", err.to_string())
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        cli::render_failed("JSON", err.to_string())
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ManifestError>;
