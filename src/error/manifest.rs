//! Descriptor construction errors

use super::{ManifestError, VersionError, VersionRangeError};

/// Creates a missing required header error
pub fn missing_field(header: impl Into<String>) -> ManifestError {
    ManifestError::MissingRequiredField {
        header: header.into(),
    }
}

/// Creates a malformed version error for a header
pub fn malformed_version(
    header: impl Into<String>,
    text: impl Into<String>,
    source: VersionError,
) -> ManifestError {
    ManifestError::MalformedVersion {
        header: header.into(),
        text: text.into(),
        source,
    }
}

/// Creates a malformed version range error for a header
pub fn malformed_range(
    header: impl Into<String>,
    text: impl Into<String>,
    source: VersionRangeError,
) -> ManifestError {
    ManifestError::MalformedVersionRange {
        header: header.into(),
        text: text.into(),
        source,
    }
}

/// Creates an invalid manifest line error
pub fn invalid_line(line: usize, reason: impl Into<String>) -> ManifestError {
    ManifestError::InvalidManifestLine {
        line,
        reason: reason.into(),
    }
}
