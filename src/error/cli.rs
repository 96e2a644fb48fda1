//! Command line errors

use super::ManifestError;

/// Creates an invalid argument error
pub fn invalid_argument(message: impl Into<String>) -> ManifestError {
    ManifestError::InvalidArgument {
        message: message.into(),
    }
}

/// Creates an output rendering error
pub fn render_failed(format: impl Into<String>, reason: impl Into<String>) -> ManifestError {
    ManifestError::RenderFailed {
        format: format.into(),
        reason: reason.into(),
    }
}
