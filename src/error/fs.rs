//! File system errors

use super::ManifestError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ManifestError {
    ManifestError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a generic IO error
pub fn io_error(message: impl Into<String>) -> ManifestError {
    ManifestError::IoError {
        message: message.into(),
    }
}
