//! Command helper utilities

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use bundle_manifest::error::Result;
use bundle_manifest::error::fs::read_failed;
use bundle_manifest::{ManifestAttributes, ManifestError};
use tracing::debug;

/// Path argument meaning standard input
pub const STDIN_PATH: &str = "-";

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

fn display_path(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Open a manifest file, or stdin for `-`
fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if is_stdin(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|e| read_failed(display_path(path), e.to_string()))?;
    Ok(Box::new(file))
}

/// Read the whole input as text
pub fn read_text(path: &Path) -> Result<String> {
    let mut text = String::new();
    open_input(path)?
        .read_to_string(&mut text)
        .map_err(|e| read_failed(display_path(path), e.to_string()))?;
    Ok(text)
}

/// Decode the main attributes of a manifest file
pub fn load_attributes(path: &Path) -> Result<ManifestAttributes> {
    debug!(path = %display_path(path), "reading manifest");
    ManifestAttributes::from_reader(open_input(path)?).map_err(|e| match e {
        ManifestError::IoError { message } => read_failed(display_path(path), message),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_attributes_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("MANIFEST.MF");
        std::fs::write(&path, "Bundle-SymbolicName: a\n").unwrap();
        let attributes = load_attributes(&path).unwrap();
        assert_eq!(attributes.get("Bundle-SymbolicName"), Some("a"));
    }

    #[test]
    fn test_missing_file_is_read_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.MF");
        let err = load_attributes(&path).unwrap_err();
        match err {
            ManifestError::FileReadFailed { path: reported, .. } => {
                assert!(reported.ends_with("missing.MF"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("MANIFEST.MF");
        std::fs::write(&path, [b'a', b':', b' ', 0xff, b'\n']).unwrap();
        assert!(matches!(
            load_attributes(&path),
            Err(ManifestError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path(&PathBuf::from("-")), "<stdin>");
        assert_eq!(display_path(&PathBuf::from("a/MANIFEST.MF")), "a/MANIFEST.MF");
    }
}
