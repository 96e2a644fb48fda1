//! Manifest main attributes
//!
//! Decodes the main section of a manifest into header name/value pairs and
//! defines [`HeaderSource`], the key/value view the descriptor builder reads.
//!
//! ## Module Organization
//!
//! - `headers.rs`: Header and parameter name constants
//! - `fold.rs`: 72-column line folding and unfolding

pub mod fold;
pub mod headers;

use std::collections::{BTreeMap, HashMap};
use std::io::Read;

use tracing::debug;

use crate::error::manifest::invalid_line;
use crate::error::Result;

/// Read-only header lookup by case-sensitive name
pub trait HeaderSource {
    /// Raw header text, if the header is present
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl HeaderSource for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Main-section attributes of a manifest, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestAttributes {
    entries: Vec<(String, String)>,
}

impl ManifestAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode manifest text
    ///
    /// `Name: value` lines, continuation lines start with one space, the first
    /// blank line ends the main section.
    pub fn parse(text: &str) -> Result<Self> {
        let mut attributes = Self::new();
        let mut pending: Option<(String, String)> = None;

        for (index, raw) in text.split('\n').enumerate() {
            let line_number = index + 1;
            let line = raw.strip_suffix('\r').unwrap_or(raw);

            if line.is_empty() {
                break;
            }

            if let Some(continuation) = line.strip_prefix(' ') {
                match pending.as_mut() {
                    Some((_, value)) => value.push_str(continuation),
                    None => {
                        return Err(invalid_line(
                            line_number,
                            "continuation line without a preceding header",
                        ));
                    }
                }
                continue;
            }

            if let Some((name, value)) = pending.take() {
                attributes.insert(name, value);
            }

            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| invalid_line(line_number, "expected `Name: value`"))?;
            if !is_valid_name(name) {
                return Err(invalid_line(
                    line_number,
                    format!("invalid header name '{name}'"),
                ));
            }
            let value = value.strip_prefix(' ').unwrap_or(value);
            pending = Some((name.to_string(), value.to_string()));
        }

        if let Some((name, value)) = pending {
            attributes.insert(name, value);
        }

        debug!(headers = attributes.len(), "decoded manifest main section");
        Ok(attributes)
    }

    /// Read a whole stream, require UTF-8, then decode it
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        Self::parse(&text)
    }

    /// Set a header; a repeated name replaces the earlier value in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl HeaderSource for ManifestAttributes {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ManifestAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}
