//! Dotted bundle versions
//!
//! A version is `major[.minor[.micro[.qualifier]]]`. Missing numeric
//! components read as 0, the qualifier is free-form and compares
//! lexicographically after the numeric triple.

pub mod range;

pub use range::VersionRange;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VersionError;
use crate::error::version::not_numeric;

/// Immutable four-component version
///
/// Field order matters: the derived ordering compares major, minor, micro,
/// then qualifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u64,
    minor: u64,
    micro: u64,
    qualifier: String,
}

impl Version {
    /// The zero version, used when a bundle declares none
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        micro: 0,
        qualifier: String::new(),
    };

    pub fn new(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = qualifier.into();
        self
    }

    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut parts = text.splitn(4, '.');
        let major = parse_component("major", parts.next().unwrap_or_default())?;
        let minor = parts
            .next()
            .map(|part| parse_component("minor", part))
            .transpose()?
            .unwrap_or(0);
        let micro = parts
            .next()
            .map(|part| parse_component("micro", part))
            .transpose()?
            .unwrap_or(0);
        let qualifier = parts.next().unwrap_or_default().to_string();

        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn micro(&self) -> u64 {
        self.micro
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }
}

fn parse_component(component: &'static str, value: &str) -> Result<u64, VersionError> {
    // `u64::from_str` accepts a leading '+', the grammar does not
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_numeric(component, value));
    }
    value.parse().map_err(|source| VersionError::OutOfRange {
        component,
        value: value.to_string(),
        source,
    })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}
