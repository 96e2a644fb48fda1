//! Version intervals
//!
//! Accepted forms:
//! - `1.0` : at least 1.0, unbounded above
//! - `[1.0,2.0)` : `[`/`]` inclusive, `(`/`)` exclusive, per side
//! - `[1.0,)` : explicit interval with an open upper end

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Version;
use crate::error::VersionRangeError;
use crate::error::version::lower_above_upper;

/// Immutable interval over [`Version`]s
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionRange {
    lower: Version,
    lower_inclusive: bool,
    upper: Option<Version>,
    upper_inclusive: bool,
}

impl VersionRange {
    /// Creates a validated interval
    ///
    /// An open upper end is never inclusive, whatever `upper_inclusive` says.
    pub fn new(
        lower: Version,
        lower_inclusive: bool,
        upper: Option<Version>,
        upper_inclusive: bool,
    ) -> Result<Self, VersionRangeError> {
        if let Some(ref upper) = upper {
            if lower > *upper {
                return Err(lower_above_upper(&lower, upper));
            }
        }
        let upper_inclusive = upper_inclusive && upper.is_some();
        Ok(Self {
            lower,
            lower_inclusive,
            upper,
            upper_inclusive,
        })
    }

    /// `>= version`, unbounded above
    pub fn at_least(version: Version) -> Self {
        Self {
            lower: version,
            lower_inclusive: true,
            upper: None,
            upper_inclusive: false,
        }
    }

    /// Parse a range string
    pub fn parse(input: &str) -> Result<Self, VersionRangeError> {
        let text = input.trim();
        let Some(first) = text.chars().next() else {
            return Err(VersionRangeError::Empty);
        };

        let lower_inclusive = match first {
            '[' => true,
            '(' => false,
            _ => {
                if let Some(c) = text.chars().find(|c| matches!(c, '[' | ']' | '(' | ')' | ',')) {
                    return Err(VersionRangeError::UnexpectedCharacter(c));
                }
                return Ok(Self::at_least(Version::parse(text)?));
            }
        };

        let upper_inclusive = match text.chars().last() {
            Some(']') if text.len() > 1 => true,
            Some(')') if text.len() > 1 => false,
            _ => return Err(VersionRangeError::MissingClosingBracket),
        };

        let inner = &text[1..text.len() - 1];
        let (lower, upper) = inner
            .split_once(',')
            .ok_or(VersionRangeError::MissingComma)?;
        if let Some(c) = inner.chars().find(|c| matches!(c, '[' | ']' | '(' | ')')) {
            return Err(VersionRangeError::UnexpectedCharacter(c));
        }

        let lower = Version::parse(lower)?;
        let upper = match upper.trim() {
            "" => None,
            upper => Some(Version::parse(upper)?),
        };

        Self::new(lower, lower_inclusive, upper, upper_inclusive)
    }

    pub fn lower(&self) -> &Version {
        &self.lower
    }

    pub fn is_lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    pub fn upper(&self) -> Option<&Version> {
        self.upper.as_ref()
    }

    pub fn is_upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    /// Whether `version` lies inside the interval
    pub fn contains(&self, version: &Version) -> bool {
        let above_lower = if self.lower_inclusive {
            *version >= self.lower
        } else {
            *version > self.lower
        };
        let below_upper = match &self.upper {
            None => true,
            Some(upper) if self.upper_inclusive => version <= upper,
            Some(upper) => version < upper,
        };
        above_lower && below_upper
    }
}

impl FromStr for VersionRange {
    type Err = VersionRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionRange {
    type Error = VersionRangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VersionRange> for String {
    fn from(range: VersionRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.upper.is_none() && self.lower_inclusive {
            return write!(f, "{}", self.lower);
        }
        let open = if self.lower_inclusive { '[' } else { '(' };
        let close = if self.upper_inclusive { ']' } else { ')' };
        write!(f, "{open}{},", self.lower)?;
        if let Some(ref upper) = self.upper {
            write!(f, "{upper}")?;
        }
        write!(f, "{close}")
    }
}
