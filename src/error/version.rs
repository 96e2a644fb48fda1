//! Version and version range grammar errors

use std::num::ParseIntError;

use thiserror::Error;

/// Failure to read a dotted `major.minor.micro.qualifier` version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("empty version")]
    Empty,

    #[error("{component} component '{value}' is not an unsigned integer")]
    NotNumeric {
        component: &'static str,
        value: String,
    },

    #[error("{component} component '{value}' is out of range")]
    OutOfRange {
        component: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failure to read a version interval
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionRangeError {
    #[error("empty version range")]
    Empty,

    #[error("missing closing ']' or ')'")]
    MissingClosingBracket,

    #[error("missing ',' between the bounds")]
    MissingComma,

    #[error("unexpected character '{0}' outside of an interval")]
    UnexpectedCharacter(char),

    #[error("invalid bound: {0}")]
    InvalidBound(#[from] VersionError),

    #[error("lower bound {lower} is above upper bound {upper}")]
    LowerAboveUpper { lower: String, upper: String },
}

/// Creates a non-numeric component error
pub fn not_numeric(component: &'static str, value: impl Into<String>) -> VersionError {
    VersionError::NotNumeric {
        component,
        value: value.into(),
    }
}

/// Creates an inverted bounds error
pub fn lower_above_upper(lower: impl ToString, upper: impl ToString) -> VersionRangeError {
    VersionRangeError::LowerAboveUpper {
        lower: lower.to_string(),
        upper: upper.to_string(),
    }
}
