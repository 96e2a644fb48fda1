//! Structural header grammar errors
//!
//! These never abort a whole header: the parser records them, drops the
//! offending fragment and keeps going.

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// What went wrong in the header grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// An element ended without producing a single value
    NoDefinedValue,
    /// A value slot between separators was empty
    EmptyValue,
    /// A bare value appeared after the element's first parameter
    EarlyEndOfParameter,
    /// Non-whitespace resumed after whitespace inside a started token
    ExpectingEndOfToken,
    /// `=` or `:=` with nothing before it
    EmptyParameterName,
    /// `:` not followed by `=`
    ExpectingEquals,
    /// `=` or `:` inside a parameter value
    IllegalCharacter {
        character: char,
        parameter: Option<String>,
    },
    /// Trailing characters after a finished parameter value
    ExpectingEndOfParameterValue,
    /// `name=` with nothing after it
    EmptyParameterValue,
    /// A quoted span ran to the end of the header
    UnterminatedQuote { quote: char },
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDefinedValue => f.write_str("No defined value"),
            Self::EmptyValue => f.write_str("Empty value"),
            Self::EarlyEndOfParameter => f.write_str("Early end of a parameter"),
            Self::ExpectingEndOfToken => {
                f.write_str("Expecting the end of a value or of a parameter name")
            }
            Self::EmptyParameterName => f.write_str("Empty parameter name"),
            Self::ExpectingEquals => f.write_str("Expecting '='"),
            Self::IllegalCharacter {
                character,
                parameter,
            } => write!(
                f,
                "Illegal character '{}' in parameter value of {}",
                character,
                parameter.as_deref().unwrap_or("<discarded parameter>")
            ),
            Self::ExpectingEndOfParameterValue => {
                f.write_str("Expecting the end of a parameter value")
            }
            Self::EmptyParameterValue => f.write_str("Empty parameter value"),
            Self::UnterminatedQuote { quote } => write!(f, "Unterminated {quote}-quoted string"),
        }
    }
}

/// A structural error at an absolute character offset of one header
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (at offset {offset})")]
#[diagnostic(code(bundle_manifest::header::syntax))]
pub struct HeaderSyntaxError {
    kind: SyntaxErrorKind,
    offset: usize,
    #[source_code]
    header: String,
    #[label("here")]
    span: SourceSpan,
}

impl HeaderSyntaxError {
    /// Creates an error at the given character offset of `header`
    pub fn new(kind: SyntaxErrorKind, header: &str, offset: usize) -> Self {
        let (start, len) = header
            .char_indices()
            .nth(offset)
            .map_or((header.len(), 0), |(byte, c)| (byte, c.len_utf8()));
        Self {
            kind,
            offset,
            header: header.to_owned(),
            span: (start, len).into(),
        }
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    /// Character offset into the header text
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The header text the offset refers to
    pub fn header(&self) -> &str {
        &self.header
    }
}
