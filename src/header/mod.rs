//! Manifest header values
//!
//! A header is parsed into an ordered list of [`HeaderElement`]s by the
//! grammar in [`parser`]. [`HeaderValue`] owns that list together with the
//! structural errors recovered while reading it.

pub mod element;
mod parser;

pub use element::HeaderElement;

use std::fmt;

use crate::error::HeaderSyntaxError;
use parser::HeaderParser;

/// All elements of one header, in source order
#[derive(Debug, Clone, Default)]
pub struct HeaderValue {
    elements: Vec<HeaderElement>,
    diagnostics: Vec<HeaderSyntaxError>,
}

impl HeaderValue {
    /// Parse structured header text; empty text yields no elements
    pub fn parse(header: &str) -> Self {
        let (elements, diagnostics) = HeaderParser::new(header).parse();
        Self {
            elements,
            diagnostics,
        }
    }

    /// Take the whole header as one trimmed value (free-text headers)
    pub fn arbitrary(header: &str) -> Self {
        let (elements, diagnostics) = HeaderParser::new(header).parse_arbitrary();
        Self {
            elements,
            diagnostics,
        }
    }

    pub fn elements(&self) -> &[HeaderElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// First value of the first element
    pub fn single_value(&self) -> Option<&str> {
        self.elements
            .first()
            .and_then(|element| element.values().first())
            .map(String::as_str)
    }

    /// Values of every element, flattened in source order
    pub fn values(&self) -> Vec<&str> {
        self.elements
            .iter()
            .flat_map(|element| element.values().iter().map(String::as_str))
            .collect()
    }

    /// Structural errors recovered while parsing
    pub fn diagnostics(&self) -> &[HeaderSyntaxError] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<HeaderSyntaxError> {
        self.diagnostics
    }

    #[cfg(test)]
    pub(crate) fn add_element(&mut self, element: HeaderElement) {
        self.elements.push(element);
    }
}

/// Same elements the same number of times on both sides;
/// element order and diagnostics are not compared
impl PartialEq for HeaderValue {
    fn eq(&self, other: &Self) -> bool {
        let count = |elements: &[HeaderElement], element: &HeaderElement| {
            elements.iter().filter(|e| *e == element).count()
        };
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .all(|element| count(&self.elements, element) == count(&other.elements, element))
    }
}

impl Eq for HeaderValue {}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

/// Plain-text report: the message, the header indented by three spaces and
/// a caret under the offending character
pub fn render_syntax_error(error: &HeaderSyntaxError) -> String {
    format!(
        "{}\n   {}\n   {}^\n",
        error.kind(),
        error.header(),
        " ".repeat(error.offset())
    )
}
