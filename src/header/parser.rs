//! Character-level tokenizer for header text
//!
//! ```text
//! header    ::= element (',' element)*
//! element   ::= values (';' (attribute | directive))*
//! values    ::= value (';' value)*
//! attribute ::= key '=' pvalue
//! directive ::= key ':=' pvalue
//! pvalue    ::= token | 'single-quoted' | "double-quoted"
//! ```
//!
//! Parsing is best-effort: every structural error is recorded with its
//! character offset and the offending value, parameter or element is dropped.

use tracing::debug;

use super::element::HeaderElement;
use crate::error::{HeaderSyntaxError, SyntaxErrorKind};

/// Elements and diagnostics produced by one parse call
pub(crate) type ParseOutcome = (Vec<HeaderElement>, Vec<HeaderSyntaxError>);

fn is_header_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Parser state for one header; never shared between calls
pub(crate) struct HeaderParser<'a> {
    header: &'a str,
    chars: Vec<char>,
    /// Index of the next character to read
    pos: usize,
    /// Last character read, `None` once the input is exhausted
    current: Option<char>,
    buffer: String,
    element: HeaderElement,
    /// Set by the first stored parameter; bare values are illegal afterwards
    values_parsed: bool,
    /// `None` while recovering from a broken parameter
    param_name: Option<String>,
    is_directive: bool,
    elements: Vec<HeaderElement>,
    errors: Vec<HeaderSyntaxError>,
}

impl<'a> HeaderParser<'a> {
    pub(crate) fn new(header: &'a str) -> Self {
        Self {
            header,
            chars: header.chars().collect(),
            pos: 0,
            current: None,
            buffer: String::new(),
            element: HeaderElement::default(),
            values_parsed: false,
            param_name: None,
            is_directive: false,
            elements: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Whole header as one trimmed opaque value
    pub(crate) fn parse_arbitrary(self) -> ParseOutcome {
        let trimmed = self.header.trim_matches(is_header_whitespace);
        if trimmed.is_empty() {
            return (Vec::new(), Vec::new());
        }
        let mut element = HeaderElement::default();
        element.add_value(trimmed.to_string());
        (vec![element], Vec::new())
    }

    pub(crate) fn parse(mut self) -> ParseOutcome {
        if self.rest_is_blank() {
            return (Vec::new(), Vec::new());
        }

        loop {
            self.element = HeaderElement::default();
            let element_start = self.pos;
            self.parse_element();
            let element = std::mem::take(&mut self.element);
            if element.values().is_empty() {
                // recover: drop the element, keep parsing the next one
                self.error_at(SyntaxErrorKind::NoDefinedValue, element_start);
            } else {
                self.elements.push(element);
            }
            if self.rest_is_blank() {
                break;
            }
        }

        (self.elements, self.errors)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Only whitespace (or nothing) left to read
    fn rest_is_blank(&self) -> bool {
        self.chars[self.pos..]
            .iter()
            .all(|&c| is_header_whitespace(c))
    }

    fn read_next(&mut self) -> Option<char> {
        self.current = self.chars.get(self.pos).copied();
        if self.current.is_some() {
            self.pos += 1;
        }
        self.current
    }

    /// Records an error at the last character read
    fn error(&mut self, kind: SyntaxErrorKind) {
        let offset = self.pos.saturating_sub(1);
        self.error_at(kind, offset);
    }

    fn error_at(&mut self, kind: SyntaxErrorKind, offset: usize) {
        debug!(offset, header = self.header, "recovered header syntax error: {kind}");
        self.errors
            .push(HeaderSyntaxError::new(kind, self.header, offset));
    }

    fn parse_element(&mut self) {
        self.values_parsed = false;
        loop {
            self.parse_value_or_parameter();
            if self.current != Some(';') || self.rest_is_blank() {
                break;
            }
        }
    }

    fn parse_value_or_parameter(&mut self) {
        // token started, leading whitespace skipped
        let mut started = false;
        // token ended, only whitespace allowed until the next separator
        let mut ended = false;
        loop {
            match self.read_next() {
                None => {}
                Some(';' | ',') => {
                    self.end_value();
                    return;
                }
                Some(':' | '=') => {
                    self.end_parameter_name();
                    self.parse_separator();
                    self.parse_parameter_value();
                    return;
                }
                Some(c) if is_header_whitespace(c) => {
                    if started {
                        ended = true;
                    }
                }
                Some(c) => {
                    if ended {
                        self.error(SyntaxErrorKind::ExpectingEndOfToken);
                        // recover: restart the token at this character
                        self.buffer.clear();
                        ended = false;
                    }
                    started = true;
                    self.buffer.push(c);
                }
            }
            if self.at_end() {
                break;
            }
        }
        self.end_value();
    }

    fn end_value(&mut self) {
        if self.buffer.is_empty() {
            self.error(SyntaxErrorKind::EmptyValue);
            return;
        }
        if self.values_parsed {
            self.error(SyntaxErrorKind::EarlyEndOfParameter);
            self.buffer.clear();
            return;
        }
        let value = std::mem::take(&mut self.buffer);
        self.element.add_value(value);
    }

    fn end_parameter_name(&mut self) {
        if self.buffer.is_empty() {
            self.error(SyntaxErrorKind::EmptyParameterName);
            // recover: the value that follows is discarded
            self.param_name = None;
        } else {
            self.param_name = Some(std::mem::take(&mut self.buffer));
        }
    }

    fn parse_separator(&mut self) {
        if self.current == Some('=') {
            self.is_directive = false;
            return;
        }
        let before = self.pos;
        if self.read_next() != Some('=') {
            self.error(SyntaxErrorKind::ExpectingEquals);
            // recover: unread the character and discard the parameter
            if self.pos > before {
                self.pos -= 1;
            }
            self.param_name = None;
        }
        self.is_directive = true;
    }

    fn parse_parameter_value(&mut self) {
        let mut started = false;
        let mut ended = false;
        loop {
            match self.read_next() {
                None => {}
                Some(';' | ',') => {
                    self.end_parameter_value();
                    return;
                }
                Some(c @ ('=' | ':')) => {
                    self.error(SyntaxErrorKind::IllegalCharacter {
                        character: c,
                        parameter: self.param_name.clone(),
                    });
                    self.param_name = None;
                }
                Some(quote @ ('"' | '\'')) => {
                    self.check_value_ended(ended);
                    if started {
                        // quote in the middle of a token is literal
                        self.buffer.push(quote);
                    } else {
                        started = true;
                        self.append_quoted(quote);
                        ended = true;
                    }
                }
                Some('\\') => {
                    self.check_value_ended(ended);
                    started = true;
                    self.append_escaped();
                }
                Some(c) if is_header_whitespace(c) => {
                    if started {
                        ended = true;
                    }
                }
                Some(c) => {
                    self.check_value_ended(ended);
                    started = true;
                    self.buffer.push(c);
                }
            }
            if self.at_end() {
                break;
            }
        }
        self.end_parameter_value();
    }

    fn check_value_ended(&mut self, ended: bool) {
        if ended && self.param_name.is_some() {
            self.error(SyntaxErrorKind::ExpectingEndOfParameterValue);
            self.param_name = None;
        }
    }

    fn end_parameter_value(&mut self) {
        let Some(name) = self.param_name.take() else {
            // recovering from a broken parameter: skip its value
            self.buffer.clear();
            return;
        };
        if self.buffer.is_empty() {
            self.error(SyntaxErrorKind::EmptyParameterValue);
            return;
        }
        let value = std::mem::take(&mut self.buffer);
        if self.is_directive {
            self.element.add_directive(name, value);
        } else {
            self.element.add_attribute(name, value);
        }
        self.values_parsed = true;
    }

    /// Reads up to the matching `quote`; `\` emits the next character as is
    fn append_quoted(&mut self, quote: char) {
        let opening = self.pos.saturating_sub(1);
        while let Some(c) = self.read_next() {
            if c == quote {
                return;
            }
            if c == '\\' {
                match self.read_next() {
                    Some(escaped) => self.buffer.push(escaped),
                    None => break,
                }
            } else {
                self.buffer.push(c);
            }
        }
        self.error_at(SyntaxErrorKind::UnterminatedQuote { quote }, opening);
        self.param_name = None;
    }

    fn append_escaped(&mut self) {
        match self.read_next() {
            Some(c) => self.buffer.push(c),
            // trailing backslash stands for itself
            None => self.buffer.push('\\'),
        }
    }
}
