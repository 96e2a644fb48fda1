//! One comma-separated unit of a header

use std::collections::BTreeMap;
use std::fmt;

/// Ordered values plus attribute (`=`) and directive (`:=`) maps
///
/// Only the grammar parser mutates an element, while it is being built.
/// Repeated parameter names keep the last assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderElement {
    values: Vec<String>,
    attributes: BTreeMap<String, String>,
    directives: BTreeMap<String, String>,
}

impl HeaderElement {
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn directives(&self) -> &BTreeMap<String, String> {
        &self.directives
    }

    /// Value of the attribute `name`, if assigned
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Value of the directive `name`, if assigned
    pub fn directive(&self, name: &str) -> Option<&str> {
        self.directives.get(name).map(String::as_str)
    }

    pub(crate) fn add_value(&mut self, value: String) {
        self.values.push(value);
    }

    pub(crate) fn add_attribute(&mut self, name: String, value: String) {
        self.attributes.insert(name, value);
    }

    pub(crate) fn add_directive(&mut self, name: String, value: String) {
        self.directives.insert(name, value);
    }
}

/// Characters that force a parameter value into quotes
fn needs_quoting(value: &str) -> bool {
    value.chars().any(|c| {
        matches!(c, ',' | ';' | '=' | ':' | '"' | '\'' | '\\') || c.is_whitespace()
    })
}

fn write_parameter_value(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    if !needs_quoting(value) {
        return f.write_str(value);
    }
    f.write_str("\"")?;
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}

impl fmt::Display for HeaderElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values.join(";"))?;
        for (name, value) in &self.attributes {
            write!(f, ";{name}=")?;
            write_parameter_value(f, value)?;
        }
        for (name, value) in &self.directives {
            write!(f, ";{name}:=")?;
            write_parameter_value(f, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(
        values: &[&str],
        attributes: &[(&str, &str)],
        directives: &[(&str, &str)],
    ) -> HeaderElement {
        let mut element = HeaderElement::default();
        for value in values {
            element.add_value((*value).to_string());
        }
        for (name, value) in attributes {
            element.add_attribute((*name).to_string(), (*value).to_string());
        }
        for (name, value) in directives {
            element.add_directive((*name).to_string(), (*value).to_string());
        }
        element
    }

    #[test]
    fn test_accessors() {
        let e = element(&["a", "b"], &[("version", "1.0")], &[("resolution", "optional")]);
        assert_eq!(e.values(), ["a", "b"]);
        assert_eq!(e.attribute("version"), Some("1.0"));
        assert_eq!(e.directive("resolution"), Some("optional"));
        assert_eq!(e.attribute("resolution"), None);
        assert_eq!(e.directive("version"), None);
    }

    #[test]
    fn test_repeated_parameter_keeps_last() {
        let e = element(&["a"], &[("version", "1.0"), ("version", "2.0")], &[]);
        assert_eq!(e.attribute("version"), Some("2.0"));
        assert_eq!(e.attributes().len(), 1);
    }

    #[test]
    fn test_display_plain() {
        let e = element(&["a", "b"], &[("version", "1.0")], &[("resolution", "optional")]);
        assert_eq!(e.to_string(), "a;b;version=1.0;resolution:=optional");
    }

    #[test]
    fn test_display_quotes_special_values() {
        let e = element(&["a"], &[("desc", "x, y; \"z\"")], &[("uses", "p,q")]);
        assert_eq!(e.to_string(), r#"a;desc="x, y; \"z\"";uses:="p,q""#);
    }

    #[test]
    fn test_equality_is_structural() {
        let left = element(&["a"], &[("x", "1"), ("y", "2")], &[]);
        let right = element(&["a"], &[("y", "2"), ("x", "1")], &[]);
        assert_eq!(left, right);
        assert_ne!(left, element(&["a"], &[("x", "1")], &[("y", "2")]));
    }
}
