//! Requirements a bundle declares

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::VersionRange;

/// Resolution directive value marking a requirement as optional
pub const RESOLUTION_OPTIONAL: &str = "optional";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    Bundle,
    Package,
    Service,
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundle => f.write_str("bundle"),
            Self::Package => f.write_str("package"),
            Self::Service => f.write_str("service"),
        }
    }
}

/// A required bundle or an imported package/service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub kind: RequirementKind,
    pub name: String,

    /// `None` accepts any version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_range: Option<VersionRange>,

    /// Raw resolution directive; `None` means mandatory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl Requirement {
    pub fn new(
        kind: RequirementKind,
        name: impl Into<String>,
        version_range: Option<VersionRange>,
        resolution: Option<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            version_range,
            resolution,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.resolution.as_deref() == Some(RESOLUTION_OPTIONAL)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)?;
        if let Some(ref range) = self.version_range {
            write!(f, " {range}")?;
        }
        if let Some(ref resolution) = self.resolution {
            write!(f, " ({resolution})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_optional() {
        let mandatory = Requirement::new(RequirementKind::Package, "a", None, None);
        assert!(!mandatory.is_optional());
        let explicit = Requirement::new(
            RequirementKind::Package,
            "a",
            None,
            Some("mandatory".to_string()),
        );
        assert!(!explicit.is_optional());
        let optional = Requirement::new(
            RequirementKind::Bundle,
            "a",
            None,
            Some("optional".to_string()),
        );
        assert!(optional.is_optional());
    }

    #[test]
    fn test_display() {
        let requirement = Requirement::new(
            RequirementKind::Package,
            "com.acme.api",
            Some(VersionRange::parse("[1.0,2.0)").unwrap()),
            Some("optional".to_string()),
        );
        assert_eq!(
            requirement.to_string(),
            "package com.acme.api [1.0.0,2.0.0) (optional)"
        );
    }

    #[test]
    fn test_json_round_trip_with_open_range() {
        let requirement = Requirement::new(
            RequirementKind::Bundle,
            "org.core",
            Some(VersionRange::parse("[1.0,]").unwrap()),
            None,
        );
        let json = serde_json::to_value(&requirement).unwrap();
        assert_eq!(json["version_range"], "1.0.0");
        let back: Requirement = serde_json::from_value(json).unwrap();
        assert_eq!(back, requirement);
    }
}
