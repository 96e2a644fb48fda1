//! Capabilities a bundle offers

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::Version;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    Package,
    Service,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package => f.write_str("package"),
            Self::Service => f.write_str("service"),
        }
    }
}

/// An exported package or service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub kind: CapabilityKind,
    pub name: String,

    /// `None` when the export declares no version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,

    /// Packages the exported package's API depends on (packages only)
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub uses: BTreeSet<String>,
}

impl Capability {
    pub fn package(name: impl Into<String>, version: Option<Version>) -> Self {
        Self {
            kind: CapabilityKind::Package,
            name: name.into(),
            version,
            uses: BTreeSet::new(),
        }
    }

    pub fn service(name: impl Into<String>, version: Option<Version>) -> Self {
        Self {
            kind: CapabilityKind::Service,
            name: name.into(),
            version,
            uses: BTreeSet::new(),
        }
    }

    /// Record a package the export uses; blank names are ignored
    pub fn add_use(&mut self, package: &str) {
        let package = package.trim();
        if !package.is_empty() {
            self.uses.insert(package.to_string());
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)?;
        if let Some(ref version) = self.version {
            write!(f, " {version}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_use_trims_and_deduplicates() {
        let mut capability = Capability::package("com.acme.api", None);
        capability.add_use(" com.acme.spi ");
        capability.add_use("com.acme.spi");
        capability.add_use("  ");
        assert_eq!(capability.uses.len(), 1);
        assert!(capability.uses.contains("com.acme.spi"));
    }

    #[test]
    fn test_display() {
        let capability = Capability::package("com.acme.api", Some(Version::new(1, 2, 0)));
        assert_eq!(capability.to_string(), "package com.acme.api 1.2.0");
        assert_eq!(
            Capability::service("com.acme.Svc", None).to_string(),
            "service com.acme.Svc"
        );
    }
}
