//! Bundle descriptor model
//!
//! The output of manifest parsing: identity, declared capabilities and
//! declared requirements of one bundle.
//!
//! ## Module Organization
//!
//! - `capability.rs`: Exported packages and services
//! - `requirement.rs`: Required bundles, imported packages and services
//! - `builder.rs`: Header interpretation producing a [`BundleDescriptor`]

pub mod builder;
pub mod capability;
pub mod requirement;

pub use builder::{BundleDescriptorBuilder, HeaderDiagnostic};
pub use capability::{Capability, CapabilityKind};
pub use requirement::{Requirement, RequirementKind};

use serde::{Deserialize, Serialize};

use crate::version::Version;

/// Classpath used when a bundle declares none
pub const DEFAULT_CLASSPATH_ENTRY: &str = ".";

/// Target of a source bundle (the binary bundle it carries sources for)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbolic_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

/// Everything a manifest declares about one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleDescriptor {
    pub symbolic_name: String,

    /// Zero version when the manifest declares none
    pub version: Version,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub execution_environments: Vec<String>,

    /// Empty means the default entry
    #[serde(default)]
    pub classpath: Vec<String>,

    #[serde(default)]
    pub capabilities: Vec<Capability>,

    #[serde(default)]
    pub requirements: Vec<Requirement>,

    /// Present when the bundle is a source bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_bundle: Option<SourceBundle>,
}

impl BundleDescriptor {
    /// Create a descriptor with only its identity set
    pub fn new(symbolic_name: impl Into<String>, version: Version) -> Self {
        Self {
            symbolic_name: symbolic_name.into(),
            version,
            description: None,
            execution_environments: Vec::new(),
            classpath: Vec::new(),
            capabilities: Vec::new(),
            requirements: Vec::new(),
            source_bundle: None,
        }
    }

    pub fn is_source(&self) -> bool {
        self.source_bundle.is_some()
    }

    /// Declared classpath, or the single default entry
    pub fn classpath_or_default(&self) -> Vec<&str> {
        if self.classpath.is_empty() {
            vec![DEFAULT_CLASSPATH_ENTRY]
        } else {
            self.classpath.iter().map(String::as_str).collect()
        }
    }

    /// Exported packages
    pub fn package_exports(&self) -> impl Iterator<Item = &Capability> {
        self.capabilities
            .iter()
            .filter(|capability| capability.kind == CapabilityKind::Package)
    }

    pub fn requirements_of(&self, kind: RequirementKind) -> impl Iterator<Item = &Requirement> {
        self.requirements
            .iter()
            .filter(move |requirement| requirement.kind == kind)
    }
}
