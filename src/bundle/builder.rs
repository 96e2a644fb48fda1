//! Header interpretation producing a [`BundleDescriptor`]
//!
//! The grammar layer below is best-effort; this layer is fail-fast for the
//! required and typed fields (symbolic name, versions, version ranges).

use std::fmt;

use tracing::{debug, warn};

use super::{
    BundleDescriptor, Capability, CapabilityKind, Requirement, RequirementKind, SourceBundle,
};
use crate::error::manifest::{malformed_range, malformed_version, missing_field};
use crate::error::{HeaderSyntaxError, Result};
use crate::header::HeaderValue;
use crate::manifest::headers::{
    ATTR_BUNDLE_VERSION, ATTR_VERSION, BUNDLE_CLASSPATH, BUNDLE_DESCRIPTION,
    BUNDLE_REQUIRED_EXECUTION_ENVIRONMENT, BUNDLE_SYMBOLIC_NAME, BUNDLE_VERSION,
    DIRECTIVE_RESOLUTION, DIRECTIVE_USES, ECLIPSE_SOURCE_BUNDLE, EXPORT_PACKAGE, EXPORT_SERVICE,
    IMPORT_PACKAGE, IMPORT_SERVICE, REQUIRE_BUNDLE, is_arbitrary,
};
use crate::manifest::{HeaderSource, ManifestAttributes};
use crate::version::{Version, VersionRange};

/// A recovered structural error, tagged with the header it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDiagnostic {
    pub header: String,
    pub error: HeaderSyntaxError,
}

impl fmt::Display for HeaderDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.header, self.error)
    }
}

/// Reads recognized headers from a [`HeaderSource`] into a descriptor
#[derive(Debug)]
pub struct BundleDescriptorBuilder<'a, S: HeaderSource + ?Sized> {
    source: &'a S,
    diagnostics: Vec<HeaderDiagnostic>,
}

impl<'a, S: HeaderSource + ?Sized> BundleDescriptorBuilder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Build the descriptor, discarding recovered grammar errors
    pub fn build(self) -> Result<BundleDescriptor> {
        self.build_with_diagnostics()
            .map(|(descriptor, _)| descriptor)
    }

    /// Build the descriptor and return the recovered grammar errors with it
    pub fn build_with_diagnostics(mut self) -> Result<(BundleDescriptor, Vec<HeaderDiagnostic>)> {
        let symbolic_name = self.symbolic_name()?;
        let description = self.description();
        let version = self.bundle_version()?;

        let mut descriptor = BundleDescriptor::new(symbolic_name, version);
        descriptor.description = description;
        descriptor.execution_environments =
            self.flattened_values(BUNDLE_REQUIRED_EXECUTION_ENVIRONMENT);

        let mut requirements = Vec::new();
        self.requirements(
            REQUIRE_BUNDLE,
            RequirementKind::Bundle,
            ATTR_BUNDLE_VERSION,
            &mut requirements,
        )?;
        self.requirements(
            IMPORT_PACKAGE,
            RequirementKind::Package,
            ATTR_VERSION,
            &mut requirements,
        )?;
        self.requirements(
            IMPORT_SERVICE,
            RequirementKind::Service,
            ATTR_VERSION,
            &mut requirements,
        )?;
        descriptor.requirements = requirements;

        let mut capabilities = Vec::new();
        self.capabilities(EXPORT_PACKAGE, CapabilityKind::Package, &mut capabilities)?;
        self.capabilities(EXPORT_SERVICE, CapabilityKind::Service, &mut capabilities)?;
        descriptor.capabilities = capabilities;

        descriptor.source_bundle = self.source_bundle()?;
        descriptor.classpath = self.flattened_values(BUNDLE_CLASSPATH);

        debug!(
            bundle = %descriptor.symbolic_name,
            version = %descriptor.version,
            capabilities = descriptor.capabilities.len(),
            requirements = descriptor.requirements.len(),
            diagnostics = self.diagnostics.len(),
            "built bundle descriptor"
        );
        Ok((descriptor, self.diagnostics))
    }

    /// Parse a structured header, collecting its diagnostics; absent means empty
    fn parse_header(&mut self, name: &str) -> HeaderValue {
        let Some(text) = self.source.header(name) else {
            return HeaderValue::default();
        };
        let value = HeaderValue::parse(text);
        debug!(header = name, elements = value.elements().len(), "parsed header");
        self.diagnostics
            .extend(value.diagnostics().iter().map(|error| HeaderDiagnostic {
                header: name.to_string(),
                error: error.clone(),
            }));
        value
    }

    fn flattened_values(&mut self, name: &str) -> Vec<String> {
        self.parse_header(name)
            .values()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn symbolic_name(&mut self) -> Result<String> {
        let value = self.parse_header(BUNDLE_SYMBOLIC_NAME);
        let name = value
            .single_value()
            .ok_or_else(|| missing_field(BUNDLE_SYMBOLIC_NAME))?;
        let count = value.values().len();
        if count > 1 {
            warn!(
                header = BUNDLE_SYMBOLIC_NAME,
                count, "several symbolic names declared, using the first"
            );
        }
        Ok(name.to_string())
    }

    /// Present-but-blank descriptions count as absent
    fn description(&self) -> Option<String> {
        let text = self.source.header(BUNDLE_DESCRIPTION)?;
        HeaderValue::arbitrary(text)
            .single_value()
            .map(str::to_string)
    }

    fn bundle_version(&mut self) -> Result<Version> {
        let value = self.parse_header(BUNDLE_VERSION);
        match value.single_value() {
            None => Ok(Version::ZERO),
            Some(text) => {
                Version::parse(text).map_err(|e| malformed_version(BUNDLE_VERSION, text, e))
            }
        }
    }

    fn requirements(
        &mut self,
        header: &str,
        kind: RequirementKind,
        version_attribute: &str,
        out: &mut Vec<Requirement>,
    ) -> Result<()> {
        let value = self.parse_header(header);
        for element in value.elements() {
            let resolution = element.directive(DIRECTIVE_RESOLUTION).map(str::to_string);
            let range = element
                .attribute(version_attribute)
                .map(|text| {
                    VersionRange::parse(text).map_err(|e| malformed_range(header, text, e))
                })
                .transpose()?;

            for name in element.values() {
                out.push(Requirement::new(
                    kind,
                    name.clone(),
                    range.clone(),
                    resolution.clone(),
                ));
            }
        }
        Ok(())
    }

    fn capabilities(
        &mut self,
        header: &str,
        kind: CapabilityKind,
        out: &mut Vec<Capability>,
    ) -> Result<()> {
        let value = self.parse_header(header);
        for element in value.elements() {
            let version = element
                .attribute(ATTR_VERSION)
                .map(|text| Version::parse(text).map_err(|e| malformed_version(header, text, e)))
                .transpose()?;
            let uses = match kind {
                CapabilityKind::Package => element.directive(DIRECTIVE_USES),
                CapabilityKind::Service => None,
            };

            for name in element.values() {
                let mut capability = Capability {
                    kind,
                    name: name.clone(),
                    version: version.clone(),
                    uses: Default::default(),
                };
                for package in uses.into_iter().flat_map(|uses| uses.split(',')) {
                    capability.add_use(package);
                }
                out.push(capability);
            }
        }
        Ok(())
    }

    fn source_bundle(&mut self) -> Result<Option<SourceBundle>> {
        if self.source.header(ECLIPSE_SOURCE_BUNDLE).is_none() {
            return Ok(None);
        }
        let value = self.parse_header(ECLIPSE_SOURCE_BUNDLE);
        let element = value.elements().first();
        let symbolic_name = element.and_then(|e| e.values().first()).cloned();
        let version = element
            .and_then(|e| e.attribute(ATTR_VERSION))
            .map(|text| {
                Version::parse(text).map_err(|e| malformed_version(ECLIPSE_SOURCE_BUNDLE, text, e))
            })
            .transpose()?;
        Ok(Some(SourceBundle {
            symbolic_name,
            version,
        }))
    }
}

/// Parse every structured header of a manifest and collect the recovered
/// grammar errors, without interpreting any of them
pub fn check_headers(attributes: &ManifestAttributes) -> Vec<HeaderDiagnostic> {
    attributes
        .iter()
        .filter(|(name, _)| !is_arbitrary(name))
        .flat_map(|(name, text)| {
            HeaderValue::parse(text)
                .into_diagnostics()
                .into_iter()
                .map(move |error| HeaderDiagnostic {
                    header: name.to_string(),
                    error,
                })
        })
        .collect()
}
