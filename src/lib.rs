//! Bundle manifest - header parser and bundle descriptor builder
//!
//! Reads the main attributes of a bundle manifest, parses the structured
//! headers (`value;attr=x;dir:=y, ...`) and builds a typed
//! [`BundleDescriptor`]: symbolic name, version, exported capabilities and
//! declared requirements.
//!
//! ```
//! let descriptor = bundle_manifest::parse_manifest(
//!     "Bundle-SymbolicName: com.acme.core\n\
//!      Bundle-Version: 1.2\n\
//!      Import-Package: com.acme.api;version=\"[1.0,2.0)\";resolution:=optional\n",
//! )
//! .unwrap();
//! assert_eq!(descriptor.symbolic_name, "com.acme.core");
//! assert!(descriptor.requirements[0].is_optional());
//! ```

pub mod bundle;
pub mod error;
pub mod header;
pub mod manifest;
pub mod version;

use std::io::Read;

pub use bundle::{
    BundleDescriptor, BundleDescriptorBuilder, Capability, CapabilityKind, HeaderDiagnostic,
    Requirement, RequirementKind, SourceBundle,
};
pub use error::{HeaderSyntaxError, ManifestError, Result, SyntaxErrorKind};
pub use header::{HeaderElement, HeaderValue, render_syntax_error};
pub use manifest::fold::{fold_lines, unfold_lines};
pub use manifest::{HeaderSource, ManifestAttributes};
pub use version::{Version, VersionRange};

/// Build a descriptor from manifest text
pub fn parse_manifest(text: &str) -> Result<BundleDescriptor> {
    let attributes = ManifestAttributes::parse(text)?;
    parse_manifest_attributes(&attributes)
}

/// Build a descriptor from already decoded headers
pub fn parse_manifest_attributes<S: HeaderSource + ?Sized>(source: &S) -> Result<BundleDescriptor> {
    BundleDescriptorBuilder::new(source).build()
}

/// Build a descriptor from a manifest byte stream
pub fn parse_manifest_reader<R: Read>(reader: R) -> Result<BundleDescriptor> {
    let attributes = ManifestAttributes::from_reader(reader)?;
    parse_manifest_attributes(&attributes)
}
