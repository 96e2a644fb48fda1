//! Header and parameter names understood by the descriptor builder

pub const BUNDLE_SYMBOLIC_NAME: &str = "Bundle-SymbolicName";
pub const BUNDLE_VERSION: &str = "Bundle-Version";
pub const BUNDLE_DESCRIPTION: &str = "Bundle-Description";
pub const BUNDLE_REQUIRED_EXECUTION_ENVIRONMENT: &str = "Bundle-RequiredExecutionEnvironment";
pub const BUNDLE_CLASSPATH: &str = "Bundle-ClassPath";
pub const REQUIRE_BUNDLE: &str = "Require-Bundle";
pub const IMPORT_PACKAGE: &str = "Import-Package";
pub const IMPORT_SERVICE: &str = "Import-Service";
pub const EXPORT_PACKAGE: &str = "Export-Package";
pub const EXPORT_SERVICE: &str = "Export-Service";
pub const ECLIPSE_SOURCE_BUNDLE: &str = "Eclipse-SourceBundle";

pub const ATTR_VERSION: &str = "version";
pub const ATTR_BUNDLE_VERSION: &str = "bundle-version";
pub const DIRECTIVE_RESOLUTION: &str = "resolution";
pub const DIRECTIVE_USES: &str = "uses";

/// Free-text headers, read as one opaque value
pub const ARBITRARY_HEADERS: &[&str] = &[BUNDLE_DESCRIPTION, "Bundle-Name", "Bundle-Vendor"];

/// Whether `name` holds free text rather than header grammar
pub fn is_arbitrary(name: &str) -> bool {
    ARBITRARY_HEADERS.contains(&name)
}
