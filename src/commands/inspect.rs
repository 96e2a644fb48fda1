//! Inspect command implementation

use std::fmt::Write as _;

use bundle_manifest::error::Result;
use bundle_manifest::{BundleDescriptor, BundleDescriptorBuilder, HeaderDiagnostic};
use console::Style;
use tracing::warn;

use super::helpers::load_attributes;
use crate::cli::{InspectArgs, OutputFormat};

pub fn run(args: InspectArgs) -> Result<()> {
    let attributes = load_attributes(&args.path)?;
    let (descriptor, diagnostics) =
        BundleDescriptorBuilder::new(&attributes).build_with_diagnostics()?;

    for diagnostic in &diagnostics {
        warn!(header = %diagnostic.header, "{}", diagnostic.error);
    }

    let output = match args.format {
        OutputFormat::Text => render_text(&descriptor, &diagnostics),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&descriptor)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(&descriptor)?,
    };
    print!("{output}");
    Ok(())
}

/// Styled multi-line summary of a descriptor
pub fn render_text(descriptor: &BundleDescriptor, diagnostics: &[HeaderDiagnostic]) -> String {
    let bold = Style::new().bold();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        Style::new().bold().yellow().apply_to(&descriptor.symbolic_name),
        Style::new().green().apply_to(&descriptor.version)
    );
    if let Some(ref description) = descriptor.description {
        let _ = writeln!(out, "  {} {}", bold.apply_to("Description:"), description);
    }
    if let Some(ref source) = descriptor.source_bundle {
        let target = source.symbolic_name.as_deref().unwrap_or("<unnamed>");
        match source.version {
            Some(ref version) => {
                let _ = writeln!(out, "  {} {target} {version}", bold.apply_to("Source of:"));
            }
            None => {
                let _ = writeln!(out, "  {} {target}", bold.apply_to("Source of:"));
            }
        }
    }
    if !descriptor.execution_environments.is_empty() {
        let _ = writeln!(
            out,
            "  {} {}",
            bold.apply_to("Execution environments:"),
            descriptor.execution_environments.join(", ")
        );
    }
    let _ = writeln!(
        out,
        "  {} {}",
        bold.apply_to("Classpath:"),
        descriptor.classpath_or_default().join(", ")
    );

    if !descriptor.capabilities.is_empty() {
        let _ = writeln!(out, "  {}", bold.apply_to("Capabilities:"));
        for capability in &descriptor.capabilities {
            let _ = write!(out, "    {capability}");
            if !capability.uses.is_empty() {
                let uses: Vec<&str> = capability.uses.iter().map(String::as_str).collect();
                let _ = write!(
                    out,
                    " {}",
                    Style::new().dim().apply_to(format!("uses {}", uses.join(", ")))
                );
            }
            out.push('\n');
        }
    }

    if !descriptor.requirements.is_empty() {
        let _ = writeln!(out, "  {}", bold.apply_to("Requirements:"));
        for requirement in &descriptor.requirements {
            let _ = writeln!(out, "    {requirement}");
        }
    }

    if !diagnostics.is_empty() {
        let _ = writeln!(
            out,
            "  {}",
            Style::new().bold().red().apply_to("Header syntax errors:")
        );
        for diagnostic in diagnostics {
            let _ = writeln!(out, "    {diagnostic}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundle_manifest::parse_manifest;

    fn plain(text: String) -> String {
        console::strip_ansi_codes(&text).into_owned()
    }

    #[test]
    fn test_render_minimal() {
        let descriptor = parse_manifest("Bundle-SymbolicName: com.acme.core\n").unwrap();
        let text = plain(render_text(&descriptor, &[]));
        assert!(text.starts_with("com.acme.core 0.0.0\n"));
        assert!(text.contains("Classpath: ."));
        assert!(!text.contains("Capabilities:"));
        assert!(!text.contains("Requirements:"));
    }

    #[test]
    fn test_render_full() {
        let descriptor = parse_manifest(
            "Bundle-SymbolicName: com.acme.core\n\
             Bundle-Version: 1.2.0\n\
             Bundle-Description: Core services\n\
             Export-Package: com.acme.api;version=1.2;uses:=\"com.acme.spi\"\n\
             Import-Package: org.util;version=\"[1.0,2.0)\";resolution:=optional\n",
        )
        .unwrap();
        let text = plain(render_text(&descriptor, &[]));
        assert!(text.starts_with("com.acme.core 1.2.0\n"));
        assert!(text.contains("Description: Core services"));
        assert!(text.contains("package com.acme.api 1.2.0 uses com.acme.spi"));
        assert!(text.contains("package org.util [1.0.0,2.0.0) (optional)"));
    }

    #[test]
    fn test_render_diagnostics() {
        let attributes = bundle_manifest::ManifestAttributes::parse(
            "Bundle-SymbolicName: a\nImport-Package: p;;q\n",
        )
        .unwrap();
        let (descriptor, diagnostics) = BundleDescriptorBuilder::new(&attributes)
            .build_with_diagnostics()
            .unwrap();
        let text = plain(render_text(&descriptor, &diagnostics));
        assert!(text.contains("Header syntax errors:"));
        assert!(text.contains("Import-Package: Empty value (at offset 2)"));
    }
}
