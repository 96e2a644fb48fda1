//! Check command implementation

use bundle_manifest::error::Result;
use bundle_manifest::manifest::headers::is_arbitrary;
use bundle_manifest::{
    HeaderDiagnostic, HeaderValue, ManifestAttributes, ManifestError, render_syntax_error,
};
use console::Style;

use super::helpers::load_attributes;
use crate::cli::CheckArgs;

pub fn run(args: CheckArgs) -> Result<()> {
    let attributes = load_attributes(&args.path)?;
    let diagnostics = collect(&attributes, args.header.as_deref());

    if diagnostics.is_empty() {
        println!("{}", Style::new().green().apply_to("No header syntax errors"));
        return Ok(());
    }

    print!("{}", render_report(&diagnostics));
    if args.strict {
        return Err(ManifestError::InvalidHeaders {
            count: diagnostics.len(),
        });
    }
    Ok(())
}

/// Diagnostics of every structured header, or only of `only` when given
fn collect(attributes: &ManifestAttributes, only: Option<&str>) -> Vec<HeaderDiagnostic> {
    match only {
        None => bundle_manifest::bundle::builder::check_headers(attributes),
        Some(name) => match attributes.get(name) {
            Some(text) if !is_arbitrary(name) => HeaderValue::parse(text)
                .into_diagnostics()
                .into_iter()
                .map(|error| HeaderDiagnostic {
                    header: name.to_string(),
                    error,
                })
                .collect(),
            _ => Vec::new(),
        },
    }
}

fn render_report(diagnostics: &[HeaderDiagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        out.push_str(&format!(
            "{} {}",
            Style::new().bold().red().apply_to(format!("{}:", diagnostic.header)),
            render_syntax_error(&diagnostic.error)
        ));
    }
    out.push_str(&format!(
        "{}\n",
        Style::new()
            .bold()
            .apply_to(format!("{} header syntax error(s)", diagnostics.len()))
    ));
    out
}
