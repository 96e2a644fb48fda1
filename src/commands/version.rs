//! Version command implementation

use bundle_manifest::error::Result;

/// Name and version line, then the build details
fn version_report() -> String {
    let mut report = format!("bundle-manifest {}\n", env!("CARGO_PKG_VERSION"));
    report.push_str("\nBuild info:\n");
    for (label, value) in build_details() {
        report.push_str(&format!("  {label}: {value}\n"));
    }
    report
}

fn build_details() -> [(&'static str, String); 3] {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    [
        (
            "Minimum Rust version",
            env!("CARGO_PKG_RUST_VERSION").to_string(),
        ),
        (
            "Target",
            format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
        ),
        ("Profile", profile.to_string()),
    ]
}

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_report());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_runs() {
        assert!(run().is_ok());
    }

    #[test]
    fn test_report_labels_msrv_as_minimum() {
        let report = version_report();
        assert!(report.starts_with(&format!("bundle-manifest {}\n", env!("CARGO_PKG_VERSION"))));
        assert!(report.contains("  Minimum Rust version: 1.85\n"));
        assert!(!report.contains("  Rust version:"));
        assert!(report.contains(std::env::consts::OS));
    }
}
