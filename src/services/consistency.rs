use crate::domain::constants::{PACKAGE_NAME, VERSION};
use crate::domain::models::{CheckReport, CodedError, Registry};
use crate::services::registry::version_of;

/// Exact byte equality; empty strings compare like any other value.
pub fn build_check_report(package: &str, declared: &str, recorded: &str) -> CheckReport {
    let overall = if declared == recorded { "ok" } else { "mismatch" };
    CheckReport {
        overall: overall.to_string(),
        package: package.to_string(),
        declared: declared.to_string(),
        recorded: recorded.to_string(),
    }
}

pub fn check_package(
    registry: &Registry,
    package: &str,
    declared: &str,
) -> anyhow::Result<CheckReport> {
    let recorded = version_of(registry, package)?;
    let report = build_check_report(package, declared, &recorded);
    if report.overall != "ok" {
        anyhow::bail!(CodedError::new(
            "VERSION_MISMATCH",
            format!(
                "version mismatch for {}: declared {:?}, registry records {:?}",
                package, declared, recorded
            ),
        ));
    }
    Ok(report)
}

/// The self-consistency check: this build's declared version against the
/// registry record for this package's own name.
pub fn check_self(registry: &Registry) -> anyhow::Result<CheckReport> {
    check_package(registry, PACKAGE_NAME, VERSION)
}
