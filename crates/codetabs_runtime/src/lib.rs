//! Configuration, reports, and the `codetabs` command-line tool.
//!
//! This crate provides:
//! - [`CheckConfig`] - TOML configuration for completeness checks
//! - [`check`] - Validates a store against a configuration
//! - [`audit_dir`] - Scans a story directory and resolves its references
//! - Text and JSON rendering of records and reports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod files;
pub mod report;

use std::path::Path;

pub use config::{CheckConfig, ComponentConfig};
pub use files::{STORY_SUFFIXES, read_to_string, story_files, to_json};

use codetabs_foundation::Result;
use codetabs_lookup::LookupService;
use codetabs_validate::{
    AuditReport, CompletenessSummary, CompletenessValidator, CoverageReport, FileCoverage,
    MissingLanguage, audit_references,
};
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of [`check`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Aggregate counts.
    pub summary: CompletenessSummary,
    /// Every missing required language.
    pub findings: Vec<MissingLanguage>,
    /// Story audit, when the configuration names a story directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditOutcome>,
    /// Whether the check failed under the configuration.
    pub failed: bool,
}

/// Outcome of [`audit_dir`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuditOutcome {
    /// Per-file story coverage.
    pub coverage: CoverageReport,
    /// Resolution of every reference found.
    pub audit: AuditReport,
}

impl AuditOutcome {
    /// Returns true if any reference failed to resolve.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.audit.is_clean()
    }
}

/// Validates the service's store against `config`, auditing the configured
/// story directory if there is one.
///
/// The check fails on broken story references, and on missing languages when
/// `fail_on_missing` is set.
///
/// # Errors
///
/// Returns `ConfigError` for an invalid configuration and `IoError` if the
/// story directory cannot be read.
pub fn check(service: &LookupService<'_>, config: &CheckConfig) -> Result<CheckOutcome> {
    let validator = CompletenessValidator::new(config.policy()?);
    let (summary, findings) = validator.summarize(service.store());

    let audit = config
        .stories
        .as_deref()
        .map(|dir| audit_dir(service, dir))
        .transpose()?;

    let failed = (config.fail_on_missing && !findings.is_empty())
        || audit.as_ref().is_some_and(AuditOutcome::failed);
    info!(findings = findings.len(), failed, "completeness check finished");

    Ok(CheckOutcome {
        summary,
        findings,
        audit,
        failed,
    })
}

/// Scans every story file under `dir` and resolves the references found.
///
/// # Errors
///
/// Returns `IoError` if the directory or a story file cannot be read.
pub fn audit_dir(service: &LookupService<'_>, dir: &Path) -> Result<AuditOutcome> {
    let coverage = story_files(dir)?
        .iter()
        .map(|path| {
            let text = read_to_string(path)?;
            let name = path.strip_prefix(dir).unwrap_or(path).display().to_string();
            debug!(file = %name, "scanning story file");
            Ok(FileCoverage::analyze(&name, &text))
        })
        .collect::<Result<CoverageReport>>()?;

    let audit = audit_references(service, coverage.references());
    Ok(AuditOutcome { coverage, audit })
}
