//! Human-readable rendering of records and reports.

use std::fmt::Write;

use codetabs_foundation::{ComponentId, LookupKey, VariantKey};
use codetabs_store::VariantRecord;
use serde::Serialize;

use crate::{AuditOutcome, CheckOutcome};

/// A record together with the key it was found under.
#[derive(Clone, Debug, Serialize)]
pub struct RecordView<'a> {
    /// The key that resolved.
    pub key: &'a LookupKey,
    /// Snippets by language id.
    pub snippets: &'a VariantRecord,
}

/// Renders one record as a section per language tab.
#[must_use]
pub fn format_record(key: &LookupKey, record: &VariantRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {key} ===");
    for (language, code) in record.iter() {
        let _ = writeln!(out);
        let _ = writeln!(out, "--- {} ---", language.label());
        let _ = writeln!(out, "{}", code.trim_end());
    }
    out
}

/// Renders a list of component ids, one per line.
#[must_use]
pub fn format_components<'a>(components: impl IntoIterator<Item = &'a ComponentId>) -> String {
    components
        .into_iter()
        .fold(String::new(), |mut out, component| {
            let _ = writeln!(out, "{component}");
            out
        })
}

/// Renders the variants of `component`, one per line.
#[must_use]
pub fn format_variants<'a>(
    component: &str,
    variants: impl IntoIterator<Item = &'a VariantKey>,
) -> String {
    variants
        .into_iter()
        .fold(String::new(), |mut out, variant| {
            let _ = writeln!(out, "{component}/{variant}");
            out
        })
}

/// Renders the outcome of a completeness check.
#[must_use]
pub fn format_check(outcome: &CheckOutcome) -> String {
    let mut out = String::new();
    let summary = &outcome.summary;
    let _ = writeln!(
        out,
        "{} components, {} records",
        summary.components, summary.records
    );
    for (language, count) in &summary.authored {
        let _ = writeln!(out, "  {:<11} {count}/{}", language.label(), summary.records);
    }

    if outcome.findings.is_empty() {
        let _ = writeln!(out, "\nAll records carry their required languages.");
    } else {
        let _ = writeln!(out, "\n{} missing:", outcome.findings.len());
        for finding in &outcome.findings {
            let _ = writeln!(out, "  {finding}");
        }
    }

    if let Some(audit) = &outcome.audit {
        let _ = writeln!(out);
        out.push_str(&format_audit(audit));
    }
    out
}

/// Renders story coverage and broken references.
#[must_use]
pub fn format_audit(outcome: &AuditOutcome) -> String {
    let mut out = String::new();
    let coverage = &outcome.coverage;
    let _ = writeln!(
        out,
        "{} story files, {}/{} stories with code variants",
        coverage.files.len(),
        coverage.covered_stories(),
        coverage.total_stories()
    );

    for file in coverage.incomplete_files() {
        let _ = writeln!(out, "  {}: {}", file.file, file.uncovered().join(", "));
    }

    let audit = &outcome.audit;
    let _ = writeln!(
        out,
        "\n{} references, {} broken",
        audit.total(),
        audit.broken.len()
    );
    for broken in &audit.broken {
        let location = broken
            .reference
            .file
            .as_deref()
            .map_or_else(String::new, |file| format!("{file}:{}: ", broken.reference.line));
        let _ = writeln!(out, "  {location}{}", broken.error);
    }
    out
}
