//! Integration tests for the built-in catalog
//!
//! Every story fixture must resolve against the catalog, and every catalog
//! record must be usable as a tab set.

use std::fs;
use std::path::PathBuf;

use codetabs_foundation::Language;
use codetabs_validate::{CompletenessValidator, CoverageReport, FileCoverage, audit_references};
use pretty_assertions::assert_eq;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/stories")
}

fn fixture_coverage() -> CoverageReport {
    codetabs_runtime::story_files(&fixtures())
        .unwrap()
        .iter()
        .map(|path| {
            let name = path.strip_prefix(fixtures()).unwrap().display().to_string();
            FileCoverage::analyze(&name, &fs::read_to_string(path).unwrap())
        })
        .collect()
}

#[test]
fn every_story_reference_resolves() {
    let coverage = fixture_coverage();
    let report = audit_references(&codetabs_catalog::service(), coverage.references());

    assert!(report.is_clean(), "broken references: {:?}", report.broken);
    assert_eq!(report.resolved, 6);
}

#[test]
fn fixture_coverage_counts() {
    let coverage = fixture_coverage();
    assert_eq!(coverage.files.len(), 3);
    assert_eq!(coverage.total_stories(), 7);
    assert_eq!(coverage.covered_stories(), 6);

    let incomplete: Vec<_> = coverage
        .incomplete_files()
        .iter()
        .map(|file| file.uncovered().join(","))
        .collect();
    assert_eq!(incomplete, vec!["Playground"]);
}

#[test]
fn meta_level_variants_cover_plain_stories() {
    let coverage = fixture_coverage();
    let button = coverage
        .files
        .iter()
        .find(|file| file.file.ends_with("Button.stories.tsx"))
        .unwrap();
    assert!(button.meta_level);
    assert_eq!(button.covered(), 2);
}

#[test]
fn every_record_renders_primary_tab_first() {
    for (key, record) in codetabs_catalog::builtin().records() {
        let first = record.iter().next().map(|(language, _)| language);
        assert_eq!(first, Some(Language::PRIMARY), "{key}");
        assert!(!record.primary().trim().is_empty(), "{key}");
    }
}

#[test]
fn builtin_catalog_has_no_missing_primary() {
    assert!(CompletenessValidator::default().is_complete(codetabs_catalog::builtin()));
}

#[test]
fn check_reports_partial_records() {
    let config = codetabs_runtime::CheckConfig::default()
        .with_required(Language::ALL)
        .with_fail_on_missing(false);
    let outcome = codetabs_runtime::check(&codetabs_catalog::service(), &config).unwrap();

    assert!(!outcome.failed);
    assert!(!outcome.findings.is_empty());
    assert_eq!(outcome.summary.records, codetabs_catalog::builtin().record_count());
}
