//! Integration tests for completeness validation

use codetabs_foundation::Language;
use codetabs_store::authoring::from_toml_str;
use codetabs_validate::{CompletenessValidator, RequiredLanguages};
use pretty_assertions::assert_eq;

const DOCUMENT: &str = r"
[card.default]
react = '<Card/>'
typescript = '<Card title={t}/>'
vanilla = '<div class=card></div>'
extjs = 'Ext.create(...)'

[card.sizes]
react = '<Card size=sm/>'
typescript = '<Card size={size}/>'

[banner.critical]
react = '<Banner tone=critical/>'
vanilla = '<div class=banner></div>'
";

#[test]
fn complete_under_primary_policy() {
    let store = from_toml_str("test.toml", DOCUMENT).unwrap();
    assert!(CompletenessValidator::default().is_complete(&store));
}

#[test]
fn reports_every_gap_in_order() {
    let store = from_toml_str("test.toml", DOCUMENT).unwrap();
    let findings: Vec<String> = CompletenessValidator::new(RequiredLanguages::all())
        .validate(&store)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        findings,
        vec![
            "banner/critical: missing typescript",
            "banner/critical: missing extjs",
            "card/sizes: missing vanilla",
            "card/sizes: missing extjs",
        ]
    );
}

#[test]
fn per_component_policy() {
    let store = from_toml_str("test.toml", DOCUMENT).unwrap();
    let policy = RequiredLanguages::primary_only()
        .with_base([Language::TypeScript])
        .with_component("banner", [Language::Vanilla])
        .unwrap();

    let validator = CompletenessValidator::new(policy);
    assert!(validator.validate(&store).is_empty());

    let (summary, _) = validator.summarize(&store);
    assert_eq!(summary.components, 2);
    assert_eq!(summary.records, 3);
    assert_eq!(summary.authored[&Language::React], 3);
    assert_eq!(summary.authored[&Language::ExtJs], 1);
}
