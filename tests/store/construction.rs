//! Integration tests for store construction
//!
//! Tests all-or-nothing building, structural sharing, and catalog iteration.

use codetabs_foundation::{ComponentId, ErrorKind, Language, LookupKey};
use codetabs_store::{ExampleStore, TableBuilder, VariantRecord};

fn card_store() -> ExampleStore {
    ExampleStore::builder()
        .component("card", |t| {
            t.variant(
                "default",
                VariantRecord::new("<Card/>").with(Language::TypeScript, "<Card title={t}/>"),
            )?
            .variant("sizes", VariantRecord::new("<Card size=\"sm\"/>"))
        })
        .unwrap()
        .component("banner", |t| t.variant("critical", VariantRecord::new("<Banner/>")))
        .unwrap()
        .build()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn builder_produces_sorted_catalog() {
    let store = card_store();
    let components: Vec<_> = store.components().map(ComponentId::as_str).collect();
    assert_eq!(components, vec!["banner", "card"]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.record_count(), 3);
}

#[test]
fn empty_store() {
    let store = ExampleStore::builder().build();
    assert!(store.is_empty());
    assert_eq!(store.records().count(), 0);
}

#[test]
fn duplicate_component_is_rejected() {
    let err = ExampleStore::builder()
        .component("card", |t| t.variant("default", VariantRecord::new("a")))
        .unwrap()
        .component("card", |t| t.variant("other", VariantRecord::new("b")))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateComponent("card".to_string()));
}

#[test]
fn duplicate_variant_is_rejected() {
    let err = TableBuilder::new("card")
        .unwrap()
        .variant("default", VariantRecord::new("a"))
        .unwrap()
        .variant("default", VariantRecord::new("b"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateVariant { .. }));
}

#[test]
fn empty_keys_are_rejected() {
    assert_eq!(
        TableBuilder::new("").unwrap_err().kind,
        ErrorKind::EmptyKey("component")
    );
    let err = TableBuilder::new("card")
        .unwrap()
        .variant("", VariantRecord::new("a"))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyKey("variant"));
}

// =============================================================================
// Immutability
// =============================================================================

#[test]
fn clones_share_contents() {
    let store = card_store();
    let copy = store.clone();
    assert_eq!(store, copy);

    let record = store.component("card").unwrap().get("default").unwrap();
    assert_eq!(record.get(Language::TypeScript), Some("<Card title={t}/>"));
}

#[test]
fn records_iterate_in_key_order() {
    let store = card_store();
    let keys: Vec<String> = store.records().map(|(key, _)| key.to_string()).collect();
    assert_eq!(keys, vec!["banner/critical", "card/default", "card/sizes"]);
}

#[test]
fn missing_component_is_not_found() {
    let err = card_store().component("modal").unwrap_err();
    assert!(err.is_component_not_found());
}

#[test]
fn record_requires_primary_language() {
    let key = LookupKey::parse("card", "default").unwrap();
    let err = VariantRecord::try_from_snippets(&key, [(Language::TypeScript, "<Card/>")]).unwrap_err();
    assert!(err.is_incomplete_record());

    let record = VariantRecord::try_from_snippets(
        &key,
        [(Language::React, "<Card/>"), (Language::Vanilla, "<div class=\"card\"></div>")],
    )
    .unwrap();
    assert_eq!(record.languages(), vec![Language::React, Language::Vanilla]);
}
