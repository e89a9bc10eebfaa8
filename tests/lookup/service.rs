//! Integration tests for the lookup service
//!
//! Tests exact matching, error distinctions, and determinism.

use codetabs_foundation::{ErrorKind, Language, LookupKey, VariantKey};
use codetabs_lookup::LookupService;
use codetabs_store::{ExampleStore, VariantRecord};
use proptest::prelude::*;

fn pagination_store() -> ExampleStore {
    ExampleStore::builder()
        .component("pagination", |t| {
            t.variant(
                "default",
                VariantRecord::new("<Pagination hasNext/>")
                    .with(Language::TypeScript, "<Pagination hasNext={hasNext}/>")
                    .with(Language::Vanilla, "createPagination({ hasNext: true });"),
            )?
            .variant("middlePage", VariantRecord::new("<Pagination label=\"Page 5\"/>"))
        })
        .unwrap()
        .build()
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn lookup_returns_record_with_all_languages() {
    let store = pagination_store();
    let service = LookupService::new(&store);

    let record = service.get_code_variants("pagination", "default").unwrap();
    let tabs: Vec<_> = record.iter().map(|(language, _)| language.label()).collect();
    assert_eq!(tabs, vec!["React", "TypeScript", "Vanilla JS"]);
}

#[test]
fn lookup_key_matches_lookup() {
    let store = pagination_store();
    let service = LookupService::new(&store);
    let key = LookupKey::parse("pagination", "middlePage").unwrap();

    assert_eq!(
        service.lookup_key(&key).unwrap(),
        service.lookup("pagination", "middlePage").unwrap()
    );
}

#[test]
fn returned_records_share_store_storage() {
    let store = pagination_store();
    let service = LookupService::new(&store);

    let first = service.lookup("pagination", "default").unwrap();
    let second = service.lookup("pagination", "default").unwrap();
    assert!(std::ptr::eq(first, second));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unknown_component() {
    let store = pagination_store();
    let err = LookupService::new(&store)
        .lookup("nonexistent-component", "default")
        .unwrap_err();
    assert!(err.is_component_not_found());
    assert!(format!("{err}").contains("nonexistent-component"));
}

#[test]
fn unknown_variant_is_not_defaulted() {
    let store = pagination_store();
    let err = LookupService::new(&store)
        .lookup("pagination", "lastPage")
        .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::VariantNotFound {
            component: "pagination".to_string(),
            variant: "lastPage".to_string(),
        }
    );
}

#[test]
fn case_matters() {
    let store = pagination_store();
    let service = LookupService::new(&store);
    assert!(service.lookup("Pagination", "default").is_err());
    assert!(service.lookup("pagination", "middlepage").is_err());
}

#[test]
fn fallback_is_opt_in() {
    let store = pagination_store();
    let service = LookupService::new(&store);

    let record = service.lookup_with_default("pagination", "lastPage").unwrap();
    assert_eq!(record.primary(), "<Pagination hasNext/>");
    assert!(service.lookup("pagination", "lastPage").is_err());
}

#[test]
fn catalog_queries() {
    let store = pagination_store();
    let service = LookupService::new(&store);

    let variants: Vec<_> = service
        .variants("pagination")
        .unwrap()
        .map(VariantKey::as_str)
        .collect();
    assert_eq!(variants, vec!["default", "middlePage"]);
    assert_eq!(service.components().count(), 1);
}

proptest! {
    #[test]
    fn lookups_are_deterministic(component in "[a-z]{0,12}", variant in "[a-zA-Z]{0,12}") {
        let store = pagination_store();
        let service = LookupService::new(&store);

        let first = service.lookup(&component, &variant).cloned();
        let second = service.lookup(&component, &variant).cloned();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.is_ok(), service.contains(&component, &variant));
    }
}
