//! Integration tests for example file name resolution

use codetabs_lookup::{LookupService, resolve_file_name};
use codetabs_store::{ExampleStore, VariantRecord};

fn store() -> ExampleStore {
    ExampleStore::builder()
        .component("button", |t| {
            t.variant("default", VariantRecord::new("<Button/>"))?
                .variant("primary", VariantRecord::new("<Button variant=\"primary\"/>"))
        })
        .unwrap()
        .component("button-group", |t| {
            t.variant("default", VariantRecord::new("<ButtonGroup/>"))
        })
        .unwrap()
        .build()
}

#[test]
fn file_name_resolves_to_record() {
    let store = store();
    let service = LookupService::new(&store);

    let (key, record) = service.lookup_file_name("src/examples/button-primary.tsx").unwrap();
    assert_eq!(key.to_string(), "button/primary");
    assert_eq!(record.primary(), "<Button variant=\"primary\"/>");
}

#[test]
fn dashed_component_ids_resolve() {
    let key = resolve_file_name(&store(), "button-group-default.tsx").unwrap();
    assert_eq!(key.to_string(), "button-group/default");
}

#[test]
fn unknown_variant_in_file_name() {
    let store = store();
    let err = LookupService::new(&store)
        .lookup_file_name("button-secondary.tsx")
        .unwrap_err();
    assert!(err.is_variant_not_found());
}

#[test]
fn variant_keys_are_spelled_verbatim() {
    let store = ExampleStore::builder()
        .component("pagination", |t| {
            t.variant("middlePage", VariantRecord::new("<Pagination/>"))
        })
        .unwrap()
        .build();
    let service = LookupService::new(&store);

    let (key, _) = service.lookup_file_name("pagination-middlePage.tsx").unwrap();
    assert_eq!(key.to_string(), "pagination/middlePage");

    let (key, _) = service
        .lookup_file_name("pagination-middlePage.stories.tsx")
        .unwrap();
    assert_eq!(key.to_string(), "pagination/middlePage");

    let err = service.lookup_file_name("pagination-middle-page.tsx").unwrap_err();
    assert!(err.is_variant_not_found());
}
