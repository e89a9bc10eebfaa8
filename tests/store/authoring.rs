//! Integration tests for the TOML authoring loader
//!
//! Tests multi-document loading and error context.

use codetabs_foundation::{ErrorKind, Language};
use codetabs_store::ExampleStore;
use codetabs_store::authoring::{from_toml_str, merge};

const ACTIONS: &str = r"
[button.default]
react = '''
<Button>Click me</Button>
'''
extjs = '''
Ext.create('Ext.button.Button', { text: 'Click me' });
'''
";

const LAYOUT: &str = r"
[card.default]
react = '<Card/>'
typescript = '<Card title={title}/>'
";

#[test]
fn documents_merge_into_one_store() {
    let builder = merge(ExampleStore::builder(), "actions.toml", ACTIONS).unwrap();
    let store = merge(builder, "layout.toml", LAYOUT).unwrap().build();

    assert_eq!(store.len(), 2);
    let button = store.component("button").unwrap().get("default").unwrap();
    assert_eq!(button.primary(), "<Button>Click me</Button>\n");
    assert!(button.contains(Language::ExtJs));
    assert!(!button.contains(Language::TypeScript));
}

#[test]
fn component_split_across_documents_is_rejected() {
    let builder = merge(ExampleStore::builder(), "actions.toml", ACTIONS).unwrap();
    let err = merge(builder, "more.toml", "[button.primary]\nreact = 'x'\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateComponent("button".to_string()));
    assert_eq!(err.context.unwrap().source.as_deref(), Some("more.toml"));
}

#[test]
fn missing_primary_names_the_record() {
    let err = from_toml_str("layout.toml", "[card.default]\ntypescript = 'x'\n").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::IncompleteVariantRecord {
            component: "card".to_string(),
            variant: "default".to_string(),
        }
    );
}

#[test]
fn unknown_language_fails_load() {
    let err = from_toml_str("layout.toml", "[card.default]\nreact = 'x'\nvue = 'y'\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownLanguage("vue".to_string()));
}
