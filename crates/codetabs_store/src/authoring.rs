//! Loader for the authoring format.
//!
//! Examples are authored as nested literal data,
//! `{ component: { variant: { language: code } } }`, written as TOML tables
//! so snippets can use multi-line literal strings:
//!
//! ```toml
//! [card.default]
//! react = '''
//! <Card>Hello</Card>
//! '''
//! typescript = '''
//! <Card title={title}>Hello</Card>
//! '''
//! ```
//!
//! Every component in a document is staged in full before it joins the
//! builder. A record without the primary language, an unknown language id or
//! a component already supplied by another document fails the whole load.

use std::collections::BTreeMap;

use codetabs_foundation::{Error, ErrorKind, Language, LookupKey, Result, VariantKey};

use crate::record::VariantRecord;
use crate::store::{ExampleStore, ExampleStoreBuilder};
use crate::table::{TableBuilder, VariantTable};

type Authored = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

/// Parses one authoring document into a store.
///
/// `source` names the document in error context.
///
/// # Errors
///
/// Returns `ParseError` for malformed documents and the store's construction
/// errors (`IncompleteVariantRecord`, `UnknownLanguage`, `EmptyKey`,
/// `DuplicateComponent`) for invalid content.
pub fn from_toml_str(source: &str, text: &str) -> Result<ExampleStore> {
    Ok(merge(ExampleStore::builder(), source, text)?.build())
}

/// Parses one authoring document and stages its components on `builder`.
///
/// # Errors
///
/// See [`from_toml_str`].
pub fn merge(builder: ExampleStoreBuilder, source: &str, text: &str) -> Result<ExampleStoreBuilder> {
    let authored: Authored = toml::from_str(text).map_err(|e| {
        let line = e
            .span()
            .and_then(|span| text.get(..span.start))
            .map(|prefix| prefix.matches('\n').count() + 1);
        Error::new(ErrorKind::ParseError(e.message().to_string())).with_source(source, line)
    })?;

    authored
        .into_iter()
        .try_fold(builder, |builder, (component, variants)| {
            let table = stage(&component, variants).map_err(|e| e.with_source(source, None))?;
            builder
                .table(table)
                .map_err(|e| e.with_source(source, None))
        })
}

fn stage(component: &str, variants: BTreeMap<String, BTreeMap<String, String>>) -> Result<VariantTable> {
    let mut table = TableBuilder::new(component)?;
    for (variant, snippets) in variants {
        let key = LookupKey::new(table.component().clone(), VariantKey::try_new(&variant)?);
        let record = parse_record(&key, snippets).map_err(|e| e.with_frame(format!("in {key}")))?;
        table = table.insert(key.variant, record)?;
    }
    Ok(table.finish())
}

fn parse_record(key: &LookupKey, snippets: BTreeMap<String, String>) -> Result<VariantRecord> {
    let snippets = snippets
        .into_iter()
        .map(|(id, code)| Ok((id.parse::<Language>()?, code)))
        .collect::<Result<Vec<_>>>()?;
    VariantRecord::try_from_snippets(key, snippets)
}
