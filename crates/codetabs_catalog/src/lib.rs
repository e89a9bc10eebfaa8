//! The built-in code example catalog.
//!
//! Examples are authored as TOML documents under `data/`, one per category,
//! and compiled into the binary. The catalog is built once per process and
//! never changes afterwards.
//!
//! - [`load`] - Builds a fresh store from the embedded documents
//! - [`builtin`] - The process-wide store
//! - [`service`] - A lookup service over [`builtin`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::sync::LazyLock;

use codetabs_foundation::Result;
use codetabs_lookup::LookupService;
use codetabs_store::{ExampleStore, authoring};
use tracing::debug;

/// Embedded authoring documents as `(name, contents)`.
pub const SOURCES: &[(&str, &str)] = &[
    ("actions.toml", include_str!("../data/actions.toml")),
    ("feedback.toml", include_str!("../data/feedback.toml")),
    ("layout.toml", include_str!("../data/layout.toml")),
    ("overlays.toml", include_str!("../data/overlays.toml")),
];

static BUILTIN: LazyLock<ExampleStore> = LazyLock::new(|| match load() {
    Ok(store) => store,
    Err(err) => {
        let context = err.context.clone().unwrap_or_default();
        panic!("built-in catalog is invalid: {err} {context}")
    }
});

/// Builds the catalog from the embedded documents.
///
/// # Errors
///
/// Returns the first authoring defect found, with the offending document as
/// context.
pub fn load() -> Result<ExampleStore> {
    let builder = SOURCES
        .iter()
        .try_fold(ExampleStore::builder(), |builder, (name, text)| {
            debug!(source = name, "loading catalog document");
            authoring::merge(builder, name, text)
        })?;
    Ok(builder.build())
}

/// Returns the process-wide catalog, building it on first use.
///
/// # Panics
///
/// Panics if the embedded documents are invalid. [`load`] reports the same
/// defect as an error.
#[must_use]
pub fn builtin() -> &'static ExampleStore {
    &BUILTIN
}

/// Returns a lookup service over [`builtin`].
#[must_use]
pub fn service() -> LookupService<'static> {
    LookupService::new(builtin())
}
