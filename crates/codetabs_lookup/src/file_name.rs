//! Resolution of example file names to lookup keys.
//!
//! Example files are named `<component>-<variant>.<ext>`, where the variant
//! is spelled exactly as its key (`pagination-middlePage.tsx`). Everything
//! from the first `.` is an extension. Component ids may themselves contain
//! dashes (`button-group`), so the longest catalog id followed by a dash wins.

use std::path::Path;

use codetabs_foundation::{ComponentId, Error, LookupKey, Result, VariantKey};
use codetabs_store::ExampleStore;

/// Resolves `file_name` (with or without directories and extensions) to a key.
///
/// The variant part is not checked against the component's table.
///
/// # Errors
///
/// Returns `ComponentNotFound`, with the file name as context, if no
/// component id prefixes the name.
pub fn resolve_file_name(store: &ExampleStore, file_name: &str) -> Result<LookupKey> {
    let name = Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_name);
    let stem = name.split_once('.').map_or(name, |(stem, _)| stem);

    store
        .components()
        .filter_map(|component| split(stem, component))
        .max_by_key(|(component, _)| component.as_str().len())
        .map(|(component, variant)| LookupKey::new(component.clone(), variant))
        .ok_or_else(|| Error::component_not_found(stem).with_source(file_name, None))
}

fn split<'c>(stem: &str, component: &'c ComponentId) -> Option<(&'c ComponentId, VariantKey)> {
    let rest = stem.strip_prefix(component.as_str())?.strip_prefix('-')?;
    VariantKey::try_new(rest).ok().map(|variant| (component, variant))
}
