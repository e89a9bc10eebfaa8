//! The lookup service.

use codetabs_foundation::{ComponentId, Error, LookupKey, Result, VariantKey};
use codetabs_store::{ExampleStore, VariantRecord};
use tracing::{debug, warn};

use crate::file_name::resolve_file_name;

/// Resolves lookup keys against an injected, immutable [`ExampleStore`].
///
/// The service borrows its store, so every returned record is a shared
/// reference that callers cannot mutate. Lookups are pure: the same key
/// always yields the same record for as long as the store lives.
#[derive(Clone, Copy, Debug)]
pub struct LookupService<'s> {
    store: &'s ExampleStore,
}

impl<'s> LookupService<'s> {
    /// Creates a service over `store`.
    #[must_use]
    pub fn new(store: &'s ExampleStore) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &'s ExampleStore {
        self.store
    }

    /// Resolves `(component, variant)` to its record.
    ///
    /// Matching is exact and case-sensitive. There is no fallback to the
    /// `default` variant; use [`lookup_with_default`](Self::lookup_with_default)
    /// for that.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` if the component is unknown and
    /// `VariantNotFound` if the component has no such variant.
    pub fn lookup(&self, component: &str, variant: &str) -> Result<&'s VariantRecord> {
        self.find(component, variant).inspect_err(report)
    }

    /// Consumer-facing name for [`lookup`](Self::lookup), as called from story
    /// definitions.
    ///
    /// # Errors
    ///
    /// Same as [`lookup`](Self::lookup).
    pub fn get_code_variants(&self, component: &str, variant: &str) -> Result<&'s VariantRecord> {
        self.lookup(component, variant)
    }

    /// Resolves a [`LookupKey`].
    ///
    /// # Errors
    ///
    /// Same as [`lookup`](Self::lookup).
    pub fn lookup_key(&self, key: &LookupKey) -> Result<&'s VariantRecord> {
        self.lookup(key.component.as_str(), key.variant.as_str())
    }

    /// Resolves `(component, variant)`, retrying once with the `default`
    /// variant when the requested variant is missing.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` if the component is unknown. Returns
    /// `VariantNotFound` for the requested variant if neither it nor
    /// `default` exists; the error context records the failed fallback.
    pub fn lookup_with_default(&self, component: &str, variant: &str) -> Result<&'s VariantRecord> {
        let result = match self.find(component, variant) {
            Err(err) if err.is_variant_not_found() && variant != VariantKey::DEFAULT => {
                debug!(component, variant, "falling back to default variant");
                self.find(component, VariantKey::DEFAULT).map_err(|_| {
                    err.with_frame(format!(
                        "fallback to `{}` variant also missing",
                        VariantKey::DEFAULT
                    ))
                })
            }
            other => other,
        };
        result.inspect_err(report)
    }

    /// Resolves an example file name such as `button-group-default.tsx` and
    /// looks up the record it names.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` if no component prefixes the name and
    /// `VariantNotFound` if the remainder is not a variant of that component.
    pub fn lookup_file_name(&self, file_name: &str) -> Result<(LookupKey, &'s VariantRecord)> {
        let key = resolve_file_name(self.store, file_name).inspect_err(report)?;
        let record = self.lookup_key(&key)?;
        Ok((key, record))
    }

    /// Returns true if `(component, variant)` resolves.
    #[must_use]
    pub fn contains(&self, component: &str, variant: &str) -> bool {
        self.find(component, variant).is_ok()
    }

    /// Iterates the component catalog.
    pub fn components(&self) -> impl Iterator<Item = &'s ComponentId> + use<'s> {
        self.store.components()
    }

    /// Iterates the variants of `component`.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` if the component is unknown.
    pub fn variants(&self, component: &str) -> Result<impl Iterator<Item = &'s VariantKey> + use<'s>> {
        Ok(self.store.component(component)?.variants())
    }

    fn find(&self, component: &str, variant: &str) -> Result<&'s VariantRecord> {
        self.store
            .component(component)?
            .get(variant)
            .ok_or_else(|| Error::variant_not_found(component, variant))
    }
}

fn report(err: &Error) {
    warn!(error = %err, "code example lookup failed");
}
