//! The example store: an immutable catalog of variant tables.
//!
//! Stores are assembled once through [`ExampleStoreBuilder`] and never change
//! afterwards. Cloning is O(1) and clones share all structure, so a store can
//! be handed to any number of readers without synchronization.

use codetabs_foundation::{ComponentId, Error, ErrorKind, LookupKey, Result};
use tracing::{debug, info};

use crate::record::VariantRecord;
use crate::table::{TableBuilder, VariantTable};

/// Read-only component → variant → language catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExampleStore {
    components: im::OrdMap<ComponentId, VariantTable>,
}

impl ExampleStore {
    /// Starts building a store.
    #[must_use]
    pub fn builder() -> ExampleStoreBuilder {
        ExampleStoreBuilder::new()
    }

    /// Returns the full variant table for `component`.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` if the component is not in the catalog.
    pub fn component(&self, component: &str) -> Result<&VariantTable> {
        self.components
            .get(component)
            .ok_or_else(|| Error::component_not_found(component))
    }

    /// Returns true if `component` is in the catalog.
    #[must_use]
    pub fn contains_component(&self, component: &str) -> bool {
        self.components.contains_key(component)
    }

    /// Iterates component identifiers in order.
    pub fn components(&self) -> impl Iterator<Item = &ComponentId> {
        self.components.keys()
    }

    /// Iterates variant tables in component order.
    pub fn tables(&self) -> impl Iterator<Item = &VariantTable> {
        self.components.values()
    }

    /// Iterates every record together with its lookup key.
    pub fn records(&self) -> impl Iterator<Item = (LookupKey, &VariantRecord)> {
        self.components.iter().flat_map(|(component, table)| {
            table.iter().map(move |(variant, record)| {
                (LookupKey::new(component.clone(), variant.clone()), record)
            })
        })
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the catalog has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the total number of variant records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.components.values().map(VariantTable::len).sum()
    }
}

/// Assembles an [`ExampleStore`].
///
/// Each component is staged in full and inserted in one step; a failing
/// component never leaves a partial table behind.
#[derive(Debug, Default)]
pub struct ExampleStoreBuilder {
    components: im::OrdMap<ComponentId, VariantTable>,
}

impl ExampleStoreBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `component` with the variants added by `build`.
    ///
    /// ```
    /// use codetabs_foundation::Language;
    /// use codetabs_store::{ExampleStore, VariantRecord};
    ///
    /// let store = ExampleStore::builder()
    ///     .component("card", |t| {
    ///         t.variant("default", VariantRecord::new("<A/>").with(Language::TypeScript, "<A/>"))?
    ///             .variant("sizes", VariantRecord::new("<B/>"))
    ///     })?
    ///     .build();
    /// assert_eq!(store.record_count(), 2);
    /// # Ok::<(), codetabs_foundation::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `build`, `EmptyKey` for an empty
    /// component id, or `DuplicateComponent` if the id was already staged.
    pub fn component<F>(self, component: &str, build: F) -> Result<Self>
    where
        F: FnOnce(TableBuilder) -> Result<TableBuilder>,
    {
        let staged = build(TableBuilder::new(component)?)?;
        self.table(staged.finish())
    }

    /// Inserts a finished table.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateComponent` if the table's component was already staged.
    pub fn table(mut self, table: VariantTable) -> Result<Self> {
        let component = table.component().clone();
        if self.components.contains_key(&component) {
            return Err(Error::new(ErrorKind::DuplicateComponent(
                component.to_string(),
            )));
        }
        debug!(component = %component, variants = table.len(), "staged component");
        self.components.insert(component, table);
        Ok(self)
    }

    /// Returns true if `component` has been staged.
    #[must_use]
    pub fn contains_component(&self, component: &str) -> bool {
        self.components.contains_key(component)
    }

    /// Freezes the staged components into a store.
    #[must_use]
    pub fn build(self) -> ExampleStore {
        let store = ExampleStore {
            components: self.components,
        };
        info!(
            components = store.len(),
            records = store.record_count(),
            "example store built"
        );
        store
    }
}
