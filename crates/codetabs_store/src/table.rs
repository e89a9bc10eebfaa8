//! Variant tables: every variant authored for one component.

use codetabs_foundation::{ComponentId, Error, ErrorKind, Result, VariantKey};

use crate::record::VariantRecord;

/// Mapping from variant key to record for a single component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantTable {
    component: ComponentId,
    variants: im::OrdMap<VariantKey, VariantRecord>,
}

impl VariantTable {
    /// Returns the component this table belongs to.
    #[must_use]
    pub fn component(&self) -> &ComponentId {
        &self.component
    }

    /// Returns the record for `variant`. Matching is exact.
    #[must_use]
    pub fn get(&self, variant: &str) -> Option<&VariantRecord> {
        self.variants.get(variant)
    }

    /// Returns true if `variant` is authored.
    #[must_use]
    pub fn contains(&self, variant: &str) -> bool {
        self.variants.contains_key(variant)
    }

    /// Returns the number of variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns true if the component has no variants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterates variant keys in order.
    pub fn variants(&self) -> impl Iterator<Item = &VariantKey> {
        self.variants.keys()
    }

    /// Iterates `(variant, record)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&VariantKey, &VariantRecord)> {
        self.variants.iter()
    }
}

/// Stages the variants of one component before it joins a store.
#[derive(Debug)]
pub struct TableBuilder {
    table: VariantTable,
}

impl TableBuilder {
    /// Starts a table for `component`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyKey` if `component` is empty.
    pub fn new(component: &str) -> Result<Self> {
        Ok(Self::for_component(ComponentId::try_new(component)?))
    }

    /// Starts a table for an already validated component id.
    #[must_use]
    pub fn for_component(component: ComponentId) -> Self {
        Self {
            table: VariantTable {
                component,
                variants: im::OrdMap::new(),
            },
        }
    }

    /// Returns the component being staged.
    #[must_use]
    pub fn component(&self) -> &ComponentId {
        &self.table.component
    }

    /// Adds a variant.
    ///
    /// # Errors
    ///
    /// Returns `EmptyKey` for an empty key and `DuplicateVariant` if the key
    /// was already added.
    pub fn variant(self, variant: &str, record: VariantRecord) -> Result<Self> {
        self.insert(VariantKey::try_new(variant)?, record)
    }

    /// Adds a variant under an already validated key.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateVariant` if the key was already added.
    pub fn insert(mut self, variant: VariantKey, record: VariantRecord) -> Result<Self> {
        if self.table.variants.contains_key(&variant) {
            return Err(Error::new(ErrorKind::DuplicateVariant {
                component: self.table.component.to_string(),
                variant: variant.to_string(),
            }));
        }
        self.table.variants.insert(variant, record);
        Ok(self)
    }

    /// Finishes the table.
    #[must_use]
    pub fn finish(self) -> VariantTable {
        self.table
    }
}
