//! Required-language policy.
//!
//! Some components are documented in every language while others only carry
//! a subset, so the required set is a base set plus per-component overrides.
//! An override replaces the base set for that component. The primary
//! language is always required.

use std::collections::{BTreeMap, BTreeSet};

use codetabs_foundation::{ComponentId, Language, Result};

/// The languages a record must carry, optionally per component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequiredLanguages {
    base: BTreeSet<Language>,
    overrides: BTreeMap<ComponentId, BTreeSet<Language>>,
}

impl RequiredLanguages {
    /// Requires only the primary language.
    #[must_use]
    pub fn primary_only() -> Self {
        Self {
            base: BTreeSet::from([Language::PRIMARY]),
            overrides: BTreeMap::new(),
        }
    }

    /// Requires every language everywhere.
    #[must_use]
    pub fn all() -> Self {
        Self::primary_only().with_base(Language::ALL)
    }

    /// Replaces the base set. The primary language is kept.
    #[must_use]
    pub fn with_base<I>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = Language>,
    {
        self.base = with_primary(languages);
        self
    }

    /// Sets the required set for one component. The primary language is kept.
    ///
    /// # Errors
    ///
    /// Returns `EmptyKey` if `component` is empty.
    pub fn with_component<I>(mut self, component: &str, languages: I) -> Result<Self>
    where
        I: IntoIterator<Item = Language>,
    {
        self.overrides
            .insert(ComponentId::try_new(component)?, with_primary(languages));
        Ok(self)
    }

    /// Returns the base set.
    #[must_use]
    pub fn base(&self) -> &BTreeSet<Language> {
        &self.base
    }

    /// Returns the set that applies to `component`, in tab order.
    #[must_use]
    pub fn for_component(&self, component: &str) -> &BTreeSet<Language> {
        self.overrides.get(component).unwrap_or(&self.base)
    }

    /// Returns true if `component` has its own required set.
    #[must_use]
    pub fn has_override(&self, component: &str) -> bool {
        self.overrides.contains_key(component)
    }
}

impl Default for RequiredLanguages {
    fn default() -> Self {
        Self::primary_only()
    }
}

fn with_primary<I>(languages: I) -> BTreeSet<Language>
where
    I: IntoIterator<Item = Language>,
{
    let mut set: BTreeSet<Language> = languages.into_iter().collect();
    set.insert(Language::PRIMARY);
    set
}
