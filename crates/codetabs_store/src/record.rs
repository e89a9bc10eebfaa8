//! Variant records: one snippet per presentation language.

use std::fmt;
use std::sync::Arc;

use codetabs_foundation::{Error, Language, LookupKey, Result};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Source code for one language tab. Stored and returned verbatim.
pub type Snippet = Arc<str>;

/// The language to snippet mapping for one `(component, variant)` pair.
///
/// The primary language is a field rather than a map entry, so a record
/// without it cannot be constructed. Cloning is O(1); the secondary
/// languages live in a persistent map that shares structure between clones.
#[derive(Clone, PartialEq, Eq)]
pub struct VariantRecord {
    primary: Snippet,
    /// Never contains [`Language::PRIMARY`].
    secondary: im::OrdMap<Language, Snippet>,
}

impl VariantRecord {
    /// Creates a record holding only the primary-language snippet.
    #[must_use]
    pub fn new(primary: impl Into<Snippet>) -> Self {
        Self {
            primary: primary.into(),
            secondary: im::OrdMap::new(),
        }
    }

    /// Returns a record with the snippet for `language` set.
    ///
    /// Setting [`Language::PRIMARY`] replaces the primary snippet.
    #[must_use]
    pub fn with(mut self, language: Language, code: impl Into<Snippet>) -> Self {
        if language.is_primary() {
            self.primary = code.into();
        } else {
            self.secondary.insert(language, code.into());
        }
        self
    }

    /// Builds a record from authored `(language, code)` pairs.
    ///
    /// Later pairs for the same language win.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteVariantRecord` for `key` if no pair carries the
    /// primary language.
    pub fn try_from_snippets<I, S>(key: &LookupKey, snippets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Language, S)>,
        S: Into<Snippet>,
    {
        let mut primary = None;
        let mut secondary = im::OrdMap::new();
        for (language, code) in snippets {
            if language.is_primary() {
                primary = Some(code.into());
            } else {
                secondary.insert(language, code.into());
            }
        }

        let primary = primary.ok_or_else(|| {
            Error::incomplete_record(key.component.as_str(), key.variant.as_str())
        })?;
        Ok(Self { primary, secondary })
    }

    /// Returns the primary-language snippet.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Returns the snippet for `language`, if authored.
    #[must_use]
    pub fn get(&self, language: Language) -> Option<&str> {
        if language.is_primary() {
            Some(&self.primary)
        } else {
            self.secondary.get(&language).map(|code| &**code)
        }
    }

    /// Returns true if a snippet is authored for `language`.
    #[must_use]
    pub fn contains(&self, language: Language) -> bool {
        language.is_primary() || self.secondary.contains_key(&language)
    }

    /// Returns the number of authored languages (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.secondary.len()
    }

    /// Always false; a record holds at least the primary language.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates `(language, snippet)` pairs in tab order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> + '_ {
        std::iter::once((Language::PRIMARY, self.primary()))
            .chain(self.secondary.iter().map(|(lang, code)| (*lang, &**code)))
    }

    /// Returns the authored languages in tab order.
    #[must_use]
    pub fn languages(&self) -> Vec<Language> {
        self.iter().map(|(lang, _)| lang).collect()
    }

    /// Returns the languages from `required` that this record lacks.
    #[must_use]
    pub fn missing<I>(&self, required: I) -> Vec<Language>
    where
        I: IntoIterator<Item = Language>,
    {
        required
            .into_iter()
            .filter(|lang| !self.contains(*lang))
            .collect()
    }
}

impl fmt::Debug for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(lang, code)| (lang.id(), code.len())))
            .finish()
    }
}

/// Serializes as a `{ language: code }` map in tab order.
impl Serialize for VariantRecord {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (lang, code) in self.iter() {
            map.serialize_entry(lang.id(), code)?;
        }
        map.end()
    }
}
