//! Completeness validation over a whole store.

use std::collections::BTreeMap;
use std::fmt;

use codetabs_foundation::{ComponentId, Language, VariantKey};
use codetabs_store::ExampleStore;
use serde::Serialize;
use tracing::{debug, warn};

use crate::policy::RequiredLanguages;

/// One gap: `variant` of `component` lacks `language`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MissingLanguage {
    /// The component owning the record.
    pub component: ComponentId,
    /// The variant key of the record.
    pub variant: VariantKey,
    /// The required language that is absent.
    pub language: Language,
}

impl fmt::Display for MissingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: missing {}", self.component, self.variant, self.language)
    }
}

/// Aggregate counts for a validated store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CompletenessSummary {
    /// Number of components.
    pub components: usize,
    /// Number of variant records.
    pub records: usize,
    /// Number of records authoring each language.
    pub authored: BTreeMap<Language, usize>,
    /// Number of reported gaps.
    pub missing: usize,
}

/// Checks every record of a store against a [`RequiredLanguages`] policy.
///
/// Validation is pure: it reads the store and returns findings.
#[derive(Clone, Debug, Default)]
pub struct CompletenessValidator {
    required: RequiredLanguages,
}

impl CompletenessValidator {
    /// Creates a validator for `required`.
    #[must_use]
    pub fn new(required: RequiredLanguages) -> Self {
        Self { required }
    }

    /// Returns the policy in use.
    #[must_use]
    pub fn required(&self) -> &RequiredLanguages {
        &self.required
    }

    /// Returns every missing `(component, variant, language)`, ordered by
    /// component, then variant, then tab order. Empty means complete.
    #[must_use]
    pub fn validate(&self, store: &ExampleStore) -> Vec<MissingLanguage> {
        let mut findings = Vec::new();
        for table in store.tables() {
            let required = self.required.for_component(table.component().as_str());
            for (variant, record) in table.iter() {
                for language in record.missing(required.iter().copied()) {
                    findings.push(MissingLanguage {
                        component: table.component().clone(),
                        variant: variant.clone(),
                        language,
                    });
                }
            }
        }

        if findings.is_empty() {
            debug!(records = store.record_count(), "store is complete");
        } else {
            warn!(count = findings.len(), "store has missing languages");
        }
        findings
    }

    /// Returns true if no record lacks a required language.
    #[must_use]
    pub fn is_complete(&self, store: &ExampleStore) -> bool {
        store.tables().all(|table| {
            let required = self.required.for_component(table.component().as_str());
            table
                .iter()
                .all(|(_, record)| required.iter().all(|lang| record.contains(*lang)))
        })
    }

    /// Validates `store` and returns aggregate counts alongside the findings.
    #[must_use]
    pub fn summarize(&self, store: &ExampleStore) -> (CompletenessSummary, Vec<MissingLanguage>) {
        let findings = self.validate(store);
        let mut authored = BTreeMap::new();
        for (_, record) in store.records() {
            for language in record.languages() {
                *authored.entry(language).or_insert(0) += 1;
            }
        }

        let summary = CompletenessSummary {
            components: store.len(),
            records: store.record_count(),
            authored,
            missing: findings.len(),
        };
        (summary, findings)
    }
}
