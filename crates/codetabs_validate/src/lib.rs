//! Completeness validation and story reference audits.
//!
//! This crate provides:
//! - [`RequiredLanguages`] - Which languages every record (or a given component's records) must carry
//! - [`CompletenessValidator`] - Reports every `(component, variant, language)` gap in a store
//! - [`scan_story_source`] / [`FileCoverage`] - Extraction of code-variant references from story files
//! - [`audit_references`] - Resolution of story references against a lookup service

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod audit;
mod completeness;
mod policy;
mod stories;

pub use audit::{AuditReport, BrokenReference, audit_references};
pub use completeness::{CompletenessSummary, CompletenessValidator, MissingLanguage};
pub use policy::RequiredLanguages;
pub use stories::{
    CoverageLevel, CoverageReport, FileCoverage, StoryReference, StoryStatus, scan_story_source,
};
