//! Auditing story references against the catalog.

use codetabs_foundation::Error;
use codetabs_lookup::LookupService;
use serde::{Serialize, Serializer};
use tracing::info;

use crate::stories::StoryReference;

/// A story reference that does not resolve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BrokenReference {
    /// The offending call.
    #[serde(flatten)]
    pub reference: StoryReference,
    /// Why it failed, with the story location as context.
    #[serde(serialize_with = "display")]
    pub error: Error,
}

/// Outcome of resolving a set of story references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Number of references that resolved.
    pub resolved: usize,
    /// References that did not resolve, in input order.
    pub broken: Vec<BrokenReference>,
}

impl AuditReport {
    /// Returns true if every reference resolved.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }

    /// Total number of references checked.
    #[must_use]
    pub fn total(&self) -> usize {
        self.resolved + self.broken.len()
    }
}

/// Resolves each reference with [`LookupService::lookup`].
///
/// Broken references carry the lookup error, annotated with the story file
/// and line.
pub fn audit_references<'r, I>(service: &LookupService<'_>, references: I) -> AuditReport
where
    I: IntoIterator<Item = &'r StoryReference>,
{
    let mut report = AuditReport::default();
    for reference in references {
        match service.lookup(&reference.component, &reference.variant) {
            Ok(_) => report.resolved += 1,
            Err(err) => {
                let error = match &reference.file {
                    Some(file) => err.with_source(file.clone(), Some(reference.line)),
                    None => err,
                };
                report.broken.push(BrokenReference {
                    reference: reference.clone(),
                    error,
                });
            }
        }
    }

    info!(
        resolved = report.resolved,
        broken = report.broken.len(),
        "story references audited"
    );
    report
}

fn display<S: Serializer>(error: &Error, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}
