//! Code-variant references in story definitions.
//!
//! Story files attach examples with calls such as
//! `codeVariants: getCodeVariants('pagination', 'middlePage')`, either on the
//! file's `meta` object or on individual `export const Name: Story` exports.
//! Only the call sites are recognized; the surrounding source is not parsed.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const CALL: &str = "getCodeVariants(";
const META_CALL: &str = "codeVariants: getCodeVariants(";
const META_END: &str = "export default meta";

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"getCodeVariants\(\s*['"`]([^'"`]*)['"`]\s*,\s*['"`]([^'"`]*)['"`]\s*[,)]"#)
        .expect("reference pattern is valid")
});

static STORY_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export const (\w+)\s*:\s*Story\b").expect("story export pattern is valid")
});

/// A `getCodeVariants(component, variant)` call found in a story file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StoryReference {
    /// Component argument, verbatim.
    pub component: String,
    /// Variant argument, verbatim.
    pub variant: String,
    /// Story file the call appears in, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line of the call.
    pub line: usize,
}

/// Finds every literal `getCodeVariants` call in `source`.
///
/// Calls with non-literal arguments are skipped.
#[must_use]
pub fn scan_story_source(source: &str) -> Vec<StoryReference> {
    REFERENCE
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(StoryReference {
                component: caps[1].to_string(),
                variant: caps[2].to_string(),
                file: None,
                line: line_of(source, whole.start()),
            })
        })
        .collect()
}

fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

/// Where a story gets its code variants from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageLevel {
    /// A call inside the story's own export.
    Story,
    /// Inherited from a call on the file's `meta` object.
    Meta,
    /// No code variants.
    None,
}

/// Coverage of one story export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StoryStatus {
    /// Export name.
    pub name: String,
    /// Where its code variants come from.
    pub level: CoverageLevel,
}

impl StoryStatus {
    /// Returns true if the story shows code variants.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.level != CoverageLevel::None
    }
}

/// Coverage and references of one story file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileCoverage {
    /// File name.
    pub file: String,
    /// True if the `meta` object assigns `codeVariants` from a call.
    pub meta_level: bool,
    /// Story exports in source order.
    pub stories: Vec<StoryStatus>,
    /// Every call in the file.
    pub references: Vec<StoryReference>,
}

impl FileCoverage {
    /// Analyzes the story file `file` with contents `source`.
    #[must_use]
    pub fn analyze(file: &str, source: &str) -> Self {
        let meta_level = source
            .find(META_END)
            .is_some_and(|end| source[..end].contains(META_CALL));

        let exports: Vec<(usize, String)> = STORY_EXPORT
            .captures_iter(source)
            .filter_map(|caps| Some((caps.get(0)?.start(), caps[1].to_string())))
            .collect();

        let stories = exports
            .iter()
            .enumerate()
            .map(|(i, (start, name))| {
                let end = exports.get(i + 1).map_or(source.len(), |(next, _)| *next);
                let level = if source[*start..end].contains(CALL) {
                    CoverageLevel::Story
                } else if meta_level {
                    CoverageLevel::Meta
                } else {
                    CoverageLevel::None
                };
                StoryStatus {
                    name: name.clone(),
                    level,
                }
            })
            .collect();

        let references = scan_story_source(source)
            .into_iter()
            .map(|reference| StoryReference {
                file: Some(file.to_string()),
                ..reference
            })
            .collect();

        Self {
            file: file.to_string(),
            meta_level,
            stories,
            references,
        }
    }

    /// Returns the number of stories with code variants.
    #[must_use]
    pub fn covered(&self) -> usize {
        self.stories.iter().filter(|s| s.has_variants()).count()
    }

    /// Returns the names of stories without code variants.
    #[must_use]
    pub fn uncovered(&self) -> Vec<&str> {
        self.stories
            .iter()
            .filter(|s| !s.has_variants())
            .map(|s| s.name.as_str())
            .collect()
    }
}

/// Coverage across a set of story files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Per-file coverage, in the order added.
    pub files: Vec<FileCoverage>,
}

impl CoverageReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one analyzed file.
    pub fn push(&mut self, file: FileCoverage) {
        self.files.push(file);
    }

    /// Total number of story exports.
    #[must_use]
    pub fn total_stories(&self) -> usize {
        self.files.iter().map(|f| f.stories.len()).sum()
    }

    /// Number of story exports with code variants.
    #[must_use]
    pub fn covered_stories(&self) -> usize {
        self.files.iter().map(FileCoverage::covered).sum()
    }

    /// Files with at least one uncovered story, most uncovered first.
    #[must_use]
    pub fn incomplete_files(&self) -> Vec<&FileCoverage> {
        let mut files: Vec<_> = self
            .files
            .iter()
            .filter(|f| f.covered() < f.stories.len())
            .collect();
        files.sort_by_key(|f| std::cmp::Reverse(f.stories.len() - f.covered()));
        files
    }

    /// Every reference across all files.
    pub fn references(&self) -> impl Iterator<Item = &StoryReference> {
        self.files.iter().flat_map(|f| f.references.iter())
    }
}

impl FromIterator<FileCoverage> for CoverageReport {
    fn from_iter<I: IntoIterator<Item = FileCoverage>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
