//! Configuration for `codetabs check`.
//!
//! ```toml
//! required = ["react", "typescript"]
//! stories = "stories/components"
//! fail_on_missing = true
//!
//! [components.banner]
//! required = ["react", "vanilla"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use codetabs_foundation::{Error, ErrorKind, Language, Result};
use codetabs_validate::RequiredLanguages;
use serde::Deserialize;

use crate::files::read_to_string;

/// Configuration for completeness checks and story audits.
///
/// Language ids are kept as written and checked by [`policy`](Self::policy).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Languages every record must carry. The primary language is implied.
    pub required: Vec<String>,

    /// Per-component overrides of `required`.
    pub components: BTreeMap<String, ComponentConfig>,

    /// Story directory to audit alongside the completeness check.
    pub stories: Option<PathBuf>,

    /// Whether findings make the check fail.
    pub fail_on_missing: bool,
}

/// Settings for one component.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentConfig {
    /// Languages this component's records must carry, replacing the base set.
    pub required: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            required: Vec::new(),
            components: BTreeMap::new(),
            stories: None,
            fail_on_missing: true,
        }
    }
}

impl CheckConfig {
    /// Parses a configuration document. `source` names it in error context.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for malformed documents or unknown keys.
    pub fn from_toml_str(source: &str, text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            let line = e
                .span()
                .and_then(|span| text.get(..span.start))
                .map(|prefix| prefix.matches('\n').count() + 1);
            Error::new(ErrorKind::ConfigError(e.message().to_string())).with_source(source, line)
        })
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read and `ConfigError` if it
    /// is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = read_to_string(path)?;
        Self::from_toml_str(&path.display().to_string(), &text)
    }

    /// Builder method to set the base required languages.
    #[must_use]
    pub fn with_required(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.required = ids(languages);
        self
    }

    /// Builder method to override the required languages of one component.
    #[must_use]
    pub fn with_component(
        mut self,
        component: impl Into<String>,
        languages: impl IntoIterator<Item = Language>,
    ) -> Self {
        self.components.insert(
            component.into(),
            ComponentConfig {
                required: ids(languages),
            },
        );
        self
    }

    /// Builder method to set the story directory.
    #[must_use]
    pub fn with_stories(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stories = Some(dir.into());
        self
    }

    /// Builder method to set whether findings fail the check.
    #[must_use]
    pub fn with_fail_on_missing(mut self, fail: bool) -> Self {
        self.fail_on_missing = fail;
        self
    }

    /// Converts the configured language ids into a policy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown language id or an empty
    /// component id.
    pub fn policy(&self) -> Result<RequiredLanguages> {
        let base = languages(&self.required).map_err(|e| e.with_frame("in `required`"))?;
        self.components.iter().try_fold(
            RequiredLanguages::primary_only().with_base(base),
            |policy, (component, settings)| {
                let frame = || format!("in `components.{component}.required`");
                let langs = languages(&settings.required).map_err(|e| e.with_frame(frame()))?;
                policy
                    .with_component(component, langs)
                    .map_err(|e| config_error(&e).with_frame(frame()))
            },
        )
    }
}

fn ids(languages: impl IntoIterator<Item = Language>) -> Vec<String> {
    languages.into_iter().map(|l| l.id().to_string()).collect()
}

fn languages(ids: &[String]) -> Result<Vec<Language>> {
    ids.iter()
        .map(|id| id.parse::<Language>().map_err(|e| config_error(&e)))
        .collect()
}

fn config_error(err: &Error) -> Error {
    Error::new(ErrorKind::ConfigError(err.kind.to_string()))
}
