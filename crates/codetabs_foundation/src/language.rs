//! Presentation languages a snippet can be authored in.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A presentation language for code snippets.
///
/// The set is closed. The declaration order is the tab order used by
/// documentation pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// The component-framework idiom (React). Every record must have it.
    React,
    /// The typed variant of the framework idiom (TypeScript).
    TypeScript,
    /// Markup plus imperative script (HTML with vanilla JavaScript).
    Vanilla,
    /// The legacy widget framework (ExtJS).
    ExtJs,
}

impl Language {
    /// The language every variant record must contain.
    pub const PRIMARY: Language = Language::React;

    /// All languages in tab order.
    pub const ALL: [Language; 4] = [
        Language::React,
        Language::TypeScript,
        Language::Vanilla,
        Language::ExtJs,
    ];

    /// Returns the authoring identifier (`"react"`, `"typescript"`, ...).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::TypeScript => "typescript",
            Self::Vanilla => "vanilla",
            Self::ExtJs => "extjs",
        }
    }

    /// Returns the label shown on the documentation tab.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::TypeScript => "TypeScript",
            Self::Vanilla => "Vanilla JS",
            Self::ExtJs => "ExtJS",
        }
    }

    /// Returns true for the mandatory primary language.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::React)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parses an authoring identifier. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.id() == s)
            .ok_or_else(|| Error::unknown_language(s))
    }
}
