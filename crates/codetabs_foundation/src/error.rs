//! Error types for the codetabs registry.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for registry operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context, creating one if needed.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Records the source file (and optionally line) on this error's context.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>, line: Option<usize>) -> Self {
        let mut context = self.context.take().unwrap_or_default().with_source(source);
        if line.is_some() {
            context.line = line;
        }
        self.context = Some(context);
        self
    }

    /// Creates a component not found error.
    #[must_use]
    pub fn component_not_found(component: impl Into<String>) -> Self {
        Self::new(ErrorKind::ComponentNotFound {
            component: component.into(),
        })
    }

    /// Creates a variant not found error.
    #[must_use]
    pub fn variant_not_found(component: impl Into<String>, variant: impl Into<String>) -> Self {
        Self::new(ErrorKind::VariantNotFound {
            component: component.into(),
            variant: variant.into(),
        })
    }

    /// Creates an incomplete variant record error.
    #[must_use]
    pub fn incomplete_record(component: impl Into<String>, variant: impl Into<String>) -> Self {
        Self::new(ErrorKind::IncompleteVariantRecord {
            component: component.into(),
            variant: variant.into(),
        })
    }

    /// Creates an unknown language error.
    #[must_use]
    pub fn unknown_language(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLanguage(id.into()))
    }

    /// Returns true if the requested component is absent from the catalog.
    #[must_use]
    pub fn is_component_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::ComponentNotFound { .. })
    }

    /// Returns true if the component exists but the variant does not.
    #[must_use]
    pub fn is_variant_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::VariantNotFound { .. })
    }

    /// Returns true if a record was authored without the primary language.
    #[must_use]
    pub fn is_incomplete_record(&self) -> bool {
        matches!(self.kind, ErrorKind::IncompleteVariantRecord { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// The component identifier is not in the catalog.
    #[error("component not found: {component}")]
    ComponentNotFound {
        /// The component that was requested.
        component: String,
    },

    /// The component exists but has no such variant.
    #[error("variant not found: {variant} on component {component}")]
    VariantNotFound {
        /// The component that was queried.
        component: String,
        /// The variant key that was not found.
        variant: String,
    },

    /// A variant record was authored without the primary language.
    #[error("incomplete variant record: {component}/{variant} has no primary-language snippet")]
    IncompleteVariantRecord {
        /// The component owning the record.
        component: String,
        /// The variant key of the record.
        variant: String,
    },

    /// A component was defined twice.
    #[error("duplicate component: {0}")]
    DuplicateComponent(String),

    /// A variant was defined twice within one component.
    #[error("duplicate variant: {variant} on component {component}")]
    DuplicateVariant {
        /// The component owning the variant.
        component: String,
        /// The repeated variant key.
        variant: String,
    },

    /// A component or variant key was empty.
    #[error("empty {0} key")]
    EmptyKey(&'static str),

    /// A language identifier outside the closed set.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// Authoring data could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),

    /// Configuration was invalid.
    #[error("config error: {0}")]
    ConfigError(String),

    /// Filesystem access failed.
    #[error("io error: {0}")]
    IoError(String),

    /// Report serialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Context about where an error occurred.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Authoring file or story file name.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
    /// Additional frames describing how the error was reached.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  {frame}")?;
            }
        }
        Ok(())
    }
}
