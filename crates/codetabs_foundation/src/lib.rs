//! Core types and errors for the codetabs example registry.
//!
//! This crate provides:
//! - [`Language`] - The closed set of presentation languages a snippet is authored in
//! - [`ComponentId`], [`VariantKey`], [`LookupKey`] - Addressing keys
//! - [`Error`] - Typed failure signals with authoring context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod key;
mod language;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use key::{ComponentId, LookupKey, VariantKey};
pub use language::Language;
