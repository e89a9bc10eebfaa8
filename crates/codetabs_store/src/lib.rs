//! Example store for the codetabs registry.
//!
//! This crate provides:
//! - [`VariantRecord`] - Language to snippet mapping that always holds the primary language
//! - [`VariantTable`] - Variant key to record mapping for one component
//! - [`ExampleStore`] - Immutable component catalog with structural sharing
//! - [`ExampleStoreBuilder`] - All-or-nothing construction from literal data
//! - [`authoring`] - Loader for the nested TOML authoring format

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod authoring;
mod record;
mod store;
mod table;

pub use record::{Snippet, VariantRecord};
pub use store::{ExampleStore, ExampleStoreBuilder};
pub use table::{TableBuilder, VariantTable};
