//! Lookup service for the codetabs registry.
//!
//! This crate provides:
//! - [`LookupService`] - Resolves `(component, variant)` keys against an injected store
//! - [`resolve_file_name`] - Maps example file names such as `button-group-default.tsx` to keys

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod file_name;
mod service;

pub use file_name::resolve_file_name;
pub use service::LookupService;
