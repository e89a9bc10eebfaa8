//! Codetabs - Code example registry for component documentation
//!
//! This crate re-exports all layers of the codetabs system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: codetabs_runtime    Configuration, reports, CLI
//! Layer 3: codetabs_validate   Completeness checks, story audits
//!          codetabs_catalog    The built-in example catalog
//! Layer 2: codetabs_lookup     Lookup service
//! Layer 1: codetabs_store      Immutable example store, authoring loader
//! Layer 0: codetabs_foundation Core types (Language, keys, Error)
//! ```

pub use codetabs_catalog as catalog;
pub use codetabs_foundation as foundation;
pub use codetabs_lookup as lookup;
pub use codetabs_runtime as runtime;
pub use codetabs_store as store;
pub use codetabs_validate as validate;
