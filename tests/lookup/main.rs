//! Integration tests for Layer 2: Lookup
//!
//! Tests key resolution, the default fallback, and file name resolution.

mod file_names;
mod service;
