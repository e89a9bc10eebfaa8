//! Integration tests for Layer 1: Store
//!
//! Tests store construction, immutability, and the TOML authoring loader.

mod authoring;
mod construction;
