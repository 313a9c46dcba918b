//! Cross-layer integration tests for Bomwright
//!
//! Tests that verify correct interaction between multiple crates.
