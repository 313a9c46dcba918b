//! Integration tests for Layer 1: Storage
//!
//! Tests for the entity store and the forest mutation protocol.

mod forest;
