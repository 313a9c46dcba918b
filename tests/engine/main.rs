//! Integration tests for Layer 2: Engine
//!
//! Tests for structural queries and project snapshots.

mod snapshots;
