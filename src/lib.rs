//! Bomwright - Bill-of-materials engine
//!
//! This crate re-exports all layers of the Bomwright system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: bomwright_runtime    — JSON interchange, rendering, demo driver
//! Layer 2: bomwright_engine     — Queries, snapshots, engine facade
//! Layer 1: bomwright_storage    — Entity store, forest mutation protocol
//! Layer 0: bomwright_foundation — Core types (NodeKind, NodeRef, Error)
//! ```

pub use bomwright_engine as engine;
pub use bomwright_foundation as foundation;
pub use bomwright_runtime as runtime;
pub use bomwright_storage as storage;
