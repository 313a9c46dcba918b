//! Queries, snapshots, and the engine facade for Bomwright.
//!
//! This crate provides:
//! - [`query`] - Pure read traversals over a forest
//! - [`SnapshotStore`] and [`Snapshot`] - Named, isolated captures of forest state
//! - [`Engine`] - One live forest plus its snapshot store, behind a single API

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod engine;
pub mod query;
mod snapshot;

pub use engine::Engine;
pub use snapshot::{Snapshot, SnapshotStore};
