//! Entity storage and the forest mutation protocol for Bomwright.
//!
//! This crate provides:
//! - [`Node`] - A Part or Assembly with its placement in the forest
//! - [`EntityStore`] - Name-keyed ownership of all nodes, one map per kind
//! - [`Forest`] - The only type permitted to change parent/child relations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod forest;
mod node;
mod store;

pub use forest::Forest;
pub use node::Node;
pub use store::EntityStore;
