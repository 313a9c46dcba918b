//! JSON interchange and rendering for Bomwright.
//!
//! This crate provides:
//! - [`TreeNode`] and the [`export`] module - `{id, children: [...]}` interchange
//! - [`render`] - ASCII tree rendering of an exported subtree

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod export;
mod render;

pub use export::TreeNode;
pub use render::render;
