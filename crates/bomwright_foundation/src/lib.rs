//! Core types shared by every layer of Bomwright.
//!
//! This crate provides:
//! - [`NodeKind`] - The Part/Assembly tag
//! - [`NodeRef`] - A kind-qualified name reference
//! - [`Error`] and [`Result`] - The error taxonomy for forest operations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod node;

pub use error::{Error, ErrorKind};
pub use node::{NodeKind, NodeRef};

/// Result type used throughout Bomwright.
pub type Result<T> = std::result::Result<T, Error>;
