//! Error types for Bomwright forest operations.
//!
//! Uses `thiserror` for ergonomic error definition. Every failure is an
//! expected, named outcome of bad input or a violated precondition; the
//! engine never retries and never leaves the store partially mutated.

use thiserror::Error;

use crate::node::NodeKind;

/// The main error type for Bomwright operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a not-found error for a node of the given kind.
    #[must_use]
    pub fn not_found(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound {
            kind,
            name: name.into(),
        })
    }

    /// Creates a part-not-found error.
    #[must_use]
    pub fn part_not_found(name: impl Into<String>) -> Self {
        Self::not_found(NodeKind::Part, name)
    }

    /// Creates an assembly-not-found error.
    #[must_use]
    pub fn assembly_not_found(name: impl Into<String>) -> Self {
        Self::not_found(NodeKind::Assembly, name)
    }

    /// Creates a project-not-found error.
    #[must_use]
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::ProjectNotFound(name.into()))
    }

    /// Creates a name-collision error.
    #[must_use]
    pub fn already_exists(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists {
            kind,
            name: name.into(),
        })
    }

    /// Creates an already-has-parent error.
    #[must_use]
    pub fn already_has_parent(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyHasParent {
            kind,
            name: name.into(),
        })
    }

    /// Creates an already-attached error.
    #[must_use]
    pub fn already_attached(part: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyAttached { part: part.into() })
    }

    /// Creates a not-a-child error.
    #[must_use]
    pub fn not_a_child(part: impl Into<String>, assembly: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAChild {
            part: part.into(),
            assembly: assembly.into(),
        })
    }

    /// Creates a no-parts-exist error.
    #[must_use]
    pub fn no_parts_exist() -> Self {
        Self::new(ErrorKind::NoPartsExist)
    }

    /// Creates a no-assemblies-exist error.
    #[must_use]
    pub fn no_assemblies_exist() -> Self {
        Self::new(ErrorKind::NoAssembliesExist)
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Checks whether this error names something that was not found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NotFound { .. } | ErrorKind::ProjectNotFound(_)
        )
    }

    /// Checks whether this error is a name collision.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self.kind, ErrorKind::AlreadyExists { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A named Part or Assembly is unknown.
    #[error("{kind} not found: {name}")]
    NotFound {
        /// Which namespace was searched.
        kind: NodeKind,
        /// The name that was not found.
        name: String,
    },

    /// A named project snapshot is unknown.
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    /// A name is already taken within its kind's namespace.
    #[error("{kind} already exists: {name}")]
    AlreadyExists {
        /// The namespace with the collision.
        kind: NodeKind,
        /// The colliding name.
        name: String,
    },

    /// A node named in a create-assembly request already has a parent.
    #[error("{kind} already has a parent: {name}")]
    AlreadyHasParent {
        /// The kind of the node that is already placed.
        kind: NodeKind,
        /// The node's name.
        name: String,
    },

    /// The part named in an attach request already has a parent.
    #[error("part already attached: {part}")]
    AlreadyAttached {
        /// The part that could not be attached.
        part: String,
    },

    /// The part named in a detach request is not a child of the named assembly.
    #[error("part '{part}' is not a child of assembly '{assembly}'")]
    NotAChild {
        /// The part that was to be detached.
        part: String,
        /// The assembly it does not belong to.
        assembly: String,
    },

    /// An assembly was requested while the Part namespace is empty.
    #[error("no parts exist")]
    NoPartsExist,

    /// Subassemblies were requested while the Assembly namespace is empty.
    #[error("no assemblies exist")]
    NoAssembliesExist,

    /// Serializing or deserializing node data failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}
