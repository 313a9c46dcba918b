//! Node kinds and kind-qualified name references.
//!
//! Parts and Assemblies live in separate namespaces, so a bare name is
//! ambiguous. A [`NodeRef`] pairs a name with its [`NodeKind`] and is the
//! unit of reference everywhere a node points at another node.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a composition node.
///
/// Parts are leaves; only Assemblies may aggregate children.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// A leaf composition unit with no children.
    Part,
    /// A composite unit that aggregates Parts and/or other Assemblies.
    Assembly,
}

impl NodeKind {
    /// Returns the lowercase label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Part => "part",
            Self::Assembly => "assembly",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A kind-qualified reference to a node by name.
///
/// References carry no ownership: resolving one against a store may fail
/// if the named node has been deleted.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeRef {
    /// The namespace the name belongs to.
    pub kind: NodeKind,
    /// The node's name within that namespace.
    pub name: String,
}

impl NodeRef {
    /// Creates a reference to a node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Creates a reference to a Part.
    #[must_use]
    pub fn part(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Part, name)
    }

    /// Creates a reference to an Assembly.
    #[must_use]
    pub fn assembly(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Assembly, name)
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.name)
    }
}
