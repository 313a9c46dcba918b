//! Composition nodes.
//!
//! A [`Node`] records its own name and kind, an optional parent (always an
//! Assembly), and an ordered child list. Nodes are plain values: the store
//! owns them, and links between them are names, never pointers. Cloning a
//! node shares nothing mutable with the original.

use im::Vector;

use bomwright_foundation::{NodeKind, NodeRef};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single Part or Assembly in the forest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// The node's name, unique within its kind's namespace.
    name: String,
    /// Whether this node is a Part or an Assembly.
    kind: NodeKind,
    /// The name of the owning Assembly, if this node is placed.
    parent: Option<String>,
    /// Children in attach order. Always empty for Parts.
    children: Vector<NodeRef>,
}

impl Node {
    /// Creates a parentless, childless node.
    #[must_use]
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            children: Vector::new(),
        }
    }

    /// Creates an orphan Part.
    #[must_use]
    pub fn part(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Part, name)
    }

    /// Creates an empty top-level Assembly.
    #[must_use]
    pub fn assembly(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Assembly, name)
    }

    /// Returns the node's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the node's kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the name of the owning Assembly, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Returns true if the node has no parent.
    #[must_use]
    pub fn is_orphan(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns true if the node has no children.
    ///
    /// Under the current protocol only Assemblies ever gain children, but
    /// callers that classify leaves must use this structural check rather
    /// than assume kind.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the children in attach order.
    pub fn children(&self) -> impl Iterator<Item = &NodeRef> {
        self.children.iter()
    }

    /// Returns the number of children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if `child` is among this node's children.
    #[must_use]
    pub fn has_child(&self, child: &NodeRef) -> bool {
        self.children.iter().any(|c| c == child)
    }

    /// Returns a reference to this node.
    #[must_use]
    pub fn node_ref(&self) -> NodeRef {
        NodeRef::new(self.kind, self.name.clone())
    }

    pub(crate) fn set_parent(&mut self, parent: Option<String>) {
        self.parent = parent;
    }

    pub(crate) fn push_child(&mut self, child: NodeRef) {
        self.children.push_back(child);
    }

    pub(crate) fn remove_child(&mut self, child: &NodeRef) {
        if let Some(pos) = self.children.iter().position(|c| c == child) {
            self.children.remove(pos);
        }
    }
}
