//! Name-keyed ownership of all nodes.
//!
//! The `EntityStore` holds every Part and Assembly in two independent
//! mappings, one per kind. All reachability for deletion or restructuring
//! goes through these maps; parent/child links are names resolved here,
//! never pointers. The maps are persistent (`im::OrdMap`), so cloning a
//! store is O(1) and copy-on-write: no mutation of a clone is visible
//! through the original.

use im::OrdMap;

use bomwright_foundation::{Error, NodeKind, NodeRef, Result};

use crate::node::Node;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Owns all nodes, keyed by name within each kind's namespace.
///
/// Name uniqueness within a kind is enforced on insert; a colliding name
/// is rejected, never overwritten. Iteration order is name order, which
/// keeps query results deterministic across calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityStore {
    /// All Parts, by name.
    parts: OrdMap<String, Node>,
    /// All Assemblies, by name.
    assemblies: OrdMap<String, Node>,
}

impl EntityStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: NodeKind) -> &OrdMap<String, Node> {
        match kind {
            NodeKind::Part => &self.parts,
            NodeKind::Assembly => &self.assemblies,
        }
    }

    fn map_mut(&mut self, kind: NodeKind) -> &mut OrdMap<String, Node> {
        match kind {
            NodeKind::Part => &mut self.parts,
            NodeKind::Assembly => &mut self.assemblies,
        }
    }

    /// Inserts a node under its own name and kind.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the name is taken within the node's kind.
    pub fn insert(&mut self, node: Node) -> Result<()> {
        let kind = node.kind();
        let name = node.name().to_string();
        if self.map(kind).contains_key(&name) {
            return Err(Error::already_exists(kind, name));
        }
        self.map_mut(kind).insert(name, node);
        Ok(())
    }

    /// Gets a node by kind and name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no node of that kind has that name.
    pub fn get(&self, kind: NodeKind, name: &str) -> Result<&Node> {
        self.map(kind)
            .get(name)
            .ok_or_else(|| Error::not_found(kind, name))
    }

    /// Gets a node by kind and name, or `None` if absent.
    #[must_use]
    pub fn find(&self, kind: NodeKind, name: &str) -> Option<&Node> {
        self.map(kind).get(name)
    }

    /// Resolves a node reference.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the referenced node is not stored.
    pub fn resolve(&self, node_ref: &NodeRef) -> Result<&Node> {
        self.get(node_ref.kind, &node_ref.name)
    }

    pub(crate) fn get_mut(&mut self, kind: NodeKind, name: &str) -> Result<&mut Node> {
        self.map_mut(kind)
            .get_mut(name)
            .ok_or_else(|| Error::not_found(kind, name))
    }

    /// Removes and returns a node.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no node of that kind has that name.
    pub fn remove(&mut self, kind: NodeKind, name: &str) -> Result<Node> {
        self.map_mut(kind)
            .remove(name)
            .ok_or_else(|| Error::not_found(kind, name))
    }

    /// Checks whether a node of the given kind and name is stored.
    #[must_use]
    pub fn contains(&self, kind: NodeKind, name: &str) -> bool {
        self.map(kind).contains_key(name)
    }

    /// Iterates all nodes of a kind in name order.
    pub fn all(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.map(kind).values()
    }

    /// Returns the number of stored nodes of a kind.
    #[must_use]
    pub fn count(&self, kind: NodeKind) -> usize {
        self.map(kind).len()
    }

    /// Checks whether a kind's namespace is empty.
    #[must_use]
    pub fn namespace_is_empty(&self, kind: NodeKind) -> bool {
        self.map(kind).is_empty()
    }
}
