//! The forest mutation protocol.
//!
//! A [`Forest`] owns an [`EntityStore`] and is the only type that changes
//! `parent`/`children` relations. Every operation validates all of its
//! preconditions before mutating anything, so a failure leaves the store
//! exactly as it was.
//!
//! Acyclicity is structural: an assembly is created in a single operation
//! from parentless children, and attach only accepts orphan parts, so no
//! sequence of operations can make an assembly its own ancestor.

use bomwright_foundation::{Error, NodeKind, NodeRef, Result};

use crate::node::Node;
use crate::store::EntityStore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An assembly forest: all live nodes plus the mutation protocol.
///
/// Cloning a forest captures its entire state; the clone shares no mutable
/// structure with the original, which is what project snapshots rely on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Forest {
    store: EntityStore,
}

impl Forest {
    /// Creates a new empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying entity store for read access.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Gets a Part by name, or `None` if absent.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&Node> {
        self.store.find(NodeKind::Part, name)
    }

    /// Gets an Assembly by name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no assembly has that name.
    pub fn assembly(&self, name: &str) -> Result<&Node> {
        self.store.get(NodeKind::Assembly, name)
    }

    /// Iterates all Parts in name order.
    pub fn parts(&self) -> impl Iterator<Item = &Node> {
        self.store.all(NodeKind::Part)
    }

    /// Iterates all Assemblies in name order.
    pub fn assemblies(&self) -> impl Iterator<Item = &Node> {
        self.store.all(NodeKind::Assembly)
    }

    /// Returns true if the forest holds no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.namespace_is_empty(NodeKind::Part)
            && self.store.namespace_is_empty(NodeKind::Assembly)
    }

    /// Creates a new orphan Part.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if a Part already has that name.
    pub fn create_part(&mut self, name: impl Into<String>) -> Result<()> {
        self.store.insert(Node::part(name))
    }

    /// Creates a new Assembly from existing parts and subassemblies.
    ///
    /// All checks run before any mutation; the operation either succeeds
    /// whole or changes nothing:
    ///
    /// 1. The assembly name must be free.
    /// 2. The Part namespace must be non-empty.
    /// 3. Every named part must exist and be an orphan.
    /// 4. If subassemblies are named, the Assembly namespace must be
    ///    non-empty and every named subassembly must exist and be an orphan.
    ///
    /// Duplicate names within a request collapse to a single attachment.
    /// Children are attached in request order, parts before subassemblies.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists`, `NoPartsExist`, `NotFound`,
    /// `AlreadyHasParent`, or `NoAssembliesExist` per the checks above.
    pub fn create_assembly(
        &mut self,
        name: impl Into<String>,
        part_names: &[&str],
        subassembly_names: &[&str],
    ) -> Result<()> {
        let name = name.into();

        if self.store.contains(NodeKind::Assembly, &name) {
            return Err(Error::already_exists(NodeKind::Assembly, name));
        }

        if self.store.namespace_is_empty(NodeKind::Part) {
            return Err(Error::no_parts_exist());
        }

        let part_names = dedup_preserving_order(part_names);
        for part_name in &part_names {
            let part = self
                .part(part_name)
                .ok_or_else(|| Error::part_not_found(*part_name))?;
            if !part.is_orphan() {
                return Err(Error::already_has_parent(NodeKind::Part, *part_name));
            }
        }

        let subassembly_names = dedup_preserving_order(subassembly_names);
        if !subassembly_names.is_empty() {
            if self.store.namespace_is_empty(NodeKind::Assembly) {
                return Err(Error::no_assemblies_exist());
            }
            for sub_name in &subassembly_names {
                let sub = self.store.get(NodeKind::Assembly, sub_name)?;
                if !sub.is_orphan() {
                    return Err(Error::already_has_parent(NodeKind::Assembly, *sub_name));
                }
            }
        }

        // All checks passed; mutate.
        let mut assembly = Node::assembly(name.clone());
        for part_name in &part_names {
            self.store
                .get_mut(NodeKind::Part, part_name)?
                .set_parent(Some(name.clone()));
            assembly.push_child(NodeRef::part(*part_name));
        }
        for sub_name in &subassembly_names {
            self.store
                .get_mut(NodeKind::Assembly, sub_name)?
                .set_parent(Some(name.clone()));
            assembly.push_child(NodeRef::assembly(*sub_name));
        }
        self.store.insert(assembly)
    }

    /// Attaches an orphan Part to an Assembly.
    ///
    /// The part is appended to the assembly's children, after any existing
    /// children.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if either name is unknown, `AlreadyAttached` if
    /// the part already has a parent.
    pub fn attach_part(&mut self, part_name: &str, assembly_name: &str) -> Result<()> {
        let part = self.store.get(NodeKind::Part, part_name)?;
        self.store.get(NodeKind::Assembly, assembly_name)?;
        if !part.is_orphan() {
            return Err(Error::already_attached(part_name));
        }

        self.store
            .get_mut(NodeKind::Part, part_name)?
            .set_parent(Some(assembly_name.to_string()));
        self.store
            .get_mut(NodeKind::Assembly, assembly_name)?
            .push_child(NodeRef::part(part_name));
        Ok(())
    }

    /// Detaches a Part from the Assembly that owns it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if either name is unknown, `NotAChild` if the
    /// part's current parent is not the named assembly.
    pub fn detach_part(&mut self, part_name: &str, assembly_name: &str) -> Result<()> {
        let part = self.store.get(NodeKind::Part, part_name)?;
        self.store.get(NodeKind::Assembly, assembly_name)?;
        if part.parent() != Some(assembly_name) {
            return Err(Error::not_a_child(part_name, assembly_name));
        }

        self.store
            .get_mut(NodeKind::Assembly, assembly_name)?
            .remove_child(&NodeRef::part(part_name));
        self.store
            .get_mut(NodeKind::Part, part_name)?
            .set_parent(None);
        Ok(())
    }

    /// Deletes a Part, detaching it from its parent first if attached.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no Part has that name.
    pub fn delete_part(&mut self, name: &str) -> Result<()> {
        let part = self.store.get(NodeKind::Part, name)?;
        if let Some(parent_name) = part.parent().map(str::to_string) {
            // A stored parent is guaranteed by the stored-parent invariant.
            self.store
                .get_mut(NodeKind::Assembly, &parent_name)?
                .remove_child(&NodeRef::part(name));
        }
        self.store.remove(NodeKind::Part, name)?;
        Ok(())
    }
}

/// Drops repeated names, keeping first occurrences in order.
fn dedup_preserving_order<'a>(names: &[&'a str]) -> Vec<&'a str> {
    let mut seen = Vec::with_capacity(names.len());
    for name in names {
        if !seen.contains(name) {
            seen.push(*name);
        }
    }
    seen
}
