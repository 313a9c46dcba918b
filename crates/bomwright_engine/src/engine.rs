//! The engine facade: one live forest plus its snapshot store.
//!
//! An [`Engine`] is an explicit instance with a defined lifecycle; there
//! is no ambient global state, so independent engines (per test, per
//! tenant) never cross-contaminate. Mutations take `&mut self`, which is
//! the single-writer guarantee: the borrow checker rules out interleaved
//! mutation, and shared deployments wrap the engine in an exclusive or
//! read-write lock at a higher level.

use bomwright_foundation::Result;
use bomwright_storage::{Forest, Node};

use crate::query;
use crate::snapshot::SnapshotStore;

/// A bill-of-materials engine: live forest state and named project snapshots.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    live: Forest,
    snapshots: SnapshotStore,
}

impl Engine {
    /// Creates a new engine with an empty forest and no snapshots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the live forest for read access.
    #[must_use]
    pub fn forest(&self) -> &Forest {
        &self.live
    }

    /// Returns the snapshot store for read access.
    #[must_use]
    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    // --- Mutations ---

    /// Creates a new orphan Part.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if a Part already has that name.
    pub fn create_part(&mut self, name: impl Into<String>) -> Result<()> {
        self.live.create_part(name)
    }

    /// Creates a new Assembly from existing parts and subassemblies.
    ///
    /// See [`Forest::create_assembly`] for the precondition order and
    /// atomicity guarantee.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists`, `NoPartsExist`, `NotFound`,
    /// `AlreadyHasParent`, or `NoAssembliesExist`.
    pub fn create_assembly(
        &mut self,
        name: impl Into<String>,
        part_names: &[&str],
        subassembly_names: &[&str],
    ) -> Result<()> {
        self.live
            .create_assembly(name, part_names, subassembly_names)
    }

    /// Attaches an orphan Part to an Assembly.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `AlreadyAttached`.
    pub fn attach_part(&mut self, part_name: &str, assembly_name: &str) -> Result<()> {
        self.live.attach_part(part_name, assembly_name)
    }

    /// Detaches a Part from the Assembly that owns it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `NotAChild`.
    pub fn detach_part(&mut self, part_name: &str, assembly_name: &str) -> Result<()> {
        self.live.detach_part(part_name, assembly_name)
    }

    /// Deletes a Part, detaching it first if attached.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no Part has that name.
    pub fn delete_part(&mut self, name: &str) -> Result<()> {
        self.live.delete_part(name)
    }

    // --- Projects ---

    /// Saves the live forest as a named project snapshot, then clears the
    /// live forest.
    ///
    /// Save-and-clear is one operation by design: it is the checkpoint-
    /// and-reset primitive, not two independent steps. Any prior snapshot
    /// of the same name is overwritten.
    pub fn save_project(&mut self, project_name: impl Into<String>) {
        self.snapshots.save(project_name, &self.live);
        self.live = Forest::new();
    }

    /// Replaces the live forest with a copy of the named snapshot.
    ///
    /// The prior live state is discarded, not merged. The snapshot is
    /// untouched and can be restored again later.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if no snapshot has that name.
    pub fn restore_project(&mut self, project_name: &str) -> Result<()> {
        self.live = self.snapshots.restore(project_name)?;
        Ok(())
    }

    // --- Lookups ---

    /// Gets a Part by name, or `None` if absent.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&Node> {
        self.live.part(name)
    }

    /// Gets an Assembly by name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no assembly has that name.
    pub fn assembly(&self, name: &str) -> Result<&Node> {
        self.live.assembly(name)
    }

    /// Iterates all Parts in name order.
    pub fn parts(&self) -> impl Iterator<Item = &Node> {
        self.live.parts()
    }

    /// Iterates all Assemblies in name order.
    pub fn assemblies(&self) -> impl Iterator<Item = &Node> {
        self.live.assemblies()
    }

    // --- Queries ---

    /// Returns a part's chain of enclosing assemblies, nearest first.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no Part has that name.
    pub fn ancestors(&self, part_name: &str) -> Result<Vec<&Node>> {
        query::ancestors(&self.live, part_name)
    }

    /// Returns every node under an assembly, depth-first in attach order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no Assembly has that name.
    pub fn descendants(&self, assembly_name: &str) -> Result<Vec<&Node>> {
        query::descendants(&self.live, assembly_name)
    }

    /// Returns an assembly's immediate children.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no Assembly has that name.
    pub fn first_level_children(&self, assembly_name: &str) -> Result<Vec<&Node>> {
        query::first_level_children(&self.live, assembly_name)
    }

    /// Returns an assembly's childless descendants.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no Assembly has that name.
    pub fn leaves(&self, assembly_name: &str) -> Result<Vec<&Node>> {
        query::leaves(&self.live, assembly_name)
    }

    /// Returns all top-level Assemblies (forest roots).
    #[must_use]
    pub fn top_level(&self) -> Vec<&Node> {
        query::top_level(&self.live)
    }

    /// Returns all Assemblies that have a parent.
    #[must_use]
    pub fn subassemblies(&self) -> Vec<&Node> {
        query::subassemblies(&self.live)
    }

    /// Returns all Parts attached to some assembly.
    #[must_use]
    pub fn component_parts(&self) -> Vec<&Node> {
        query::component_parts(&self.live)
    }

    /// Returns all Parts with neither parent nor children.
    #[must_use]
    pub fn orphan_parts(&self) -> Vec<&Node> {
        query::orphan_parts(&self.live)
    }
}
