//! Named, isolated captures of forest state.
//!
//! A [`Snapshot`] is a full copy of a forest at the moment of capture.
//! The store's maps are persistent structures, so capture is O(1); any
//! later write to either side copies the touched nodes first, which keeps
//! every snapshot fully isolated from the live state and from each other.

use std::collections::HashMap;

use bomwright_foundation::{Error, Result};
use bomwright_storage::Forest;

/// An immutable capture of an entire forest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    forest: Forest,
}

impl Snapshot {
    /// Captures the given forest.
    #[must_use]
    pub fn capture(forest: &Forest) -> Self {
        Self {
            forest: forest.clone(),
        }
    }

    /// Returns the captured forest for inspection.
    #[must_use]
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Produces an independent copy of the captured forest.
    ///
    /// The snapshot itself is untouched and can be restored again.
    #[must_use]
    pub fn restore(&self) -> Forest {
        self.forest.clone()
    }
}

/// Holds snapshots keyed by project name.
///
/// Snapshots persist for the life of the store with no expiry; saving
/// under a taken name overwrites the prior capture.
#[derive(Clone, Debug, Default)]
pub struct SnapshotStore {
    projects: HashMap<String, Snapshot>,
}

impl SnapshotStore {
    /// Creates a new empty snapshot store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures a forest under the given project name.
    ///
    /// Overwrites any prior snapshot of the same name.
    pub fn save(&mut self, project_name: impl Into<String>, forest: &Forest) {
        self.projects
            .insert(project_name.into(), Snapshot::capture(forest));
    }

    /// Gets the snapshot saved under a project name, if any.
    #[must_use]
    pub fn get(&self, project_name: &str) -> Option<&Snapshot> {
        self.projects.get(project_name)
    }

    /// Copies the named snapshot back out as a live forest.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if no snapshot has that name.
    pub fn restore(&self, project_name: &str) -> Result<Forest> {
        self.projects
            .get(project_name)
            .map(Snapshot::restore)
            .ok_or_else(|| Error::project_not_found(project_name))
    }

    /// Checks whether a project name has a snapshot.
    #[must_use]
    pub fn contains(&self, project_name: &str) -> bool {
        self.projects.contains_key(project_name)
    }

    /// Returns the number of saved snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns true if no snapshots are saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Iterates saved project names in arbitrary order.
    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }
}
