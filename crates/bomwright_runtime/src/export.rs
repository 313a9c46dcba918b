//! `{id, children: [...]}` interchange for forest subtrees.
//!
//! A node exports as an object with its name under `id` and its subtree
//! under `children`, recursively; the `children` key is omitted for
//! leaves. External renderers and importers that speak this shape can
//! reconstruct the tree without knowing anything else about the engine.

use serde::{Deserialize, Serialize};

use bomwright_foundation::{Error, NodeKind, Result};
use bomwright_storage::{Forest, Node};

/// A detached, serializable copy of a node and its subtree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// The node's name.
    pub id: String,
    /// The subtree, in attach order. Empty for leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a leaf tree node.
    #[must_use]
    pub fn leaf(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    /// Serializes this subtree to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Parses a subtree from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the input is not valid interchange JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::serialization(e.to_string()))
    }
}

/// Exports a stored node and its entire subtree.
///
/// # Errors
///
/// Returns `NotFound` if no node of the given kind has that name.
pub fn export_tree(forest: &Forest, kind: NodeKind, name: &str) -> Result<TreeNode> {
    let node = forest.store().get(kind, name)?;
    export_node(forest, node)
}

/// Exports an already-resolved node and its subtree.
///
/// # Errors
///
/// Returns `NotFound` if a child reference cannot be resolved, which
/// would indicate a broken store invariant.
pub fn export_node(forest: &Forest, node: &Node) -> Result<TreeNode> {
    let children = node
        .children()
        .map(|child_ref| {
            let child = forest.store().resolve(child_ref)?;
            export_node(forest, child)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(TreeNode {
        id: node.name().to_string(),
        children,
    })
}

/// Exports a list of nodes, each with its subtree.
///
/// # Errors
///
/// Returns `NotFound` if any child reference cannot be resolved.
pub fn export_list<'a>(
    forest: &Forest,
    nodes: impl IntoIterator<Item = &'a Node>,
) -> Result<Vec<TreeNode>> {
    nodes
        .into_iter()
        .map(|node| export_node(forest, node))
        .collect()
}
