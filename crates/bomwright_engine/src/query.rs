//! Read-only traversals over a forest.
//!
//! Every function here observes the forest without mutating it. Traversal
//! order is deterministic: descendants are depth-first with children in
//! attach order, and whole-forest scans follow the store's name order.
//!
//! Any query against an unknown name fails with `NotFound`.

use bomwright_foundation::{NodeKind, Result};
use bomwright_storage::{Forest, Node};

/// Returns a part's chain of enclosing assemblies, nearest first.
///
/// Empty if the part is an orphan.
///
/// # Errors
///
/// Returns `NotFound` if no Part has that name.
pub fn ancestors<'a>(forest: &'a Forest, part_name: &str) -> Result<Vec<&'a Node>> {
    let part = forest.store().get(NodeKind::Part, part_name)?;
    let mut chain = Vec::new();
    let mut current = part.parent();
    while let Some(assembly_name) = current {
        let assembly = forest.assembly(assembly_name)?;
        chain.push(assembly);
        current = assembly.parent();
    }
    Ok(chain)
}

/// Returns every node reachable from an assembly's children, recursively.
///
/// Depth-first, children in attach order. The assembly itself is not
/// included.
///
/// # Errors
///
/// Returns `NotFound` if no Assembly has that name.
pub fn descendants<'a>(forest: &'a Forest, assembly_name: &str) -> Result<Vec<&'a Node>> {
    let assembly = forest.assembly(assembly_name)?;
    let mut out = Vec::new();
    collect_descendants(forest, assembly, &mut out)?;
    Ok(out)
}

fn collect_descendants<'a>(
    forest: &'a Forest,
    node: &'a Node,
    out: &mut Vec<&'a Node>,
) -> Result<()> {
    for child_ref in node.children() {
        let child = forest.store().resolve(child_ref)?;
        out.push(child);
        collect_descendants(forest, child, out)?;
    }
    Ok(())
}

/// Returns an assembly's immediate children, one level deep, in attach order.
///
/// # Errors
///
/// Returns `NotFound` if no Assembly has that name.
pub fn first_level_children<'a>(forest: &'a Forest, assembly_name: &str) -> Result<Vec<&'a Node>> {
    let assembly = forest.assembly(assembly_name)?;
    assembly
        .children()
        .map(|child_ref| forest.store().resolve(child_ref))
        .collect()
}

/// Returns an assembly's descendants that have no children of their own.
///
/// The check is structural (empty child list), not a kind check, so this
/// stays correct even if non-Part leaves ever become possible.
///
/// # Errors
///
/// Returns `NotFound` if no Assembly has that name.
pub fn leaves<'a>(forest: &'a Forest, assembly_name: &str) -> Result<Vec<&'a Node>> {
    Ok(descendants(forest, assembly_name)?
        .into_iter()
        .filter(|node| node.is_leaf())
        .collect())
}

/// Returns all Assemblies with no parent (the forest roots), in name order.
#[must_use]
pub fn top_level(forest: &Forest) -> Vec<&Node> {
    forest.assemblies().filter(|a| a.is_orphan()).collect()
}

/// Returns all Assemblies with a parent, in name order.
#[must_use]
pub fn subassemblies(forest: &Forest) -> Vec<&Node> {
    forest.assemblies().filter(|a| !a.is_orphan()).collect()
}

/// Returns all Parts that are attached to some assembly, in name order.
#[must_use]
pub fn component_parts(forest: &Forest) -> Vec<&Node> {
    forest.parts().filter(|p| !p.is_orphan()).collect()
}

/// Returns all Parts with neither parent nor children, in name order.
///
/// Parts never gain children through any documented operation, so "no
/// parent" alone would give the same answer today; both conditions are
/// checked so the query stays correct if that ever changes.
#[must_use]
pub fn orphan_parts(forest: &Forest) -> Vec<&Node> {
    forest
        .parts()
        .filter(|p| p.is_orphan() && p.is_leaf())
        .collect()
}
