//! Integration tests for the forest mutation protocol.
//!
//! Tests the attach/detach/create/delete operations, their precondition
//! order, and atomicity of composite creation.

use bomwright_foundation::{ErrorKind, NodeKind};
use bomwright_storage::Forest;

fn forest_with_parts(names: &[&str]) -> Forest {
    let mut forest = Forest::new();
    for name in names {
        forest.create_part(*name).unwrap();
    }
    forest
}

fn child_names(forest: &Forest, assembly: &str) -> Vec<String> {
    forest
        .assembly(assembly)
        .unwrap()
        .children()
        .map(|c| c.name.clone())
        .collect()
}

// =============================================================================
// Part Creation
// =============================================================================

#[test]
fn created_parts_start_parentless() {
    let forest = forest_with_parts(&["spring"]);
    let part = forest.part("spring").unwrap();
    assert!(part.is_orphan());
    assert!(part.is_leaf());
}

#[test]
fn duplicate_part_name_is_rejected() {
    let mut forest = forest_with_parts(&["spring"]);
    let err = forest.create_part("spring").unwrap_err();
    assert!(err.is_conflict());
}

// =============================================================================
// Assembly Creation
// =============================================================================

#[test]
fn create_assembly_sets_parents_and_children() {
    let mut forest = forest_with_parts(&["a", "b"]);
    forest.create_assembly("x", &["a", "b"], &[]).unwrap();

    assert_eq!(child_names(&forest, "x"), ["a", "b"]);
    assert_eq!(forest.part("a").unwrap().parent(), Some("x"));
    assert_eq!(forest.part("b").unwrap().parent(), Some("x"));
    assert!(forest.assembly("x").unwrap().is_orphan());
}

#[test]
fn create_assembly_requires_some_part_to_exist() {
    let mut forest = Forest::new();
    let err = forest.create_assembly("x", &[], &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoPartsExist));
}

#[test]
fn create_assembly_with_unknown_part_fails() {
    let mut forest = forest_with_parts(&["a"]);
    let err = forest.create_assembly("x", &["ghost"], &[]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::NotFound {
            kind: NodeKind::Part,
            ..
        }
    ));
}

#[test]
fn create_assembly_with_attached_part_is_atomic() {
    let mut forest = forest_with_parts(&["a", "b"]);
    forest.create_assembly("x", &["a"], &[]).unwrap();

    let before = forest.clone();
    let err = forest.create_assembly("z", &["b", "a"], &[]).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::AlreadyHasParent { .. }));
    // Nothing was created or re-parented, not even for b which passed its check
    assert_eq!(forest, before);
    assert!(forest.assembly("z").is_err());
    assert!(forest.part("b").unwrap().is_orphan());
}

#[test]
fn create_assembly_with_unknown_subassembly_fails() {
    let mut forest = forest_with_parts(&["a"]);
    forest.create_assembly("x", &["a"], &[]).unwrap();
    forest.create_part("b").unwrap();

    let err = forest.create_assembly("y", &["b"], &["ghost"]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::NotFound {
            kind: NodeKind::Assembly,
            ..
        }
    ));
}

#[test]
fn create_assembly_nests_parentless_subassemblies() {
    let mut forest = forest_with_parts(&["a", "b"]);
    forest.create_assembly("inner", &["a"], &[]).unwrap();
    forest.create_assembly("outer", &["b"], &["inner"]).unwrap();

    assert_eq!(forest.assembly("inner").unwrap().parent(), Some("outer"));
    assert_eq!(child_names(&forest, "outer"), ["b", "inner"]);
}

#[test]
fn create_assembly_with_nested_subassembly_fails() {
    let mut forest = forest_with_parts(&["a", "b", "c"]);
    forest.create_assembly("inner", &["a"], &[]).unwrap();
    forest.create_assembly("outer", &["b"], &["inner"]).unwrap();

    let err = forest.create_assembly("z", &["c"], &["inner"]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::AlreadyHasParent {
            kind: NodeKind::Assembly,
            ..
        }
    ));
}

// =============================================================================
// Attach / Detach
// =============================================================================

#[test]
fn attach_then_detach_restores_orphanhood() {
    let mut forest = forest_with_parts(&["a", "b"]);
    forest.create_assembly("x", &["a"], &[]).unwrap();

    forest.attach_part("b", "x").unwrap();
    assert_eq!(forest.part("b").unwrap().parent(), Some("x"));
    assert_eq!(child_names(&forest, "x"), ["a", "b"]);

    forest.detach_part("b", "x").unwrap();
    assert!(forest.part("b").unwrap().is_orphan());
    assert_eq!(child_names(&forest, "x"), ["a"]);
}

#[test]
fn reattach_after_detach_appends_at_the_end() {
    let mut forest = forest_with_parts(&["a", "b", "c"]);
    forest.create_assembly("x", &["a", "b", "c"], &[]).unwrap();

    forest.detach_part("a", "x").unwrap();
    forest.attach_part("a", "x").unwrap();

    assert_eq!(child_names(&forest, "x"), ["b", "c", "a"]);
}

#[test]
fn attach_unknown_part_fails() {
    let mut forest = forest_with_parts(&["a"]);
    forest.create_assembly("x", &["a"], &[]).unwrap();

    let err = forest.attach_part("ghost", "x").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn attach_to_unknown_assembly_fails() {
    let mut forest = forest_with_parts(&["a"]);
    let err = forest.attach_part("a", "ghost").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn detach_never_silently_succeeds_for_non_children() {
    let mut forest = forest_with_parts(&["a", "b"]);
    forest.create_assembly("x", &["b"], &[]).unwrap();

    // a is an orphan, not a child of x
    let err = forest.detach_part("a", "x").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotAChild { .. }));
}

// =============================================================================
// Part Deletion
// =============================================================================

#[test]
fn delete_part_detaches_first() {
    let mut forest = forest_with_parts(&["a", "b"]);
    forest.create_assembly("x", &["a", "b"], &[]).unwrap();

    forest.delete_part("b").unwrap();

    assert!(forest.part("b").is_none());
    assert_eq!(child_names(&forest, "x"), ["a"]);
}

#[test]
fn deleted_part_name_can_be_reused() {
    let mut forest = forest_with_parts(&["a"]);
    forest.delete_part("a").unwrap();
    forest.create_part("a").unwrap();
    assert!(forest.part("a").unwrap().is_orphan());
}

// =============================================================================
// Structural Invariants
// =============================================================================

#[test]
fn every_parent_reference_is_a_stored_assembly() {
    let mut forest = forest_with_parts(&["a", "b", "c"]);
    forest.create_assembly("inner", &["a"], &[]).unwrap();
    forest.create_assembly("outer", &["b"], &["inner"]).unwrap();
    forest.attach_part("c", "inner").unwrap();

    for node in forest.parts().chain(forest.assemblies()) {
        if let Some(parent) = node.parent() {
            let parent_node = forest.assembly(parent).unwrap();
            assert!(parent_node.has_child(&node.node_ref()));
        }
    }
}

#[test]
fn each_node_is_a_child_of_at_most_one_parent() {
    let mut forest = forest_with_parts(&["a", "b"]);
    forest.create_assembly("x", &["a"], &[]).unwrap();
    forest.create_assembly("y", &["b"], &[]).unwrap();

    for part in ["a", "b"] {
        let node_ref = forest.part(part).unwrap().node_ref();
        let owners = forest
            .assemblies()
            .filter(|a| a.has_child(&node_ref))
            .count();
        assert_eq!(owners, 1, "part {part} should have exactly one owner");
    }
}
