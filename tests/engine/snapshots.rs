//! Integration tests for project snapshots.
//!
//! Tests the save-and-clear coupling, restore-as-copy semantics, and the
//! isolation property: no mutation of live state may ever show through a
//! held snapshot.

use bomwright_engine::Engine;

fn built_engine() -> Engine {
    let mut engine = Engine::new();
    for part in ["a", "b", "c"] {
        engine.create_part(part).unwrap();
    }
    engine.create_assembly("inner", &["a"], &[]).unwrap();
    engine
        .create_assembly("outer", &["b"], &["inner"])
        .unwrap();
    engine
}

// =============================================================================
// Save
// =============================================================================

#[test]
fn save_captures_then_clears() {
    let mut engine = built_engine();
    engine.save_project("base");

    assert!(engine.forest().is_empty());
    assert_eq!(engine.parts().count(), 0);
    assert_eq!(engine.assemblies().count(), 0);
    assert!(engine.snapshots().contains("base"));
}

#[test]
fn save_overwrites_same_name() {
    let mut engine = built_engine();
    engine.save_project("base");

    engine.create_part("replacement").unwrap();
    engine.save_project("base");

    engine.restore_project("base").unwrap();
    assert!(engine.part("replacement").is_some());
    assert!(engine.part("a").is_none());
    assert_eq!(engine.snapshots().len(), 1);
}

#[test]
fn save_of_empty_state_is_allowed() {
    let mut engine = Engine::new();
    engine.save_project("blank");

    engine.create_part("a").unwrap();
    engine.restore_project("blank").unwrap();
    assert!(engine.forest().is_empty());
}

// =============================================================================
// Restore
// =============================================================================

#[test]
fn save_then_restore_preserves_topology() {
    let mut engine = built_engine();
    let before = engine.forest().clone();

    engine.save_project("base");
    engine.restore_project("base").unwrap();

    assert_eq!(engine.forest(), &before);
    assert_eq!(engine.part("a").unwrap().parent(), Some("inner"));
    assert_eq!(engine.assembly("inner").unwrap().parent(), Some("outer"));
}

#[test]
fn restore_discards_the_live_state_rather_than_merging() {
    let mut engine = built_engine();
    engine.save_project("base");

    engine.create_part("stray").unwrap();
    engine.restore_project("base").unwrap();

    assert!(engine.part("stray").is_none());
}

#[test]
fn restore_unknown_project_fails() {
    let mut engine = Engine::new();
    assert!(engine.restore_project("ghost").unwrap_err().is_not_found());
}

// =============================================================================
// Isolation
// =============================================================================

#[test]
fn post_restore_mutation_cannot_reach_the_snapshot() {
    let mut engine = built_engine();
    engine.save_project("base");
    engine.restore_project("base").unwrap();

    // Rework the restored state heavily
    engine.detach_part("a", "inner").unwrap();
    engine.delete_part("b").unwrap();
    engine.attach_part("c", "inner").unwrap();

    // The held snapshot still shows the original topology
    let snapshot = engine.snapshots().get("base").unwrap().forest();
    assert_eq!(snapshot.part("a").unwrap().parent(), Some("inner"));
    assert!(snapshot.part("b").is_some());
    assert!(snapshot.part("c").unwrap().is_orphan());
}

#[test]
fn snapshots_are_isolated_from_each_other() {
    let mut engine = built_engine();
    engine.save_project("first");
    engine.restore_project("first").unwrap();

    engine.delete_part("c").unwrap();
    engine.save_project("second");

    let first = engine.snapshots().get("first").unwrap().forest();
    let second = engine.snapshots().get("second").unwrap().forest();
    assert!(first.part("c").is_some());
    assert!(second.part("c").is_none());
}

#[test]
fn restore_can_repeat_from_the_same_snapshot() {
    let mut engine = built_engine();
    engine.save_project("base");

    for _ in 0..3 {
        engine.restore_project("base").unwrap();
        engine.delete_part("c").unwrap();
        // Wipe live state; the snapshot must survive for the next round
        engine.save_project("scratch");
    }

    engine.restore_project("base").unwrap();
    assert!(engine.part("c").is_some());
}
