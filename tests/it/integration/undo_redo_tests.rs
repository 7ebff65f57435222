//! Undo/Redo workflow tests.

use letterboard::store::{Action, ElementPatch};

use crate::helpers::{assert_element_count, id_by_content, store_with_text, store_with_texts};

#[test]
fn test_undo_redo_add_remove_sequence() {
    let mut store = store_with_texts(&["Item A", "Item B", "Item C"]);
    assert_element_count(&store, 3);

    store.dispatch(Action::RemoveElement(id_by_content(&store, "Item B")));
    assert_element_count(&store, 2);

    store.undo();
    assert_element_count(&store, 3);

    store.redo();
    assert_element_count(&store, 2);
}

#[test]
fn test_undo_redo_position_changes() {
    let mut store = store_with_text("Movable");
    let id = id_by_content(&store, "Movable");

    store.dispatch(Action::MoveElements {
        ids: vec![id.clone()],
        dx_mm: 90.0,
        dy_mm: 90.0,
    });
    store.dispatch(Action::MoveElements {
        ids: vec![id.clone()],
        dx_mm: 100.0,
        dy_mm: 100.0,
    });
    let el = store.present().element(&id).unwrap();
    assert_eq!((el.x, el.y), (200.0, 200.0));

    store.undo();
    let el = store.present().element(&id).unwrap();
    assert_eq!((el.x, el.y), (100.0, 100.0));

    store.undo();
    let el = store.present().element(&id).unwrap();
    assert_eq!((el.x, el.y), (10.0, 10.0));
}

#[test]
fn test_undo_redo_content_changes() {
    let mut store = store_with_text("Version 1");
    let id = id_by_content(&store, "Version 1");

    store.dispatch(Action::UpdateElement {
        id: id.clone(),
        changes: ElementPatch::content("Version 2"),
    });
    store.dispatch(Action::UpdateElement {
        id: id.clone(),
        changes: ElementPatch::content("Version 3"),
    });

    store.undo();
    assert_eq!(store.present().element(&id).unwrap().content, "Version 2");

    store.undo();
    assert_eq!(store.present().element(&id).unwrap().content, "Version 1");
}

#[test]
fn test_branch_pruning_on_new_action() {
    let mut store = store_with_texts(&["A", "B", "C"]);

    store.undo();
    store.undo();
    assert_element_count(&store, 1);

    store.dispatch(Action::AddElement(crate::helpers::text_spec(
        "D", 90.0, 10.0,
    )));
    assert!(!store.redo());
    assert_element_count(&store, 2);
}

#[test]
fn test_undo_at_boundary_keeps_state() {
    let mut store = store_with_text("Only item");
    store.undo();
    assert_element_count(&store, 0);

    for _ in 0..10 {
        assert!(!store.undo());
        assert_element_count(&store, 0);
    }
}
