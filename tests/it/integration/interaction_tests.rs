//! Interaction controller tests: drag, resize, marquee, context menus.
//!
//! Pointer positions are page-relative screen pixels, so tests derive them
//! from mm coordinates at the current zoom.

use letterboard::geometry::{PxPoint, mm_to_px};
use letterboard::input::{ContextMenu, InteractionController, Modifiers, PointerButton};
use letterboard::store::Action;
use letterboard::types::ElementKind;

use crate::helpers::{
    TestDocumentBuilder, assert_element_count, assert_selection, id_by_content, store_with_text,
    text_spec,
};

fn px(x_mm: f32, y_mm: f32) -> PxPoint {
    PxPoint::new(mm_to_px(x_mm), mm_to_px(y_mm))
}

fn primary_down(
    controller: &mut InteractionController,
    store: &mut letterboard::EditorStore,
    pos: PxPoint,
) {
    controller.pointer_down(store, 0, pos, PointerButton::Primary, Modifiers::default());
}

// ============================================================================
// Dragging
// ============================================================================

#[test]
fn test_drag_batches_into_one_history_entry() {
    let mut store = store_with_text("A");
    let id = id_by_content(&store, "A");
    let mut controller = InteractionController::new();
    let history = store.history_len();

    // Element body spans (10,10)-(90,20) mm
    primary_down(&mut controller, &mut store, px(50.0, 15.0));
    assert_selection(&store, &[id.clone()]);
    assert!(controller.state().is_dragging());
    // Selection is transient, no history entry yet
    assert_eq!(store.history_len(), history);

    // Intermediate moves only update the visual preview
    controller.pointer_move(&mut store, px(55.0, 15.0));
    controller.pointer_move(&mut store, px(60.0, 15.0));
    assert_eq!(store.present().element(&id).unwrap().x, 10.0);
    assert!(controller.visual_offset().is_some());

    controller.pointer_up(&mut store, px(60.0, 25.0));
    assert!(controller.state().is_idle());
    assert_eq!(store.history_len(), history + 1);

    let el = store.present().element(&id).unwrap();
    assert!((el.x - 20.0).abs() < 1e-3);
    assert!((el.y - 20.0).abs() < 1e-3);
}

#[test]
fn test_drag_with_zero_delta_dispatches_nothing() {
    let mut store = store_with_text("A");
    let id = id_by_content(&store, "A");
    let mut controller = InteractionController::new();
    let history = store.history_len();

    let pos = px(50.0, 15.0);
    primary_down(&mut controller, &mut store, pos);
    controller.pointer_up(&mut store, pos);

    assert_eq!(store.history_len(), history);
    assert_eq!(store.present().element(&id).unwrap().x, 10.0);
}

#[test]
fn test_group_drag_moves_every_selected_element() {
    let mut store = TestDocumentBuilder::new()
        .with_text("A", (10.0, 10.0))
        .with_text("B", (10.0, 40.0))
        .build();
    let id_a = id_by_content(&store, "A");
    let id_b = id_by_content(&store, "B");
    let mut controller = InteractionController::new();

    // Click A, then extend-click B for a multi-selection
    primary_down(&mut controller, &mut store, px(50.0, 15.0));
    controller.pointer_up(&mut store, px(50.0, 15.0));
    controller.pointer_down(
        &mut store,
        0,
        px(50.0, 45.0),
        PointerButton::Primary,
        Modifiers { extend: true },
    );
    controller.pointer_up(&mut store, px(50.0, 45.0));
    assert_selection(&store, &[id_a.clone(), id_b.clone()]);

    // Drag from A; the whole selection moves in one history entry
    let history = store.history_len();
    primary_down(&mut controller, &mut store, px(50.0, 15.0));
    controller.pointer_move(&mut store, px(60.0, 15.0));
    controller.pointer_up(&mut store, px(60.0, 15.0));

    assert_eq!(store.history_len(), history + 1);
    assert!((store.present().element(&id_a).unwrap().x - 20.0).abs() < 1e-3);
    assert!((store.present().element(&id_b).unwrap().x - 20.0).abs() < 1e-3);
}

#[test]
fn test_extend_click_deselects_without_starting_drag() {
    let mut store = store_with_text("A");
    let id = id_by_content(&store, "A");
    let mut controller = InteractionController::new();

    store.dispatch(Action::SelectElement(Some(id.clone())));
    controller.pointer_down(
        &mut store,
        0,
        px(50.0, 15.0),
        PointerButton::Primary,
        Modifiers { extend: true },
    );

    assert!(store.present().selected_ids.is_empty());
    assert!(controller.state().is_idle());
}

#[test]
fn test_drag_respects_zoom() {
    let mut store = TestDocumentBuilder::new()
        .with_text("A", (10.0, 10.0))
        .with_zoom(2.0)
        .build();
    let id = id_by_content(&store, "A");
    let mut controller = InteractionController::new();

    // At zoom 2.0 every screen pixel is worth half as many mm
    let body = PxPoint::new(mm_to_px(50.0) * 2.0, mm_to_px(15.0) * 2.0);
    primary_down(&mut controller, &mut store, body);
    let target = PxPoint::new(body.x + mm_to_px(10.0) * 2.0, body.y);
    controller.pointer_up(&mut store, target);

    assert!((store.present().element(&id).unwrap().x - 20.0).abs() < 1e-3);
}

// ============================================================================
// Resizing
// ============================================================================

#[test]
fn test_resize_dispatches_live_updates() {
    let mut store = store_with_text("A");
    let id = id_by_content(&store, "A");
    store.dispatch(Action::SelectElement(Some(id.clone())));
    let mut controller = InteractionController::new();

    // Bottom-right corner of (10,10)-(90,20)
    let corner = px(90.0, 20.0);
    primary_down(&mut controller, &mut store, corner);
    assert!(controller.state().is_resizing());

    controller.pointer_move(
        &mut store,
        PxPoint::new(corner.x + mm_to_px(10.0), corner.y + mm_to_px(5.0)),
    );
    // The element already grew, before pointer up
    let el = store.present().element(&id).unwrap();
    assert!((el.width - 90.0).abs() < 1e-2);
    assert!((el.height - 15.0).abs() < 1e-2);

    controller.pointer_up(&mut store, PxPoint::new(corner.x + mm_to_px(10.0), corner.y));
    assert!(controller.state().is_idle());
}

#[test]
fn test_resize_clamps_to_minimum_floor() {
    let mut store = store_with_text("A");
    let id = id_by_content(&store, "A");
    store.dispatch(Action::SelectElement(Some(id.clone())));
    let mut controller = InteractionController::new();

    let corner = px(90.0, 20.0);
    primary_down(&mut controller, &mut store, corner);
    controller.pointer_move(
        &mut store,
        PxPoint::new(corner.x - mm_to_px(500.0), corner.y - mm_to_px(500.0)),
    );

    let el = store.present().element(&id).unwrap();
    assert_eq!(el.width, 10.0);
    assert_eq!(el.height, 5.0);
}

#[test]
fn test_resize_handle_requires_selection() {
    let mut store = store_with_text("A");
    let mut controller = InteractionController::new();

    // Corner press on an unselected element falls through to a body hit
    primary_down(&mut controller, &mut store, px(90.0, 20.0));
    assert!(controller.state().is_dragging());
}

// ============================================================================
// Marquee selection
// ============================================================================

#[test]
fn test_marquee_selects_intersecting_elements_only() {
    let mut store = TestDocumentBuilder::new()
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .with_rect(20.0, 20.0, 10.0, 10.0)
        .build();
    let ids = crate::helpers::element_ids(&store);
    let mut controller = InteractionController::new();

    // (15,15) is empty canvas; sweep back to the origin
    primary_down(&mut controller, &mut store, px(15.0, 15.0));
    assert!(controller.state().is_marquee_selecting());
    controller.pointer_move(&mut store, px(5.0, 5.0));
    controller.pointer_up(&mut store, px(0.0, 0.0));

    assert_selection(&store, &ids[0..1]);

    // A larger sweep catches both
    primary_down(&mut controller, &mut store, px(35.0, 35.0));
    controller.pointer_up(&mut store, px(0.0, 0.0));
    assert_selection(&store, &ids);
}

#[test]
fn test_marquee_replaces_previous_selection() {
    let mut store = TestDocumentBuilder::new()
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .with_rect(50.0, 50.0, 10.0, 10.0)
        .build();
    let ids = crate::helpers::element_ids(&store);
    let mut controller = InteractionController::new();

    store.dispatch(Action::SelectElement(Some(ids[1].clone())));

    primary_down(&mut controller, &mut store, px(15.0, 15.0));
    controller.pointer_up(&mut store, px(0.0, 0.0));

    // Replaced, not unioned
    assert_selection(&store, &ids[0..1]);
}

#[test]
fn test_marquee_stays_on_its_page() {
    let mut store = TestDocumentBuilder::new()
        .with_pages(2)
        .with_spec(text_spec("other page", 5.0, 5.0).on_page(1))
        .build();
    let mut controller = InteractionController::new();

    // Sweep page 0 over the same mm region
    primary_down(&mut controller, &mut store, px(30.0, 30.0));
    controller.pointer_up(&mut store, px(0.0, 0.0));

    assert!(store.present().selected_ids.is_empty());
}

#[test]
fn test_tiny_marquee_is_a_background_click() {
    let mut store = store_with_text("A");
    let id = id_by_content(&store, "A");
    store.dispatch(Action::SelectElement(Some(id)));
    let mut controller = InteractionController::new();

    let start = px(150.0, 150.0);
    primary_down(&mut controller, &mut store, start);
    controller.pointer_up(&mut store, PxPoint::new(start.x + 2.0, start.y + 2.0));

    assert!(store.present().selected_ids.is_empty());
}

// ============================================================================
// Context menus
// ============================================================================

#[test]
fn test_context_menu_on_element_offers_delete() {
    let mut store = store_with_text("A");
    let id = id_by_content(&store, "A");
    let mut controller = InteractionController::new();

    controller.pointer_down(
        &mut store,
        0,
        px(50.0, 15.0),
        PointerButton::Secondary,
        Modifiers::default(),
    );
    assert_eq!(
        controller.context_menu(),
        Some(&ContextMenu::Element { id: id.clone() })
    );

    assert!(controller.delete_from_menu(&mut store));
    assert_element_count(&store, 0);
    assert!(controller.context_menu().is_none());
}

#[test]
fn test_context_menu_on_canvas_inserts_at_anchor() {
    let mut store = store_with_text("A");
    let mut controller = InteractionController::new();

    controller.pointer_down(
        &mut store,
        0,
        px(100.0, 120.0),
        PointerButton::Secondary,
        Modifiers::default(),
    );
    assert!(matches!(
        controller.context_menu(),
        Some(ContextMenu::Canvas { page: 0, .. })
    ));

    // Delete helper refuses on an insert menu
    assert!(!controller.delete_from_menu(&mut store));

    assert!(controller.insert_from_menu(
        &mut store,
        text_spec("inserted", 0.0, 0.0)
    ));
    assert_element_count(&store, 2);

    let inserted = id_by_content(&store, "inserted");
    let el = store.present().element(&inserted).unwrap();
    assert!((el.x - 100.0).abs() < 1e-2);
    assert!((el.y - 120.0).abs() < 1e-2);
    assert_eq!(el.kind, ElementKind::Text);
    // Insert auto-selects, and the menu is gone
    assert_selection(&store, &[inserted]);
    assert!(controller.context_menu().is_none());
}

#[test]
fn test_any_press_dismisses_open_menu() {
    let mut store = store_with_text("A");
    let mut controller = InteractionController::new();

    controller.pointer_down(
        &mut store,
        0,
        px(150.0, 150.0),
        PointerButton::Secondary,
        Modifiers::default(),
    );
    assert!(controller.context_menu().is_some());

    primary_down(&mut controller, &mut store, px(50.0, 15.0));
    assert!(controller.context_menu().is_none());

    controller.pointer_up(&mut store, px(50.0, 15.0));

    // Explicit dismissal (e.g. Escape) also closes the menu
    controller.pointer_down(
        &mut store,
        0,
        px(150.0, 150.0),
        PointerButton::Secondary,
        Modifiers::default(),
    );
    assert!(controller.context_menu().is_some());
    controller.dismiss_menu();
    assert!(controller.context_menu().is_none());
}
