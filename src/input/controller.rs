//! Interaction controller - translates raw pointer events into dispatched
//! actions.
//!
//! Pointer positions arrive in screen pixels relative to the page's top-left
//! corner, still scaled by the document zoom; the embedding surface resolves
//! which page was hit. The controller never reads or writes document fields
//! directly; every mutation goes through a dispatched action.
//!
//! Drag deltas are accumulated locally and dispatched once on pointer up, so
//! a whole drag produces a single history entry. Resize dispatches live on
//! every move. A gesture with zero net delta dispatches nothing.

use std::collections::HashSet;

use crate::constants::{MIN_ELEMENT_HEIGHT_MM, MIN_ELEMENT_WIDTH_MM, MIN_MARQUEE_SIZE_PX, RESIZE_HANDLE_SIZE_PX};
use crate::geometry::{MmPoint, MmRect, PxPoint, mm_to_px, px_to_mm};
use crate::input::state::InputState;
use crate::spatial_index::SpatialIndex;
use crate::store::{Action, EditorStore, ElementPatch};
use crate::types::{DocumentState, ElementId, ElementSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Modifier keys relevant to selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Extend/toggle the selection instead of replacing it
    pub extend: bool,
}

/// The one context menu that may be open at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum ContextMenu {
    /// Insert menu, anchored at a page-relative mm coordinate
    Canvas { page: usize, position: MmPoint },
    /// Delete menu for one element
    Element { id: ElementId },
}

/// Per-gesture pointer state machine plus context-menu bookkeeping.
pub struct InteractionController {
    state: InputState,
    context_menu: Option<ContextMenu>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            state: InputState::Idle,
            context_menu: None,
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    /// The current drag preview offset in screen pixels, if dragging.
    pub fn visual_offset(&self) -> Option<PxPoint> {
        self.state.visual_offset()
    }

    pub fn pointer_down(
        &mut self,
        store: &mut EditorStore,
        page: usize,
        pos: PxPoint,
        button: PointerButton,
        modifiers: Modifiers,
    ) {
        // Any press dismisses an open context menu before anything else
        self.context_menu = None;

        let zoom = store.present().zoom;
        let mm = pos.to_mm(zoom);
        let topmost = topmost_element_at(store.present(), page, mm);

        if button == PointerButton::Secondary {
            self.context_menu = Some(match topmost {
                Some(id) => ContextMenu::Element { id },
                None => ContextMenu::Canvas { page, position: mm },
            });
            return;
        }

        // Resize handles belong to selected elements and extend slightly past
        // the bottom-right corner, so they win over the body hit.
        if let Some((id, start_size)) = handle_under_pointer(store.present(), page, pos, zoom) {
            tracing::debug!(element = %id, "resize gesture started");
            self.state.start_resizing(id, start_size, pos);
            return;
        }

        match topmost {
            Some(id) => {
                let was_selected = store.present().is_selected(&id);
                if modifiers.extend {
                    store.dispatch(Action::ToggleSelection(id.clone()));
                } else if !was_selected {
                    store.dispatch(Action::SelectElement(Some(id.clone())));
                }
                // Clicking an already-selected element without a modifier
                // keeps the selection for a group move.

                if store.present().is_selected(&id) {
                    self.state.start_dragging(id, pos);
                }
            }
            None => self.state.start_marquee(page, pos),
        }
    }

    pub fn pointer_move(&mut self, store: &mut EditorStore, pos: PxPoint) {
        match &self.state {
            InputState::ResizingElement {
                id,
                start_size,
                start,
            } => {
                let zoom = store.present().zoom;
                let dx_mm = px_to_mm((pos.x - start.x) / zoom);
                let dy_mm = px_to_mm((pos.y - start.y) / zoom);

                // Clamp to the minimum floor instead of rejecting the update
                let width = (start_size.0 + dx_mm).max(MIN_ELEMENT_WIDTH_MM);
                let height = (start_size.1 + dy_mm).max(MIN_ELEMENT_HEIGHT_MM);

                let unchanged = store
                    .present()
                    .element(id)
                    .map(|el| el.width == width && el.height == height)
                    .unwrap_or(true);
                if !unchanged {
                    let id = id.clone();
                    store.dispatch(Action::UpdateElement {
                        id,
                        changes: ElementPatch::size(width, height),
                    });
                }
            }
            // Drag and marquee only preview locally until pointer up
            _ => self.state.set_current(pos),
        }
    }

    pub fn pointer_up(&mut self, store: &mut EditorStore, pos: PxPoint) {
        match std::mem::take(&mut self.state) {
            InputState::DraggingElements { start, .. } => {
                let delta = pos - start;
                if delta.x == 0.0 && delta.y == 0.0 {
                    return;
                }
                let zoom = store.present().zoom;
                let ids = store.present().selected_ids.clone();
                if ids.is_empty() {
                    return;
                }
                // One batched move for the whole gesture = one history entry
                store.dispatch(Action::MoveElements {
                    ids,
                    dx_mm: px_to_mm(delta.x / zoom),
                    dy_mm: px_to_mm(delta.y / zoom),
                });
            }

            InputState::MarqueeSelecting { page, start, .. } => {
                let delta = pos - start;
                if delta.x.abs() < MIN_MARQUEE_SIZE_PX && delta.y.abs() < MIN_MARQUEE_SIZE_PX {
                    // Just a click on empty canvas
                    store.dispatch(Action::SelectElement(None));
                    return;
                }

                let zoom = store.present().zoom;
                let rect = MmRect::from_corners(start.to_mm(zoom), pos.to_mm(zoom));
                let index = SpatialIndex::from_elements(&store.present().elements);
                let hits: HashSet<ElementId> = index.query_rect(page, &rect).into_iter().collect();

                // Replace the selection, in document order
                let ids: Vec<ElementId> = store
                    .present()
                    .elements
                    .iter()
                    .filter(|el| hits.contains(&el.id))
                    .map(|el| el.id.clone())
                    .collect();
                store.dispatch(Action::SetSelection(ids));
            }

            // Resize updates were dispatched live on every move
            InputState::ResizingElement { .. } | InputState::Idle => {}
        }
    }

    /// Insert an element at the open canvas menu's anchor. Returns false when
    /// no insert menu is open.
    pub fn insert_from_menu(&mut self, store: &mut EditorStore, spec: ElementSpec) -> bool {
        match self.context_menu.take() {
            Some(ContextMenu::Canvas { page, position }) => {
                let spec = ElementSpec {
                    x: position.x,
                    y: position.y,
                    page,
                    ..spec
                };
                store.dispatch(Action::AddElement(spec));
                true
            }
            other => {
                self.context_menu = other;
                false
            }
        }
    }

    /// Delete the element the open menu points at. Returns false when no
    /// element menu is open.
    pub fn delete_from_menu(&mut self, store: &mut EditorStore) -> bool {
        match self.context_menu.take() {
            Some(ContextMenu::Element { id }) => {
                store.dispatch(Action::RemoveElement(id));
                true
            }
            other => {
                self.context_menu = other;
                false
            }
        }
    }

    pub fn dismiss_menu(&mut self) {
        self.context_menu = None;
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

/// The topmost element on `page` containing the point, checked in reverse
/// z-order against spatial-index candidates.
fn topmost_element_at(doc: &DocumentState, page: usize, point: MmPoint) -> Option<ElementId> {
    let index = SpatialIndex::from_elements(&doc.elements);
    let hits: HashSet<ElementId> = index.query_point(page, point).into_iter().collect();

    doc.elements
        .iter()
        .rev()
        .find(|el| el.page == page && hits.contains(&el.id))
        .map(|el| el.id.clone())
}

/// The selected element whose bottom-right resize handle contains the
/// pointer, if any.
fn handle_under_pointer(
    doc: &DocumentState,
    page: usize,
    pos: PxPoint,
    zoom: f32,
) -> Option<(ElementId, (f32, f32))> {
    doc.elements
        .iter()
        .rev()
        .filter(|el| el.page == page && doc.is_selected(&el.id))
        .find(|el| {
            let corner_x = mm_to_px(el.x + el.width) * zoom;
            let corner_y = mm_to_px(el.y + el.height) * zoom;
            (pos.x - corner_x).abs() <= RESIZE_HANDLE_SIZE_PX
                && (pos.y - corner_y).abs() <= RESIZE_HANDLE_SIZE_PX
        })
        .map(|el| (el.id.clone(), (el.width, el.height)))
}
