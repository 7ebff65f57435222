//! The pure transition function over [`DocumentState`].
//!
//! `reduce` takes the current state plus one action and returns the next
//! state, or `None` when the action is a no-op, the signal the history
//! wrapper uses to skip the undo stack. No side effects, no I/O; the only
//! impurity is fresh-id generation for inserted elements.

use crate::constants::{MAX_ZOOM, MIN_ZOOM};
use crate::store::action::Action;
use crate::templates::{HeaderSource, Letterhead};
use crate::types::{DocumentState, ElementCategory, ElementId, Orientation};

/// Reducer with its injected header collaborator.
///
/// Header blocks are produced by an external template source; the reducer
/// only decides when pages need them and assigns fresh ids on insertion.
pub struct DocumentReducer {
    header_source: Box<dyn HeaderSource>,
}

impl DocumentReducer {
    pub fn new(header_source: Box<dyn HeaderSource>) -> Self {
        Self { header_source }
    }

    /// Compute the next state, or `None` for a no-op.
    pub fn reduce(&self, state: &DocumentState, action: &Action) -> Option<DocumentState> {
        tracing::trace!(action = action.label(), "reduce");

        match action {
            Action::RenameDocument(title) => {
                if *title == state.title {
                    return None;
                }
                let mut next = state.clone();
                next.title = title.clone();
                Some(next)
            }

            Action::SetPageSize {
                size,
                width,
                height,
            } => {
                let mut w = state.page_config.width;
                let mut h = state.page_config.height;

                if let Some((pw, ph)) = size.dimensions() {
                    if state.page_config.orientation == Orientation::Landscape {
                        w = ph;
                        h = pw;
                    } else {
                        w = pw;
                        h = ph;
                    }
                } else if let (Some(cw), Some(ch)) = (width, height) {
                    // Custom with missing explicit dimensions keeps the
                    // current ones
                    w = *cw;
                    h = *ch;
                }

                if *size == state.page_config.size
                    && w == state.page_config.width
                    && h == state.page_config.height
                {
                    return None;
                }

                let mut next = state.clone();
                next.page_config.size = *size;
                next.page_config.width = w;
                next.page_config.height = h;
                Some(next)
            }

            Action::SetOrientation(orientation) => {
                let wants_landscape = *orientation == Orientation::Landscape;
                let is_landscape = state.page_config.width > state.page_config.height;

                let mut next = state.clone();
                next.page_config.orientation = *orientation;
                // Swap only when the current aspect disagrees with the target
                if wants_landscape != is_landscape {
                    std::mem::swap(&mut next.page_config.width, &mut next.page_config.height);
                }

                if next == *state {
                    return None;
                }
                Some(next)
            }

            Action::SetMargins(patch) => {
                if patch.is_empty() {
                    return None;
                }
                let mut next = state.clone();
                patch.apply_to(&mut next.page_config.margins);
                if next == *state {
                    return None;
                }
                Some(next)
            }

            Action::AddElement(spec) => {
                let id = ElementId::generate();
                let mut next = state.clone();
                next.elements.push(spec.clone().into_element(id.clone()));
                // Auto-select the new element
                next.selected_ids = vec![id];
                Some(next)
            }

            Action::AddMultipleElements(specs) => {
                if specs.is_empty() {
                    return None;
                }
                let mut next = state.clone();
                next.elements.extend(
                    specs
                        .iter()
                        .map(|spec| spec.clone().into_element(ElementId::generate())),
                );
                next.selected_ids.clear();
                Some(next)
            }

            Action::UpdateElement { id, changes } => {
                if state.element(id).is_none() {
                    return None;
                }
                let mut next = state.clone();
                for el in &mut next.elements {
                    if el.id == *id {
                        changes.apply_to(el);
                    }
                }
                Some(next)
            }

            Action::UpdateMultipleElements { ids, changes } => {
                if !state.elements.iter().any(|el| ids.contains(&el.id)) {
                    return None;
                }
                let mut next = state.clone();
                for el in &mut next.elements {
                    if ids.contains(&el.id) {
                        changes.apply_to(el);
                    }
                }
                Some(next)
            }

            Action::MoveElements { ids, dx_mm, dy_mm } => {
                if (*dx_mm == 0.0 && *dy_mm == 0.0)
                    || !state.elements.iter().any(|el| ids.contains(&el.id))
                {
                    return None;
                }
                // No bounds clamping: elements may be moved off-page
                let mut next = state.clone();
                for el in &mut next.elements {
                    if ids.contains(&el.id) {
                        el.x += dx_mm;
                        el.y += dy_mm;
                    }
                }
                Some(next)
            }

            Action::RemoveElement(id) => {
                if state.element(id).is_none() {
                    return None;
                }
                let mut next = state.clone();
                next.elements.retain(|el| el.id != *id);
                next.selected_ids.retain(|sid| sid != id);
                Some(next)
            }

            Action::RemoveSelected => {
                if state.selected_ids.is_empty() {
                    return None;
                }
                let mut next = state.clone();
                next.elements
                    .retain(|el| !state.selected_ids.contains(&el.id));
                next.selected_ids.clear();
                Some(next)
            }

            Action::SelectElement(id) => {
                let selection: Vec<ElementId> = match id {
                    Some(id) if state.element(id).is_some() => vec![id.clone()],
                    _ => Vec::new(),
                };
                if selection == state.selected_ids {
                    return None;
                }
                let mut next = state.clone();
                next.selected_ids = selection;
                Some(next)
            }

            Action::ToggleSelection(id) => {
                if state.element(id).is_none() {
                    return None;
                }
                let mut next = state.clone();
                if next.selected_ids.contains(id) {
                    next.selected_ids.retain(|sid| sid != id);
                } else {
                    next.selected_ids.push(id.clone());
                }
                Some(next)
            }

            Action::SetSelection(ids) => {
                let selection: Vec<ElementId> = ids
                    .iter()
                    .filter(|id| state.element(id).is_some())
                    .cloned()
                    .collect();
                if selection == state.selected_ids {
                    return None;
                }
                let mut next = state.clone();
                next.selected_ids = selection;
                Some(next)
            }

            Action::SetZoom(zoom) => {
                let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
                if zoom == state.zoom {
                    return None;
                }
                let mut next = state.clone();
                next.zoom = zoom;
                Some(next)
            }

            Action::LoadDocument(doc) => {
                if doc == state {
                    return None;
                }
                Some(doc.clone())
            }

            Action::AddPage => {
                let new_page = state.page_count;
                let mut next = state.clone();
                next.page_count += 1;

                if state.header_active {
                    next.elements.extend(
                        self.header_source
                            .elements_for_page(new_page)
                            .into_iter()
                            .map(|spec| spec.into_element(ElementId::generate())),
                    );
                }
                Some(next)
            }

            Action::RemovePage(target) => {
                if state.page_count <= 1 {
                    return None;
                }
                let page = target.unwrap_or(state.page_count - 1);
                if page >= state.page_count {
                    return None;
                }

                let mut next = state.clone();
                // Delete the removed page's elements, then shift higher pages
                // down by one
                next.elements.retain(|el| el.page != page);
                for el in &mut next.elements {
                    if el.page > page {
                        el.page -= 1;
                    }
                }
                next.page_count -= 1;
                // Clear selection to avoid ghost ids
                next.selected_ids.clear();
                Some(next)
            }

            Action::ToggleHeader(active) => {
                let mut next = state.clone();
                next.elements
                    .retain(|el| el.category != ElementCategory::Header);
                if *active {
                    for page in 0..state.page_count {
                        next.elements.extend(
                            self.header_source
                                .elements_for_page(page)
                                .into_iter()
                                .map(|spec| spec.into_element(ElementId::generate())),
                        );
                    }
                }
                next.header_active = *active;
                let surviving: Vec<ElementId> =
                    next.elements.iter().map(|el| el.id.clone()).collect();
                next.selected_ids.retain(|id| surviving.contains(id));
                Some(next)
            }

            // Handled by the history wrapper before the reducer is consulted
            Action::Undo | Action::Redo | Action::Copy | Action::Paste => None,
        }
    }
}

impl Default for DocumentReducer {
    fn default() -> Self {
        Self::new(Box::new(Letterhead::default()))
    }
}
