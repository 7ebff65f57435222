//! The history wrapper around the reducer: undo/redo stacks and the clipboard.
//!
//! Every dispatched action lands in exactly one bucket:
//!
//! 1. Transient (selection, zoom): updates `present`, never touches history.
//! 2. Copy: snapshots the selected elements into the clipboard.
//! 3. Paste: inserts offset fresh-id copies and pushes a history entry.
//! 4. Undo / Redo: rotate between the stacks; no-ops at the boundary.
//! 5. Everything else: runs the reducer; a `None` result means no-op (no
//!    history entry), otherwise the pre-action state is pushed and `future`
//!    is cleared.
//!
//! Keeping high-frequency transient actions out of the undo stack prevents
//! history pollution; clearing `future` on every real edit enforces the
//! linear-undo invariant.

use std::collections::VecDeque;

use crate::constants::{MAX_HISTORY_STATES, PASTE_OFFSET_MM};
use crate::store::action::Action;
use crate::store::reducer::DocumentReducer;
use crate::types::{DocElement, DocumentState, ElementId};

type Subscriber = Box<dyn FnMut(&DocumentState) + Send>;

/// The document-session state container.
///
/// Created once at session start with one empty page; mutated only through
/// [`EditorStore::dispatch`]; dropped when the editing session ends. Nothing
/// here persists anything; persistence is an external collaborator's job.
pub struct EditorStore {
    past: VecDeque<DocumentState>,
    present: DocumentState,
    future: VecDeque<DocumentState>,
    clipboard: Vec<DocElement>,
    reducer: DocumentReducer,
    subscribers: Vec<Subscriber>,
}

impl EditorStore {
    pub fn new() -> Self {
        Self::with_reducer(DocumentReducer::default())
    }

    pub fn with_reducer(reducer: DocumentReducer) -> Self {
        Self {
            past: VecDeque::new(),
            present: DocumentState::new(),
            future: VecDeque::new(),
            clipboard: Vec::new(),
            reducer,
            subscribers: Vec::new(),
        }
    }

    /// Start from an existing document instead of a fresh one.
    pub fn from_state(state: DocumentState) -> Self {
        let mut store = Self::new();
        store.present = state;
        store
    }

    pub fn present(&self) -> &DocumentState {
        &self.present
    }

    pub fn clipboard(&self) -> &[DocElement] {
        &self.clipboard
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of snapshots on the undo stack.
    pub fn history_len(&self) -> usize {
        self.past.len()
    }

    /// Register an observer invoked with the new present state after every
    /// dispatch that changed it.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&DocumentState) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn undo(&mut self) -> bool {
        self.dispatch(Action::Undo)
    }

    pub fn redo(&mut self) -> bool {
        self.dispatch(Action::Redo)
    }

    /// Dispatch one action. Returns whether `present` changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Copy => {
                // Deep snapshot of the selected elements, in document order
                self.clipboard = self
                    .present
                    .elements
                    .iter()
                    .filter(|el| self.present.selected_ids.contains(&el.id))
                    .cloned()
                    .collect();
                tracing::debug!(count = self.clipboard.len(), "copied selection");
                false
            }

            Action::Undo => {
                let Some(previous) = self.past.pop_back() else {
                    return false;
                };
                let current = std::mem::replace(&mut self.present, previous);
                self.future.push_front(current);
                self.notify();
                true
            }

            Action::Redo => {
                let Some(next) = self.future.pop_front() else {
                    return false;
                };
                let current = std::mem::replace(&mut self.present, next);
                self.past.push_back(current);
                self.notify();
                true
            }

            Action::Paste => {
                if self.clipboard.is_empty() {
                    return false;
                }

                let pasted: Vec<DocElement> = self
                    .clipboard
                    .iter()
                    .map(|el| {
                        let mut copy = el.clone();
                        copy.id = ElementId::generate();
                        copy.x += PASTE_OFFSET_MM;
                        copy.y += PASTE_OFFSET_MM;
                        copy
                    })
                    .collect();

                let mut next = self.present.clone();
                next.selected_ids = pasted.iter().map(|el| el.id.clone()).collect();
                next.elements.extend(pasted);

                self.push_history();
                self.present = next;
                self.future.clear();
                self.notify();
                true
            }

            action if action.is_transient() => {
                let Some(next) = self.reducer.reduce(&self.present, &action) else {
                    return false;
                };
                self.present = next;
                self.notify();
                true
            }

            action => {
                let Some(next) = self.reducer.reduce(&self.present, &action) else {
                    return false;
                };
                tracing::debug!(action = action.label(), "history entry");
                self.push_history();
                self.present = next;
                self.future.clear();
                self.notify();
                true
            }
        }
    }

    fn push_history(&mut self) {
        self.past.push_back(self.present.clone());
        if self.past.len() > MAX_HISTORY_STATES {
            self.past.pop_front();
        }
    }

    fn notify(&mut self) {
        let state = &self.present;
        for subscriber in &mut self.subscribers {
            subscriber(state);
        }
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}
