//! Shared store handle for view components.
//!
//! Deeply nested UI components need read access to the document and a way to
//! request changes without prop threading. Instead of an ambient global, the
//! store is wrapped in a cheaply cloneable handle that components receive by
//! injection, which keeps everything testable with a plain [`EditorStore`].

use parking_lot::RwLock;
use std::sync::Arc;

use crate::store::action::Action;
use crate::store::history::EditorStore;
use crate::types::DocumentState;

/// A cloneable, injectable reference to one [`EditorStore`].
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<EditorStore>>,
}

impl SharedStore {
    pub fn new(store: EditorStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Dispatch one action. Returns whether the present state changed.
    pub fn dispatch(&self, action: Action) -> bool {
        self.inner.write().dispatch(action)
    }

    /// Run a read-only closure against the store.
    pub fn read<R>(&self, f: impl FnOnce(&EditorStore) -> R) -> R {
        f(&self.inner.read())
    }

    /// Clone the present document state for export or persistence consumers.
    pub fn snapshot(&self) -> DocumentState {
        self.inner.read().present().clone()
    }

    /// Register an observer invoked after every dispatch that changed the
    /// present state.
    pub fn subscribe(&self, subscriber: impl FnMut(&DocumentState) + Send + 'static) {
        self.inner.write().subscribe(subscriber);
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new(EditorStore::new())
    }
}
