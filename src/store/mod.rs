//! Document state container: actions, reducer, history, and the shared
//! handle.
//!
//! Control flow: an interaction (or UI chrome) dispatches an [`Action`]; the
//! [`EditorStore`] decides whether the action is transient, clipboard/history
//! control, or history-producing; the [`DocumentReducer`] computes the next
//! [`crate::types::DocumentState`]; observers are told about the new state.

mod action;
mod handle;
mod history;
mod reducer;

pub use action::{Action, ElementPatch};
pub use handle::SharedStore;
pub use history::EditorStore;
pub use reducer::DocumentReducer;
