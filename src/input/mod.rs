//! Pointer input handling for the page surface.
//!
//! This module turns raw pointer events into dispatched store actions:
//! element selection, dragging (single and multi-element), resizing, marquee
//! selection, and context-menu driven insertion/deletion.
//!
//! ## Architecture
//!
//! An explicit state machine (`InputState`) tracks the current gesture,
//! making impossible states unrepresentable. The controller on top of it is
//! the only place pointer events are interpreted; it never touches document
//! fields directly, only dispatched actions.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `controller` - Pointer down/move/up handling and context menus

mod controller;
mod state;

pub use controller::{ContextMenu, InteractionController, Modifiers, PointerButton};
pub use state::InputState;
