//! letterboard: the headless editing core of a free-layout letter editor.
//!
//! Users place text, image, rectangle, and line elements freely on fixed-size
//! pages (A4/A3/A5/A6/custom, portrait or landscape), style them, and export
//! the result. This crate owns the hard center of that editor: the document
//! state, a pure reducer over tagged actions, an undo/redo history wrapper
//! with a clipboard, and the pointer-gesture controller for drag, resize, and
//! marquee selection. Rendering surfaces and PDF rasterization are external
//! collaborators consuming read-only snapshots.
//!
//! ## Control flow
//!
//! ```text
//! pointer events -> InteractionController -> Action
//!                -> EditorStore (history classification)
//!                -> DocumentReducer -> new DocumentState -> observers
//! ```
//!
//! Everything is synchronous and single-threaded; the store is owned
//! exclusively by the dispatch path and handed to view components through
//! [`store::SharedStore`].

pub mod constants;
pub mod export;
pub mod geometry;
pub mod ingest;
pub mod input;
pub mod notifications;
pub mod spatial_index;
pub mod store;
pub mod style;
pub mod templates;
pub mod types;

pub use input::InteractionController;
pub use store::{Action, EditorStore, SharedStore};
pub use types::{DocElement, DocumentState, ElementId};
