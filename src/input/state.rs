//! Input state machine - one explicit state per pointer gesture.
//!
//! A single enum replaces scattered boolean flags and makes impossible
//! states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingElements   (pointer down on an element body)
//! Idle -> ResizingElement    (pointer down on a resize handle)
//! Idle -> MarqueeSelecting   (pointer down on empty page canvas)
//!
//! Any -> Idle                (pointer up - finalizes the gesture)
//! ```

use crate::geometry::PxPoint;
use crate::types::ElementId;

/// Unified input state for all pointer interactions. One gesture is active
/// at a time.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Dragging the selected elements. Only a visual offset is tracked while
    /// the pointer moves; the batched move is dispatched on pointer up.
    DraggingElements {
        /// The element under the cursor when the drag began
        primary: ElementId,
        /// Pointer position at gesture start
        start: PxPoint,
        /// Current pointer position
        current: PxPoint,
    },

    /// Resizing one element from its bottom-right handle
    ResizingElement {
        id: ElementId,
        /// (width, height) in mm at gesture start
        start_size: (f32, f32),
        /// Pointer position at gesture start
        start: PxPoint,
    },

    /// Rubber-band selection on one page
    MarqueeSelecting {
        page: usize,
        start: PxPoint,
        current: PxPoint,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingElements { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingElement { .. })
    }

    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::MarqueeSelecting { .. })
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_dragging(&mut self, primary: ElementId, start: PxPoint) {
        *self = Self::DraggingElements {
            primary,
            start,
            current: start,
        };
    }

    pub fn start_resizing(&mut self, id: ElementId, start_size: (f32, f32), start: PxPoint) {
        *self = Self::ResizingElement {
            id,
            start_size,
            start,
        };
    }

    pub fn start_marquee(&mut self, page: usize, start: PxPoint) {
        *self = Self::MarqueeSelecting {
            page,
            start,
            current: start,
        };
    }

    /// Track the pointer for gestures that preview locally.
    pub fn set_current(&mut self, pos: PxPoint) {
        match self {
            Self::DraggingElements { current, .. } | Self::MarqueeSelecting { current, .. } => {
                *current = pos;
            }
            _ => {}
        }
    }

    /// The accumulated drag offset in screen pixels, for smooth preview.
    pub fn visual_offset(&self) -> Option<PxPoint> {
        match self {
            Self::DraggingElements { start, current, .. } => Some(*current - *start),
            _ => None,
        }
    }

    /// Get the element being dragged, if any
    pub fn dragged_element(&self) -> Option<&ElementId> {
        match self {
            Self::DraggingElements { primary, .. } => Some(primary),
            _ => None,
        }
    }

    /// Get the element being resized, if any
    pub fn resized_element(&self) -> Option<&ElementId> {
        match self {
            Self::ResizingElement { id, .. } => Some(id),
            _ => None,
        }
    }

    /// The marquee rectangle corners in screen pixels, if selecting
    pub fn marquee_corners(&self) -> Option<(PxPoint, PxPoint)> {
        match self {
            Self::MarqueeSelecting { start, current, .. } => Some((*start, *current)),
            _ => None,
        }
    }
}
