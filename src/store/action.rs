//! Actions: the tagged commands the store understands.
//!
//! Every mutation of the document goes through exactly one [`Action`]
//! dispatch. The history wrapper classifies actions into transient,
//! clipboard/history control, and normal history-producing buckets; the
//! classification lives with the action type so the two cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::style::ElementStyle;
use crate::types::{
    DocElement, DocumentState, ElementCategory, ElementId, ElementSpec, MarginsPatch, Orientation,
    PaperSize,
};

/// Partial update for a [`crate::types::DocElement`].
///
/// Present fields are shallow-merged into the target; `style` replaces the
/// whole style bag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ElementCategory>,
}

impl ElementPatch {
    pub fn size(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn style(style: ElementStyle) -> Self {
        Self {
            style: Some(style),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, el: &mut DocElement) {
        if let Some(v) = self.x {
            el.x = v;
        }
        if let Some(v) = self.y {
            el.y = v;
        }
        if let Some(v) = self.width {
            el.width = v;
        }
        if let Some(v) = self.height {
            el.height = v;
        }
        if let Some(v) = self.page {
            el.page = v;
        }
        if let Some(ref v) = self.content {
            el.content = v.clone();
        }
        if let Some(ref v) = self.style {
            el.style = Some(v.clone());
        }
        if let Some(v) = self.category {
            el.category = v;
        }
    }
}

/// One command against the document state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    RenameDocument(String),
    SetPageSize {
        size: PaperSize,
        width: Option<f32>,
        height: Option<f32>,
    },
    SetOrientation(Orientation),
    SetMargins(MarginsPatch),
    AddElement(ElementSpec),
    /// Bulk template insertion
    AddMultipleElements(Vec<ElementSpec>),
    UpdateElement {
        id: ElementId,
        changes: ElementPatch,
    },
    UpdateMultipleElements {
        ids: Vec<ElementId>,
        changes: ElementPatch,
    },
    MoveElements {
        ids: Vec<ElementId>,
        dx_mm: f32,
        dy_mm: f32,
    },
    RemoveElement(ElementId),
    RemoveSelected,
    /// Single select; `None` clears the selection
    SelectElement(Option<ElementId>),
    /// XOR one id into the selection (modifier-click)
    ToggleSelection(ElementId),
    /// Replace the selection wholesale (marquee / batch)
    SetSelection(Vec<ElementId>),
    SetZoom(f32),
    LoadDocument(DocumentState),
    AddPage,
    /// Defaults to the last page when no index is given
    RemovePage(Option<usize>),
    ToggleHeader(bool),
    Undo,
    Redo,
    Copy,
    Paste,
}

impl Action {
    /// Transient actions update `present` without touching history.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Action::SelectElement(_)
                | Action::ToggleSelection(_)
                | Action::SetSelection(_)
                | Action::SetZoom(_)
        )
    }

    /// Short name for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Action::RenameDocument(_) => "rename_document",
            Action::SetPageSize { .. } => "set_page_size",
            Action::SetOrientation(_) => "set_orientation",
            Action::SetMargins(_) => "set_margins",
            Action::AddElement(_) => "add_element",
            Action::AddMultipleElements(_) => "add_multiple_elements",
            Action::UpdateElement { .. } => "update_element",
            Action::UpdateMultipleElements { .. } => "update_multiple_elements",
            Action::MoveElements { .. } => "move_elements",
            Action::RemoveElement(_) => "remove_element",
            Action::RemoveSelected => "remove_selected",
            Action::SelectElement(_) => "select_element",
            Action::ToggleSelection(_) => "toggle_selection",
            Action::SetSelection(_) => "set_selection",
            Action::SetZoom(_) => "set_zoom",
            Action::LoadDocument(_) => "load_document",
            Action::AddPage => "add_page",
            Action::RemovePage(_) => "remove_page",
            Action::ToggleHeader(_) => "toggle_header",
            Action::Undo => "undo",
            Action::Redo => "redo",
            Action::Copy => "copy",
            Action::Paste => "paste",
        }
    }
}
