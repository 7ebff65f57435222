//! Core types for the letterboard document model.
//!
//! This module defines the data structures shared across the whole crate:
//! page configuration, placed elements, and the aggregate document state the
//! reducer operates on.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_MARGIN_MM, DEFAULT_ZOOM, ID_LENGTH};
use crate::geometry::MmRect;
use crate::style::ElementStyle;

/// Opaque element identifier.
///
/// Generated at creation, immutable thereafter. Not globally unique across
/// processes; collision within one document is an accepted risk.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Produce a short random base-36 id.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..ID_LENGTH)
            .map(|_| {
                let digit = rng.gen_range(0..36u32);
                char::from_digit(digit, 36).unwrap_or('0')
            })
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Supported paper sizes. `Custom` keeps whatever numeric dimensions are set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    A6,
    Custom,
}

impl PaperSize {
    /// Portrait (width, height) in mm; `None` for `Custom`.
    pub fn dimensions(&self) -> Option<(f32, f32)> {
        match self {
            PaperSize::A3 => Some((297.0, 420.0)),
            PaperSize::A4 => Some((210.0, 297.0)),
            PaperSize::A5 => Some((148.0, 210.0)),
            PaperSize::A6 => Some((105.0, 148.0)),
            PaperSize::Custom => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page margins in mm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn uniform(mm: f32) -> Self {
        Self {
            top: mm,
            right: mm,
            bottom: mm,
            left: mm,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN_MM)
    }
}

/// Partial update for [`Margins`]; only the named sides change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarginsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
}

impl MarginsPatch {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    pub fn apply_to(&self, margins: &mut Margins) {
        if let Some(v) = self.top {
            margins.top = v;
        }
        if let Some(v) = self.right {
            margins.right = v;
        }
        if let Some(v) = self.bottom {
            margins.bottom = v;
        }
        if let Some(v) = self.left {
            margins.left = v;
        }
    }
}

/// Physical page configuration, shared by every page in the document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub size: PaperSize,
    /// Width in mm
    pub width: f32,
    /// Height in mm
    pub height: f32,
    pub orientation: Orientation,
    pub margins: Margins,
}

impl PageConfig {
    pub fn a4_portrait() -> Self {
        Self {
            size: PaperSize::A4,
            width: 210.0,
            height: 297.0,
            orientation: Orientation::Portrait,
            margins: Margins::default(),
        }
    }

    /// Width available inside the left/right margins, in mm.
    pub fn printable_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::a4_portrait()
    }
}

/// What an element renders as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Text,
    Image,
    Rect,
    Line,
}

/// Distinguishes letterhead chrome from ordinary content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    #[default]
    Content,
    Header,
    Footer,
}

/// One placed object on a page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocElement {
    /// Unique within the document, generated at creation
    pub id: ElementId,
    pub kind: ElementKind,
    /// mm, top-left origin, relative to the owning page
    pub x: f32,
    pub y: f32,
    /// mm
    pub width: f32,
    pub height: f32,
    /// 0-based index into the page sequence
    pub page: usize,
    /// Text content for text elements; data-URI or source reference for
    /// images; unused for rect/line
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
    #[serde(default)]
    pub category: ElementCategory,
}

impl DocElement {
    pub fn bounds(&self) -> MmRect {
        MmRect::new(self.x, self.y, self.width, self.height)
    }
}

/// An element without an id: the shape bulk producers and insertion actions
/// carry. The core assigns a fresh id on insertion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub kind: ElementKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub page: usize,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
    #[serde(default)]
    pub category: ElementCategory,
}

impl ElementSpec {
    pub fn new(kind: ElementKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
            page: 0,
            content: String::new(),
            style: None,
            category: ElementCategory::Content,
        }
    }

    pub fn text(content: impl Into<String>, x: f32, y: f32, width: f32) -> Self {
        Self {
            content: content.into(),
            ..Self::new(ElementKind::Text, x, y, width, 0.0)
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_category(mut self, category: ElementCategory) -> Self {
        self.category = category;
        self
    }

    pub fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Materialize the spec into a placed element under the given id.
    pub fn into_element(self, id: ElementId) -> DocElement {
        DocElement {
            id,
            kind: self.kind,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            page: self.page,
            content: self.content,
            style: self.style,
            category: self.category,
        }
    }
}

/// The aggregate document state the reducer transitions between.
///
/// Element order is z-order: later elements render on top. `selected_ids`
/// keeps insertion order so "first selected" UI reads stay stable; the
/// reducer prunes it whenever referenced elements are removed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentState {
    pub title: String,
    pub page_config: PageConfig,
    pub page_count: usize,
    pub elements: Vec<DocElement>,
    pub selected_ids: Vec<ElementId>,
    pub zoom: f32,
    pub header_active: bool,
}

impl DocumentState {
    /// A fresh single-page A4 document.
    pub fn new() -> Self {
        Self {
            title: "Untitled Document".to_string(),
            page_config: PageConfig::a4_portrait(),
            page_count: 1,
            elements: Vec::new(),
            selected_ids: Vec::new(),
            zoom: DEFAULT_ZOOM,
            header_active: false,
        }
    }

    pub fn element(&self, id: &ElementId) -> Option<&DocElement> {
        self.elements.iter().find(|el| &el.id == id)
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected_ids.contains(id)
    }

    /// The earliest-selected element, for single-target UI reads.
    pub fn first_selected(&self) -> Option<&DocElement> {
        self.selected_ids.first().and_then(|id| self.element(id))
    }

    pub fn elements_on_page(&self, page: usize) -> impl Iterator<Item = &DocElement> {
        self.elements.iter().filter(move |el| el.page == page)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new()
    }
}
