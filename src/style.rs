//! Element presentation styles.
//!
//! Styles are stored as a bag of optional fields and resolved against the
//! built-in defaults at read time, never at storage time. Keeping storage
//! sparse makes "clear formatting" a trivial reset-to-empty operation.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT, DEFAULT_PADDING,
    DEFAULT_TEXT_COLOR,
};

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn css(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn css(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// Optional presentation properties for one element.
///
/// Absent fields fall back to [`Resolved`] defaults when the element is
/// rendered or exported.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    /// 'none', 'underline', 'line-through', or a combination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Highlight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Indent, in px
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// e.g. '1px solid black'
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// 'none', 'disc', 'decimal'
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl ElementStyle {
    pub fn is_empty(&self) -> bool {
        *self == ElementStyle::default()
    }
}

/// A fully resolved style, every field populated.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: String,
    pub text_align: TextAlign,
    pub color: String,
    pub background_color: Option<String>,
    pub line_height: f32,
    pub letter_spacing: Option<f32>,
    pub padding: f32,
    pub border: Option<String>,
    pub border_radius: Option<f32>,
    pub list_style: Option<String>,
    pub opacity: f32,
}

static BUILT_IN: Lazy<Resolved> = Lazy::new(|| Resolved {
    font_family: DEFAULT_FONT_FAMILY.to_string(),
    font_size: DEFAULT_FONT_SIZE,
    font_weight: FontWeight::Normal,
    font_style: FontStyle::Normal,
    text_decoration: "none".to_string(),
    text_align: TextAlign::Left,
    color: DEFAULT_TEXT_COLOR.to_string(),
    background_color: None,
    line_height: DEFAULT_LINE_HEIGHT,
    letter_spacing: None,
    padding: DEFAULT_PADDING,
    border: None,
    border_radius: None,
    list_style: None,
    opacity: 1.0,
});

/// Resolve an element's style bag against the built-in defaults.
///
/// The walk is explicit: element style first, built-in default otherwise.
pub fn resolve(style: Option<&ElementStyle>) -> Resolved {
    let mut resolved = BUILT_IN.clone();
    let Some(style) = style else {
        return resolved;
    };

    if let Some(ref v) = style.font_family {
        resolved.font_family = v.clone();
    }
    if let Some(v) = style.font_size {
        resolved.font_size = v;
    }
    if let Some(v) = style.font_weight {
        resolved.font_weight = v;
    }
    if let Some(v) = style.font_style {
        resolved.font_style = v;
    }
    if let Some(ref v) = style.text_decoration {
        resolved.text_decoration = v.clone();
    }
    if let Some(v) = style.text_align {
        resolved.text_align = v;
    }
    if let Some(ref v) = style.color {
        resolved.color = v.clone();
    }
    if let Some(ref v) = style.background_color {
        resolved.background_color = Some(v.clone());
    }
    if let Some(v) = style.line_height {
        resolved.line_height = v;
    }
    if let Some(v) = style.letter_spacing {
        resolved.letter_spacing = Some(v);
    }
    if let Some(v) = style.padding {
        resolved.padding = v;
    }
    if let Some(ref v) = style.border {
        resolved.border = Some(v.clone());
    }
    if let Some(v) = style.border_radius {
        resolved.border_radius = Some(v);
    }
    if let Some(ref v) = style.list_style {
        resolved.list_style = Some(v.clone());
    }
    if let Some(v) = style.opacity {
        resolved.opacity = v;
    }

    resolved
}
