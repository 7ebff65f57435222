//! Bulk element producers: letterhead blocks and letter body templates.
//!
//! A producer returns ordered [`ElementSpec`]s (no ids; the store assigns
//! fresh ones on insertion). Returned specs must carry a valid page,
//! position, size, kind, and content, and may carry style and category.

use crate::style::{ElementStyle, FontStyle, FontWeight, TextAlign};
use crate::types::{ElementCategory, ElementKind, ElementSpec};

/// Placeholder logo shipped with the built-in letterhead (1x1 transparent
/// PNG); real deployments swap in their own data URI.
pub const LETTERHEAD_LOGO_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

/// Produces the header block replicated onto every page while the header
/// toggle is active.
pub trait HeaderSource: Send + Sync {
    /// The header elements for one page, already assigned to that page.
    fn elements_for_page(&self, page: usize) -> Vec<ElementSpec>;
}

fn text_spec(
    content: &str,
    x: f32,
    y: f32,
    width: f32,
    font_size: f32,
    font_weight: FontWeight,
    text_align: TextAlign,
    text_decoration: &str,
) -> ElementSpec {
    ElementSpec::text(content, x, y, width).with_style(ElementStyle {
        font_family: Some("Inter, sans-serif".to_string()),
        font_size: Some(font_size),
        font_weight: Some(font_weight),
        font_style: Some(FontStyle::Normal),
        text_decoration: Some(text_decoration.to_string()),
        text_align: Some(text_align),
        color: Some("#000000".to_string()),
        line_height: Some(1.5),
        ..Default::default()
    })
}

/// The built-in institutional letterhead: logo, centered text lines, and a
/// double-rule separator.
///
/// The element count per page is deterministic, so toggling the header off
/// and on regenerates exactly the same number of elements.
pub struct Letterhead {
    lines: Vec<LetterheadLine>,
    logo_uri: String,
}

struct LetterheadLine {
    content: String,
    y: f32,
    font_size: f32,
    font_weight: FontWeight,
}

impl Letterhead {
    pub fn new(lines: &[(&str, f32, f32, FontWeight)], logo_uri: impl Into<String>) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|(content, y, font_size, font_weight)| LetterheadLine {
                    content: content.to_string(),
                    y: *y,
                    font_size: *font_size,
                    font_weight: *font_weight,
                })
                .collect(),
            logo_uri: logo_uri.into(),
        }
    }

    /// Elements per page: logo + text lines + separator.
    pub fn element_count(&self) -> usize {
        self.lines.len() + 2
    }
}

impl Default for Letterhead {
    fn default() -> Self {
        Self::new(
            &[
                ("OFFICE OF THE PROVINCIAL SECRETARY", 10.0, 14.0, FontWeight::Bold),
                ("DEPARTMENT OF EDUCATION", 16.0, 16.0, FontWeight::Bold),
                (
                    "Education Tower, Provincial Government Center",
                    23.0,
                    10.0,
                    FontWeight::Normal,
                ),
                ("12 Harbor Road, New Clarkton", 27.0, 10.0, FontWeight::Normal),
                ("(0254) 267-064", 31.0, 10.0, FontWeight::Normal),
            ],
            LETTERHEAD_LOGO_URI,
        )
    }
}

impl HeaderSource for Letterhead {
    fn elements_for_page(&self, page: usize) -> Vec<ElementSpec> {
        let mut elements = Vec::with_capacity(self.element_count());

        // Logo, left aligned
        elements.push(
            ElementSpec::new(ElementKind::Image, 15.0, 8.0, 28.0, 28.0)
                .with_content(self.logo_uri.clone()),
        );

        // Centered institutional text block
        for line in &self.lines {
            elements.push(text_spec(
                &line.content,
                20.0,
                line.y,
                170.0,
                line.font_size,
                line.font_weight,
                TextAlign::Center,
                "none",
            ));
        }

        // Double-rule separator under the text block
        elements.push(
            ElementSpec::new(ElementKind::Line, 15.0, 36.0, 180.0, 0.8).with_style(ElementStyle {
                border: Some("3px double #000000".to_string()),
                ..Default::default()
            }),
        );

        elements
            .into_iter()
            .map(|spec| spec.on_page(page).with_category(ElementCategory::Header))
            .collect()
    }
}

/// A complete letter-of-authorization body, consumed via bulk insertion.
///
/// `include_header` shifts the body down to leave room for the letterhead.
pub fn formal_letter(include_header: bool) -> Vec<ElementSpec> {
    let start_y = if include_header { 50.0 } else { 35.0 };
    let mut elements = Vec::new();

    elements.push(text_spec(
        "LETTER OF AUTHORIZATION",
        20.0,
        start_y,
        170.0,
        14.0,
        FontWeight::Bold,
        TextAlign::Center,
        "underline",
    ));

    elements.push(plain_text("The undersigned:", 20.0, start_y + 15.0, 170.0));

    // Grantor detail rows: label, colon, dotted fill-in line
    let grantor_y = start_y + 25.0;
    let row_gap = 8.0;
    let fields = ["Name", "ID Number", "Occupation", "Address"];
    for (i, field) in fields.iter().enumerate() {
        let y = grantor_y + i as f32 * row_gap;
        push_field_row(&mut elements, field, y);
    }

    let bridge_y = grantor_y + fields.len() as f32 * row_gap + 5.0;
    elements.push(text_spec(
        "hereinafter referred to as the GRANTOR,",
        20.0,
        bridge_y,
        170.0,
        12.0,
        FontWeight::Bold,
        TextAlign::Left,
        "none",
    ));

    elements.push(plain_text(
        "hereby grants full authority to:",
        20.0,
        bridge_y + 10.0,
        170.0,
    ));

    let grantee_y = bridge_y + 20.0;
    for (i, field) in fields.iter().enumerate() {
        let y = grantee_y + i as f32 * row_gap;
        push_field_row(&mut elements, field, y);
    }

    let body_y = grantee_y + fields.len() as f32 * row_gap + 5.0;
    elements.push(text_spec(
        "hereinafter referred to as the GRANTEE,",
        20.0,
        body_y,
        170.0,
        12.0,
        FontWeight::Bold,
        TextAlign::Left,
        "none",
    ));
    elements.push(plain_text(
        "to act on the GRANTOR's behalf in all matters described below, \
         including signing any documents required to complete them.",
        20.0,
        body_y + 10.0,
        170.0,
    ));

    // Closing and signature columns
    let closing_y = body_y + 30.0;
    elements.push(plain_text(
        "Issued at ................., on .................",
        110.0,
        closing_y,
        80.0,
    ));
    elements.push(text_spec(
        "GRANTEE,",
        25.0,
        closing_y + 10.0,
        60.0,
        12.0,
        FontWeight::Normal,
        TextAlign::Center,
        "none",
    ));
    elements.push(text_spec(
        "GRANTOR,",
        125.0,
        closing_y + 10.0,
        60.0,
        12.0,
        FontWeight::Normal,
        TextAlign::Center,
        "none",
    ));
    elements.push(text_spec(
        "(.................................)",
        25.0,
        closing_y + 40.0,
        60.0,
        12.0,
        FontWeight::Normal,
        TextAlign::Center,
        "none",
    ));
    elements.push(text_spec(
        "(.................................)",
        125.0,
        closing_y + 40.0,
        60.0,
        12.0,
        FontWeight::Normal,
        TextAlign::Center,
        "none",
    ));

    elements
}

fn plain_text(content: &str, x: f32, y: f32, width: f32) -> ElementSpec {
    text_spec(
        content,
        x,
        y,
        width,
        12.0,
        FontWeight::Normal,
        TextAlign::Left,
        "none",
    )
}

fn push_field_row(elements: &mut Vec<ElementSpec>, label: &str, y: f32) {
    elements.push(plain_text(label, 20.0, y, 35.0));
    elements.push(plain_text(":", 55.0, y, 5.0));
    elements.push(plain_text(
        "....................................................................",
        60.0,
        y,
        130.0,
    ));
}
