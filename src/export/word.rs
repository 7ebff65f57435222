//! Word-compatible HTML export.
//!
//! Word opens an HTML file carrying the mso office namespaces and `@page`
//! rules as a print-layout document, so the export is a plain string render
//! of the document snapshot: one strictly sized container per logical page,
//! one absolutely positioned div per element, everything measured in literal
//! millimeters from the page config.

use std::fmt::{self, Write};

use crate::style::{self, Resolved};
use crate::types::{DocElement, DocumentState, ElementKind, Orientation};

/// Render the whole document to a Word-compatible HTML string.
pub fn to_html(state: &DocumentState) -> String {
    let mut out = String::new();
    write_document(state, &mut out).expect("writing to a String cannot fail");
    out
}

/// Stream the document into any formatter sink.
pub fn write_document(state: &DocumentState, out: &mut impl Write) -> fmt::Result {
    let width = state.page_config.width;
    let height = state.page_config.height;
    let orientation = match state.page_config.orientation {
        Orientation::Portrait => "portrait",
        Orientation::Landscape => "landscape",
    };

    write!(
        out,
        "<html xmlns:v=\"urn:schemas-microsoft-com:vml\" \
         xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
         xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
         xmlns=\"http://www.w3.org/TR/REC-html40\">\n\
         <head>\n\
         <meta http-equiv=Content-Type content=\"text/html; charset=utf-8\">\n\
         <title>{title}</title>\n\
         <!--[if gte mso 9]><xml><w:WordDocument><w:View>Print</w:View>\
         <w:Zoom>100</w:Zoom><w:DoNotOptimizeForBrowser/></w:WordDocument></xml><![endif]-->\n\
         <style>\n\
         @page {{ size: {width}mm {height}mm; margin: 0mm; mso-page-orientation: {orientation}; }}\n\
         @page Section1 {{ size: {width}mm {height}mm; margin: 0mm; \
         mso-header-margin: 0mm; mso-footer-margin: 0mm; mso-paper-source: 0; }}\n\
         div.Section1 {{ page: Section1; width: {width}mm; height: {height}mm; }}\n\
         p, h1, h2, h3, h4, h5, h6, div {{ margin: 0; padding: 0; }}\n\
         </style>\n\
         </head>\n\
         <body lang=EN-US>\n\
         <div class=Section1>\n",
        title = escape(&state.title),
    )?;

    // One physical page per logical page, in increasing index order
    for page in 0..state.page_count {
        if page > 0 {
            writeln!(
                out,
                "<br clear=all style='mso-special-character:line-break;page-break-before:always'>"
            )?;
        }

        writeln!(
            out,
            "<div style=\"position: relative; width: {width}mm; height: {height}mm; overflow: hidden;\">"
        )?;
        for el in state.elements_on_page(page) {
            write_element(el, out)?;
        }
        writeln!(out, "</div>")?;
    }

    write!(out, "</div>\n</body>\n</html>\n")
}

fn write_element(el: &DocElement, out: &mut impl Write) -> fmt::Result {
    let resolved = style::resolve(el.style.as_ref());

    match el.kind {
        ElementKind::Text => {
            write!(
                out,
                "<div style=\"{pos}{text}\">{content}</div>\n",
                pos = position_css(el, false),
                text = text_css(&resolved),
                content = escape(&el.content).replace('\n', "<br>"),
            )
        }
        ElementKind::Image => {
            write!(
                out,
                "<div style=\"{pos}\"><img src=\"{src}\" \
                 style=\"width: 100%; height: 100%; object-fit: fill;\"></div>\n",
                pos = position_css(el, true),
                src = escape(&el.content),
            )
        }
        ElementKind::Rect => {
            let mut css = position_css(el, true);
            if let Some(ref background) = resolved.background_color {
                let _ = write!(css, "background-color: {background}; ");
            }
            if let Some(ref border) = resolved.border {
                let _ = write!(css, "border: {border}; ");
            }
            if let Some(radius) = resolved.border_radius {
                let _ = write!(css, "border-radius: {radius}px; ");
            }
            write!(out, "<div style=\"{css}\"></div>\n")
        }
        ElementKind::Line => {
            let border = resolved.border.as_deref().unwrap_or("1px solid #000000");
            write!(
                out,
                "<div style=\"{pos}border-top: {border};\"></div>\n",
                pos = position_css(el, false),
            )
        }
    }
}

/// Absolute placement within the page container, in mm.
fn position_css(el: &DocElement, with_height: bool) -> String {
    let mut css = format!(
        "position: absolute; left: {}mm; top: {}mm; width: {}mm; ",
        el.x, el.y, el.width
    );
    if with_height {
        let _ = write!(css, "height: {}mm; ", el.height);
    }
    css
}

fn text_css(resolved: &Resolved) -> String {
    let mut css = format!(
        "font-family: {}; font-size: {}px; font-weight: {}; font-style: {}; \
         text-decoration: {}; text-align: {}; color: {}; line-height: {}; \
         padding-left: {}px; box-sizing: border-box; ",
        resolved.font_family,
        resolved.font_size,
        resolved.font_weight.css(),
        resolved.font_style.css(),
        resolved.text_decoration,
        resolved.text_align.css(),
        resolved.color,
        resolved.line_height,
        resolved.padding,
    );

    if let Some(ref background) = resolved.background_color {
        let _ = write!(css, "background-color: {background}; ");
    }
    if let Some(spacing) = resolved.letter_spacing {
        let _ = write!(css, "letter-spacing: {spacing}px; ");
    }
    if let Some(ref border) = resolved.border {
        let _ = write!(css, "border: {border}; ");
    }
    if let Some(radius) = resolved.border_radius {
        let _ = write!(css, "border-radius: {radius}px; ");
    }
    if let Some(ref list_style) = resolved.list_style {
        if list_style != "none" {
            let _ = write!(
                css,
                "display: list-item; list-style-type: {list_style}; list-style-position: inside; "
            );
        }
    }
    if resolved.opacity < 1.0 {
        let _ = write!(css, "opacity: {}; ", resolved.opacity);
    }

    css
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
