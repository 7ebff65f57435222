//! Image ingestion: raw picked-file bytes to a placeable image element.
//!
//! The file picker and its asynchronous read live in the embedding; once the
//! bytes arrive, this module probes the decoded dimensions, scales them to
//! fit the printable width, and packs the bytes into a data URI that becomes
//! the `content` of a new image element.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::GenericImageView;
use thiserror::Error;

use crate::constants::MAX_IMAGE_WIDTH_MM;
use crate::geometry::px_to_mm;
use crate::types::{ElementKind, ElementSpec};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported or corrupt image data: {0}")]
    Decode(#[from] image::ImageError),
}

/// Build an image [`ElementSpec`] from picked-file bytes.
///
/// The element is sized from the decoded pixel dimensions at the fixed
/// density, capped at the printable width with the aspect ratio preserved.
pub fn image_spec_from_bytes(
    bytes: &[u8],
    page: usize,
    x_mm: f32,
    y_mm: f32,
) -> Result<ElementSpec, IngestError> {
    let format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory(bytes)?;
    let (px_width, px_height) = decoded.dimensions();

    let mut width = px_to_mm(px_width as f32);
    let mut height = px_to_mm(px_height as f32);
    if width > MAX_IMAGE_WIDTH_MM {
        let scale = MAX_IMAGE_WIDTH_MM / width;
        width = MAX_IMAGE_WIDTH_MM;
        height *= scale;
    }

    let content = format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    );

    Ok(ElementSpec::new(ElementKind::Image, x_mm, y_mm, width, height)
        .on_page(page)
        .with_content(content))
}
