//! Export consumers of the document snapshot.
//!
//! Exports are read-only: they take a `&DocumentState` at invocation time and
//! never mutate it, so a failed export leaves the document untouched. The
//! word-processor export is implemented here; PDF rasterization is delegated
//! to an external collaborator consuming the same snapshot.

pub mod word;

use std::path::Path;
use thiserror::Error;

use crate::types::DocumentState;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export output: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the Word-compatible HTML export to a file.
///
/// The file should carry a `.doc` extension for Word to open the HTML
/// content directly.
pub fn export_word_file(state: &DocumentState, path: impl AsRef<Path>) -> Result<(), ExportError> {
    std::fs::write(path, word::to_html(state))?;
    Ok(())
}
