//! Word export tests: snapshot consumption contract.

use letterboard::export::{self, word};
use letterboard::store::Action;
use letterboard::types::{Orientation, PaperSize};

use crate::helpers::{TestDocumentBuilder, store_with_text, text_spec};

#[test]
fn test_one_container_per_page_in_order() {
    let store = TestDocumentBuilder::new()
        .with_pages(3)
        .with_text("first", (10.0, 10.0))
        .with_spec(text_spec("second", 10.0, 10.0).on_page(1))
        .build();

    let html = word::to_html(store.present());
    let containers = html.matches("position: relative;").count();
    assert_eq!(containers, 3);

    let breaks = html.matches("page-break-before:always").count();
    assert_eq!(breaks, 2);

    // Page order follows page index
    assert!(html.find("first").unwrap() < html.find("second").unwrap());
}

#[test]
fn test_page_rule_tracks_configuration() {
    let mut store = store_with_text("A");
    store.dispatch(Action::SetPageSize {
        size: PaperSize::A5,
        width: None,
        height: None,
    });
    store.dispatch(Action::SetOrientation(Orientation::Landscape));

    let html = word::to_html(store.present());
    assert!(html.contains("size: 210mm 148mm"));
    assert!(html.contains("mso-page-orientation: landscape"));
}

#[test]
fn test_elements_are_positioned_in_literal_mm() {
    let store = TestDocumentBuilder::new()
        .with_text("anchored", (25.0, 40.0))
        .build();

    let html = word::to_html(store.present());
    assert!(html.contains("left: 25mm"));
    assert!(html.contains("top: 40mm"));
    assert!(html.contains("width: 80mm"));
}

#[test]
fn test_text_content_is_escaped() {
    let store = TestDocumentBuilder::new()
        .with_text("Fees < 100 & rising", (10.0, 10.0))
        .build();

    let html = word::to_html(store.present());
    assert!(html.contains("Fees &lt; 100 &amp; rising"));
    assert!(!html.contains("Fees < 100"));
}

#[test]
fn test_missing_style_fields_fall_back() {
    // No style at all: the exporter must still emit a complete font stack
    let store = store_with_text("bare");
    let html = word::to_html(store.present());
    assert!(html.contains("font-family: Inter, sans-serif;"));
    assert!(html.contains("font-size: 12px;"));
}

#[test]
fn test_export_does_not_mutate_state() {
    let store = store_with_text("A");
    let before = store.present().clone();
    let _ = word::to_html(store.present());
    assert_eq!(store.present(), &before);
}

#[test]
fn test_export_word_file_writes_document() {
    let store = store_with_text("On disk");
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("letter.doc");

    export::export_word_file(store.present(), &path).expect("export");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert!(written.contains("On disk"));
    assert!(written.contains("div.Section1"));
}
