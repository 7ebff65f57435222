//! End-to-end editing workflows across store, templates, ingest, and export.

use letterboard::export::word;
use letterboard::ingest;
use letterboard::store::{Action, EditorStore};
use letterboard::templates;
use letterboard::types::{DocumentState, ElementCategory, ElementKind};

use crate::helpers::{assert_element_count, init_tracing, store_with_texts};

#[test]
fn test_compose_letter_with_header_and_extra_page() {
    init_tracing();
    let mut store = EditorStore::new();

    store.dispatch(Action::RenameDocument("Letter of Authorization".to_string()));
    store.dispatch(Action::ToggleHeader(true));
    let header_elements = store.present().elements.len();

    // Bulk-insert the letter body shifted below the letterhead
    let body = templates::formal_letter(true);
    let body_len = body.len();
    store.dispatch(Action::AddMultipleElements(body));
    assert_element_count(&store, header_elements + body_len);
    assert!(store.present().selected_ids.is_empty());

    // A second page picks up its own header block
    store.dispatch(Action::AddPage);
    assert_eq!(store.present().page_count, 2);
    assert_eq!(
        store
            .present()
            .elements
            .iter()
            .filter(|el| el.page == 1 && el.category == ElementCategory::Header)
            .count(),
        header_elements
    );

    // Removing the page takes its header along
    store.dispatch(Action::RemovePage(Some(1)));
    assert_eq!(store.present().page_count, 1);
    assert_element_count(&store, header_elements + body_len);

    let html = word::to_html(store.present());
    assert!(html.contains("LETTER OF AUTHORIZATION"));
    assert!(html.contains("<title>Letter of Authorization</title>"));
}

#[test]
fn test_snapshot_save_and_load_round_trip() {
    let mut source = store_with_texts(&["A", "B"]);
    source.dispatch(Action::RenameDocument("Saved".to_string()));
    let json = source.present().to_json().expect("serialize");

    let restored = DocumentState::from_json(&json).expect("deserialize");
    assert_eq!(&restored, source.present());

    // Resuming a session directly from a snapshot
    let resumed = EditorStore::from_state(restored.clone());
    assert_eq!(resumed.present(), source.present());
    assert!(!resumed.can_undo());

    // Loading into a fresh session is one history-producing action
    let mut target = EditorStore::new();
    target.dispatch(Action::LoadDocument(restored));
    assert_eq!(target.present(), source.present());
    assert!(target.undo());
    assert_eq!(target.present().title, "Untitled Document");
}

#[test]
fn test_image_upload_becomes_an_element() {
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    let img = RgbaImage::from_pixel(60, 30, image::Rgba([200, 10, 10, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode");

    // The async file read completes and dispatches a single AddElement
    let spec = ingest::image_spec_from_bytes(&bytes, 0, 40.0, 40.0).expect("ingest");
    let mut store = EditorStore::new();
    store.dispatch(Action::AddElement(spec));

    let el = &store.present().elements[0];
    assert_eq!(el.kind, ElementKind::Image);
    assert!(el.content.starts_with("data:image/png;base64,"));
    assert_eq!(store.present().selected_ids, vec![el.id.clone()]);

    // The exporter embeds the data URI as the image source
    let html = word::to_html(store.present());
    assert!(html.contains("img src=\"data:image/png;base64,"));
}

#[test]
fn test_remove_selected_via_keyboard_path() {
    let mut store = store_with_texts(&["A", "B", "C"]);
    let ids = crate::helpers::element_ids(&store);

    store.dispatch(Action::SetSelection(vec![ids[0].clone(), ids[2].clone()]));
    store.dispatch(Action::RemoveSelected);

    assert_element_count(&store, 1);
    assert_eq!(store.present().elements[0].content, "B");
    assert!(store.present().selected_ids.is_empty());

    store.undo();
    assert_element_count(&store, 3);
}
