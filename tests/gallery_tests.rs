// Host-side tests for the gallery preview and its hand-off to the modal.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod modal {
        include!("../src/core/modal.rs");
    }
    pub mod preview {
        include!("../src/core/preview.rs");
    }
}

use crate::core::modal::*;
use crate::core::preview::*;
use glam::DVec2;

#[test]
fn hover_shows_and_leave_hides() {
    let mut preview = FloatingPreview::default();
    assert!(!preview.is_active());

    preview.show(Some("a.jpg".into()));
    assert!(preview.is_active());
    assert_eq!(preview.image(), Some("a.jpg"));

    preview.hide();
    assert!(!preview.is_active());
    assert_eq!(preview.image(), None);
}

#[test]
fn item_without_image_still_activates() {
    let mut preview = FloatingPreview::default();
    preview.show(None);
    assert!(preview.is_active());
    assert_eq!(preview.image(), Some(""));
}

#[test]
fn tracks_raw_pointer_with_offset() {
    let mut preview = FloatingPreview::default();
    let pos = preview.track(DVec2::new(100.0, 50.0));
    assert_eq!(pos, DVec2::new(120.0, 70.0));
    assert_eq!(preview.transform(), "translate(120px, 70px)");
    // no smoothing: the next move lands immediately
    preview.track(DVec2::new(0.5, 0.0));
    assert_eq!(preview.position(), DVec2::new(20.5, 20.0));
}

#[test]
fn click_opens_modal_with_item_attributes() {
    let mut modal: ModalController<u32> = ModalController::default();
    let content = ModalContent::from_attributes(
        Some("a.jpg".into()),
        Some("Alpha".into()),
        || None,
        Some("First project".into()),
    );
    assert!(modal.open(Some(content), |_| {}));
    let shown = modal.content().expect("open modal has content");
    assert_eq!(shown.image, "a.jpg");
    assert_eq!(shown.title, "Alpha");
    assert_eq!(shown.description, "First project");
}
