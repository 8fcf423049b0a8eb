// Host-agnostic state machines. Nothing in here touches web-sys, so the
// host test suite can include these files directly.
pub mod clock;
pub mod constants;
pub mod cursor;
pub mod drawer;
pub mod modal;
pub mod preview;
pub mod reveal;
pub mod scroll_lock;
pub mod sections;

pub use clock::format_clock;
pub use constants::*;
pub use cursor::{px, SmoothCursor};
pub use drawer::MobileDrawer;
pub use modal::{ModalContent, ModalController, ModalFlags, ModalPhase};
pub use preview::FloatingPreview;
pub use reveal::RevealTracker;
pub use scroll_lock::{ScrollLock, ScrollOwner};
pub use sections::{nav_is_scrolled, NavHighlighter, SectionEntry};
