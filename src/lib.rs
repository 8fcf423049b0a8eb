#![cfg(target_arch = "wasm32")]
use crate::core::ScrollLock;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod observe;
mod overlay;
mod page;
mod scroll;

thread_local! {
    // Handles that must outlive `init` so the loops can be torn down.
    static CURSOR_LOOP: RefCell<Option<frame::FrameLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-motion starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the cursor animation loop. Everything else is event driven and
/// idles on its own.
#[wasm_bindgen]
pub fn teardown() {
    CURSOR_LOOP.with(|l| {
        if let Some(lp) = l.borrow_mut().take() {
            lp.stop();
            log::info!("[cursor] loop stopped");
        }
    });
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    page::wire_preloader(&document);

    // Cursor
    let cursor_loop = events::pointer::wire_cursor(&document);
    CURSOR_LOOP.with(|l| *l.borrow_mut() = cursor_loop);
    events::pointer::wire_hover_flags(&document);

    // Navigation
    let scroll_lock = Rc::new(RefCell::new(ScrollLock::default()));
    events::nav::wire_mobile_drawer(&document, &scroll_lock);
    events::nav::wire_nav_scrolled(&document);
    observe::wire_section_highlight(&document);

    // Scroll reveal
    observe::wire_reveal(&document);

    // Overlays
    let media_modal = overlay::wire_media_modal(&document, &scroll_lock);
    overlay::wire_gallery(&document, media_modal.as_ref());
    overlay::wire_detail_modal(&document, &scroll_lock);

    // Page chrome
    page::wire_clock(&document);
    page::wire_skill_pop(&document);
    page::paint_bento_backgrounds(&document);

    log::info!("[init] wired");
    Ok(())
}
