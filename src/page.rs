use crate::constants::{
    ATTR_IMG, BENTO_BG, BENTO_CARDS, CLASS_FADE_OUT, CLASS_SKILL_POP, CLOCK_ID, PRELOADER,
    SKILL_CARDS,
};
use crate::core::{format_clock, CLOCK_REFRESH_MS, PRELOADER_FADE_DELAY_MS, SKILL_POP_RESET_MS};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Fade the preloader out a fixed time after the page finished loading.
pub fn wire_preloader(document: &web::Document) {
    let Some(preloader) = dom::query(document, PRELOADER) else {
        return;
    };
    let fade = move || {
        dom::set_timeout(PRELOADER_FADE_DELAY_MS, move || {
            dom::set_class(&preloader, CLASS_FADE_OUT, true);
        });
    };
    if document.ready_state() == "complete" {
        // `load` already fired before the module started
        fade();
    } else if let Some(window) = web::window() {
        let mut fade = Some(fade);
        dom::add_listener(&window, "load", move |_: web::Event| {
            if let Some(f) = fade.take() {
                f();
            }
        });
    }
}

fn update_clock(clock: &web::Element) {
    let now = js_sys::Date::new_0();
    clock.set_text_content(Some(&format_clock(now.get_hours(), now.get_minutes())));
}

pub fn wire_clock(document: &web::Document) {
    let Some(clock) = document.get_element_by_id(CLOCK_ID) else {
        return;
    };
    update_clock(&clock);
    if dom::set_interval(CLOCK_REFRESH_MS, move || update_clock(&clock)).is_none() {
        log::warn!("[clock] interval not scheduled");
    }
}

/// Skill cards pop on click. A re-click restarts the reset timer instead of
/// letting the earlier one cut the new pop short.
pub fn wire_skill_pop(document: &web::Document) {
    for card in dom::query_all(document, SKILL_CARDS) {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let el = card.clone();
        dom::add_listener(&card, "click", move |_: web::Event| {
            if let Some(handle) = pending.take() {
                dom::clear_timeout(handle);
            }
            dom::set_class(&el, CLASS_SKILL_POP, true);
            let (el_reset, pending_reset) = (el.clone(), pending.clone());
            let handle = dom::set_timeout(SKILL_POP_RESET_MS, move || {
                pending_reset.set(None);
                dom::set_class(&el_reset, CLASS_SKILL_POP, false);
            });
            pending.set(handle);
        });
    }
}

/// Bento cards carry their artwork in `data-img`; paint it onto `.bento-bg`.
pub fn paint_bento_backgrounds(document: &web::Document) {
    for card in dom::query_all(document, BENTO_CARDS) {
        let (Some(img), Some(bg)) = (card.get_attribute(ATTR_IMG), dom::query_within(&card, BENTO_BG))
        else {
            continue;
        };
        if img.is_empty() {
            continue;
        }
        dom::set_style(&bg, "background-image", &format!("url({img})"));
        dom::set_style(&bg, "background-size", "cover");
        dom::set_style(&bg, "background-position", "center");
    }
}
