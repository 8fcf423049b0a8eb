use crate::constants::{
    CLASS_HOVERING, CLASS_NAV_HOVERED, CURSOR_DOT, CURSOR_OUTLINE, HOVER_TARGETS, NAV_HOVER_LINKS,
};
use crate::core::{px, SmoothCursor};
use crate::dom;
use crate::frame::{self, CursorFrame, FrameLoop};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Custom cursor: the dot follows raw moves, the outline trails it on the
/// frame loop. Returns the loop so it can be stopped, or `None` when the
/// page has no custom cursor.
pub fn wire_cursor(document: &web::Document) -> Option<FrameLoop> {
    let (Some(dot), Some(outline)) = (
        dom::query(document, CURSOR_DOT),
        dom::query(document, CURSOR_OUTLINE),
    ) else {
        log::debug!("[wire] skip cursor: no {CURSOR_DOT} / {CURSOR_OUTLINE}");
        return None;
    };
    let window = web::window()?;
    let cursor = Rc::new(RefCell::new(SmoothCursor::default()));

    let cursor_move = cursor.clone();
    dom::add_listener(&window, "mousemove", move |ev: web::MouseEvent| {
        let pos = client_pos(&ev);
        cursor_move.borrow_mut().set_pointer(pos);
        dom::set_style(&dot, "left", &px(pos.x));
        dom::set_style(&dot, "top", &px(pos.y));
    });

    Some(frame::start_cursor_loop(CursorFrame { cursor, outline }))
}

/// Body-level hover flags. Enter/leave come in pairs per element, so plain
/// set/clear is enough.
pub fn wire_hover_flags(document: &web::Document) {
    wire_body_flag(document, HOVER_TARGETS, CLASS_HOVERING);
    wire_body_flag(document, NAV_HOVER_LINKS, CLASS_NAV_HOVERED);
}

fn wire_body_flag(document: &web::Document, selector: &str, class: &'static str) {
    for el in dom::query_all(document, selector) {
        dom::add_listener(&el, "mouseenter", move |_: web::Event| {
            dom::set_body_class(class, true);
        });
        dom::add_listener(&el, "mouseleave", move |_: web::Event| {
            dom::set_body_class(class, false);
        });
    }
}
