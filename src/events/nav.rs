use crate::constants::{
    CLASS_ACTIVE, CLASS_SCROLLED, HAMBURGER_ID, MAIN_NAV_ID, MOBILE_LINKS, MOBILE_MENU_ID,
};
use crate::core::{nav_is_scrolled, MobileDrawer, ScrollOwner};
use crate::dom;
use crate::scroll::{self, SharedScrollLock};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hamburger toggles the drawer; following any mobile link closes it.
pub fn wire_mobile_drawer(document: &web::Document, lock: &SharedScrollLock) {
    let (Some(hamburger), Some(menu)) = (
        document.get_element_by_id(HAMBURGER_ID),
        document.get_element_by_id(MOBILE_MENU_ID),
    ) else {
        log::debug!("[wire] skip mobile drawer");
        return;
    };
    let drawer = Rc::new(RefCell::new(MobileDrawer::default()));

    {
        let drawer = drawer.clone();
        let (button, menu, lock) = (hamburger.clone(), menu.clone(), lock.clone());
        dom::add_listener(&hamburger, "click", move |_: web::Event| {
            let open = drawer.borrow_mut().toggle();
            render_drawer(&button, &menu, &lock, open);
        });
    }

    for link in dom::query_all(document, MOBILE_LINKS) {
        let drawer = drawer.clone();
        let (button, menu, lock) = (hamburger.clone(), menu.clone(), lock.clone());
        dom::add_listener(&link, "click", move |_: web::Event| {
            // render closed even if the drawer already was
            drawer.borrow_mut().close();
            render_drawer(&button, &menu, &lock, false);
        });
    }
}

fn render_drawer(button: &web::Element, menu: &web::Element, lock: &SharedScrollLock, open: bool) {
    dom::set_class(button, CLASS_ACTIVE, open);
    dom::set_class(menu, CLASS_ACTIVE, open);
    scroll::hold(lock, ScrollOwner::Drawer, open);
}

/// Solid navigation bar once the hero has mostly scrolled away.
pub fn wire_nav_scrolled(document: &web::Document) {
    let Some(nav) = document.get_element_by_id(MAIN_NAV_ID) else {
        log::debug!("[wire] skip nav scroll style: no #{MAIN_NAV_ID}");
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let update = {
        let window = window.clone();
        move || {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let viewport_h = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            dom::set_class(&nav, CLASS_SCROLLED, nav_is_scrolled(scroll_y, viewport_h));
        }
    };
    update();
    dom::add_listener(&window, "scroll", move |_: web::Event| update());
}
