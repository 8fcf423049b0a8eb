use crate::constants::{CLASS_ACTIVE, CLASS_IN_VIEW, DESKTOP_NAV_LINKS, REVEAL_TARGETS, SECTION_REGIONS};
use crate::core::{
    NavHighlighter, RevealTracker, SectionEntry, REVEAL_VISIBILITY_THRESHOLD,
    SECTION_VISIBILITY_THRESHOLD,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

/// Viewport-rooted observer firing when targets cross `threshold`.
fn new_observer(
    threshold: f64,
    callback: impl FnMut(js_sys::Array, web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(callback) as Box<ObserverCallback>);
    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin("0px");
    opts.set_threshold(&JsValue::from_f64(threshold));
    match web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &opts) {
        Ok(observer) => {
            closure.forget();
            Some(observer)
        }
        Err(e) => {
            log::error!("IntersectionObserver init error: {:?}", e);
            None
        }
    }
}

fn entries(batch: &js_sys::Array) -> impl Iterator<Item = web::IntersectionObserverEntry> + '_ {
    batch
        .iter()
        .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
}

/// Strict section highlighting: a desktop nav link lights up only while its
/// section is at least 55% on screen.
pub fn wire_section_highlight(document: &web::Document) {
    let sections = dom::query_all(document, SECTION_REGIONS);
    if sections.is_empty() {
        log::debug!("[wire] skip section highlight: no sections");
        return;
    }
    let links = dom::query_all(document, DESKTOP_NAV_LINKS);
    let mut highlighter = NavHighlighter::new(links.iter().map(|l| l.get_attribute("href")))
        .with_threshold(SECTION_VISIBILITY_THRESHOLD);
    // the markup may ship with a link pre-highlighted; start from "none"
    render_links(&links, None);

    let Some(observer) = new_observer(SECTION_VISIBILITY_THRESHOLD, move |batch, _| {
        let batch: Vec<SectionEntry> = entries(&batch)
            .map(|e| SectionEntry {
                id: e.target().get_attribute("id"),
                is_intersecting: e.is_intersecting(),
                ratio: e.intersection_ratio(),
            })
            .collect();
        if let Some(change) = highlighter.on_entries(&batch) {
            render_links(&links, change.next);
            log::info!(
                "[nav] active -> #{}",
                highlighter.current_section().unwrap_or_default()
            );
        }
    }) else {
        return;
    };
    for section in &sections {
        observer.observe(section);
    }
}

fn render_links(links: &[web::Element], active: Option<usize>) {
    for (i, link) in links.iter().enumerate() {
        dom::set_class(link, CLASS_ACTIVE, active == Some(i));
    }
}

/// Fire-once scroll reveal.
pub fn wire_reveal(document: &web::Document) {
    let targets = dom::query_all(document, REVEAL_TARGETS);
    if targets.is_empty() {
        return;
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let targets = Rc::new(targets);

    let targets_cb = targets.clone();
    let Some(observer) = new_observer(REVEAL_VISIBILITY_THRESHOLD, move |batch, observer| {
        for entry in entries(&batch) {
            let target = entry.target();
            let Some(i) = targets_cb.iter().position(|t| *t == target) else {
                continue;
            };
            let newly = tracker.borrow_mut().on_visibility(
                i,
                entry.is_intersecting(),
                entry.intersection_ratio(),
            );
            if newly {
                dom::set_class(&target, CLASS_IN_VIEW, true);
                observer.unobserve(&target);
            }
        }
    }) else {
        return;
    };
    for t in targets.iter() {
        observer.observe(t);
    }
    log::debug!("[wire] reveal: {} targets", targets.len());
}
