use crate::constants::*;
use crate::core::{FloatingPreview, ModalContent, ModalController, ScrollOwner};
use crate::dom;
use crate::events::pointer::client_pos;
use crate::scroll::{self, SharedScrollLock};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Content slots of a modal that shows per-trigger media.
struct ModalSlots {
    image: Option<web::Element>,
    title: Option<web::Element>,
    description: Option<web::Element>,
}

impl ModalSlots {
    fn fill(&self, content: &ModalContent) {
        if let Some(img) = &self.image {
            _ = img.set_attribute("src", &content.image);
        }
        if let Some(title) = &self.title {
            title.set_text_content(Some(&content.title));
        }
        if let Some(desc) = &self.description {
            desc.set_text_content(Some(&content.description));
        }
    }
}

/// One overlay element driven by a [`ModalController`]. Timer handles are
/// the browser's `setTimeout` ids.
pub struct ModalBinding {
    name: &'static str,
    root: web::Element,
    slots: Option<ModalSlots>,
    open_class: &'static str,
    owner: ScrollOwner,
    lock: SharedScrollLock,
    controller: RefCell<ModalController<i32>>,
}

impl ModalBinding {
    fn new(
        name: &'static str,
        root: web::Element,
        slots: Option<ModalSlots>,
        open_class: &'static str,
        owner: ScrollOwner,
        lock: &SharedScrollLock,
    ) -> Rc<Self> {
        Rc::new(Self {
            name,
            root,
            slots,
            open_class,
            owner,
            lock: lock.clone(),
            controller: RefCell::new(ModalController::default()),
        })
    }

    pub fn open(self: &Rc<Self>, content: Option<ModalContent>) {
        let opened = self
            .controller
            .borrow_mut()
            .open(content, dom::clear_timeout);
        if !opened {
            return;
        }
        if let (Some(slots), Some(content)) = (&self.slots, self.controller.borrow().content()) {
            slots.fill(content);
        }
        self.render();
        log::info!("[modal] open {}", self.name);
    }

    pub fn close(self: &Rc<Self>) {
        let scheduled = self
            .controller
            .borrow_mut()
            .close(|delay_ms| self.close_timer(delay_ms));
        if scheduled {
            self.closing();
        }
    }

    /// Arm the timer that ends the exit animation.
    fn close_timer(self: &Rc<Self>, delay_ms: u32) -> Option<i32> {
        let fired = Rc::new(Cell::new(None));
        let this = self.clone();
        let fired_cb = fired.clone();
        let handle = dom::set_timeout(delay_ms, move || {
            if let Some(handle) = fired_cb.get() {
                this.finish_close(handle);
            }
        });
        fired.set(handle);
        handle
    }

    fn closing(&self) {
        self.render();
        log::info!("[modal] closing {}", self.name);
    }

    fn finish_close(&self, handle: i32) {
        if self.controller.borrow_mut().finish_close(handle) {
            self.render();
        }
    }

    fn render(&self) {
        let (flags, holds_scroll) = {
            let c = self.controller.borrow();
            (c.flags(), c.holds_scroll())
        };
        dom::set_class(&self.root, CLASS_CLOSING, flags.closing);
        dom::set_class(&self.root, self.open_class, flags.open);
        scroll::hold(&self.lock, self.owner, holds_scroll);
    }

    /// Close on clicks that land on the scrim itself, never on content.
    fn wire_scrim(self: &Rc<Self>) {
        let this = self.clone();
        dom::add_listener(&self.root, "click", move |ev: web::Event| {
            let on_scrim = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .is_some_and(|t| t == this.root);
            let dismissed = this
                .controller
                .borrow_mut()
                .dismiss_on_click(on_scrim, |delay_ms| this.close_timer(delay_ms));
            if dismissed {
                this.closing();
            }
        });
    }

    fn wire_close_control(self: &Rc<Self>, control: Option<web::Element>) {
        let Some(control) = control else {
            log::debug!("[wire] {}: no close control", self.name);
            return;
        };
        let this = self.clone();
        dom::add_listener(&control, "click", move |_: web::Event| this.close());
    }

    /// Clicking `trigger` opens this modal with the trigger's content.
    pub fn wire_trigger(self: &Rc<Self>, trigger: &web::Element) {
        let this = self.clone();
        let el = trigger.clone();
        dom::add_listener(trigger, "click", move |_: web::Event| {
            this.open(Some(content_from(&el)));
        });
    }
}

/// Snapshot `data-img` / `data-title` / `data-desc`; the title falls back to
/// the item's visible name.
pub fn content_from(el: &web::Element) -> ModalContent {
    ModalContent::from_attributes(
        el.get_attribute(ATTR_IMG),
        el.get_attribute(ATTR_TITLE),
        || {
            dom::query_within(el, PROJECT_NAME)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
                .map(|h| h.inner_text())
        },
        el.get_attribute(ATTR_DESC),
    )
}

/// Shared media modal, opened from bento cards and gallery items.
pub fn wire_media_modal(
    document: &web::Document,
    lock: &SharedScrollLock,
) -> Option<Rc<ModalBinding>> {
    let Some(root) = document.get_element_by_id(MEDIA_MODAL_ID) else {
        log::debug!("[wire] skip media modal: no #{MEDIA_MODAL_ID}");
        return None;
    };
    let slots = ModalSlots {
        image: document.get_element_by_id(MEDIA_MODAL_IMG_ID),
        title: document.get_element_by_id(MEDIA_MODAL_TITLE_ID),
        description: document.get_element_by_id(MEDIA_MODAL_DESC_ID),
    };
    let modal = ModalBinding::new(
        "media",
        root,
        Some(slots),
        CLASS_OPEN,
        ScrollOwner::MediaModal,
        lock,
    );
    modal.wire_close_control(dom::query(document, MEDIA_MODAL_CLOSE));
    modal.wire_scrim();
    for card in dom::query_all(document, BENTO_CARDS) {
        modal.wire_trigger(&card);
    }
    Some(modal)
}

/// Personal details modal. Static content, so no slots.
pub fn wire_detail_modal(
    document: &web::Document,
    lock: &SharedScrollLock,
) -> Option<Rc<ModalBinding>> {
    let (Some(root), Some(open_btn)) = (
        document.get_element_by_id(DETAIL_MODAL_ID),
        document.get_element_by_id(DETAIL_OPEN_ID),
    ) else {
        log::debug!("[wire] skip detail modal");
        return None;
    };
    let modal = ModalBinding::new(
        "details",
        root,
        None,
        CLASS_ACTIVE,
        ScrollOwner::DetailModal,
        lock,
    );
    {
        let modal = modal.clone();
        dom::add_listener(&open_btn, "click", move |_: web::Event| modal.open(None));
    }
    modal.wire_close_control(document.get_element_by_id(DETAIL_CLOSE_ID));
    modal.wire_scrim();
    Some(modal)
}

/// Gallery items: hover shows the floating preview, click opens the media
/// modal. Nothing is wired unless both `#gallery` and `#work-preview` exist.
pub fn wire_gallery(document: &web::Document, modal: Option<&Rc<ModalBinding>>) {
    let (Some(gallery), Some(container)) = (
        document.get_element_by_id(GALLERY_ID),
        document.get_element_by_id(PREVIEW_ID),
    ) else {
        log::debug!("[wire] skip gallery: no #{GALLERY_ID} or #{PREVIEW_ID}");
        return;
    };
    let items = dom::query_all(document, PROJECT_ITEMS);
    if let Some(modal) = modal {
        for item in &items {
            modal.wire_trigger(item);
        }
    }
    let image = document.get_element_by_id(PREVIEW_IMG_ID);
    let preview = Rc::new(RefCell::new(FloatingPreview::default()));

    for item in &items {
        {
            let (preview, container, image, el) =
                (preview.clone(), container.clone(), image.clone(), item.clone());
            dom::add_listener(item, "mouseenter", move |_: web::Event| {
                let mut p = preview.borrow_mut();
                p.show(el.get_attribute(ATTR_IMG));
                render_preview(&p, &container, image.as_ref());
            });
        }
        {
            let (preview, container) = (preview.clone(), container.clone());
            dom::add_listener(item, "mouseleave", move |_: web::Event| {
                let mut p = preview.borrow_mut();
                p.hide();
                render_preview(&p, &container, None);
            });
        }
    }

    dom::add_listener(&gallery, "mousemove", move |ev: web::MouseEvent| {
        let mut p = preview.borrow_mut();
        p.track(client_pos(&ev));
        dom::set_style(&container, "transform", &p.transform());
    });
}

fn render_preview(preview: &FloatingPreview, container: &web::Element, image: Option<&web::Element>) {
    if let (Some(img), Some(src)) = (image, preview.image()) {
        _ = img.set_attribute("src", src);
    }
    dom::set_class(container, CLASS_ACTIVE, preview.is_active());
}
