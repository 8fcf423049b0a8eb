use crate::core::{px, SmoothCursor};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that re-registers itself every frame and
/// can be stopped. Dropping the handle does not stop it; call [`stop`].
///
/// [`stop`]: FrameLoop::stop
#[derive(Clone)]
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            frame();
            pending_clone.set(request(&tick_clone));
        }) as Box<dyn FnMut()>));

        pending.set(request(&tick));
        Self { tick, pending }
    }

    /// Cancel the queued frame and release the callback.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let guard = tick.borrow();
    let closure = guard.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

/// Per-frame cursor outline update.
pub struct CursorFrame {
    pub cursor: Rc<RefCell<SmoothCursor>>,
    pub outline: web::Element,
}

impl CursorFrame {
    pub fn frame(&mut self) {
        let p = self.cursor.borrow_mut().tick();
        crate::dom::set_style(&self.outline, "left", &px(p.x));
        crate::dom::set_style(&self.outline, "top", &px(p.y));
    }
}

pub fn start_cursor_loop(mut ctx: CursorFrame) -> FrameLoop {
    FrameLoop::start(move || ctx.frame())
}
