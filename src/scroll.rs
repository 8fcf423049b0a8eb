use crate::constants::CLASS_NO_SCROLL;
use crate::core::{ScrollLock, ScrollOwner};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedScrollLock = Rc<RefCell<ScrollLock>>;

/// Update one owner's hold and render the body flag from the result.
pub fn hold(lock: &SharedScrollLock, owner: ScrollOwner, held: bool) {
    let locked = {
        let mut l = lock.borrow_mut();
        l.set(owner, held);
        l.is_locked()
    };
    dom::set_body_class(CLASS_NO_SCROLL, locked);
}
