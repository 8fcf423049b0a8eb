// Host-side tests for drawer, scroll lock and clock state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod clock {
        include!("../src/core/clock.rs");
    }
    pub mod drawer {
        include!("../src/core/drawer.rs");
    }
    pub mod scroll_lock {
        include!("../src/core/scroll_lock.rs");
    }
}

use crate::core::clock::*;
use crate::core::drawer::*;
use crate::core::scroll_lock::*;

#[test]
fn drawer_toggles_and_link_closes() {
    let mut d = MobileDrawer::default();
    assert!(d.toggle());
    assert!(d.is_open());
    assert!(d.close());
    assert!(!d.is_open());
    assert!(!d.close());
    assert!(d.toggle());
    assert!(!d.toggle());
}

#[test]
fn scroll_lock_counts_each_owner_once() {
    let mut lock = ScrollLock::default();
    lock.acquire(ScrollOwner::Drawer);
    lock.acquire(ScrollOwner::Drawer);
    assert!(lock.is_held_by(ScrollOwner::Drawer));
    lock.release(ScrollOwner::Drawer);
    assert!(!lock.is_locked());
}

#[test]
fn scroll_lock_releasing_stranger_keeps_lock() {
    let mut lock = ScrollLock::default();
    lock.set(ScrollOwner::DetailModal, true);
    lock.set(ScrollOwner::MediaModal, false);
    assert!(lock.is_locked());
    lock.set(ScrollOwner::DetailModal, false);
    assert!(!lock.is_locked());
}

#[test]
fn clock_is_zero_padded() {
    assert_eq!(format_clock(9, 5), "09:05");
    assert_eq!(format_clock(23, 59), "23:59");
    assert_eq!(format_clock(0, 0), "00:00");
}
