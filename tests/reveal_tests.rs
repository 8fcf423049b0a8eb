// Host-side tests for fire-once reveal.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod sections {
        include!("../src/core/sections.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use crate::core::reveal::*;

#[test]
fn reveals_once_when_fifteen_percent_visible() {
    let mut r = RevealTracker::new(3);
    assert!(!r.on_visibility(1, true, 0.05));
    assert!(!r.is_revealed(1));
    assert!(r.on_visibility(1, true, 0.2));
    assert!(r.is_revealed(1));
    // a second crossing is not reported again
    assert!(!r.on_visibility(1, true, 0.9));
    assert_eq!(r.revealed_count(), 1);
}

#[test]
fn revealed_stays_revealed() {
    let mut r = RevealTracker::new(1);
    r.on_visibility(0, true, 1.0);
    for (intersecting, ratio) in [(false, 0.0), (true, 0.01), (false, 0.5), (true, 0.2)] {
        r.on_visibility(0, intersecting, ratio);
        assert!(r.is_revealed(0));
    }
}

#[test]
fn not_intersecting_never_reveals() {
    let mut r = RevealTracker::new(1);
    assert!(!r.on_visibility(0, false, 0.5));
    assert!(!r.is_revealed(0));
}

#[test]
fn unknown_index_is_ignored() {
    let mut r = RevealTracker::default();
    assert!(r.is_empty());
    assert!(!r.on_visibility(4, true, 1.0));
    let i = r.register();
    assert_eq!(i, 0);
    assert_eq!(r.len(), 1);
    assert!(r.on_visibility(i, true, 1.0));
}

#[test]
fn rising_report_within_slack_reveals() {
    let mut r = RevealTracker::new(1);
    assert!(!r.on_visibility(0, true, 0.10));
    assert!(r.on_visibility(0, true, 0.1499));
    assert!(r.is_revealed(0));
}

#[test]
fn falling_report_just_under_threshold_does_not_reveal() {
    let mut r = RevealTracker::new(1);
    // last seen at 30% while not intersecting, then shrinking through 15%
    assert!(!r.on_visibility(0, false, 0.30));
    assert!(!r.on_visibility(0, true, 0.148));
    assert!(!r.is_revealed(0));
    // growing again from there counts
    assert!(r.on_visibility(0, true, 0.149));
}
