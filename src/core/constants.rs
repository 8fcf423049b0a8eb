// Timing and geometry tuning shared by the state machines.
// Durations must match the paired CSS transitions or the state desyncs from
// what is shown on screen.

// Cursor
pub const CURSOR_SMOOTHING: f64 = 0.15; // fraction of remaining distance per frame

// Overlays
pub const MODAL_CLOSE_DELAY_MS: u32 = 400; // exit animation of .closing
pub const PREVIEW_POINTER_OFFSET_PX: f64 = 20.0; // preview trails the raw pointer by this much

// Page chrome
pub const SKILL_POP_RESET_MS: u32 = 600;
pub const PRELOADER_FADE_DELAY_MS: u32 = 1500; // counted from window `load`
pub const CLOCK_REFRESH_MS: u32 = 1000;
pub const NAV_SCROLLED_OFFSET_PX: f64 = 50.0; // nav turns solid this far above the fold

// Visibility thresholds (fraction of the element inside the viewport)
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.55;
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.15;

// Browsers report the ratio at the crossing point with some float slack
// (e.g. 0.5499). A rising report within this much of the threshold counts;
// a falling one never does.
pub const VISIBILITY_RATIO_SLACK: f64 = 0.005;
