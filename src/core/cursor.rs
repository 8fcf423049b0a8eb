use glam::DVec2;

use super::constants::CURSOR_SMOOTHING;

/// Trailing cursor outline that chases the raw pointer.
///
/// Each [`tick`](SmoothCursor::tick) moves the rendered position a fixed
/// fraction of the remaining distance toward the pointer. With
/// `0 < speed < 1` this never overshoots and never lands exactly on the
/// target, which is what gives the outline its lag.
#[derive(Clone, Copy, Debug)]
pub struct SmoothCursor {
    pointer: DVec2,
    rendered: DVec2,
    speed: f64,
}

impl Default for SmoothCursor {
    fn default() -> Self {
        Self::new(CURSOR_SMOOTHING)
    }
}

impl SmoothCursor {
    pub fn new(speed: f64) -> Self {
        Self {
            pointer: DVec2::ZERO,
            rendered: DVec2::ZERO,
            speed: speed.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn set_pointer(&mut self, pointer: DVec2) {
        self.pointer = pointer;
    }

    #[inline]
    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    #[inline]
    pub fn rendered(&self) -> DVec2 {
        self.rendered
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Advance one display frame and return the new rendered position.
    #[inline]
    pub fn tick(&mut self) -> DVec2 {
        self.rendered = smooth_step(self.rendered, self.pointer, self.speed);
        self.rendered
    }
}

#[inline]
pub fn smooth_step(current: DVec2, target: DVec2, speed: f64) -> DVec2 {
    current + (target - current) * speed
}

/// CSS `left`/`top` values for a fixed-position element centred by CSS.
#[inline]
pub fn px(v: f64) -> String {
    format!("{v}px")
}
