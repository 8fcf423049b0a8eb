use glam::DVec2;

use super::constants::PREVIEW_POINTER_OFFSET_PX;

/// Gallery hover preview. Unlike the modals it has no exit delay: it is
/// either showing an image or hidden.
#[derive(Clone, Debug)]
pub struct FloatingPreview {
    image: Option<String>,
    position: DVec2,
    offset: DVec2,
}

impl Default for FloatingPreview {
    fn default() -> Self {
        Self {
            image: None,
            position: DVec2::ZERO,
            offset: DVec2::splat(PREVIEW_POINTER_OFFSET_PX),
        }
    }
}

impl FloatingPreview {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.image.is_some()
    }

    #[inline]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Pointer entered a gallery item carrying `data-img`.
    pub fn show(&mut self, image: Option<String>) {
        self.image = Some(image.unwrap_or_default());
    }

    pub fn hide(&mut self) {
        self.image = None;
    }

    /// Follow the raw (unsmoothed) pointer at a fixed offset.
    pub fn track(&mut self, pointer: DVec2) -> DVec2 {
        self.position = pointer + self.offset;
        self.position
    }

    pub fn transform(&self) -> String {
        translate_css(self.position)
    }
}

#[inline]
pub fn translate_css(p: DVec2) -> String {
    format!("translate({}px, {}px)", p.x, p.y)
}
