use fnv::FnvHashMap;

use super::constants::{
    NAV_SCROLLED_OFFSET_PX, SECTION_VISIBILITY_THRESHOLD, VISIBILITY_RATIO_SLACK,
};

/// One visibility report for an observed section-like region.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionEntry {
    pub id: Option<String>,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl SectionEntry {
    pub fn new(id: Option<impl Into<String>>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            id: id.map(Into::into),
            is_intersecting,
            ratio,
        }
    }
}

/// Whether a report is a rising crossing of `threshold`.
///
/// A ratio at or above the threshold always counts. A ratio just under it
/// (float slack at the crossing point) only counts while the region is
/// growing on screen; on the way out the same ratio is an exit.
#[inline]
pub fn is_rising_enter(is_intersecting: bool, ratio: f64, previous: f64, threshold: f64) -> bool {
    is_intersecting
        && (ratio >= threshold || (ratio > previous && ratio + VISIBILITY_RATIO_SLACK >= threshold))
}

/// A switch of the highlighted navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightChange {
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

/// Maps the current section to at most one active navigation link.
///
/// `current_section` is the only source of truth; link classes are rendered
/// from [`active_link`](NavHighlighter::active_link). Exit events, including
/// a region falling back through the threshold, never change anything: a
/// later section's entry supersedes the earlier one, and when nothing meets
/// the threshold the last highlight simply stays.
#[derive(Clone, Debug)]
pub struct NavHighlighter {
    by_target: FnvHashMap<String, usize>,
    link_count: usize,
    threshold: f64,
    last_ratio: FnvHashMap<String, f64>,
    current_section: Option<String>,
    active: Option<usize>,
}

impl NavHighlighter {
    /// Build from the links' `href` values, in document order.
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut by_target = FnvHashMap::default();
        let mut link_count = 0;
        for (i, href) in hrefs.into_iter().enumerate() {
            link_count = i + 1;
            if let Some(target) = href.as_ref().and_then(|h| anchor_target(h.as_ref())) {
                // first link wins, matching querySelector
                by_target.entry(target.to_string()).or_insert(i);
            }
        }
        Self {
            by_target,
            link_count,
            threshold: SECTION_VISIBILITY_THRESHOLD,
            last_ratio: FnvHashMap::default(),
            current_section: None,
            active: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    #[inline]
    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    #[inline]
    pub fn active_link(&self) -> Option<usize> {
        self.active
    }

    #[inline]
    pub fn is_active(&self, link: usize) -> bool {
        self.active == Some(link)
    }

    pub fn link_for_section(&self, id: &str) -> Option<usize> {
        self.by_target.get(id).copied()
    }

    /// Apply one batch of visibility reports in delivery order.
    ///
    /// Returns the net change, if the active link differs afterwards.
    pub fn on_entries<'a, I>(&mut self, entries: I) -> Option<HighlightChange>
    where
        I: IntoIterator<Item = &'a SectionEntry>,
    {
        let previous = self.active;
        for entry in entries {
            if self.is_enter(entry) {
                self.enter(entry.id.as_deref());
            }
        }
        (self.active != previous).then_some(HighlightChange {
            previous,
            next: self.active,
        })
    }

    /// Classify `entry` against the region's previous report and remember
    /// its ratio for the next one.
    fn is_enter(&mut self, entry: &SectionEntry) -> bool {
        let previous = match &entry.id {
            Some(id) => self
                .last_ratio
                .insert(id.clone(), entry.ratio)
                .unwrap_or(0.0),
            None => 0.0,
        };
        is_rising_enter(entry.is_intersecting, entry.ratio, previous, self.threshold)
    }

    /// A region crossed the threshold: clear every link, then light the one
    /// targeting `id`, if any.
    pub fn enter(&mut self, id: Option<&str>) {
        self.current_section = id.map(str::to_string);
        self.active = id.and_then(|id| self.link_for_section(id));
    }
}

/// `#about` -> `about`; hrefs that are not in-page anchors have no target.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|t| !t.is_empty())
}

/// Whether the navigation bar should carry the solid "scrolled" style.
#[inline]
pub fn nav_is_scrolled(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height - NAV_SCROLLED_OFFSET_PX
}
