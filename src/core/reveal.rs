use super::constants::REVEAL_VISIBILITY_THRESHOLD;
use super::sections::is_rising_enter;

/// Fire-once reveal bookkeeping, indexed by the order elements were
/// registered in.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    last_ratio: Vec<f64>,
    threshold: f64,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
            last_ratio: vec![0.0; count],
            threshold: REVEAL_VISIBILITY_THRESHOLD,
        }
    }

    /// Register one more element and return its index.
    pub fn register(&mut self) -> usize {
        self.revealed.push(false);
        self.last_ratio.push(0.0);
        self.revealed.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[inline]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Report a visibility change. Returns true only the first time the
    /// element crosses the threshold; the caller marks it and stops
    /// observing.
    pub fn on_visibility(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
        let (Some(slot), Some(last)) = (self.revealed.get_mut(index), self.last_ratio.get_mut(index))
        else {
            return false;
        };
        let previous = std::mem::replace(last, ratio);
        if *slot || !is_rising_enter(is_intersecting, ratio, previous, self.threshold) {
            return false;
        }
        *slot = true;
        true
    }
}
