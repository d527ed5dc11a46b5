//! One-way "reveal on scroll" marking.

/// Class added to an element once it has scrolled into view.
pub const VISIBLE_CLASS: &str = "visible";

/// Tracks which of a fixed set of watched elements have been revealed.
#[derive(Debug)]
pub struct RevealSet {
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize, threshold: f64) -> Self {
        Self {
            threshold,
            revealed: vec![false; len],
        }
    }

    /// Returns `true` the first time element `index` is seen with
    /// at least `threshold` of its area visible. Never un-reveals.
    pub fn on_intersection(&mut self, index: usize, ratio: f64) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen && ratio >= self.threshold => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|seen| **seen).count()
    }
}

/// Delay before the `index`-th card fades in on page load.
pub fn stagger_delay_ms(index: usize, step_ms: i32) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX).saturating_mul(step_ms)
}
