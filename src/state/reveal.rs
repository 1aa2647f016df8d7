//! Fade-in of cards as they scroll into view.
//!
//! An element is revealed once at least [`REVEAL_THRESHOLD`] of its height
//! is inside the viewport, ignoring the bottom [`REVEAL_BOTTOM_MARGIN`]
//! pixels. Reveals are sticky: scrolling back up never hides a card again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

use crate::state::scroll::SectionGeometry;

/// Share of an element's height that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Strip at the bottom of the viewport that doesn't count as visible.
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

/// Share of `element` between `scroll_y` and `scroll_y + viewport_height`,
/// in `0.0..=1.0`. Zero-height elements are never visible.
#[must_use]
pub fn visible_fraction(scroll_y: f64, viewport_height: f64, element: &SectionGeometry) -> f64 {
    if element.height <= 0.0 {
        return 0.0;
    }
    let top = element.top.max(scroll_y);
    let bottom = (element.top + element.height).min(scroll_y + viewport_height);
    ((bottom - top).max(0.0) / element.height).min(1.0)
}

/// Whether `element` has crossed the reveal threshold.
#[must_use]
pub fn should_reveal(scroll_y: f64, viewport_height: f64, element: &SectionGeometry) -> bool {
    let effective = (viewport_height - REVEAL_BOTTOM_MARGIN).max(0.0);
    visible_fraction(scroll_y, effective, element) >= REVEAL_THRESHOLD
}

/// CSS class list for a revealable element.
#[must_use]
pub fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed { format!("{base} reveal visible") } else { format!("{base} reveal") }
}

/// Ids of elements that have been revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: HashSet<String>,
}

impl RevealSet {
    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Ids in `targets` that crossed the threshold but aren't revealed yet.
    #[must_use]
    pub fn newly_visible(&self, scroll_y: f64, viewport_height: f64, targets: &[SectionGeometry]) -> Vec<String> {
        targets
            .iter()
            .filter(|t| !self.is_revealed(&t.id) && should_reveal(scroll_y, viewport_height, t))
            .map(|t| t.id.clone())
            .collect()
    }

    /// Reveal every target past the threshold. Returns whether anything
    /// changed.
    pub fn observe(&mut self, scroll_y: f64, viewport_height: f64, targets: &[SectionGeometry]) -> bool {
        let fresh = self.newly_visible(scroll_y, viewport_height, targets);
        let changed = !fresh.is_empty();
        self.revealed.extend(fresh);
        changed
    }
}
