//! Scroll-position-to-UI-state mapping.
//!
//! Everything here is a pure function of one scroll sample plus the section
//! geometry the view layer measured for it. No DOM access, no history.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HEADER_THRESHOLD: f64 = 50.0;
pub const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 400.0;
pub const DEFAULT_ACTIVE_OFFSET: f64 = 100.0;

/// Position and size of one page section, in document pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }
}

/// Tunable pixel thresholds. Missing fields fall back to the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollThresholds {
    /// Scroll offset at which the header gains its shadow.
    pub header: f64,
    /// Scroll offset at which the scroll-to-top button appears.
    pub scroll_top: f64,
    /// Distance above a section's top at which it becomes active.
    pub active_offset: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER_THRESHOLD,
            scroll_top: DEFAULT_SCROLL_TOP_THRESHOLD,
            active_offset: DEFAULT_ACTIVE_OFFSET,
        }
    }
}

/// UI state derived from a single scroll sample.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub active_section_id: Option<String>,
    pub header_shadowed: bool,
    pub scroll_button_visible: bool,
}

impl ScrollState {
    /// Whether the nav link for `id` should be highlighted.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section_id.as_deref() == Some(id)
    }
}

/// Derive the UI state for one scroll sample.
///
/// A section is active when `scroll_y` lies in `(top - offset, top - offset +
/// height]`. Sections are checked in the order given and when ranges
/// overlap the last match wins.
///
/// The viewport height is accepted so callers pass a complete sample, but
/// none of the derived flags depend on it; see [`in_view`].
#[must_use]
pub fn resolve(
    scroll_y: f64,
    _viewport_height: f64,
    sections: &[SectionGeometry],
    thresholds: &ScrollThresholds,
) -> ScrollState {
    let mut active_section_id = None;
    for section in sections {
        let section_top = section.top - thresholds.active_offset;
        if scroll_y > section_top && scroll_y <= section_top + section.height {
            active_section_id = Some(section.id.clone());
        }
    }

    ScrollState {
        active_section_id,
        header_shadowed: scroll_y >= thresholds.header,
        scroll_button_visible: scroll_y >= thresholds.scroll_top,
    }
}

/// Destination offset for a smooth scroll to a section, leaving room for the
/// fixed header. Never negative.
#[must_use]
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}

/// Whether any part of `section` is inside the viewport.
#[must_use]
pub fn in_view(scroll_y: f64, viewport_height: f64, section: &SectionGeometry) -> bool {
    scroll_y + viewport_height > section.top && scroll_y < section.top + section.height
}
