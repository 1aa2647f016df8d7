//! Scroll samples taken from the page.
//!
//! [`Viewport`] is the seam between live DOM measurement and the pure
//! resolver in `state::scroll`. Tests supply fixed numbers; the browser
//! build reads `window` and element offsets.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::state::reveal::RevealSet;
use crate::state::scroll::{self, ScrollState, ScrollThresholds, SectionGeometry};

/// Source of scroll position, viewport size, and section layout.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn inner_height(&self) -> f64;
    /// Layout of the element with `id`, or `None` when it isn't on the page.
    fn section_geometry(&self, id: &str) -> Option<SectionGeometry>;

    /// Layout of each element in `ids` that is on the page, in order.
    fn measure(&self, ids: &[String]) -> Vec<SectionGeometry> {
        ids.iter().filter_map(|id| self.section_geometry(id)).collect()
    }

    /// Measure everything the resolver needs in one go. Missing sections
    /// are skipped; order follows `ids`.
    fn sample(&self, ids: &[String]) -> ScrollSample {
        ScrollSample {
            scroll_y: self.scroll_y(),
            viewport_height: self.inner_height(),
            sections: self.measure(ids),
        }
    }

    /// Scroll offset that puts section `id` just below the `header_id`
    /// element. `None` when the section isn't on the page; a missing header
    /// counts as zero height.
    fn scroll_target_for(&self, id: &str, header_id: &str) -> Option<f64> {
        let section = self.section_geometry(id)?;
        let header_height = self.section_geometry(header_id).map_or(0.0, |h| h.height);
        Some(scroll::scroll_target(section.top, header_height))
    }
}

/// One measurement of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub sections: Vec<SectionGeometry>,
}

impl ScrollSample {
    #[must_use]
    pub fn resolve(&self, thresholds: &ScrollThresholds) -> ScrollState {
        scroll::resolve(self.scroll_y, self.viewport_height, &self.sections, thresholds)
    }

    /// Reveal every card in `cards` that crossed the threshold in this
    /// sample. Returns whether anything changed.
    pub fn reveal(&self, reveals: &mut RevealSet, cards: &[SectionGeometry]) -> bool {
        reveals.observe(self.scroll_y, self.viewport_height, cards)
    }

    /// Whether the section `id` was measured and overlaps the viewport.
    #[must_use]
    pub fn section_in_view(&self, id: &str) -> bool {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .is_some_and(|s| scroll::in_view(self.scroll_y, self.viewport_height, s))
    }
}

/// The live browser window.
#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

#[cfg(feature = "csr")]
impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0))
    }

    fn inner_height(&self) -> f64 {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        match window.inner_height() {
            Ok(height) => height.as_f64().unwrap_or(0.0),
            Err(_) => 0.0,
        }
    }

    fn section_geometry(&self, id: &str) -> Option<SectionGeometry> {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return None;
        };
        Some(SectionGeometry::new(
            id,
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}
