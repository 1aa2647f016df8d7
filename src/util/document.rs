//! Document-level effects: theme attribute and smooth scrolling.
//!
//! TRADE-OFFS
//! ==========
//! These are best-effort browser-only effects. Without the `csr` feature
//! they only log, which keeps native builds and tests deterministic.

use crate::state::theme::Theme;
#[cfg(feature = "csr")]
use crate::util::viewport::{BrowserViewport, Viewport};

/// Set `data-theme` on the `<html>` element.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            log::warn!("no document element; theme {theme} not applied");
            return;
        };
        if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
            log::warn!("failed to set data-theme: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("apply_theme({theme}) skipped outside the browser");
    }
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("smooth_scroll_to({top}) skipped outside the browser");
    }
}

/// Smooth-scroll so section `id` sits just below the fixed header.
pub fn scroll_to_section(id: &str, header_id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(top) = BrowserViewport.scroll_target_for(id, header_id) else {
            log::debug!("no section #{id} to scroll to");
            return;
        };
        smooth_scroll_to(top);
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("scroll_to_section({id}, {header_id}) skipped outside the browser");
    }
}

/// Tag name of the element a keyboard event was dispatched to.
#[cfg(feature = "csr")]
pub fn event_target_tag(ev: &web_sys::KeyboardEvent) -> Option<String> {
    use wasm_bindgen::JsCast;

    let target = ev.target()?;
    let Ok(el) = target.dyn_into::<web_sys::Element>() else {
        return None;
    };
    Some(el.tag_name())
}
