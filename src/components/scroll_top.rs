//! Floating scroll-to-top button.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;
use crate::util::document::smooth_scroll_to;

/// Shown once the page scrolls past the scroll-top threshold.
#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let class = move || if scroll.with(|s| s.scroll_button_visible) { "scroll-top show" } else { "scroll-top" };

    view! {
        <button id="scroll-top" class=class aria-label="Back to top" on:click=move |_| smooth_scroll_to(0.0)>
            "\u{2191}"
        </button>
    }
}
