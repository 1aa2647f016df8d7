//! The single portfolio page.
//!
//! ARCHITECTURE
//! ============
//! `HomePage` renders the sections the config lists, in its order, and owns
//! the window listeners: scroll and resize samples are coalesced to one per
//! animation frame, measured through `BrowserViewport`, and resolved into
//! the shared `ScrollState`. The same sample fills the skill bars and fades
//! in cards. Keydown events map to page shortcuts.

use leptos::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::sections::{AboutSection, HeroSection, ProjectsSection};
use crate::components::skills::SkillsSection;
use crate::config::{PageSection, SiteConfig};
use crate::state::reveal::RevealSet;
#[cfg(feature = "csr")]
use crate::{
    app::ThemeControl,
    state::nav::{NavMenu, Shortcut, is_editable_tag, shortcut_for},
    state::scroll::ScrollState,
    util::document::event_target_tag,
    util::frame::FrameCoalescer,
    util::viewport::{BrowserViewport, Viewport},
};

#[cfg(feature = "csr")]
fn install_scroll_listeners(
    scroll: RwSignal<ScrollState>,
    skills_revealed: RwSignal<bool>,
    reveals: RwSignal<RevealSet>,
) {
    let config = expect_context::<SiteConfig>();
    let ids = config.section_ids();
    let card_ids = config.reveal_ids();
    let thresholds = config.thresholds;

    let coalescer = StoredValue::new_local(FrameCoalescer::new(move || {
        let sample = BrowserViewport.sample(&ids);
        let next = sample.resolve(&thresholds);
        if scroll.with_untracked(|current| *current != next) {
            scroll.set(next);
        }
        if !skills_revealed.get_untracked() && sample.section_in_view(PageSection::Skills.id()) {
            log::debug!("skills section in view");
            skills_revealed.set(true);
        }
        if reveals.with_untracked(|r| r.len() < card_ids.len()) {
            let cards = BrowserViewport.measure(&card_ids);
            let mut updated = reveals.get_untracked();
            if sample.reveal(&mut updated, &cards) {
                reveals.set(updated);
            }
        }
    }));

    // Initial state for a page loaded mid-scroll (reload, anchor link).
    coalescer.with_value(FrameCoalescer::request);

    let on_scroll = window_event_listener(leptos::ev::scroll, move |_| coalescer.with_value(FrameCoalescer::request));
    let on_resize = window_event_listener(leptos::ev::resize, move |_| coalescer.with_value(FrameCoalescer::request));
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });
}

#[cfg(feature = "csr")]
fn install_shortcuts() {
    let theme = expect_context::<ThemeControl>();
    let menu = expect_context::<RwSignal<NavMenu>>();

    let on_keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        let editable = event_target_tag(&ev).is_some_and(|tag| is_editable_tag(&tag));
        match shortcut_for(&ev.key(), editable) {
            Some(Shortcut::ToggleTheme) => theme.toggle(),
            Some(Shortcut::CloseMenu) => menu.update(NavMenu::close),
            None => {}
        }
    });
    on_cleanup(move || on_keydown.remove());
}

/// Portfolio page: the configured sections in order.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let skills_revealed = RwSignal::new(false);
    let reveals = RwSignal::new(RevealSet::default());
    provide_context(reveals);

    #[cfg(feature = "csr")]
    {
        install_scroll_listeners(expect_context::<RwSignal<ScrollState>>(), skills_revealed, reveals);
        install_shortcuts();
    }

    let sections = config
        .page_sections()
        .into_iter()
        .map(|section| match section {
            PageSection::Home => view! { <HeroSection/> }.into_any(),
            PageSection::About => view! { <AboutSection/> }.into_any(),
            PageSection::Skills => view! { <SkillsSection revealed=skills_revealed/> }.into_any(),
            PageSection::Projects => view! { <ProjectsSection/> }.into_any(),
            PageSection::Contact => view! { <ContactSection/> }.into_any(),
        })
        .collect_view();

    view! { <main class="main">{sections}</main> }
}
