//! Fixed site header: brand, section nav, mobile menu, and theme toggle.

use leptos::prelude::*;

use crate::app::ThemeControl;
use crate::config::SiteConfig;
use crate::state::nav::NavMenu;
use crate::state::scroll::ScrollState;
use crate::state::theme::Theme;
use crate::util::document::scroll_to_section;

/// Element id of the header, used to measure its height when scrolling.
pub const HEADER_ID: &str = "header";

/// Site header.
///
/// Gains a shadow once the page scrolls past the header threshold and
/// highlights the nav link of the active section.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let menu = expect_context::<RwSignal<NavMenu>>();
    let theme = expect_context::<ThemeControl>();

    let header_class = move || if scroll.with(|s| s.header_shadowed) { "header scrolled" } else { "header" };
    let menu_class = move || if menu.get().is_open() { "nav-menu show" } else { "nav-menu" };
    let toggle_class = move || if menu.get().is_open() { "nav-toggle active" } else { "nav-toggle" };
    let theme_icon = move || match theme.get() {
        Theme::Light => "\u{263e}",
        Theme::Dark => "\u{2600}",
    };

    let links = config
        .sections
        .into_iter()
        .map(|section| {
            let href = section.href();
            let id = section.id;
            let active_id = id.clone();
            let link_class = move || {
                if scroll.with(|s| s.is_active(&active_id)) { "nav-link active" } else { "nav-link" }
            };
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                menu.update(NavMenu::close);
                scroll_to_section(&id, HEADER_ID);
            };
            view! {
                <li class="nav-item">
                    <a href=href class=link_class on:click=on_click>
                        {section.title}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header id=HEADER_ID class=header_class>
            <nav class="nav container">
                <a href="#home" class="nav-logo">{config.owner}</a>
                <div id="nav-menu" class=menu_class>
                    <ul class="nav-list">{links}</ul>
                    <button
                        id="nav-close"
                        class="nav-close"
                        aria-label="Close menu"
                        on:click=move |_| menu.update(NavMenu::close)
                    >
                        "\u{2715}"
                    </button>
                </div>
                <div class="nav-actions">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        aria-label="Toggle theme"
                        title="Toggle theme (T)"
                        on:click=move |_| theme.toggle()
                    >
                        {theme_icon}
                    </button>
                    <button
                        id="nav-toggle"
                        class=toggle_class
                        aria-label="Open menu"
                        on:click=move |_| menu.update(NavMenu::toggle)
                    >
                        "\u{2630}"
                    </button>
                </div>
            </nav>
        </header>
    }
}
