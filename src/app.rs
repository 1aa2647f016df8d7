//! Root application component and shared context.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::header::SiteHeader;
use crate::components::scroll_top::ScrollTopButton;
use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::nav::NavMenu;
use crate::state::scroll::ScrollState;
use crate::state::theme::{Theme, ThemePreference};
use crate::util::document::apply_theme;
#[cfg(feature = "csr")]
use crate::util::storage::LocalStore;
#[cfg(not(feature = "csr"))]
use crate::util::storage::MemoryStore;

/// Store backing the theme preference in this build.
#[cfg(feature = "csr")]
pub type PageStore = LocalStore;
/// Store backing the theme preference in this build.
#[cfg(not(feature = "csr"))]
pub type PageStore = MemoryStore;

/// Theme preference plus the reactive copy components render from.
#[derive(Clone, Copy)]
pub struct ThemeControl {
    theme: RwSignal<Theme>,
    preference: StoredValue<ThemePreference<PageStore>, LocalStorage>,
}

impl ThemeControl {
    /// Load the stored preference and apply it to the document.
    pub fn load(key: &str) -> Self {
        let preference = ThemePreference::load(PageStore::default(), key);
        let initial = preference.current();
        apply_theme(initial);
        Self { theme: RwSignal::new(initial), preference: StoredValue::new_local(preference) }
    }

    /// Current theme, tracked.
    pub fn get(self) -> Theme {
        self.theme.get()
    }

    /// Flip the theme, persist it, and update the document.
    pub fn toggle(self) {
        let Some(next) = self.preference.try_update_value(ThemePreference::toggle) else {
            return;
        };
        apply_theme(next);
        self.theme.set(next);
    }
}

/// Root application component.
///
/// Provides the site config, scroll state, menu state, and theme control to
/// every component below it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let owner = config.owner.clone();
    let tagline = config.tagline.clone();

    provide_context(ThemeControl::load(&config.theme_key));
    provide_context(RwSignal::new(ScrollState::default()));
    provide_context(RwSignal::new(NavMenu::default()));
    provide_context(config);

    view! {
        <Title text=owner.clone()/>
        <Meta name="description" content=tagline/>

        <SiteHeader/>
        <HomePage/>
        <ScrollTopButton/>
        <footer class="footer">
            <p>{format!("\u{00a9} {owner}")}</p>
        </footer>
    }
}
