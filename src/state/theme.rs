//! Light/dark theme preference.
//!
//! Two states, one transition. The preference is read once from the store
//! at startup and written back on every transition before the new theme is
//! returned. Store failures are logged and never block the transition.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::storage::KeyValueStore;

/// Default `localStorage` key for the preference.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Error returned when parsing an unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(pub String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Theme state machine bound to a persistent store.
#[derive(Debug)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Read the stored preference under `key`.
    ///
    /// Missing, unreadable, or unrecognized values start in [`Theme::Light`].
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match store.get(&key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                log::warn!("ignoring stored theme: {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("theme preference unreadable: {e}");
                Theme::default()
            }
        };
        log::debug!("theme loaded: {current}");
        Self { store, key, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.flipped())
    }

    /// Switch to `theme`, persist it, and return it.
    pub fn set(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            log::warn!("theme preference not saved: {e}");
        }
        log::debug!("theme set: {theme}");
        theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
