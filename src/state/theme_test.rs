use super::*;
use crate::util::storage::{MemoryStore, StorageError};

/// Store whose reads and writes always fail.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota".into()))
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_text_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        assert_eq!(theme.to_string(), theme.as_str());
    }
}

#[test]
fn theme_parse_is_case_sensitive() {
    assert_eq!("Dark".parse::<Theme>(), Err(ParseThemeError("Dark".into())));
}

#[test]
fn theme_flipped() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
}

// =============================================================
// ThemePreference::load
// =============================================================

#[test]
fn load_empty_store_defaults_to_light() {
    let pref = ThemePreference::load(MemoryStore::new(), DEFAULT_THEME_KEY);
    assert_eq!(pref.current(), Theme::Light);
}

#[test]
fn load_reads_stored_dark() {
    let pref = ThemePreference::load(MemoryStore::with_entry("theme", "dark"), DEFAULT_THEME_KEY);
    assert_eq!(pref.current(), Theme::Dark);
}

#[test]
fn load_unknown_value_defaults_to_light() {
    let pref = ThemePreference::load(MemoryStore::with_entry("theme", "sepia"), DEFAULT_THEME_KEY);
    assert_eq!(pref.current(), Theme::Light);
}

#[test]
fn load_uses_configured_key() {
    let store = MemoryStore::with_entry("site_theme", "dark");
    assert_eq!(ThemePreference::load(&store, "theme").current(), Theme::Light);
    assert_eq!(ThemePreference::load(&store, "site_theme").current(), Theme::Dark);
}

#[test]
fn load_does_not_write() {
    let pref = ThemePreference::load(MemoryStore::new(), DEFAULT_THEME_KEY);
    assert!(pref.store().writes().is_empty());
}

// =============================================================
// ThemePreference::toggle
// =============================================================

#[test]
fn toggle_twice_returns_to_light_and_persists_each_step() {
    let mut pref = ThemePreference::load(MemoryStore::new(), DEFAULT_THEME_KEY);
    assert_eq!(pref.toggle(), Theme::Dark);
    assert_eq!(pref.store().get("theme"), Ok(Some("dark".to_owned())));
    assert_eq!(pref.toggle(), Theme::Light);
    assert_eq!(pref.store().get("theme"), Ok(Some("light".to_owned())));
    assert_eq!(
        pref.store().writes(),
        vec![("theme".to_owned(), "dark".to_owned()), ("theme".to_owned(), "light".to_owned())]
    );
}

#[test]
fn toggle_updates_current() {
    let mut pref = ThemePreference::load(MemoryStore::with_entry("theme", "dark"), DEFAULT_THEME_KEY);
    pref.toggle();
    assert_eq!(pref.current(), Theme::Light);
}

#[test]
fn set_persists_explicit_theme() {
    let mut pref = ThemePreference::load(MemoryStore::new(), DEFAULT_THEME_KEY);
    assert_eq!(pref.set(Theme::Dark), Theme::Dark);
    assert_eq!(pref.store().get("theme"), Ok(Some("dark".to_owned())));
}

// =============================================================
// Store failures
// =============================================================

#[test]
fn unreadable_store_starts_light() {
    let pref = ThemePreference::load(BrokenStore, DEFAULT_THEME_KEY);
    assert_eq!(pref.current(), Theme::Light);
}

#[test]
fn failed_write_still_transitions() {
    let mut pref = ThemePreference::load(BrokenStore, DEFAULT_THEME_KEY);
    assert_eq!(pref.toggle(), Theme::Dark);
    assert_eq!(pref.current(), Theme::Dark);
}
