#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn embedded_config_parses() {
    let config = SiteConfig::embedded().unwrap();
    assert_eq!(config.section_ids(), vec!["home", "about", "skills", "projects", "contact"]);
    assert_eq!(config.theme_key, "theme");
    assert_eq!(config.thresholds, ScrollThresholds::default());
}

#[test]
fn empty_object_uses_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.success_message, DEFAULT_SUCCESS_MESSAGE);
    assert_eq!(config.success_message_ms, DEFAULT_SUCCESS_MESSAGE_MS);
}

#[test]
fn partial_thresholds_keep_other_defaults() {
    let config = SiteConfig::from_json(r#"{"thresholds": {"header": 10}}"#).unwrap();
    assert_eq!(config.thresholds.header, 10.0);
    assert_eq!(config.thresholds.scroll_top, 400.0);
}

#[test]
fn empty_sections_rejected() {
    let err = SiteConfig::from_json(r#"{"sections": []}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptySections));
}

#[test]
fn duplicate_section_rejected() {
    let raw = r#"{"sections": [{"id": "a", "title": "A"}, {"id": "a", "title": "Again"}]}"#;
    let err = SiteConfig::from_json(raw).unwrap_err();
    assert_eq!(err.to_string(), "duplicate section id: a");
}

#[test]
fn malformed_json_is_parse_error() {
    let err = SiteConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid site config"));
}

#[test]
fn skill_width_is_clamped() {
    let skill = Skill { name: "Rust".into(), level: 250 };
    assert_eq!(skill.width_percent(), "100%");
    let skill = Skill { name: "Go".into(), level: 40 };
    assert_eq!(skill.width_percent(), "40%");
}

#[test]
fn oversized_skill_level_parses_and_clamps() {
    let config = SiteConfig::from_json(r#"{"skills": [{"name": "Rust", "level": 300}]}"#).unwrap();
    assert_eq!(config.skills[0].width_percent(), "100%");
}

#[test]
fn section_href_is_anchor() {
    let config = SiteConfig::default();
    assert_eq!(config.sections[0].href(), "#home");
}

// =============================================================
// Page sections
// =============================================================

#[test]
fn unknown_section_rejected() {
    let raw = r#"{"sections": [{"id": "home", "title": "Home"}, {"id": "blog", "title": "Blog"}]}"#;
    let err = SiteConfig::from_json(raw).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSection(ref id) if id == "blog"));
}

#[test]
fn page_sections_follow_config_order() {
    let raw = r#"{"sections": [{"id": "contact", "title": "Write"}, {"id": "home", "title": "Top"}]}"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.page_sections(), vec![PageSection::Contact, PageSection::Home]);
    assert!(!config.has_section(PageSection::Skills));
}

#[test]
fn section_ids_round_trip() {
    for section in PageSection::ALL {
        assert_eq!(PageSection::from_id(section.id()), Some(section));
    }
    assert_eq!(PageSection::from_id("blog"), None);
}

#[test]
fn reveal_ids_cover_rendered_cards() {
    let config = SiteConfig::embedded().unwrap();
    let mut expected = vec![SKILL_LIST_ID.to_owned()];
    expected.extend((0..config.projects.len()).map(project_card_id));
    assert_eq!(config.reveal_ids(), expected);
}

#[test]
fn reveal_ids_skip_omitted_sections() {
    let raw = r#"{
        "sections": [{"id": "home", "title": "Home"}],
        "skills": [{"name": "Rust", "level": 90}],
        "projects": [{"title": "A", "summary": "B"}]
    }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert!(config.reveal_ids().is_empty());
}
