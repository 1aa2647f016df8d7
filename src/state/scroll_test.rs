#![allow(clippy::float_cmp)]

use super::*;

fn two_sections() -> Vec<SectionGeometry> {
    vec![SectionGeometry::new("a", 0.0, 500.0), SectionGeometry::new("b", 500.0, 500.0)]
}

// =============================================================
// Header and scroll-button flags
// =============================================================

#[test]
fn header_shadow_at_and_above_threshold() {
    let t = ScrollThresholds::default();
    assert!(resolve(60.0, 800.0, &[], &t).header_shadowed);
    assert!(resolve(50.0, 800.0, &[], &t).header_shadowed);
    assert!(!resolve(49.0, 800.0, &[], &t).header_shadowed);
}

#[test]
fn scroll_button_at_and_above_threshold() {
    let t = ScrollThresholds::default();
    assert!(!resolve(399.0, 800.0, &[], &t).scroll_button_visible);
    assert!(resolve(400.0, 800.0, &[], &t).scroll_button_visible);
}

#[test]
fn custom_thresholds_are_respected() {
    let t = ScrollThresholds { header: 10.0, scroll_top: 20.0, active_offset: 0.0 };
    let state = resolve(15.0, 800.0, &[], &t);
    assert!(state.header_shadowed);
    assert!(!state.scroll_button_visible);
}

#[test]
fn top_of_page_has_no_flags() {
    let state = resolve(0.0, 800.0, &two_sections(), &ScrollThresholds::default());
    assert!(!state.header_shadowed);
    assert!(!state.scroll_button_visible);
}

// =============================================================
// Active section
// =============================================================

#[test]
fn active_section_uses_offset_window() {
    let state = resolve(550.0, 800.0, &two_sections(), &ScrollThresholds::default());
    assert_eq!(state.active_section_id.as_deref(), Some("b"));
    assert!(state.is_active("b"));
    assert!(!state.is_active("a"));
}

#[test]
fn overlapping_ranges_last_match_wins() {
    // x covers (-100, 900], y covers (200, 600].
    let sections = vec![SectionGeometry::new("x", 0.0, 1000.0), SectionGeometry::new("y", 300.0, 400.0)];
    let state = resolve(450.0, 800.0, &sections, &ScrollThresholds::default());
    assert_eq!(state.active_section_id.as_deref(), Some("y"));
}

#[test]
fn window_lower_bound_is_exclusive() {
    // b's window is (400, 900].
    let state = resolve(400.0, 800.0, &two_sections(), &ScrollThresholds::default());
    assert_eq!(state.active_section_id.as_deref(), Some("a"));
}

#[test]
fn window_upper_bound_is_inclusive() {
    let state = resolve(900.0, 800.0, &two_sections(), &ScrollThresholds::default());
    assert_eq!(state.active_section_id.as_deref(), Some("b"));
}

#[test]
fn no_match_leaves_active_empty() {
    let state = resolve(5000.0, 800.0, &two_sections(), &ScrollThresholds::default());
    assert_eq!(state.active_section_id, None);
}

#[test]
fn empty_sections_leave_active_empty() {
    let state = resolve(300.0, 800.0, &[], &ScrollThresholds::default());
    assert_eq!(state.active_section_id, None);
}

#[test]
fn resolve_is_pure() {
    let sections = two_sections();
    let t = ScrollThresholds::default();
    assert_eq!(resolve(550.0, 800.0, &sections, &t), resolve(550.0, 800.0, &sections, &t));
}

// =============================================================
// ScrollThresholds
// =============================================================

#[test]
fn thresholds_defaults() {
    let t = ScrollThresholds::default();
    assert_eq!(t.header, 50.0);
    assert_eq!(t.scroll_top, 400.0);
    assert_eq!(t.active_offset, 100.0);
}

#[test]
fn thresholds_partial_json_fills_defaults() {
    let t: ScrollThresholds = serde_json::from_str(r#"{"active_offset": 80}"#).unwrap();
    assert_eq!(t.active_offset, 80.0);
    assert_eq!(t.header, DEFAULT_HEADER_THRESHOLD);
    assert_eq!(t.scroll_top, DEFAULT_SCROLL_TOP_THRESHOLD);
}

// =============================================================
// scroll_target / in_view
// =============================================================

#[test]
fn scroll_target_subtracts_header() {
    assert_eq!(scroll_target(900.0, 70.0), 830.0);
}

#[test]
fn scroll_target_never_negative() {
    assert_eq!(scroll_target(20.0, 70.0), 0.0);
}

#[test]
fn in_view_when_section_enters_from_below() {
    let skills = SectionGeometry::new("skills", 1000.0, 600.0);
    assert!(!in_view(200.0, 800.0, &skills));
    assert!(in_view(201.0, 800.0, &skills));
}

#[test]
fn not_in_view_once_scrolled_past() {
    let skills = SectionGeometry::new("skills", 1000.0, 600.0);
    assert!(in_view(1599.0, 800.0, &skills));
    assert!(!in_view(1600.0, 800.0, &skills));
}
