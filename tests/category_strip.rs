//! Tests for pill geometry, centering and the smooth scroll.

use cardapio::menu::categories::{CategoryStrip, PILL_GAP, PILL_PADDING};
use pretty_assertions::assert_eq;

fn strip(names: &[&str]) -> CategoryStrip {
    CategoryStrip::new(names.iter().map(|s| s.to_string()).collect(), 0)
}

#[test]
fn test_first_pill_active_by_default() {
    let strip = strip(&["Pratos", "Bebidas"]);
    assert_eq!(strip.active(), Some(0));
    assert_eq!(strip.active_name(), Some("Pratos"));
}

#[test]
fn test_default_index_is_clamped() {
    let strip = CategoryStrip::new(vec!["A".to_string(), "B".to_string()], 5);
    assert_eq!(strip.active(), Some(1));
}

#[test]
fn test_empty_strip_has_no_active_pill() {
    let mut strip = strip(&[]);
    assert_eq!(strip.active(), None);
    assert_eq!(strip.select(0, 20), None);
    assert_eq!(strip.cycled_index(1), None);
    assert_eq!(strip.total_width(), 0);
}

#[test]
fn test_pill_geometry() {
    let strip = strip(&["Pratos", "Bebidas", "Doces"]);

    assert_eq!(strip.pill_width(0), 6 + 2 * PILL_PADDING);
    assert_eq!(strip.pill_left(0), 0);
    assert_eq!(strip.pill_left(1), 8 + PILL_GAP);
    assert_eq!(strip.pill_left(2), 8 + PILL_GAP + 9 + PILL_GAP);
    assert_eq!(strip.total_width(), 8 + 9 + 7 + 2 * PILL_GAP);
}

#[test]
fn test_width_counts_display_columns() {
    let strip = strip(&["Cafés"]);
    assert_eq!(strip.pill_width(0), 5 + 2 * PILL_PADDING);
}

#[test]
fn test_select_centers_pill() {
    let names: Vec<String> = (0..10).map(|i| format!("Cat{i}")).collect();
    let mut strip = CategoryStrip::new(names, 0);
    // every pill is 6 wide, 7 with the gap
    strip.select(5, 20);

    let left = 5 * 7;
    assert_eq!(strip.scroll_target(), left + 3 - 10);
    assert_eq!(strip.active(), Some(5));
}

#[test]
fn test_centering_clamps_at_both_ends() {
    let names: Vec<String> = (0..10).map(|i| format!("Cat{i}")).collect();
    let mut strip = CategoryStrip::new(names, 0);

    strip.select(0, 20);
    assert_eq!(strip.scroll_target(), 0);

    strip.select(9, 20);
    assert_eq!(strip.scroll_target(), strip.total_width() - 20);
}

#[test]
fn test_no_scroll_when_everything_fits() {
    let mut strip = strip(&["Pratos", "Bebidas"]);
    strip.select(1, 80);
    assert_eq!(strip.scroll_target(), 0);
}

#[test]
fn test_tick_reaches_target_smoothly() {
    let names: Vec<String> = (0..10).map(|i| format!("Cat{i}")).collect();
    let mut strip = CategoryStrip::new(names, 0);
    strip.select(9, 20);
    let target = strip.scroll_target();

    let mut previous = strip.scroll();
    let mut frames = 0;
    while strip.tick() {
        assert!(strip.scroll() > previous);
        assert!(strip.scroll() <= target);
        previous = strip.scroll();
        frames += 1;
        assert!(frames < 100);
    }

    assert!(frames > 1);
    assert_eq!(strip.scroll(), target);
    assert!(!strip.is_scrolling());
}

#[test]
fn test_finish_scroll_jumps() {
    let names: Vec<String> = (0..10).map(|i| format!("Cat{i}")).collect();
    let mut strip = CategoryStrip::new(names, 0);
    strip.select(9, 20);
    strip.finish_scroll();

    assert_eq!(strip.scroll(), strip.scroll_target());
}

#[test]
fn test_cycled_index_wraps() {
    let strip = strip(&["A", "B", "C"]);
    assert_eq!(strip.cycled_index(1), Some(1));
    assert_eq!(strip.cycled_index(-1), Some(2));
    assert_eq!(strip.cycled_index(4), Some(1));
}

#[test]
fn test_recenter_reclamps_for_a_new_viewport() {
    let names: Vec<String> = (0..10).map(|i| format!("Cat{i}")).collect();
    let mut strip = CategoryStrip::new(names, 0);
    strip.select(9, 20);
    strip.finish_scroll();
    assert_eq!(strip.scroll(), strip.total_width() - 20);

    strip.recenter(50);
    assert_eq!(strip.scroll_target(), strip.total_width() - 50);
    assert_eq!(strip.scroll(), strip.scroll_target());

    strip.recenter(strip.total_width());
    assert_eq!(strip.scroll(), 0);
    assert_eq!(strip.active(), Some(9));
}

#[test]
fn test_recenter_without_pills_is_a_no_op() {
    let mut strip = strip(&[]);
    strip.recenter(40);
    assert_eq!(strip.scroll(), 0);
}
