use portfolio_wasm::navigator::{
    active_region, link_target, scroll_position, Region, ScrollNavigator,
};

const OFFSET: f64 = 100.0;

fn page() -> Vec<Region> {
    vec![
        Region::new("a", 0.0, 300.0),
        Region::new("b", 300.0, 600.0),
        Region::new("c", 900.0, 600.0),
    ]
}

fn active(regions: &[Region], scroll_y: f64) -> Option<&str> {
    active_region(regions, scroll_y, OFFSET).map(|r| r.id.as_str())
}

#[test]
fn offset_is_added_before_lookup() {
    assert_eq!(scroll_position(250.0, OFFSET), 350.0);
    let regions = page();
    assert_eq!(active(&regions, 250.0), Some("b"));
    assert_eq!(active(&regions, -50.0), Some("a"));
    assert_eq!(active(&regions, 0.0), Some("a"));
    assert_eq!(active(&regions, 850.0), Some("c"));
}

#[test]
fn shared_boundary_goes_to_later_region() {
    let regions = page();
    // scroll position 300 is the bottom of `a` and the top of `b`.
    assert_eq!(active(&regions, 200.0), Some("b"));
}

#[test]
fn overlapping_extents_resolve_to_last_declared() {
    let regions = vec![
        Region::new("outer", 0.0, 2_000.0),
        Region::new("inner", 400.0, 200.0),
        Region::new("tail", 1_500.0, 500.0),
    ];
    assert_eq!(active(&regions, 350.0), Some("inner"));
    assert_eq!(active(&regions, 0.0), Some("outer"));
    assert_eq!(active(&regions, 1_600.0), Some("tail"));
}

#[test]
fn no_match_keeps_previous_marking() {
    let regions = page();
    let mut nav = ScrollNavigator::new(OFFSET);
    assert_eq!(nav.active(), None);
    assert_eq!(nav.on_scroll(&regions, 250.0), Some("b"));
    assert_eq!(nav.on_scroll(&regions, 5_000.0), None);
    assert_eq!(nav.active(), Some("b"));
    assert_eq!(nav.on_scroll(&regions, 900.0), Some("c"));
    assert_eq!(nav.active(), Some("c"));
}

#[test]
fn empty_page_never_activates() {
    let mut nav = ScrollNavigator::new(OFFSET);
    assert_eq!(nav.on_scroll(&[], 0.0), None);
    assert_eq!(nav.active(), None);
}

#[test]
fn link_targets_are_fragments() {
    assert_eq!(link_target("#skills"), Some("skills"));
    assert_eq!(link_target("#"), None);
    assert_eq!(link_target("https://example.com/#x"), None);
    assert_eq!(link_target("skills"), None);
}
