// tests/column_map.rs
//
// The dashboard's fixed header rename table.

use housing_scrape::data::{DISPLAY_NAMES, SOURCE_ORDER};
use pretty_assertions::assert_eq;

fn owned(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn rename_map_is_a_bijection() {
    assert!(DISPLAY_NAMES.is_bijection());
    for (src, disp) in DISPLAY_NAMES.pairs() {
        assert_eq!(DISPLAY_NAMES.display_for(src), Some(*disp));
        assert_eq!(DISPLAY_NAMES.source_for(disp), Some(*src));
    }
}

#[test]
fn source_order_renders_display_order() {
    let shown = DISPLAY_NAMES.apply(&owned(SOURCE_ORDER));
    assert_eq!(
        shown,
        owned(&[
            "Town",
            "2013 Price",
            "2012 Price",
            "2008 Price",
            "2003 Price",
            "1Yr Change",
            "5Yr Change",
            "10Yr Change",
            "2013 Days on Market",
            "2012 Days on Market",
            "1Yr DOM Change",
        ])
    );
}

#[test]
fn second_pass_over_display_names_changes_nothing() {
    assert!(DISPLAY_NAMES.is_stable());
    let once = DISPLAY_NAMES.apply(&owned(SOURCE_ORDER));
    let twice = DISPLAY_NAMES.apply(&once);
    assert_eq!(once, twice);
}

#[test]
fn leftover_source_names_are_still_renamed() {
    // Mixed headers: a second pass renames whatever source names remain.
    let mixed = owned(&["Town", "2013 Price", "pc1y", "Notes"]);
    assert_eq!(
        DISPLAY_NAMES.apply(&mixed),
        owned(&["Town", "2013 Price", "1Yr Change", "Notes"])
    );
}

#[test]
fn unknown_names_pass_through() {
    assert_eq!(DISPLAY_NAMES.rename("Population"), "Population");
    assert_eq!(DISPLAY_NAMES.display_for("Population"), None);
}
