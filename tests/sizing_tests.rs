// Host-side tests for the object size formula.
// The main crate is a wasm binary, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod sizing {
    include!("../src/sizing.rs");
}

use sizing::*;

#[test]
fn beehive_building_uses_beehive_scale() {
    assert_eq!(object_size_in_pixels("building", Some("sm"), Some("beehive_1")), 180.0);
}

#[test]
fn lumber_and_sawmill_buildings_use_lumber_scale() {
    assert_eq!(object_size_in_pixels("building", Some("sm"), Some("lumber_mill_2")), 144.0);
    assert_eq!(object_size_in_pixels("building", Some("md"), Some("old_sawmill")), 52.0 * 4.0);
}

#[test]
fn beehive_wins_over_lumber() {
    assert_eq!(scale_multiplier("building", Some("lumber_beehive")), 5.0);
}

#[test]
fn non_buildings_are_unscaled() {
    assert_eq!(object_size_in_pixels("resource", Some("lg"), None), 68.0);
    // Id overrides only apply to buildings
    assert_eq!(object_size_in_pixels("resource", Some("xs"), Some("beehive")), 28.0);
}

#[test]
fn missing_or_unknown_size_defaults_to_sm() {
    assert_eq!(object_size_in_pixels("building", None, None), 90.0);
    assert_eq!(object_size_in_pixels("building", Some("huge"), Some("den")), 90.0);
    assert_eq!(base_pixels(Some("SM")), 36.0);
}

#[test]
fn base_pixel_table() {
    let sizes = [("xs", 28.0), ("sm", 36.0), ("md", 52.0), ("lg", 68.0)];
    for (name, px) in sizes {
        assert_eq!(base_pixels(Some(name)), px, "size {name}");
    }
}

#[test]
fn override_matches_substring_anywhere() {
    assert_eq!(scale_multiplier("building", Some("big_lumberyard")), 4.0);
    assert_eq!(scale_multiplier("building", Some("Beehive")), 2.5);
}
