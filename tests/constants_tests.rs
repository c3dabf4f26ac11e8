// Host-side tests for sound tuning constants.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn boop_sweeps_up_one_octave() {
    assert_eq!(BOOP_END_HZ, BOOP_START_HZ * 2.0);
    assert!(BOOP_SWEEP_SEC < BOOP_DURATION_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn boop_envelope_decays_but_stays_positive() {
    // Exponential ramps require strictly positive targets
    assert!(BOOP_END_GAIN > 0.0);
    assert!(BOOP_END_GAIN < BOOP_START_GAIN);
    assert!(BOOP_START_GAIN <= 1.0);
}

#[test]
fn view_names_differ() {
    assert_ne!(VIEW_VILLAGE, VIEW_BUILD);
}
