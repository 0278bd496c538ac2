// File: crates/bulb-core/tests/state.rs
// Purpose: BulbState color updates, derived layer colors and blink commands.

use std::time::{Duration, Instant};

use bulb_core::{BulbColor, BulbState, Color};
use bulb_core::color::OFF_GLOW_ALPHA;

#[test]
fn starts_lit_with_default_color_and_no_blink() {
    let state = BulbState::default();
    assert!(state.is_on());
    assert_eq!(*state.color(), BulbColor::default());
    assert_eq!(state.blink_interval_ms(), 0);
    assert!(!state.timer().is_enabled());
}

#[test]
fn set_color_updates_all_shades_together() {
    let mut state = BulbState::default();
    let red = Color::from_argb(255, 255, 0, 0);
    state.set_color(red);
    assert_eq!(*state.color(), BulbColor::new(red));
    assert_eq!(state.color().dark(), Color::from_argb(255, 85, 0, 0));
}

#[test]
fn layer_colors_follow_on_flag() {
    let mut state = BulbState::default();
    let c = *state.color();
    assert_eq!(state.on_glow_color(), c.base());
    assert_eq!(state.off_base_color(), c.dark());

    state.set_on(false);
    assert_eq!(state.on_glow_color(), c.dark().with_a(OFF_GLOW_ALPHA));
    assert_eq!(state.off_base_color(), c.dark_dark());
}

#[test]
fn blink_zero_forces_off_and_disables() {
    let now = Instant::now();
    for (on, prior_blink) in [(true, 0), (false, 0), (true, 300), (false, 300)] {
        let mut state = BulbState::default();
        state.blink(prior_blink, now);
        state.set_on(on);
        state.blink(0, now);
        assert!(!state.is_on());
        assert!(!state.timer().is_enabled());
        assert_eq!(state.blink_interval_ms(), 0);
    }
}

#[test]
fn negative_blink_behaves_like_zero() {
    let now = Instant::now();
    let mut state = BulbState::default();
    state.blink(250, now);
    state.blink(-5, now);
    assert!(!state.is_on());
    assert!(!state.timer().is_enabled());
}

#[test]
fn blink_positive_lights_immediately() {
    let now = Instant::now();
    let mut state = BulbState::default();
    state.set_on(false);
    state.blink(500, now);
    assert!(state.is_on());
    assert_eq!(state.blink_interval_ms(), 500);
    assert_eq!(state.timer().interval(), Some(Duration::from_millis(500)));
}

#[test]
fn blink_is_idempotent() {
    let now = Instant::now();
    let mut once = BulbState::default();
    once.blink(500, now);

    let mut twice = BulbState::default();
    twice.blink(500, now);
    twice.blink(500, now + Duration::from_millis(10));

    assert_eq!(once, twice);
}

#[test]
fn manual_toggle_composes_with_ticks() {
    let now = Instant::now();
    let mut state = BulbState::default();
    state.blink(100, now);
    let epoch = state.timer().epoch();

    state.set_on(false);
    assert!(state.timer().is_enabled(), "manual change must not stop blinking");
    assert!(state.tick(epoch));
    assert!(state.is_on(), "tick flips whatever the manual call left");
}

#[test]
fn ticks_from_old_schedule_are_ignored() {
    let now = Instant::now();
    let mut state = BulbState::default();
    state.blink(100, now);
    let old = state.timer().epoch();
    state.blink(0, now);
    assert!(!state.tick(old));
    assert!(!state.is_on());

    state.blink(100, now);
    assert!(!state.tick(old));
    assert!(state.is_on());
}
