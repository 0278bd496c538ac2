// File: crates/bulb-core/src/state.rs
// Summary: BulbState model: color set, On/Off flag and blink timer, plus the colors the
// renderer derives from them.

use std::time::{Duration, Instant};

use skia_safe as skia;

use crate::blink::BlinkTimer;
use crate::color::{self, BulbColor, OFF_GLOW_ALPHA};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulbState {
    color: BulbColor,
    on: bool,
    timer: BlinkTimer,
}

impl BulbState {
    pub fn new(color: BulbColor) -> Self {
        Self { color, on: true, timer: BlinkTimer::new() }
    }

    pub fn color(&self) -> &BulbColor { &self.color }
    pub fn is_on(&self) -> bool { self.on }
    pub fn timer(&self) -> &BlinkTimer { &self.timer }

    /// Blink interval in milliseconds, 0 while blinking is disabled.
    pub fn blink_interval_ms(&self) -> u32 {
        self.timer
            .interval()
            .map(|d| d.as_millis().min(u32::MAX as u128) as u32)
            .unwrap_or(0)
    }

    /// Replace the base color; both darker shades are recomputed with it.
    pub fn set_color(&mut self, base: skia::Color) {
        self.color = BulbColor::new(base);
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    pub fn toggle(&mut self) {
        self.on = !self.on;
    }

    /// `ms > 0` lights the bulb and (re)arms the timer; anything else stops blinking
    /// and turns the bulb off.
    pub fn blink(&mut self, ms: i32, now: Instant) {
        if ms > 0 {
            self.on = true;
            self.timer.enable(Duration::from_millis(ms as u64), now);
        } else {
            self.timer.disable();
            self.on = false;
        }
    }

    /// Apply a timer tick. Returns `false` for ticks of a stopped or replaced schedule.
    pub fn tick(&mut self, epoch: u64) -> bool {
        if !self.timer.accepts(epoch) {
            log::trace!("dropping stale tick: epoch={epoch} current={}", self.timer.epoch());
            return false;
        }
        self.on = !self.on;
        true
    }

    pub(crate) fn timer_mut(&mut self) -> &mut BlinkTimer {
        &mut self.timer
    }

    /// Center color of the glow layer. While off, a translucent dark shade leaves a
    /// faint residual tint instead of nothing.
    pub fn on_glow_color(&self) -> skia::Color {
        if self.on {
            self.color.base()
        } else {
            color::with_alpha(self.color.dark(), OFF_GLOW_ALPHA)
        }
    }

    /// Fill of the base circle: one shade lighter while on.
    pub fn off_base_color(&self) -> skia::Color {
        if self.on {
            self.color.dark()
        } else {
            self.color.dark_dark()
        }
    }
}

impl Default for BulbState {
    fn default() -> Self {
        Self::new(BulbColor::default())
    }
}
