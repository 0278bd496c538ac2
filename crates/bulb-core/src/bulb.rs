// File: crates/bulb-core/src/bulb.rs
// Summary: LedBulb widget model. All state changes, manual or timer-driven, go through
// `update`, which also records that the host should repaint.

use std::time::Instant;

use skia_safe as skia;

use crate::error::Result;
use crate::render::{self, Frame, RenderOptions};
use crate::state::BulbState;

/// Messages accepted by [`LedBulb::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulbMsg {
    SetColor(skia::Color),
    SetOn(bool),
    Toggle,
    /// Blink interval in milliseconds; zero or negative stops blinking.
    Blink(i32),
    /// Timer tick from the schedule identified by `epoch`.
    Tick { epoch: u64 },
}

#[derive(Clone, Debug, Default)]
pub struct LedBulb {
    state: BulbState,
    invalidated: bool,
}

impl LedBulb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(base: skia::Color) -> Self {
        let mut bulb = Self::new();
        bulb.set_color(base);
        bulb
    }

    pub fn state(&self) -> &BulbState { &self.state }

    pub fn color(&self) -> skia::Color { self.state.color().base() }
    pub fn dark_color(&self) -> skia::Color { self.state.color().dark() }
    pub fn dark_dark_color(&self) -> skia::Color { self.state.color().dark_dark() }
    pub fn is_on(&self) -> bool { self.state.is_on() }
    pub fn blink_interval_ms(&self) -> u32 { self.state.blink_interval_ms() }
    pub fn is_blinking(&self) -> bool { self.state.timer().is_enabled() }

    pub fn set_color(&mut self, base: skia::Color) { self.update(BulbMsg::SetColor(base)); }
    pub fn set_on(&mut self, on: bool) { self.update(BulbMsg::SetOn(on)); }
    pub fn toggle(&mut self) { self.update(BulbMsg::Toggle); }
    pub fn blink(&mut self, ms: i32) { self.update(BulbMsg::Blink(ms)); }

    /// Apply one message at the current time. Returns whether anything changed.
    pub fn update(&mut self, msg: BulbMsg) -> bool {
        self.update_at(msg, Instant::now())
    }

    /// Apply one message with an explicit clock (used to start blink phases).
    pub fn update_at(&mut self, msg: BulbMsg, now: Instant) -> bool {
        let applied = match msg {
            BulbMsg::SetColor(c) => {
                self.state.set_color(c);
                true
            }
            BulbMsg::SetOn(on) => {
                self.state.set_on(on);
                true
            }
            BulbMsg::Toggle => {
                self.state.toggle();
                true
            }
            BulbMsg::Blink(ms) => {
                self.state.blink(ms, now);
                true
            }
            BulbMsg::Tick { epoch } => self.state.tick(epoch),
        };
        if applied {
            self.invalidated = true;
        }
        applied
    }

    /// Drive the blink timer from the host loop. A due tick is applied like any other
    /// message. Returns whether the bulb flipped.
    pub fn poll_timer(&mut self, now: Instant) -> bool {
        if !self.state.timer_mut().poll(now) {
            return false;
        }
        let epoch = self.state.timer().epoch();
        log::trace!("blink tick: epoch={epoch} on={}", !self.state.is_on());
        self.update_at(BulbMsg::Tick { epoch }, now)
    }

    /// Next instant the host needs to wake up for, if blinking.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.timer().next_deadline()
    }

    /// Request a repaint without a state change (e.g. the host resized the widget).
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Consume the pending repaint request.
    pub fn take_invalidation(&mut self) -> bool {
        std::mem::take(&mut self.invalidated)
    }

    pub fn is_invalidated(&self) -> bool { self.invalidated }

    /// Render the current state into premultiplied RGBA.
    pub fn render(&self, opts: &RenderOptions) -> Result<Frame> {
        render::render_to_rgba8(&self.state, opts)
    }
}
