// File: crates/bulb-core/src/blink.rs
// Summary: Blink timer state machine (Disabled / Enabled) with phase and schedule epoch.
// Notes:
// - The timer never runs anything itself. Hosts either poll it from their own loop
//   (`poll` / `next_deadline`) or run a `Ticker` that sends ticks tagged with `epoch`.
// - `epoch` changes every time a schedule starts or stops, so a tick queued by an old
//   schedule can be told apart from a current one.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Disabled,
    Enabled { interval: Duration },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkTimer {
    state: TimerState,
    epoch: u64,
    next_due: Option<Instant>,
}

impl BlinkTimer {
    pub const fn new() -> Self {
        Self { state: TimerState::Disabled, epoch: 0, next_due: None }
    }

    pub fn state(&self) -> TimerState { self.state }

    pub fn is_enabled(&self) -> bool {
        matches!(self.state, TimerState::Enabled { .. })
    }

    pub fn interval(&self) -> Option<Duration> {
        match self.state {
            TimerState::Enabled { interval } => Some(interval),
            TimerState::Disabled => None,
        }
    }

    /// Identifier of the current schedule.
    pub fn epoch(&self) -> u64 { self.epoch }

    /// When the next tick is due, if enabled.
    pub fn next_deadline(&self) -> Option<Instant> { self.next_due }

    /// Start ticking every `interval`.
    ///
    /// Coming from `Disabled`, or changing the interval, starts a new phase: the next
    /// tick is one full interval after `now`. Enabling again with the interval already
    /// in effect leaves the running phase alone.
    pub fn enable(&mut self, interval: Duration, now: Instant) {
        if self.state == (TimerState::Enabled { interval }) {
            return;
        }
        self.state = TimerState::Enabled { interval };
        self.epoch = self.epoch.wrapping_add(1);
        self.next_due = Some(now + interval);
        log::debug!("blink timer enabled: interval={interval:?} epoch={}", self.epoch);
    }

    pub fn disable(&mut self) {
        if self.state == TimerState::Disabled {
            return;
        }
        self.state = TimerState::Disabled;
        self.epoch = self.epoch.wrapping_add(1);
        self.next_due = None;
        log::debug!("blink timer disabled: epoch={}", self.epoch);
    }

    /// Whether a tick carrying `epoch` belongs to the running schedule.
    pub fn accepts(&self, epoch: u64) -> bool {
        self.is_enabled() && epoch == self.epoch
    }

    /// Cooperative driver: returns `true` when a tick is due at `now` and schedules the
    /// next one a full interval later. Intervals missed while the host was busy collapse
    /// into a single tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        match (self.state, self.next_due) {
            (TimerState::Enabled { interval }, Some(due)) if now >= due => {
                self.next_due = Some(now + interval);
                true
            }
            _ => false,
        }
    }
}

impl Default for BlinkTimer {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_interval_keeps_phase() {
        let t0 = Instant::now();
        let mut timer = BlinkTimer::new();
        timer.enable(Duration::from_millis(500), t0);
        let before = timer;
        timer.enable(Duration::from_millis(500), t0 + Duration::from_millis(200));
        assert_eq!(timer, before);
    }

    #[test]
    fn new_interval_restarts_phase() {
        let t0 = Instant::now();
        let mut timer = BlinkTimer::new();
        timer.enable(Duration::from_millis(500), t0);
        let first = timer.epoch();
        let t1 = t0 + Duration::from_millis(200);
        timer.enable(Duration::from_millis(250), t1);
        assert_ne!(timer.epoch(), first);
        assert_eq!(timer.next_deadline(), Some(t1 + Duration::from_millis(250)));
    }

    #[test]
    fn poll_coalesces_missed_ticks() {
        let t0 = Instant::now();
        let mut timer = BlinkTimer::new();
        timer.enable(Duration::from_millis(10), t0);
        let late = t0 + Duration::from_millis(55);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.next_deadline(), Some(late + Duration::from_millis(10)));
    }
}
