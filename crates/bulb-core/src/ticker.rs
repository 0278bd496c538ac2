// File: crates/bulb-core/src/ticker.rs
// Summary: Thread-backed blink scheduler for hosts without a timer of their own.
// Notes:
// - The ticker never touches bulb state. It only sends `BulbMsg::Tick` into the channel the
//   host drains on its UI thread, so `LedBulb::update` stays the single writer.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{select, Receiver, Sender};

use crate::blink::BlinkTimer;
use crate::bulb::BulbMsg;
use crate::error::{BulbError, Result};

/// Periodic tick source for one schedule. Stops and joins its thread on drop.
pub struct Ticker {
    epoch: u64,
    interval: Duration,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// `tx` should be unbounded: a full channel would block the ticker and its shutdown.
    pub fn spawn(interval: Duration, epoch: u64, tx: Sender<BulbMsg>) -> Result<Self> {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(0);
        let handle = thread::Builder::new()
            .name(format!("blink-ticker-{epoch}"))
            .spawn(move || run(interval, epoch, tx, stop_rx))
            .map_err(BulbError::Spawn)?;
        Ok(Self { epoch, interval, stop_tx: Some(stop_tx), handle: Some(handle) })
    }

    pub fn epoch(&self) -> u64 { self.epoch }
    pub fn interval(&self) -> Duration { self.interval }
}

fn run(interval: Duration, epoch: u64, tx: Sender<BulbMsg>, stop_rx: Receiver<()>) {
    log::debug!("ticker started: interval={interval:?} epoch={epoch}");
    let clock = crossbeam_channel::tick(interval);
    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(clock) -> _ => {
                if tx.send(BulbMsg::Tick { epoch }).is_err() {
                    // Host side hung up.
                    break;
                }
            }
        }
    }
    log::debug!("ticker stopped: epoch={epoch}");
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // Disconnecting the stop channel wakes the select.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("ticker thread panicked: epoch={}", self.epoch);
            }
        }
    }
}

/// Keeps at most one ticker running, matching a bulb's blink timer.
#[derive(Default)]
pub struct TickerSlot {
    current: Option<Ticker>,
}

impl TickerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Ticker> {
        self.current.as_ref()
    }

    /// Start, replace or stop the ticker so it follows `timer`'s current schedule.
    pub fn sync(&mut self, timer: &BlinkTimer, tx: &Sender<BulbMsg>) -> Result<()> {
        match timer.interval() {
            Some(interval) => {
                if self.current.as_ref().is_some_and(|t| t.epoch() == timer.epoch()) {
                    return Ok(());
                }
                // Stop the old schedule before starting the new one.
                self.current = None;
                self.current = Some(Ticker::spawn(interval, timer.epoch(), tx.clone())?);
            }
            None => {
                self.current = None;
            }
        }
        Ok(())
    }
}
