// File: crates/bulb-core/tests/ticker.rs
// Purpose: Threaded ticker delivers epoch-tagged ticks and stops cleanly.

use std::time::{Duration, Instant};

use bulb_core::{BulbMsg, LedBulb, Ticker, TickerSlot};

#[test]
fn ticker_sends_tagged_ticks_until_dropped() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let ticker = Ticker::spawn(Duration::from_millis(5), 7, tx).expect("spawn");
    let msg = rx.recv_timeout(Duration::from_secs(2)).expect("tick");
    assert_eq!(msg, BulbMsg::Tick { epoch: 7 });

    drop(ticker);
    // Thread has been joined: drain what was queued, then nothing more arrives.
    while rx.try_recv().is_ok() {}
    std::thread::sleep(Duration::from_millis(20));
    assert!(rx.try_recv().is_err());
}

#[test]
fn slot_follows_timer_schedule() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut bulb = LedBulb::new();
    let mut slot = TickerSlot::new();

    slot.sync(bulb.state().timer(), &tx).expect("sync disabled");
    assert!(slot.current().is_none());

    bulb.blink(5);
    slot.sync(bulb.state().timer(), &tx).expect("sync enabled");
    let epoch = bulb.state().timer().epoch();
    assert_eq!(slot.current().map(|t| t.epoch()), Some(epoch));

    // Same schedule: ticker is kept.
    bulb.blink(5);
    slot.sync(bulb.state().timer(), &tx).expect("sync same");
    assert_eq!(slot.current().map(|t| t.epoch()), Some(epoch));

    // Ticks drive the bulb through the normal update path.
    let start = Instant::now();
    let mut flips = 0;
    while flips < 2 && start.elapsed() < Duration::from_secs(2) {
        if let Ok(msg) = rx.recv_timeout(Duration::from_millis(100)) {
            if bulb.update(msg) {
                flips += 1;
            }
        }
    }
    assert_eq!(flips, 2);

    bulb.blink(0);
    slot.sync(bulb.state().timer(), &tx).expect("sync off");
    assert!(slot.current().is_none());
    // Anything still queued belongs to the stopped schedule.
    while let Ok(msg) = rx.try_recv() {
        assert!(!bulb.update(msg));
    }
    assert!(!bulb.is_on());
}
