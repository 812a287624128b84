//! Minute tick events
//!
//! The host runtime normally delivers one [`TickEvent`] per minute with a
//! flag telling whether the calendar day changed. [`MinuteTicker`] derives the
//! same events from a stream of clock samples for hosts (and the simulator)
//! that can only poll a clock.

use log::debug;

use crate::clock::WallClockSample;

/// One minute-tick notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    /// Clock reading at the moment of the tick
    pub sample: WallClockSample,
    /// The calendar day differs from the previous tick's
    pub day_changed: bool,
}

impl TickEvent {
    pub fn new(sample: WallClockSample, day_changed: bool) -> Self {
        Self {
            sample,
            day_changed,
        }
    }
}

/// Turns polled clock samples into minute ticks
///
/// The first sample only primes the ticker: the watchface renders it on
/// load, so no event is emitted for it.
#[derive(Debug, Clone, Default)]
pub struct MinuteTicker {
    last: Option<WallClockSample>,
}

impl MinuteTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one clock sample; returns an event when the minute changed.
    pub fn observe(&mut self, sample: WallClockSample) -> Option<TickEvent> {
        let previous = self.last.replace(sample)?;

        if previous.same_minute(&sample) {
            return None;
        }

        let day_changed = !previous.same_day(&sample);
        debug!(
            "tick {:02}:{:02} (day changed: {})",
            sample.hour(),
            sample.minute(),
            day_changed
        );
        Some(TickEvent::new(sample, day_changed))
    }

    /// Most recent sample seen, if any
    pub fn last(&self) -> Option<WallClockSample> {
        self.last
    }
}
