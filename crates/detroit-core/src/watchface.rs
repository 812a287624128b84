//! Watchface lifecycle and tick handling
//!
//! [`Watchface`] is the single context object that owns the display sink.
//! The host drives it through three calls:
//!
//! 1. **`load`**: once, when the window appears. Renders time and date.
//! 2. **`on_tick`**: once per minute. Renders time, plus the date when the
//!    day changed.
//! 3. **`unload`**: once, when the window goes away.

use log::{info, warn};

use crate::clock::WallClockSample;
use crate::display::{DisplaySink, Region};
use crate::error::{Error, Result};
use crate::format::{FormattedDateText, FormattedTimeText, format_date, format_time};
use crate::tick::TickEvent;

/// Lifecycle state of a [`Watchface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Running,
    Destroyed,
}

/// Watchface context owning the display regions
pub struct Watchface<S: DisplaySink> {
    sink: S,
    state: Lifecycle,
}

impl<S: DisplaySink> Watchface<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: Lifecycle::Created,
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Start the watchface and render the initial time and date.
    pub fn load(&mut self, sample: WallClockSample) -> Result<()> {
        if self.state != Lifecycle::Created {
            return Err(Error::InvalidTransition { from: self.state });
        }

        // Format everything first so a failure leaves the sink untouched
        let time = format_time(sample)?;
        let date = format_date(sample)?;

        self.show_time(&time)?;
        self.show_date(&date)?;
        self.state = Lifecycle::Running;
        info!("Watchface loaded");
        Ok(())
    }

    /// Handle a minute tick.
    ///
    /// Ticks delivered before `load` or after `unload` are rejected and leave
    /// the display untouched.
    pub fn on_tick(&mut self, event: TickEvent) -> Result<()> {
        if self.state != Lifecycle::Running {
            warn!("Ignoring tick while {:?}", self.state);
            return Err(Error::NotRunning(self.state));
        }

        let time = format_time(event.sample)?;
        if event.day_changed {
            let date = format_date(event.sample)?;
            self.show_time(&time)?;
            self.show_date(&date)
        } else {
            self.show_time(&time)
        }
    }

    /// Stop the watchface.
    pub fn unload(&mut self) -> Result<()> {
        if self.state != Lifecycle::Running {
            return Err(Error::InvalidTransition { from: self.state });
        }

        self.state = Lifecycle::Destroyed;
        info!("Watchface unloaded");
        Ok(())
    }

    fn show_time(&mut self, text: &FormattedTimeText) -> Result<()> {
        self.sink.set_text(Region::Time, text.time())?;
        self.sink.set_text(Region::Period, text.period())
    }

    fn show_date(&mut self, text: &FormattedDateText) -> Result<()> {
        info!("Date set to {:?}", text.as_str());
        self.sink.set_text(Region::Date, text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::{String, Vec};

    /// Records every write so tests can check what reached the display.
    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<(Region, String<16>), 16>,
    }

    impl RecordingSink {
        fn last(&self, region: Region) -> Option<&str> {
            self.writes
                .iter()
                .rev()
                .find(|(r, _)| *r == region)
                .map(|(_, text)| text.as_str())
        }

        fn count(&self, region: Region) -> usize {
            self.writes.iter().filter(|(r, _)| *r == region).count()
        }
    }

    impl DisplaySink for RecordingSink {
        fn set_text(&mut self, region: Region, text: &str) -> Result<()> {
            let mut owned = String::new();
            owned
                .push_str(text)
                .map_err(|_| Error::Capacity { capacity: 16 })?;
            self.writes
                .push((region, owned))
                .map_err(|_| Error::Capacity { capacity: 16 })
        }
    }

    fn sample(day: u32, hour: u32, minute: u32) -> WallClockSample {
        WallClockSample::new(2025, 1, day, hour, minute).unwrap()
    }

    #[test]
    fn test_load_renders_all_regions() {
        let mut face = Watchface::new(RecordingSink::default());
        face.load(sample(3, 0, 5)).unwrap();

        assert_eq!(face.state(), Lifecycle::Running);
        assert_eq!(face.sink().last(Region::Time), Some("12:05"));
        assert_eq!(face.sink().last(Region::Period), Some("AM"));
        assert_eq!(face.sink().last(Region::Date), Some("JAN\n3RD"));
    }

    #[test]
    fn test_tick_without_day_change_keeps_date() {
        let mut face = Watchface::new(RecordingSink::default());
        face.load(sample(3, 11, 59)).unwrap();
        face.on_tick(TickEvent::new(sample(3, 12, 0), false)).unwrap();

        let sink = face.sink();
        assert_eq!(sink.last(Region::Time), Some("12:00"));
        assert_eq!(sink.last(Region::Period), Some("PM"));
        assert_eq!(sink.count(Region::Date), 1, "date should only be written on load");
    }

    #[test]
    fn test_tick_with_day_change_rewrites_date() {
        let mut face = Watchface::new(RecordingSink::default());
        face.load(sample(3, 23, 59)).unwrap();
        face.on_tick(TickEvent::new(sample(4, 0, 0), true)).unwrap();

        assert_eq!(face.sink().last(Region::Date), Some("JAN\n4TH"));
        assert_eq!(face.sink().count(Region::Date), 2);
    }

    #[test]
    fn test_tick_before_load_is_rejected() {
        let mut face = Watchface::new(RecordingSink::default());
        let result = face.on_tick(TickEvent::new(sample(3, 9, 0), false));

        assert_eq!(result, Err(Error::NotRunning(Lifecycle::Created)));
        assert!(face.sink().writes.is_empty());
    }

    /// Accepts time and period, rejects the date.
    #[derive(Default)]
    struct NoDateSink {
        writes: usize,
    }

    impl DisplaySink for NoDateSink {
        fn set_text(&mut self, region: Region, _text: &str) -> Result<()> {
            if region == Region::Date {
                return Err(Error::Capacity { capacity: 0 });
            }
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_failed_load_stays_created() {
        let mut face = Watchface::new(NoDateSink::default());
        assert_eq!(
            face.load(sample(3, 9, 0)),
            Err(Error::Capacity { capacity: 0 })
        );

        assert_eq!(face.state(), Lifecycle::Created);
        assert_eq!(
            face.on_tick(TickEvent::new(sample(3, 9, 1), false)),
            Err(Error::NotRunning(Lifecycle::Created))
        );
        assert_eq!(face.sink().writes, 2, "the rejected tick wrote nothing");
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut face = Watchface::new(RecordingSink::default());
        assert_eq!(
            face.unload(),
            Err(Error::InvalidTransition {
                from: Lifecycle::Created
            })
        );

        face.load(sample(1, 9, 0)).unwrap();
        assert_eq!(
            face.load(sample(1, 9, 0)),
            Err(Error::InvalidTransition {
                from: Lifecycle::Running
            })
        );

        face.unload().unwrap();
        assert_eq!(face.state(), Lifecycle::Destroyed);
        assert_eq!(
            face.on_tick(TickEvent::new(sample(1, 9, 1), false)),
            Err(Error::NotRunning(Lifecycle::Destroyed))
        );
    }
}
