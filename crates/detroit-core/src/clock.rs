//! Wall-clock samples and the clock source abstraction
//!
//! A [`WallClockSample`] is the only input the formatters accept. It can only
//! be built through validating constructors, so every field is guaranteed to
//! be inside its calendar range by the time it reaches the formatting code.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::error::{Error, Result};

/// Immutable snapshot of the local calendar date and time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockSample {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl WallClockSample {
    /// Build a sample, rejecting any field outside its calendar range.
    ///
    /// The day is checked against the actual length of the month, so
    /// February 30th is rejected just like day 0 or day 32.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(Error::InvalidDay { year, month, day });
        }
        if hour > 23 {
            return Err(Error::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(Error::InvalidMinute(minute));
        }

        Ok(Self {
            year,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Build a sample from any chrono date-time value (seconds are dropped).
    pub fn from_datetime<T: Datelike + Timelike>(datetime: &T) -> Result<Self> {
        Self::new(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, 1-12
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, 1-31
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour of the day, 0-23
    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Whether both samples fall on the same calendar day.
    pub fn same_day(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }

    /// Whether both samples fall in the same minute of the same day.
    pub fn same_minute(&self, other: &Self) -> bool {
        self.same_day(other) && self.hour == other.hour && self.minute == other.minute
    }
}

/// Source of the current local time, provided by the host runtime.
pub trait ClockSource {
    /// Sample the clock.
    fn now(&mut self) -> Result<WallClockSample>;
}

/// Clock that starts at a fixed instant and advances by a fixed step on
/// every read.
///
/// Used by the simulator to fast-forward through minutes and days, and by
/// tests to exercise day rollovers deterministically.
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    current: NaiveDateTime,
    step: TimeDelta,
}

impl SimulatedClock {
    pub fn new(start: NaiveDateTime, step: TimeDelta) -> Self {
        Self {
            current: start,
            step,
        }
    }

    /// The instant the next call to [`ClockSource::now`] will return.
    pub fn peek(&self) -> NaiveDateTime {
        self.current
    }
}

impl ClockSource for SimulatedClock {
    fn now(&mut self) -> Result<WallClockSample> {
        let sample = WallClockSample::from_datetime(&self.current)?;
        self.current = self
            .current
            .checked_add_signed(self.step)
            .ok_or(Error::ClockOverflow)?;
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_new_accepts_valid_sample() {
        let sample = WallClockSample::new(2024, 2, 29, 23, 59).unwrap();
        assert_eq!(sample.year(), 2024);
        assert_eq!(sample.month(), 2);
        assert_eq!(sample.day(), 29);
        assert_eq!(sample.hour(), 23);
        assert_eq!(sample.minute(), 59);
    }

    #[test]
    fn test_new_rejects_out_of_range_fields() {
        assert_eq!(
            WallClockSample::new(2024, 13, 1, 0, 0),
            Err(Error::InvalidMonth(13))
        );
        assert_eq!(
            WallClockSample::new(2024, 1, 0, 0, 0),
            Err(Error::InvalidDay {
                year: 2024,
                month: 1,
                day: 0
            })
        );
        assert_eq!(
            WallClockSample::new(2024, 1, 32, 0, 0),
            Err(Error::InvalidDay {
                year: 2024,
                month: 1,
                day: 32
            })
        );
        assert_eq!(
            WallClockSample::new(2024, 1, 1, 24, 0),
            Err(Error::InvalidHour(24))
        );
        assert_eq!(
            WallClockSample::new(2024, 1, 1, 0, 60),
            Err(Error::InvalidMinute(60))
        );
    }

    #[test]
    fn test_new_checks_month_length() {
        assert!(WallClockSample::new(2023, 2, 29, 0, 0).is_err());
        assert!(WallClockSample::new(2024, 4, 31, 0, 0).is_err());
        assert!(WallClockSample::new(2024, 4, 30, 0, 0).is_ok());
    }

    #[test]
    fn test_from_datetime_drops_seconds() {
        let dt = NaiveDate::from_ymd_opt(2025, 7, 4)
            .unwrap()
            .and_hms_opt(18, 30, 45)
            .unwrap();
        let sample = WallClockSample::from_datetime(&dt).unwrap();
        assert_eq!(sample, WallClockSample::new(2025, 7, 4, 18, 30).unwrap());
    }

    #[test]
    fn test_same_day_and_minute() {
        let a = WallClockSample::new(2025, 1, 1, 10, 15).unwrap();
        let b = WallClockSample::new(2025, 1, 1, 10, 16).unwrap();
        let c = WallClockSample::new(2025, 1, 2, 10, 15).unwrap();

        assert!(a.same_day(&b));
        assert!(!a.same_minute(&b));
        assert!(!a.same_day(&c));
        assert!(!a.same_minute(&c), "same time on another day is a new minute");
    }

    #[test]
    fn test_simulated_clock_advances_across_midnight() {
        let mut clock = SimulatedClock::new(datetime(2025, 12, 31, 23, 59), TimeDelta::minutes(1));

        let first = clock.now().unwrap();
        let second = clock.now().unwrap();

        assert_eq!(first, WallClockSample::new(2025, 12, 31, 23, 59).unwrap());
        assert_eq!(second, WallClockSample::new(2026, 1, 1, 0, 0).unwrap());
        assert_eq!(clock.peek(), datetime(2026, 1, 1, 0, 1));
    }
}
