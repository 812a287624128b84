//! 12-hour time and AM/PM period text

use core::fmt::Write;

use heapless::String;

use crate::clock::WallClockSample;
use crate::error::{Error, Result};

/// Visible characters available for the time text ("12:59")
pub const TIME_CAPACITY: usize = 7;

/// Visible characters available for the period text ("AM")
pub const PERIOD_CAPACITY: usize = 2;

/// Half of the day a sample falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    /// Period for an hour of the day (0-23).
    pub fn from_hour(hour: u8) -> Self {
        if hour < 12 { Period::Am } else { Period::Pm }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

/// Formatted time and period, ready for the time and period regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTimeText {
    time: String<TIME_CAPACITY>,
    period: String<PERIOD_CAPACITY>,
}

impl FormattedTimeText {
    /// Time of day, e.g. "01:00"
    pub fn time(&self) -> &str {
        &self.time
    }

    /// "AM" or "PM"
    pub fn period(&self) -> &str {
        &self.period
    }
}

/// Convert a 0-23 hour to the 1-12 clock face hour.
fn twelve_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Format a sample as zero-padded 12-hour "HH:MM" plus its period.
pub fn format_time(sample: WallClockSample) -> Result<FormattedTimeText> {
    let mut time: String<TIME_CAPACITY> = String::new();
    write!(
        time,
        "{:02}:{:02}",
        twelve_hour(sample.hour()),
        sample.minute()
    )
    .map_err(|_| Error::Capacity {
        capacity: TIME_CAPACITY,
    })?;

    let mut period: String<PERIOD_CAPACITY> = String::new();
    period
        .push_str(Period::from_hour(sample.hour()).as_str())
        .map_err(|_| Error::Capacity {
            capacity: PERIOD_CAPACITY,
        })?;

    Ok(FormattedTimeText { time, period })
}
