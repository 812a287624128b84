//! Error type shared by every module of the watchface core

use thiserror_no_std::Error;

use crate::watchface::Lifecycle;

/// Errors produced by the watchface core
///
/// Formatting itself cannot fail for a valid [`WallClockSample`](crate::WallClockSample);
/// invalid field values are rejected when the sample is built, and a buffer
/// that would overflow is reported instead of being truncated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Month out of range (1-12): {0}")]
    InvalidMonth(u32),

    #[error("Day {day} does not exist in {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    #[error("Hour out of range (0-23): {0}")]
    InvalidHour(u32),

    #[error("Minute out of range (0-59): {0}")]
    InvalidMinute(u32),

    #[error("Text exceeds buffer capacity (max: {capacity})")]
    Capacity { capacity: usize },

    #[error("Simulated clock overflowed the supported date range")]
    ClockOverflow,

    #[error("Invalid layout: {0}")]
    InvalidLayout(&'static str),

    #[error("Watchface is not running (state: {0:?})")]
    NotRunning(Lifecycle),

    #[error("Invalid lifecycle transition from {from:?}")]
    InvalidTransition { from: Lifecycle },
}

pub type Result<T> = core::result::Result<T, Error>;
