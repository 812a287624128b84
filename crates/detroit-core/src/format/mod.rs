//! Time and date text formatting
//!
//! Every formatter is a pure function of a [`WallClockSample`](crate::WallClockSample)
//! that writes into a fixed-capacity `heapless::String`. Writing past the
//! declared capacity is reported as [`Error::Capacity`](crate::Error::Capacity),
//! never truncated.

pub mod case;
pub mod date;
pub mod ordinal;
pub mod time;

pub use case::{to_uppercase, uppercase_in_place};
pub use date::{DATE_CAPACITY, FormattedDateText, MONTH_ABBREVIATIONS, format_date};
pub use ordinal::ordinal_suffix;
pub use time::{FormattedTimeText, PERIOD_CAPACITY, Period, TIME_CAPACITY, format_time};
