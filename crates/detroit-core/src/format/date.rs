//! Month and ordinal day text, e.g. "JAN\n3RD"

use core::fmt::Write;

use heapless::String;

use crate::clock::WallClockSample;
use crate::error::{Error, Result};

use super::case::uppercase_in_place;
use super::ordinal::ordinal_suffix;

/// Visible characters available for the date text
pub const DATE_CAPACITY: usize = 15;

/// Abbreviated English month names, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const OVERFLOW: Error = Error::Capacity {
    capacity: DATE_CAPACITY,
};

/// Formatted date, ready for the date region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDateText {
    text: String<DATE_CAPACITY>,
}

impl FormattedDateText {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Format the month abbreviation on one line and the ordinal day on the
/// next, uppercased.
pub fn format_date(sample: WallClockSample) -> Result<FormattedDateText> {
    let month = MONTH_ABBREVIATIONS[(sample.month() - 1) as usize];
    let day = sample.day();

    let mut text: String<DATE_CAPACITY> = String::new();
    text.push_str(month).map_err(|_| OVERFLOW)?;
    text.push('\n').map_err(|_| OVERFLOW)?;
    write!(text, "{day}").map_err(|_| OVERFLOW)?;
    text.push_str(ordinal_suffix(day)).map_err(|_| OVERFLOW)?;

    uppercase_in_place(text.as_mut_str());

    Ok(FormattedDateText { text })
}
