//! Display sink abstraction
//!
//! The watchface writes its text into three independent regions exposed by
//! the host. Layout, fonts and colors are the sink's business.

use crate::error::Result;

/// The three text regions of the watchface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// "HH:MM"
    Time,
    /// "AM" / "PM"
    Period,
    /// Month and ordinal day
    Date,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Time, Region::Period, Region::Date];
}

/// Receiver of formatted text for each region
pub trait DisplaySink {
    /// Replace the text shown in `region`.
    ///
    /// Sinks must reject text that does not fit their buffer rather than
    /// truncate it.
    fn set_text(&mut self, region: Region, text: &str) -> Result<()>;
}
