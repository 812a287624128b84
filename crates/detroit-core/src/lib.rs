//! Hardware-independent core library for the Detroit watchface
//!
//! This crate contains all platform-agnostic logic for the watchface:
//! time and date formatting, the tick source that turns clock samples into
//! minute/day events, the watchface lifecycle, and an embedded-graphics
//! screen model with the three text regions (time, period, date).
//!
//! It is `#![no_std]` (the framebuffer needs `alloc`) so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests). The
//! host runtime is reached only through the [`ClockSource`] and
//! [`DisplaySink`] traits.

#![no_std]

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod framebuffer;
pub mod screen;
pub mod tick;
pub mod ui;
pub mod watchface;

pub use clock::{ClockSource, SimulatedClock, WallClockSample};
pub use config::WatchfaceConfig;
pub use display::{DisplaySink, Region};
pub use error::{Error, Result};
pub use format::{
    FormattedDateText, FormattedTimeText, Period, format_date, format_time, ordinal_suffix,
    to_uppercase,
};
pub use framebuffer::FrameBuffer;
pub use screen::WatchfaceScreen;
pub use tick::{MinuteTicker, TickEvent};
pub use watchface::{Lifecycle, Watchface};
