//! Region geometry for the watchface
//!
//! Rows are stacked upward from the bottom edge of the screen:
//!
//! ```text
//! +------------------+
//! | date (2 rows)    |
//! |                  |
//! | period           |
//! | time             |
//! +--- v_padding ----+
//! ```

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::WatchfaceConfig;
use crate::display::Region;
use crate::error::Result;

/// Bounds of the three text regions and of the whole screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchfaceLayout {
    pub screen: Rectangle,
    pub time: Rectangle,
    pub period: Rectangle,
    pub date: Rectangle,
}

impl WatchfaceLayout {
    /// Compute region bounds from a validated config.
    ///
    /// The date region is clipped to the top of the screen when the stacked
    /// rows are taller than the display.
    pub fn from_config(config: &WatchfaceConfig) -> Result<Self> {
        config.validate()?;

        let width = config.screen.width;
        let height = config.screen.height as i32;
        let h_padding = config.layout.h_padding;
        let v_padding = config.layout.v_padding as i32;
        let row = config.layout.row_height;
        let row_i = row as i32;

        let left = h_padding as i32;
        let row_width = width - h_padding;

        let time = Rectangle::new(
            Point::new(left, height - row_i - v_padding),
            Size::new(row_width, row),
        );
        let period = Rectangle::new(
            Point::new(left, height - 2 * row_i - v_padding),
            Size::new(row_width, row),
        );

        let date_top = height - 4 * row_i - v_padding;
        let date_bottom = date_top + 2 * row_i;
        let clipped_top = date_top.max(0);
        let date = Rectangle::new(
            Point::new(left, clipped_top),
            // The date region spans the full width, so it may run past the
            // right edge by `h_padding`; drawing clips it.
            Size::new(width, (date_bottom - clipped_top).max(0) as u32),
        );

        Ok(Self {
            screen: Rectangle::new(Point::zero(), Size::new(width, config.screen.height)),
            time,
            period,
            date,
        })
    }

    /// Bounds of one region
    pub fn region(&self, region: Region) -> Rectangle {
        match region {
            Region::Time => self.time,
            Region::Period => self.period,
            Region::Date => self.date,
        }
    }
}
