//! Watchface configuration
//!
//! Defaults reproduce the stock Detroit face: a 144x168 black screen with
//! three left-aligned rows stacked from the bottom edge. Every field has a
//! default, so a config file only needs to name what it changes.

use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 8-bit-per-channel RGB color as written in config files
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Convert to the display's RGB565 format (R>>3, G>>2, B>>3).
    pub fn to_rgb565(self) -> Rgb565 {
        Rgb565::new(self.0 >> 3, self.1 >> 2, self.2 >> 3)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct WatchfaceConfig {
    pub screen: ScreenConfig,
    pub layout: LayoutConfig,
    pub colors: ColorConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 144,
            height: 168,
        }
    }
}

/// Row geometry, in pixels
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between the left screen edge and every region
    pub h_padding: u32,
    /// Gap between the bottom screen edge and the time row
    pub v_padding: u32,
    /// Height of one text row; the date region spans two
    pub row_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            h_padding: 4,
            v_padding: 7,
            row_height: 42,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    pub background: Rgb,
    pub time: Rgb,
    pub period: Rgb,
    pub date: Rgb,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: Rgb(0x00, 0x00, 0x00),
            time: Rgb(0xFF, 0xFF, 0xFF),
            period: Rgb(0xFF, 0xFF, 0xFF),
            // Picton blue
            date: Rgb(0x55, 0xAA, 0xFF),
        }
    }
}

/// Largest screen dimension, padding or row height accepted
///
/// Keeps every layout coordinate inside `i32` (the date top is four rows plus
/// padding above the bottom edge).
pub const MAX_DIMENSION: u32 = i16::MAX as u32;

impl WatchfaceConfig {
    /// Check that the time and period rows fit on the screen.
    ///
    /// The two-row date region sits above them and may run past the top edge
    /// on short screens; the layout clips it to the screen.
    pub fn validate(&self) -> Result<()> {
        let ScreenConfig { width, height } = self.screen;
        let LayoutConfig {
            h_padding,
            v_padding,
            row_height,
        } = self.layout;

        if width == 0 || height == 0 {
            return Err(Error::InvalidLayout("screen size must be non-zero"));
        }
        if [width, height, h_padding, v_padding, row_height]
            .iter()
            .any(|value| *value > MAX_DIMENSION)
        {
            return Err(Error::InvalidLayout("dimension exceeds 32767 pixels"));
        }
        if row_height == 0 {
            return Err(Error::InvalidLayout("row height must be non-zero"));
        }
        if h_padding >= width {
            return Err(Error::InvalidLayout("horizontal padding exceeds screen width"));
        }
        let needed = row_height
            .checked_mul(2)
            .and_then(|rows| rows.checked_add(v_padding));
        match needed {
            Some(needed) if needed <= height => Ok(()),
            _ => Err(Error::InvalidLayout("rows do not fit the screen height")),
        }
    }
}
