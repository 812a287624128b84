//! Text region for one line (or a few lines) of watchface text

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;

use crate::error::{Error, Result};
use crate::format::DATE_CAPACITY;

use super::core::Drawable;

/// Largest text any region holds (the date)
pub const TEXT_REGION_CAPACITY: usize = DATE_CAPACITY;

/// Font weight variants
///
/// - `Bold`: 9x18 bold font, used for the time and date
/// - `Light`: 9x18 regular font, used for the period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Bold,
    Light,
}

impl FontWeight {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            FontWeight::Bold => &embedded_graphics::mono_font::ascii::FONT_9X18_BOLD,
            FontWeight::Light => &embedded_graphics::mono_font::ascii::FONT_9X18,
        }
    }
}

/// Left-aligned text drawn over a solid background
///
/// Changing the text marks the region dirty; setting the same text again
/// does not. Line breaks in the text start a new line.
pub struct TextRegion {
    bounds: Rectangle,
    text: String<TEXT_REGION_CAPACITY>,
    weight: FontWeight,
    color: Rgb565,
    background: Rgb565,
    dirty: bool,
}

impl TextRegion {
    pub fn new(bounds: Rectangle, weight: FontWeight, color: Rgb565, background: Rgb565) -> Self {
        Self {
            bounds,
            text: String::new(),
            weight,
            color,
            background,
            dirty: true,
        }
    }

    /// Update the displayed text.
    ///
    /// Text longer than [`TEXT_REGION_CAPACITY`] is rejected and the region
    /// keeps its previous content.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        if self.text.as_str() == text {
            return Ok(());
        }

        let mut new_text = String::new();
        new_text.push_str(text).map_err(|_| Error::Capacity {
            capacity: TEXT_REGION_CAPACITY,
        })?;

        self.text = new_text;
        self.dirty = true;
        Ok(())
    }

    /// Get the current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }
}

impl Drawable for TextRegion {
    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> core::result::Result<(), D::Error> {
        // Clear the previous text
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.background))
            .draw(display)?;

        let character_style = MonoTextStyle::new(self.weight.font(), self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Top)
            .build();

        Text::with_text_style(
            &self.text,
            self.bounds.top_left,
            character_style,
            text_style,
        )
        .draw(&mut display.clipped(&self.bounds))?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
