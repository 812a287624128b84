//! The watchface screen: three text regions over a solid background
//!
//! [`WatchfaceScreen`] is the embedded-graphics implementation of
//! [`DisplaySink`]. Text written by the [`Watchface`](crate::Watchface) lands
//! in the matching [`TextRegion`]; [`WatchfaceScreen::draw`] then repaints only
//! the regions whose text changed.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::debug;

use crate::config::WatchfaceConfig;
use crate::display::{DisplaySink, Region};
use crate::error::Result;
use crate::ui::{Drawable, FontWeight, TextRegion, WatchfaceLayout};

pub struct WatchfaceScreen {
    layout: WatchfaceLayout,
    background: Rgb565,
    time: TextRegion,
    period: TextRegion,
    date: TextRegion,
    needs_full_redraw: bool,
}

impl WatchfaceScreen {
    pub fn new(config: &WatchfaceConfig) -> Result<Self> {
        let layout = WatchfaceLayout::from_config(config)?;
        let background = config.colors.background.to_rgb565();

        Ok(Self {
            layout,
            background,
            time: TextRegion::new(
                layout.time,
                FontWeight::Bold,
                config.colors.time.to_rgb565(),
                background,
            ),
            period: TextRegion::new(
                layout.period,
                FontWeight::Light,
                config.colors.period.to_rgb565(),
                background,
            ),
            date: TextRegion::new(
                layout.date,
                FontWeight::Bold,
                config.colors.date.to_rgb565(),
                background,
            ),
            needs_full_redraw: true,
        })
    }

    pub fn layout(&self) -> &WatchfaceLayout {
        &self.layout
    }

    pub fn region(&self, region: Region) -> &TextRegion {
        match region {
            Region::Time => &self.time,
            Region::Period => &self.period,
            Region::Date => &self.date,
        }
    }

    fn region_mut(&mut self, region: Region) -> &mut TextRegion {
        match region {
            Region::Time => &mut self.time,
            Region::Period => &mut self.period,
            Region::Date => &mut self.date,
        }
    }

    /// Force the next [`draw`](Self::draw) to repaint the whole screen.
    pub fn invalidate(&mut self) {
        self.needs_full_redraw = true;
    }

    /// Whether anything would be painted by the next draw
    pub fn is_dirty(&self) -> bool {
        self.needs_full_redraw || Region::ALL.iter().any(|r| self.region(*r).is_dirty())
    }

    /// Paint the background (on a full redraw) and every dirty region.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> core::result::Result<(), D::Error> {
        if self.needs_full_redraw {
            display.clear(self.background)?;
            for region in Region::ALL {
                self.region_mut(region).mark_dirty();
            }
            self.needs_full_redraw = false;
        }

        for region in Region::ALL {
            let text = self.region_mut(region);
            if text.is_dirty() {
                debug!("Drawing {:?} region: {:?}", region, text.text());
                text.draw(display)?;
                text.mark_clean();
            }
        }

        Ok(())
    }
}

impl DisplaySink for WatchfaceScreen {
    fn set_text(&mut self, region: Region, text: &str) -> Result<()> {
        self.region_mut(region).set_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::WallClockSample;
    use crate::framebuffer::FrameBuffer;
    use crate::tick::TickEvent;
    use crate::watchface::Watchface;
    use embedded_graphics::primitives::PointsIter;

    fn screen() -> WatchfaceScreen {
        WatchfaceScreen::new(&WatchfaceConfig::default()).unwrap()
    }

    fn framebuffer(screen: &WatchfaceScreen) -> FrameBuffer {
        FrameBuffer::new(screen.layout().screen.size)
    }

    /// Whether any pixel inside `region` has the region's text color
    fn has_ink(fb: &FrameBuffer, screen: &WatchfaceScreen, region: Region) -> bool {
        let color = screen.region(region).color();
        screen
            .layout()
            .region(region)
            .points()
            .any(|p| fb.pixel(p) == Some(color))
    }

    #[test]
    fn test_set_text_routes_to_region() {
        let mut screen = screen();
        screen.set_text(Region::Time, "10:09").unwrap();
        screen.set_text(Region::Period, "PM").unwrap();
        screen.set_text(Region::Date, "OCT\n19TH").unwrap();

        assert_eq!(screen.region(Region::Time).text(), "10:09");
        assert_eq!(screen.region(Region::Period).text(), "PM");
        assert_eq!(screen.region(Region::Date).text(), "OCT\n19TH");
    }

    #[test]
    fn test_loaded_watchface_draws_all_regions() {
        let mut face = Watchface::new(screen());
        face.load(WallClockSample::new(2026, 10, 19, 22, 9).unwrap())
            .unwrap();

        let screen = face.sink_mut();
        let mut fb = framebuffer(screen);
        screen.draw(&mut fb).unwrap();

        assert!(!screen.is_dirty());
        for region in Region::ALL {
            assert!(has_ink(&fb, screen, region), "{region:?} region is blank");
        }
    }

    #[test]
    fn test_minute_tick_repaints_time_row_only() {
        let mut face = Watchface::new(screen());
        face.load(WallClockSample::new(2026, 10, 19, 22, 9).unwrap())
            .unwrap();

        let mut fb = framebuffer(face.sink());
        face.sink_mut().draw(&mut fb).unwrap();
        let mut panel = framebuffer(face.sink());
        fb.flush(&mut panel).unwrap();

        face.on_tick(TickEvent::new(
            WallClockSample::new(2026, 10, 19, 22, 10).unwrap(),
            false,
        ))
        .unwrap();
        face.sink_mut().draw(&mut fb).unwrap();

        let changed = fb.dirty_area().expect("the time digits changed");
        let time_row = face.sink().layout().time;
        assert_eq!(
            changed.intersection(&time_row),
            changed,
            "only the time row should change"
        );
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let mut screen = screen();
        let mut fb = framebuffer(&screen);
        screen.draw(&mut fb).unwrap();
        assert!(!screen.is_dirty());

        screen.invalidate();
        assert!(screen.is_dirty());
        screen.draw(&mut fb).unwrap();
        assert!(!screen.is_dirty());
    }
}
