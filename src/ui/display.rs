//! SSD1306 OLED display wrapper.
//!
//! Implements [`TextDisplay`] on top of `embedded-graphics`.  The driver
//! runs in buffered mode and only flushes the area touched since the last
//! flush, so an erase-then-paint pair updates just the text row.

use crate::error::DisplayError;
use crate::ui::{Color, TextDisplay};
use defmt::warn;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Monochrome text surface.
pub struct Ssd1306Text<I2C> {
    display: Display<I2C>,
}

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Ssd1306Text<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        warn!("SSD1306 init failed");
    }
    display.clear_buffer();
    let _ = display.flush();
    Ssd1306Text { display }
}

/// Any non-zero packed colour lights the pixel.
fn binary(color: Color) -> BinaryColor {
    BinaryColor::from(color != Color::BLACK)
}

fn text_style(foreground: Color, background: Color) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(binary(foreground))
        .background_color(binary(background))
        .build()
}

impl<I2C> TextDisplay for Ssd1306Text<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear_screen(&mut self, color: Color) -> Result<(), DisplayError> {
        DrawTarget::clear(&mut self.display, binary(color)).map_err(|_| DisplayError)?;
        self.display.flush().map_err(|_| DisplayError)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        foreground: Color,
        background: Color,
    ) -> Result<(), DisplayError> {
        Text::with_baseline(
            text,
            Point::new(x, y),
            text_style(foreground, background),
            Baseline::Middle,
        )
        .draw(&mut self.display)
        .map_err(|_| DisplayError)?;
        self.display.flush().map_err(|_| DisplayError)
    }

    fn height(&self) -> u32 {
        OriginDimensions::size(&self.display).height
    }
}
