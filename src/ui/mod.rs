//! User interface subsystem - a single line of text on the display.
//!
//! The poller talks to the screen only through [`TextDisplay`]; the
//! concrete SSD1306 adapter lives in [`display`] (embedded builds).
//!
//! ## Components
//!
//! - **TextDisplay**: draw/clear primitives supplied by the display driver
//! - **DisplayState**: last fetched vs. last drawn text, erase-then-paint diff

#[cfg(feature = "embedded")]
pub mod display;
pub mod diff_logic;

use crate::error::DisplayError;

/// Packed pixel value (RGB565 on colour panels, zero/non-zero on
/// monochrome ones).  Opaque to the UI logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
}

/// Fixed text origin in display pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextOrigin {
    pub x: i32,
    pub y: i32,
}

/// Display collaborator - pixel-level rendering is the driver's job.
pub trait TextDisplay {
    /// Fill the whole screen with `color`.
    fn clear_screen(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Draw `text` with its left edge at `x`, vertically centred on `y`.
    ///
    /// Text that does not fit is clipped by the driver.
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        foreground: Color,
        background: Color,
    ) -> Result<(), DisplayError>;

    /// Screen height in pixels.
    fn height(&self) -> u32;
}
