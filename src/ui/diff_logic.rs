//! Differential text update - erase what is on screen, paint what is new.

use crate::error::DisplayError;
use crate::fetch::Message;
use crate::ui::{Color, TextDisplay, TextOrigin};

/// Text to show next (`current`) and text currently on screen (`previous`).
///
/// Both are bounded to [`crate::config::MESSAGE_CAPACITY`] bytes.  After a
/// successful redraw `previous == current` until the next change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    current: Message,
    previous: Message,
}

impl DisplayState {
    /// Start with `initial` pending and a blank screen.
    pub fn new(initial: &str) -> Self {
        let mut state = Self {
            current: Message::new(),
            previous: Message::new(),
        };
        state.set_current(initial);
        state
    }

    /// Replace the pending text, cut to capacity on a char boundary.
    /// Returns `true` if the text was cut.
    pub fn set_current(&mut self, text: &str) -> bool {
        self.current.clear();
        for c in text.chars() {
            if self.current.push(c).is_err() {
                return true;
            }
        }
        false
    }

    /// Replace the pending text with an already bounded message.
    pub fn set_message(&mut self, message: Message) {
        self.current = message;
    }

    pub fn current(&self) -> &str {
        self.current.as_str()
    }

    pub fn previous(&self) -> &str {
        self.previous.as_str()
    }

    /// Returns `true` if the screen does not show `current` yet.
    pub fn needs_redraw(&self) -> bool {
        self.current != self.previous
    }

    /// Differential update: if the text changed, erase the old text by
    /// drawing it in the background colour, then paint the new one at the
    /// same origin.  Returns `Ok(true)` if anything was drawn.
    ///
    /// `previous` is only updated once both draws succeeded, so a failed
    /// redraw is retried on the next call.
    pub fn render<D: TextDisplay>(
        &mut self,
        display: &mut D,
        origin: TextOrigin,
        foreground: Color,
        background: Color,
    ) -> Result<bool, DisplayError> {
        if !self.needs_redraw() {
            return Ok(false);
        }

        display.draw_text(
            self.previous.as_str(),
            origin.x,
            origin.y,
            background,
            background,
        )?;
        display.draw_text(
            self.current.as_str(),
            origin.x,
            origin.y,
            foreground,
            background,
        )?;

        self.previous.clone_from(&self.current);
        Ok(true)
    }
}
