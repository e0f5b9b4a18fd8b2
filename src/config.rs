//! Application-wide constants and compile-time configuration.
//!
//! Endpoint, timing parameters, buffer sizes and screen layout live here
//! so they can be tuned in one place.

use crate::ui::Color;

// Endpoint

/// Message endpoint. The service returns the message as a JSON string
/// literal (`"Hello"`). Replace with your own database URL.
pub const MESSAGE_URL: &str = "https://your-project.firebaseio.com/message.json";

/// Request headers sent with every GET.
pub const REQUEST_HEADERS: &[(&str, &str)] = &[
    ("Accept", "application/json"),
    ("Cache-Control", "no-cache"),
    ("Connection", "close"),
];

// Timing

/// Minimum time between two fetch attempts (ms).
pub const UPDATE_INTERVAL_MS: u64 = 10_000;

/// Sleep between two iterations of the driver loop (ms).
pub const LOOP_SLEEP_MS: u64 = 100;

/// Upper bound for a single fetch attempt, connect to last byte (ms).
pub const FETCH_TIMEOUT_MS: u64 = 10_000;

// Buffers

/// Capacity of the per-attempt response buffer, terminator included.
pub const MAX_RESPONSE_SIZE: usize = 512;

/// Maximum visible length of a displayed message (bytes).
pub const MESSAGE_CAPACITY: usize = 255;

// Screen layout
//
// Text is drawn at a fixed origin: `TEXT_X` pixels from the left edge,
// vertically centred.  Long messages are clipped by the display.

/// Horizontal text offset (pixels).
pub const TEXT_X: i32 = 10;

/// Colour used to paint text.
pub const FOREGROUND: Color = Color::WHITE;

/// Colour used to erase text and clear the screen.
pub const BACKGROUND: Color = Color::BLACK;

// Texts

/// Shown from boot until the first fetch completes.
pub const BOOT_TEXT: &str = "Connecting...";

/// Shown whenever a fetch attempt fails.
pub const FETCH_ERROR_TEXT: &str = "Fetch error";
