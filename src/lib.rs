//! msgboard - network message board core.
//!
//! Periodically fetches a short text message and shows it on a small
//! display, redrawing only when the text changes.
//!
//! ## Data flow
//!
//! ```text
//! Transport ──fragments──► FetchBuffer ──► normalize ──► Poller ──► TextDisplay
//! ```
//!
//! Everything except [`poll`] and [`ui::display`] is hardware-free and
//! tested on the host: `cargo test --lib`.  The embedded adapters
//! (Embassy time, SSD1306) are enabled with `--features embedded`.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod fetch;
pub mod poll_logic;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod poll;

pub use error::{DisplayError, FetchError, TransportError};
pub use fetch::{fetch_message, Fetched, Message, Request, StatusCode, Transport};
pub use poll_logic::{Clock, CycleReport, FetchStatus, PollConfig, PollPhase, Poller, RenderStatus};
pub use ui::diff_logic::DisplayState;
pub use ui::{Color, TextDisplay, TextOrigin};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
