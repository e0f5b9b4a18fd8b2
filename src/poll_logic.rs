//! Poll scheduler and differ.
//!
//! `Poller::tick` is called by the driver loop every [`LOOP_SLEEP_MS`]:
//!
//! ```text
//!   Idle ──(now - last_fetch > interval)──► Fetching
//!   Fetching ──(done, ok or not)──────────► Idle          last_fetch = now
//!   Fetching ──(text changed)─────────────► Rendering
//!   Rendering ──(erase + paint)───────────► Idle          previous = current
//! ```
//!
//! A failed fetch shows [`FETCH_ERROR_TEXT`] through the same diff path.
//! There is no backoff and no early retry: the next attempt waits a full
//! interval whatever the outcome.

use crate::config::{
    BACKGROUND, BOOT_TEXT, FETCH_ERROR_TEXT, FETCH_TIMEOUT_MS, FOREGROUND, LOOP_SLEEP_MS,
    MESSAGE_URL, REQUEST_HEADERS, TEXT_X, UPDATE_INTERVAL_MS,
};
use crate::error::{DisplayError, FetchError};
use crate::fetch::{fetch_message, Request, Transport};
use crate::ui::diff_logic::DisplayState;
use crate::ui::{Color, TextDisplay, TextOrigin};

/// Clock collaborator - monotonic milliseconds since boot.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Runtime knobs, defaulting to the constants in [`crate::config`].
#[derive(Clone, Copy, Debug)]
pub struct PollConfig {
    pub url: &'static str,
    pub headers: &'static [(&'static str, &'static str)],
    pub interval_ms: u64,
    pub sleep_ms: u64,
    pub timeout_ms: u64,
    pub text_x: i32,
    pub foreground: Color,
    pub background: Color,
    pub boot_text: &'static str,
    pub error_text: &'static str,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            url: MESSAGE_URL,
            headers: REQUEST_HEADERS,
            interval_ms: UPDATE_INTERVAL_MS,
            sleep_ms: LOOP_SLEEP_MS,
            timeout_ms: FETCH_TIMEOUT_MS,
            text_x: TEXT_X,
            foreground: FOREGROUND,
            background: BACKGROUND,
            boot_text: BOOT_TEXT,
            error_text: FETCH_ERROR_TEXT,
        }
    }
}

impl PollConfig {
    fn request(&self) -> Request<'static> {
        Request {
            url: self.url,
            headers: self.headers,
            timeout_ms: self.timeout_ms,
        }
    }
}

/// Scheduler phase.  A cycle starts and ends in `Idle`; the phases it
/// entered in between are listed by [`CycleReport::phases`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollPhase {
    /// Waiting for the next interval.
    Idle,
    /// Fetch attempt in flight.
    Fetching,
    /// Applying a detected change.
    Rendering,
}

/// What the fetch half of a cycle did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FetchStatus {
    /// Interval not elapsed yet.
    Skipped,
    /// New text stored as `current`.
    Fetched { received: usize, truncated: bool },
    /// Attempt failed; `current` now holds the sentinel text.
    Failed(FetchError),
}

/// What the render half of a cycle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderStatus {
    /// Screen already shows `current`; nothing drawn.
    Unchanged,
    /// Erase-then-paint pair issued.
    Redrawn,
    /// A draw call failed; retried next cycle.
    Failed(DisplayError),
}

/// Outcome of one `tick`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    pub fetch: FetchStatus,
    pub render: RenderStatus,
}

impl CycleReport {
    /// Phases entered during the cycle, in order.  Empty for an idle tick.
    pub fn phases(&self) -> impl Iterator<Item = PollPhase> {
        let fetching = (self.fetch != FetchStatus::Skipped).then_some(PollPhase::Fetching);
        let rendering = (self.render != RenderStatus::Unchanged).then_some(PollPhase::Rendering);
        fetching.into_iter().chain(rendering)
    }
}

/// Owns the collaborators and the display state for the life of the loop.
pub struct Poller<T, D> {
    transport: T,
    display: D,
    config: PollConfig,
    state: DisplayState,
    origin: TextOrigin,
    last_fetch_ms: u64,
}

impl<T: Transport, D: TextDisplay> Poller<T, D> {
    /// The boot text is pending until the first render.
    pub fn new(transport: T, display: D, config: PollConfig) -> Self {
        let origin = TextOrigin {
            x: config.text_x,
            y: (display.height() / 2) as i32,
        };
        Self {
            transport,
            display,
            state: DisplayState::new(config.boot_text),
            config,
            origin,
            last_fetch_ms: 0,
        }
    }

    /// Clear the screen to the background colour.  Call once before the loop.
    pub fn start(&mut self) -> Result<(), DisplayError> {
        self.display.clear_screen(self.config.background)
    }

    /// One loop iteration: fetch if the interval elapsed, then redraw if
    /// the text changed.
    pub async fn tick(&mut self, now_ms: u64) -> CycleReport {
        let fetch = if self.fetch_due(now_ms) {
            self.fetch(now_ms).await
        } else {
            FetchStatus::Skipped
        };

        let render = self.render();
        CycleReport { fetch, render }
    }

    /// Returns `true` once strictly more than one interval has passed since
    /// the last attempt.
    pub fn fetch_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_fetch_ms) > self.config.interval_ms
    }

    async fn fetch(&mut self, now_ms: u64) -> FetchStatus {
        let request = self.config.request();

        let status = match fetch_message(&mut self.transport, &request).await {
            Ok(fetched) => {
                self.state.set_message(fetched.message);
                FetchStatus::Fetched {
                    received: fetched.received,
                    truncated: fetched.truncated,
                }
            }
            Err(e) => {
                self.state.set_current(self.config.error_text);
                FetchStatus::Failed(e)
            }
        };

        self.last_fetch_ms = now_ms;
        status
    }

    fn render(&mut self) -> RenderStatus {
        if !self.state.needs_redraw() {
            return RenderStatus::Unchanged;
        }

        let result = self.state.render(
            &mut self.display,
            self.origin,
            self.config.foreground,
            self.config.background,
        );

        match result {
            Ok(true) => RenderStatus::Redrawn,
            Ok(false) => RenderStatus::Unchanged,
            Err(e) => RenderStatus::Failed(e),
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn last_fetch_ms(&self) -> u64 {
        self.last_fetch_ms
    }

    pub fn origin(&self) -> TextOrigin {
        self.origin
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
