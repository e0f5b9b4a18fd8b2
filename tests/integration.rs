//! Integration tests for msgboard host-testable logic.

use embassy_futures::block_on;
use msgboard::{
    Clock, Color, DisplayError, FetchError, FetchStatus, PollConfig, Poller, RenderStatus,
    Request, StatusCode, TextDisplay, Transport, TransportError,
};
use std::cell::Cell;

/// Serves one body per request, split into fixed-size fragments.
struct ChunkedServer {
    responses: Vec<(u16, Vec<u8>)>,
    chunk: usize,
    seen_urls: Vec<String>,
}

impl ChunkedServer {
    fn new(chunk: usize, responses: &[(u16, &str)]) -> Self {
        Self {
            responses: responses
                .iter()
                .rev()
                .map(|(status, body)| (*status, body.as_bytes().to_vec()))
                .collect(),
            chunk,
            seen_urls: Vec::new(),
        }
    }
}

impl Transport for ChunkedServer {
    async fn perform_request<F>(
        &mut self,
        request: &Request<'_>,
        mut on_fragment: F,
    ) -> Result<StatusCode, TransportError>
    where
        F: FnMut(&[u8]),
    {
        self.seen_urls.push(request.url.to_string());
        let (status, body) = self.responses.pop().ok_or(TransportError::Connect)?;
        for fragment in body.chunks(self.chunk) {
            on_fragment(fragment);
        }
        Ok(StatusCode(status))
    }
}

/// Keeps what a real panel would show at the text origin.
#[derive(Default)]
struct Panel {
    shown: String,
    draws: usize,
    clears: usize,
}

impl TextDisplay for Panel {
    fn clear_screen(&mut self, _color: Color) -> Result<(), DisplayError> {
        self.clears += 1;
        self.shown.clear();
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        _x: i32,
        _y: i32,
        foreground: Color,
        background: Color,
    ) -> Result<(), DisplayError> {
        self.draws += 1;
        if foreground == background {
            self.shown.clear();
        } else {
            self.shown = text.to_string();
        }
        Ok(())
    }

    fn height(&self) -> u32 {
        240
    }
}

/// Manually advanced clock.
struct TestClock(Cell<u64>);

impl TestClock {
    fn advance(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for TestClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

/// Drive the poller like the firmware loop does, one sleep quantum at a time.
fn run_for<T: Transport, D: TextDisplay>(
    poller: &mut Poller<T, D>,
    clock: &TestClock,
    duration_ms: u64,
) -> Vec<FetchStatus> {
    let sleep = poller.config().sleep_ms;
    let mut fetches = Vec::new();
    let end = clock.now_ms() + duration_ms;
    while clock.now_ms() < end {
        let report = block_on(poller.tick(clock.now_ms()));
        if report.fetch != FetchStatus::Skipped {
            fetches.push(report.fetch);
        }
        clock.advance(sleep);
    }
    fetches
}

#[test]
fn quoted_message_is_displayed_unquoted() {
    let server = ChunkedServer::new(3, &[(200, "\"Hello\"")]);
    let mut poller = Poller::new(server, Panel::default(), PollConfig::default());
    let clock = TestClock(Cell::new(0));

    poller.start().unwrap();
    assert_eq!(poller.display().clears, 1);

    run_for(&mut poller, &clock, 100);
    assert_eq!(poller.display().shown, "Connecting...");

    let fetches = run_for(&mut poller, &clock, 10_100);
    assert_eq!(fetches.len(), 1);
    assert_eq!(poller.display().shown, "Hello");
    assert_eq!(
        poller.transport_mut().seen_urls,
        [msgboard::config::MESSAGE_URL]
    );
}

#[test]
fn server_error_shows_sentinel_until_next_interval() {
    let server = ChunkedServer::new(64, &[(500, "boom"), (200, "\"recovered\"")]);
    let mut poller = Poller::new(server, Panel::default(), PollConfig::default());
    let clock = TestClock(Cell::new(0));

    let fetches = run_for(&mut poller, &clock, 10_200);
    assert_eq!(
        fetches,
        [FetchStatus::Failed(FetchError::BadStatus(StatusCode(500)))]
    );
    assert_eq!(poller.display().shown, "Fetch error");
    let failed_at = poller.last_fetch_ms();

    // Nothing more until a full interval has passed.
    let fetches = run_for(&mut poller, &clock, failed_at + 10_000 - clock.now_ms());
    assert!(fetches.is_empty());
    assert_eq!(poller.display().shown, "Fetch error");

    let fetches = run_for(&mut poller, &clock, 200);
    assert_eq!(fetches.len(), 1);
    assert_eq!(poller.display().shown, "recovered");
    assert!(poller.last_fetch_ms() > failed_at + 10_000);
}

#[test]
fn fetch_cadence_is_interval_plus_sleep_jitter() {
    let responses: Vec<(u16, &str)> = (0..5).map(|_| (200, "\"tick\"")).collect();
    let server = ChunkedServer::new(8, &responses);
    let mut poller = Poller::new(server, Panel::default(), PollConfig::default());
    let clock = TestClock(Cell::new(0));

    let mut fetch_times = Vec::new();
    while fetch_times.len() < 3 {
        let report = block_on(poller.tick(clock.now_ms()));
        if report.fetch != FetchStatus::Skipped {
            fetch_times.push(clock.now_ms());
        }
        clock.advance(100);
    }

    for pair in fetch_times.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap > 10_000 && gap <= 10_100, "gap {gap}");
    }
}

#[test]
fn unchanged_message_is_drawn_once() {
    let server = ChunkedServer::new(2, &[(200, "\"same\""), (200, "same")]);
    let mut poller = Poller::new(server, Panel::default(), PollConfig::default());
    let clock = TestClock(Cell::new(0));

    run_for(&mut poller, &clock, 10_200);
    assert_eq!(poller.display().shown, "same");
    let draws_after_first = poller.display().draws;

    let fetches = run_for(&mut poller, &clock, 10_100);
    assert_eq!(fetches.len(), 1);
    assert_eq!(poller.display().draws, draws_after_first);
    assert_eq!(poller.display().shown, "same");
}

#[test]
fn render_report_reflects_diff() {
    let server = ChunkedServer::new(16, &[(200, "A"), (200, "B")]);
    let mut poller = Poller::new(server, Panel::default(), PollConfig::default());

    let boot = block_on(poller.tick(0));
    assert_eq!(boot.render, RenderStatus::Redrawn);
    let idle = block_on(poller.tick(100));
    assert_eq!(idle.render, RenderStatus::Unchanged);

    let before = poller.display().draws;
    block_on(poller.tick(10_001));
    block_on(poller.tick(20_002));
    assert_eq!(poller.display().draws - before, 4);
    assert_eq!(poller.display().shown, "B");
}
