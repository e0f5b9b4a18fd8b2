//! Driver loop - owns the poller for the life of the firmware.
//!
//! Single cooperative task: tick, log what happened, sleep, repeat.  The
//! fetch is awaited inline, so the screen is never touched while an
//! attempt is in flight and at most one attempt exists at a time.

use crate::fetch::timeout::TimeoutTransport;
use crate::fetch::Transport;
use crate::poll_logic::{Clock, CycleReport, FetchStatus, PollConfig, Poller, RenderStatus};
use crate::ui::TextDisplay;
use defmt::{debug, error, info, warn};
use embassy_time::{Duration, Instant, Timer};

/// Monotonic clock backed by the Embassy time driver.
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

/// Run the message board forever.
///
/// Must be driven from a dedicated Embassy task; `transport` should
/// already have a network link (link recovery is its own business).
pub async fn poll_task<T, D>(transport: T, display: D, config: PollConfig) -> !
where
    T: Transport,
    D: TextDisplay,
{
    let clock = EmbassyClock;
    let sleep = Duration::from_millis(config.sleep_ms);
    let mut poller = Poller::new(TimeoutTransport::new(transport), display, config);

    if poller.start().is_err() {
        warn!("Display clear failed");
    }

    info!(
        "Poll task started - every {} ms from {}",
        config.interval_ms, config.url
    );

    loop {
        let report = poller.tick(clock.now_ms()).await;
        log_report(&report, poller.state().current());
        Timer::after(sleep).await;
    }
}

fn log_report(report: &CycleReport, current: &str) {
    match &report.fetch {
        FetchStatus::Skipped => {}
        FetchStatus::Fetched {
            received,
            truncated,
        } => {
            if *truncated {
                warn!("Response truncated");
            }
            info!("Fetched message ({} bytes): {}", received, current);
        }
        FetchStatus::Failed(e) => {
            error!("Failed to fetch message: {}", e);
        }
    }

    match report.render {
        RenderStatus::Unchanged => {}
        RenderStatus::Redrawn => debug!("Redrawn: {}", current),
        RenderStatus::Failed(e) => warn!("Redraw failed: {} - retrying", e),
    }
}
