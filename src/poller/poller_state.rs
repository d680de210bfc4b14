use std::sync::mpsc::Receiver;
use std::time::Duration;

use serde::Deserialize;

/// Delay between two status fetches.
pub const POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// One status report from the remote bot.
///
/// The contract is deliberately small: the remote balance and whether the
/// bot is running. Unknown fields in the body are ignored so the endpoint
/// can grow without breaking older dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StatusSnapshot {
    pub balance: f64,
    pub bot_active: bool,
}

/// Parse a status body as served by a `/api/status`-shaped endpoint.
pub fn parse_status(body: &str) -> Result<StatusSnapshot, serde_json::Error> {
    serde_json::from_str(body)
}

/// UI-side polling state.
///
/// Polling is off unless a status URL was configured explicitly; there is
/// no default endpoint to fall back to. The worker thread pushes
/// snapshots over the channel and the event loop drains them each tick.
#[derive(Debug, Default)]
pub struct PollerState {
    url: Option<String>,
    latest: Option<StatusSnapshot>,
    update_rx: Option<Receiver<StatusSnapshot>>,
}

impl PollerState {
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            latest: None,
            update_rx: None,
        }
    }

    /// Whether a status URL was configured at all.
    pub fn configured(&self) -> bool {
        self.url.is_some()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn attach_updates(&mut self, update_rx: Receiver<StatusSnapshot>) {
        self.update_rx = Some(update_rx);
    }

    /// Pull every snapshot the worker has queued, keeping the newest.
    /// Returns whether anything arrived.
    pub fn drain_updates(&mut self) -> bool {
        let Some(update_rx) = &self.update_rx else {
            return false;
        };
        let mut received = false;
        while let Ok(snapshot) = update_rx.try_recv() {
            self.latest = Some(snapshot);
            received = true;
        }
        received
    }

    pub fn latest(&self) -> Option<&StatusSnapshot> {
        self.latest.as_ref()
    }
}
