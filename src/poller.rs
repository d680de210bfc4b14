//! Remote bot status polling, inert unless a URL is configured

mod poller_state;
pub mod worker;

pub use poller_state::{POLL_INTERVAL, PollerState, StatusSnapshot, parse_status};
