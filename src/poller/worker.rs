//! Status polling worker thread
//!
//! Fetches the remote bot status in a background thread so the UI never
//! blocks on HTTP. Snapshots travel back over a channel that the event
//! loop drains once per tick.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;

use reqwest::Client;
use thiserror::Error;

use super::poller_state::{POLL_INTERVAL, StatusSnapshot, parse_status};

/// Poll failure, at the HTTP stage or in the body contract.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid status body: {0}")]
    Contract(#[from] serde_json::Error),
}

/// Spawn the polling thread.
///
/// The thread owns a single-threaded tokio runtime and one reqwest
/// client, fetches `url` every `POLL_INTERVAL` and sends each parsed
/// snapshot to the UI. It exits when the UI drops the receiver.
///
/// The panic hook swap keeps stray panics (TLS setup, runtime creation)
/// off stderr while the terminal is in raw mode.
pub fn spawn_worker(url: String, update_tx: Sender<StatusSnapshot>) {
    std::thread::spawn(move || {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(|panic_info| {
            log::error!(
                "Status worker panic: {} at {:?}",
                panic_payload_message(panic_info.payload()),
                panic_info.location()
            );
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(poll_loop(url, update_tx));
        }));

        panic::set_hook(prev_hook);

        if let Err(e) = result {
            log::error!(
                "Status worker thread panicked: {}",
                panic_payload_message(&*e)
            );
        }
    });
}

fn panic_payload_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Fetch, parse, send, wait. A failure is logged and the next tick tries
/// again; there is no retry inside a tick.
async fn poll_loop(url: String, update_tx: Sender<StatusSnapshot>) {
    let client = Client::new();
    let mut interval = tokio::time::interval(POLL_INTERVAL);

    loop {
        interval.tick().await;

        match fetch_status(&client, &url).await {
            Ok(snapshot) => {
                if update_tx.send(snapshot).is_err() {
                    // UI side closed the channel
                    break;
                }
            }
            Err(e) => {
                log::error!("Error al obtener el estado del bot: {}", e);
            }
        }
    }
}

async fn fetch_status(client: &Client, url: &str) -> Result<StatusSnapshot, PollError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    Ok(parse_status(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_error_names_the_parse_failure() {
        let parse_err = parse_status("not json").unwrap_err();
        let err = PollError::from(parse_err);
        assert!(err.to_string().starts_with("Invalid status body:"));
    }

    #[test]
    fn test_http_error_is_wrapped() {
        let reqwest_err = Client::new().get("http://[bad-url").build().unwrap_err();
        let err = PollError::from(reqwest_err);
        assert!(err.to_string().starts_with("HTTP error:"));
    }
}
