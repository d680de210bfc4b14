use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error(
        "Invalid status URL '{0}'.\n\nExpected an http(s) URL like http://127.0.0.1:5000/api/status"
    )]
    InvalidStatusUrl(String),
}
