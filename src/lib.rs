//! botdash library - Terminal dashboard for a simulated trading bot
//!
//! This library exposes the core functionality of botdash for testing purposes.

pub mod app;
pub mod bot;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod help_line;
pub mod history_pane;
pub mod layout;
pub mod notification;
pub mod poller;
pub mod scroll;
pub mod summary;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
