//! Notification module for botdash
//!
//! Provides a reusable toast system that displays transient messages.
//! Any component in the application can use this module to show toasts;
//! they stack in the bottom-right corner and expire on their own.

mod notification_render;
mod notification_state;

pub use notification_render::render_notifications;
pub use notification_state::{
    NotificationState, Severity, TOAST_EXIT, TOAST_VISIBLE, Toast, ToastPhase,
};
