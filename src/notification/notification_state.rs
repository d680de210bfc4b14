//! Notification state management
//!
//! Provides structures for displaying transient toast notifications in the UI.

use std::time::{Duration, Instant};

use crate::theme::{self, toast::ToastColors};

/// How long a toast stays fully visible
pub const TOAST_VISIBLE: Duration = Duration::from_millis(3000);

/// How long the faded exit stage lasts before the toast is dropped
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

/// Toast severity - determines style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    /// Map a caller-supplied tag to a severity.
    ///
    /// Only the exact string "success" selects the success style. Everything
    /// else, including "Success" or a typo, is styled as an error. Callers
    /// rely on this as the catch-all for unexpected tags.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "success" {
            Severity::Success
        } else {
            Severity::Error
        }
    }

    /// Colors for this severity
    pub fn colors(self) -> ToastColors {
        match self {
            Severity::Success => theme::toast::SUCCESS,
            Severity::Error => theme::toast::ERROR,
        }
    }
}

/// Lifecycle stage of a toast at a given instant
///
/// A toast is fully visible for [`TOAST_VISIBLE`], fades for [`TOAST_EXIT`],
/// and is then dropped by the next sweep. There is no way to dismiss one
/// early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Exiting,
    Removed,
}

/// A single toast message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

impl Toast {
    fn new(message: &str, severity: Severity) -> Self {
        Self {
            message: message.to_string(),
            severity,
            created_at: Instant::now(),
        }
    }

    /// Lifecycle stage at `now`. The clock is passed in so tests can step
    /// time without sleeping.
    pub fn phase_at(&self, now: Instant) -> ToastPhase {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed < TOAST_VISIBLE {
            ToastPhase::Visible
        } else if elapsed < TOAST_VISIBLE + TOAST_EXIT {
            ToastPhase::Exiting
        } else {
            ToastPhase::Removed
        }
    }
}

/// The stacking area toasts live in
///
/// Created on the first show and reused for every toast after that. It is
/// never torn down, even when the last toast expires.
#[derive(Debug, Default)]
struct NotificationArea {
    toasts: Vec<Toast>,
}

/// Notification state manager for the application
#[derive(Debug, Default)]
pub struct NotificationState {
    area: Option<NotificationArea>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the stacking area has been created yet
    pub fn is_attached(&self) -> bool {
        self.area.is_some()
    }

    /// The stacking area, created on first use
    fn area_mut(&mut self) -> &mut NotificationArea {
        self.area.get_or_insert_with(NotificationArea::default)
    }

    /// Show a success toast
    pub fn show(&mut self, message: &str) {
        self.show_with(message, Severity::Success);
    }

    /// Show a toast with the given severity
    ///
    /// New toasts join the end of the stack; earlier ones keep their place
    /// and their timers.
    pub fn show_with(&mut self, message: &str, severity: Severity) {
        self.area_mut().toasts.push(Toast::new(message, severity));
    }

    /// Show an error toast
    pub fn show_error(&mut self, message: &str) {
        self.show_with(message, Severity::Error);
    }

    /// Toasts in arrival order, oldest first. Empty before the first show.
    pub fn toasts(&self) -> &[Toast] {
        self.area
            .as_ref()
            .map(|area| area.toasts.as_slice())
            .unwrap_or(&[])
    }

    /// Drop toasts whose exit stage finished, returning how many were removed
    pub fn sweep_expired(&mut self, now: Instant) -> usize {
        let Some(area) = self.area.as_mut() else {
            return 0;
        };
        let before = area.toasts.len();
        area.toasts
            .retain(|toast| toast.phase_at(now) != ToastPhase::Removed);
        before - area.toasts.len()
    }

    /// Messages currently in the stack (test-only)
    #[cfg(test)]
    pub fn messages(&self) -> Vec<&str> {
        self.toasts().iter().map(|t| t.message.as_str()).collect()
    }

    /// Mutable toast access for tests that need to age a toast
    #[cfg(test)]
    pub fn toasts_mut(&mut self) -> &mut Vec<Toast> {
        &mut self.area_mut().toasts
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
