//! Notification rendering
//!
//! Provides functions for rendering the toast stack in the UI.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::{NotificationState, Toast, ToastPhase};
use crate::theme;
use crate::widgets::popup;

const TOAST_HEIGHT: u16 = 3; // 1 line content + 2 borders
const TOAST_GAP: u16 = 1;
const MARGIN: u16 = 2;

/// Render the toast stack anchored to the bottom-right corner of the frame
///
/// Must be called after rendering the main UI so toasts appear on top of
/// other content. The newest toast sits nearest the corner and older ones
/// stack upward. `now` drives the exit fade; pass `Instant::now()` outside
/// of tests.
pub fn render_notifications(frame: &mut Frame, notification: &NotificationState, now: Instant) {
    let toasts = notification.toasts();
    if toasts.is_empty() {
        return;
    }

    let frame_area = frame.area();
    let mut bottom_y = frame_area.height.saturating_sub(MARGIN);

    // Newest first, walking upward from the corner
    for toast in toasts.iter().rev() {
        let phase = toast.phase_at(now);
        if phase == ToastPhase::Removed {
            // Sweeping happens on the event tick; skip stragglers here
            continue;
        }

        if bottom_y < TOAST_HEIGHT + MARGIN {
            // Out of vertical space; drop the oldest toasts from view
            break;
        }

        // Width: message length + padding (1 char each side) + borders (2)
        let content_width = toast.message.chars().count() as u16;
        let toast_width = (content_width + 4).min(frame_area.width.saturating_sub(MARGIN * 2));
        if toast_width < 5 {
            break;
        }

        let toast_area = Rect {
            x: frame_area.width.saturating_sub(toast_width + MARGIN),
            y: bottom_y - TOAST_HEIGHT,
            width: toast_width,
            height: TOAST_HEIGHT,
        };

        render_toast(frame, toast, phase, toast_area);
        bottom_y = toast_area.y.saturating_sub(TOAST_GAP);
    }
}

fn render_toast(frame: &mut Frame, toast: &Toast, phase: ToastPhase, area: Rect) {
    let colors = toast.severity.colors();

    let mut text_style = Style::default().fg(colors.fg).bg(colors.bg);
    let mut border_style = Style::default().fg(colors.border).bg(colors.bg);
    if phase == ToastPhase::Exiting {
        text_style = text_style.add_modifier(theme::toast::EXITING_MODIFIER);
        border_style = border_style.add_modifier(theme::toast::EXITING_MODIFIER);
    }

    // Clear background for floating effect
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(format!(" {} ", toast.message), text_style));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
