//! Tests for notification_render

use std::time::Duration;

use super::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render_notifications_to_string(
    notification: &NotificationState,
    now: Instant,
    width: u16,
    height: u16,
) -> String {
    let mut terminal = create_test_terminal(width, height);
    terminal
        .draw(|f| render_notifications(f, notification, now))
        .unwrap();
    terminal.backend().to_string()
}

fn row_of(output: &str, needle: &str) -> Option<usize> {
    output.lines().position(|line| line.contains(needle))
}

#[test]
fn test_toast_message_is_rendered() {
    let mut notification = NotificationState::new();
    notification.show("Entrada ejecutada con éxito.");
    let now = notification.toasts()[0].created_at;

    let output = render_notifications_to_string(&notification, now, 80, 24);
    assert!(output.contains("Entrada ejecutada con éxito."));
}

#[test]
fn test_empty_state_renders_nothing() {
    let notification = NotificationState::new();

    let output = render_notifications_to_string(&notification, Instant::now(), 80, 24);
    assert!(output.chars().all(|c| c == ' ' || c == '\n' || c == '"'));
}

#[test]
fn test_newest_toast_sits_nearest_the_corner() {
    let mut notification = NotificationState::new();
    notification.show("viejo");
    notification.show("nuevo");
    let now = notification.toasts()[1].created_at;

    let output = render_notifications_to_string(&notification, now, 80, 24);

    let old_row = row_of(&output, "viejo").unwrap();
    let new_row = row_of(&output, "nuevo").unwrap();
    assert!(
        new_row > old_row,
        "newest toast should render below the older one, got {} vs {}",
        new_row,
        old_row
    );
}

#[test]
fn test_exiting_toast_is_still_rendered() {
    let mut notification = NotificationState::new();
    notification.show("saliendo");
    let now = notification.toasts()[0].created_at + Duration::from_millis(3100);

    let output = render_notifications_to_string(&notification, now, 80, 24);
    assert!(output.contains("saliendo"));
}

#[test]
fn test_removed_toast_is_not_rendered_even_before_sweep() {
    let mut notification = NotificationState::new();
    notification.show("terminado");
    let now = notification.toasts()[0].created_at + Duration::from_millis(3400);

    let output = render_notifications_to_string(&notification, now, 80, 24);
    assert!(!output.contains("terminado"));
}

#[test]
fn test_stack_drops_oldest_when_out_of_vertical_space() {
    let mut notification = NotificationState::new();
    for i in 0..6 {
        notification.show(&format!("toast numero {}", i));
    }
    let now = notification.toasts()[5].created_at;

    // 12 rows fit two stacked toasts plus margins, not six
    let output = render_notifications_to_string(&notification, now, 80, 12);

    assert!(output.contains("toast numero 5"));
    assert!(!output.contains("toast numero 0"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut notification = NotificationState::new();
    notification.show("no cabe");
    let now = notification.toasts()[0].created_at;

    let output = render_notifications_to_string(&notification, now, 8, 3);
    assert!(!output.contains("no cabe"));
}
