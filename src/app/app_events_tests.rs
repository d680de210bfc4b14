//! Tests for keyboard handling

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Rect;

use crate::app::App;
use crate::bot::Period;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

/// An app whose last render placed the period button on screen.
fn app_with_button() -> App {
    let mut app = test_app();
    app.layout_regions.period_button = Some(Rect::new(69, 4, 9, 1));
    app
}

#[test]
fn test_q_quits() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_plain_c_does_not_quit() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('c')));
    assert!(!app.should_quit());
}

#[test]
fn test_q_quits_while_the_menu_is_open() {
    let mut app = test_app();
    app.dropdown.toggle();

    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_t_toggles_the_bot_and_toasts() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('t')));
    assert!(app.bot.active);

    app.handle_key_event(key(KeyCode::Char('t')));
    assert!(!app.bot.active);
    assert_eq!(
        app.notification.messages(),
        vec!["Bot activado.", "Bot desactivado."]
    );
}

#[test]
fn test_e_is_refused_while_the_bot_is_inactive() {
    let mut app = test_app();
    let seeded = app.bot.history().len();

    app.handle_key_event(key(KeyCode::Char('e')));

    assert_eq!(app.bot.history().len(), seeded);
    assert_eq!(
        app.notification.messages(),
        vec!["Bot desactivado. No se puede ejecutar la entrada."]
    );
}

#[test]
fn test_e_records_an_entry_while_the_bot_is_active() {
    let mut app = test_app();
    let seeded = app.bot.history().len();
    app.handle_key_event(key(KeyCode::Char('t')));

    app.handle_key_event(key(KeyCode::Char('e')));

    assert_eq!(app.bot.history().len(), seeded + 1);
}

#[test]
fn test_p_opens_and_closes_the_menu() {
    let mut app = app_with_button();

    app.handle_key_event(key(KeyCode::Char('p')));
    assert!(app.dropdown.is_open());

    app.handle_key_event(key(KeyCode::Char('p')));
    assert!(!app.dropdown.is_open());
}

#[test]
fn test_p_without_a_rendered_button_does_nothing() {
    let mut app = test_app();
    assert!(app.layout_regions.period_button.is_none());

    app.handle_key_event(key(KeyCode::Char('p')));
    assert!(!app.dropdown.is_open());
}

#[test]
fn test_history_keys_scroll_the_pane() {
    let mut app = test_app();
    app.history_scroll.update_bounds(100, 20);

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.history_scroll.offset, 2);

    app.handle_key_event(key(KeyCode::Char('k')));
    assert_eq!(app.history_scroll.offset, 1);

    app.handle_key_event(key(KeyCode::PageDown));
    assert_eq!(app.history_scroll.offset, 11);

    app.handle_key_event(key(KeyCode::PageUp));
    assert_eq!(app.history_scroll.offset, 1);

    app.handle_key_event(key(KeyCode::Char('G')));
    assert_eq!(app.history_scroll.offset, 80);

    app.handle_key_event(key(KeyCode::Char('g')));
    assert_eq!(app.history_scroll.offset, 0);
}

#[test]
fn test_open_menu_swallows_dashboard_keys() {
    let mut app = app_with_button();
    app.history_scroll.update_bounds(100, 20);
    app.handle_key_event(key(KeyCode::Char('p')));

    app.handle_key_event(key(KeyCode::Char('t')));
    app.handle_key_event(key(KeyCode::Char('e')));
    app.handle_key_event(key(KeyCode::Char('G')));

    assert!(!app.bot.active);
    assert_eq!(app.bot.history().len(), 4);
    assert_eq!(app.history_scroll.offset, 0);
    assert!(app.dropdown.is_open());
}

#[test]
fn test_menu_arrows_move_the_highlight() {
    let mut app = app_with_button();
    app.handle_key_event(key(KeyCode::Char('p')));
    assert_eq!(app.dropdown.hovered(), Some(0));

    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.dropdown.hovered(), Some(2));

    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.dropdown.hovered(), Some(1));
}

#[test]
fn test_esc_closes_the_menu_without_applying() {
    let mut app = app_with_button();
    app.handle_key_event(key(KeyCode::Char('p')));
    app.handle_key_event(key(KeyCode::Char('j')));

    app.handle_key_event(key(KeyCode::Esc));

    assert!(!app.dropdown.is_open());
    assert_eq!(app.dropdown.selected(), Period::Today);
}

#[test]
fn test_enter_applies_the_highlight_and_resets_scroll() {
    let mut app = app_with_button();
    app.history_scroll.update_bounds(100, 20);
    app.history_scroll.scroll_down(15);

    app.handle_key_event(key(KeyCode::Char('p')));
    app.handle_key_event(key(KeyCode::Char('j')));
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.dropdown.selected(), Period::Week);
    assert!(!app.dropdown.is_open());
    assert_eq!(app.history_scroll.offset, 0);
}
