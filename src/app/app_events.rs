//! Event loop plumbing: polls the terminal and routes keys and mouse
//! input to the dashboard state.

use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::mouse_events;
use crate::app::App;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Advances time-driven state, then handles at most one terminal event.
    ///
    /// The poll timeout keeps the loop ticking so toasts expire and poller
    /// updates drain even when the user touches nothing.
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick(Instant::now());

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Windows terminals emit both Press and Release
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key);
                }
                Event::Mouse(mouse) => mouse_events::handle_mouse_event(self, mouse),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if Self::is_quit_key(&key) {
            self.should_quit = true;
            return;
        }

        if self.dropdown.is_open() {
            self.handle_menu_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('t') => self.toggle_bot(),
            KeyCode::Char('e') => self.execute_manual_entry(),
            KeyCode::Char('p') => self.toggle_period_menu(),
            KeyCode::Char('j') | KeyCode::Down => self.history_scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.history_scroll.scroll_up(1),
            KeyCode::PageDown => self.history_scroll.page_down(),
            KeyCode::PageUp => self.history_scroll.page_up(),
            KeyCode::Char('g') => self.history_scroll.jump_to_top(),
            KeyCode::Char('G') => self.history_scroll.jump_to_bottom(),
            _ => {}
        }
    }

    fn is_quit_key(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Keys while the period menu is open. Anything not bound here is
    /// swallowed so strokes cannot leak into the history pane underneath.
    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('p') => self.dropdown.close(),
            KeyCode::Char('j') | KeyCode::Down => self.dropdown.hover_next(),
            KeyCode::Char('k') | KeyCode::Up => self.dropdown.hover_previous(),
            KeyCode::Enter => {
                if self.dropdown.apply_hovered() {
                    self.history_scroll.reset();
                }
            }
            _ => {}
        }
    }

    /// Opens or closes the period menu, mirroring a click on its button.
    ///
    /// When the last render had no room for the button there is nothing
    /// on screen to anchor the menu to, so the shortcut does nothing.
    fn toggle_period_menu(&mut self) {
        if self.layout_regions.period_button.is_none() {
            return;
        }
        self.dropdown.toggle();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
