//! Mouse scroll handling
//!
//! Routes scroll events to the appropriate component based on cursor position.

use super::app_state::App;
use crate::layout::Region;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Handle scroll event for the given region
///
/// The wheel drives the history pane from anywhere that is not an
/// interactive control, and moves the highlight inside the open menu.
pub fn handle_scroll(app: &mut App, region: Option<Region>, direction: ScrollDirection) {
    match region {
        Some(Region::HistoryPane) | None => scroll_history(app, direction),
        Some(Region::PeriodMenu) => scroll_menu_highlight(app, direction),
        // Non-scrollable regions: do nothing
        Some(Region::PeriodButton) | Some(Region::SummaryRow) | Some(Region::HelpLine) => {}
    }
}

const HISTORY_SCROLL_LINES: u16 = 3;

fn scroll_history(app: &mut App, direction: ScrollDirection) {
    match direction {
        ScrollDirection::Up => app.history_scroll.scroll_up(HISTORY_SCROLL_LINES),
        ScrollDirection::Down => app.history_scroll.scroll_down(HISTORY_SCROLL_LINES),
    }
}

fn scroll_menu_highlight(app: &mut App, direction: ScrollDirection) {
    match direction {
        ScrollDirection::Up => app.dropdown.hover_previous(),
        ScrollDirection::Down => app.dropdown.hover_next(),
    }
}

#[cfg(test)]
#[path = "mouse_scroll_tests.rs"]
mod mouse_scroll_tests;
