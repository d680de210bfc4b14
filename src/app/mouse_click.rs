//! Mouse click handling
//!
//! Clicks drive the period selector: the trigger button toggles its menu,
//! menu rows apply a period, anywhere else dismisses an open menu.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    // The trigger always toggles, even while the menu is open
    if region == Some(Region::PeriodButton) {
        app.dropdown.toggle();
        return;
    }

    // Dismiss the open menu when clicking outside it. The click only
    // dismisses, it does not also act on whatever sits underneath.
    if app.dropdown.is_open() && region != Some(Region::PeriodMenu) {
        app.dropdown.close();
        return;
    }

    if region == Some(Region::PeriodMenu) {
        click_period_menu(app, mouse);
    }
}

fn click_period_menu(app: &mut App, mouse: MouseEvent) {
    let Some(menu_rect) = app.layout_regions.period_menu else {
        return;
    };

    // Menu rows sit inside the border
    let inner_y = menu_rect.y.saturating_add(1);
    let inner_height = menu_rect.height.saturating_sub(2);

    if mouse.row < inner_y || mouse.row >= inner_y.saturating_add(inner_height) {
        return;
    }

    let relative_y = mouse.row.saturating_sub(inner_y) as usize;
    if app.dropdown.select_at(relative_y) {
        app.history_scroll.reset();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
