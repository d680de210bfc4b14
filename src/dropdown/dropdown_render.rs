use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::bot::Period;
use crate::dropdown::DropdownState;
use crate::layout::LayoutRegions;
use crate::theme;
use crate::widgets::popup;

const BUTTON_MARGIN_RIGHT: u16 = 2;
const MENU_WIDTH: u16 = 18;
const MENU_BORDER_HEIGHT: u16 = 2;

/// Draws the period button over the history pane's top border and, when
/// the menu is open, the popup directly below it.
///
/// Both rects are registered for hit testing. On a pane too narrow for
/// the button, neither is drawn nor registered and clicks fall through
/// to whatever sits underneath.
pub fn render_dropdown(
    frame: &mut Frame,
    dropdown: &DropdownState,
    pane_area: Rect,
    regions: &mut LayoutRegions,
) {
    let label = format!("[ {} ▾ ]", dropdown.selected().label());
    let button_width = label.chars().count() as u16;
    if button_width + BUTTON_MARGIN_RIGHT * 2 > pane_area.width {
        return;
    }

    let button_area = Rect {
        x: pane_area.right() - button_width - BUTTON_MARGIN_RIGHT,
        y: pane_area.y,
        width: button_width,
        height: 1,
    };
    let button_style = if dropdown.is_open() {
        theme::dropdown::BUTTON_OPEN
    } else {
        theme::dropdown::BUTTON
    };
    frame.render_widget(Paragraph::new(label).style(button_style), button_area);
    regions.period_button = Some(button_area);

    if !dropdown.is_open() {
        return;
    }

    let menu_height = Period::ORDER.len() as u16 + MENU_BORDER_HEIGHT;
    let menu_area = popup::popup_below_anchor(frame.area(), button_area, MENU_WIDTH, menu_height);
    let inner_width = menu_area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = Period::ORDER
        .iter()
        .enumerate()
        .map(|(i, period)| ListItem::new(menu_line(dropdown, i, *period, inner_width)))
        .collect();

    popup::clear_area(frame, menu_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::dropdown::BORDER))
            .style(Style::default().bg(theme::dropdown::BACKGROUND)),
    );
    frame.render_widget(list, menu_area);
    regions.period_menu = Some(menu_area);
}

fn menu_line(
    dropdown: &DropdownState,
    index: usize,
    period: Period,
    inner_width: usize,
) -> Line<'static> {
    let is_selected = period == dropdown.selected();
    let marker = if is_selected { "✓" } else { " " };

    if dropdown.hovered() == Some(index) {
        let text = format!(" {} {}", marker, period.label());
        return Line::from(Span::styled(
            format!("{:<width$}", text, width = inner_width),
            Style::default()
                .fg(theme::dropdown::ITEM_HOVERED_FG)
                .bg(theme::dropdown::ITEM_HOVERED_BG)
                .add_modifier(theme::dropdown::ITEM_HOVERED_MODIFIER),
        ));
    }

    let marker_color = if is_selected {
        theme::dropdown::SELECTED_INDICATOR
    } else {
        theme::dropdown::ITEM_NORMAL_FG
    };
    let label_width = inner_width.saturating_sub(3);
    Line::from(vec![
        Span::styled(
            format!(" {} ", marker),
            Style::default()
                .fg(marker_color)
                .bg(theme::dropdown::ITEM_NORMAL_BG),
        ),
        Span::styled(
            format!("{:<width$}", period.label(), width = label_width),
            Style::default()
                .fg(theme::dropdown::ITEM_NORMAL_FG)
                .bg(theme::dropdown::ITEM_NORMAL_BG),
        ),
    ])
}

#[cfg(test)]
#[path = "dropdown_render_tests.rs"]
mod dropdown_render_tests;
