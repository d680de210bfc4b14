use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::dropdown::render_dropdown;
use crate::notification::render_notifications;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

        crate::summary::summary_render::render_summary(self, frame, layout[0]);
        self.layout_regions.summary_row = Some(layout[0]);

        crate::history_pane::history_pane_render::render_pane(self, frame, layout[1]);
        self.layout_regions.history_pane = Some(layout[1]);

        crate::help_line::help_line_render::render_line(self, frame, layout[2]);
        self.layout_regions.help_line = Some(layout[2]);

        // Drawn over the pane border; registers its own hit regions
        render_dropdown(frame, &self.dropdown, layout[1], &mut self.layout_regions);

        // Toasts sit on top of everything
        render_notifications(frame, &self.notification, Instant::now());
    }
}
