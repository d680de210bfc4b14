//! Scrollable operations table filtered by the selected period

pub mod history_pane_render;
