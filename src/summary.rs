//! Summary card row shown above the history pane

pub mod summary_render;
