//! Bottom key-binding hint line

pub mod help_line_render;
