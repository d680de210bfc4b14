//! Period dropdown: trigger button plus popup menu over the history pane

mod dropdown_render;
mod dropdown_state;

pub use dropdown_render::render_dropdown;
pub use dropdown_state::DropdownState;
