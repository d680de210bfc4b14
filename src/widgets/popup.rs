use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect directly below the anchor, pulled back inside the frame when it
/// would overflow the right or bottom edge.
pub fn popup_below_anchor(frame_area: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_y = anchor.y.saturating_add(anchor.height).min(frame_area.height);
    let popup_x = anchor.x.min(frame_area.width.saturating_sub(popup_width));

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: height.min(frame_area.height.saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
