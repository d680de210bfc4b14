/// Vertical scroll position for the history pane.
///
/// Bounds are refreshed on every render from the line count actually
/// produced, so the offset stays valid across resizes and period changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
        }
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // ratatui scroll offsets are u16
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_down(half_page);
    }

    pub fn page_up(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_up(half_page);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Back to the top, used when the selected period changes.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(content_lines: u32, viewport_height: u16) -> ScrollState {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(content_lines, viewport_height);
        scroll
    }

    #[test]
    fn test_new_scroll_state() {
        let scroll = ScrollState::new();
        assert_eq!(scroll.offset, 0);
        assert_eq!(scroll.max_offset, 0);
        assert_eq!(scroll.viewport_height, 0);
    }

    #[test]
    fn test_content_that_fits_cannot_scroll() {
        let mut scroll = scrolled(10, 20);
        scroll.scroll_down(5);
        assert_eq!(scroll.max_offset, 0);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_scroll_down_clamps_to_max_offset() {
        let mut scroll = scrolled(100, 20);

        scroll.scroll_down(10);
        assert_eq!(scroll.offset, 10);

        scroll.scroll_down(200);
        assert_eq!(scroll.offset, 80);
    }

    #[test]
    fn test_scroll_up_clamps_to_zero() {
        let mut scroll = scrolled(100, 20);
        scroll.offset = 10;

        scroll.scroll_up(20);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_update_bounds_clamps_offset_when_content_shrinks() {
        let mut scroll = scrolled(100, 20);
        scroll.offset = 80;

        // Fewer rows after a period change
        scroll.update_bounds(50, 20);
        assert_eq!(scroll.max_offset, 30);
        assert_eq!(scroll.offset, 30);
    }

    #[test]
    fn test_update_bounds_very_large_content() {
        let scroll = scrolled(70000, 20);
        assert_eq!(scroll.max_offset, u16::MAX);
    }

    #[test]
    fn test_page_down_moves_half_viewport() {
        let mut scroll = scrolled(100, 20);

        scroll.page_down();
        assert_eq!(scroll.offset, 10);

        scroll.page_down();
        assert_eq!(scroll.offset, 20);
    }

    #[test]
    fn test_page_up_moves_half_viewport() {
        let mut scroll = scrolled(100, 20);
        scroll.offset = 50;

        scroll.page_up();
        assert_eq!(scroll.offset, 40);
    }

    #[test]
    fn test_jump_to_top_and_bottom() {
        let mut scroll = scrolled(100, 20);

        scroll.jump_to_bottom();
        assert_eq!(scroll.offset, 80);

        scroll.jump_to_top();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_reset_returns_to_top() {
        let mut scroll = scrolled(100, 20);
        scroll.offset = 50;

        scroll.reset();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_default() {
        assert_eq!(ScrollState::default(), ScrollState::new());
    }
}
