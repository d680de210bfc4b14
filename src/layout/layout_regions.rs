//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    // Base layout
    SummaryRow,
    HistoryPane,
    HelpLine,

    // Period dropdown (button sits on the history pane border)
    PeriodButton,
    PeriodMenu,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is
/// not visible; the period button is absent on narrow terminals and the menu
/// only while open. Used by mouse event handlers to determine which component
/// is under the cursor.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    // Base layout
    pub summary_row: Option<Rect>,
    pub history_pane: Option<Rect>,
    pub help_line: Option<Rect>,

    // Period dropdown (menu only populated while open)
    pub period_button: Option<Rect>,
    pub period_menu: Option<Rect>,
}

impl LayoutRegions {
    /// Create a new empty LayoutRegions
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
