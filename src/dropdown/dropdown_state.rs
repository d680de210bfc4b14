use crate::bot::Period;

/// Period selector state: the trigger button plus its popup menu.
///
/// `hovered` is the keyboard highlight inside the open menu. It is always
/// set while the menu is open and cleared when it closes.
#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    selected: Period,
    open: bool,
    hovered: Option<usize>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Period {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger click toggles the menu. Opening highlights the current
    /// selection so keyboard navigation starts from it.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.hovered = Some(self.selected.index());
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.hovered = None;
    }

    /// Pick the period at a menu row. The menu stays open: a click inside
    /// it never closes it, only the trigger, Esc, Enter or an outside
    /// click do.
    ///
    /// Rows past the end of the menu are ignored. Returns whether a
    /// period was applied.
    pub fn select_at(&mut self, index: usize) -> bool {
        let Some(period) = Period::from_index(index) else {
            return false;
        };
        self.selected = period;
        if self.open {
            self.hovered = Some(index);
        }
        true
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hover_next(&mut self) {
        let count = Period::ORDER.len();
        self.hovered = Some(self.hovered.map_or(0, |i| (i + 1) % count));
    }

    pub fn hover_previous(&mut self) {
        let count = Period::ORDER.len();
        self.hovered = Some(
            self.hovered
                .map_or(count - 1, |i| if i == 0 { count - 1 } else { i - 1 }),
        );
    }

    /// Apply the highlighted row and close (Enter). Returns whether a
    /// period was applied.
    pub fn apply_hovered(&mut self) -> bool {
        let applied = match self.hovered {
            Some(index) => self.select_at(index),
            None => false,
        };
        self.close();
        applied
    }
}
