//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);

    // Semantic colors - vibrant Galaxy palette
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
}

/// Summary card styles (top row)
pub mod summary {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const TITLE: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);

    // Card values and their captions
    pub const VALUE: Color = palette::TEXT;
    pub const CAPTION: Color = palette::TEXT_MUTED;
    pub const BALANCE: Color = palette::SUCCESS;
    pub const WINS: Color = palette::SUCCESS;
    pub const LOSSES: Color = palette::ERROR;

    // Bot and remote run states
    pub const STATE_ACTIVE: Color = palette::SUCCESS;
    pub const STATE_INACTIVE: Color = palette::TEXT_MUTED;
    pub const REMOTE_WAITING: Color = palette::TEXT_DIM;
}

/// History pane styles (operations table)
pub mod history {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const TITLE: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);

    // Table content
    pub const HEADER: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::BOLD);
    pub const ROW: Color = Color::Rgb(180, 182, 200);
    pub const WIN: Color = palette::SUCCESS;
    pub const LOSS: Color = palette::ERROR;

    // Empty state and the stats shown next to the title
    pub const EMPTY: Color = palette::TEXT_DIM;
    pub const STATS: Color = palette::TEXT_MUTED;
}

/// Period dropdown styles (trigger button + menu)
pub mod dropdown {
    use super::*;

    // Trigger button on the history pane border
    pub const BUTTON: Style = Style::new().fg(palette::TEXT).bg(palette::BG_HOVER);
    pub const BUTTON_OPEN: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::CYAN)
        .add_modifier(Modifier::BOLD);

    // Menu popup
    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;

    // Menu items
    pub const ITEM_NORMAL_FG: Color = palette::TEXT;
    pub const ITEM_NORMAL_BG: Color = palette::BG_DARK;
    pub const ITEM_HOVERED_FG: Color = palette::BG_DARK;
    pub const ITEM_HOVERED_BG: Color = palette::CYAN;
    pub const ITEM_HOVERED_MODIFIER: Modifier = Modifier::BOLD;
    pub const SELECTED_INDICATOR: Color = palette::SUCCESS;
}

/// Toast notification styles
pub mod toast {
    use super::*;

    pub struct ToastColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const SUCCESS: ToastColors = ToastColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(22, 163, 74),
        border: Color::Rgb(34, 197, 94),
    };

    pub const ERROR: ToastColors = ToastColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(220, 38, 38),
        border: Color::Rgb(239, 68, 68),
    };

    // Exit stage fades the toast before it is dropped
    pub const EXITING_MODIFIER: Modifier = Modifier::DIM;
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}
