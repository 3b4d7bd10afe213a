//! Screen-driven color themes.
//!
//! Pure lookup table; applying a theme is a side effect that belongs to the
//! draw code alone.

use ratatui::style::Color;

use crate::app::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Theme {
    /// Accent color for titles and borders.
    pub primary: Color,
    /// Color for the highlighted list row.
    pub highlight: Color,
}

const DEFAULT_THEME: Theme = Theme {
    primary: Color::Cyan,
    highlight: Color::Yellow,
};

const BIN_THEME: Theme = Theme {
    primary: Color::Green,
    highlight: Color::LightGreen,
};

const MONSTER_HUNTER_THEME: Theme = Theme {
    primary: Color::Yellow,
    highlight: Color::LightYellow,
};

/// Static mapping from screen to theme.
pub(crate) fn theme_for(screen: Screen) -> Theme {
    match screen {
        Screen::Home => DEFAULT_THEME,
        Screen::BinSchedule => BIN_THEME,
        Screen::Items => MONSTER_HUNTER_THEME,
    }
}
