use ratatui::style::Color;
use ratatui::symbols::border;

use crate::mode::GameMode;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making width vs. height unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns a square grid with the given side length.
    #[must_use]
    pub fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Everything a new session needs from the outside world.
///
/// The driver builds one of these and hands it to `GameState::new`; the
/// core holds no ambient state between sessions.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub grid: GridSize,
    /// Initial tick delay in milliseconds, clamped into the delay bounds.
    pub start_delay_ms: u64,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Returns the default session setup for `mode`.
    #[must_use]
    pub fn for_mode(mode: GameMode) -> Self {
        Self {
            mode,
            grid: GridSize::square(DEFAULT_GRID_SIDE),
            start_delay_ms: DEFAULT_TICK_DELAY_MS,
            seed: None,
        }
    }
}

/// Default side length of the square play field, in cells.
pub const DEFAULT_GRID_SIDE: u16 = 25;

/// Fastest allowed tick delay in milliseconds.
pub const MIN_TICK_DELAY_MS: u64 = 80;

/// Slowest allowed tick delay in milliseconds.
pub const MAX_TICK_DELAY_MS: u64 = 500;

/// Tick delay a fresh session starts with.
pub const DEFAULT_TICK_DELAY_MS: u64 = 180;

/// Delay adjustment per speed key press, in milliseconds.
pub const TICK_DELAY_STEP_MS: i64 = 20;

/// Border margin kept free of single-cell food.
pub const FOOD_INSET_MARGIN: i32 = 1;

/// Border margin kept free of tetromino food.
pub const TETROMINO_INSET_MARGIN: i32 = 2;

/// Random anchor attempts before tetromino placement falls back to a scan.
pub const TETROMINO_PLACEMENT_ATTEMPTS: u32 = 10;

/// A color theme applied to all visual elements.
///
/// Each game mode carries its own accent so the active variant is readable
/// at a glance.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green-on-dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Tetra cyan theme.
pub const THEME_TETRA: Theme = Theme {
    name: "Tetra",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_score: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Bounce magenta theme.
pub const THEME_BOUNCE: Theme = Theme {
    name: "Bounce",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_score: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// Returns the theme paired with a game mode.
#[must_use]
pub fn theme_for_mode(mode: GameMode) -> &'static Theme {
    match mode {
        GameMode::Classic => &THEME_CLASSIC,
        GameMode::Tetra => &THEME_TETRA,
        GameMode::Bounce => &THEME_BOUNCE,
    }
}

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Snake glyphs, two terminal columns per logical cell.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀█";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "█▶";
pub const GLYPH_SNAKE_BODY: &str = "██";
pub const GLYPH_SNAKE_TAIL: &str = "▒▒";

#[cfg(test)]
mod tests {
    use super::{DEFAULT_TICK_DELAY_MS, GridSize, SessionConfig};
    use crate::mode::GameMode;

    #[test]
    fn grid_cell_count_is_width_times_height() {
        let grid = GridSize {
            width: 25,
            height: 25,
        };
        assert_eq!(grid.total_cells(), 625);
    }

    #[test]
    fn default_session_config_uses_default_delay() {
        let config = SessionConfig::for_mode(GameMode::Tetra);
        assert_eq!(config.start_delay_ms, DEFAULT_TICK_DELAY_MS);
        assert_eq!(config.grid, GridSize::square(25));
    }
}
