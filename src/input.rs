use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::config::TICK_DELAY_STEP_MS;
use crate::mode::GameMode;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    /// Tick delay adjustment in milliseconds (positive = slower).
    SpeedDelta(i64),
    /// Mode choice on the start screen.
    SelectMode(GameMode),
    Confirm,
    Quit,
}

/// Polls the terminal for key presses and maps them to game inputs.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the next pending input without blocking.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(Some(GameInput::Quit));
                }
                Ok(map_key(key.code))
            }
            _ => Ok(None),
        }
    }
}

fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('p') | KeyCode::Esc => Some(GameInput::Pause),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameInput::SpeedDelta(TICK_DELAY_STEP_MS)),
        KeyCode::Char('-') => Some(GameInput::SpeedDelta(-TICK_DELAY_STEP_MS)),
        KeyCode::Char('1') => Some(GameInput::SelectMode(GameMode::Classic)),
        KeyCode::Char('2') => Some(GameInput::SelectMode(GameMode::Tetra)),
        KeyCode::Char('3') => Some(GameInput::SelectMode(GameMode::Bounce)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Char('q') => Some(GameInput::Quit),
        _ => None,
    }
}
