use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GridSize, MAX_TICK_DELAY_MS, MIN_TICK_DELAY_MS, SessionConfig};
use crate::food::{self, Food};
use crate::input::{Direction, GameInput};
use crate::mode::GameMode;
use crate::snake::{Position, Snake};
use crate::tetromino;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    /// Hit a wall or the snake's own body.
    Collision,
    /// Bounce rule: ate on two consecutive ticks.
    ConsecutiveFood,
}

impl GameOverReason {
    /// Stable identifier, useful for logs and persistence.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Collision => "collision",
            Self::ConsecutiveFood => "consecutive-food",
        }
    }
}

/// Terminal report emitted once per session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOverReport {
    pub final_score: u32,
    /// The head position that would have been entered on the fatal tick.
    pub head: Position,
    pub reason: GameOverReason,
}

/// What one call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Paused or already over; nothing advanced.
    Suspended,
    /// The snake moved one cell.
    Advanced { ate: bool },
    /// This tick ended the session.
    Ended(GameOverReport),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// Active food cells; one entry in Classic, up to four in Tetra/Bounce.
    pub foods: Vec<Food>,
    pub score: u32,
    pub status: GameStatus,
    pub tick_count: u64,
    mode: GameMode,
    tick_delay_ms: u64,
    /// Bounce streak flag: food was eaten on the immediately preceding tick.
    ate_last_tick: bool,
    game_over: Option<GameOverReport>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session from `config`, seeding from entropy unless
    /// the config pins a seed.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::new_with_seed(config, seed)
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: SessionConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Position {
            x: i32::from(config.grid.width / 2),
            y: i32::from(config.grid.height / 2),
        };
        let directions = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        let direction = directions[rng.gen_range(0..directions.len())];
        let snake = Snake::new(start, direction);

        let mut state = Self {
            snake,
            foods: Vec::new(),
            score: 0,
            status: GameStatus::Playing,
            tick_count: 0,
            mode: config.mode,
            tick_delay_ms: config
                .start_delay_ms
                .clamp(MIN_TICK_DELAY_MS, MAX_TICK_DELAY_MS),
            ate_last_tick: false,
            game_over: None,
            bounds: config.grid,
            rng,
        };
        state.respawn_food();
        state
    }

    /// Advances the simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Suspended;
        }

        // A failed placement leaves the board empty; retry before moving so
        // the session can recover once the snake frees up space.
        if self.foods.is_empty() {
            self.respawn_food();
        }

        let next_head = self.snake.next_head_position();
        if !next_head.is_within_bounds(self.bounds)
            || self.snake.hits_body_excluding_tail(next_head)
        {
            return self.end_session(next_head, GameOverReason::Collision);
        }

        let eat = self.mode.evaluate_eat(next_head, &self.foods, self.ate_last_tick);
        if eat.fatal {
            return self.end_session(next_head, GameOverReason::ConsecutiveFood);
        }

        self.tick_count += 1;
        self.snake.advance(eat.ate);

        if eat.ate {
            self.score += 1;
            if let Some(index) = eat.eaten_index {
                self.foods.remove(index);
            }
            if self.foods.is_empty() {
                self.respawn_food();
            }
        }
        self.ate_last_tick = eat.ate;

        TickOutcome::Advanced { ate: eat.ate }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.request_direction(direction),
            GameInput::Pause => self.toggle_pause(),
            GameInput::SpeedDelta(delta_ms) => self.request_speed_change(delta_ms),
            GameInput::SelectMode(_) | GameInput::Confirm | GameInput::Quit => {}
        }
    }

    /// Buffers a direction change for the next tick. Ignored outside play.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing {
            self.snake.buffer_direction(direction);
        }
    }

    /// Adjusts the tick delay, clamping silently into the allowed range.
    pub fn request_speed_change(&mut self, delta_ms: i64) {
        self.tick_delay_ms = self
            .tick_delay_ms
            .saturating_add_signed(delta_ms)
            .clamp(MIN_TICK_DELAY_MS, MAX_TICK_DELAY_MS);
    }

    /// Suspends or resumes ticking. A finished session stays finished.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::GameOver => GameStatus::GameOver,
        };
    }

    /// Returns the terminal report once the session has ended.
    #[must_use]
    pub fn game_over(&self) -> Option<&GameOverReport> {
        self.game_over.as_ref()
    }

    /// Returns the grid bounds of this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the active game mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current tick delay in milliseconds.
    #[must_use]
    pub fn tick_delay_ms(&self) -> u64 {
        self.tick_delay_ms
    }

    /// Returns the current tick delay as a duration for schedulers.
    #[must_use]
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }

    /// Returns true while the session sits untouched on the start screen.
    #[must_use]
    pub fn is_start_screen(&self) -> bool {
        self.status == GameStatus::Paused && self.tick_count == 0 && self.score == 0
    }

    fn end_session(&mut self, head: Position, reason: GameOverReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        let report = GameOverReport {
            final_score: self.score,
            head,
            reason,
        };
        self.game_over = Some(report);
        TickOutcome::Ended(report)
    }

    fn respawn_food(&mut self) {
        let spawned = if self.mode.uses_tetromino_food() {
            tetromino::place(&mut self.rng, self.bounds, &self.snake)
        } else {
            food::spawn_single(&mut self.rng, self.bounds, &self.snake).map(|food| vec![food])
        };

        if let Some(foods) = spawned {
            self.foods = foods;
        }
    }
}
