use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use trisnake::config::{DEFAULT_GRID_SIDE, DEFAULT_TICK_DELAY_MS, GridSize, SessionConfig};
use trisnake::game::{GameState, GameStatus, TickOutcome};
use trisnake::input::{GameInput, InputHandler};
use trisnake::mode::GameMode;
use trisnake::platform::Platform;
use trisnake::renderer;
use trisnake::score::{HighScores, load_high_scores, save_high_scores};
use trisnake::ui::hud::HudInfo;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Classic,
    Tetra,
    Bounce,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => Self::Classic,
            ModeArg::Tetra => Self::Tetra,
            ModeArg::Bounce => Self::Bounce,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Game mode preselected on the start screen.
    #[arg(long, value_enum, default_value_t = ModeArg::Classic)]
    mode: ModeArg,

    /// Side length of the square play field, in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_SIDE)]
    grid_size: u16,

    /// Initial tick delay in milliseconds (clamped to 80..=500).
    #[arg(long, default_value_t = DEFAULT_TICK_DELAY_MS)]
    delay: u64,

    /// Fixed RNG seed for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn session_config(&self, mode: GameMode) -> SessionConfig {
        SessionConfig {
            mode,
            grid: GridSize::square(self.grid_size),
            start_delay_ms: self.delay,
            seed: self.seed,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let platform = Platform::detect();

    let high_scores = match load_high_scores() {
        Ok(scores) => scores,
        Err(error) => {
            eprintln!("Warning: ignoring unreadable score file: {error}");
            HighScores::default()
        }
    };

    install_panic_hook();

    run(&cli, platform, high_scores)?;
    cleanup_terminal()?;
    Ok(())
}

fn run(cli: &Cli, platform: Platform, mut high_scores: HighScores) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut input = InputHandler::new();

    let mut state = new_session(cli, cli.mode.into());
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            renderer::render(
                frame,
                &state,
                platform,
                HudInfo {
                    high_scores,
                },
            )
        })?;

        if let Some(game_input) = input.poll_input()? {
            match game_input {
                GameInput::Quit => break,
                GameInput::SelectMode(mode) if state.is_start_screen() => {
                    state = new_session(cli, mode);
                }
                GameInput::Confirm if state.is_start_screen() => {
                    state.status = GameStatus::Playing;
                    last_tick = Instant::now();
                }
                GameInput::Confirm if state.status == GameStatus::GameOver => {
                    state = new_session(cli, state.mode());
                }
                GameInput::Pause => {
                    state.toggle_pause();
                    if state.status == GameStatus::Playing {
                        // Resume restarts the interval from zero elapsed.
                        last_tick = Instant::now();
                    }
                }
                other => state.apply_input(other),
            }
        }

        if state.status == GameStatus::Playing && last_tick.elapsed() >= state.tick_delay() {
            if let TickOutcome::Ended(report) = state.tick() {
                if high_scores.record(state.mode(), report.final_score) {
                    if let Err(error) = save_high_scores(&high_scores) {
                        eprintln!("Failed to save high scores: {error}");
                    }
                }
            }
            last_tick = Instant::now();
        }

        thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}

/// Builds a fresh session parked on the start screen.
fn new_session(cli: &Cli, mode: GameMode) -> GameState {
    let mut state = GameState::new(cli.session_config(mode));
    state.status = GameStatus::Paused;
    state
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
