use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthStr;

use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, GridSize, Theme,
    theme_for_mode,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::platform::Platform;
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from immutable state.
///
/// Each logical grid cell spans two terminal columns so double-width food
/// glyphs line up with the block-pair snake segments.
pub fn render(frame: &mut Frame<'_>, state: &GameState, platform: Platform, hud_info: HudInfo) {
    let theme = theme_for_mode(state.mode());
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme, &hud_info);

    let board = board_rect(play_area, state.bounds());
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state, platform);
    render_snake(frame, inner, state, theme);

    if state.is_start_screen() {
        render_start_menu(
            frame,
            play_area,
            state.mode(),
            &hud_info.high_scores,
            theme,
        );
        return;
    }

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => {
            if let Some(report) = state.game_over() {
                render_game_over_menu(
                    frame,
                    play_area,
                    report,
                    hud_info.high_scores.for_mode(state.mode()),
                    theme,
                );
            }
        }
        GameStatus::Playing => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, platform: Platform) {
    let buffer = frame.buffer_mut();

    for food in &state.foods {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), food.position) else {
            continue;
        };

        let glyph = if platform.supports_emoji_glyphs() {
            food.kind.glyph()
        } else {
            food.kind.ascii_glyph()
        };
        paint_cell(buffer, x, y, glyph, Style::new());
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let tail = state.snake.segments().last().copied();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            paint_cell(
                buffer,
                x,
                y,
                head_glyph(state.snake.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if Some(*segment) == tail {
            paint_cell(buffer, x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        paint_cell(buffer, x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Writes one logical cell, padding single-width glyphs to the full
/// two-column cell so stale characters never linger behind narrow glyphs.
fn paint_cell(
    buffer: &mut ratatui::buffer::Buffer,
    x: u16,
    y: u16,
    glyph: &str,
    style: Style,
) {
    buffer.set_string(x, y, glyph, style);
    if UnicodeWidthStr::width(glyph) < 2 {
        buffer.set_string(x.saturating_add(1), y, " ", style);
    }
}

/// Centers the bordered board inside the available play area.
fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds
        .width
        .saturating_mul(2)
        .saturating_add(2)
        .min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(2)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(1) >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
