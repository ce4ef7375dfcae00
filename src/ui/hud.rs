use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;
use crate::score::HighScores;

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub high_scores: HighScores,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    theme: &Theme,
    info: &HudInfo,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                state.mode().label(),
                Style::new()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Score: {}", state.score),
                Style::new().fg(theme.hud_score),
            ),
        ]))
        .alignment(Alignment::Left),
        hud_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Hi: {}", info.high_scores.for_mode(state.mode())),
                Style::new().fg(theme.hud_score),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Delay (+ -): {}ms", state.tick_delay_ms()),
                Style::new().fg(theme.menu_footer),
            ),
        ]))
        .alignment(Alignment::Right),
        hud_area,
    );

    play_area
}
