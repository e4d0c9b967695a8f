use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::config::Palette;
use crate::game::GameState;

const TITLE: &str = "Retro Snake";
const STOPPED_HINT: &str = "Game over - press an arrow key to play";

/// Renders the title and score row, plus a hint row while the game is stopped.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, palette: &Palette) {
    let [score_row, hint_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
    let [title_area, score_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(score_row);

    frame.render_widget(
        Paragraph::new(Line::from(TITLE))
            .style(Style::new().fg(palette.hud_fg).add_modifier(Modifier::BOLD)),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(score_text(state.score)))
            .alignment(Alignment::Right)
            .style(Style::new().fg(palette.hud_fg)),
        score_area,
    );

    if !state.running && !state.won {
        frame.render_widget(
            Paragraph::new(Line::from(STOPPED_HINT)).style(Style::new().fg(palette.hud_fg)),
            hint_row,
        );
    }
}

fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::config::PALETTE_RETRO;
    use crate::game::GameState;

    use super::{STOPPED_HINT, render_hud};

    fn hud_text(state: GameState) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(60, 2)).expect("test terminal should build");
        terminal
            .draw(|frame| render_hud(frame, Rect::new(0, 0, 60, 2), &state, &PALETTE_RETRO))
            .expect("drawing should succeed");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn running_game_shows_title_and_score() {
        let text = hud_text(GameState {
            running: true,
            score: 3,
            won: false,
        });

        assert!(text.contains("Retro Snake"));
        assert!(text.contains("Score: 3"));
        assert!(!text.contains(STOPPED_HINT));
    }

    #[test]
    fn stopped_game_shows_restart_hint() {
        let text = hud_text(GameState {
            running: false,
            score: 0,
            won: false,
        });

        assert!(text.contains(STOPPED_HINT));
    }
}
