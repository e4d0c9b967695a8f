use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::Palette;

const WIN_TITLE: &str = "YOU WIN";
const WIN_FOOTER: &str = "Steer to play again";

/// Draws the win banner centered over the play field.
pub fn render_win_banner(frame: &mut Frame<'_>, field: Rect, score: u32, palette: &Palette) {
    let score_line = format!("Score: {score}");
    let lines = vec![
        Line::from(WIN_TITLE).style(
            Style::new()
                .fg(palette.banner_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(score_line.clone()),
        Line::from(WIN_FOOTER),
    ];

    let text_width = [WIN_TITLE, score_line.as_str(), WIN_FOOTER]
        .iter()
        .map(|text| text.width())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(text_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);

    let popup = centered_rect(field, width, height);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(palette.hud_fg).bg(palette.snake_body))
            .block(Block::bordered()),
        popup,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(mid);

    center
}
