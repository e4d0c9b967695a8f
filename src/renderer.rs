use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{GLYPH_FOOD, GLYPH_SNAKE_SEGMENT, GameConfig, PALETTE_RETRO, Palette};
use crate::game::Game;
use crate::grid::Cell;
use crate::ui::banner::render_win_banner;
use crate::ui::hud::render_hud;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, game: &Game) {
    let config = game.config();
    let palette = &PALETTE_RETRO;
    let field = play_field_area(frame.area(), config);

    let block = Block::bordered()
        .style(Style::new().bg(palette.field_bg))
        .border_style(Style::new().fg(palette.border_fg));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    render_food(frame, inner, game, palette);
    render_snake(frame, inner, game, palette);

    let hud_area = Rect {
        x: field.x,
        y: field.bottom(),
        width: field.width,
        height: 2,
    }
    .intersection(frame.area());
    render_hud(frame, hud_area, &game.state, palette);

    if game.state.won {
        render_win_banner(frame, field, game.state.score, palette);
    }
}

/// Bordered play field, offset by the margin and clipped to `area`.
#[must_use]
pub fn play_field_area(area: Rect, config: &GameConfig) -> Rect {
    let columns = u32::from(config.grid_size) * u32::from(config.cell_width) + 2;
    let rows = u32::from(config.grid_size) + 2;

    Rect {
        x: area
            .x
            .saturating_add(config.margin.saturating_mul(config.cell_width)),
        y: area.y.saturating_add(config.margin),
        width: u16::try_from(columns).unwrap_or(u16::MAX),
        height: u16::try_from(rows).unwrap_or(u16::MAX),
    }
    .intersection(area)
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, game: &Game, palette: &Palette) {
    let config = game.config();
    let Some((x, y)) = cell_to_terminal(inner, config, game.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(palette.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &Game, palette: &Palette) {
    let config = game.config();
    let segment = GLYPH_SNAKE_SEGMENT.repeat(usize::from(config.cell_width));
    let head = game.snake.head();

    let buffer = frame.buffer_mut();
    for cell in game.snake.body() {
        let Some((x, y)) = cell_to_terminal(inner, config, *cell) else {
            continue;
        };

        let style = if *cell == head {
            Style::new()
                .fg(palette.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(palette.snake_body)
        };
        buffer.set_string(x, y, &segment, style);
    }
}

/// Maps a grid cell to the terminal position of its first column.
fn cell_to_terminal(inner: Rect, config: &GameConfig, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within(config.grid_size) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(config.cell_width)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
