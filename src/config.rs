use std::fs;
use std::path::Path;
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;

/// Default number of cells along each side of the grid.
pub const DEFAULT_GRID_SIZE: u16 = 25;

/// Default terminal columns drawn per grid cell.
pub const DEFAULT_CELL_WIDTH: u16 = 2;

/// Default offset of the play field from the terminal origin, in cells.
pub const DEFAULT_MARGIN: u16 = 1;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Smallest grid that still holds the spawn body (its head sits on row 9).
pub const MIN_GRID_SIZE: u16 = 10;

pub const MAX_GRID_SIZE: u16 = 100;

/// Render loop sleep between frames (about 60 frames per second).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub const GLYPH_SNAKE_SEGMENT: &str = "█";
pub const GLYPH_FOOD: &str = "●";

/// Immutable game settings, built once at startup and passed by reference.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    /// Cells along each side of the square grid.
    pub grid_size: u16,
    /// Terminal columns per grid cell.
    pub cell_width: u16,
    /// Offset of the play field from the terminal origin, in cells.
    pub margin: u16,
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_width: DEFAULT_CELL_WIDTH,
            margin: DEFAULT_MARGIN,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

/// Optional overrides read from a JSON config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub grid_size: Option<u16>,
    pub cell_width: Option<u16>,
    pub margin: Option<u16>,
    pub tick_interval_ms: Option<u64>,
}

impl ConfigFile {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl GameConfig {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        usize::from(self.grid_size) * usize::from(self.grid_size)
    }

    /// Returns a copy with every field set in `file` applied.
    #[must_use]
    pub fn with_file(mut self, file: &ConfigFile) -> Self {
        if let Some(grid_size) = file.grid_size {
            self.grid_size = grid_size;
        }
        if let Some(cell_width) = file.cell_width {
            self.cell_width = cell_width;
        }
        if let Some(margin) = file.margin {
            self.margin = margin;
        }
        if let Some(ms) = file.tick_interval_ms {
            self.tick_interval = Duration::from_millis(ms);
        }
        self
    }

    /// Checks the settings the game core relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }
        if self.cell_width == 0 {
            return Err(ConfigError::ZeroCellWidth);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Palette {
    pub field_bg: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub banner_fg: Color,
}

/// Pale green field with a dark green snake.
pub const PALETTE_RETRO: Palette = Palette {
    field_bg: Color::Rgb(173, 204, 96),
    snake_head: Color::Rgb(20, 26, 10),
    snake_body: Color::Rgb(43, 51, 24),
    food: Color::Rgb(190, 40, 30),
    border_fg: Color::Rgb(43, 51, 24),
    hud_fg: Color::Rgb(173, 204, 96),
    banner_fg: Color::Rgb(173, 204, 96),
};
