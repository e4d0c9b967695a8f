use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::food::Food;
use crate::grid::{self, Direction};
use crate::snake::Snake;

/// Score and run flags shown to the player.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameState {
    /// False after a game over until the next accepted direction.
    pub running: bool,
    pub score: u32,
    /// True from the tick that fills the grid until the next accepted direction.
    pub won: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            running: true,
            score: 0,
            won: false,
        }
    }
}

/// Notable outcome of a single tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    Ate,
    HitWall,
    HitSelf,
    Won,
}

/// Game orchestrator: owns the snake and food and applies the tick rules.
#[derive(Debug, Clone)]
pub struct Game {
    pub snake: Snake,
    pub food: Food,
    pub state: GameState,
    config: GameConfig,
    rng: StdRng,
    win_resolved: bool,
}

impl Game {
    /// Creates a game seeded from system entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::spawn(&mut rng, config.grid_size, snake.body());

        Self {
            snake,
            food,
            state: GameState::default(),
            config,
            rng,
            win_resolved: false,
        }
    }

    /// Advances the simulation by one tick and reports what happened.
    pub fn tick(&mut self) -> Option<GameEvent> {
        if !self.state.running {
            return None;
        }

        self.snake.advance();

        if self.snake.len() == self.config.total_cells() {
            self.state.won = true;
            info!(score = self.state.score, "grid filled");
            return Some(GameEvent::Won);
        }

        let head = self.snake.head();
        let mut event = None;

        if head == self.food.position {
            self.food
                .place_randomly(&mut self.rng, self.config.grid_size, self.snake.body());
            self.snake.mark_growth();
            self.state.score += 1;
            debug!(score = self.state.score, food = ?self.food.position, "food eaten");
            event = Some(GameEvent::Ate);
        }

        if grid::hits_edge(head, self.config.grid_size) {
            info!(?head, score = self.state.score, "wall collision");
            self.game_over();
            return Some(GameEvent::HitWall);
        }

        if self.snake.head_overlaps_body() {
            info!(?head, score = self.state.score, "self collision");
            self.game_over();
            return Some(GameEvent::HitSelf);
        }

        event
    }

    /// Applies a steering input. Returns whether the direction was accepted.
    ///
    /// An accepted direction resumes a stopped game; after a win it also
    /// clears the win and the preserved score.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !self.snake.set_direction(direction) {
            return false;
        }

        if self.state.won {
            self.game_set();
        }
        self.state.running = true;
        true
    }

    /// Settles a freshly detected win: the board resets like a game over
    /// but the final score stays on display.
    ///
    /// Runs once per win; returns true only on that call.
    pub fn resolve_win(&mut self) -> bool {
        if !self.state.won || self.win_resolved {
            return false;
        }

        let score = self.state.score;
        self.game_over();
        self.state.score = score;
        self.win_resolved = true;
        true
    }

    /// Resets the board and stops the game until the next accepted direction.
    pub fn game_over(&mut self) {
        self.snake.reset();
        self.food
            .place_randomly(&mut self.rng, self.config.grid_size, self.snake.body());
        self.state.running = false;
        self.state.score = 0;
    }

    fn game_set(&mut self) {
        info!(score = self.state.score, "new round after win");
        self.state.won = false;
        self.state.score = 0;
        self.win_resolved = false;
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
