use retro_snake::config::GameConfig;
use retro_snake::food::Food;
use retro_snake::game::{Game, GameEvent};
use retro_snake::grid::{Cell, Direction};
use retro_snake::snake::{INITIAL_BODY, Snake};

const GRID: u16 = 10;

/// Boustrophedon walk over the whole grid: even rows left to right, odd rows
/// right to left. Ends at (0, 9).
fn serpentine() -> Vec<Cell> {
    let n = i32::from(GRID);
    let mut path = Vec::new();
    for y in 0..n {
        if y % 2 == 0 {
            path.extend((0..n).map(|x| Cell::new(x, y)));
        } else {
            path.extend((0..n).rev().map(|x| Cell::new(x, y)));
        }
    }
    path
}

/// Game whose snake covers every cell but the last one of the walk, about to
/// grow into it.
fn one_move_from_full() -> Game {
    let mut game = Game::new_with_seed(filled_config(), 3);

    let mut path = serpentine();
    let last = path.pop().expect("grid is not empty");
    path.reverse();
    game.snake = Snake::from_segments(path, Direction::Left);
    game.snake.mark_growth();
    game.food = Food::at(last);
    game.state.score = 96;

    game
}

#[test]
fn filling_the_grid_wins_and_skips_collision_checks() {
    let mut game = one_move_from_full();

    assert_eq!(game.tick(), Some(GameEvent::Won));

    assert!(game.state.won);
    assert!(game.state.running);
    assert_eq!(game.snake.len(), usize::from(GRID) * usize::from(GRID));
    assert_eq!(game.snake.head(), Cell::new(0, 9));
    assert_eq!(game.snake.head(), game.food.position);
    assert_eq!(game.state.score, 96);
    assert!(!game.snake.has_pending_growth());
}

#[test]
fn resolving_a_win_resets_board_but_keeps_score() {
    let mut game = one_move_from_full();
    game.tick();

    assert!(game.resolve_win());

    let body: Vec<Cell> = game.snake.body().iter().copied().collect();
    assert_eq!(body, INITIAL_BODY.to_vec());
    assert!(!game.snake.body().contains(&game.food.position));
    assert!(game.state.won);
    assert!(!game.state.running);
    assert_eq!(game.state.score, 96);

    assert!(!game.resolve_win());
    assert_eq!(game.state.score, 96);
    assert_eq!(game.tick(), None);
}

#[test]
fn next_accepted_direction_after_win_starts_a_fresh_round() {
    let mut game = one_move_from_full();
    game.tick();
    game.resolve_win();

    assert!(!game.steer(Direction::Left));
    assert!(game.state.won);
    assert_eq!(game.state.score, 96);

    assert!(game.steer(Direction::Down));
    assert!(!game.state.won);
    assert!(game.state.running);
    assert_eq!(game.state.score, 0);
}

fn filled_config() -> GameConfig {
    GameConfig {
        grid_size: GRID,
        ..GameConfig::default()
    }
}

#[test]
fn filling_the_grid_through_the_wall_still_wins() {
    let mut game = Game::new_with_seed(filled_config(), 4);

    // Whole walk except its first cell, head at (0, 9) facing the left wall.
    let mut path = serpentine();
    let first = path.remove(0);
    path.reverse();
    game.snake = Snake::from_segments(path, Direction::Left);
    game.snake.mark_growth();
    game.food = Food::at(first);
    game.state.score = 97;

    assert_eq!(game.tick(), Some(GameEvent::Won));

    assert!(game.state.won);
    assert!(game.state.running);
    assert_eq!(game.snake.head(), Cell::new(-1, 9));
    assert_eq!(game.snake.len(), usize::from(GRID) * usize::from(GRID));
    assert_eq!(game.state.score, 97);
}

#[test]
fn filling_the_grid_onto_the_body_still_wins() {
    let mut game = one_move_from_full();

    // (1, 8) is already part of the body.
    assert!(game.steer(Direction::Up));
    assert_eq!(game.tick(), Some(GameEvent::Won));

    assert!(game.state.won);
    assert!(game.state.running);
    assert_eq!(game.snake.head(), Cell::new(1, 8));
    assert!(game.snake.head_overlaps_body());
    assert_eq!(game.snake.len(), usize::from(GRID) * usize::from(GRID));
    assert_eq!(game.state.score, 96);
}
