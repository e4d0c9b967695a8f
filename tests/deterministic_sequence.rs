use retro_snake::config::GameConfig;
use retro_snake::food::Food;
use retro_snake::game::{Game, GameEvent};
use retro_snake::grid::{Cell, Direction};
use retro_snake::snake::{INITIAL_BODY, Snake};

fn body(game: &Game) -> Vec<Cell> {
    game.snake.body().iter().copied().collect()
}

#[test]
fn eating_then_growing_from_spawn() {
    let mut game = Game::new_with_seed(GameConfig::default(), 42);
    game.food = Food::at(Cell::new(7, 9));

    assert_eq!(game.tick(), Some(GameEvent::Ate));
    assert_eq!(
        body(&game),
        vec![Cell::new(7, 9), Cell::new(6, 9), Cell::new(5, 9)]
    );
    assert_eq!(game.state.score, 1);
    assert!(game.snake.has_pending_growth());
    assert!(!game.snake.body().contains(&game.food.position));

    game.food = Food::at(Cell::new(20, 20));
    assert_eq!(game.tick(), None);
    assert_eq!(game.snake.len(), 4);
    assert_eq!(game.snake.head(), Cell::new(8, 9));
    assert!(!game.snake.has_pending_growth());
}

#[test]
fn steering_into_the_wall_ends_the_round() {
    let mut game = Game::new_with_seed(GameConfig::default(), 7);
    game.food = Food::at(Cell::new(20, 20));

    assert!(game.steer(Direction::Up));
    for _ in 0..9 {
        assert_eq!(game.tick(), None);
    }
    assert_eq!(game.snake.head(), Cell::new(6, 0));
    assert!(game.state.running);

    assert_eq!(game.tick(), Some(GameEvent::HitWall));
    assert_eq!(body(&game), INITIAL_BODY.to_vec());
    assert!(!game.state.running);
    assert_eq!(game.state.score, 0);

    assert_eq!(game.tick(), None);
    assert_eq!(body(&game), INITIAL_BODY.to_vec());

    assert!(game.steer(Direction::Right));
    assert!(game.state.running);
    game.tick();
    assert_eq!(game.snake.head(), Cell::new(7, 9));
}

#[test]
fn right_edge_triggers_at_grid_size() {
    let mut game = Game::new_with_seed(GameConfig::default(), 9);
    game.snake = Snake::from_segments(
        vec![Cell::new(24, 9), Cell::new(23, 9), Cell::new(22, 9)],
        Direction::Right,
    );
    game.food = Food::at(Cell::new(0, 0));
    game.state.score = 5;

    assert_eq!(game.tick(), Some(GameEvent::HitWall));

    assert_eq!(
        body(&game),
        vec![Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)]
    );
    assert_eq!(game.state.score, 0);
    assert!(!game.state.running);
}

#[test]
fn food_never_lands_on_the_snake_over_many_rounds() {
    let config = GameConfig {
        grid_size: 10,
        ..GameConfig::default()
    };

    for seed in 0..50 {
        let mut game = Game::new_with_seed(config, seed);
        for _ in 0..40 {
            if let Some(GameEvent::Ate) = game.tick() {
                assert!(!game.snake.body().contains(&game.food.position));
            }
            if !game.state.running {
                game.steer(Direction::Down);
            }
            assert!(!game.snake.body().contains(&game.food.position));
        }
    }
}
