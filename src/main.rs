use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use retro_snake::audio::{AudioSink, Cue, Silent, TerminalBell};
use retro_snake::config::{ConfigFile, FRAME_INTERVAL, GameConfig};
use retro_snake::error::AppError;
use retro_snake::game::{Game, GameEvent};
use retro_snake::input::{GameInput, InputHandler};
use retro_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use retro_snake::ticker::Ticker;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with `grid_size`, `cell_width`, `margin` and `tick_interval_ms`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells along each side of the grid.
    #[arg(long)]
    grid_size: Option<u16>,

    /// Milliseconds between game ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Terminal columns per grid cell.
    #[arg(long)]
    cell_width: Option<u16>,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the terminal bell.
    #[arg(long)]
    mute: bool,

    /// Write logs to this file (filtered by `RUST_LOG`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }
    info!(?config, seed = ?cli.seed, "starting");

    let game = match cli.seed {
        Some(seed) => Game::new_with_seed(config, seed),
        None => Game::new(config),
    };
    let mut audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(Silent)
    } else {
        Box::new(TerminalBell::new())
    };

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(&mut session, game, audio.as_mut())?;
    session.leave()?;

    info!("shutting down");
    Ok(())
}

fn build_config(cli: &Cli) -> Result<GameConfig, AppError> {
    let mut config = GameConfig::default();
    if let Some(path) = cli.config.as_deref() {
        config = config.with_file(&ConfigFile::load(path)?);
    }

    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(ms) = cli.tick_ms {
        config.tick_interval = Duration::from_millis(ms);
    }
    if let Some(cell_width) = cli.cell_width {
        config.cell_width = cell_width;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .init();
    Ok(())
}

fn run(
    session: &mut TerminalSession,
    mut game: Game,
    audio: &mut dyn AudioSink,
) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let mut ticker = Ticker::new(game.config().tick_interval, Instant::now());

    loop {
        while let Some(game_input) = input.poll_input()? {
            match game_input {
                GameInput::Quit => return Ok(()),
                GameInput::Direction(direction) => {
                    if game.steer(direction) {
                        debug!(?direction, "direction accepted");
                    }
                }
            }
        }

        if ticker.try_consume_tick(Instant::now()) {
            if let Some(event) = game.tick() {
                handle_event(event, audio);
            }
        }

        if game.resolve_win() {
            info!(score = game.state.score, "you win");
        }

        session.draw(&game)?;
        thread::sleep(FRAME_INTERVAL);
    }
}

fn handle_event(event: GameEvent, audio: &mut dyn AudioSink) {
    debug!(?event, "tick event");
    if let Some(cue) = Cue::for_event(event) {
        audio.play(cue);
    }
}
