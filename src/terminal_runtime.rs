use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::Game;
use crate::renderer;

type GameTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// The terminal, borrowed from the user for one game run.
///
/// `leave` hands it back and reports failures; dropping an active session
/// restores it silently, so early returns and `?` still clean up.
pub struct TerminalSession {
    terminal: GameTerminal,
    active: bool,
}

impl TerminalSession {
    /// Switches to raw mode on the alternate screen with the cursor hidden.
    ///
    /// A failure part way through rolls back whatever was already switched on.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let terminal = execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

        match terminal {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }

    /// Draws one frame of `game`.
    pub fn draw(&mut self, game: &Game) -> io::Result<()> {
        self.terminal.draw(|frame| renderer::render(frame, game))?;
        Ok(())
    }

    /// Restores the terminal, surfacing the error `Drop` would swallow.
    pub fn leave(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}

/// Restores the terminal before the default panic report is printed.
pub fn install_panic_hook() {
    let report = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        report(info);
    }));
}

fn restore_terminal() -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    raw_mode
}
