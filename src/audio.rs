use std::io::{self, Write};

use tracing::warn;

use crate::game::GameEvent;

/// Named sound cues the game triggers.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cue {
    Eat,
    Wall,
}

impl Cue {
    /// Returns the cue for a tick event, if that event makes a sound.
    #[must_use]
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::Ate => Some(Self::Eat),
            GameEvent::HitWall => Some(Self::Wall),
            GameEvent::HitSelf | GameEvent::Won => None,
        }
    }
}

/// Plays sound cues. Playback failures stay inside the sink.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell for every cue.
#[derive(Debug)]
pub struct TerminalBell {
    out: io::Stdout,
}

impl TerminalBell {
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: Cue) {
        let result = self
            .out
            .write_all(b"\x07")
            .and_then(|()| self.out.flush());
        if let Err(error) = result {
            warn!(?cue, %error, "terminal bell failed");
        }
    }
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}
