pub mod display;
pub mod game;
mod game_debug;
pub mod io;
pub mod physics;
pub mod scheduler;
pub mod state;

pub use crate::game::{Game, TickInput, TickOutcome};
pub use crate::io::paddle_input::paddle_from_adc;
pub use crate::state::Player;

/// How many ticks no frame is produced after a point was scored.
pub const IDLE_WAIT: u32 = 10;

/// Decides what happens to the scoreboard when a serve is explicitly requested.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScoreResetPolicy {
    /// Scores are only ever incremented, a serve request changes nothing.
    Keep,
    /// A serve request arriving on the tick that places a new ball zeroes both scores.
    OnServeRequest,
}

impl Default for ScoreResetPolicy {
    fn default() -> Self {
        ScoreResetPolicy::Keep
    }
}

/// Struct for wrapping all the various options for the `Game`
#[derive(Debug, Copy, Clone)]
pub struct GameOptions {
    pub idle_wait: u32,
    pub score_reset: ScoreResetPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptionsBuilder::new().build()
    }
}

#[derive(Debug)]
pub struct GameOptionsBuilder {
    idle_wait: u32,
    score_reset: ScoreResetPolicy,
}

impl GameOptionsBuilder {
    pub fn new() -> Self {
        GameOptionsBuilder {
            idle_wait: IDLE_WAIT,
            score_reset: ScoreResetPolicy::default(),
        }
    }

    pub fn idle_wait(mut self, ticks: u32) -> Self {
        self.idle_wait = ticks;
        self
    }

    pub fn with_score_reset(mut self, policy: ScoreResetPolicy) -> Self {
        self.score_reset = policy;
        self
    }

    pub fn build(self) -> GameOptions {
        GameOptions {
            idle_wait: self.idle_wait,
            score_reset: self.score_reset,
        }
    }
}

impl From<GameOptions> for GameOptionsBuilder {
    fn from(from: GameOptions) -> Self {
        GameOptionsBuilder {
            idle_wait: from.idle_wait,
            score_reset: from.score_reset,
        }
    }
}
