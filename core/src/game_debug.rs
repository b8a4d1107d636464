use crate::game::Game;
use crate::scheduler::ServePhase;
use crate::state::{Ball, GameState, Paddles, Scores};

impl Game {
    /// Retrieves the full game state, mostly useful for frontends wanting to show more than
    /// the framebuffer (or for an autopilot to cheat with).
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    pub fn paddles(&self) -> &Paddles {
        &self.state.paddles
    }

    pub fn scores(&self) -> &Scores {
        &self.state.scores
    }

    pub fn phase(&self) -> ServePhase {
        self.state.phase
    }
}
