use log::*;

use crate::display::compositor::*;
use crate::display::digits::write_scores;
use crate::display::{DisplayTransport, Framebuffer};
use crate::physics::StepResult;
use crate::scheduler::ServePhase;
use crate::state::{GameState, Paddles, Player};
use crate::{physics, GameOptions, ScoreResetPolicy};

#[cfg(test)]
mod tests;

/// Everything the outside world provides for a single tick.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TickInput {
    /// Positions of the left and right paddle, see [`crate::paddle_from_adc`].
    pub paddles: [u8; 2],
    /// Whether the serve/reset button was pressed since the previous tick.
    pub serve_requested: bool,
}

impl TickInput {
    pub fn new(left: u8, right: u8) -> Self {
        TickInput {
            paddles: [left, right],
            serve_requested: false,
        }
    }

    pub fn with_serve(mut self) -> Self {
        self.serve_requested = true;
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is pausing after a point, the display should keep showing its previous image.
    NoFrame { idle_remaining: u32 },
    /// A new frame has been composed.
    Frame {
        /// Whether this frame started a new rally.
        served: bool,
        /// Set if someone scored during this tick.
        point: Option<Player>,
    },
}

impl TickOutcome {
    pub fn has_frame(&self) -> bool {
        matches!(self, TickOutcome::Frame { .. })
    }
}

pub struct Game {
    pub(crate) state: GameState,
    pub(crate) frame: Framebuffer,
    options: GameOptions,
}

impl Game {
    pub fn new(options: GameOptions) -> Self {
        Game {
            state: GameState::new(),
            frame: Framebuffer::background(),
            options,
        }
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn frame_buffer(&self) -> &Framebuffer {
        &self.frame
    }

    /// Run a single tick and, if that produced a frame, hand it to `transport`.
    pub fn refresh_screen<T: DisplayTransport>(
        &mut self,
        input: TickInput,
        mut transport: T,
    ) -> Result<TickOutcome, T::Error> {
        let outcome = self.tick(input);

        if outcome.has_frame() {
            transport.put_picture(&self.frame)?;
        }

        Ok(outcome)
    }

    /// Advance the game by one timer tick.
    ///
    /// During the pause after a point this only counts down, leaving the frame untouched.
    /// Otherwise the previous ball and paddles are erased (or the whole field is reset for a
    /// new serve), the physics are stepped, and paddles, scores and ball are drawn again.
    pub fn tick(&mut self, input: TickInput) -> TickOutcome {
        let served = match self.state.phase {
            ServePhase::Idle(_) => {
                let (phase, idle_remaining) = self.state.phase.count_down();
                self.state.phase = phase;
                return TickOutcome::NoFrame { idle_remaining };
            }
            ServePhase::AwaitingServe => {
                self.serve_new_ball(input.serve_requested);
                true
            }
            ServePhase::InPlay => {
                erase_ball(&mut self.frame, &self.state.ball);
                erase_paddles(&mut self.frame, &self.state.paddles);
                redraw_center_line(&mut self.frame);
                false
            }
        };

        self.state.paddles = Paddles::new(input.paddles[0], input.paddles[1]);

        let point = match physics::next_state(&mut self.state, self.options.idle_wait) {
            StepResult::Scored(player) => Some(player),
            _ => None,
        };

        draw_paddles(&mut self.frame, &self.state.paddles);
        write_scores(&mut self.frame, &self.state.scores);
        draw_ball(&mut self.frame, &self.state.ball);

        TickOutcome::Frame { served, point }
    }

    fn serve_new_ball(&mut self, serve_requested: bool) {
        self.frame.reset();

        if serve_requested && self.options.score_reset == ScoreResetPolicy::OnServeRequest {
            debug!("Serve requested, resetting scores");
            self.state.scores.reset();
        }

        let rnd = self.state.rng.next();
        self.state.ball = physics::serve(rnd);
        self.state.phase = ServePhase::InPlay;

        debug!("Serving new ball: {:?}", self.state.ball);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameOptions::default())
    }
}
