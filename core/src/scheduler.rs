/// Which of the three kinds of tick the next call to `Game::tick` will perform.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ServePhase {
    /// Pause after a point, holds the amount of ticks left before the next serve.
    /// No frame is produced while idling.
    Idle(u32),
    /// The next tick resets the playfield and puts a fresh ball in play.
    AwaitingServe,
    /// The ball is moving.
    InPlay,
}

impl ServePhase {
    /// The phase to enter once a point has been scored.
    pub fn after_point(idle_wait: u32) -> Self {
        if idle_wait == 0 {
            ServePhase::AwaitingServe
        } else {
            ServePhase::Idle(idle_wait)
        }
    }

    /// Count down one idle tick.
    ///
    /// # Returns
    ///
    /// The new phase along with the amount of idle ticks still remaining.
    /// Calling this on any phase other than `Idle` is a no-op.
    pub fn count_down(self) -> (ServePhase, u32) {
        match self {
            ServePhase::Idle(remaining) => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    (ServePhase::AwaitingServe, 0)
                } else {
                    (ServePhase::Idle(remaining), remaining)
                }
            }
            other => (other, 0),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ServePhase::Idle(_))
    }

    /// Whether a point has been scored and the ball is waiting to be re-served.
    pub fn serve_pending(&self) -> bool {
        !matches!(self, ServePhase::InPlay)
    }
}
