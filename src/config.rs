use nanoserde::{DeJson, SerJson};
use oledpong_core::{GameOptions, GameOptionsBuilder, ScoreResetPolicy, IDLE_WAIT};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "config.json";
/// The hardware timer fired every 1024 cycles of a 32768 Hz crystal.
pub const DEFAULT_TICK_RATE: u32 = 32;

#[derive(Debug, Copy, Clone, PartialEq, SerJson, DeJson)]
/// Struct for persistent options.
pub struct AppConfig {
    /// How many times per second the game advances.
    pub tick_rate_hz: u32,
    /// Ticks without a new frame after a point was scored.
    pub idle_wait: u32,
    /// Whether pressing serve while a ball is about to be served clears the scoreboard.
    pub reset_scores_on_serve: bool,
    /// How far a single key press turns the simulated potentiometer.
    pub keyboard_step: u16,
}

impl AppConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000u64 / self.tick_rate_hz.max(1) as u64)
    }

    /// A copy with command line overrides applied, meant for a single run and never to be saved.
    pub fn with_overrides(self, tick_rate: Option<u32>, reset_scores: bool) -> AppConfig {
        AppConfig {
            tick_rate_hz: tick_rate.unwrap_or(self.tick_rate_hz),
            reset_scores_on_serve: self.reset_scores_on_serve || reset_scores,
            ..self
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            tick_rate_hz: DEFAULT_TICK_RATE,
            idle_wait: IDLE_WAIT,
            reset_scores_on_serve: false,
            keyboard_step: 256,
        }
    }
}

impl From<AppConfig> for GameOptions {
    fn from(config: AppConfig) -> Self {
        let score_reset = if config.reset_scores_on_serve {
            ScoreResetPolicy::OnServeRequest
        } else {
            ScoreResetPolicy::Keep
        };

        GameOptionsBuilder::new()
            .idle_wait(config.idle_wait)
            .with_score_reset(score_reset)
            .build()
    }
}
