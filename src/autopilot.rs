use oledpong_core::display::{HALF_PADDLE, HEIGHT};
use oledpong_core::io::paddle_input::{adc_for_paddle, paddle_from_adc, ADC_RESET_VALUE};
use oledpong_core::state::Ball;
use oledpong_core::Player;

/// Highest paddle position reachable through the potentiometer.
const MAX_REACHABLE: i32 = 31;

/// Pretends to be a player turning a potentiometer, following the ball with a limited speed.
///
/// Entirely deterministic, so two runs with the same autopilots play out identically.
#[derive(Debug, Clone)]
pub struct Autopilot {
    player: Player,
    position: u8,
    max_step: u8,
}

impl Autopilot {
    pub fn new(player: Player, max_step: u8) -> Self {
        Autopilot {
            player,
            position: paddle_from_adc(ADC_RESET_VALUE),
            max_step: max_step.max(1),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    /// Move the paddle towards where it wants to be and return the matching analog sample.
    ///
    /// While the ball is heading away the paddle drifts back to the middle.
    pub fn sample(&mut self, ball: &Ball) -> u16 {
        let incoming = match self.player {
            Player::Left => ball.dx < 0,
            Player::Right => ball.dx > 0,
        };
        let target_center = if incoming { ball.y } else { (HEIGHT / 2) as i32 };
        let target = (target_center - HALF_PADDLE as i32).max(0).min(MAX_REACHABLE);

        let current = self.position as i32;
        let step = (target - current).max(-(self.max_step as i32)).min(self.max_step as i32);
        self.position = (current + step) as u8;

        adc_for_paddle(self.position)
    }
}
