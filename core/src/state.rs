use log::*;

use crate::display::{HEIGHT, WIDTH};
use crate::io::paddle_input::{paddle_from_adc, ADC_RESET_VALUE, MAX_PADDLE_POSITION};
use crate::io::random::Lcg;
use crate::scheduler::ServePhase;

/// Highest score the two digit scoreboard can show.
pub const MAX_SCORE: u32 = 99;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Player {
    Left,
    Right,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Left => Player::Right,
            Player::Right => Player::Left,
        }
    }
}

/// Center position and per tick velocity of the ball, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl Default for Ball {
    fn default() -> Self {
        Ball {
            x: (WIDTH / 2) as i32,
            y: (HEIGHT / 2) as i32,
            dx: 0,
            dy: 0,
        }
    }
}

/// Vertical positions of both paddles, each being the row of the paddle's top edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Paddles {
    pub left: u8,
    pub right: u8,
}

impl Paddles {
    /// Construct from raw input positions, anything which would put a paddle partially
    /// off screen is clamped.
    pub fn new(left: u8, right: u8) -> Self {
        Paddles {
            left: clamp_paddle(left),
            right: clamp_paddle(right),
        }
    }

    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::Left => self.left,
            Player::Right => self.right,
        }
    }
}

impl Default for Paddles {
    fn default() -> Self {
        let middle = paddle_from_adc(ADC_RESET_VALUE);
        Paddles::new(middle, middle)
    }
}

fn clamp_paddle(position: u8) -> u8 {
    if position > MAX_PADDLE_POSITION {
        warn!("Paddle position {} is off screen, clamping to {}", position, MAX_PADDLE_POSITION);
        MAX_PADDLE_POSITION
    } else {
        position
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

impl Scores {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Left => self.left,
            Player::Right => self.right,
        }
    }

    /// Give `player` a point.
    ///
    /// The scoreboard only has room for two digits, so the score saturates at [`MAX_SCORE`].
    pub fn award(&mut self, player: Player) {
        let score = match player {
            Player::Left => &mut self.left,
            Player::Right => &mut self.right,
        };

        if *score >= MAX_SCORE {
            warn!("{:?} scored while already at {}, score stays put", player, MAX_SCORE);
        } else {
            *score += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Scores::default();
    }
}

/// Everything that changes while a game is running, apart from the frame itself.
#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    pub paddles: Paddles,
    pub scores: Scores,
    pub phase: ServePhase,
    pub rng: Lcg,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            ball: Ball::default(),
            paddles: Paddles::default(),
            scores: Scores::default(),
            phase: ServePhase::AwaitingServe,
            rng: Lcg::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
