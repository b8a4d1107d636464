use log::*;

use crate::display::{HALF_BALL, HALF_PADDLE, HEIGHT, WIDTH};
use crate::scheduler::ServePhase;
use crate::state::{Ball, GameState, Player};

#[cfg(test)]
mod tests;

/// Largest vertical distance the ball can cover in one tick.
pub const MAX_Y_STEP: i32 = 3;
/// Horizontal distance the ball covers every tick, this never changes during a rally.
pub const X_STEP: i32 = 4;

/// Topmost row the center of the ball can be on without leaving the screen.
pub const MIN_BALL_Y: i32 = HALF_BALL as i32;
/// Bottommost row the center of the ball can be on without leaving the screen.
pub const MAX_BALL_Y: i32 = (HEIGHT - 1 - HALF_BALL) as i32;

/// Once the ball would reach this column it's up to the right paddle to return it.
pub const RIGHT_BOUNDARY: i32 = (WIDTH - HALF_BALL - 2) as i32;
/// Once the ball would go below this column it's up to the left paddle to return it.
pub const LEFT_BOUNDARY: i32 = (HALF_BALL + 2) as i32;
/// A (biased) paddle distance beyond this means the paddle missed.
pub const MISS_DISTANCE: i32 = (HALF_PADDLE + HALF_BALL + 1) as i32;

/// What happened to the ball during a single physics step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepResult {
    Moved,
    /// The given player's paddle sent the ball back.
    Returned(Player),
    /// The given player got a point.
    Scored(Player),
}

/// Place a new ball in the middle of the field based on the random value `rnd`.
///
/// The vertical position avoids the walls, the horizontal direction is taken from bit 6 and the
/// vertical speed from the bits above it.
pub fn serve(rnd: u32) -> Ball {
    let span = (HEIGHT - 2 * HALF_BALL) as u32;
    let y = ((rnd | 0x3F) % span) as i32 + MIN_BALL_Y;
    let dx = if rnd & 0x40 != 0 { X_STEP } else { -X_STEP };
    let dy = ((rnd >> 7) % MAX_Y_STEP as u32) as i32 + 1;

    Ball {
        x: (WIDTH / 2) as i32,
        y,
        dx,
        dy,
    }
}

/// Advance the ball by one tick, handling paddle contact, scoring and wall bounces.
///
/// When a point is scored the score is awarded and the serve phase moves to
/// [`ServePhase::after_point`] with `idle_wait`.
pub fn next_state(state: &mut GameState, idle_wait: u32) -> StepResult {
    let result = advance_x(state, idle_wait);
    advance_y(&mut state.ball);
    result
}

fn advance_x(state: &mut GameState, idle_wait: u32) -> StepResult {
    let ball = &mut state.ball;
    let next_x = ball.x + ball.dx;

    let defender = if next_x >= RIGHT_BOUNDARY {
        Player::Right
    } else if next_x < LEFT_BOUNDARY {
        Player::Left
    } else {
        ball.x = next_x;
        return StepResult::Moved;
    };

    let dist = paddle_distance(state.paddles.get(defender), ball.y);

    if dist.abs() > MISS_DISTANCE {
        let scorer = defender.opponent();
        state.scores.award(scorer);
        state.phase = ServePhase::after_point(idle_wait);
        debug!(
            "{:?} missed the ball by {}, score is now {}-{}",
            defender, dist, state.scores.left, state.scores.right
        );
        StepResult::Scored(scorer)
    } else {
        ball.dx = -ball.dx;
        ball.dy = return_angle(dist);
        trace!("{:?} returned the ball at distance {}, new dy {}", defender, dist, ball.dy);
        StepResult::Returned(defender)
    }
}

/// Signed distance between the center of a paddle, whose top edge is at `paddle`, and the ball.
///
/// Zero and negative distances are pushed one further away, so that a ball exactly level
/// with the paddle center still gets a vertical component.
#[inline]
pub fn paddle_distance(paddle: u8, ball_y: i32) -> i32 {
    let dist = paddle as i32 + HALF_PADDLE as i32 - ball_y;
    if dist > 0 {
        dist
    } else {
        dist - 1
    }
}

/// The further from the paddle center the ball hits, the steeper it's returned.
#[inline]
fn return_angle(dist: i32) -> i32 {
    (-dist).max(-MAX_Y_STEP).min(MAX_Y_STEP)
}

/// Move the ball vertically, mirroring it off the top and bottom walls.
///
/// The overshoot past a wall is reflected back, so the ball covers the full `dy` either way.
/// Reflection happens about the extreme ball centers [`MIN_BALL_Y`] and [`MAX_BALL_Y`] rather
/// than the screen's first and last rows. Mirroring about the screen edges would leave a center
/// on row 0 or 39 and draw half the ball outside the framebuffer, at the cost of every bounce
/// landing two rows further from the wall (`y = 37, dy = 3` ends on 36 instead of 38).
pub fn advance_y(ball: &mut Ball) {
    let next_y = ball.y + ball.dy;

    if next_y > MAX_BALL_Y {
        ball.y = 2 * MAX_BALL_Y - next_y;
        ball.dy = -ball.dy;
    } else if next_y < MIN_BALL_Y {
        ball.y = 2 * MIN_BALL_Y - next_y;
        ball.dy = -ball.dy;
    } else {
        ball.y = next_y;
    }
}
