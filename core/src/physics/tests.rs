use pretty_assertions::assert_eq;

use crate::io::random::Lcg;
use crate::physics::*;
use crate::scheduler::ServePhase;
use crate::state::{Ball, GameState, Paddles, Player, Scores};
use crate::IDLE_WAIT;

fn in_play(ball: Ball, paddles: Paddles) -> GameState {
    let mut state = GameState::new();
    state.ball = ball;
    state.paddles = paddles;
    state.phase = ServePhase::InPlay;
    state
}

/// A ball one step away from the right paddle, at row 20.
fn approaching_right() -> Ball {
    Ball { x: 92, y: 20, dx: X_STEP, dy: 1 }
}

/// A ball one step away from the left paddle, at row 20.
fn approaching_left() -> Ball {
    Ball { x: 4, y: 20, dx: -X_STEP, dy: 1 }
}

#[test]
fn test_free_movement() {
    let mut state = in_play(Ball { x: 40, y: 20, dx: X_STEP, dy: -2 }, Paddles::default());

    assert_eq!(next_state(&mut state, IDLE_WAIT), StepResult::Moved);
    assert_eq!(state.ball, Ball { x: 44, y: 18, dx: X_STEP, dy: -2 });
    assert_eq!(state.phase, ServePhase::InPlay);
}

#[test]
fn test_top_wall_reflection() {
    for dy in 1..=MAX_Y_STEP {
        for y in MIN_BALL_Y..MIN_BALL_Y + MAX_Y_STEP {
            let mut ball = Ball { x: 40, y, dx: X_STEP, dy: -dy };
            let next_y = y - dy;
            advance_y(&mut ball);

            if next_y < MIN_BALL_Y {
                // Overshoot past the wall equals the distance travelled back from it.
                assert_eq!(MIN_BALL_Y - next_y, ball.y - MIN_BALL_Y, "y {} dy {}", y, dy);
                assert_eq!(ball.dy, dy);
            } else {
                assert_eq!(ball.y, next_y);
                assert_eq!(ball.dy, -dy);
            }
        }
    }
}

#[test]
fn test_bottom_wall_reflection() {
    for dy in 1..=MAX_Y_STEP {
        for y in (MAX_BALL_Y - MAX_Y_STEP + 1)..=MAX_BALL_Y {
            let mut ball = Ball { x: 40, y, dx: X_STEP, dy };
            let next_y = y + dy;
            advance_y(&mut ball);

            if next_y > MAX_BALL_Y {
                assert_eq!(next_y - MAX_BALL_Y, MAX_BALL_Y - ball.y, "y {} dy {}", y, dy);
                assert_eq!(ball.dy, -dy);
            } else {
                assert_eq!(ball.y, next_y);
                assert_eq!(ball.dy, dy);
            }
        }
    }
}

#[test]
fn test_exact_wall_contact() {
    // Landing exactly on the extreme row is not a bounce yet.
    let mut ball = Ball { x: 40, y: MIN_BALL_Y + 3, dx: X_STEP, dy: -3 };
    advance_y(&mut ball);
    assert_eq!((ball.y, ball.dy), (MIN_BALL_Y, -3));

    let mut ball = Ball { x: 40, y: MAX_BALL_Y - 2, dx: X_STEP, dy: 2 };
    advance_y(&mut ball);
    assert_eq!((ball.y, ball.dy), (MAX_BALL_Y, 2));
}

#[test]
fn test_reflection_about_extreme_centers() {
    let mut ball = Ball { x: 40, y: 37, dx: X_STEP, dy: 3 };
    advance_y(&mut ball);
    assert_eq!((ball.y, ball.dy), (36, -3));

    let mut ball = Ball { x: 40, y: 2, dx: X_STEP, dy: -3 };
    advance_y(&mut ball);
    assert_eq!((ball.y, ball.dy), (3, 3));
}

#[test]
fn test_ball_stays_on_screen() {
    for y in MIN_BALL_Y..=MAX_BALL_Y {
        for dy in -MAX_Y_STEP..=MAX_Y_STEP {
            let mut ball = Ball { x: 40, y, dx: X_STEP, dy };
            advance_y(&mut ball);
            assert!(ball.y >= MIN_BALL_Y && ball.y <= MAX_BALL_Y, "y {} dy {}", y, dy);
        }
    }
}

#[test]
fn test_paddle_distance_bias() {
    assert_eq!(paddle_distance(16, 20), 0 - 1);
    assert_eq!(paddle_distance(17, 20), 1);
    assert_eq!(paddle_distance(10, 20), -6 - 1);
    assert_eq!(paddle_distance(22, 20), 6);
}

#[test]
fn test_right_scoring_threshold() {
    // Paddle center 5 rows above the ball, just inside the paddle's reach.
    let mut state = in_play(approaching_right(), Paddles::new(0, 11));
    assert_eq!(next_state(&mut state, IDLE_WAIT), StepResult::Returned(Player::Right));
    assert_eq!(state.scores, Scores::default());
    assert_eq!(state.ball.dx, -X_STEP);

    // One more row and it's a miss.
    let mut state = in_play(approaching_right(), Paddles::new(0, 10));
    assert_eq!(next_state(&mut state, IDLE_WAIT), StepResult::Scored(Player::Left));
    assert_eq!(state.scores, Scores { left: 1, right: 0 });
    assert_eq!(state.phase, ServePhase::Idle(IDLE_WAIT));
}

#[test]
fn test_scoring_threshold_below_ball() {
    // The bias only pushes non-positive distances, so the band below the ball is one wider.
    let mut state = in_play(approaching_right(), Paddles::new(0, 22));
    assert_eq!(next_state(&mut state, IDLE_WAIT), StepResult::Returned(Player::Right));

    let mut state = in_play(approaching_right(), Paddles::new(0, 23));
    assert_eq!(next_state(&mut state, IDLE_WAIT), StepResult::Scored(Player::Left));
}

#[test]
fn test_left_paddle() {
    let mut state = in_play(approaching_left(), Paddles::new(16, 0));
    assert_eq!(next_state(&mut state, IDLE_WAIT), StepResult::Returned(Player::Left));
    assert_eq!(state.ball.dx, X_STEP);
    // Level with the paddle center, nudged downwards by the bias.
    assert_eq!(state.ball.dy, 1);
    // The ball doesn't move horizontally on the tick it's returned.
    assert_eq!(state.ball.x, 4);
    assert_eq!(state.ball.y, 21);

    let mut state = in_play(approaching_left(), Paddles::new(0, 16));
    assert_eq!(next_state(&mut state, 3), StepResult::Scored(Player::Right));
    assert_eq!(state.scores, Scores { left: 0, right: 1 });
    assert_eq!(state.phase, ServePhase::Idle(3));
}

#[test]
fn test_return_angles() {
    let expectations = [
        // (paddle position, expected dy) for a ball at row 20.
        (16, 1),
        (17, -1),
        (18, -2),
        (19, -3),
        (22, -3),
        (15, 2),
        (14, 3),
        (11, 3),
    ];

    for &(paddle, expected_dy) in expectations.iter() {
        let mut state = in_play(approaching_right(), Paddles::new(0, paddle));
        next_state(&mut state, IDLE_WAIT);

        assert_eq!(state.ball.dy, expected_dy, "paddle at {}", paddle);
        assert_eq!(state.ball.y, 20 + expected_dy);
    }
}

#[test]
fn test_miss_keeps_ball_in_column() {
    let mut state = in_play(approaching_right(), Paddles::new(0, 0));
    next_state(&mut state, 0);

    assert_eq!(state.ball.x, 92);
    assert_eq!(state.ball.y, 21);
    assert_eq!(state.phase, ServePhase::AwaitingServe);
}

#[test]
fn test_serve_bounds() {
    let mut rng = Lcg::new();
    let mut went_left = false;
    let mut went_right = false;

    for _ in 0..10_000 {
        let ball = serve(rng.next());

        assert_eq!(ball.x, 48);
        assert!(ball.y >= MIN_BALL_Y && ball.y <= MAX_BALL_Y, "{:?}", ball);
        assert_eq!(ball.dx.abs(), X_STEP);
        assert!(ball.dy >= 1 && ball.dy <= MAX_Y_STEP, "{:?}", ball);

        went_left |= ball.dx < 0;
        went_right |= ball.dx > 0;
    }

    assert!(went_left && went_right);
}

#[test]
fn test_serve_bits() {
    // Bit 6 picks the direction, the bits from 7 upwards the vertical speed.
    let ball = serve(0);
    assert_eq!(ball, Ball { x: 48, y: 0x3F % 38 + 1, dx: -X_STEP, dy: 1 });

    let ball = serve(0x40 | (2 << 7));
    assert_eq!(ball.dx, X_STEP);
    assert_eq!(ball.dy, 3);
}
