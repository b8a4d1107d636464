use pretty_assertions::assert_eq;

use crate::display::compositor::{draw_ball, draw_paddles, erase_ball};
use crate::display::digits::write_scores;
use crate::display::{DisplayTransport, Framebuffer};
use crate::game::{Game, TickInput, TickOutcome};
use crate::io::random::Lcg;
use crate::scheduler::ServePhase;
use crate::state::{Ball, Player, Scores, MAX_SCORE};
use crate::{GameOptionsBuilder, ScoreResetPolicy, IDLE_WAIT};

#[derive(Default)]
struct RecordingTransport {
    frames: Vec<Framebuffer>,
}

impl DisplayTransport for RecordingTransport {
    type Error = ();

    fn put_picture(&mut self, frame: &Framebuffer) -> Result<(), Self::Error> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

struct BrokenTransport;

impl DisplayTransport for BrokenTransport {
    type Error = &'static str;

    fn put_picture(&mut self, _frame: &Framebuffer) -> Result<(), Self::Error> {
        Err("display unplugged")
    }
}

/// A game which has already served its first ball.
fn running_game() -> Game {
    let mut game = Game::default();
    game.tick(TickInput::new(16, 16));
    game
}

/// Teleport the ball, removing it from its old spot on the frame.
fn place_ball(game: &mut Game, ball: Ball) {
    erase_ball(&mut game.frame, &game.state.ball);
    game.state.ball = ball;
}

/// What the frame should look like when composed from scratch for the current state.
fn composed(game: &Game) -> Framebuffer {
    let mut frame = Framebuffer::background();
    draw_paddles(&mut frame, game.paddles());
    write_scores(&mut frame, game.scores());
    draw_ball(&mut frame, game.ball());
    frame
}

#[test]
fn test_first_tick_serves() {
    let mut game = Game::default();
    assert_eq!(game.phase(), ServePhase::AwaitingServe);

    let outcome = game.tick(TickInput::new(16, 16));

    assert_eq!(outcome, TickOutcome::Frame { served: true, point: None });
    assert_eq!(game.phase(), ServePhase::InPlay);
    // The fresh ball has already taken its first step.
    assert_eq!((game.ball().x - 48).abs(), 4);
    assert_eq!(game.frame_buffer(), &composed(&game));
}

#[test]
fn test_paddle_bounce() {
    let mut game = running_game();
    place_ball(&mut game, Ball { x: 92, y: 20, dx: 4, dy: 1 });

    let outcome = game.tick(TickInput::new(16, 20));

    assert_eq!(outcome, TickOutcome::Frame { served: false, point: None });
    assert_eq!(game.ball(), &Ball { x: 92, y: 17, dx: -4, dy: -3 });
    assert_eq!(game.scores(), &Scores::default());
    assert_eq!(game.frame_buffer(), &composed(&game));
}

#[test]
fn test_miss_and_idle() {
    let mut game = running_game();
    place_ball(&mut game, Ball { x: 92, y: 20, dx: 4, dy: 1 });

    let outcome = game.tick(TickInput::new(16, 0));

    assert_eq!(
        outcome,
        TickOutcome::Frame {
            served: false,
            point: Some(Player::Left)
        }
    );
    assert_eq!(game.scores(), &Scores { left: 1, right: 0 });
    assert_eq!(game.phase(), ServePhase::Idle(IDLE_WAIT));

    let frozen = game.frame_buffer().clone();

    for remaining in (0..IDLE_WAIT).rev() {
        let outcome = game.tick(TickInput::new(3, 30));
        assert_eq!(outcome, TickOutcome::NoFrame { idle_remaining: remaining });
        assert_eq!(game.frame_buffer(), &frozen);
    }

    let outcome = game.tick(TickInput::new(3, 30));

    assert_eq!(outcome, TickOutcome::Frame { served: true, point: None });
    assert_eq!(game.scores(), &Scores { left: 1, right: 0 });
    assert_eq!(game.frame_buffer(), &composed(&game));
}

#[test]
fn test_no_idle_wait() {
    let options = GameOptionsBuilder::new().idle_wait(0).build();
    let mut game = Game::new(options);
    game.tick(TickInput::new(16, 16));
    place_ball(&mut game, Ball { x: 4, y: 20, dx: -4, dy: 1 });

    game.tick(TickInput::new(0, 16));
    assert_eq!(game.phase(), ServePhase::AwaitingServe);

    let outcome = game.tick(TickInput::new(0, 16));
    assert_eq!(outcome, TickOutcome::Frame { served: true, point: None });
    assert_eq!(game.scores(), &Scores { left: 0, right: 1 });
}

#[test]
fn test_score_saturates() {
    let mut game = running_game();
    game.state.scores = Scores { left: MAX_SCORE, right: 5 };
    place_ball(&mut game, Ball { x: 92, y: 20, dx: 4, dy: 1 });

    game.tick(TickInput::new(16, 0));

    assert_eq!(game.scores(), &Scores { left: MAX_SCORE, right: 5 });
    assert_eq!(game.frame_buffer(), &composed(&game));
}

#[test]
fn test_score_reset_on_serve_request() {
    let options = GameOptionsBuilder::new()
        .with_score_reset(ScoreResetPolicy::OnServeRequest)
        .build();
    let mut game = Game::new(options);
    game.state.scores = Scores { left: 3, right: 4 };

    // A serve without the button pressed keeps the scores.
    game.tick(TickInput::new(16, 16));
    assert_eq!(game.scores(), &Scores { left: 3, right: 4 });

    game.state.phase = ServePhase::AwaitingServe;
    game.tick(TickInput::new(16, 16).with_serve());
    assert_eq!(game.scores(), &Scores::default());
}

#[test]
fn test_scores_kept_by_default() {
    let mut game = Game::default();
    game.state.scores = Scores { left: 3, right: 4 };

    game.tick(TickInput::new(16, 16).with_serve());

    assert_eq!(game.scores(), &Scores { left: 3, right: 4 });
}

#[test]
fn test_serve_request_ignored_mid_rally() {
    let options = GameOptionsBuilder::new()
        .with_score_reset(ScoreResetPolicy::OnServeRequest)
        .build();
    let mut game = Game::new(options);
    game.tick(TickInput::new(16, 16));
    game.state.scores = Scores { left: 3, right: 4 };
    place_ball(&mut game, Ball { x: 40, y: 20, dx: 4, dy: 1 });

    let outcome = game.tick(TickInput::new(16, 16).with_serve());

    assert_eq!(outcome, TickOutcome::Frame { served: false, point: None });
    assert_eq!(game.scores(), &Scores { left: 3, right: 4 });
    assert_eq!(game.ball().x, 44);
}

#[test]
fn test_paddles_clamped() {
    let mut game = running_game();
    game.tick(TickInput::new(200, 33));

    assert_eq!((game.paddles().left, game.paddles().right), (32, 32));
    assert_eq!(game.frame_buffer(), &composed(&game));
}

#[test]
fn test_refresh_screen() {
    let mut game = running_game();
    let mut transport = RecordingTransport::default();
    place_ball(&mut game, Ball { x: 92, y: 20, dx: 4, dy: 1 });

    // The miss still produces a frame, the idle ticks don't.
    for _ in 0..=IDLE_WAIT {
        game.refresh_screen(TickInput::new(16, 0), &mut transport).unwrap();
    }
    assert_eq!(transport.frames.len(), 1);
    assert_eq!(&transport.frames[0], game.frame_buffer());

    let outcome = game.refresh_screen(TickInput::new(16, 0), &mut transport).unwrap();

    assert!(outcome.has_frame());
    assert_eq!(transport.frames.len(), 2);
    assert_eq!(&transport.frames[1], game.frame_buffer());
}

#[test]
fn test_transport_error() {
    let mut game = Game::default();

    let result = game.refresh_screen(TickInput::new(16, 16), BrokenTransport);

    assert_eq!(result, Err("display unplugged"));
    // The tick itself still went through.
    assert_eq!(game.phase(), ServePhase::InPlay);
}

#[test]
fn test_long_run_frames_match_state() {
    let mut game = Game::default();
    let mut inputs = Lcg::new();
    let mut points = 0;
    let mut frames = 0;

    for i in 0..5_000 {
        // Track the ball most of the time so that rallies actually happen.
        let noise = inputs.next();
        let tracking = (game.ball().y - 4).max(0).min(32) as u8;
        let wobble = (noise % 9) as u8;
        let left = if i % 50 < 40 { tracking } else { wobble * 4 };
        let right = (tracking + wobble).min(32);

        match game.tick(TickInput::new(left, right)) {
            TickOutcome::Frame { point, .. } => {
                frames += 1;
                points += point.is_some() as u32;
                assert_eq!(game.frame_buffer(), &composed(&game), "tick {}", i);
            }
            TickOutcome::NoFrame { .. } => assert!(game.phase().serve_pending()),
        }
    }

    assert!(points > 0);
    assert!(frames > 2_500);
}
