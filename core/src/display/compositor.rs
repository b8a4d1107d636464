//! Draw and erase operations for everything that moves on the playfield.
//!
//! Erasing only clears the bits the matching draw call sets for the same position. Anything
//! static those bits happened to overlap (the center line) has to be restored afterwards with
//! [`redraw_center_line`].

use crate::display::assets::BACKGROUND;
use crate::display::{
    Framebuffer, VerticalRun, BALL_MASK, BYTE_HEIGHT, CENTER_COLUMNS, HALF_BALL, HEIGHT,
    LEFT_PADDLE_COLUMNS, PADDLE_MASK, PADDLE_SIZE, RIGHT_PADDLE_COLUMNS, WIDTH,
};
use crate::state::{Ball, Paddles};

pub fn draw_paddles(frame: &mut Framebuffer, paddles: &Paddles) {
    for_each_paddle_run(paddles, |column, run| frame.set_run(column, run));
}

pub fn erase_paddles(frame: &mut Framebuffer, paddles: &Paddles) {
    for_each_paddle_run(paddles, |column, run| frame.clear_run(column, run));
}

pub fn draw_ball(frame: &mut Framebuffer, ball: &Ball) {
    for_each_ball_run(ball, |column, run| frame.set_run(column, run));
}

pub fn erase_ball(frame: &mut Framebuffer, ball: &Ball) {
    for_each_ball_run(ball, |column, run| frame.clear_run(column, run));
}

/// OR the background's center line back in, undoing any damage done by [`erase_ball`].
pub fn redraw_center_line(frame: &mut Framebuffer) {
    for page in 0..BYTE_HEIGHT {
        for &column in CENTER_COLUMNS.iter() {
            frame.or_byte(page, column, BACKGROUND[page * WIDTH + column]);
        }
    }
}

fn for_each_paddle_run(paddles: &Paddles, mut apply: impl FnMut(usize, VerticalRun)) {
    let sides = [
        (paddles.left, LEFT_PADDLE_COLUMNS),
        (paddles.right, RIGHT_PADDLE_COLUMNS),
    ];

    for &(position, columns) in sides.iter() {
        let top = position as usize;
        assert!(
            top + PADDLE_SIZE <= HEIGHT,
            "Paddle at row {} would be drawn outside the framebuffer",
            top
        );
        let run = VerticalRun::new(top, PADDLE_MASK);

        for &column in columns.iter() {
            apply(column, run);
        }
    }
}

fn for_each_ball_run(ball: &Ball, mut apply: impl FnMut(usize, VerticalRun)) {
    let half = HALF_BALL as i32;
    assert!(
        ball.x >= half
            && ball.x < WIDTH as i32 - half
            && ball.y >= half
            && ball.y < HEIGHT as i32 - half,
        "Ball at ({}, {}) would be drawn outside the framebuffer",
        ball.x,
        ball.y
    );
    let run = VerticalRun::new((ball.y - half) as usize, BALL_MASK);

    for column in (ball.x - half)..=(ball.x + half) {
        apply(column as usize, run);
    }
}
