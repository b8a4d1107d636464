use crate::display::assets::{GLYPHS, GLYPH_WIDTH};
use crate::display::Framebuffer;
use crate::state::{Scores, MAX_SCORE};

/// Page both scores are written to.
pub const SCORE_PAGE: usize = 0;
/// Column of the left player's ones digit. The tens digit goes [`DIGIT_SPACING`] to its left.
pub const LEFT_SCORE_COLUMN: usize = 39;
/// Column of the right player's leading digit. The ones digit of a two digit score goes
/// [`DIGIT_SPACING`] to its right.
pub const RIGHT_SCORE_COLUMN: usize = 52;
/// Distance between the start of two digits in a two digit score.
pub const DIGIT_SPACING: usize = 6;

/// Write both scores onto the frame.
///
/// Glyphs replace the bytes in their slot outright, so nothing else may draw there.
pub fn write_scores(frame: &mut Framebuffer, scores: &Scores) {
    write_score(frame, scores.left, LEFT_SCORE_COLUMN - DIGIT_SPACING, LEFT_SCORE_COLUMN);
    write_score(frame, scores.right, RIGHT_SCORE_COLUMN, RIGHT_SCORE_COLUMN);
}

/// `two_digit_column` is where the tens digit goes for scores of 10 and up,
/// `one_digit_column` where a lone digit goes. The ones digit of a two digit score always
/// follows the tens digit at [`DIGIT_SPACING`].
fn write_score(frame: &mut Framebuffer, score: u32, two_digit_column: usize, one_digit_column: usize) {
    assert!(
        score <= MAX_SCORE,
        "Score {} doesn't fit on the two digit scoreboard",
        score
    );

    if score < 10 {
        write_glyph(frame, score as usize, one_digit_column);
    } else {
        write_glyph(frame, ((score % 100) / 10) as usize, two_digit_column);
        write_glyph(frame, (score % 10) as usize, two_digit_column + DIGIT_SPACING);
    }
}

fn write_glyph(frame: &mut Framebuffer, digit: usize, column: usize) {
    for (i, &byte) in GLYPHS[digit].iter().enumerate() {
        frame.write_byte(SCORE_PAGE, column + i, byte);
    }
}

/// Read the glyph bytes currently occupying the digit slot starting at `column`.
pub fn glyph_at(frame: &Framebuffer, column: usize) -> [u8; GLYPH_WIDTH] {
    let mut result = [0u8; GLYPH_WIDTH];
    for (i, byte) in result.iter_mut().enumerate() {
        *byte = frame.byte(SCORE_PAGE, column + i);
    }
    result
}
