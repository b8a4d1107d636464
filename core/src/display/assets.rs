//! Bitmaps baked into the binary.

use crate::display::{BYTE_HEIGHT, CENTER_COLUMNS, IMAGE_SIZE, WIDTH};

/// Columns wide a single digit glyph is.
pub const GLYPH_WIDTH: usize = 5;

/// 5x7 digit glyphs, one byte per column, stored in page order (bit 0 is the top row).
pub const GLYPHS: [[u8; GLYPH_WIDTH]; 10] = [
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
];

/// Dash pattern of the center line, two pixels lit then two dark.
pub const CENTER_LINE_PATTERN: u8 = 0b0011_0011;
/// The outermost columns are solid, marking the goal lines.
pub const BORDER_PATTERN: u8 = 0xFF;

/// The static playfield every rally starts from: both goal lines and the dashed center line.
pub const BACKGROUND: [u8; IMAGE_SIZE] = build_background();

const fn build_background() -> [u8; IMAGE_SIZE] {
    let mut result = [0u8; IMAGE_SIZE];
    let mut page = 0;

    while page < BYTE_HEIGHT {
        let row = page * WIDTH;
        result[row] = BORDER_PATTERN;
        result[row + WIDTH - 1] = BORDER_PATTERN;
        result[row + CENTER_COLUMNS[0]] = CENTER_LINE_PATTERN;
        result[row + CENTER_COLUMNS[1]] = CENTER_LINE_PATTERN;
        page += 1;
    }

    result
}
