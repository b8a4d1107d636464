use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;
use num_integer::Integer;

use crate::display::assets::BACKGROUND;
use crate::display::{BYTE_HEIGHT, HEIGHT, IMAGE_SIZE, WIDTH};

/// A vertical run of at most 8 pixels in a single column, starting at an arbitrary row.
///
/// Since every byte in the framebuffer holds 8 rows, such a run touches at most two
/// vertically adjacent bytes. `head` is the mask for the byte holding the top row, `tail`
/// the mask for the byte right below it (zero when the run fits in one byte).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VerticalRun {
    page: usize,
    head: u8,
    tail: u8,
}

impl VerticalRun {
    /// Create a run whose bit 0 of `pattern` lands on row `top`.
    #[inline]
    pub fn new(top: usize, pattern: u8) -> Self {
        let (page, offset) = top.div_rem(&8);
        let wide = (pattern as u16) << offset;
        VerticalRun {
            page,
            head: wide as u8,
            tail: (wide >> 8) as u8,
        }
    }

    /// The page (byte row) holding the top of this run.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the `(head, tail)` masks.
    pub fn masks(&self) -> (u8, u8) {
        (self.head, self.tail)
    }
}

/// Page-packed monochrome frame.
///
/// Byte `page * WIDTH + column` holds rows `8 * page..8 * page + 8` of `column`, with the
/// least significant bit being the topmost pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    bytes: [u8; IMAGE_SIZE],
}

impl Framebuffer {
    /// A frame holding nothing but the static playfield.
    pub fn background() -> Self {
        Framebuffer { bytes: BACKGROUND }
    }

    pub fn blank() -> Self {
        Framebuffer { bytes: [0; IMAGE_SIZE] }
    }

    pub fn from_bytes(bytes: [u8; IMAGE_SIZE]) -> Self {
        Framebuffer { bytes }
    }

    /// Throw away everything drawn so far and start over from the static playfield.
    pub fn reset(&mut self) {
        self.bytes = BACKGROUND;
    }

    pub fn as_bytes(&self) -> &[u8; IMAGE_SIZE] {
        &self.bytes
    }

    #[inline]
    fn index(page: usize, column: usize) -> usize {
        assert!(
            page < BYTE_HEIGHT && column < WIDTH,
            "Tried to access page {} column {}, outside of the {}x{} framebuffer",
            page,
            column,
            WIDTH,
            BYTE_HEIGHT
        );
        page * WIDTH + column
    }

    #[inline]
    pub fn byte(&self, page: usize, column: usize) -> u8 {
        self.bytes[Self::index(page, column)]
    }

    /// Overwrite a whole byte, ignoring whatever was there before.
    #[inline]
    pub fn write_byte(&mut self, page: usize, column: usize, value: u8) {
        self.bytes[Self::index(page, column)] = value;
    }

    #[inline]
    pub fn or_byte(&mut self, page: usize, column: usize, value: u8) {
        self.bytes[Self::index(page, column)] |= value;
    }

    #[inline]
    pub fn clear_byte_bits(&mut self, page: usize, column: usize, value: u8) {
        self.bytes[Self::index(page, column)] &= !value;
    }

    /// Light every pixel of `run` in `column`.
    pub fn set_run(&mut self, column: usize, run: VerticalRun) {
        self.or_byte(run.page, column, run.head);
        if run.tail != 0 {
            self.or_byte(run.page + 1, column, run.tail);
        }
    }

    /// Turn off every pixel of `run` in `column`, the exact inverse of [`Framebuffer::set_run`].
    pub fn clear_run(&mut self, column: usize, run: VerticalRun) {
        self.clear_byte_bits(run.page, column, run.head);
        if run.tail != 0 {
            self.clear_byte_bits(run.page + 1, column, run.tail);
        }
    }

    /// Whether the pixel at `(x, y)` is lit.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        let (page, bit) = y.div_rem(&8);
        self.byte(page, x) & (1 << bit) != 0
    }

    pub fn lit_pixels(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Framebuffer::background()
    }
}

impl Display for Framebuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let art = (0..HEIGHT)
            .map(|y| {
                (0..WIDTH)
                    .map(|x| if self.pixel(x, y) { '#' } else { '.' })
                    .collect::<String>()
            })
            .join("\n");
        f.write_str(&art)
    }
}

// Raw byte dumps are useless when comparing frames, so Debug draws the picture instead.
impl Debug for Framebuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Framebuffer {}x{}", WIDTH, HEIGHT)?;
        Display::fmt(self, f)
    }
}
