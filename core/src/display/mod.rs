pub use crate::display::framebuffer::{Framebuffer, VerticalRun};

pub mod assets;
pub mod compositor;
pub mod digits;
pub mod framebuffer;


/// Width of the display in pixels.
pub const WIDTH: usize = 96;
/// Height of the display divided by 8, every byte holds 8 vertically stacked pixels.
pub const BYTE_HEIGHT: usize = 5;
pub const HEIGHT: usize = BYTE_HEIGHT * 8;
/// Amount of bytes needed to represent one frame.
pub const IMAGE_SIZE: usize = WIDTH * BYTE_HEIGHT;

pub const BALL_SIZE: usize = 3;
pub const HALF_BALL: usize = BALL_SIZE >> 1;
/// Vertical pixel pattern of a single ball column.
pub const BALL_MASK: u8 = 0b111;

pub const PADDLE_SIZE: usize = 8;
pub const HALF_PADDLE: usize = PADDLE_SIZE >> 1;
pub const PADDLE_MASK: u8 = 0xFF;
/// Columns occupied by the left paddle.
pub const LEFT_PADDLE_COLUMNS: [usize; 2] = [1, 2];
/// Columns occupied by the right paddle.
pub const RIGHT_PADDLE_COLUMNS: [usize; 2] = [WIDTH - 2, WIDTH - 3];

/// Columns of the dashed line separating both halves of the playfield.
pub const CENTER_COLUMNS: [usize; 2] = [(WIDTH >> 1) - 1, WIDTH >> 1];

/// Whatever ends up physically pushing the composed frame to a screen.
///
/// The core only ever calls this once per produced frame, after composition has completed.
pub trait DisplayTransport {
    type Error;

    fn put_picture(&mut self, frame: &Framebuffer) -> Result<(), Self::Error>;
}

impl<T: DisplayTransport + ?Sized> DisplayTransport for &mut T {
    type Error = T::Error;

    fn put_picture(&mut self, frame: &Framebuffer) -> Result<(), Self::Error> {
        (**self).put_picture(frame)
    }
}
