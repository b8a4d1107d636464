use image::{GrayImage, ImageBuffer, Luma};
use oledpong_core::display::{Framebuffer, HEIGHT, WIDTH};

const LIT: Luma<u8> = Luma([255]);
const DARK: Luma<u8> = Luma([0]);

/// Convert the frame to a grayscale image, every display pixel becoming a `scale` by `scale` square.
pub fn to_image(frame: &Framebuffer, scale: u32) -> GrayImage {
    let scale = scale.max(1);

    ImageBuffer::from_fn(WIDTH as u32 * scale, HEIGHT as u32 * scale, |x, y| {
        if frame.pixel((x / scale) as usize, (y / scale) as usize) {
            LIT
        } else {
            DARK
        }
    })
}

/// Render the frame as text, packing two pixel rows into every line with half block characters.
pub fn to_text_lines(frame: &Framebuffer) -> Vec<String> {
    (0..HEIGHT)
        .step_by(2)
        .map(|y| {
            (0..WIDTH)
                .map(|x| match (frame.pixel(x, y), frame.pixel(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                })
                .collect()
        })
        .collect()
}
