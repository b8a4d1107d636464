use crate::display::{HEIGHT, PADDLE_SIZE};

/// Largest value the 12-bit analog converter can produce.
pub const MAX_ADC_VALUE: u16 = 4095;
/// The sample is reduced to 32 distinct paddle positions.
const ADC_SHIFT: u32 = 7;
/// Analog reading the paddles are assumed to be at before the first sample arrives.
pub const ADC_RESET_VALUE: u16 = MAX_ADC_VALUE / 2;

/// The lowest row the top of a paddle may be placed on while staying on screen.
pub const MAX_PADDLE_POSITION: u8 = (HEIGHT - PADDLE_SIZE) as u8;

/// Convert a raw potentiometer sample into a paddle position (the row of the paddle's top edge).
///
/// Samples above [`MAX_ADC_VALUE`] are treated as full scale.
#[inline]
pub fn paddle_from_adc(raw: u16) -> u8 {
    (raw.min(MAX_ADC_VALUE) >> ADC_SHIFT) as u8
}

/// Inverse of [`paddle_from_adc`], returns the smallest sample mapping to `position`.
///
/// Useful for anything that wants to pretend to be a potentiometer.
#[inline]
pub fn adc_for_paddle(position: u8) -> u16 {
    let position = position.min(paddle_from_adc(MAX_ADC_VALUE));
    (position as u16) << ADC_SHIFT
}
