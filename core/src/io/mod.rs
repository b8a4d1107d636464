pub mod paddle_input;
pub mod random;
