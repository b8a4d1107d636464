use gumdrop::Options;

#[derive(Options, Debug, Default)]
pub struct AppOptions {
    /// Print this help message
    #[options()]
    help: bool,
    /// Let the computer play the left paddle
    #[options()]
    pub autopilot_left: bool,
    /// Let the computer play the right paddle
    #[options()]
    pub autopilot_right: bool,
    /// Override the configured amount of ticks per second
    #[options()]
    pub tick_rate: Option<u32>,
    /// Clear the scoreboard when serve is pressed before a new ball
    #[options()]
    pub reset_scores: bool,
    /// The file log output is written to, the terminal itself is occupied by the game
    #[options(default = "oledpong.log")]
    pub log_file: String,
}
