use gumdrop::Options;

#[derive(Options, Debug)]
pub struct AppOptions {
    /// Print this help message
    #[options()]
    help: bool,
    /// The amount of ticks to simulate.
    #[options(default = "3000")]
    pub ticks: u32,
    /// Save a snapshot every this many ticks, 0 only saves the frames where a point was scored.
    #[options(default = "250")]
    pub snapshot_every: u32,
    /// Size of a single display pixel in the saved snapshots.
    #[options(default = "4")]
    pub scale: u32,
    /// The maximum amount of rows an autopilot paddle moves per tick.
    #[options(default = "2")]
    pub autopilot_step: u8,
    /// Ticks without a frame after a point.
    #[options(default = "10")]
    pub idle_wait: u32,
    /// Log every serve, return and point.
    #[options()]
    pub verbose: bool,
}
