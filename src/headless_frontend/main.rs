//! Plays a full game between two autopilots without any display and saves snapshots of the
//! framebuffer along the way.
//!
//! If this is a second run then the `old` snapshots will be compared to the `new` snapshots via a
//! `Blake2s` hash. Were there to be any files which differ they will be printed to the output.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::{create_dir_all, read_dir, remove_dir_all, rename, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use blake2::{Blake2s, Digest};
use gumdrop::Options;
use log::LevelFilter;
use log::*;
use simplelog::{CombinedLogger, Config, TermLogger, TerminalMode};

use oledpong::autopilot::Autopilot;
use oledpong::rendering::to_image;
use oledpong_core::display::Framebuffer;
use oledpong_core::{paddle_from_adc, Game, GameOptionsBuilder, Player, TickInput, TickOutcome};

use crate::options::AppOptions;

mod options;

const TESTING_PATH_OLD: &str = "snapshots/old/";
const TESTING_PATH_NEW: &str = "snapshots/new/";

fn main() -> anyhow::Result<()> {
    let options: AppOptions = AppOptions::parse_args_default_or_exit();
    let level = if options.verbose { LevelFilter::Trace } else { LevelFilter::Info };
    CombinedLogger::init(vec![TermLogger::new(level, Config::default(), TerminalMode::Mixed)])?;

    // Clean out old files.
    if Path::new(TESTING_PATH_OLD).exists() {
        remove_dir_all(TESTING_PATH_OLD)?;
    }
    // Move the current snapshots, if they exist, into the `old` directory for comparison purposes.
    if Path::new(TESTING_PATH_NEW).exists() {
        rename(TESTING_PATH_NEW, TESTING_PATH_OLD)?;
    }
    create_dir_all(TESTING_PATH_NEW)?;

    let old_hashes = calculate_hashes(TESTING_PATH_OLD).unwrap_or_default();

    play(&options)?;

    let new_hashes = calculate_hashes(TESTING_PATH_NEW)?;

    for (path, hash) in old_hashes {
        match new_hashes.get(&path) {
            Some(new_hash) if *new_hash != hash => println!("Change in file: {:?}", path),
            None => println!("File no longer produced: {:?}", path),
            _ => {}
        }
    }

    Ok(())
}

fn play(options: &AppOptions) -> anyhow::Result<()> {
    let game_options = GameOptionsBuilder::new().idle_wait(options.idle_wait).build();
    let mut game = Game::new(game_options);
    let mut left = Autopilot::new(Player::Left, options.autopilot_step);
    let mut right = Autopilot::new(Player::Right, options.autopilot_step);
    let mut frames = 0;

    for tick in 0..options.ticks {
        let left_sample = left.sample(game.ball());
        let right_sample = right.sample(game.ball());
        let mut input = TickInput::new(paddle_from_adc(left_sample), paddle_from_adc(right_sample));
        // The very first tick is the button press that starts the game.
        input.serve_requested = tick == 0;

        if let TickOutcome::Frame { point, .. } = game.tick(input) {
            frames += 1;

            let periodic = options.snapshot_every != 0 && tick % options.snapshot_every == 0;
            if periodic || point.is_some() {
                save_image(game.frame_buffer(), options.scale, format!("tick_{:06}.png", tick))?;
            }
        }
    }

    let scores = game.scores();
    info!(
        "Played {} ticks ({} frames), final score {} - {}",
        options.ticks, frames, scores.left, scores.right
    );

    Ok(())
}

fn calculate_hashes(directory: impl AsRef<Path>) -> anyhow::Result<HashMap<OsString, String>> {
    let files = list_files_with_extensions(directory, ".png")?;
    let mut result = HashMap::with_capacity(files.len());

    if files.is_empty() {
        return Err(anyhow!("There are no image files to hash"));
    }

    for path in files.iter() {
        let mut file = File::open(path)?;
        let mut hasher = Blake2s::new();
        io::copy(&mut file, &mut hasher)?;
        let hash = hasher.finalize();

        let stem = path.file_stem().ok_or_else(|| anyhow!("{:?} has no file name", path))?;
        result.insert(stem.to_os_string(), format!("{:x}", hash));
    }

    Ok(result)
}

fn list_files_with_extensions(path: impl AsRef<Path>, extension: impl AsRef<str>) -> anyhow::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    if path.as_ref().is_dir() {
        for entry in read_dir(path)? {
            let path = entry?.path();
            if path.is_dir() {
                result.extend(list_files_with_extensions(&path, extension.as_ref())?);
            } else if path.to_str().filter(|t| t.ends_with(extension.as_ref())).is_some() {
                result.push(path);
            }
        }
    }
    Ok(result)
}

fn save_image(frame: &Framebuffer, scale: u32, file_name: impl AsRef<str>) -> anyhow::Result<()> {
    let path = format!("{}{}", TESTING_PATH_NEW, file_name.as_ref());
    to_image(frame, scale)
        .save(&path)
        .with_context(|| format!("Failed to save snapshot {}", path))?;
    debug!("Saved {}", path);
    Ok(())
}
