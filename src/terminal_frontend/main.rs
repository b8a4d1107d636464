use log::LevelFilter;
use log::*;

use simplelog::{CombinedLogger, ConfigBuilder, WriteLogger};

use std::fs::File;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};

use gumdrop::Options;
use oledpong::autopilot::Autopilot;
use oledpong::config::{AppConfig, CONFIG_FILENAME};
use oledpong::rendering::to_text_lines;
use oledpong::runner::GameRunner;
use oledpong::storage::{FileStorage, Storage};
use oledpong_core::display::Framebuffer;
use oledpong_core::io::paddle_input::{ADC_RESET_VALUE, MAX_ADC_VALUE};
use oledpong_core::Player;

use crate::options::AppOptions;

mod options;

const INPUT_POLL: Duration = Duration::from_millis(5);
const AUTOPILOT_STEP: u8 = 2;
const HELP_LINE: &str = "W/S and Up/Down move the paddles, Space serves, Q quits";

/// Positions of both simulated potentiometers.
struct Knobs {
    samples: [u16; 2],
    step: u16,
}

impl Knobs {
    fn turn(&mut self, player: Player, up: bool) -> u16 {
        let sample = &mut self.samples[player as usize];
        *sample = if up {
            sample.saturating_sub(self.step)
        } else {
            sample.saturating_add(self.step).min(MAX_ADC_VALUE)
        };
        *sample
    }
}

enum Action {
    Turn(Player, bool),
    Serve,
    Quit,
}

fn main() -> anyhow::Result<()> {
    let options: AppOptions = AppOptions::parse_args_default_or_exit();

    CombinedLogger::init(vec![WriteLogger::new(
        LevelFilter::Debug,
        ConfigBuilder::new().set_location_level(LevelFilter::Off).build(),
        std::io::BufWriter::new(File::create(&options.log_file)?),
    )])?;

    let file_storage = FileStorage::new()?;
    let stored_config: AppConfig = file_storage.get_value(CONFIG_FILENAME).unwrap_or_default();
    let config = stored_config.with_overrides(options.tick_rate, options.reset_scores);

    let mut autopilots = Vec::new();
    if options.autopilot_left {
        autopilots.push(Autopilot::new(Player::Left, AUTOPILOT_STEP));
    }
    if options.autopilot_right {
        autopilots.push(Autopilot::new(Player::Right, AUTOPILOT_STEP));
    }

    info!("Starting with {:?}", config);
    let mut runner = GameRunner::new(config.into(), config.tick_interval(), autopilots);

    let mut out = stdout();
    enable_raw_mode()?;
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;

    let result = run(&mut runner, &mut out, &config);

    runner.stop();
    disable_raw_mode()?;
    execute!(out, terminal::LeaveAlternateScreen, cursor::Show)?;

    if let Err(e) = file_storage.save_value(CONFIG_FILENAME, &stored_config) {
        warn!("Could not save the configuration: {}", e);
    }

    result
}

fn run(runner: &mut GameRunner, out: &mut Stdout, config: &AppConfig) -> anyhow::Result<()> {
    let mut knobs = Knobs {
        samples: [ADC_RESET_VALUE; 2],
        step: config.keyboard_step,
    };

    draw(out, &Framebuffer::background(), "Press Space to serve")?;

    'mainloop: loop {
        while event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                match key_to_action(key) {
                    Some(Action::Turn(player, up)) => {
                        let sample = knobs.turn(player, up);
                        runner.send_adc(player, sample);
                    }
                    Some(Action::Serve) => runner.request_serve(),
                    Some(Action::Quit) => break 'mainloop,
                    None => {}
                }
            }
        }

        // Only the most recent frame is worth showing.
        if let Some(frame) = runner.frame_receiver.try_iter().last() {
            draw(out, &frame, HELP_LINE)?;
        }
    }

    Ok(())
}

fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('w') => Some(Action::Turn(Player::Left, true)),
        KeyCode::Char('s') => Some(Action::Turn(Player::Left, false)),
        KeyCode::Up => Some(Action::Turn(Player::Right, true)),
        KeyCode::Down => Some(Action::Turn(Player::Right, false)),
        KeyCode::Char(' ') => Some(Action::Serve),
        _ => None,
    }
}

fn draw(out: &mut Stdout, frame: &Framebuffer, status: &str) -> anyhow::Result<()> {
    let lines = to_text_lines(frame);
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }

    let status_row = lines.len() as u16 + 1;
    queue!(
        out,
        MoveTo(0, status_row),
        Clear(ClearType::CurrentLine),
        Print(status)
    )?;

    out.flush()?;
    Ok(())
}
