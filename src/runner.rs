use crate::autopilot::Autopilot;
use crossbeam::channel::*;
use log::*;
use oledpong_core::display::{DisplayTransport, Framebuffer};
use oledpong_core::io::paddle_input::ADC_RESET_VALUE;
use oledpong_core::{paddle_from_adc, Game, GameOptions, Player, TickInput, TickOutcome};
use std::thread::JoinHandle;
use std::time::Duration;

/// Represents a notification for the game thread to handle before its next tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameNotification {
    /// A fresh reading from one of the paddle potentiometers.
    AdcSample { player: Player, raw: u16 },
    /// The serve/reset button was pressed.
    ServePressed,
    ExitRequest,
}

/// Hands frames to whoever holds the other end of a channel.
///
/// Frames the receiver isn't ready for are dropped, a real display would simply miss them too.
pub struct ChannelTransport {
    sender: Sender<Framebuffer>,
}

impl ChannelTransport {
    pub fn new(sender: Sender<Framebuffer>) -> Self {
        ChannelTransport { sender }
    }
}

impl DisplayTransport for ChannelTransport {
    type Error = TrySendError<Framebuffer>;

    fn put_picture(&mut self, frame: &Framebuffer) -> Result<(), Self::Error> {
        match self.sender.try_send(frame.clone()) {
            Err(TrySendError::Full(_)) => {
                trace!("Display is still busy, skipping frame");
                Ok(())
            }
            other => other,
        }
    }
}

pub struct GameRunner {
    current_thread: Option<JoinHandle<()>>,
    pub frame_receiver: Receiver<Framebuffer>,
    pub notification_sender: Sender<GameNotification>,
}

impl GameRunner {
    /// Spawn the game thread. Any `autopilots` take over the paddle of their player,
    /// overriding samples sent for it.
    pub fn new(options: GameOptions, tick_interval: Duration, autopilots: Vec<Autopilot>) -> GameRunner {
        let (frame_sender, frame_receiver) = bounded(1);
        let (notification_sender, notification_receiver) = unbounded::<GameNotification>();
        let game = Game::new(options);
        let game_thread = std::thread::spawn(move || {
            run_game(game, frame_sender, notification_receiver, tick_interval, autopilots)
        });

        GameRunner {
            current_thread: Some(game_thread),
            frame_receiver,
            notification_sender,
        }
    }

    pub fn is_running(&self) -> bool {
        self.current_thread.is_some()
    }

    pub fn send_adc(&self, player: Player, raw: u16) {
        self.notify(GameNotification::AdcSample { player, raw });
    }

    pub fn request_serve(&self) {
        self.notify(GameNotification::ServePressed);
    }

    fn notify(&self, notification: GameNotification) {
        if let Err(e) = self.notification_sender.send(notification) {
            warn!("Game thread is gone, dropping {:?}", e.into_inner());
        }
    }

    /// Stops the current game thread and blocks until it has completed.
    pub fn stop(&mut self) {
        if let Some(thread) = self.current_thread.take() {
            if let Err(e) = self.notification_sender.send(GameNotification::ExitRequest) {
                // The thread already left its loop, joining below is all that's left to do.
                debug!("Game thread already stopped, {:?} not delivered", e.into_inner());
            }
            if thread.join().is_err() {
                error!("Game thread panicked");
            }
        }
    }
}

impl Drop for GameRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_game(
    mut game: Game,
    frame_sender: Sender<Framebuffer>,
    notification_receiver: Receiver<GameNotification>,
    tick_interval: Duration,
    mut autopilots: Vec<Autopilot>,
) {
    let ticker = tick(tick_interval);
    let mut transport = ChannelTransport::new(frame_sender);
    let mut samples = [ADC_RESET_VALUE; 2];
    let mut serve_requested = false;
    // Nothing happens until the first serve press.
    let mut started = false;

    'game_loop: loop {
        select! {
            recv(notification_receiver) -> notification => match notification {
                Ok(GameNotification::AdcSample { player, raw }) => samples[player_index(player)] = raw,
                Ok(GameNotification::ServePressed) => {
                    if !started {
                        info!("Serve pressed, starting game");
                        started = true;
                    }
                    serve_requested = true;
                }
                Ok(GameNotification::ExitRequest) | Err(_) => break 'game_loop,
            },
            recv(ticker) -> _ => {
                if started {
                    for autopilot in autopilots.iter_mut() {
                        samples[player_index(autopilot.player())] = autopilot.sample(game.ball());
                    }

                    let mut input = TickInput::new(paddle_from_adc(samples[0]), paddle_from_adc(samples[1]));
                    input.serve_requested = serve_requested;
                    serve_requested = false;

                    match game.refresh_screen(input, &mut transport) {
                        Ok(TickOutcome::Frame { point: Some(player), .. }) => {
                            let scores = game.scores();
                            info!("Point for {:?}, {} - {}", player, scores.left, scores.right);
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to transfer framebuffer due to: {:?}", e);
                            break 'game_loop;
                        }
                    }
                }
            },
        }
    }

    debug!("Game thread exiting");
}

fn player_index(player: Player) -> usize {
    match player {
        Player::Left => 0,
        Player::Right => 1,
    }
}
