use super::*;
use crate::gesture::Gesture;
use rand::rngs::SmallRng;
use tokio::sync::mpsc::UnboundedReceiver;

/// Async driver for a live game.
///
/// Owns the [`Controller`] on a single task and is the only place it is
/// mutated. Classifier output arrives on the observation channel; timer
/// signals arrive on the room's own channel. Every transition is pushed
/// to the [`Surface`].
///
/// - Rock while idle: start the countdown
/// - Countdown elapsed: commit the player's gesture, draw the computer's,
///   resolve, start the dwell timer
/// - Dwell elapsed: clear the result and go idle
pub struct Room<S: Surface> {
    controller: Controller,
    surface: S,
    config: Config,
    rng: SmallRng,
    signals: Channel<Signal>,
    rounds: usize,
}

impl<S: Surface> Room<S> {
    pub fn new(surface: S, config: Config) -> Self {
        Self {
            controller: Controller::default(),
            rng: config.rng(),
            surface,
            config,
            signals: Channel::default(),
            rounds: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.controller.state()
    }

    /// Play until the observation channel closes. A countdown still
    /// running at that point is abandoned along with the room.
    pub async fn run(mut self, mut observations: UnboundedReceiver<Gesture>) {
        log::info!("{:<32}{:<32}", "room open", format!("{:?}", self.config.countdown()));
        loop {
            tokio::select! {
                biased;
                Some(signal) = self.signals.rx().recv() => self.signal(signal).await,
                observed = observations.recv() => match observed {
                    Some(gesture) => self.observe(gesture).await,
                    None => break,
                },
            }
        }
        log::info!("{:<32}{:<32}", "room closed", format!("{} rounds", self.rounds));
    }
}

impl<S: Surface> Room<S> {
    async fn observe(&mut self, gesture: Gesture) {
        let previous = self.controller.observed();
        let started = self.controller.observe(gesture);
        if previous != gesture {
            self.surface.notify(&Event::Observed(gesture)).await;
        }
        if started {
            log::debug!("[room] rock observed, counting down");
            self.config.countdown().spawn(self.signals.tx());
        }
    }

    async fn signal(&mut self, signal: Signal) {
        match signal {
            Signal::Tick(remaining) => self.surface.notify(&Event::Countdown(remaining)).await,
            Signal::Elapsed => self.resolve().await,
            Signal::Dwelled => self.clear().await,
        }
    }

    async fn resolve(&mut self) {
        let computer = Gesture::sample(&mut self.rng);
        match self.controller.commit(computer) {
            Some(round) => {
                self.rounds += 1;
                log::info!("{:<32}{}", format!("round {}", self.rounds), round);
                self.surface.notify(&Event::Resolved(round)).await;
                dwell(self.config.dwell, self.signals.tx());
            }
            None => log::warn!("[room] countdown elapsed outside a round"),
        }
    }

    async fn clear(&mut self) {
        if self.controller.clear() {
            self.surface.notify(&Event::Cleared).await;
        }
    }
}
