use crate::vision::Constraints;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

/// Timings and randomness for a game session.
///
/// ```
/// use rpsls::game::Config;
/// use std::time::Duration;
///
/// let config = Config::default()
///     .with_countdown(5)
///     .with_dwell(Duration::from_secs(1))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Countdown starting value.
    pub countdown: u32,
    /// Length of one countdown step.
    pub tick: Duration,
    /// How long a resolved round stays up.
    pub dwell: Duration,
    /// Pause between predictions.
    pub interval: Duration,
    /// Requested capture resolution.
    pub constraints: Constraints,
    /// Seed for the computer's moves. None draws from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            countdown: crate::COUNTDOWN_FROM,
            tick: crate::COUNTDOWN_INTERVAL,
            dwell: crate::RESULT_DWELL,
            interval: crate::PREDICTION_INTERVAL,
            constraints: Constraints::default(),
            seed: None,
        }
    }
}

impl Config {
    pub fn with_countdown(mut self, from: u32) -> Self {
        self.countdown = from;
        self
    }
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
    pub fn with_dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
    pub fn countdown(&self) -> super::Countdown {
        super::Countdown::new(self.countdown, self.tick)
    }
}
