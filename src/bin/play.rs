//! Terminal game.
//!
//! Keyboard selections stand in for the classifier: pick rock to start
//! the countdown, then pick your move before it runs out.

use clap::Parser;
use dialoguer::Select;
use rpsls::game::Config;
use rpsls::game::Room;
use rpsls::game::Terminal;
use rpsls::gesture::Gesture;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Rock-Paper-Scissors-Lizard-Spock", long_about = None)]
struct Args {
    /// Countdown starting value
    #[arg(long, default_value_t = rpsls::COUNTDOWN_FROM)]
    countdown: u32,
    /// Milliseconds per countdown step
    #[arg(long, default_value_t = rpsls::COUNTDOWN_INTERVAL.as_millis() as u64)]
    tick_ms: u64,
    /// Milliseconds a result stays on screen
    #[arg(long, default_value_t = rpsls::RESULT_DWELL.as_millis() as u64)]
    dwell_ms: u64,
    /// Seed for the computer's moves
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let config = Config::default()
            .with_countdown(args.countdown)
            .with_tick(Duration::from_millis(args.tick_ms))
            .with_dwell(Duration::from_millis(args.dwell_ms));
        match args.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from(Args::parse());
    rpsls::log();
    rpsls::kys();
    let (observations, rx) = tokio::sync::mpsc::unbounded_channel();
    let room = tokio::spawn(Room::new(Terminal, config).run(rx));
    let keyboard = tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let mut choices = Gesture::ALL.iter().map(|g| g.to_string()).collect::<Vec<_>>();
        choices.push("quit".to_string());
        loop {
            let selection = Select::new()
                .with_prompt("show a gesture")
                .report(false)
                .items(choices.as_slice())
                .default(0)
                .interact()?;
            match Gesture::ALL.get(selection) {
                Some(gesture) => observations.send(*gesture)?,
                None => return Ok(()),
            }
        }
    });
    keyboard.await??;
    room.await?;
    Ok(())
}
