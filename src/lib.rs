//! Gesture-driven Rock-Paper-Scissors-Lizard-Spock.
//!
//! A camera feed is sampled continuously and every frame is classified by a
//! SqueezeNet network into one of six [`gesture::Gesture`]s. Showing rock
//! starts a countdown, after which the player's gesture is committed against
//! a random computer move and the round is resolved.
pub mod error;
pub mod game;
pub mod gesture;
pub mod inference;
pub mod network;
pub mod session;
pub mod vision;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Softmax outputs and class confidences.
pub type Probability = f32;
/// Raw pre-softmax network outputs.
pub type Score = f32;

// ============================================================================
// NETWORK INPUT
// SqueezeNet v1.1 expects a square RGB image with ImageNet mean subtraction.
// ============================================================================
/// Side length of the square network input (pixels).
pub const IMAGE_SIZE: usize = 227;
/// Colour channels per pixel.
pub const CHANNELS: usize = 3;
/// Per-channel means subtracted from the 0..255 pixel values.
pub const IMAGENET_MEAN: [f32; CHANNELS] = [103.939, 116.779, 123.68];

// ============================================================================
// GAME TIMING
// ============================================================================
/// Pause between the end of one prediction and the start of the next.
pub const PREDICTION_INTERVAL: std::time::Duration = std::time::Duration::from_millis(50);
/// Countdown starting value, shown to the player before the move is committed.
pub const COUNTDOWN_FROM: u32 = 3;
/// Duration of a single countdown step.
pub const COUNTDOWN_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);
/// How long a resolved round stays on display before the game is idle again.
pub const RESULT_DWELL: std::time::Duration = std::time::Duration::from_secs(3);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "cli")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("listen for ctrl-c");
        println!();
        log::warn!("interrupt received, leaving the game");
        std::process::exit(0);
    });
}
