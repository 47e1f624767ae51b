use crate::gesture::Gesture;
use crate::gesture::Round;
use crate::vision::CameraError;

/// Everything a render surface needs to follow the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The classifier now sees a different gesture.
    Observed(Gesture),
    /// Countdown shows this value.
    Countdown(u32),
    /// A round was committed and resolved.
    Resolved(Round),
    /// The result was taken down; a new round can start.
    Cleared,
    /// The camera could not be opened. Terminal for the session.
    Unavailable(CameraError),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Observed(gesture) => write!(f, "observed {}", gesture),
            Self::Countdown(n) => write!(f, "countdown {}", n),
            Self::Resolved(round) => write!(f, "{} vs {}: {}", round.player(), round.computer(), round),
            Self::Cleared => write!(f, "cleared"),
            Self::Unavailable(e) => write!(f, "unavailable: {}", e),
        }
    }
}
