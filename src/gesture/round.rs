use super::Gesture;
use super::Outcome;

/// How a round went from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Win,
    Lose,
    Tie,
}

/// One committed round: both throws and their resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Round {
    player: Gesture,
    computer: Gesture,
    outcome: Outcome,
}

impl Round {
    pub fn player(&self) -> Gesture {
        self.player
    }
    pub fn computer(&self) -> Gesture {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn verdict(&self) -> Verdict {
        match self.outcome.winner() {
            None => Verdict::Tie,
            Some(w) if w == self.player => Verdict::Win,
            Some(_) => Verdict::Lose,
        }
    }
}

impl From<(Gesture, Gesture)> for Round {
    fn from((player, computer): (Gesture, Gesture)) -> Self {
        Self {
            player,
            computer,
            outcome: Outcome::resolve(player, computer),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.verdict() {
            Verdict::Tie => write!(f, "{}", self.outcome),
            Verdict::Win => write!(f, "{} You win!", self.outcome),
            Verdict::Lose => write!(f, "{} You lose!", self.outcome),
        }
    }
}
