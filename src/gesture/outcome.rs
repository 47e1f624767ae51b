use super::FALLBACK_VERB;
use super::Gesture;
use super::Relation;

/// Result of pitting two gestures against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Tie,
    Win {
        winner: Gesture,
        loser: Gesture,
        verb: &'static str,
    },
}

impl Outcome {
    /// Decides a pair of gestures. Argument order never changes the winner:
    /// the forward relation is tried first, then the reverse, then the
    /// invalid-sign fallback in favour of whichever side is not `Other`.
    pub fn resolve(a: Gesture, b: Gesture) -> Self {
        if a == b {
            return Self::Tie;
        }
        let relation = Relation::global();
        if let Some(verb) = relation.beats(a, b) {
            return Self::win(a, b, verb);
        }
        if let Some(verb) = relation.beats(b, a) {
            return Self::win(b, a, verb);
        }
        match (a, b) {
            (Gesture::Other, named) => Self::win(named, a, FALLBACK_VERB),
            (named, _) => Self::win(named, b, FALLBACK_VERB),
        }
    }
    pub fn winner(&self) -> Option<Gesture> {
        match self {
            Self::Tie => None,
            Self::Win { winner, .. } => Some(*winner),
        }
    }
    pub fn loser(&self) -> Option<Gesture> {
        match self {
            Self::Tie => None,
            Self::Win { loser, .. } => Some(*loser),
        }
    }
    pub fn is_tie(&self) -> bool {
        matches!(self, Self::Tie)
    }
    fn win(winner: Gesture, loser: Gesture, verb: &'static str) -> Self {
        Self::Win {
            winner,
            loser,
            verb,
        }
    }
}

/// "Spock vaporizes rock." style sentence, or the tie line.
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tie => write!(f, "It's a tie!"),
            Self::Win {
                winner,
                loser,
                verb,
            } => {
                let name = winner.name();
                let (head, tail) = name.split_at(1);
                write!(f, "{}{} {} {}.", head.to_uppercase(), tail, verb, loser)
            }
        }
    }
}
