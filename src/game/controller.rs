use crate::gesture::Gesture;
use crate::gesture::Outcome;
use crate::gesture::Round;

/// Where the game is in its round cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Countdown,
    Resolving(Round),
}

/// Snapshot handed to whatever renders the game.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub observed: Gesture,
    pub countdown: bool,
    pub outcome: Option<Outcome>,
}

/// Round state machine: Idle -> Countdown -> Resolving -> Idle.
///
/// Pure bookkeeping. Timers and notifications belong to [`super::Room`],
/// which is the only thing that mutates a controller.
#[derive(Debug, Default)]
pub struct Controller {
    observed: Gesture,
    phase: Phase,
}

impl Controller {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn observed(&self) -> Gesture {
        self.observed
    }
    /// A round is underway, counting down or on display.
    pub fn busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }
    pub fn state(&self) -> GameState {
        GameState {
            observed: self.observed,
            countdown: matches!(self.phase, Phase::Countdown),
            outcome: match self.phase {
                Phase::Resolving(round) => Some(round.outcome()),
                _ => None,
            },
        }
    }
    /// Record the latest classification. Returns true when it starts a
    /// countdown: only rock does, and only while idle.
    pub fn observe(&mut self, gesture: Gesture) -> bool {
        self.observed = gesture;
        match (gesture, self.phase) {
            (Gesture::Rock, Phase::Idle) => {
                self.phase = Phase::Countdown;
                true
            }
            _ => false,
        }
    }
    /// Countdown finished: the latest observation becomes the player's move.
    pub fn commit(&mut self, computer: Gesture) -> Option<Round> {
        match self.phase {
            Phase::Countdown => {
                let round = Round::from((self.observed, computer));
                self.phase = Phase::Resolving(round);
                Some(round)
            }
            _ => None,
        }
    }
    /// Dwell finished: take the result down.
    pub fn clear(&mut self) -> bool {
        match self.phase {
            Phase::Resolving(_) => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Verdict;

    #[test]
    fn rock_starts_countdown() {
        let ref mut controller = Controller::default();
        assert!(!controller.observe(Gesture::Paper));
        assert!(!controller.busy());
        assert!(controller.observe(Gesture::Rock));
        assert_eq!(controller.phase(), Phase::Countdown);
        assert!(controller.state().countdown);
    }

    #[test]
    fn second_rock_is_ignored() {
        let ref mut controller = Controller::default();
        assert!(controller.observe(Gesture::Rock));
        assert!(!controller.observe(Gesture::Rock));
        assert!(!controller.observe(Gesture::Other));
        assert!(!controller.observe(Gesture::Rock));
        assert_eq!(controller.phase(), Phase::Countdown);
    }

    #[test]
    fn commits_latest_observation() {
        let ref mut controller = Controller::default();
        controller.observe(Gesture::Rock);
        controller.observe(Gesture::Spock);
        let round = controller.commit(Gesture::Scissors).expect("counting down");
        assert_eq!(round.player(), Gesture::Spock);
        assert_eq!(round.verdict(), Verdict::Win);
        assert_eq!(controller.state().outcome, Some(round.outcome()));
        assert!(!controller.state().countdown);
    }

    #[test]
    fn no_restart_while_resolving() {
        let ref mut controller = Controller::default();
        controller.observe(Gesture::Rock);
        controller.commit(Gesture::Paper);
        assert!(controller.busy());
        assert!(!controller.observe(Gesture::Rock));
        assert!(controller.clear());
        assert_eq!(controller.state().outcome, None);
        assert!(controller.observe(Gesture::Rock));
    }

    #[test]
    fn out_of_order_transitions_are_refused() {
        let ref mut controller = Controller::default();
        assert!(controller.commit(Gesture::Rock).is_none());
        assert!(!controller.clear());
        controller.observe(Gesture::Rock);
        assert!(!controller.clear());
        assert_eq!(controller.phase(), Phase::Countdown);
    }
}
