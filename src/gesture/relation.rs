use super::Gesture;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Verb used when a named sign meets `Other`, which beats nothing.
pub const FALLBACK_VERB: &str = "is better than an invalid sign";

/// Winning directions only. The reverse of every entry is a loss,
/// and `Other` has no entries at all.
const WINNERS: [(Gesture, Gesture, &str); 10] = [
    (Gesture::Scissors, Gesture::Paper, "cuts"),
    (Gesture::Scissors, Gesture::Lizard, "decapitates"),
    (Gesture::Paper, Gesture::Rock, "covers"),
    (Gesture::Paper, Gesture::Spock, "disproves"),
    (Gesture::Rock, Gesture::Lizard, "crushes"),
    (Gesture::Rock, Gesture::Scissors, "crushes"),
    (Gesture::Lizard, Gesture::Spock, "poisons"),
    (Gesture::Lizard, Gesture::Paper, "eats"),
    (Gesture::Spock, Gesture::Scissors, "smashes"),
    (Gesture::Spock, Gesture::Rock, "vaporizes"),
];

static RELATION: LazyLock<Relation> = LazyLock::new(|| Relation::from(WINNERS.as_slice()));

/// Immutable (winner, loser) -> verb lookup, built once per process.
#[derive(Debug, Clone)]
pub struct Relation(HashMap<(Gesture, Gesture), &'static str>);

impl Relation {
    pub fn global() -> &'static Self {
        &RELATION
    }
    /// How `winner` defeats `loser`, if it does.
    pub fn beats(&self, winner: Gesture, loser: Gesture) -> Option<&'static str> {
        self.0.get(&(winner, loser)).copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Gesture, Gesture, &'static str)> + '_ {
        self.0.iter().map(|(&(w, l), &verb)| (w, l, verb))
    }
}

impl From<&[(Gesture, Gesture, &'static str)]> for Relation {
    fn from(entries: &[(Gesture, Gesture, &'static str)]) -> Self {
        Self(
            entries
                .iter()
                .map(|&(winner, loser, verb)| ((winner, loser), verb))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_rules() {
        assert_eq!(Relation::global().len(), 10);
    }

    #[test]
    fn asymmetric() {
        let relation = Relation::global();
        for (winner, loser, _) in relation.iter() {
            assert!(relation.beats(loser, winner).is_none());
        }
    }

    #[test]
    fn every_named_pair_decided_once() {
        let relation = Relation::global();
        for a in Gesture::NAMED {
            for b in Gesture::NAMED.into_iter().filter(|b| *b != a) {
                let forward = relation.beats(a, b).is_some();
                let reverse = relation.beats(b, a).is_some();
                assert!(forward ^ reverse, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn other_beats_nothing() {
        let relation = Relation::global();
        assert!(Gesture::ALL
            .into_iter()
            .all(|g| relation.beats(Gesture::Other, g).is_none()));
        assert!(Gesture::ALL
            .into_iter()
            .all(|g| relation.beats(g, Gesture::Other).is_none()));
    }

    #[test]
    fn each_sign_beats_two() {
        let relation = Relation::global();
        for gesture in Gesture::NAMED {
            let wins = relation.iter().filter(|(w, _, _)| *w == gesture).count();
            assert_eq!(wins, 2, "{}", gesture);
        }
    }
}
