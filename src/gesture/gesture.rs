use rand::Rng;
use rand::seq::IndexedRandom;

/// One of the six hand signs the classifier can recognise.
/// `Other` covers everything that is not a valid sign.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
    #[default]
    Other,
}

impl Gesture {
    pub const ALL: [Self; 6] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Lizard,
        Self::Spock,
        Self::Other,
    ];
    /// Signs the computer may throw.
    pub const NAMED: [Self; 5] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Lizard,
        Self::Spock,
    ];
    /// Network output order. Classes were trained from alphabetically
    /// sorted image folders, so index i of the logits maps to CATEGORIES[i].
    pub const CATEGORIES: [Self; 6] = [
        Self::Lizard,
        Self::Other,
        Self::Paper,
        Self::Rock,
        Self::Scissors,
        Self::Spock,
    ];

    /// Gesture for a network class index.
    pub fn category(index: usize) -> Option<Self> {
        Self::CATEGORIES.get(index).copied()
    }
    /// Draws a named sign uniformly. Never returns `Other`.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::NAMED.choose(rng).expect("named gestures are non-empty")
    }
    pub fn is_named(&self) -> bool {
        !matches!(self, Self::Other)
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
            Self::Lizard => "lizard",
            Self::Spock => "spock",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for Gesture {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown gesture '{}'", s))
    }
}

impl std::str::FromStr for Gesture {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn parse_names() {
        for gesture in Gesture::ALL {
            assert_eq!(Gesture::try_from(gesture.name()), Ok(gesture));
        }
        assert_eq!(Gesture::try_from(" Spock "), Ok(Gesture::Spock));
        assert!(Gesture::try_from("dynamite").is_err());
    }

    #[test]
    fn categories_cover_every_gesture() {
        let mut sorted = Gesture::CATEGORIES.to_vec();
        sorted.sort();
        assert_eq!(sorted, Gesture::ALL.to_vec());
        assert_eq!(Gesture::category(3), Some(Gesture::Rock));
        assert_eq!(Gesture::category(6), None);
    }

    #[test]
    fn computer_never_throws_other() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        assert!((0..1000).map(|_| Gesture::sample(rng)).all(|g| g.is_named()));
    }

    #[test]
    fn computer_throws_every_named_sign() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let seen = (0..1000)
            .map(|_| Gesture::sample(rng))
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(seen.len(), Gesture::NAMED.len());
    }
}
