use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Classification of a batch by the parity majority of its faces.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Outcome {
    /// More odd faces than even.
    #[display("BANKER")]
    Banker,
    /// More even faces than odd.
    #[display("PLAYER")]
    Player,
    #[display("TIE")]
    Tie,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Banker, Outcome::Player, Outcome::Tie];

    pub fn from_parity(odd_count: usize, even_count: usize) -> Self {
        match odd_count.cmp(&even_count) {
            std::cmp::Ordering::Greater => Outcome::Banker,
            std::cmp::Ordering::Less => Outcome::Player,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    pub fn classify(values: &[u8]) -> Self {
        let odd_count = values.iter().filter(|&&v| v % 2 == 1).count();
        Self::from_parity(odd_count, values.len() - odd_count)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Banker => "BANKER",
            Outcome::Player => "PLAYER",
            Outcome::Tie => "TIE",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Outcome::Banker => "🏦",
            Outcome::Player => "🧑",
            Outcome::Tie => "🤝",
        }
    }

    /// The side a win for this outcome interrupts. Ties have none.
    pub fn opponent(&self) -> Option<Outcome> {
        match self {
            Outcome::Banker => Some(Outcome::Player),
            Outcome::Player => Some(Outcome::Banker),
            Outcome::Tie => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_with_odds(odd_count: usize) -> Vec<u8> {
        let mut values = vec![1u8; odd_count];
        values.extend(std::iter::repeat_n(2u8, 30 - odd_count));
        values
    }

    #[test]
    fn test_classify_majorities() {
        assert_eq!(Outcome::classify(&batch_with_odds(16)), Outcome::Banker);
        assert_eq!(Outcome::classify(&batch_with_odds(14)), Outcome::Player);
        assert_eq!(Outcome::classify(&batch_with_odds(15)), Outcome::Tie);
        assert_eq!(Outcome::classify(&batch_with_odds(30)), Outcome::Banker);
        assert_eq!(Outcome::classify(&batch_with_odds(0)), Outcome::Player);
    }

    #[test]
    fn test_classify_ignores_face_values_beyond_parity() {
        let low: Vec<u8> = [1, 2].repeat(15);
        let high: Vec<u8> = [5, 6].repeat(15);
        assert_eq!(Outcome::classify(&low), Outcome::classify(&high));
        assert_eq!(Outcome::classify(&low), Outcome::Tie);
    }

    #[test]
    fn test_display_matches_label() {
        for outcome in Outcome::ALL {
            assert_eq!(outcome.to_string(), outcome.label());
        }
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Outcome::Banker.opponent(), Some(Outcome::Player));
        assert_eq!(Outcome::Player.opponent(), Some(Outcome::Banker));
        assert_eq!(Outcome::Tie.opponent(), None);
    }
}
