use serde::{Deserialize, Serialize};
use statrs::distribution::{Binomial, Discrete};

use crate::{
    rules::{batch::DICE_PER_BATCH, outcome::Outcome},
    simulation::state::GameState,
};

/// Chance that a batch of fair dice lands on `outcome`.
///
/// Each face is odd with probability one half, so the odd count is
/// Binomial(30, 0.5) and a tie is the event of exactly 15 odd faces.
pub fn outcome_probability(outcome: Outcome) -> anyhow::Result<f64> {
    let odd_faces = Binomial::new(0.5, DICE_PER_BATCH as u64)?;
    let tie = odd_faces.pmf((DICE_PER_BATCH / 2) as u64);
    Ok(match outcome {
        Outcome::Tie => tie,
        Outcome::Banker | Outcome::Player => (1.0 - tie) / 2.0,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeOdds {
    pub outcome: Outcome,
    pub observed: u64,
    pub observed_frequency: f64,
    pub expected_frequency: f64,
}

/// Observed outcome frequencies of a scoreboard next to the fair-dice odds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsReport {
    pub total_rolls: u64,
    pub outcomes: Vec<OutcomeOdds>,
}

impl OddsReport {
    pub fn from_state(state: &GameState) -> anyhow::Result<Self> {
        let outcomes = Outcome::ALL
            .into_iter()
            .map(|outcome| {
                let observed = state.count(outcome);
                let observed_frequency = if state.total_rolls > 0 {
                    observed as f64 / state.total_rolls as f64
                } else {
                    0.0
                };
                Ok(OutcomeOdds {
                    outcome,
                    observed,
                    observed_frequency,
                    expected_frequency: outcome_probability(outcome)?,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            total_rolls: state.total_rolls,
            outcomes,
        })
    }

    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        write!(f, "Odds over {} rolls:", self.total_rolls)?;
        for odds in &self.outcomes {
            write!(
                f,
                "\n  {:<6} {:>6} seen {:>6.2}% expected {:>6.2}%",
                odds.outcome.label(),
                odds.observed,
                odds.observed_frequency * 100.0,
                odds.expected_frequency * 100.0
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        rules::batch::Batch,
        simulation::transition::advance,
        statistics::roller::Roller,
    };

    #[test]
    fn test_probabilities_sum_to_one() {
        let total: f64 = Outcome::ALL
            .into_iter()
            .map(|o| outcome_probability(o).unwrap())
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_probability() {
        // C(30, 15) / 2^30
        let expected = 155_117_520.0 / 1_073_741_824.0;
        let tie = outcome_probability(Outcome::Tie).unwrap();
        assert!((tie - expected).abs() < 1e-9);
        assert_eq!(
            outcome_probability(Outcome::Banker).unwrap(),
            outcome_probability(Outcome::Player).unwrap()
        );
    }

    #[test]
    fn test_report_on_blank_state() {
        let report = OddsReport::from_state(&GameState::new()).unwrap();
        assert_eq!(report.total_rolls, 0);
        assert_eq!(report.outcomes.len(), 3);
        assert!(report.outcomes.iter().all(|o| o.observed_frequency == 0.0));
    }

    #[test]
    fn test_observed_frequencies_converge() {
        let mut rng = Roller::test_rng();
        let mut state = GameState::new();
        for _ in 0..20000 {
            state = advance(&state, &Batch::roll(&mut rng));
        }
        let report = OddsReport::from_state(&state).unwrap();
        for odds in &report.outcomes {
            assert!(
                (odds.observed_frequency - odds.expected_frequency).abs() < 0.02,
                "{:?}",
                odds
            );
        }
        let mut buf = String::new();
        report.pretty_print(&mut buf).unwrap();
        assert!(buf.starts_with("Odds over 20000 rolls:"));
        assert_eq!(buf.lines().count(), 4);
    }
}
