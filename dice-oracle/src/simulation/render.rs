use serde::{Deserialize, Serialize};

use crate::{rules::outcome::Outcome, simulation::state::GameState};

pub const NOT_YET_ROLLED: &str = "not yet rolled";

/// Text lines a front end needs to show one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub dice: String,
    pub result: String,
    pub total: String,
    pub banker: String,
    pub player: String,
    pub tie: String,
    pub can_revert: bool,
}

impl Scoreboard {
    pub fn new(state: &GameState, can_revert: bool) -> Self {
        let mut dice = String::new();
        render_dice(&mut dice, state).ok();
        Self {
            dice,
            result: state.result.map(|o| o.label()).unwrap_or_default().to_string(),
            total: state.total_rolls.to_string(),
            banker: summary_line(state, Outcome::Banker),
            player: summary_line(state, Outcome::Player),
            tie: summary_line(state, Outcome::Tie),
            can_revert,
        }
    }

    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        writeln!(f, "Dice:   {}", self.dice)?;
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Total:  {}", self.total)?;
        writeln!(f, "{}", self.banker)?;
        writeln!(f, "{}", self.player)?;
        write!(f, "{}", self.tie)
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.pretty_print(f)
    }
}

pub fn render_dice(f: &mut impl std::fmt::Write, state: &GameState) -> std::fmt::Result {
    if state.dice.is_empty() {
        return write!(f, "{}", NOT_YET_ROLLED);
    }
    for (i, value) in state.dice.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

/// `"<LABEL>: <count> (<streak> consecutive)"`
pub fn summary_line(state: &GameState, outcome: Outcome) -> String {
    format!(
        "{}: {} ({} consecutive)",
        outcome,
        state.count(outcome),
        state.streak(outcome)
    )
}
