use serde::{Deserialize, Serialize};

use crate::rules::outcome::Outcome;

/// The full scoreboard after some number of rolls.
///
/// This is a plain value: cloning it yields a snapshot that shares nothing
/// with the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Faces of the most recent batch; empty before the first roll.
    pub dice: Vec<u8>,
    /// Outcome of the most recent batch.
    pub result: Option<Outcome>,
    pub total_rolls: u64,
    pub banker_count: u64,
    pub player_count: u64,
    pub tie_count: u64,
    pub consecutive_banker: u64,
    pub consecutive_player: u64,
    pub consecutive_tie: u64,
    /// Outcome of the roll before this one; only consulted to decide whether
    /// a streak continues.
    pub last_result: Option<Outcome>,
    /// Banker streak paused by the current run of ties.
    pub banker_streak_before_tie: u64,
    /// Player streak paused by the current run of ties.
    pub player_streak_before_tie: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_rolled(&self) -> bool {
        self.total_rolls > 0
    }

    pub fn count(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Banker => self.banker_count,
            Outcome::Player => self.player_count,
            Outcome::Tie => self.tie_count,
        }
    }

    pub fn count_mut(&mut self, outcome: Outcome) -> &mut u64 {
        match outcome {
            Outcome::Banker => &mut self.banker_count,
            Outcome::Player => &mut self.player_count,
            Outcome::Tie => &mut self.tie_count,
        }
    }

    pub fn streak(&self, outcome: Outcome) -> u64 {
        match outcome {
            Outcome::Banker => self.consecutive_banker,
            Outcome::Player => self.consecutive_player,
            Outcome::Tie => self.consecutive_tie,
        }
    }

    pub fn streak_mut(&mut self, outcome: Outcome) -> &mut u64 {
        match outcome {
            Outcome::Banker => &mut self.consecutive_banker,
            Outcome::Player => &mut self.consecutive_player,
            Outcome::Tie => &mut self.consecutive_tie,
        }
    }

    /// The paused streak for `side`. Ties never pause, so they report zero.
    pub fn streak_before_tie(&self, side: Outcome) -> u64 {
        match side {
            Outcome::Banker => self.banker_streak_before_tie,
            Outcome::Player => self.player_streak_before_tie,
            Outcome::Tie => 0,
        }
    }

    /// Checks the bookkeeping invariants that hold for every reachable state.
    pub fn check_invariants(&self) -> anyhow::Result<()> {
        let counted = self.banker_count + self.player_count + self.tie_count;
        if counted != self.total_rolls {
            anyhow::bail!(
                "Category counts sum to {} but {} rolls were recorded",
                counted,
                self.total_rolls
            );
        }
        if self.consecutive_banker > 0 && self.consecutive_player > 0 {
            anyhow::bail!(
                "Banker streak {} and player streak {} are both active",
                self.consecutive_banker,
                self.consecutive_player
            );
        }
        if self.result != self.last_result {
            anyhow::bail!("Displayed result and last result disagree");
        }
        if self.has_rolled() != self.result.is_some() {
            anyhow::bail!("A result is recorded if and only if a roll happened");
        }
        Ok(())
    }
}
