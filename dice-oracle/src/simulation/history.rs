use serde::{Deserialize, Serialize};

use crate::simulation::state::GameState;

/// Undo stack of full scoreboard snapshots, newest last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    snapshots: Vec<GameState>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an owned copy of `state`.
    pub fn snapshot(&mut self, state: &GameState) {
        self.snapshots.push(state.clone());
    }

    pub fn revert(&mut self) -> Option<GameState> {
        self.snapshots.pop()
    }

    pub fn peek(&self) -> Option<&GameState> {
        self.snapshots.last()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_revert(&self) -> bool {
        !self.is_empty()
    }
}
