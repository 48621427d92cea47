use serde::{Deserialize, Serialize};

use crate::{
    rules::batch::Batch,
    simulation::{
        history::History,
        logging::{LogEntry, SessionLog},
        state::GameState,
        transition,
    },
    statistics::roller::DieSource,
    utils::ProtectedCell,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("there is no earlier state to go back to")]
    NoHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fresh or just reset: blank scoreboard and nothing to undo.
    Initial,
    InProgress,
}

/// Owns the live scoreboard, its undo stack and the dice.
///
/// Callers drive it one operation at a time and render whatever state each
/// operation hands back.
#[derive(Debug)]
pub struct Session<S> {
    source: S,
    state: ProtectedCell<GameState>,
    history: History,
    log: SessionLog,
}

impl<S: DieSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ProtectedCell::new(GameState::new()),
            history: History::new(),
            log: SessionLog::default(),
        }
    }

    /// Rolls a fresh batch and folds it into the scoreboard.
    pub fn advance(&mut self) -> &GameState {
        let batch = Batch::roll(&mut self.source);
        self.advance_with(batch)
    }

    /// Folds a known batch into the scoreboard, recording an undo point
    /// exactly as [`Session::advance`] does.
    pub fn advance_with(&mut self, batch: Batch) -> &GameState {
        self.history.snapshot(&self.state);
        let next = transition::advance(&self.state, &batch);
        ProtectedCell::replace(&mut self.state, next);
        self.log.log(
            LogEntry::Rolled {
                outcome: batch.outcome(),
                odd_count: batch.odd_count(),
            },
            &self.state,
        );
        &self.state
    }

    /// Restores the state from before the most recent roll.
    ///
    /// With nothing to undo this returns [`SessionError::NoHistory`] and the
    /// live state stays as it was.
    pub fn revert(&mut self) -> Result<&GameState, SessionError> {
        let Some(previous) = self.history.revert() else {
            self.log.log(LogEntry::RevertRejected, &self.state);
            return Err(SessionError::NoHistory);
        };
        ProtectedCell::replace(&mut self.state, previous);
        self.log.log(
            LogEntry::Reverted {
                restored_rolls: self.state.total_rolls,
            },
            &self.state,
        );
        Ok(&self.state)
    }

    pub fn reset(&mut self) -> &GameState {
        let discarded_snapshots = self.history.len();
        self.history.clear();
        ProtectedCell::replace(&mut self.state, GameState::new());
        self.log.log(
            LogEntry::Reset {
                discarded_snapshots,
            },
            &self.state,
        );
        &self.state
    }
}

impl<S> Session<S> {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_revert(&self) -> bool {
        self.history.can_revert()
    }

    pub fn phase(&self) -> Phase {
        if self.history.is_empty() && *self.state == GameState::default() {
            Phase::Initial
        } else {
            Phase::InProgress
        }
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn take_log(&mut self) -> SessionLog {
        std::mem::take(&mut self.log)
    }

    pub fn save_log(&self, path: &std::path::Path) -> anyhow::Result<()> {
        self.log.save(path)
    }
}
