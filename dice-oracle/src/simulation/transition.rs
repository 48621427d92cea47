use crate::{
    rules::{batch::Batch, outcome::Outcome},
    simulation::state::GameState,
};

/// Applies one batch to `state`, producing the next scoreboard.
///
/// This is the only place streak bookkeeping happens, and it is a pure
/// function: the input state is left untouched.
///
/// A run of ties pauses a banker or player streak rather than breaking it.
/// If the same side wins straight after the ties, the paused streak resumes
/// and grows by one. If the other side wins instead, the paused value is
/// dropped for good.
pub fn advance(state: &GameState, batch: &Batch) -> GameState {
    let mut next = state.clone();
    let outcome = batch.outcome();

    next.total_rolls += 1;
    *next.count_mut(outcome) += 1;

    match outcome.opponent() {
        None => {
            next.consecutive_tie += 1;
            if state.last_result != Some(Outcome::Tie) {
                next.banker_streak_before_tie = state.consecutive_banker;
                next.player_streak_before_tie = state.consecutive_player;
            }
        }
        Some(opponent) => {
            next.consecutive_tie = 0;
            *next.streak_mut(opponent) = 0;
            *next.streak_mut(outcome) = match state.last_result {
                Some(last) if last == outcome => state.streak(outcome) + 1,
                Some(Outcome::Tie) => state.streak_before_tie(outcome) + 1,
                _ => 1,
            };
            // Both sides are cleared, not only the winner's.
            next.banker_streak_before_tie = 0;
            next.player_streak_before_tie = 0;
        }
    }

    next.last_result = Some(outcome);
    next.dice = batch.values().to_vec();
    next.result = Some(outcome);
    next
}

/// Folds a sequence of batches into a state, starting from `state`.
pub fn replay<'a>(state: &GameState, batches: impl IntoIterator<Item = &'a Batch>) -> GameState {
    batches
        .into_iter()
        .fold(state.clone(), |acc, batch| advance(&acc, batch))
}
