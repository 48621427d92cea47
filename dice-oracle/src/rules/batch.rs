use serde::{Deserialize, Serialize};

use crate::{
    rules::outcome::Outcome,
    statistics::roller::{DIE_FACES, DieSource},
};

pub const DICE_PER_BATCH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("a batch holds exactly 30 dice, got {0}")]
    WrongLength(usize),
    #[error("die face {value} at position {index} is outside 1..=6")]
    FaceOutOfRange { index: usize, value: u8 },
    #[error("cannot place {0} odd faces in a batch of 30 dice")]
    OddCountOutOfRange(usize),
}

/// One roll of the full set of dice, together with its classification.
///
/// Serialized as the bare list of faces; deserializing re-validates them and
/// recomputes the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Batch {
    values: Vec<u8>,
    outcome: Outcome,
}

impl Batch {
    pub fn roll(source: &mut impl DieSource) -> Self {
        let values: Vec<u8> = (0..DICE_PER_BATCH).map(|_| source.roll_die()).collect();
        let outcome = Outcome::classify(&values);
        Self { values, outcome }
    }

    pub fn from_values(values: Vec<u8>) -> Result<Self, BatchError> {
        if values.len() != DICE_PER_BATCH {
            return Err(BatchError::WrongLength(values.len()));
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|&(_, v)| !(1..=DIE_FACES).contains(v))
        {
            return Err(BatchError::FaceOutOfRange { index, value });
        }
        let outcome = Outcome::classify(&values);
        Ok(Self { values, outcome })
    }

    /// Builds a batch with the given number of odd faces. The remaining
    /// faces are even.
    pub fn with_odd_count(odd_count: usize) -> Result<Self, BatchError> {
        if odd_count > DICE_PER_BATCH {
            return Err(BatchError::OddCountOutOfRange(odd_count));
        }
        let mut values = Vec::with_capacity(DICE_PER_BATCH);
        values.extend((0..odd_count).map(|i| [1, 3, 5][i % 3]));
        values.extend((0..DICE_PER_BATCH - odd_count).map(|i| [2, 4, 6][i % 3]));
        Self::from_values(values)
    }

    /// A representative batch for the given outcome.
    pub fn for_outcome(outcome: Outcome) -> Self {
        let odd_count = match outcome {
            Outcome::Banker => DICE_PER_BATCH / 2 + 1,
            Outcome::Player => DICE_PER_BATCH / 2 - 1,
            Outcome::Tie => DICE_PER_BATCH / 2,
        };
        let values = (0..DICE_PER_BATCH)
            .map(|i| if i < odd_count { 1 } else { 2 })
            .collect();
        Self { values, outcome }
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn odd_count(&self) -> usize {
        self.values.iter().filter(|&&v| v % 2 == 1).count()
    }

    pub fn even_count(&self) -> usize {
        self.values.len() - self.odd_count()
    }
}

impl TryFrom<Vec<u8>> for Batch {
    type Error = BatchError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<Batch> for Vec<u8> {
    fn from(batch: Batch) -> Self {
        batch.values
    }
}
