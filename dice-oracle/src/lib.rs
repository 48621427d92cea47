pub mod rules;
pub mod simulation;
pub mod statistics;
pub mod utils;

pub mod prelude {
    pub use crate::{
        rules::{
            batch::{Batch, BatchError, DICE_PER_BATCH},
            outcome::Outcome,
        },
        simulation::{
            history::History,
            logging::{LogEntry, LogRecord, SessionLog},
            render::{NOT_YET_ROLLED, Scoreboard, summary_line},
            session::{Phase, Session, SessionError},
            state::GameState,
            transition::{advance, replay},
        },
        statistics::{
            odds::{OddsReport, OutcomeOdds, outcome_probability},
            roller::{DieSource, Roller, ScriptedRoller},
        },
    };
}
