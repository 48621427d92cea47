pub mod batch;
pub mod outcome;
