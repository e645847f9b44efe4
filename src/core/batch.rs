//! Result-per-participant batch runner.
//!
//! Every participant gets an outcome; a failure is recorded and reported,
//! never propagated to the rest of the batch.

use crate::errors::{AppError, AppResult};
use crate::models::ParticipantId;
use crate::ui::messages::warning;

pub struct BatchReport<T> {
    outcomes: Vec<(ParticipantId, AppResult<T>)>,
}

impl<T> BatchReport<T> {
    /// Run `job` for each participant in order, logging skipped ones.
    pub fn run<I, F>(participants: I, mut job: F) -> Self
    where
        I: IntoIterator<Item = ParticipantId>,
        F: FnMut(&ParticipantId) -> AppResult<T>,
    {
        let outcomes = participants
            .into_iter()
            .map(|id| {
                let outcome = job(&id);
                if let Err(e) = &outcome {
                    warning(format!("Skipped {id} due to error: {e}"));
                }
                (id, outcome)
            })
            .collect();

        Self { outcomes }
    }

    pub fn successes(&self) -> impl Iterator<Item = (&ParticipantId, &T)> {
        self.outcomes
            .iter()
            .filter_map(|(id, r)| r.as_ref().ok().map(|v| (id, v)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ParticipantId, &AppError)> {
        self.outcomes
            .iter()
            .filter_map(|(id, r)| r.as_ref().err().map(|e| (id, e)))
    }

    pub fn processed(&self) -> usize {
        self.successes().count()
    }

    pub fn skipped(&self) -> usize {
        self.failures().count()
    }

    pub fn into_successes(self) -> Vec<(ParticipantId, T)> {
        self.outcomes
            .into_iter()
            .filter_map(|(id, r)| r.ok().map(|v| (id, v)))
            .collect()
    }
}
