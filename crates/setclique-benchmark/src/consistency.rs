//! Consistency testing between two finders.

use std::collections::BTreeSet;
use std::fmt;

use tracing::info;

use setclique_config::CollectionSpec;
use setclique_core::{CardSet, Collection, Result, SetError};
use setclique_solver::SetFinder;

/// Runs two finders on the same random collections and compares their
/// results as sets of normalised card sets.
pub struct ConsistencyTest<'a> {
    reference: &'a dyn SetFinder,
    candidate: &'a dyn SetFinder,
    spec: CollectionSpec,
    set_size: i64,
    trials: usize,
    seed: Option<u64>,
}

impl<'a> ConsistencyTest<'a> {
    pub fn new(
        reference: &'a dyn SetFinder,
        candidate: &'a dyn SetFinder,
        spec: CollectionSpec,
        set_size: i64,
        trials: usize,
    ) -> Self {
        Self {
            reference,
            candidate,
            spec,
            set_size,
            trials,
            seed: None,
        }
    }

    /// Derives trial `t`'s collection from `seed + t` instead of the OS RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs the trials, stopping at the first disagreement.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if the collection spec is
    /// invalid. A disagreement is not an error; it is reported in the
    /// outcome.
    pub fn run(&self) -> Result<ConsistencyReport> {
        info!(
            event = "consistency_start",
            reference = self.reference.name(),
            candidate = self.candidate.name(),
            trials = self.trials,
            set_size = self.set_size,
        );

        let mut report = ConsistencyReport {
            reference: self.reference.name(),
            candidate: self.candidate.name(),
            spec: self.spec,
            set_size: self.set_size,
            trials_run: 0,
            total_sets: 0,
            outcome: ConsistencyOutcome::Pass,
        };

        for trial in 0..self.trials {
            let collection = self.collection(trial)?;
            let expected = normalized(&self.reference.find_sets(&collection, self.set_size));
            let actual = normalized(&self.candidate.find_sets(&collection, self.set_size));
            report.trials_run += 1;

            if expected != actual {
                report.outcome = ConsistencyOutcome::Failure {
                    trial,
                    missing: expected.difference(&actual).count(),
                    unexpected: actual.difference(&expected).count(),
                };
                break;
            }
            report.total_sets += expected.len();
        }

        info!(
            event = "consistency_end",
            reference = report.reference,
            candidate = report.candidate,
            passed = report.passed(),
            set_count = report.average_set_count() as u64,
        );
        Ok(report)
    }

    fn collection(&self, trial: usize) -> Result<Collection> {
        let CollectionSpec {
            dimensions,
            range,
            cards,
        } = self.spec;
        match self.seed {
            Some(seed) => {
                Collection::with_seed(dimensions, range, cards, seed.wrapping_add(trial as u64))
            }
            None => Collection::new(dimensions, range, cards),
        }
    }
}

fn normalized(sets: &[CardSet]) -> BTreeSet<CardSet> {
    sets.iter().map(CardSet::normalized).collect()
}

/// How a consistency test ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyOutcome {
    /// Every trial agreed.
    Pass,
    /// The finders disagreed on `trial`.
    Failure {
        trial: usize,
        /// Sets the reference found and the candidate did not.
        missing: usize,
        /// Sets the candidate found and the reference did not.
        unexpected: usize,
    },
}

/// Summary of a consistency test.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyReport {
    pub reference: &'static str,
    pub candidate: &'static str,
    pub spec: CollectionSpec,
    pub set_size: i64,
    pub trials_run: usize,
    /// Sets found over all agreeing trials.
    pub total_sets: usize,
    pub outcome: ConsistencyOutcome,
}

impl ConsistencyReport {
    pub fn passed(&self) -> bool {
        self.outcome == ConsistencyOutcome::Pass
    }

    /// Mean sets per agreeing trial, rounded down.
    pub fn average_set_count(&self) -> usize {
        let agreeing = match self.outcome {
            ConsistencyOutcome::Pass => self.trials_run,
            ConsistencyOutcome::Failure { trial, .. } => trial,
        };
        if agreeing == 0 {
            0
        } else {
            self.total_sets / agreeing
        }
    }

    /// Converts a failed outcome into [`SetError::ConsistencyFailure`].
    pub fn into_result(self) -> Result<Self> {
        match self.outcome {
            ConsistencyOutcome::Pass => Ok(self),
            ConsistencyOutcome::Failure { trial, .. } => Err(SetError::ConsistencyFailure {
                reference: self.reference.to_string(),
                candidate: self.candidate.to_string(),
                trial,
            }),
        }
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Consistency test on finders {} and {}.",
            self.candidate, self.reference
        )?;
        writeln!(
            f,
            " {} trials, {}, {} cards per set:",
            self.trials_run, self.spec, self.set_size
        )?;
        match self.outcome {
            ConsistencyOutcome::Pass => {
                writeln!(f, " Average number of sets: {}", self.average_set_count())?;
                write!(f, " Pass")
            }
            ConsistencyOutcome::Failure {
                trial,
                missing,
                unexpected,
            } => write!(
                f,
                " FAILURE on trial {}: {} missing, {} unexpected",
                trial, missing, unexpected
            ),
        }
    }
}
