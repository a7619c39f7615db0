//! Bounded, append-only run log
//!
//! Holds the runs of one session in a fixed-capacity `heapless::Vec`, so it
//! works without an allocator. Unlike a ring buffer it never drops old
//! runs: once full, appends fail and the caller decides what to do.
//!
//! Records are checked on the way in; a run with a NaN or infinite field
//! is refused so every stored run is usable by the analysis stage.

use heapless::Vec;

use crate::{
    constants::buffers::DEFAULT_RUN_LOG_CAPACITY,
    errors::{PhysicsError, PhysicsResult},
    measurement::RunMeasurement,
};

/// Session log of runs, oldest first
#[derive(Debug, Clone, Default)]
pub struct RunLog<const N: usize = DEFAULT_RUN_LOG_CAPACITY> {
    runs: Vec<RunMeasurement, N>,
}

impl<const N: usize> RunLog<N> {
    /// Empty log
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Append a run, returning the new run count
    pub fn append(&mut self, run: RunMeasurement) -> PhysicsResult<usize> {
        if !run.is_finite() {
            log_warn!("Run at {} refused: non-finite field", run.timestamp);
            return Err(PhysicsError::InvalidValue { quantity: "run measurement" });
        }

        self.runs.push(run).map_err(|_| {
            log_warn!("Run log full ({} runs)", N);
            PhysicsError::LogFull { capacity: N }
        })?;

        Ok(self.runs.len())
    }

    /// All runs, oldest first
    pub fn runs(&self) -> &[RunMeasurement] {
        &self.runs
    }

    /// Most recent run
    pub fn last(&self) -> Option<&RunMeasurement> {
        self.runs.last()
    }

    /// Iterate over runs, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &RunMeasurement> {
        self.runs.iter()
    }

    /// Estimated charges, oldest first (C)
    pub fn charges(&self) -> impl Iterator<Item = f64> + '_ {
        self.runs.iter().map(|run| run.charge)
    }

    /// Number of stored runs
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// No runs stored
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Maximum number of runs
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Drop every run
    pub fn clear(&mut self) {
        self.runs.clear();
    }
}

impl<'a, const N: usize> IntoIterator for &'a RunLog<N> {
    type Item = &'a RunMeasurement;
    type IntoIter = core::slice::Iter<'a, RunMeasurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
