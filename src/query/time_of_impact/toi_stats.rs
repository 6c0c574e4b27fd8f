use crate::query::time_of_impact::{ToiOutput, ToiState, MAX_ITERATIONS};

/// A sink receiving diagnostic events from the time of impact solver.
///
/// Every method defaults to doing nothing. The recorded values are meant for
/// profiling and tuning, never for the solver's own decisions. Use `()` to
/// discard them, or [`ToiCounters`] to accumulate them.
pub trait ToiStats {
    /// A time of impact query started.
    fn record_call(&mut self) {}

    /// One iteration of the outer loop (one separating axis) completed.
    fn record_outer_iteration(&mut self) {}

    /// A root search on a separating axis used `iterations` iterations.
    fn record_root_iterations(&mut self, iterations: usize) {
        let _ = iterations;
    }

    /// A time of impact query finished after `iterations` outer iterations.
    fn record_output(&mut self, iterations: usize, output: &ToiOutput) {
        let _ = (iterations, output);
    }
}

impl ToiStats for () {}

/// Counters accumulated over many time of impact queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ToiCounters {
    /// Number of queries.
    pub calls: u64,
    /// Total number of outer iterations.
    pub iters: u64,
    /// Largest number of outer iterations of a single query.
    pub max_iters: usize,
    /// Total number of root finder iterations.
    pub root_iters: u64,
    /// Largest number of iterations of a single root search.
    pub max_root_iters: usize,
    /// Number of queries per count of outer iterations.
    pub iters_histogram: [u64; MAX_ITERATIONS + 1],
    /// Number of queries that ended with each [`ToiState`], indexed by
    /// [`ToiCounters::state_index`].
    pub outcomes: [u64; 5],
}

impl Default for ToiCounters {
    fn default() -> Self {
        Self {
            calls: 0,
            iters: 0,
            max_iters: 0,
            root_iters: 0,
            max_root_iters: 0,
            iters_histogram: [0; MAX_ITERATIONS + 1],
            outcomes: [0; 5],
        }
    }
}

impl ToiCounters {
    /// Counters with every value set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets every counter back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The slot of `state` in [`ToiCounters::outcomes`].
    pub fn state_index(state: ToiState) -> usize {
        match state {
            ToiState::Unknown => 0,
            ToiState::Failed => 1,
            ToiState::Overlapped => 2,
            ToiState::Touching => 3,
            ToiState::Separated => 4,
        }
    }

    /// Number of queries that ended with the given state.
    pub fn outcome_count(&self, state: ToiState) -> u64 {
        self.outcomes[Self::state_index(state)]
    }
}

impl ToiStats for ToiCounters {
    fn record_call(&mut self) {
        self.calls += 1;
    }

    fn record_outer_iteration(&mut self) {
        self.iters += 1;
    }

    fn record_root_iterations(&mut self, iterations: usize) {
        self.root_iters += iterations as u64;
        self.max_root_iters = self.max_root_iters.max(iterations);
    }

    fn record_output(&mut self, iterations: usize, output: &ToiOutput) {
        self.max_iters = self.max_iters.max(iterations);
        self.iters_histogram[iterations.min(MAX_ITERATIONS)] += 1;
        self.outcomes[Self::state_index(output.state)] += 1;
    }
}
