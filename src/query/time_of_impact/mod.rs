//! Time of impact between two convex proxies undergoing rigid motions.

pub use self::separation_function::{
    SeparatingAxis, SeparationError, SeparationFunction, SeparationKind, WitnessIds,
};
pub use self::time_of_impact::{
    time_of_impact, TimeOfImpact, ToiInput, ToiOutput, ToiState, MAX_ITERATIONS,
    MAX_ROOT_ITERATIONS,
};
pub use self::toi_stats::{ToiCounters, ToiStats};

mod separation_function;
mod time_of_impact;
mod toi_stats;
