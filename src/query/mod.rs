//! Non-persistent geometric queries.
//!
//! The main entry point of this module is [`time_of_impact()`], which
//! determines when two convex proxies undergoing rigid motions come into
//! contact for the first time. [`TimeOfImpact`] exposes the same solver with
//! custom [`Settings`](crate::Settings), a custom [`DistanceQuery`], or a
//! [`ToiStats`] sink collecting diagnostics.
//!
//! The closest-points queries consumed by the solver live in the [`gjk`] module.

pub use self::gjk::{distance, DistanceOutput, DistanceQuery, GjkDistance, SimplexCache};
pub use self::time_of_impact::{
    time_of_impact, SeparatingAxis, SeparationError, SeparationFunction, SeparationKind,
    TimeOfImpact, ToiCounters, ToiInput, ToiOutput, ToiState, ToiStats, WitnessIds,
    MAX_ITERATIONS, MAX_ROOT_ITERATIONS,
};

pub mod gjk;
pub mod time_of_impact;
