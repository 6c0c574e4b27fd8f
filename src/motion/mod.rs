//! Rigid motions sampled by the continuous collision detection queries.

pub use self::sweep::Sweep;

mod sweep;
