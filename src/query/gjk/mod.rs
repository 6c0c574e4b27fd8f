//! The GJK algorithm for distance computation between convex proxies.

pub use self::distance::{distance, DistanceOutput, DistanceQuery, GjkDistance, GJK_MAX_ITERATIONS};
pub use self::indexed_simplex::{IndexedSimplex, SimplexVertex};
pub use self::simplex_cache::SimplexCache;

mod distance;
mod indexed_simplex;
mod simplex_cache;
