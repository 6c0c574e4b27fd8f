//! Convex shapes as seen by the distance and time of impact queries.

pub use self::distance_proxy::{DistanceProxy, ProxyError};

mod distance_proxy;
