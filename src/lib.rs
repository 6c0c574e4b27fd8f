/*!
ccd2d
========

**ccd2d** is the continuous collision detection core of a 2-dimensional
rigid-body physics engine, written with the rust programming language.

Given the swept motion of two convex shapes over a normalized time interval,
it computes the largest fraction of that interval during which the shapes stay
separated, so fast bodies do not tunnel through thin obstacles between two
discrete simulation steps.

```
# #[cfg(feature = "f32")] {
use ccd2d::math::Point;
use ccd2d::motion::Sweep;
use ccd2d::query::{time_of_impact, ToiInput, ToiState};
use ccd2d::shape::DistanceProxy;

let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
let input = ToiInput {
    proxy_a: &ball,
    proxy_b: &ball,
    sweep_a: Sweep::new(Point::origin(), Point::new(0.0, 0.0), Point::new(6.0, 0.0), 0.0, 0.0),
    sweep_b: Sweep::new(Point::origin(), Point::new(10.0, 0.0), Point::new(4.0, 0.0), 0.0, 0.0),
    t_max: 1.0,
};

let output = time_of_impact(&input);
assert_eq!(output.state, ToiState::Touching);
assert!(output.t > 0.0 && output.t < 1.0);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod motion;
pub mod query;
pub mod settings;
pub mod shape;
pub mod utils;

pub use self::settings::{Settings, SettingsError};

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Point2, Translation2, UnitComplex, UnitVector2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitComplex<N>;

    /// The translation type.
    pub use Translation2 as Translation;
}
