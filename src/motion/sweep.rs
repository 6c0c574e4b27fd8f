use crate::math::{Isometry, Point, Real, Rotation, Translation};
use na::{ComplexField, RealField};

/// The motion of a rigid body over the normalized time interval `[alpha0, 1]`.
///
/// The center of mass is interpolated linearly between `c0` and `c` and the
/// orientation angle between `a0` and `a`. The body origin is recovered from
/// the center of mass through `local_center`, so a body spinning around its
/// center of mass does not drift.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Sweep {
    /// The local-space center of mass.
    pub local_center: Point<Real>,
    /// The world-space center of mass at `alpha0`.
    pub c0: Point<Real>,
    /// The world-space center of mass at the end of the step.
    pub c: Point<Real>,
    /// The orientation angle at `alpha0`.
    pub a0: Real,
    /// The orientation angle at the end of the step.
    pub a: Real,
    /// Fraction of the current time step in the range `[0, 1)`.
    ///
    /// `c0` and `a0` are the positions at `alpha0`.
    pub alpha0: Real,
}

impl Sweep {
    /// Initializes a sweep moving the center of mass from `c0` to `c` while
    /// rotating from the angle `a0` to `a`.
    pub fn new(local_center: Point<Real>, c0: Point<Real>, c: Point<Real>, a0: Real, a: Real) -> Self {
        Self {
            local_center,
            c0,
            c,
            a0,
            a,
            alpha0: 0.0,
        }
    }

    /// A sweep that does not move, with its center of mass at `center`.
    pub fn stationary(center: Point<Real>, angle: Real) -> Self {
        Self::new(Point::origin(), center, center, angle, angle)
    }

    /// The transform of the body at the fraction `beta` of this sweep.
    ///
    /// `beta = 0` gives the configuration at `alpha0`, `beta = 1` the final one.
    #[inline]
    pub fn transform_at(&self, beta: Real) -> Isometry<Real> {
        let center = self.c0 + (self.c - self.c0) * beta;
        let angle = self.a0 + (self.a - self.a0) * beta;
        let rotation = Rotation::new(angle);

        // Shift to origin.
        let origin = center - rotation * self.local_center.coords;
        Isometry::from_parts(Translation::from(origin.coords), rotation)
    }

    /// Advances the start of this sweep forward in time, yielding a new initial state.
    ///
    /// `alpha` is the new initial time and must lie in `[alpha0, 1]`.
    pub fn advance(&mut self, alpha: Real) {
        assert!(self.alpha0 < 1.0, "Cannot advance a sweep that already ended.");
        let beta = (alpha - self.alpha0) / (1.0 - self.alpha0);
        self.c0 += (self.c - self.c0) * beta;
        self.a0 += (self.a - self.a0) * beta;
        self.alpha0 = alpha;
    }

    /// Normalizes the angles so that `a0` lies in `[0, 2π)`.
    ///
    /// Large accumulated rotations make the time of impact root finder fail.
    pub fn normalize(&mut self) {
        let two_pi = Real::two_pi();
        let d = two_pi * ComplexField::floor(self.a0 / two_pi);
        self.a0 -= d;
        self.a -= d;
    }
}
