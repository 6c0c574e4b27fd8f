//! Global tuning parameters consumed by the time-of-impact solver.

use crate::math::Real;

/// Error returned when a [`Settings`] cannot be used by the time-of-impact solver.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SettingsError {
    /// The linear slop must be finite and strictly positive, otherwise the
    /// separation targeted by the solver cannot be told apart from its tolerance.
    #[error("the linear slop must be finite and strictly positive, found {0}.")]
    InvalidLinearSlop(Real),
    /// At least one push-back iteration is needed per separating axis.
    #[error("the maximum number of polygon vertices must be at least 1, found {0}.")]
    InvalidMaxPolygonVertices(usize),
}

/// Engine-wide tuning constants.
///
/// These are owned by the physics engine rather than by the collision
/// detection core, but their values directly drive the time-of-impact
/// tolerances and iteration bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Settings {
    /// A small length used as a collision and constraint tolerance.
    ///
    /// Usually chosen to be numerically significant, but visually insignificant.
    pub linear_slop: Real,
    /// The maximum number of vertices on a convex polygon.
    ///
    /// Bounds the number of times the solver pushes back the deepest point on a
    /// single separating axis.
    pub max_polygon_vertices: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            linear_slop: 0.005,
            max_polygon_vertices: 8,
        }
    }
}

impl Settings {
    /// The radius of the polygon/edge shape skin.
    ///
    /// This should not be modified. Making this smaller means polygons will
    /// have an insufficient buffer for continuous collision. Making it larger
    /// may create artifacts for vertex collision.
    #[inline]
    pub fn polygon_radius(&self) -> Real {
        2.0 * self.linear_slop
    }

    /// Checks that these settings can be used by the time-of-impact solver.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.linear_slop.is_finite() || self.linear_slop <= 0.0 {
            return Err(SettingsError::InvalidLinearSlop(self.linear_slop));
        }

        if self.max_polygon_vertices == 0 {
            return Err(SettingsError::InvalidMaxPolygonVertices(
                self.max_polygon_vertices,
            ));
        }

        Ok(())
    }
}
