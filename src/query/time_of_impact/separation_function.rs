use crate::math::{Isometry, Point, Real, UnitVector};
use crate::motion::Sweep;
use crate::query::gjk::SimplexCache;
use crate::shape::DistanceProxy;
use crate::utils;
use na::Unit;

/// Error returned when a [`SeparationFunction`] cannot be derived from a simplex cache.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeparationError {
    /// The cache must describe a vertex-vertex or vertex-edge configuration.
    #[error("the simplex cache must hold one or two vertices, found {0}.")]
    InvalidCacheCount(usize),
    /// The cache references a vertex that does not exist on its proxy.
    #[error("the simplex cache references the vertex {0} which is out of bounds.")]
    InvalidCacheIndex(usize),
    /// The witness points coincide, or the witness edge has a zero length.
    #[error("the cached witness features do not define a separating axis.")]
    DegenerateAxis,
}

/// The type of axis tracked by a [`SeparationFunction`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SeparatingAxis {
    /// The axis joins one witness point on each proxy.
    Points {
        /// The world-space axis, oriented from the first proxy toward the second.
        axis: UnitVector<Real>,
    },
    /// The axis is the normal of an edge of the first proxy.
    FaceA {
        /// The edge normal, in the local-space of the first proxy, pointing toward the second.
        local_normal: UnitVector<Real>,
        /// The edge midpoint, in the local-space of the first proxy.
        local_point: Point<Real>,
    },
    /// The axis is the normal of an edge of the second proxy.
    FaceB {
        /// The edge normal, in the local-space of the second proxy, pointing toward the first.
        local_normal: UnitVector<Real>,
        /// The edge midpoint, in the local-space of the second proxy.
        local_point: Point<Real>,
    },
}

/// The configuration a [`SeparatingAxis`] was derived from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SeparationKind {
    /// One witness point on each proxy.
    Points,
    /// An edge of the first proxy.
    FaceA,
    /// An edge of the second proxy.
    FaceB,
}

impl SeparatingAxis {
    /// The configuration this axis was derived from.
    pub fn kind(&self) -> SeparationKind {
        match self {
            SeparatingAxis::Points { .. } => SeparationKind::Points,
            SeparatingAxis::FaceA { .. } => SeparationKind::FaceA,
            SeparatingAxis::FaceB { .. } => SeparationKind::FaceB,
        }
    }
}

/// The vertices tracked while searching for the time of impact on a fixed axis.
///
/// The side holding the face of a face axis has no witness vertex.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WitnessIds {
    /// Witness vertex of the first proxy.
    pub a: Option<usize>,
    /// Witness vertex of the second proxy.
    pub b: Option<usize>,
}

/// A separating axis fixed at some time, evaluated at other times of the sweeps.
///
/// Freezing the axis lets the time of impact solver search the separation along
/// the sweeps without running a full distance query at every trial time.
#[derive(Copy, Clone, Debug)]
pub struct SeparationFunction<'a> {
    proxy_a: &'a DistanceProxy,
    proxy_b: &'a DistanceProxy,
    sweep_a: &'a Sweep,
    sweep_b: &'a Sweep,
    axis: SeparatingAxis,
}

impl<'a> SeparationFunction<'a> {
    /// Derives a separating axis from the witness features stored in `cache`
    /// by a distance query performed at time `t1`.
    ///
    /// Returns the separation function together with the separation along its
    /// axis at `t1`.
    pub fn new(
        cache: &SimplexCache,
        proxy_a: &'a DistanceProxy,
        sweep_a: &'a Sweep,
        proxy_b: &'a DistanceProxy,
        sweep_b: &'a Sweep,
        t1: Real,
    ) -> Result<(Self, Real), SeparationError> {
        let count = cache.count;
        if count == 0 || count > 2 {
            return Err(SeparationError::InvalidCacheCount(count));
        }

        if let Some(i) = cache.indices_a().iter().find(|i| **i >= proxy_a.len()) {
            return Err(SeparationError::InvalidCacheIndex(*i));
        }

        if let Some(i) = cache.indices_b().iter().find(|i| **i >= proxy_b.len()) {
            return Err(SeparationError::InvalidCacheIndex(*i));
        }

        let xf_a = sweep_a.transform_at(t1);
        let xf_b = sweep_b.transform_at(t1);

        let (axis, separation) = if count == 1 {
            let point_a = xf_a * proxy_a.vertex(cache.index_a[0]);
            let point_b = xf_b * proxy_b.vertex(cache.index_b[0]);
            let (axis, separation) =
                Unit::try_new_and_get(point_b - point_a, crate::math::DEFAULT_EPSILON)
                    .ok_or(SeparationError::DegenerateAxis)?;

            (SeparatingAxis::Points { axis }, separation)
        } else if cache.index_a[0] == cache.index_a[1] {
            // Two points on B and one on A.
            let (local_normal, local_point, separation) = face_axis(
                proxy_b,
                &xf_b,
                [cache.index_b[0], cache.index_b[1]],
                proxy_a.vertex(cache.index_a[0]),
                &xf_a,
            )?;

            (
                SeparatingAxis::FaceB {
                    local_normal,
                    local_point,
                },
                separation,
            )
        } else {
            // Two points on A and one or two points on B.
            let (local_normal, local_point, separation) = face_axis(
                proxy_a,
                &xf_a,
                [cache.index_a[0], cache.index_a[1]],
                proxy_b.vertex(cache.index_b[0]),
                &xf_b,
            )?;

            (
                SeparatingAxis::FaceA {
                    local_normal,
                    local_point,
                },
                separation,
            )
        };

        let result = Self {
            proxy_a,
            proxy_b,
            sweep_a,
            sweep_b,
            axis,
        };

        Ok((result, separation))
    }

    /// The axis tracked by this separation function.
    #[inline]
    pub fn axis(&self) -> &SeparatingAxis {
        &self.axis
    }

    /// The configuration the axis of this separation function was derived from.
    #[inline]
    pub fn kind(&self) -> SeparationKind {
        self.axis.kind()
    }

    /// Finds the deepest points along the separating axis at time `t`.
    ///
    /// The face (or the fixed axis) is held constant while the support points
    /// of the other proxy are re-derived, yielding the minimum separation
    /// achievable at `t`. Returns that separation and the witness vertices.
    pub fn find_min_separation(&self, t: Real) -> (Real, WitnessIds) {
        let xf_a = self.sweep_a.transform_at(t);
        let xf_b = self.sweep_b.transform_at(t);

        match &self.axis {
            SeparatingAxis::Points { axis } => {
                let axis_a = xf_a.inverse_transform_vector(axis);
                let axis_b = xf_b.inverse_transform_vector(&-axis.into_inner());

                let index_a = self.proxy_a.support(&axis_a);
                let index_b = self.proxy_b.support(&axis_b);

                let point_a = xf_a * self.proxy_a.vertex(index_a);
                let point_b = xf_b * self.proxy_b.vertex(index_b);

                let separation = (point_b - point_a).dot(axis);
                let ids = WitnessIds {
                    a: Some(index_a),
                    b: Some(index_b),
                };

                (separation, ids)
            }
            SeparatingAxis::FaceA {
                local_normal,
                local_point,
            } => {
                let normal = xf_a * *local_normal;
                let point_a = xf_a * local_point;

                let axis_b = xf_b.inverse_transform_vector(&-normal.into_inner());
                let index_b = self.proxy_b.support(&axis_b);
                let point_b = xf_b * self.proxy_b.vertex(index_b);

                let separation = (point_b - point_a).dot(&normal);
                let ids = WitnessIds {
                    a: None,
                    b: Some(index_b),
                };

                (separation, ids)
            }
            SeparatingAxis::FaceB {
                local_normal,
                local_point,
            } => {
                let normal = xf_b * *local_normal;
                let point_b = xf_b * local_point;

                let axis_a = xf_a.inverse_transform_vector(&-normal.into_inner());
                let index_a = self.proxy_a.support(&axis_a);
                let point_a = xf_a * self.proxy_a.vertex(index_a);

                let separation = (point_a - point_b).dot(&normal);
                let ids = WitnessIds {
                    a: Some(index_a),
                    b: None,
                };

                (separation, ids)
            }
        }
    }

    /// Evaluates the separation of the given witness vertices along the
    /// separating axis at time `t`.
    ///
    /// A witness missing on a side that needs one is replaced by the support
    /// point of that side at `t`.
    pub fn evaluate(&self, ids: WitnessIds, t: Real) -> Real {
        let xf_a = self.sweep_a.transform_at(t);
        let xf_b = self.sweep_b.transform_at(t);

        match &self.axis {
            SeparatingAxis::Points { axis } => {
                let index_a = ids.a.unwrap_or_else(|| {
                    self.proxy_a
                        .support(&xf_a.inverse_transform_vector(axis))
                });
                let index_b = ids.b.unwrap_or_else(|| {
                    self.proxy_b
                        .support(&xf_b.inverse_transform_vector(&-axis.into_inner()))
                });

                let point_a = xf_a * self.proxy_a.vertex(index_a);
                let point_b = xf_b * self.proxy_b.vertex(index_b);

                (point_b - point_a).dot(axis)
            }
            SeparatingAxis::FaceA {
                local_normal,
                local_point,
            } => {
                let normal = xf_a * *local_normal;
                let point_a = xf_a * local_point;

                let index_b = ids.b.unwrap_or_else(|| {
                    self.proxy_b
                        .support(&xf_b.inverse_transform_vector(&-normal.into_inner()))
                });
                let point_b = xf_b * self.proxy_b.vertex(index_b);

                (point_b - point_a).dot(&normal)
            }
            SeparatingAxis::FaceB {
                local_normal,
                local_point,
            } => {
                let normal = xf_b * *local_normal;
                let point_b = xf_b * local_point;

                let index_a = ids.a.unwrap_or_else(|| {
                    self.proxy_a
                        .support(&xf_a.inverse_transform_vector(&-normal.into_inner()))
                });
                let point_a = xf_a * self.proxy_a.vertex(index_a);

                (point_a - point_b).dot(&normal)
            }
        }
    }
}

/// Builds the normal and midpoint of the edge `edge` of `face_proxy`,
/// oriented toward `other_local_point`, and the separation of that point
/// along the normal.
fn face_axis(
    face_proxy: &DistanceProxy,
    face_xf: &Isometry<Real>,
    edge: [usize; 2],
    other_local_point: &Point<Real>,
    other_xf: &Isometry<Real>,
) -> Result<(UnitVector<Real>, Point<Real>, Real), SeparationError> {
    let local_point1 = face_proxy.vertex(edge[0]);
    let local_point2 = face_proxy.vertex(edge[1]);

    let mut local_normal = utils::ccw_face_normal([local_point1, local_point2])
        .ok_or(SeparationError::DegenerateAxis)?;
    let normal = face_xf * local_normal;

    let local_point = na::center(local_point1, local_point2);
    let point = face_xf * local_point;
    let other_point = other_xf * other_local_point;

    let mut separation = (other_point - point).dot(&normal);
    if separation < 0.0 {
        local_normal = -local_normal;
        separation = -separation;
    }

    Ok((local_normal, local_point, separation))
}
