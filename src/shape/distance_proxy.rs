use crate::math::{Point, Real, Vector};
use crate::settings::Settings;
use crate::utils;
use smallvec::SmallVec;

/// Error returned when building an invalid [`DistanceProxy`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ProxyError {
    /// A proxy needs at least one vertex.
    #[error("a distance proxy must contain at least one vertex.")]
    Empty,
    /// One of the vertices has a NaN or infinite coordinate.
    #[error("the vertex {0} of the distance proxy is not finite.")]
    NonFiniteVertex(usize),
    /// The radius must be finite and non-negative.
    #[error("the radius of a distance proxy must be finite and non-negative, found {0}.")]
    InvalidRadius(Real),
}

/// A convex shape approximated by a set of points inflated by a radius.
///
/// Balls are a single point with a radius, segments are two points and
/// polygons are their vertices plus a small skin (see [`Settings::polygon_radius`]).
/// The skin keeps contacts from being knife-edge.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DistanceProxy {
    vertices: SmallVec<[Point<Real>; 8]>,
    radius: Real,
}

impl DistanceProxy {
    /// Creates a proxy from an arbitrary point set, assumed to be the vertices
    /// of a convex shape, and its inflation radius.
    pub fn new(
        vertices: impl IntoIterator<Item = Point<Real>>,
        radius: Real,
    ) -> Result<Self, ProxyError> {
        let vertices: SmallVec<[Point<Real>; 8]> = vertices.into_iter().collect();

        if vertices.is_empty() {
            return Err(ProxyError::Empty);
        }

        if let Some(i) = vertices
            .iter()
            .position(|pt| !pt.coords.iter().all(|x| x.is_finite()))
        {
            return Err(ProxyError::NonFiniteVertex(i));
        }

        if !radius.is_finite() || radius < 0.0 {
            return Err(ProxyError::InvalidRadius(radius));
        }

        Ok(Self { vertices, radius })
    }

    /// The proxy of a ball centered at `center`.
    pub fn ball(center: Point<Real>, radius: Real) -> Result<Self, ProxyError> {
        Self::new([center], radius)
    }

    /// The proxy of a (possibly rounded) segment.
    pub fn segment(a: Point<Real>, b: Point<Real>, radius: Real) -> Result<Self, ProxyError> {
        Self::new([a, b], radius)
    }

    /// The proxy of a convex polygon, skinned by `settings.polygon_radius()`.
    pub fn polygon(vertices: &[Point<Real>], settings: &Settings) -> Result<Self, ProxyError> {
        Self::new(vertices.iter().copied(), settings.polygon_radius())
    }

    /// The index of the vertex furthest along the direction `dir`.
    #[inline]
    pub fn support(&self, dir: &Vector<Real>) -> usize {
        utils::point_cloud_support_point_id(dir, &self.vertices)
    }

    /// The vertex furthest along the direction `dir`.
    #[inline]
    pub fn support_vertex(&self, dir: &Vector<Real>) -> &Point<Real> {
        &self.vertices[self.support(dir)]
    }

    /// The `i`-th vertex of this proxy.
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    pub fn vertex(&self, i: usize) -> &Point<Real> {
        &self.vertices[i]
    }

    /// All the vertices of this proxy.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The number of vertices of this proxy.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a proxy holds at least one vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The inflation radius of this proxy.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }
}
