use crate::math::{Isometry, Point, Real, DEFAULT_EPSILON};
use crate::query::gjk::{IndexedSimplex, SimplexCache, SimplexVertex};
use crate::shape::DistanceProxy;

/// The maximum number of support points added by [`GjkDistance`].
pub const GJK_MAX_ITERATIONS: usize = 20;

/// Output of a distance query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceOutput {
    /// Closest point on the first proxy, in world-space.
    pub point_a: Point<Real>,
    /// Closest point on the second proxy, in world-space.
    pub point_b: Point<Real>,
    /// The distance between `point_a` and `point_b`.
    pub distance: Real,
    /// Number of GJK iterations used.
    pub iterations: usize,
}

/// A closest-points query between two convex proxies.
///
/// This is the seam through which the time of impact solver computes exact
/// distances. Implementors must fill the `cache` with the indices of the
/// proxy vertices realizing the closest points so the solver can derive a
/// separating axis from it: one index per proxy when both closest points are
/// vertices, or two indices on the proxy contributing an edge.
pub trait DistanceQuery {
    /// Computes the closest points between `proxy_a` positioned at `xf_a` and
    /// `proxy_b` positioned at `xf_b`.
    ///
    /// If `use_radii` is `true`, the proxy radii are subtracted from the
    /// distance and the closest points are moved to the inflated boundaries.
    fn distance(
        &self,
        cache: &mut SimplexCache,
        proxy_a: &DistanceProxy,
        xf_a: &Isometry<Real>,
        proxy_b: &DistanceProxy,
        xf_b: &Isometry<Real>,
        use_radii: bool,
    ) -> DistanceOutput;
}

/// The Gilbert-Johnson-Keerthi distance algorithm on indexed point clouds.
///
/// The simplex is warm-started from the [`SimplexCache`] and the cache is
/// updated with the final simplex.
#[derive(Copy, Clone, Debug, Default)]
pub struct GjkDistance;

impl DistanceQuery for GjkDistance {
    fn distance(
        &self,
        cache: &mut SimplexCache,
        proxy_a: &DistanceProxy,
        xf_a: &Isometry<Real>,
        proxy_b: &DistanceProxy,
        xf_b: &Isometry<Real>,
        use_radii: bool,
    ) -> DistanceOutput {
        let mut simplex = IndexedSimplex::from_cache(cache, proxy_a, xf_a, proxy_b, xf_b);

        // These store the vertices of the last simplex so that we
        // can check for duplicates and prevent cycling.
        let mut save_a = [0; 3];
        let mut save_b = [0; 3];
        let mut niter = 0;

        while niter < GJK_MAX_ITERATIONS {
            let save_count = simplex.count();
            for (i, v) in simplex.vertices().iter().enumerate() {
                save_a[i] = v.index_a;
                save_b[i] = v.index_b;
            }

            simplex.solve();

            // If we have 3 points, then the origin is in the corresponding triangle.
            if simplex.count() == 3 {
                break;
            }

            let d = simplex.search_direction();

            // Ensure the search direction is numerically fit.
            if d.norm_squared() < DEFAULT_EPSILON * DEFAULT_EPSILON {
                // The origin is probably contained by a line segment
                // or triangle. Thus the shapes are overlapped.
                break;
            }

            // Compute a tentative new simplex vertex using support points.
            let index_a = proxy_a.support(&xf_a.inverse_transform_vector(&-d));
            let index_b = proxy_b.support(&xf_b.inverse_transform_vector(&d));
            niter += 1;

            // Check for duplicate support points. This is the main termination criterion.
            let duplicate = (0..save_count).any(|i| save_a[i] == index_a && save_b[i] == index_b);

            if duplicate {
                // If we found a duplicate support point we must exit to avoid cycling.
                break;
            }

            simplex.push(SimplexVertex::new(
                proxy_a, xf_a, index_a, proxy_b, xf_b, index_b,
            ));
        }

        let (mut point_a, mut point_b) = simplex.witness_points();
        let mut distance = na::distance(&point_a, &point_b);
        simplex.write_cache(cache);

        if use_radii {
            let ra = proxy_a.radius();
            let rb = proxy_b.radius();

            if distance > ra + rb && distance > DEFAULT_EPSILON {
                // Shapes are still not overlapped.
                // Move the witness points to the outer surface.
                distance -= ra + rb;
                let normal = (point_b - point_a).normalize();
                point_a += normal * ra;
                point_b -= normal * rb;
            } else {
                // Shapes are overlapped when radii are considered.
                // Move the witness points to the middle.
                let p = na::center(&point_a, &point_b);
                point_a = p;
                point_b = p;
                distance = 0.0;
            }
        }

        DistanceOutput {
            point_a,
            point_b,
            distance,
            iterations: niter,
        }
    }
}

/// Computes the distance between two proxies with [`GjkDistance`], starting
/// from an empty cache.
pub fn distance(
    proxy_a: &DistanceProxy,
    xf_a: &Isometry<Real>,
    proxy_b: &DistanceProxy,
    xf_b: &Isometry<Real>,
    use_radii: bool,
) -> DistanceOutput {
    let mut cache = SimplexCache::default();
    GjkDistance.distance(&mut cache, proxy_a, xf_a, proxy_b, xf_b, use_radii)
}
