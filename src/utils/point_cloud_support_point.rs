use crate::math::{Point, Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// The first point reaching the maximal projection wins ties. Returns `0`
/// if the cloud is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    let mut best_pt = 0;
    let mut best_dot = Real::NEG_INFINITY;

    for (i, p) in points.iter().enumerate() {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    best_pt
}
