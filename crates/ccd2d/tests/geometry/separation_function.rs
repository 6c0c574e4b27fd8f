use ccd2d::math::{Point, Real};
use ccd2d::motion::Sweep;
use ccd2d::query::gjk::{DistanceQuery, GjkDistance, SimplexCache};
use ccd2d::query::{SeparatingAxis, SeparationFunction, SeparationKind};
use ccd2d::settings::Settings;
use ccd2d::shape::DistanceProxy;

fn unit_square() -> DistanceProxy {
    DistanceProxy::polygon(
        &[
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ],
        &Settings::default(),
    )
    .unwrap()
}

fn axis_norm(axis: &SeparatingAxis) -> Real {
    match axis {
        SeparatingAxis::Points { axis } => axis.norm(),
        SeparatingAxis::FaceA { local_normal, .. } | SeparatingAxis::FaceB { local_normal, .. } => {
            local_normal.norm()
        }
    }
}

// Builds the separation function the way the solver does: from the cache of a
// distance query at `t1`.
fn check_axis(
    proxy_a: &DistanceProxy,
    sweep_a: &Sweep,
    proxy_b: &DistanceProxy,
    sweep_b: &Sweep,
    t1: Real,
    expected: SeparationKind,
) {
    let mut cache = SimplexCache::default();
    let dist = GjkDistance.distance(
        &mut cache,
        proxy_a,
        &sweep_a.transform_at(t1),
        proxy_b,
        &sweep_b.transform_at(t1),
        false,
    );

    let (fcn, separation) =
        SeparationFunction::new(&cache, proxy_a, sweep_a, proxy_b, sweep_b, t1).unwrap();

    assert_eq!(fcn.kind(), expected);
    assert!(relative_eq!(axis_norm(fcn.axis()), 1.0, epsilon = 1.0e-5));

    // The separation is oriented so the proxies are apart along the axis.
    assert!(separation > 0.0);
    assert!(relative_eq!(separation, dist.distance, epsilon = 1.0e-4));

    let (min_separation, ids) = fcn.find_min_separation(t1);
    assert!(relative_eq!(min_separation, separation, epsilon = 1.0e-4));
    assert!(relative_eq!(fcn.evaluate(ids, t1), min_separation, epsilon = 1.0e-5));

    // Both sweeps close the gap, so the tracked separation shrinks.
    let (later, later_ids) = fcn.find_min_separation(1.0);
    assert!(later < min_separation);
    assert!(relative_eq!(fcn.evaluate(later_ids, 1.0), later, epsilon = 1.0e-5));
}

#[test]
fn points_separation_axis() {
    let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
    let sweep_a = Sweep::new(Point::origin(), Point::new(-3.0, -1.0), Point::new(0.0, 0.0), 0.0, 0.0);
    let sweep_b = Sweep::stationary(Point::new(2.0, 2.0), 0.0);

    check_axis(&ball, &sweep_a, &ball, &sweep_b, 0.0, SeparationKind::Points);
}

#[test]
fn face_a_separation_axis() {
    let square = unit_square();
    let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
    let sweep_a = Sweep::new(Point::origin(), Point::new(-2.0, 0.0), Point::new(-1.0, 0.0), 0.0, 0.3);
    let sweep_b = Sweep::stationary(Point::new(3.0, 0.2), 0.0);

    check_axis(&square, &sweep_a, &ball, &sweep_b, 0.0, SeparationKind::FaceA);
}

#[test]
fn face_b_separation_axis() {
    let square = unit_square();
    let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
    let sweep_a = Sweep::stationary(Point::new(0.3, 4.0), 0.0);
    let sweep_b = Sweep::new(Point::origin(), Point::new(0.0, 0.0), Point::new(0.0, 1.5), 0.0, -0.2);

    check_axis(&ball, &sweep_a, &square, &sweep_b, 0.0, SeparationKind::FaceB);
}
