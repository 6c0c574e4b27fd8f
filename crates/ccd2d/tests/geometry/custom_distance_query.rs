use ccd2d::math::{Isometry, Point, Real};
use ccd2d::motion::Sweep;
use ccd2d::query::gjk::{DistanceOutput, DistanceQuery, GjkDistance, SimplexCache};
use ccd2d::query::{TimeOfImpact, ToiCounters, ToiInput, ToiState};
use ccd2d::settings::Settings;
use ccd2d::shape::DistanceProxy;
use core::cell::Cell;

// Forwards to GJK while counting the queries.
#[derive(Default)]
struct CountingQuery {
    calls: Cell<usize>,
}

impl DistanceQuery for CountingQuery {
    fn distance(
        &self,
        cache: &mut SimplexCache,
        proxy_a: &DistanceProxy,
        xf_a: &Isometry<Real>,
        proxy_b: &DistanceProxy,
        xf_b: &Isometry<Real>,
        use_radii: bool,
    ) -> DistanceOutput {
        assert!(!use_radii, "radii are accounted for by the solver target");
        self.calls.set(self.calls.get() + 1);
        GjkDistance.distance(cache, proxy_a, xf_a, proxy_b, xf_b, use_radii)
    }
}

// Claims the proxies share three witness vertices.
struct TriangleCacheQuery;

impl DistanceQuery for TriangleCacheQuery {
    fn distance(
        &self,
        cache: &mut SimplexCache,
        _: &DistanceProxy,
        _: &Isometry<Real>,
        _: &DistanceProxy,
        _: &Isometry<Real>,
        _: bool,
    ) -> DistanceOutput {
        cache.count = 3;
        DistanceOutput {
            point_a: Point::origin(),
            point_b: Point::new(10.0, 0.0),
            distance: 10.0,
            iterations: 0,
        }
    }
}

fn head_on_input(ball: &DistanceProxy) -> ToiInput<'_> {
    ToiInput {
        proxy_a: ball,
        proxy_b: ball,
        sweep_a: Sweep::new(Point::origin(), Point::new(0.0, 0.0), Point::new(6.0, 0.0), 0.0, 0.0),
        sweep_b: Sweep::new(Point::origin(), Point::new(10.0, 0.0), Point::new(4.0, 0.0), 0.0, 0.0),
        t_max: 1.0,
    }
}

#[test]
fn custom_query_drives_the_solver() {
    let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
    let input = head_on_input(&ball);

    let toi = TimeOfImpact::with_distance_query(Settings::default(), CountingQuery::default())
        .unwrap();
    let mut counters = ToiCounters::new();
    let out = toi.compute_with_stats(&input, &mut counters);

    assert_eq!(out, TimeOfImpact::<GjkDistance>::default().compute(&input));
    assert_eq!(out.state, ToiState::Touching);
    // One distance query per outer iteration, plus the final touching check.
    assert_eq!(toi.distance_query().calls.get() as u64, counters.iters + 1);
}

#[test]
fn unusable_cache_reports_failure() {
    let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
    let input = head_on_input(&ball);

    let toi = TimeOfImpact::with_distance_query(Settings::default(), TriangleCacheQuery).unwrap();
    let mut counters = ToiCounters::new();
    let out = toi.compute_with_stats(&input, &mut counters);

    assert_eq!(out.state, ToiState::Failed);
    assert_eq!(out.t, 0.0);
    assert_eq!(counters.iters, 0);
    assert_eq!(counters.outcome_count(ToiState::Failed), 1);
}
