use ccd2d::math::{Point, Real};
use ccd2d::motion::Sweep;
use ccd2d::query::{self, ToiInput, ToiState};
use ccd2d::settings::Settings;
use ccd2d::shape::DistanceProxy;

fn translating(from: Point<Real>, to: Point<Real>) -> Sweep {
    Sweep::new(Point::origin(), from, to, 0.0, 0.0)
}

#[test]
fn ball_ball_head_on_toi() {
    let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
    let settings = Settings::default();
    let target = ball.radius() * 2.0 - 3.0 * settings.linear_slop;
    let tolerance = 0.25 * settings.linear_slop;

    let input = ToiInput {
        proxy_a: &ball,
        proxy_b: &ball,
        sweep_a: translating(Point::new(0.0, 0.0), Point::new(6.0, 0.0)),
        sweep_b: translating(Point::new(10.0, 0.0), Point::new(4.0, 0.0)),
        t_max: 1.0,
    };

    let toi = query::time_of_impact(&input);
    assert_eq!(toi.state, ToiState::Touching);

    // The centers are 10 - 12 t apart.
    let center_distance = 10.0 - 12.0 * toi.t;
    assert!((center_distance - target).abs() < tolerance + 1.0e-4);
}

#[test]
fn ball_ball_head_on_before_t_max() {
    let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
    let input = ToiInput {
        proxy_a: &ball,
        proxy_b: &ball,
        sweep_a: translating(Point::new(0.0, 0.0), Point::new(6.0, 0.0)),
        sweep_b: translating(Point::new(10.0, 0.0), Point::new(4.0, 0.0)),
        t_max: 0.5,
    };

    // At t = 0.5 the centers are still 4 units apart.
    let toi = query::time_of_impact(&input);
    assert_eq!(toi.state, ToiState::Separated);
    assert_eq!(toi.t, 0.5);
}

#[test]
fn ball_ball_parallel_paths_never_touch() {
    let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
    let input = ToiInput {
        proxy_a: &ball,
        proxy_b: &ball,
        sweep_a: translating(Point::new(-3.0, 0.0), Point::new(3.0, 0.0)),
        sweep_b: translating(Point::new(-3.0, 1.5), Point::new(3.0, 1.5)),
        t_max: 1.0,
    };

    let toi = query::time_of_impact(&input);
    assert_eq!(toi.state, ToiState::Separated);
    assert_eq!(toi.t, 1.0);
}

#[test]
fn ball_ball_initially_overlapping() {
    // Without their radii, both balls are a single point at the same location.
    let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
    let input = ToiInput {
        proxy_a: &ball,
        proxy_b: &ball,
        sweep_a: translating(Point::new(1.0, 1.0), Point::new(2.0, 1.0)),
        sweep_b: translating(Point::new(1.0, 1.0), Point::new(-2.0, 1.0)),
        t_max: 1.0,
    };

    let toi = query::time_of_impact(&input);
    assert_eq!(toi.state, ToiState::Overlapped);
    assert_eq!(toi.t, 0.0);
}

#[test]
fn ball_ball_initially_touching() {
    let ball = DistanceProxy::ball(Point::origin(), 0.5).unwrap();
    let input = ToiInput {
        proxy_a: &ball,
        proxy_b: &ball,
        sweep_a: Sweep::stationary(Point::new(0.0, 0.0), 0.0),
        sweep_b: translating(Point::new(0.986, 0.0), Point::new(-5.0, 0.0)),
        t_max: 1.0,
    };

    let toi = query::time_of_impact(&input);
    assert_eq!(toi.state, ToiState::Touching);
    assert_eq!(toi.t, 0.0);
}

#[test]
fn ball_ball_toi_is_deterministic() {
    let ball1 = DistanceProxy::ball(Point::new(0.1, -0.2), 0.3).unwrap();
    let ball2 = DistanceProxy::ball(Point::origin(), 0.7).unwrap();
    let input = ToiInput {
        proxy_a: &ball1,
        proxy_b: &ball2,
        sweep_a: Sweep::new(
            Point::new(0.1, -0.2),
            Point::new(-4.0, 1.0),
            Point::new(3.0, -0.5),
            0.0,
            7.0,
        ),
        sweep_b: translating(Point::new(2.0, 0.0), Point::new(1.0, 0.5)),
        t_max: 1.0,
    };

    let first = query::time_of_impact(&input);
    let second = query::time_of_impact(&input);
    assert_eq!(first.state, second.state);
    assert_eq!(first.t.to_bits(), second.t.to_bits());

    // The caller's sweeps are not normalized in place.
    assert_eq!(input.sweep_a.a, 7.0);
}
