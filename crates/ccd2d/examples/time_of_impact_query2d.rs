extern crate nalgebra as na;

use ccd2d::math::{Point, Real};
use ccd2d::motion::Sweep;
use ccd2d::query::{TimeOfImpact, ToiCounters, ToiInput, ToiState};
use ccd2d::settings::Settings;
use ccd2d::shape::DistanceProxy;
use na::RealField;

fn main() {
    let settings = Settings::default();
    let cuboid = DistanceProxy::polygon(
        &[
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ],
        &settings,
    )
    .unwrap();
    let ball = DistanceProxy::ball(Point::origin(), 1.0).unwrap();

    let cuboid_sweep = Sweep::new(
        Point::origin(),
        Point::new(0.0, 0.0),
        Point::new(-1.0, 1.0),
        0.0,
        Real::frac_pi_4(),
    );
    let ball_sweep_intersecting = Sweep::new(Point::origin(), Point::new(1.0, 1.0), Point::new(3.0, 3.0), 0.0, 0.0);
    let ball_sweep_will_touch = Sweep::new(Point::origin(), Point::new(4.0, 4.0), Point::new(-1.0, 1.0), 0.0, 0.0);
    let ball_sweep_wont_touch = Sweep::new(Point::origin(), Point::new(4.0, 4.0), Point::new(6.0, 6.0), 0.0, 0.0);

    let toi = TimeOfImpact::new(settings).unwrap();
    let mut counters = ToiCounters::new();

    let mut query = |ball_sweep: Sweep| {
        let input = ToiInput {
            proxy_a: &ball,
            proxy_b: &cuboid,
            sweep_a: ball_sweep,
            sweep_b: cuboid_sweep,
            t_max: 1.0,
        };
        toi.compute_with_stats(&input, &mut counters)
    };

    let toi_intersecting = query(ball_sweep_intersecting);
    let toi_will_touch = query(ball_sweep_will_touch);
    let toi_wont_touch = query(ball_sweep_wont_touch);

    assert_eq!(toi_intersecting.state, ToiState::Overlapped);
    assert_eq!(toi_intersecting.t, 0.0);
    println!("Toi: {:?}", toi_will_touch);
    assert!(toi_will_touch.state == ToiState::Touching && toi_will_touch.t > 0.0);
    assert_eq!(toi_wont_touch.state, ToiState::Separated);

    println!(
        "{} queries, {} iterations, {} root finder iterations.",
        counters.calls, counters.iters, counters.root_iters
    );
}
