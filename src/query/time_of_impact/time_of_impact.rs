use crate::math::Real;
use crate::motion::Sweep;
use crate::query::gjk::{DistanceQuery, GjkDistance, SimplexCache};
use crate::query::time_of_impact::{SeparationFunction, ToiStats};
use crate::settings::{Settings, SettingsError};
use crate::shape::DistanceProxy;

/// The maximum number of separating axes tried by a single time of impact query.
pub const MAX_ITERATIONS: usize = 20;
/// The maximum number of iterations of the root finder on a single separating axis.
pub const MAX_ROOT_ITERATIONS: usize = 50;

/// The way a time of impact query terminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ToiState {
    /// No outcome was computed yet. Never returned by a completed query.
    Unknown,
    /// The solver ran out of iterations, or would have had to move back in time.
    ///
    /// The reported time is the last time known to be safe, which is still a
    /// conservative approximation of the actual time of impact.
    Failed,
    /// The proxies already overlap at the start of the sweeps.
    Overlapped,
    /// The proxies are within the contact tolerance at the reported time.
    Touching,
    /// The proxies stay apart over the whole query interval.
    Separated,
}

/// The result of a time of impact query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ToiOutput {
    /// How the query terminated.
    pub state: ToiState,
    /// The sweep fraction reached by the solver, in `[0, t_max]`.
    pub t: Real,
}

/// The proxies and motions of a time of impact query.
#[derive(Copy, Clone, Debug)]
pub struct ToiInput<'a> {
    /// The first proxy.
    pub proxy_a: &'a DistanceProxy,
    /// The second proxy.
    pub proxy_b: &'a DistanceProxy,
    /// The motion of the first proxy.
    pub sweep_a: Sweep,
    /// The motion of the second proxy.
    pub sweep_b: Sweep,
    /// The sweep fraction at which the search stops.
    pub t_max: Real,
}

/// Computes the time of impact between two proxies with default settings and
/// the GJK distance query.
///
/// See [`TimeOfImpact::compute`].
pub fn time_of_impact(input: &ToiInput) -> ToiOutput {
    TimeOfImpact::<GjkDistance>::default().compute(input)
}

/// A conservative advancement time of impact solver.
///
/// The solver finds the first sweep fraction at which two proxies come within
/// `linear_slop` of their combined radii. Distances are computed by the
/// distance query `D` while the search along each separating axis is carried
/// out by a [`SeparationFunction`] mixing the secant method and bisection.
#[derive(Copy, Clone, Debug)]
pub struct TimeOfImpact<D: DistanceQuery = GjkDistance> {
    settings: Settings,
    distance: D,
}

impl<D: DistanceQuery + Default> Default for TimeOfImpact<D> {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            distance: D::default(),
        }
    }
}

impl TimeOfImpact<GjkDistance> {
    /// A solver using the GJK distance query.
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        Self::with_distance_query(settings, GjkDistance)
    }
}

impl<D: DistanceQuery> TimeOfImpact<D> {
    /// A solver using a custom distance query.
    pub fn with_distance_query(settings: Settings, distance: D) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self { settings, distance })
    }

    /// The settings of this solver.
    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The distance query of this solver.
    #[inline]
    pub fn distance_query(&self) -> &D {
        &self.distance
    }

    /// Computes the upper bound on the time before the two proxies penetrate.
    ///
    /// Time is represented as a fraction in `[0, input.t_max]`. The sweeps
    /// of `input` are copied and normalized, the caller's sweeps are left
    /// untouched.
    pub fn compute(&self, input: &ToiInput) -> ToiOutput {
        self.compute_with_stats(input, &mut ())
    }

    /// Same as [`TimeOfImpact::compute`], reporting the solver progress to `stats`.
    pub fn compute_with_stats<S: ToiStats + ?Sized>(
        &self,
        input: &ToiInput,
        stats: &mut S,
    ) -> ToiOutput {
        stats.record_call();

        let mut output = ToiOutput {
            state: ToiState::Unknown,
            t: input.t_max,
        };

        let proxy_a = input.proxy_a;
        let proxy_b = input.proxy_b;

        let mut sweep_a = input.sweep_a;
        let mut sweep_b = input.sweep_b;
        // Large rotations can make the root finder fail.
        sweep_a.normalize();
        sweep_b.normalize();

        let slop = self.settings.linear_slop;
        let t_max = input.t_max;

        let total_radius = proxy_a.radius() + proxy_b.radius();
        let target = slop.max(total_radius - 3.0 * slop);
        let tolerance = 0.25 * slop;
        debug_assert!(target > tolerance);

        let mut t1 = 0.0;
        let mut iter = 0;
        let mut cache = SimplexCache::default();

        // The outer loop progressively attempts to compute new separating axes.
        // This loop terminates when an axis is repeated (no progress is made).
        loop {
            let xf_a = sweep_a.transform_at(t1);
            let xf_b = sweep_b.transform_at(t1);

            // Get the distance between shapes. We can also use the results
            // to get a separating axis.
            let dist = self
                .distance
                .distance(&mut cache, proxy_a, &xf_a, proxy_b, &xf_b, false);
            log::trace!("TOI iteration {}: t1 = {}, distance = {}", iter, t1, dist.distance);

            // If the shapes are overlapped, we give up on continuous collision.
            if dist.distance <= 0.0 {
                output.state = ToiState::Overlapped;
                output.t = 0.0;
                break;
            }

            if dist.distance < target + tolerance {
                output.state = ToiState::Touching;
                output.t = t1;
                break;
            }

            let (fcn, _) = match SeparationFunction::new(
                &cache, proxy_a, &sweep_a, proxy_b, &sweep_b, t1,
            ) {
                Ok(result) => result,
                Err(err) => {
                    log::debug!("TOI: unable to build a separating axis at t = {}: {}", t1, err);
                    output.state = ToiState::Failed;
                    output.t = t1;
                    break;
                }
            };

            // Compute the TOI on the separating axis. We do this by successively
            // resolving the deepest point. This loop is bounded by the number of vertices.
            let mut done = false;
            let mut t2 = t_max;
            let mut push_back_iter = 0;

            loop {
                // Find the deepest point at t2. Store the witness point indices.
                let (mut s2, ids) = fcn.find_min_separation(t2);

                // Is the final configuration separated?
                if s2 > target + tolerance {
                    output.state = ToiState::Separated;
                    output.t = t_max;
                    done = true;
                    break;
                }

                // Has the separation reached tolerance?
                if s2 > target - tolerance {
                    // Advance the sweeps.
                    t1 = t2;
                    break;
                }

                // Compute the initial separation of the witness points.
                let mut s1 = fcn.evaluate(ids, t1);

                // Check for initial overlap. This might happen if the root finder
                // runs out of iterations.
                if s1 < target - tolerance {
                    log::debug!(
                        "TOI: the separation at t1 = {} dropped below the target ({} < {}).",
                        t1,
                        s1,
                        target
                    );
                    output.state = ToiState::Failed;
                    output.t = t1;
                    done = true;
                    break;
                }

                // Check for touching.
                if s1 <= target + tolerance {
                    // Victory! t1 should hold the TOI (could be 0.0).
                    output.state = ToiState::Touching;
                    output.t = t1;
                    done = true;
                    break;
                }

                // Compute 1D root of: f(x) - target = 0
                let mut root_iter = 0;
                let mut a1 = t1;
                let mut a2 = t2;

                loop {
                    // Use a mix of the secant rule and bisection.
                    let t = if root_iter & 1 == 1 {
                        // Secant rule to improve convergence.
                        a1 + (target - s1) * (a2 - a1) / (s2 - s1)
                    } else {
                        // Bisection to guarantee progress.
                        0.5 * (a1 + a2)
                    };

                    root_iter += 1;

                    let s = fcn.evaluate(ids, t);
                    log::trace!("TOI root {}: [{}, {}] -> t = {}, s = {}", root_iter, a1, a2, t, s);

                    if (s - target).abs() < tolerance {
                        // t2 holds a tentative value for t1
                        t2 = t;
                        break;
                    }

                    // Ensure we continue to bracket the root.
                    if s > target {
                        a1 = t;
                        s1 = s;
                    } else {
                        a2 = t;
                        s2 = s;
                    }

                    if root_iter == MAX_ROOT_ITERATIONS {
                        log::debug!(
                            "TOI: the root finder did not converge within [{}, {}].",
                            a1,
                            a2
                        );
                        break;
                    }
                }

                stats.record_root_iterations(root_iter);
                push_back_iter += 1;

                if push_back_iter == self.settings.max_polygon_vertices
                    || root_iter == MAX_ROOT_ITERATIONS
                {
                    break;
                }
            }

            iter += 1;
            stats.record_outer_iteration();

            if done {
                break;
            }

            if iter == MAX_ITERATIONS {
                // Root finder got stuck. Semi-victory.
                log::debug!("TOI: reached the maximum number of iterations at t1 = {}.", t1);
                output.state = ToiState::Failed;
                output.t = t1;
                break;
            }
        }

        debug_assert_ne!(output.state, ToiState::Unknown);
        stats.record_output(iter, &output);
        output
    }
}
