use super::{Curve, IntegratorConfig, Sample, Step};
use crate::float_types::{Real, deg_to_rad};
use nalgebra::Point2;
use tracing::{debug, instrument};

/// Forward-Euler integration of a curve whose curvature ramps linearly with arc
/// length.
///
/// Every step has the same arc length, [`IntegratorConfig::step_angle`]. At step
/// `i`:
///
/// ```text
/// k[i]   = k0 * (1 - i / ramp_length)
/// a[i]   = k[i] * step
/// A[i+1] = A[i] + a[i]
/// Y[i+1] = Y[i] + step * cos(A[i])
/// Z[i+1] = Z[i] + step * sin(A[i])
/// ```
///
/// starting from `A[0] = start_direction_deg` in radians and `(Y[0], Z[0]) = (0, 0)`.
/// The position update uses the heading from before the turn.
///
/// No input is rejected. A zero `ramp_length` makes the curvature NaN or infinite
/// and the samples after it follow suit.
///
/// # Example
/// ```
/// # use droplet::curve::{integrate, IntegratorConfig};
/// let curve = integrate(&IntegratorConfig::default(), 0.0, 10.0, 4);
/// assert_eq!(curve.len(), 5);
/// assert_eq!(curve.samples()[1].position.y, 0.0);
/// ```
#[instrument(level = "debug", skip(config))]
pub fn integrate(
    config: &IntegratorConfig,
    start_direction_deg: Real,
    ramp_length: Real,
    iterations: usize,
) -> Curve {
    let step_angle = config.step_angle();

    let mut samples = Vec::with_capacity(iterations.saturating_add(1));
    let mut steps = Vec::with_capacity(iterations);

    let mut current = Sample {
        heading: deg_to_rad(start_direction_deg),
        position: Point2::origin(),
    };
    samples.push(current);

    for i in 0..iterations {
        let curvature = config.curvature_at(i, ramp_length);
        let turn = curvature * step_angle;
        steps.push(Step { curvature, turn });

        current = Sample {
            heading: current.heading + turn,
            position: Point2::new(
                current.position.x + step_angle * current.heading.cos(),
                current.position.y + step_angle * current.heading.sin(),
            ),
        };
        samples.push(current);
    }

    debug!(
        samples = samples.len(),
        final_heading = current.heading,
        "curve integrated"
    );

    Curve {
        samples,
        steps,
        step_angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::{FRAC_PI_2, TAU};
    use approx::assert_relative_eq;

    #[test]
    fn zero_iterations_is_a_single_origin_sample() {
        let curve = integrate(&IntegratorConfig::default(), -90.0, 10.0, 0);
        assert_eq!(curve.len(), 1);
        assert!(curve.steps().is_empty());
        assert_eq!(curve.samples()[0].position, Point2::origin());
        assert_eq!(curve.samples()[0].heading, -FRAC_PI_2);
    }

    #[test]
    fn heading_is_prefix_sum_of_turns() {
        let curve = integrate(&IntegratorConfig::default(), 30.0, 7.0, 20);
        let samples = curve.samples();
        for (i, step) in curve.steps().iter().enumerate() {
            assert_eq!(samples[i + 1].heading, samples[i].heading + step.turn);
            assert_eq!(step.turn, step.curvature * curve.step_angle());
        }
    }

    #[test]
    fn position_uses_heading_before_the_turn() {
        let config = IntegratorConfig::default();
        let curve = integrate(&config, 0.0, 10.0, 2);
        let step = config.step_angle();
        let second = curve.samples()[2].position;
        let first_heading = curve.samples()[1].heading;
        assert_eq!(curve.samples()[1].heading, step);
        assert_relative_eq!(second.x, step + step * first_heading.cos(), epsilon = 1e-15);
        assert_relative_eq!(second.y, step * first_heading.sin(), epsilon = 1e-15);
    }

    #[test]
    fn constant_unit_curvature_closes_a_circle() {
        // With an enormous ramp the curvature stays at 1, so 72 steps make one lap.
        let config = IntegratorConfig::default();
        let curve = integrate(&config, 0.0, 1e300, 72);
        let last = curve.samples()[72];
        assert_relative_eq!(last.heading, TAU, epsilon = 1e-12);
        assert_relative_eq!(last.position.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.position.y, 0.0, epsilon = 1e-12);
    }
}
