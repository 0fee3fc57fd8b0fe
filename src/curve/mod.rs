//! Curves built by integrating a curvature schedule along arc length.
//!
//! A [`Curve`] is the raw output of the integrator: one [`Sample`] per step
//! boundary and one [`Step`] per integration step. Positions live in the profile
//! plane, `x` being the radial distance from the axis of revolution and `y` the
//! height along it.

use crate::float_types::{Real, TAU};
use crate::params::DropletParams;
use nalgebra::Point2;

mod integrator;

pub use integrator::integrate;

/// Tuning constants for the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorConfig {
    /// Segments needed to draw a complete circle of unit curvature. Sets the
    /// arc length of every step.
    pub segments_per_unit_circle: Real,
    /// Curvature at step 0.
    pub initial_curvature: Real,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            segments_per_unit_circle: 72.0,
            initial_curvature: 1.0,
        }
    }
}

impl IntegratorConfig {
    /// Arc length travelled per step, which is also the turn per step at unit
    /// curvature.
    #[inline]
    pub fn step_angle(&self) -> Real {
        TAU / self.segments_per_unit_circle
    }

    /// Curvature at `step`, decaying linearly to zero at `ramp_length` and
    /// continuing past it with the opposite sign.
    ///
    /// A zero `ramp_length` yields infinity or NaN; nothing guards against it.
    #[inline]
    pub fn curvature_at(&self, step: usize, ramp_length: Real) -> Real {
        self.initial_curvature * (1.0 - step as Real / ramp_length)
    }
}

/// Per-step quantities, defined for `step < iterations`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Curvature `k`
    pub curvature: Real,
    /// Heading change `a = k * step_angle`
    pub turn: Real,
}

/// Heading and position at a step boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Direction of travel in radians at the start of the next step.
    pub heading: Real,
    /// Cumulative position; `x` is radial, `y` is height.
    pub position: Point2<Real>,
}

/// An integrated curve: `iterations + 1` samples and `iterations` steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub(crate) samples: Vec<Sample>,
    pub(crate) steps: Vec<Step>,
    pub(crate) step_angle: Real,
}

impl Curve {
    /// Integrate the curve described by `params`.
    pub fn from_params(params: &DropletParams, config: &IntegratorConfig) -> Self {
        integrate(
            config,
            params.start_direction,
            params.ramp_length,
            params.effective_iterations(),
        )
    }

    /// Samples in step order. Never empty; the first is always at the origin.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Curvature and turn of each step, one fewer than the samples.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Arc length of each step.
    pub const fn step_angle(&self) -> Real {
        self.step_angle
    }

    /// Number of integration steps taken.
    pub fn iterations(&self) -> usize {
        self.steps.len()
    }

    /// Number of samples, `iterations + 1`.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// A curve always holds its starting sample, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Headings in radians, in step order.
    pub fn headings(&self) -> impl Iterator<Item = Real> + '_ {
        self.samples.iter().map(|s| s.heading)
    }

    /// Positions in step order, starting at the origin.
    pub fn positions(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.samples.iter().map(|s| s.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_step_angle_is_five_degrees() {
        let config = IntegratorConfig::default();
        assert_relative_eq!(config.step_angle(), (5.0 as Real).to_radians(), epsilon = 1e-15);
    }

    #[test]
    fn curvature_ramp_crosses_zero_at_ramp_length() {
        let config = IntegratorConfig::default();
        assert_eq!(config.curvature_at(0, 10.0), 1.0);
        assert_eq!(config.curvature_at(5, 10.0), 0.5);
        assert_eq!(config.curvature_at(10, 10.0), 0.0);
        assert_eq!(config.curvature_at(20, 10.0), -1.0);
    }

    #[test]
    fn accessors_follow_sample_order() {
        let params = DropletParams::new(0.0, 10.0, 5);
        let curve = Curve::from_params(&params, &IntegratorConfig::default());
        assert_eq!(curve.len(), curve.iterations() + 1);
        assert_eq!(curve.steps().len(), 5);
        let positions: Vec<_> = curve.positions().collect();
        let headings: Vec<_> = curve.headings().collect();
        assert_eq!(positions[0], Point2::origin());
        for (i, sample) in curve.samples().iter().enumerate() {
            assert_eq!(positions[i], sample.position);
            assert_eq!(headings[i], sample.heading);
        }
    }

    #[test]
    fn zero_ramp_length_is_not_guarded() {
        let config = IntegratorConfig::default();
        assert!(config.curvature_at(0, 0.0).is_nan());
        assert_eq!(config.curvature_at(3, 0.0), Real::NEG_INFINITY);
    }
}
