//! Parameter errors

use crate::float_types::Real;

/// Problems found by [`DropletParams::check`](crate::params::DropletParams::check).
///
/// None of these stop a normal run: the integrator accepts every input and lets
/// NaN or infinity flow through to the output. They are only raised when the
/// caller asks for a strict check.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// (ZeroRampLength) Curvature would be divided by zero
    #[error("(ZeroRampLength) ramp length is zero, curvature would be infinite or NaN")]
    ZeroRampLength,
    /// (NonFiniteRampLength) The ramp length is NaN or infinite
    #[error("(NonFiniteRampLength) ramp length {0} is not finite")]
    NonFiniteRampLength(Real),
    /// (NonFiniteStartDirection) The start direction is NaN or infinite
    #[error("(NonFiniteStartDirection) start direction {0} is not finite")]
    NonFiniteStartDirection(Real),
    /// (NegativeIterations) The iteration count is below zero
    #[error("(NegativeIterations) iteration count {0} is negative, treated as 0")]
    NegativeIterations(i64),
}
