//! Scalar type and the angle constants the integrator works with.

// Our Real scalar type:
pub type Real = f64;

// Pi
/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

/// Degrees to radians, evaluated as `deg * π / 180` in that order.
#[inline]
pub fn deg_to_rad(degrees: Real) -> Real {
    degrees * PI / 180.0
}
