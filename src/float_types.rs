//! Scalar type and numeric constants shared across the crate.

/// Our Real scalar type.
pub type Real = f64;

/// Tolerance for feasibility comparisons and degeneracy guards.
pub const EPSILON: Real = 1e-9;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;
