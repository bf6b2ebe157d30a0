//! Test support library
//! Provides various helper functions & utilities for tests.

use coneplate::{Course, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a standalone course band for fitter-level tests.
pub fn make_course(top_diameter: Real, bottom_diameter: Real, slant_height: Real) -> Course {
    Course {
        index: 1,
        top_diameter,
        bottom_diameter,
        slant_height,
    }
}
