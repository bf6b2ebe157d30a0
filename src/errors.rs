//! Validation and layout errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the ways a layout request can fail.
///
/// Every variant is raised synchronously before or during `build_layout`;
/// no partial result is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// (NonPositiveDiameter) Tank diameter must be > 0
    NonPositiveDiameter(Real),
    /// (DiameterBelowApexMinimum) Tank diameter no larger than the smallest fabricable tip
    DiameterBelowApexMinimum(Real),
    /// (AngleOutOfRange) Angle of repose must lie in the open interval (0, 90) degrees
    AngleOutOfRange(Real),
    /// (DegenerateAngle) Angle close enough to 0° or 90° that the slant relation blows up
    DegenerateAngle(Real),
    /// (CourseWithinApexTip) A course band lies entirely inside the minimum fabricable apex tip
    CourseWithinApexTip { course: usize },
    /// (InvalidOverride) An override gore count is not an even integer in 2..=12
    InvalidOverride { course: usize, gores: u32 },
    /// (UnknownOverrideCourse) An override names a course index the split did not produce
    UnknownOverrideCourse { course: usize },
    /// (InfeasibleCourse) No (gore count, plate size) combination fits this course
    InfeasibleCourse { course: usize },
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::NonPositiveDiameter(d) => {
                write!(f, "(NonPositiveDiameter) tank diameter must be positive, got {}", d)
            },
            LayoutError::DiameterBelowApexMinimum(d) => write!(
                f,
                "(DiameterBelowApexMinimum) tank diameter {} does not exceed the minimum fabricable apex diameter",
                d
            ),
            LayoutError::AngleOutOfRange(a) => write!(
                f,
                "(AngleOutOfRange) angle of repose must lie in (0, 90) degrees, got {}",
                a
            ),
            LayoutError::DegenerateAngle(a) => write!(
                f,
                "(DegenerateAngle) angle of repose {} degrees degenerates the slant-height relation",
                a
            ),
            LayoutError::CourseWithinApexTip { course } => write!(
                f,
                "(CourseWithinApexTip) course {} lies entirely inside the minimum fabricable apex tip; the cone is too slender to split into plate-width courses",
                course
            ),
            LayoutError::InvalidOverride { course, gores } => write!(
                f,
                "(InvalidOverride) course {}: override gore count {} is not an even integer in 2..=12",
                course, gores
            ),
            LayoutError::UnknownOverrideCourse { course } => {
                write!(f, "(UnknownOverrideCourse) no course with index {}", course)
            },
            LayoutError::InfeasibleCourse { course } => write!(
                f,
                "(InfeasibleCourse) course {}: no gore count fits any catalog plate",
                course
            ),
        }
    }
}

/// Why a single (course, gore count, plate) combination cannot be cut.
///
/// Raised by the fitter so the optimizer can distinguish "skip this
/// candidate" from "this course cannot be built at all"; it is never
/// surfaced to `build_layout` callers directly.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InfeasibleFit {
    /// (GoreTooWide) The gore's wide edge exceeds the plate length
    GoreTooWide { gore_width: Real, plate_length: Real },
    /// (CourseTooTall) The course slant height exceeds the plate width
    CourseTooTall { slant_height: Real, plate_width: Real },
}

impl Display for InfeasibleFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfeasibleFit::GoreTooWide { gore_width, plate_length } => write!(
                f,
                "(GoreTooWide) gore wide edge {} exceeds plate length {}",
                gore_width, plate_length
            ),
            InfeasibleFit::CourseTooTall { slant_height, plate_width } => write!(
                f,
                "(CourseTooTall) course slant height {} exceeds plate width {}",
                slant_height, plate_width
            ),
        }
    }
}
