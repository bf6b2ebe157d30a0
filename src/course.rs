//! Course splitting: partition the slant into plate-width-sized bands.

use crate::catalog::{self, Material};
use crate::cone::ConeProfile;
use crate::errors::LayoutError;
use crate::float_types::{EPSILON, Real};
use serde::{Deserialize, Serialize};

/// One horizontal ring of the cone, indexed 1-based from the top
/// (largest diameter) down toward the apex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub index: usize,
    pub top_diameter: Real,
    pub bottom_diameter: Real,
    pub slant_height: Real,
}

/// Splits the cone into the fewest equal-height courses such that no
/// course is taller (along the slant) than the widest stock plate for
/// `material`.
///
/// Equal sizing keeps seam spacing uniform; greedy packing from one end
/// would leave one trivially short course while forcing the rest to the
/// constraint boundary. Course slant heights sum to the profile's total
/// slant height exactly (up to floating error).
///
/// Fails when the bottom course band would lie entirely inside the apex
/// clip: its break diameters would both read the minimum tip diameter,
/// a zero-taper band no one should be quoted plates for.
pub fn split_courses(
    profile: &ConeProfile,
    material: Material,
) -> Result<Vec<Course>, LayoutError> {
    let total = profile.total_slant_height();
    let max_slant = catalog::max_course_slant(material);
    // The epsilon keeps a ratio that is an integer up to floating error
    // (e.g. 240.00000000000003 / 120) from spilling into an extra course.
    let n = (total / max_slant - EPSILON).ceil().max(1.0) as usize;
    let course_slant = total / n as Real;

    // Every interior break must sit above the apex clip or the
    // break-diameter sequence stops strictly decreasing. The lowest
    // interior break is one course height above the apex.
    if n > 1 && course_slant <= profile.apex_slant() {
        return Err(LayoutError::CourseWithinApexTip { course: n });
    }

    let courses = (0..n)
        .map(|i| {
            // Slant positions are measured from the apex; course i spans
            // [total - (i+1)*course_slant, total - i*course_slant].
            let s_top = total - i as Real * course_slant;
            let s_bottom = total - (i + 1) as Real * course_slant;
            Course {
                index: i + 1,
                top_diameter: profile.diameter_at(s_top),
                bottom_diameter: profile.diameter_at(s_bottom.max(0.0)),
                slant_height: course_slant,
            }
        })
        .collect();
    Ok(courses)
}

/// The break-diameter sequence, top of the cone to the apex; one more
/// entry than there are courses.
pub fn break_diameters(courses: &[Course]) -> Vec<Real> {
    let mut breaks: Vec<Real> = courses.iter().map(|c| c.top_diameter).collect();
    if let Some(last) = courses.last() {
        breaks.push(last.bottom_diameter);
    }
    breaks
}
