//! Layout assembly: validation, orchestration, and manual overrides.

use std::collections::BTreeMap;

use crate::catalog::{self, Material};
use crate::cone::ConeProfile;
use crate::course::{self, Course};
use crate::errors::LayoutError;
use crate::float_types::Real;
use crate::gore::{self, GoreCandidate, PlacedGore};
use crate::optimize;
use serde::{Deserialize, Serialize};

/// Immutable input for one estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankSpec {
    /// Tank diameter, inches.
    pub diameter: Real,
    /// Cone taper angle, degrees, open interval (0, 90).
    pub angle_of_repose: Real,
    pub material: Material,
    /// Opaque pass-through for the export layer's filename; the core
    /// does not interpret it.
    pub opportunity_id: Option<String>,
}

/// Manual gore-count overrides, course index (1-based) to an even count
/// in 2..=12. Ordered so identical override sets always walk the same way.
pub type CourseOverrides = BTreeMap<usize, u32>;

/// One course of the finished layout: the course band, the chosen
/// candidate, and every gore placed at its nested plate position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseLayout {
    pub course: Course,
    pub candidate: GoreCandidate,
    pub placed_gores: Vec<PlacedGore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTotals {
    pub plates_needed: u32,
    pub waste_area: Real,
}

/// The finished layout, owned entirely by the caller; no state survives
/// the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub opportunity_id: Option<String>,
    pub total_slant_height: Real,
    /// Top of the cone to the apex; one more entry than courses.
    pub break_diameters: Vec<Real>,
    pub courses: Vec<CourseLayout>,
    pub totals: LayoutTotals,
}

fn validate_overrides(overrides: &CourseOverrides) -> Result<(), LayoutError> {
    for (&course, &gores) in overrides {
        if gores < 2 || gores > 12 || gores % 2 != 0 {
            return Err(LayoutError::InvalidOverride { course, gores });
        }
    }
    Ok(())
}

/// Builds the complete flat-plate layout for `spec`.
///
/// Pure function: identical `(spec, overrides)` always yields an
/// identical [`LayoutResult`]. Overridden courses are re-fit at the
/// forced gore count against the best feasible plate; every other
/// course keeps its automatically optimized candidate.
pub fn build_layout(
    spec: &TankSpec,
    overrides: Option<&CourseOverrides>,
) -> Result<LayoutResult, LayoutError> {
    // Validation happens before any geometry is computed.
    if let Some(overrides) = overrides {
        validate_overrides(overrides)?;
    }
    let profile = ConeProfile::compute(spec.diameter, spec.angle_of_repose)?;

    let courses = course::split_courses(&profile, spec.material)?;
    if let Some(overrides) = overrides {
        for &index in overrides.keys() {
            if index < 1 || index > courses.len() {
                return Err(LayoutError::UnknownOverrideCourse { course: index });
            }
        }
    }

    let plates = catalog::plate_sizes(spec.material);
    let break_diameters = course::break_diameters(&courses);
    let mut course_layouts = Vec::with_capacity(courses.len());
    for course in courses {
        let forced = overrides.and_then(|o| o.get(&course.index).copied());
        let candidate = match forced {
            Some(gores) => optimize::fit_forced_count(&course, gores, plates)?,
            None => optimize::optimize_course(&course, plates)?,
        };
        let placed_gores = gore::place_gores(&course, &candidate);
        course_layouts.push(CourseLayout { course, candidate, placed_gores });
    }

    let totals = LayoutTotals {
        plates_needed: course_layouts.iter().map(|c| c.candidate.plates_needed).sum(),
        waste_area: course_layouts.iter().map(|c| c.candidate.waste_area).sum(),
    };
    Ok(LayoutResult {
        opportunity_id: spec.opportunity_id.clone(),
        total_slant_height: profile.total_slant_height(),
        break_diameters,
        courses: course_layouts,
        totals,
    })
}
