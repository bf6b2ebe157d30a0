//! Per-course gore-count optimization over the plate catalog.

use crate::catalog::PlateSize;
use crate::course::Course;
use crate::errors::LayoutError;
use crate::gore::{self, GoreCandidate};
use log::debug;

/// Even gore counts considered for every course.
pub const GORE_COUNTS: [u32; 6] = [2, 4, 6, 8, 10, 12];

/// True when `a` beats `b` under the selection rule: fewest plates,
/// then least waste, then fewest gores (simpler fabrication).
fn better(a: &GoreCandidate, b: &GoreCandidate) -> bool {
    (a.plates_needed, a.waste_area, a.gores) < (b.plates_needed, b.waste_area, b.gores)
}

/// Picks the best (gore count, plate size) combination for one course
/// by bounded exhaustive search over [`GORE_COUNTS`] × `plates`.
///
/// Infeasible combinations are discarded; an entirely infeasible grid is
/// an [`LayoutError::InfeasibleCourse`], never a silently substituted
/// default.
pub fn optimize_course(course: &Course, plates: &[PlateSize]) -> Result<GoreCandidate, LayoutError> {
    let mut best: Option<GoreCandidate> = None;

    for &gores in &GORE_COUNTS {
        for &plate in plates {
            match gore::fit_gores(course, gores, plate) {
                Ok(candidate) => {
                    debug!(
                        "course {}: {} gores on {} -> {} per plate, {} plate(s), waste {:.2}",
                        course.index,
                        gores,
                        plate,
                        candidate.fit_per_plate,
                        candidate.plates_needed,
                        candidate.waste_area
                    );
                    if best.as_ref().is_none_or(|b| better(&candidate, b)) {
                        best = Some(candidate);
                    }
                },
                Err(infeasible) => {
                    debug!("course {}: {} gores on {} -> {}", course.index, gores, plate, infeasible);
                },
            }
        }
    }

    best.ok_or(LayoutError::InfeasibleCourse { course: course.index })
}

/// Re-fits one course at a forced gore count, picking the best feasible
/// plate for that count alone. Used for manual per-course overrides.
pub fn fit_forced_count(
    course: &Course,
    gores: u32,
    plates: &[PlateSize],
) -> Result<GoreCandidate, LayoutError> {
    let mut best: Option<GoreCandidate> = None;
    for &plate in plates {
        if let Ok(candidate) = gore::fit_gores(course, gores, plate) {
            if best.as_ref().is_none_or(|b| better(&candidate, b)) {
                best = Some(candidate);
            }
        }
    }
    best.ok_or(LayoutError::InfeasibleCourse { course: course.index })
}
