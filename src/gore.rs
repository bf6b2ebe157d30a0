//! Developed gore shapes and gore-to-plate nesting.

use crate::catalog::PlateSize;
use crate::course::Course;
use crate::errors::InfeasibleFit;
use crate::float_types::{EPSILON, Real, TAU};
use geo::{Area, LineString, Polygon, coord};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// One evaluated (gore count, plate size) combination for a course.
///
/// Many of these are produced during optimization; only the chosen one
/// survives into the layout result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoreCandidate {
    /// Even gore count in 2..=12.
    pub gores: u32,
    pub plate: PlateSize,
    /// How many gores nest onto one plate (rows × gores per row).
    pub fit_per_plate: u32,
    /// `ceil(gores / fit_per_plate)`.
    pub plates_needed: u32,
    /// Plate area purchased minus developed gore area, square inches.
    pub waste_area: Real,
}

/// One gore placed at its nested position, in plate-local coordinates
/// (x along the plate length, y across the plate width).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedGore {
    /// 0-based index of the plate this gore is cut from.
    pub plate: usize,
    /// Trapezoid corners, counter-clockwise, unclosed.
    pub outline: Vec<[Real; 2]>,
}

/// Developed dimensions of one gore of a course: an isosceles trapezoid
/// whose parallel edges are the developed arcs at the course's top and
/// bottom break diameters.
#[derive(Debug, Clone, Copy)]
struct GoreShape {
    /// Developed arc at the top break, `τ · r_top / gores`.
    wide: Real,
    /// Developed arc at the bottom break.
    narrow: Real,
    /// Course slant height.
    height: Real,
}

impl GoreShape {
    fn of(course: &Course, gores: u32) -> Self {
        let gores = gores as Real;
        Self {
            wide: TAU * (course.top_diameter / 2.0) / gores,
            narrow: TAU * (course.bottom_diameter / 2.0) / gores,
            height: course.slant_height,
        }
    }

    /// Width cost of each gore after the first in an alternating-flip
    /// row: interleaved trapezoids advance by their mean width.
    fn half_pair(&self) -> Real {
        (self.wide + self.narrow) / 2.0
    }
}

/// The developed outline of one gore of `course`, as a trapezoid with
/// its wide edge on the x-axis, centered on x = 0.
pub fn gore_outline(course: &Course, gores: u32) -> Polygon<Real> {
    let g = GoreShape::of(course, gores);
    let exterior = LineString::new(vec![
        coord! { x: -g.wide / 2.0, y: 0.0 },
        coord! { x: g.wide / 2.0, y: 0.0 },
        coord! { x: g.narrow / 2.0, y: g.height },
        coord! { x: -g.narrow / 2.0, y: g.height },
    ]);
    Polygon::new(exterior, vec![])
}

/// Developed area of one gore, square inches.
///
/// Equals the sector-trapezoid formula `(wide + narrow)/2 · height`.
pub fn developed_gore_area(course: &Course, gores: u32) -> Real {
    gore_outline(course, gores).unsigned_area()
}

/// Gores per row and rows per plate for a feasible combination.
///
/// A row of `k` alternating-flip gores spans `wide + (k-1)·(wide+narrow)/2`
/// along the plate length; rows stack across the plate width.
fn row_capacity(shape: &GoreShape, plate: PlateSize) -> (u32, u32) {
    let per_row = 1 + ((plate.length + EPSILON - shape.wide) / shape.half_pair()) as u32;
    let rows = ((plate.width + EPSILON) / shape.height) as u32;
    (per_row, rows)
}

/// Computes how `gores` gores of `course` nest onto one `plate`.
///
/// The course slant lies across the plate width and gores run along the
/// plate length, every second gore flipped end-for-end so that adjacent
/// slant edges coincide. Infeasibility is signaled, never skipped here:
/// the optimizer decides what to do with it.
pub fn fit_gores(
    course: &Course,
    gores: u32,
    plate: PlateSize,
) -> Result<GoreCandidate, InfeasibleFit> {
    debug_assert!(gores >= 2 && gores % 2 == 0, "gore counts are even and >= 2");
    let shape = GoreShape::of(course, gores);

    if shape.height > plate.width + EPSILON {
        return Err(InfeasibleFit::CourseTooTall {
            slant_height: shape.height,
            plate_width: plate.width,
        });
    }
    if shape.wide > plate.length + EPSILON {
        return Err(InfeasibleFit::GoreTooWide {
            gore_width: shape.wide,
            plate_length: plate.length,
        });
    }

    let (per_row, rows) = row_capacity(&shape, plate);
    let fit_per_plate = per_row * rows;
    let plates_needed = gores.div_ceil(fit_per_plate);
    let waste_area =
        plates_needed as Real * plate.area() - gores as Real * developed_gore_area(course, gores);

    Ok(GoreCandidate {
        gores,
        plate,
        fit_per_plate,
        plates_needed,
        waste_area: waste_area.max(0.0),
    })
}

/// Places every gore of a chosen candidate at its nested position.
///
/// Walks gores row-major across plates: gore `j` lands on plate
/// `j / fit_per_plate`, and within a plate fills each row along the
/// length before starting the next row across the width.
pub fn place_gores(course: &Course, candidate: &GoreCandidate) -> Vec<PlacedGore> {
    let shape = GoreShape::of(course, candidate.gores);
    let (per_row, _) = row_capacity(&shape, candidate.plate);
    let half_narrow_inset = (shape.wide - shape.narrow) / 2.0;

    (0..candidate.gores)
        .map(|j| {
            let plate = (j / candidate.fit_per_plate) as usize;
            let slot = j % candidate.fit_per_plate;
            let row = slot / per_row;
            let col = slot % per_row;

            let origin = Point2::new(col as Real * shape.half_pair(), row as Real * shape.height);
            let corners: [Vector2<Real>; 4] = if col % 2 == 0 {
                // Upright: wide edge on the row's lower line.
                [
                    Vector2::new(0.0, 0.0),
                    Vector2::new(shape.wide, 0.0),
                    Vector2::new(shape.wide - half_narrow_inset, shape.height),
                    Vector2::new(half_narrow_inset, shape.height),
                ]
            } else {
                // Flipped end-for-end: wide edge on the row's upper line,
                // slant edges shared with both neighbours.
                [
                    Vector2::new(half_narrow_inset, 0.0),
                    Vector2::new(shape.wide - half_narrow_inset, 0.0),
                    Vector2::new(shape.wide, shape.height),
                    Vector2::new(0.0, shape.height),
                ]
            };

            PlacedGore {
                plate,
                outline: corners
                    .iter()
                    .map(|c| {
                        let p = origin + c;
                        [p.x, p.y]
                    })
                    .collect(),
            }
        })
        .collect()
}
