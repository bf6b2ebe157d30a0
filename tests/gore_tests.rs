mod support;

use coneplate::{
    InfeasibleFit, PlateSize,
    float_types::{PI, Real},
    gore::{developed_gore_area, fit_gores, place_gores},
    optimize::{GORE_COUNTS, optimize_course},
    plate_sizes,
};

#[test]
fn hand_calculated_fit_on_a_60_by_144_plate() {
    // Wide edge pi*90/4 = 70.69", narrow edge 35.34", interleave step
    // (70.69 + 35.34)/2 = 53.01": two gores per row, one 50"-tall row
    // across the 60" width, so 4 gores need 2 plates.
    let course = support::make_course(90.0, 45.0, 50.0);
    let plate = PlateSize::new(60.0, 144.0);
    let candidate = fit_gores(&course, 4, plate).unwrap();

    assert_eq!(candidate.fit_per_plate, 2);
    assert_eq!(candidate.plates_needed, 2);

    let wide = PI * 90.0 / 4.0;
    let narrow = PI * 45.0 / 4.0;
    let expected_waste = 2.0 * plate.area() - 4.0 * (wide + narrow) / 2.0 * 50.0;
    assert!(candidate.waste_area >= 0.0);
    assert!(support::approx_eq(candidate.waste_area, expected_waste, 1e-6));
}

#[test]
fn developed_area_matches_the_trapezoid_formula() {
    let course = support::make_course(90.0, 45.0, 50.0);
    for &gores in &GORE_COUNTS {
        let wide = PI * 90.0 / gores as Real;
        let narrow = PI * 45.0 / gores as Real;
        let expected = (wide + narrow) / 2.0 * 50.0;
        assert!(support::approx_eq(developed_gore_area(&course, gores), expected, 1e-9));
    }
}

#[test]
fn course_taller_than_the_plate_width_is_signaled() {
    let course = support::make_course(90.0, 45.0, 100.0);
    let err = fit_gores(&course, 4, PlateSize::new(60.0, 144.0)).unwrap_err();
    assert!(matches!(err, InfeasibleFit::CourseTooTall { .. }));
}

#[test]
fn gore_wider_than_the_plate_length_is_signaled() {
    // pi*400/2 = 628" of wide edge against a 144" plate.
    let course = support::make_course(400.0, 200.0, 50.0);
    let err = fit_gores(&course, 2, PlateSize::new(60.0, 144.0)).unwrap_err();
    assert!(matches!(err, InfeasibleFit::GoreTooWide { .. }));
}

#[test]
fn tall_plates_stack_multiple_rows() {
    // 25"-tall course on a 96"-wide carbon plate: three rows.
    let course = support::make_course(40.0, 20.0, 25.0);
    let plate = PlateSize::new(96.0, 240.0);
    let candidate = fit_gores(&course, 6, plate).unwrap();
    // Wide edge pi*40/6 = 20.94", step 15.71": 14 gores per row.
    assert_eq!(candidate.fit_per_plate, 14 * 3);
    assert_eq!(candidate.plates_needed, 1);
}

#[test]
fn candidate_invariants_hold_across_the_whole_grid() {
    let course = support::make_course(120.0, 60.0, 55.0);
    for material in [coneplate::Material::Stainless, coneplate::Material::CarbonSteel] {
        for &gores in &GORE_COUNTS {
            for &plate in plate_sizes(material) {
                let Ok(c) = fit_gores(&course, gores, plate) else {
                    continue;
                };
                assert!(c.fit_per_plate >= 1);
                assert_eq!(c.plates_needed, gores.div_ceil(c.fit_per_plate));
                assert!(c.waste_area >= 0.0);
                let reconstructed = c.plates_needed as Real * plate.area()
                    - gores as Real * developed_gore_area(&course, gores);
                assert!(support::approx_eq(c.waste_area, reconstructed, 1e-6));
            }
        }
    }
}

#[test]
fn placed_gores_stay_inside_their_plate() {
    let course = support::make_course(90.0, 45.0, 50.0);
    let plate = PlateSize::new(60.0, 144.0);
    let candidate = fit_gores(&course, 8, plate).unwrap();
    let placed = place_gores(&course, &candidate);

    assert_eq!(placed.len(), 8);
    for gore in &placed {
        assert!(gore.plate < candidate.plates_needed as usize);
        assert_eq!(gore.outline.len(), 4);
        for [x, y] in &gore.outline {
            assert!(*x >= -1e-9 && *x <= plate.length + 1e-6);
            assert!(*y >= -1e-9 && *y <= plate.width + 1e-6);
        }
    }
}

#[test]
fn adjacent_gores_share_a_slant_edge() {
    let course = support::make_course(90.0, 45.0, 50.0);
    let plate = PlateSize::new(60.0, 144.0);
    let candidate = fit_gores(&course, 4, plate).unwrap();
    let placed = place_gores(&course, &candidate);

    // Gore 0 is upright, gore 1 is flipped beside it on the same plate;
    // the upright's bottom-right corner is the flipped's bottom-left.
    assert_eq!(placed[0].plate, placed[1].plate);
    let [x0, y0] = placed[0].outline[1];
    let [x1, y1] = placed[1].outline[0];
    assert!(support::approx_eq(x0, x1, 1e-9));
    assert!(support::approx_eq(y0, y1, 1e-9));
}

#[test]
fn optimizer_picks_a_minimal_candidate() {
    let course = support::make_course(84.0, 43.0, 59.4);
    let plates = plate_sizes(coneplate::Material::Stainless);
    let best = optimize_course(&course, plates).unwrap();

    assert!(best.gores % 2 == 0 && (2..=12).contains(&best.gores));

    // No candidate in the grid beats it on the (plates, waste) rule.
    for &gores in &GORE_COUNTS {
        for &plate in plates {
            let Ok(c) = fit_gores(&course, gores, plate) else {
                continue;
            };
            assert!(c.plates_needed >= best.plates_needed);
            if c.plates_needed == best.plates_needed {
                assert!(c.waste_area + 1e-9 >= best.waste_area);
            }
        }
    }
}

#[test]
fn fully_infeasible_grid_reports_the_course() {
    // Wide edge exceeds every stock length even at 12 gores, and the
    // 100" slant exceeds every stainless width.
    let course = support::make_course(2000.0, 1000.0, 100.0);
    let err = optimize_course(&course, plate_sizes(coneplate::Material::Stainless)).unwrap_err();
    assert_eq!(err, coneplate::LayoutError::InfeasibleCourse { course: 1 });
}
