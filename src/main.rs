// main.rs
//
// Minimal walk-through of the coneplate API: build an automatic layout,
// then re-run with a manual gore-count override on the top course.

use coneplate::{CourseOverrides, LayoutResult, Material, TankSpec, build_layout};

fn print_layout(label: &str, layout: &LayoutResult) {
    println!("== {label} ==");
    println!("total slant height: {:.2} in", layout.total_slant_height);
    println!(
        "break diameters (top -> apex): {:?}",
        layout.break_diameters.iter().map(|d| (d * 100.0).round() / 100.0).collect::<Vec<_>>()
    );
    for cl in &layout.courses {
        println!(
            "course {}: {} gores on {} -> fits {}/plate, {} plate(s), waste {:.1} in2",
            cl.course.index,
            cl.candidate.gores,
            cl.candidate.plate,
            cl.candidate.fit_per_plate,
            cl.candidate.plates_needed,
            cl.candidate.waste_area,
        );
    }
    println!(
        "totals: {} plate(s), {:.1} in2 waste\n",
        layout.totals.plates_needed, layout.totals.waste_area
    );
}

fn main() {
    env_logger::init();

    let spec = TankSpec {
        diameter: 168.0,
        angle_of_repose: 45.0,
        material: Material::Stainless,
        opportunity_id: Some("OPP-12345".into()),
    };

    match build_layout(&spec, None) {
        Ok(layout) => print_layout("automatic", &layout),
        Err(e) => {
            eprintln!("layout failed: {e}");
            return;
        },
    }

    // Force the top course to 8 gores; all other courses keep their
    // optimized candidates.
    let overrides: CourseOverrides = [(1, 8)].into_iter().collect();
    match build_layout(&spec, Some(&overrides)) {
        Ok(layout) => print_layout("course 1 forced to 8 gores", &layout),
        Err(e) => eprintln!("layout failed: {e}"),
    }
}
