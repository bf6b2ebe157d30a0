//! Flat-plate layout estimation for **concentric cone** tank bottoms.
//!
//! Given a tank diameter, an angle of repose, and a material of
//! construction, this crate decomposes the cone into horizontal
//! [courses](course::Course), finds the per-course [gore](gore) count
//! that nests onto the fewest stock plates with the least waste, and
//! returns a [`LayoutResult`] with plate counts, waste areas, the
//! break-diameter sequence, and the developed polygon of every gore at
//! its nested plate position.
//!
//! The core is pure and synchronous: [`build_layout`] is a function of
//! its inputs alone, so callers may recompute on every input change or
//! memoize on `(TankSpec, overrides)` freely. Interactive input,
//! on-screen rendering, and flat-file export are consumers of the
//! returned structures, not part of this crate.
//!
//! ```
//! use coneplate::{Material, TankSpec, build_layout};
//!
//! let spec = TankSpec {
//!     diameter: 168.0,
//!     angle_of_repose: 45.0,
//!     material: Material::CarbonSteel,
//!     opportunity_id: None,
//! };
//! let layout = build_layout(&spec, None).unwrap();
//! assert_eq!(layout.break_diameters.len(), layout.courses.len() + 1);
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod catalog;
pub mod cone;
pub mod course;
pub mod errors;
pub mod float_types;
pub mod gore;
pub mod layout;
pub mod optimize;

pub use catalog::{Material, PlateSize, plate_sizes};
pub use cone::{APEX_MIN_DIAMETER, ConeProfile};
pub use course::Course;
pub use errors::{InfeasibleFit, LayoutError};
pub use gore::{GoreCandidate, PlacedGore};
pub use layout::{CourseOverrides, LayoutResult, TankSpec, build_layout};
