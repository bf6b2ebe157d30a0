//! Static supplier plate catalog, keyed by material of construction.

use crate::float_types::Real;
use serde::{Deserialize, Serialize};

/// Material of construction for the cone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Stainless,
    CarbonSteel,
}

/// One stock plate size, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateSize {
    pub width: Real,
    pub length: Real,
}

impl PlateSize {
    pub const fn new(width: Real, length: Real) -> Self {
        Self { width, length }
    }

    /// Gross plate area in square inches.
    pub fn area(&self) -> Real {
        self.width * self.length
    }
}

impl std::fmt::Display for PlateSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\" x {}\"", self.width, self.length)
    }
}

// Standard supplier sizes. Stainless comes in 48" and 60" widths up to
// 480" coil-fed lengths; carbon plate runs wider and only in long stock.
const STAINLESS_PLATES: [PlateSize; 12] = [
    PlateSize::new(48.0, 96.0),
    PlateSize::new(48.0, 120.0),
    PlateSize::new(48.0, 144.0),
    PlateSize::new(48.0, 240.0),
    PlateSize::new(48.0, 360.0),
    PlateSize::new(48.0, 480.0),
    PlateSize::new(60.0, 96.0),
    PlateSize::new(60.0, 120.0),
    PlateSize::new(60.0, 144.0),
    PlateSize::new(60.0, 240.0),
    PlateSize::new(60.0, 360.0),
    PlateSize::new(60.0, 480.0),
];

const CARBON_PLATES: [PlateSize; 6] = [
    PlateSize::new(96.0, 240.0),
    PlateSize::new(96.0, 360.0),
    PlateSize::new(96.0, 480.0),
    PlateSize::new(120.0, 240.0),
    PlateSize::new(120.0, 360.0),
    PlateSize::new(120.0, 480.0),
];

/// Every stock plate size available for `material`.
pub const fn plate_sizes(material: Material) -> &'static [PlateSize] {
    match material {
        Material::Stainless => &STAINLESS_PLATES,
        Material::CarbonSteel => &CARBON_PLATES,
    }
}

/// The longest course (along the slant axis) that any stock plate for
/// `material` can carry: the widest available plate width.
pub fn max_course_slant(material: Material) -> Real {
    plate_sizes(material)
        .iter()
        .map(|p| p.width)
        .fold(0.0, Real::max)
}
