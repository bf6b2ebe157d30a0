//! Cone slant geometry: total slant height and the break-diameter profile.

use crate::errors::LayoutError;
use crate::float_types::{EPSILON, PI, Real};
use serde::{Deserialize, Serialize};

/// Smallest fabricable tip diameter, in inches. The developed profile is
/// clipped here instead of tapering to a true zero-width point.
pub const APEX_MIN_DIAMETER: Real = 2.0;

/// The linear diameter profile of a concentric cone along its slant,
/// from the apex (slant position 0) to the base (slant position
/// `total_slant_height`).
///
/// Derived once per estimation run and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConeProfile {
    base_diameter: Real,
    angle_of_repose: Real,
    total_slant_height: Real,
}

impl ConeProfile {
    /// Computes the profile for a tank of `diameter` inches whose cone
    /// tapers at `angle_of_repose` degrees.
    ///
    /// The slant is the hypotenuse of the right triangle formed by the
    /// tank radius and the repose angle: `radius / sin(angle)`.
    pub fn compute(diameter: Real, angle_of_repose: Real) -> Result<Self, LayoutError> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(LayoutError::NonPositiveDiameter(diameter));
        }
        if diameter <= APEX_MIN_DIAMETER {
            return Err(LayoutError::DiameterBelowApexMinimum(diameter));
        }
        if !angle_of_repose.is_finite() || angle_of_repose <= 0.0 || angle_of_repose >= 90.0 {
            return Err(LayoutError::AngleOutOfRange(angle_of_repose));
        }
        // Guard the division before it can produce an infinity.
        let sin_angle = angle_of_repose.to_radians().sin();
        if sin_angle < EPSILON {
            return Err(LayoutError::DegenerateAngle(angle_of_repose));
        }
        let total_slant_height = diameter / 2.0 / sin_angle;
        if !total_slant_height.is_finite() {
            return Err(LayoutError::DegenerateAngle(angle_of_repose));
        }
        Ok(Self {
            base_diameter: diameter,
            angle_of_repose,
            total_slant_height,
        })
    }

    pub const fn base_diameter(&self) -> Real {
        self.base_diameter
    }

    pub const fn angle_of_repose(&self) -> Real {
        self.angle_of_repose
    }

    /// Slant distance from apex to base, in inches.
    pub const fn total_slant_height(&self) -> Real {
        self.total_slant_height
    }

    /// Cone diameter at slant position `s` (measured from the apex),
    /// clipped below at [`APEX_MIN_DIAMETER`].
    ///
    /// The cone is a linear taper, so diameter scales with `s` directly.
    pub fn diameter_at(&self, s: Real) -> Real {
        let linear = s / self.total_slant_height * self.base_diameter;
        linear.max(APEX_MIN_DIAMETER)
    }

    /// Slant position where the clipped apex begins, i.e. where the
    /// linear taper reaches [`APEX_MIN_DIAMETER`].
    pub fn apex_slant(&self) -> Real {
        APEX_MIN_DIAMETER / self.base_diameter * self.total_slant_height
    }

    /// Developed lateral surface area of the full cone, `π · r · slant`.
    pub fn surface_area(&self) -> Real {
        PI * self.base_diameter / 2.0 * self.total_slant_height
    }
}
