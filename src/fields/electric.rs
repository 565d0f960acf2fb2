use std::fmt;

use crate::laws::point_charge_field_magnitude;
use crate::math::{format_components, Scalar};

use super::sample::{Describe, FieldSample};

/// Electric field model: a spatial sample plus a calculated scalar
/// magnitude in newtons per coulomb (N/C).
///
/// The magnitude starts at zero and is set only by [`compute_field`]
/// (Gauss's law, point-charge form). Addition combines the geometric
/// components and leaves the result uncalculated.
///
/// [`compute_field`]: Self::compute_field
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricFieldModel {
    sample: FieldSample,
    calculated_magnitude: Scalar,
}

impl ElectricFieldModel {
    /// Creates a model with the given components; the calculated magnitude
    /// starts at zero.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self {
            sample: FieldSample::new(x, y, z),
            calculated_magnitude: 0.0,
        }
    }

    /// Stored spatial sample.
    #[must_use]
    pub const fn sample(&self) -> &FieldSample {
        &self.sample
    }

    /// Last calculated field magnitude in N/C (zero until computed).
    #[must_use]
    pub const fn calculated_magnitude(&self) -> Scalar {
        self.calculated_magnitude
    }

    /// Evaluates Gauss's law E = Q / (4π r² ε₀) for a point charge
    /// `charge_c` (C) at distance `distance_m` (m) and stores the result.
    ///
    /// The stored components are untouched. A zero distance is not
    /// guarded; the magnitude becomes ±∞ per IEEE-754.
    pub fn compute_field(&mut self, charge_c: Scalar, distance_m: Scalar) {
        self.calculated_magnitude = point_charge_field_magnitude(charge_c, distance_m);
    }

    /// Returns a new model whose components are the element-wise sum of
    /// `self` and `other`.
    ///
    /// The result's magnitude is zero regardless of the operands: summing
    /// two already-calculated magnitudes is physically meaningless without
    /// recomputation, so the sum is defined as uncalculated.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let sum = self.sample.component_sum(&other.sample);
        Self::new(sum.x(), sum.y(), sum.z())
    }
}

impl Describe for ElectricFieldModel {
    fn describe(&self) -> String {
        format!(
            "{}\nCalculated Electric Field: {} N/C",
            self.sample.describe(),
            self.calculated_magnitude
        )
    }
}

/// Renders only the stored components, not the calculated magnitude.
impl fmt::Display for ElectricFieldModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Electric Field components: {}",
            format_components(self.sample.components())
        )
    }
}
