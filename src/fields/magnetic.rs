use std::fmt;

use crate::laws::straight_wire_field_magnitude;
use crate::math::{format_components, Scalar};

use super::sample::{Describe, FieldSample};

/// Magnetic field model: a spatial sample plus a calculated scalar
/// magnitude in tesla (T).
///
/// Mirrors [`ElectricFieldModel`] with Ampère's law (long straight wire
/// form) in place of Gauss's law.
///
/// [`ElectricFieldModel`]: super::ElectricFieldModel
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticFieldModel {
    sample: FieldSample,
    calculated_magnitude: Scalar,
}

impl MagneticFieldModel {
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

    /// Last calculated flux density in tesla (zero until computed).
    #[must_use]
    pub const fn calculated_magnitude(&self) -> Scalar {
        self.calculated_magnitude
    }

    /// Evaluates Ampère's law B = μ₀ I / (2π r) for a wire current
    /// `current_a` (A) at distance `distance_m` (m) and stores the result.
    ///
    /// The stored components are untouched. A zero distance is not
    /// guarded; the magnitude becomes ±∞ per IEEE-754.
    pub fn compute_field(&mut self, current_a: Scalar, distance_m: Scalar) {
        self.calculated_magnitude = straight_wire_field_magnitude(current_a, distance_m);
    }

    /// Returns a new model whose components are the element-wise sum of
    /// `self` and `other`; the result's magnitude is zero (uncalculated).
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let sum = self.sample.component_sum(&other.sample);
        Self::new(sum.x(), sum.y(), sum.z())
    }
}

impl Describe for MagneticFieldModel {
    fn describe(&self) -> String {
        format!(
            "{}\nCalculated Magnetic Field: {} T",
            self.sample.describe(),
            self.calculated_magnitude
        )
    }
}

/// Renders only the stored components, not the calculated magnitude.
impl fmt::Display for MagneticFieldModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Magnetic Field components: {}",
            format_components(self.sample.components())
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn compute_field_applies_ampere_law_exactly() {
        let mut m = MagneticFieldModel::new(1.0e-4, 2.0e-4, 3.0e-4);
        m.compute_field(10.0, 0.05);
        // (4π×10⁻⁷ · 10) / (2π · 0.05) = 4×10⁻⁵ T.
        assert_relative_eq!(m.calculated_magnitude(), 4.0e-5, max_relative = 1.0e-12);
        assert_relative_eq!(m.sample().x(), 1.0e-4);
    }

    #[test]
    fn add_sums_components_and_resets_magnitude() {
        let mut a = MagneticFieldModel::new(1.0e-4, 2.0e-4, 3.0e-4);
        a.compute_field(10.0, 0.05);
        let b = MagneticFieldModel::new(2.0e-4, 3.0e-4, 1.0e-4);
        let c = a.add(&b);
        assert_relative_eq!(c.sample().x(), 3.0e-4, max_relative = 1.0e-12);
        assert_relative_eq!(c.sample().y(), 5.0e-4, max_relative = 1.0e-12);
        assert_relative_eq!(c.sample().z(), 4.0e-4, max_relative = 1.0e-12);
        assert_eq!(c.calculated_magnitude(), 0.0);
    }

    #[test]
    fn add_is_commutative_on_components() {
        let a = MagneticFieldModel::new(1.0e-4, 2.0e-4, 3.0e-4);
        let b = MagneticFieldModel::new(2.0e-4, 3.0e-4, 1.0e-4);
        assert_eq!(a.add(&b).sample(), b.add(&a).sample());
    }

    #[test]
    fn describe_appends_tesla_line_to_base() {
        let m = MagneticFieldModel::new(0.0, 0.0, 0.0);
        assert_eq!(
            m.describe(),
            "Field components: (0, 0, 0)\nCalculated Magnetic Field: 0 T"
        );
    }

    #[test]
    fn display_renders_components_only() {
        let m = MagneticFieldModel::new(1.0e-4, 2.0e-4, 3.0e-4);
        assert_eq!(
            m.to_string(),
            "Magnetic Field components: (0.0001, 0.0002, 0.0003)"
        );
    }
}
