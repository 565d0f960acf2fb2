//! Closed-form field-magnitude laws.
//!
//! Both laws are evaluated exactly as written, with no range checks: a
//! zero distance divides to ±∞ and propagates per IEEE-754.

use std::f64::consts::PI;

use crate::constants::{VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::math::Scalar;

/// Electric field magnitude of a point charge `charge_c` (C) at distance
/// `distance_m` (m), from Gauss's law: E = Q / (4π r² ε₀). Result in N/C.
#[inline]
#[must_use]
pub fn point_charge_field_magnitude(charge_c: Scalar, distance_m: Scalar) -> Scalar {
    charge_c / (4.0 * PI * distance_m * distance_m * VACUUM_PERMITTIVITY)
}

/// Magnetic flux density at distance `distance_m` (m) from a long straight
/// wire carrying `current_a` (A), from Ampère's law: B = μ₀ I / (2π r).
/// Result in tesla.
#[inline]
#[must_use]
pub fn straight_wire_field_magnitude(current_a: Scalar, distance_m: Scalar) -> Scalar {
    VACUUM_PERMEABILITY * current_a / (2.0 * PI * distance_m)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn point_charge_matches_hand_computed_reference() {
        // 1 µC at 5 cm: 1e-6 / (4π · 0.0025 · ε₀).
        let e = point_charge_field_magnitude(1.0e-6, 0.05);
        let reference = 1.0e-6 / (4.0 * PI * 0.0025 * VACUUM_PERMITTIVITY);
        assert_relative_eq!(e, reference, max_relative = 1.0e-9);
        assert_relative_eq!(e, 3.595_1e6, max_relative = 1.0e-3);
    }

    #[test]
    fn straight_wire_cancels_to_exact_value() {
        // (4π×10⁻⁷ · 10) / (2π · 0.05): the π cancels, leaving exactly 4×10⁻⁵ T.
        let b = straight_wire_field_magnitude(10.0, 0.05);
        assert_relative_eq!(b, 4.0e-5, max_relative = 1.0e-12);
    }

    #[test]
    fn zero_distance_propagates_infinity() {
        assert!(point_charge_field_magnitude(1.0e-6, 0.0).is_infinite());
        assert!(straight_wire_field_magnitude(10.0, 0.0).is_infinite());
    }
}
