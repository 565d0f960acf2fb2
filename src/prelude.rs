//! Convenience re-exports for working with field models.

pub use crate::constants::*;
pub use crate::fields::{Describe, ElectricFieldModel, FieldSample, MagneticFieldModel};
pub use crate::laws::{point_charge_field_magnitude, straight_wire_field_magnitude};
pub use crate::math::{format_components, R3, Scalar};
