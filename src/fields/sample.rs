use std::fmt;

use crate::math::{format_components, R3, Scalar};

/// Capability trait for field types that can report their state as text.
///
/// Replaces a virtual-dispatch hierarchy: specialized models delegate to
/// their sample's base line and append their own magnitude line, so a
/// caller holding `&dyn Describe` sees the full specialized output.
pub trait Describe {
    /// Human-readable, possibly multi-line description.
    fn describe(&self) -> String;
}

/// A field sampled at a point: three SI components along the spatial axes.
///
/// Components are fixed at construction; addition produces a new sample.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldSample {
    components: R3,
}

impl FieldSample {
    /// Creates a sample with the given components.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self {
            components: R3::new(x, y, z),
        }
    }

    /// Creates the zero sample `(0, 0, 0)`.
    #[must_use]
    pub fn zeros() -> Self {
        Self::default()
    }

    /// Component along the x axis.
    #[must_use]
    pub fn x(&self) -> Scalar {
        self.components.x
    }

    /// Component along the y axis.
    #[must_use]
    pub fn y(&self) -> Scalar {
        self.components.y
    }

    /// Component along the z axis.
    #[must_use]
    pub fn z(&self) -> Scalar {
        self.components.z
    }

    /// Stored component vector.
    #[must_use]
    pub const fn components(&self) -> &R3 {
        &self.components
    }

    /// Returns a new sample holding the element-wise sum of `self` and
    /// `other`.
    #[must_use]
    pub fn component_sum(&self, other: &Self) -> Self {
        Self {
            components: self.components + other.components,
        }
    }
}

impl Describe for FieldSample {
    fn describe(&self) -> String {
        format!("Field components: {}", format_components(&self.components))
    }
}

impl fmt::Display for FieldSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_components(&self.components))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn zero_argument_construction_yields_origin() {
        let s = FieldSample::zeros();
        assert_eq!(s, FieldSample::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn describe_renders_base_line() {
        let s = FieldSample::new(0.0, 1.0e5, 1.0e3);
        assert_eq!(s.describe(), "Field components: (0, 100000, 1000)");
    }

    #[test]
    fn component_sum_leaves_operands_untouched() {
        let a = FieldSample::new(1.0, 2.0, 3.0);
        let b = FieldSample::new(4.0, 5.0, 6.0);
        let c = a.component_sum(&b);
        assert_relative_eq!(c.x(), 5.0);
        assert_relative_eq!(c.y(), 7.0);
        assert_relative_eq!(c.z(), 9.0);
        assert_relative_eq!(a.x(), 1.0);
        assert_relative_eq!(b.z(), 6.0);
    }
}
