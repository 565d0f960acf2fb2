//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector3;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Renders the components of `vector` as a `(x, y, z)` tuple using plain
/// `f64` display formatting, so `1e5` renders as `100000` and `0.0` as `0`.
#[must_use]
pub fn format_components(vector: &R3) -> String {
    format!("({}, {}, {})", vector.x, vector.y, vector.z)
}
