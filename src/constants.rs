//! Baseline physical constants.
//!
//! ## Accuracy
//!
//! These are the classical pre-2019 SI values: μ₀ is exactly 4π × 10⁻⁷ H/m
//! by the old ampere definition, and ε₀ follows from ε₀ = 1/(μ₀c²) to ten
//! significant figures. The 2019 redefinition shifted both into measured
//! quantities; the difference appears past the tenth digit and is
//! irrelevant at the precision handled here.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2014 recommended values (pre-redefinition).

use std::f64::consts::PI;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Classical value: 8.854187817 × 10⁻¹² F/m.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_817e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m).
/// Exact classical value: 4π × 10⁻⁷ H/m ≈ 1.2566370614 × 10⁻⁶ H/m.
pub const VACUUM_PERMEABILITY: f64 = 4.0e-7 * PI;
