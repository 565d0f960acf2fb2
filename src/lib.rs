#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Shared mathematical utilities (scalar/vector aliases, formatting).
pub mod math;
/// Closed-form field-magnitude laws (Gauss, Ampère).
pub mod laws;
/// Electromagnetic field samples and models.
pub mod fields;

/// Common exports for downstream crates.
pub mod prelude;
