//! Electromagnetic field samples and models.

mod electric;
mod magnetic;
mod sample;

pub use electric::ElectricFieldModel;
pub use magnetic::MagneticFieldModel;
pub use sample::{Describe, FieldSample};
