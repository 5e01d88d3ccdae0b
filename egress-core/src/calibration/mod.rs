//! named scoring tables injected into the estimation and ranking models.
//! every table ships with the calibrated defaults but deserializes from
//! configuration, so regional recalibration never requires a code change.

mod distance_calibration;
mod resource_calibration;
mod severity_calibration;

pub use distance_calibration::DistanceCalibration;
pub use resource_calibration::{ResourceCalibration, ResourceMultipliers};
pub use severity_calibration::SeverityCalibration;
