pub mod calibration;
pub mod model;
pub mod resources;
pub mod severity;
pub mod util;
