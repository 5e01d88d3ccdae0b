mod incident;
mod requirements;
mod route;

pub use incident::{IncidentDescriptor, SeverityScore};
pub use requirements::ResourceRequirements;
pub use route::{
    CapacityStatus, DifficultyLevel, OptimizationFactors, RankedRoute, RouteCandidate, RouteStatus,
};
