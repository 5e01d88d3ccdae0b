use serde::{Deserialize, Serialize};

/// predicted response resource allocation for an incident. all counts are
/// whole units, rounded up from the calibrated per-severity multipliers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceRequirements {
    pub medical_teams: u64,
    pub fire_teams: u64,
    pub police_units: u64,
    pub shelters: u64,
    pub estimated_affected: u64,
}
