use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// per-severity-point resource multipliers for one incident category.
/// requirement fields are ceil(multiplier * severity).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ResourceMultipliers {
    pub medical_teams: f64,
    pub fire_teams: f64,
    pub police_units: f64,
    pub shelters: f64,
    pub estimated_affected: f64,
}

/// multiplier tables for resource requirement prediction, keyed by incident
/// category. categories outside the table use the fallback multiplier set.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ResourceCalibration {
    pub multipliers: IndexMap<String, ResourceMultipliers>,
    pub fallback: ResourceMultipliers,
}

impl Default for ResourceCalibration {
    fn default() -> Self {
        ResourceCalibration {
            multipliers: IndexMap::from([
                (
                    "earthquake".to_string(),
                    ResourceMultipliers {
                        medical_teams: 2.0,
                        fire_teams: 1.5,
                        police_units: 1.0,
                        shelters: 3.0,
                        estimated_affected: 100.0,
                    },
                ),
                (
                    "flood".to_string(),
                    ResourceMultipliers {
                        medical_teams: 1.5,
                        fire_teams: 1.0,
                        police_units: 1.0,
                        shelters: 4.0,
                        estimated_affected: 150.0,
                    },
                ),
                (
                    "fire".to_string(),
                    ResourceMultipliers {
                        medical_teams: 1.0,
                        fire_teams: 3.0,
                        police_units: 0.5,
                        shelters: 1.0,
                        estimated_affected: 50.0,
                    },
                ),
            ]),
            fallback: ResourceMultipliers {
                medical_teams: 1.0,
                fire_teams: 0.5,
                police_units: 1.0,
                shelters: 1.0,
                estimated_affected: 25.0,
            },
        }
    }
}

impl ResourceCalibration {
    /// multipliers for the given incident category, or the fallback set
    pub fn for_type(&self, incident_type: &str) -> &ResourceMultipliers {
        self.multipliers.get(incident_type).unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod test {
    use super::ResourceCalibration;

    #[test]
    fn test_known_type_uses_its_multipliers() {
        let calibration = ResourceCalibration::default();
        assert_eq!(calibration.for_type("fire").fire_teams, 3.0);
    }

    #[test]
    fn test_unknown_type_uses_fallback() {
        let calibration = ResourceCalibration::default();
        let multipliers = calibration.for_type("landslide");
        assert_eq!(multipliers.fire_teams, 0.5);
        assert_eq!(multipliers.estimated_affected, 25.0);
    }
}
