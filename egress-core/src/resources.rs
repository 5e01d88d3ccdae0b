use crate::calibration::ResourceCalibration;
use crate::model::{ResourceRequirements, SeverityScore};

/// predicts response resource requirements from incident category and
/// severity. pure table arithmetic with no error path.
#[derive(Clone, Debug, Default)]
pub struct ResourceModel {
    calibration: ResourceCalibration,
}

impl ResourceModel {
    pub fn new(calibration: ResourceCalibration) -> ResourceModel {
        ResourceModel { calibration }
    }

    /// each requirement field is ceil(multiplier * severity), so any nonzero
    /// multiplier yields at least one unit at the minimum severity.
    pub fn predict(&self, incident_type: &str, severity: SeverityScore) -> ResourceRequirements {
        let multipliers = self.calibration.for_type(incident_type);
        let severity = severity.value() as f64;
        ResourceRequirements {
            medical_teams: scaled(multipliers.medical_teams, severity),
            fire_teams: scaled(multipliers.fire_teams, severity),
            police_units: scaled(multipliers.police_units, severity),
            shelters: scaled(multipliers.shelters, severity),
            estimated_affected: scaled(multipliers.estimated_affected, severity),
        }
    }
}

fn scaled(multiplier: f64, severity: f64) -> u64 {
    (multiplier * severity).ceil() as u64
}

#[cfg(test)]
mod test {
    use super::ResourceModel;
    use crate::model::SeverityScore;

    #[test]
    fn test_earthquake_requirements() {
        let model = ResourceModel::default();
        let requirements = model.predict("earthquake", SeverityScore::clamped(7));
        assert_eq!(requirements.medical_teams, 14);
        assert_eq!(requirements.fire_teams, 11); // ceil(7 * 1.5)
        assert_eq!(requirements.police_units, 7);
        assert_eq!(requirements.shelters, 21);
        assert_eq!(requirements.estimated_affected, 700);
    }

    #[test]
    fn test_fractional_multiplier_rounds_up() {
        let model = ResourceModel::default();
        // fire police_units multiplier is 0.5: ceil(3 * 0.5) = 2
        let requirements = model.predict("fire", SeverityScore::clamped(3));
        assert_eq!(requirements.police_units, 2);
    }

    #[test]
    fn test_unknown_type_uses_fallback_multipliers() {
        let model = ResourceModel::default();
        let requirements = model.predict("landslide", SeverityScore::clamped(4));
        assert_eq!(requirements.medical_teams, 4);
        assert_eq!(requirements.fire_teams, 2);
        assert_eq!(requirements.estimated_affected, 100);
    }

    #[test]
    fn test_minimum_severity_still_allocates() {
        let model = ResourceModel::default();
        let requirements = model.predict("flood", SeverityScore::clamped(1));
        assert_eq!(requirements.medical_teams, 2); // ceil(1.5)
        assert_eq!(requirements.shelters, 4);
    }
}
