use serde::{Deserialize, Serialize};

/// an incoming incident report as received from the intake layer. immutable
/// input to severity estimation and resource prediction; never persisted here.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IncidentDescriptor {
    /// free-form incident category ("earthquake", "flood", ...). categories
    /// outside the calibrated table fall back to a default base score.
    pub incident_type: String,
    /// free-text description, scanned for severity keywords
    pub description: String,
    /// free-text location, scanned for high-density area names
    pub location: String,
}

impl IncidentDescriptor {
    pub fn new(incident_type: &str, description: &str, location: &str) -> IncidentDescriptor {
        IncidentDescriptor {
            incident_type: incident_type.to_string(),
            description: description.to_string(),
            location: location.to_string(),
        }
    }
}

/// incident urgency on a 1-10 scale, derived heuristically. the clamped
/// constructor is the only way in, so the bounds invariant holds everywhere.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SeverityScore(u8);

impl SeverityScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// builds a severity score, clamping the raw sum into [1, 10]
    pub fn clamped(raw: i64) -> SeverityScore {
        SeverityScore(raw.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for SeverityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::SeverityScore;

    #[test]
    fn test_clamped_within_range() {
        assert_eq!(SeverityScore::clamped(7).value(), 7);
    }

    #[test]
    fn test_clamped_below_minimum() {
        // keyword/location adjustments can never drive a score below 1
        assert_eq!(SeverityScore::clamped(-5).value(), 1);
        assert_eq!(SeverityScore::clamped(0).value(), 1);
    }

    #[test]
    fn test_clamped_above_maximum() {
        assert_eq!(SeverityScore::clamped(23).value(), 10);
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_value(SeverityScore::clamped(8)).expect("test failed");
        assert_eq!(json, serde_json::json!(8));
    }
}
