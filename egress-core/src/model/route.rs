use serde::{Deserialize, Serialize};

/// qualitative hazard/terrain label on a route, applied as a fixed score
/// penalty during balanced ranking
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Moderate,
    Hard,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Open,
    Congested,
    Closed,
}

/// an evacuation route candidate as supplied by the external route store.
/// the ranking engine only reads these; it never mutates or persists them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteCandidate {
    pub name: String,
    pub from_location: String,
    pub to_location: String,
    pub distance_km: Option<f64>,
    pub estimated_time_minutes: Option<u64>,
    pub capacity: Option<u64>,
    pub current_usage: Option<u64>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub current_status: RouteStatus,
}

impl RouteCandidate {
    /// current_usage over capacity as a percentage, the congestion proxy used
    /// by balanced ranking. None when capacity or usage is unreported, or
    /// capacity is zero.
    pub fn utilization_pct(&self) -> Option<f64> {
        match (self.capacity, self.current_usage) {
            (Some(capacity), Some(usage)) if capacity > 0 => {
                Some(usage as f64 / capacity as f64 * 100.0)
            }
            _ => None,
        }
    }
}

/// coarse congestion label derived from utilization, reported in the
/// winning route's optimization factors
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CapacityStatus {
    Low,
    Moderate,
    High,
    Unknown,
}

impl CapacityStatus {
    pub fn from_utilization(utilization_pct: Option<f64>) -> CapacityStatus {
        match utilization_pct {
            None => CapacityStatus::Unknown,
            Some(pct) if pct < 30.0 => CapacityStatus::Low,
            Some(pct) if pct < 70.0 => CapacityStatus::Moderate,
            Some(_) => CapacityStatus::High,
        }
    }
}

/// metadata attached to the winning candidate. traffic and weather carry
/// fixed placeholder values since no live feed is consulted by this engine.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OptimizationFactors {
    pub current_traffic: String,
    pub weather_conditions: String,
    pub route_capacity: CapacityStatus,
    pub estimated_delay: u64,
}

/// the selected route plus its optimization metadata. transient, built
/// per-request and discarded once serialized to the caller.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RankedRoute {
    #[serde(flatten)]
    pub route: RouteCandidate,
    pub ai_optimized: bool,
    pub optimization_factors: OptimizationFactors,
}

#[cfg(test)]
mod test {
    use super::{CapacityStatus, RouteCandidate, RouteStatus};

    fn candidate(capacity: Option<u64>, current_usage: Option<u64>) -> RouteCandidate {
        RouteCandidate {
            name: "riverside corridor".to_string(),
            from_location: "sector 4".to_string(),
            to_location: "relief camp".to_string(),
            distance_km: Some(12.0),
            estimated_time_minutes: Some(40),
            capacity,
            current_usage,
            difficulty_level: None,
            current_status: RouteStatus::Open,
        }
    }

    #[test]
    fn test_utilization_requires_both_fields() {
        assert_eq!(candidate(Some(100), None).utilization_pct(), None);
        assert_eq!(candidate(None, Some(30)).utilization_pct(), None);
        assert_eq!(candidate(Some(100), Some(30)).utilization_pct(), Some(30.0));
    }

    #[test]
    fn test_utilization_zero_capacity() {
        // a zero-capacity route cannot express a utilization percentage
        assert_eq!(candidate(Some(0), Some(30)).utilization_pct(), None);
    }

    #[test]
    fn test_capacity_status_thresholds() {
        assert_eq!(
            CapacityStatus::from_utilization(None),
            CapacityStatus::Unknown
        );
        assert_eq!(
            CapacityStatus::from_utilization(Some(29.9)),
            CapacityStatus::Low
        );
        assert_eq!(
            CapacityStatus::from_utilization(Some(30.0)),
            CapacityStatus::Moderate
        );
        assert_eq!(
            CapacityStatus::from_utilization(Some(69.9)),
            CapacityStatus::Moderate
        );
        assert_eq!(
            CapacityStatus::from_utilization(Some(70.0)),
            CapacityStatus::High
        );
    }

    #[test]
    fn test_candidate_deserializes_with_missing_metrics() {
        // route rows from the store may omit any numeric field
        let candidate: RouteCandidate = serde_json::from_value(serde_json::json!({
            "name": "ridge road",
            "from_location": "old town",
            "to_location": "stadium shelter",
            "distance_km": null,
            "estimated_time_minutes": null,
            "capacity": null,
            "current_usage": null,
            "difficulty_level": "hard",
            "current_status": "open"
        }))
        .expect("test failed");
        assert_eq!(candidate.distance_km, None);
        assert_eq!(candidate.current_status, RouteStatus::Open);
    }
}
