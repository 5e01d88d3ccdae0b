use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// known city-pair road distances in km, used when a route must be
/// synthesized because the store returned no candidates. keys are
/// lowercase "from-to" pairs; lookup is direction-insensitive.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DistanceCalibration {
    pub city_pairs: IndexMap<String, f64>,
    /// assumed distance for unknown pairs, treating them as local routes
    pub default_km: f64,
}

impl Default for DistanceCalibration {
    fn default() -> Self {
        DistanceCalibration {
            city_pairs: IndexMap::from([
                ("delhi-mumbai".to_string(), 1400.0),
                ("mumbai-bangalore".to_string(), 980.0),
                ("delhi-bangalore".to_string(), 2150.0),
                ("chennai-bangalore".to_string(), 350.0),
                ("kolkata-delhi".to_string(), 1470.0),
            ]),
            default_km: 50.0,
        }
    }
}

impl DistanceCalibration {
    /// estimated distance between two locations, matching the pair table in
    /// either direction, case-insensitively. unknown pairs get default_km.
    pub fn between(&self, from: &str, to: &str) -> f64 {
        let from = from.trim().to_lowercase();
        let to = to.trim().to_lowercase();
        let forward = format!("{from}-{to}");
        let reverse = format!("{to}-{from}");
        self.city_pairs
            .get(&forward)
            .or_else(|| self.city_pairs.get(&reverse))
            .copied()
            .unwrap_or(self.default_km)
    }
}

#[cfg(test)]
mod test {
    use super::DistanceCalibration;

    #[test]
    fn test_known_pair() {
        let calibration = DistanceCalibration::default();
        assert_eq!(calibration.between("delhi", "mumbai"), 1400.0);
    }

    #[test]
    fn test_reverse_pair() {
        let calibration = DistanceCalibration::default();
        assert_eq!(calibration.between("mumbai", "delhi"), 1400.0);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let calibration = DistanceCalibration::default();
        assert_eq!(calibration.between(" Delhi ", "MUMBAI"), 1400.0);
    }

    #[test]
    fn test_unknown_pair_uses_default() {
        let calibration = DistanceCalibration::default();
        assert_eq!(calibration.between("haridwar", "rishikesh"), 50.0);
    }
}
