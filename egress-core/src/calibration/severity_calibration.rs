use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// scoring tables for severity estimation. defaults carry the calibration
/// this engine shipped with; any table can be replaced wholesale from a
/// configuration file for regional deployments.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SeverityCalibration {
    /// base score per incident category, range 3-8 in the default tables
    pub type_scores: IndexMap<String, i64>,
    /// base score applied when the incident category is not in the table
    pub default_type_score: i64,
    /// each distinct keyword found in the description adds 2 points
    pub high_severity_keywords: Vec<String>,
    /// each distinct keyword found in the description adds 1 point
    pub medium_severity_keywords: Vec<String>,
    /// population-dense areas; a location match adds 1 point
    pub high_density_areas: Vec<String>,
}

impl Default for SeverityCalibration {
    fn default() -> Self {
        SeverityCalibration {
            type_scores: IndexMap::from([
                ("earthquake".to_string(), 8),
                ("flood".to_string(), 7),
                ("fire".to_string(), 6),
                ("weather".to_string(), 5),
                ("accident".to_string(), 4),
                ("hazmat".to_string(), 7),
                ("medical".to_string(), 3),
                ("other".to_string(), 3),
            ]),
            default_type_score: 5,
            high_severity_keywords: to_strings(&[
                "multiple casualties",
                "building collapse",
                "major damage",
                "widespread",
                "critical",
                "emergency",
                "immediate",
                "severe",
                "massive",
                "extensive",
            ]),
            medium_severity_keywords: to_strings(&[
                "injury", "damage", "blocked", "minor", "moderate", "some",
            ]),
            high_density_areas: to_strings(&[
                "mumbai",
                "delhi",
                "bangalore",
                "chennai",
                "kolkata",
                "hyderabad",
                "pune",
                "ahmedabad",
                "surat",
                "jaipur",
                "lucknow",
                "kanpur",
            ]),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod test {
    use super::SeverityCalibration;

    #[test]
    fn test_default_tables_populated() {
        let calibration = SeverityCalibration::default();
        assert_eq!(calibration.type_scores.get("earthquake"), Some(&8));
        assert_eq!(calibration.type_scores.get("medical"), Some(&3));
        assert_eq!(calibration.default_type_score, 5);
        assert_eq!(calibration.high_severity_keywords.len(), 10);
        assert_eq!(calibration.medium_severity_keywords.len(), 6);
        assert_eq!(calibration.high_density_areas.len(), 12);
    }

    #[test]
    fn test_partial_override_from_toml() {
        // a regional calibration file only needs to name the tables it changes
        let calibration: SeverityCalibration = toml::from_str(
            r#"
            default_type_score = 4

            [type_scores]
            wildfire = 9
            "#,
        )
        .expect("test failed");
        assert_eq!(calibration.type_scores.get("wildfire"), Some(&9));
        assert_eq!(calibration.type_scores.get("earthquake"), None);
        assert_eq!(calibration.default_type_score, 4);
        // untouched tables keep their defaults
        assert_eq!(calibration.high_density_areas.len(), 12);
    }
}
