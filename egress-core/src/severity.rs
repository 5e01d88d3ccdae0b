use itertools::Itertools;

use crate::calibration::SeverityCalibration;
use crate::model::{IncidentDescriptor, SeverityScore};

/// heuristic incident severity estimator. a total function over its inputs:
/// estimation must never block incident intake, so there is no error path.
#[derive(Clone, Debug, Default)]
pub struct SeverityModel {
    calibration: SeverityCalibration,
}

impl SeverityModel {
    pub fn new(calibration: SeverityCalibration) -> SeverityModel {
        SeverityModel { calibration }
    }

    /// estimates severity as base(type) + keyword hits + location density,
    /// clamped into [1, 10].
    ///
    /// keyword hits count each *distinct* matched keyword once, regardless
    /// of how many times it occurs in the description: +2 per high-severity
    /// keyword, +1 per medium-severity keyword. all text matching is
    /// case-insensitive substring matching.
    pub fn estimate(&self, incident: &IncidentDescriptor) -> SeverityScore {
        let base_score = self
            .calibration
            .type_scores
            .get(incident.incident_type.as_str())
            .copied()
            .unwrap_or(self.calibration.default_type_score);

        let description = incident.description.to_lowercase();
        let high_matches = count_matches(&description, &self.calibration.high_severity_keywords);
        let medium_matches =
            count_matches(&description, &self.calibration.medium_severity_keywords);
        let keyword_score = high_matches * 2 + medium_matches;

        let location = incident.location.to_lowercase();
        let location_score = i64::from(
            self.calibration
                .high_density_areas
                .iter()
                .any(|area| location.contains(&area.to_lowercase())),
        );

        let score = SeverityScore::clamped(base_score + keyword_score + location_score);
        log::debug!(
            "severity for '{}' incident: base {base_score} + keywords {keyword_score} + location {location_score} = {score}",
            incident.incident_type
        );
        score
    }
}

/// number of distinct keywords appearing in the (lowercased) text
fn count_matches(text: &str, keywords: &[String]) -> i64 {
    keywords
        .iter()
        .filter(|keyword| text.contains(&keyword.to_lowercase()))
        .unique()
        .count() as i64
}
