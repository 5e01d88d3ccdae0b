use egress_core::model::DifficultyLevel;
use serde::{Deserialize, Serialize};

/// caller preferences for route selection. when neither sort preference is
/// set, the balanced score in [`super::RankingPolicy`] decides.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RoutePreferences {
    pub shortest_distance: bool,
    pub fastest_time: bool,
    /// accepted for caller compatibility. candidate fetch already filters to
    /// open routes and the balanced score penalizes utilization, so no
    /// additional sort mode is applied for this flag.
    pub avoid_congestion: bool,
}

/// how a candidate missing the sorted metric (distance or time) ranks under
/// a preference sort.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingMetricPolicy {
    /// an unreported metric sorts as if it were zero, ranking the candidate
    /// first. this matches the historical behavior the engine's calibration
    /// was validated against.
    #[default]
    BestCase,
    /// an unreported metric sorts last, so only fully-measured candidates
    /// can win a preference sort.
    WorstCase,
}

/// weights for the balanced route score:
///
/// `base - km*distance_weight - minutes*time_weight
///  - utilization_pct*utilization_weight + difficulty adjustment`,
///
/// floored at zero. higher is better. defaults carry the calibrated weights.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RankingPolicy {
    pub base_score: f64,
    pub distance_weight: f64,
    pub time_weight: f64,
    pub utilization_weight: f64,
    pub easy_adjustment: f64,
    pub moderate_adjustment: f64,
    pub hard_adjustment: f64,
    pub missing_metric: MissingMetricPolicy,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        RankingPolicy {
            base_score: 100.0,
            distance_weight: 2.0,
            time_weight: 0.5,
            utilization_weight: 0.3,
            easy_adjustment: 0.0,
            moderate_adjustment: -5.0,
            hard_adjustment: -15.0,
            missing_metric: MissingMetricPolicy::default(),
        }
    }
}

impl RankingPolicy {
    /// score adjustment for a route's difficulty label. an unlabeled route
    /// contributes zero.
    pub fn difficulty_adjustment(&self, difficulty: Option<DifficultyLevel>) -> f64 {
        match difficulty {
            Some(DifficultyLevel::Easy) => self.easy_adjustment,
            Some(DifficultyLevel::Moderate) => self.moderate_adjustment,
            Some(DifficultyLevel::Hard) => self.hard_adjustment,
            None => 0.0,
        }
    }
}
