use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use egress_core::calibration::DistanceCalibration;
use egress_core::model::{
    CapacityStatus, DifficultyLevel, OptimizationFactors, RankedRoute, RouteCandidate, RouteStatus,
};

use super::{CandidateSource, MissingMetricPolicy, RankingError, RankingPolicy, RoutePreferences};

/// minutes of travel assumed per km when synthesizing a route with no
/// measured candidates to draw from
const SYNTHESIZED_MINUTES_PER_KM: f64 = 3.0;

/// an evacuation routing request as received from the transport layer
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RouteRequest {
    pub from_location: String,
    pub to_location: String,
    #[serde(default)]
    pub preferences: RoutePreferences,
}

/// scores and orders candidate evacuation routes, returning the best
/// candidate annotated with optimization metadata. pure selection over a
/// finite input list: no state, no randomness, stable tie order, so ranking
/// is deterministic for a given candidate list and preference set.
#[derive(Clone, Debug, Default)]
pub struct RouteRanker {
    policy: RankingPolicy,
    distances: DistanceCalibration,
}

impl RouteRanker {
    pub fn new(policy: RankingPolicy, distances: DistanceCalibration) -> RouteRanker {
        RouteRanker { policy, distances }
    }

    /// fetches candidates for the request and ranks them. fetch faults
    /// propagate; an empty fetch result falls through to route synthesis.
    pub fn rank_from_source(
        &self,
        source: &dyn CandidateSource,
        request: &RouteRequest,
    ) -> Result<RankedRoute, RankingError> {
        let candidates = source.candidates(&request.from_location)?;
        Ok(self.rank(request, candidates))
    }

    /// ranks the given candidates under the request preferences and returns
    /// the winner. with no candidates, synthesizes a route from the
    /// city-pair distance table instead.
    pub fn rank(&self, request: &RouteRequest, candidates: Vec<RouteCandidate>) -> RankedRoute {
        if candidates.is_empty() {
            log::info!(
                "no route candidates from '{}', synthesizing direct estimate",
                request.from_location
            );
            return self.synthesize(request);
        }

        let n_candidates = candidates.len();
        let ordered = if request.preferences.shortest_distance {
            self.sort_ascending(candidates, |c| c.distance_km)
        } else if request.preferences.fastest_time {
            self.sort_ascending(candidates, |c| c.estimated_time_minutes.map(|t| t as f64))
        } else {
            // stable descending sort on balanced score; ties keep input order
            candidates
                .into_iter()
                .sorted_by_key(|c| std::cmp::Reverse(OrderedFloat(self.balanced_score(c))))
                .collect_vec()
        };

        let winner = match ordered.into_iter().next() {
            Some(c) => c,
            // unreachable: candidates was non-empty and sorting preserves length
            None => return self.synthesize(request),
        };
        log::info!(
            "selected route '{}' for {} -> {} from {} candidate(s)",
            winner.name,
            request.from_location,
            request.to_location,
            n_candidates
        );
        annotate(winner)
    }

    /// balanced route score; see [`RankingPolicy`] for the formula. terms
    /// with unreported inputs are skipped, and the result is floored at zero.
    pub fn balanced_score(&self, candidate: &RouteCandidate) -> f64 {
        let mut score = self.policy.base_score;
        if let Some(km) = candidate.distance_km {
            score -= km * self.policy.distance_weight;
        }
        if let Some(minutes) = candidate.estimated_time_minutes {
            score -= minutes as f64 * self.policy.time_weight;
        }
        if let Some(utilization_pct) = candidate.utilization_pct() {
            score -= utilization_pct * self.policy.utilization_weight;
        }
        score += self.policy.difficulty_adjustment(candidate.difficulty_level);
        score.max(0.0)
    }

    /// stable ascending sort on a possibly-missing metric, placing missing
    /// values per the policy's missing-metric rule
    fn sort_ascending<F>(&self, candidates: Vec<RouteCandidate>, metric: F) -> Vec<RouteCandidate>
    where
        F: Fn(&RouteCandidate) -> Option<f64>,
    {
        candidates
            .into_iter()
            .sorted_by_key(|c| match (metric(c), self.policy.missing_metric) {
                (Some(value), _) => OrderedFloat(value),
                (None, MissingMetricPolicy::BestCase) => OrderedFloat(0.0),
                (None, MissingMetricPolicy::WorstCase) => OrderedFloat(f64::INFINITY),
            })
            .collect_vec()
    }

    /// builds a route estimate when the store held no open candidates:
    /// distance from the city-pair table (default for unknown pairs), time
    /// at three minutes per km, moderate difficulty.
    fn synthesize(&self, request: &RouteRequest) -> RankedRoute {
        let distance_km = self
            .distances
            .between(&request.from_location, &request.to_location);
        let estimated_time_minutes = (distance_km * SYNTHESIZED_MINUTES_PER_KM).ceil() as u64;
        let route = RouteCandidate {
            name: format!(
                "Optimized route from {} to {}",
                request.from_location, request.to_location
            ),
            from_location: request.from_location.clone(),
            to_location: request.to_location.clone(),
            distance_km: Some(distance_km),
            estimated_time_minutes: Some(estimated_time_minutes),
            capacity: None,
            current_usage: None,
            difficulty_level: Some(DifficultyLevel::Moderate),
            current_status: RouteStatus::Open,
        };
        // a synthesized route has no usage history; it reports low capacity
        // pressure rather than unknown
        RankedRoute {
            route,
            ai_optimized: true,
            optimization_factors: OptimizationFactors {
                current_traffic: "moderate".to_string(),
                weather_conditions: "clear".to_string(),
                route_capacity: CapacityStatus::Low,
                estimated_delay: 0,
            },
        }
    }
}

/// wraps the winning candidate with its optimization metadata. traffic and
/// weather are fixed placeholders; no live feed is consulted.
fn annotate(route: RouteCandidate) -> RankedRoute {
    let route_capacity = CapacityStatus::from_utilization(route.utilization_pct());
    RankedRoute {
        route,
        ai_optimized: true,
        optimization_factors: OptimizationFactors {
            current_traffic: "moderate".to_string(),
            weather_conditions: "clear".to_string(),
            route_capacity,
            estimated_delay: 0,
        },
    }
}
