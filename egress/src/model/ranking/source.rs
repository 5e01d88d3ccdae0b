use egress_core::model::{RouteCandidate, RouteStatus};

use super::RankingError;

/// the candidate-route fetch capability consumed by the ranker. implementors
/// return routes whose from_location contains the query substring
/// (case-insensitive), filtered to open status. an empty result is a valid
/// outcome, distinct from a fetch fault.
pub trait CandidateSource: Send + Sync {
    fn candidates(&self, from_location: &str) -> Result<Vec<RouteCandidate>, RankingError>;
}

/// candidate source backed by an in-memory route list, used by the query
/// runner and tests. a persistence-backed deployment supplies its own
/// [`CandidateSource`] at app construction instead.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCandidateSource {
    routes: Vec<RouteCandidate>,
}

impl InMemoryCandidateSource {
    pub fn new(routes: Vec<RouteCandidate>) -> InMemoryCandidateSource {
        InMemoryCandidateSource { routes }
    }
}

impl CandidateSource for InMemoryCandidateSource {
    fn candidates(&self, from_location: &str) -> Result<Vec<RouteCandidate>, RankingError> {
        let needle = from_location.trim().to_lowercase();
        let matches = self
            .routes
            .iter()
            .filter(|route| {
                route.current_status == RouteStatus::Open
                    && route.from_location.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        Ok(matches)
    }
}
