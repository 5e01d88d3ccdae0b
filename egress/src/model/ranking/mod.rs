mod error;
mod policy;
mod ranker;
mod source;

pub use error::RankingError;
pub use policy::{MissingMetricPolicy, RankingPolicy, RoutePreferences};
pub use ranker::{RouteRanker, RouteRequest};
pub use source::{CandidateSource, InMemoryCandidateSource};
