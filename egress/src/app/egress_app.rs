use std::path::Path;
use std::sync::Arc;

use geo::Point;
use serde::Deserialize;
use serde_json::json;

use egress_core::model::{IncidentDescriptor, SeverityScore};
use egress_core::resources::ResourceModel;
use egress_core::severity::SeverityModel;
use egress_core::util::geo_ops;

use crate::model::ranking::{CandidateSource, InMemoryCandidateSource, RouteRanker, RouteRequest};

use super::{AppConfig, AppError};

/// a single decision query, one of the four operations this engine exposes.
/// queries arrive as tagged JSON rows from the query file.
#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EgressQuery {
    /// estimate incident severity
    Severity { incident: IncidentDescriptor },
    /// predict resource requirements. severity is estimated from the
    /// incident when not supplied.
    Resources {
        incident: IncidentDescriptor,
        severity: Option<i64>,
    },
    /// select the best evacuation route for the request
    EvacuationRoute {
        #[serde(flatten)]
        request: RouteRequest,
    },
    /// straight-line route between two [latitude, longitude] coordinates
    DirectRoute { start: [f64; 2], end: [f64; 2] },
}

/// the composed decision engine: severity estimation, resource prediction
/// and route ranking behind one query interface. all collaborators are
/// passed in explicitly at construction; there is no process-wide state.
pub struct EgressApp {
    severity: SeverityModel,
    resources: ResourceModel,
    ranker: RouteRanker,
    routes: Arc<dyn CandidateSource>,
}

impl EgressApp {
    /// builds the app from configuration, backing route ranking with an
    /// in-memory candidate source over the configured route listing
    pub fn new(config: AppConfig) -> Result<EgressApp, AppError> {
        let routes = config.load_routes()?;
        log::info!("loaded {} evacuation route(s)", routes.len());
        let source = Arc::new(InMemoryCandidateSource::new(routes));
        Ok(Self::with_source(config, source))
    }

    /// builds the app with a caller-supplied candidate source, the seam
    /// where a persistence-backed deployment attaches
    pub fn with_source(config: AppConfig, routes: Arc<dyn CandidateSource>) -> EgressApp {
        EgressApp {
            severity: SeverityModel::new(config.severity),
            resources: ResourceModel::new(config.resources),
            ranker: RouteRanker::new(config.ranking, config.distances),
            routes,
        }
    }

    /// runs a batch of queries, producing one JSON row per query. a failed
    /// query becomes an error row rather than aborting the batch.
    pub fn run(&self, queries: &[EgressQuery]) -> Vec<serde_json::Value> {
        queries
            .iter()
            .map(|query| match self.run_query(query) {
                Ok(row) => row,
                Err(e) => json!({ "error": e.to_string() }),
            })
            .collect()
    }

    pub fn run_query(&self, query: &EgressQuery) -> Result<serde_json::Value, AppError> {
        match query {
            EgressQuery::Severity { incident } => {
                let severity = self.severity.estimate(incident);
                Ok(json!({
                    "incident_type": incident.incident_type,
                    "severity": severity,
                }))
            }
            EgressQuery::Resources { incident, severity } => {
                let severity = match severity {
                    Some(raw) => SeverityScore::clamped(*raw),
                    None => self.severity.estimate(incident),
                };
                let requirements = self.resources.predict(&incident.incident_type, severity);
                Ok(json!({
                    "incident_type": incident.incident_type,
                    "severity": severity,
                    "requirements": requirements,
                }))
            }
            EgressQuery::EvacuationRoute { request } => {
                let ranked = self.ranker.rank_from_source(self.routes.as_ref(), request)?;
                serde_json::to_value(ranked)
                    .map_err(|e| AppError::ResultSerialization(e.to_string()))
            }
            EgressQuery::DirectRoute { start, end } => {
                // query coordinates are [lat, lon]; geo points are (x=lon, y=lat)
                let route = geo_ops::direct_route(
                    Point::new(start[1], start[0]),
                    Point::new(end[1], end[0]),
                );
                serde_json::to_value(route)
                    .map_err(|e| AppError::ResultSerialization(e.to_string()))
            }
        }
    }
}

/// reads a JSON array of queries from a file
pub fn read_queries(path: &Path) -> Result<Vec<EgressQuery>, AppError> {
    let file = std::fs::File::open(path).map_err(|e| AppError::QueryFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| AppError::QueryFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
