use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use egress_core::calibration::{DistanceCalibration, ResourceCalibration, SeverityCalibration};
use egress_core::model::RouteCandidate;

use crate::model::ranking::RankingPolicy;

use super::AppError;

/// application configuration: calibration overrides plus the route listing
/// backing the in-memory candidate source. every section is optional; an
/// absent section keeps the shipped calibration.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct AppConfig {
    pub severity: SeverityCalibration,
    pub resources: ResourceCalibration,
    pub distances: DistanceCalibration,
    pub ranking: RankingPolicy,
    /// evacuation routes declared inline in the configuration
    pub routes: Vec<RouteCandidate>,
    /// path to a JSON file holding an array of additional routes, resolved
    /// relative to the working directory
    pub route_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<AppConfig, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| AppError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// all configured routes: the inline listing plus the route file, if any
    pub fn load_routes(&self) -> Result<Vec<RouteCandidate>, AppError> {
        let mut routes = self.routes.clone();
        if let Some(path) = &self.route_file {
            let file = std::fs::File::open(path).map_err(|e| AppError::RouteFile {
                path: path.clone(),
                message: e.to_string(),
            })?;
            let reader = std::io::BufReader::new(file);
            let from_file: Vec<RouteCandidate> =
                serde_json::from_reader(reader).map_err(|e| AppError::RouteFile {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
            routes.extend(from_file);
        }
        Ok(routes)
    }
}
