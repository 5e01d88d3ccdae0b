use std::path::PathBuf;

use crate::model::ranking::RankingError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure reading configuration file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },
    #[error("failure parsing configuration file '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },
    #[error("failure reading route file '{path}': {message}")]
    RouteFile { path: PathBuf, message: String },
    #[error("failure reading query file '{path}': {message}")]
    QueryFile { path: PathBuf, message: String },
    #[error("failure serializing result row: {0}")]
    ResultSerialization(String),
    #[error(transparent)]
    Ranking(#[from] RankingError),
}
