mod config;
mod egress_app;
mod error;

pub use config::AppConfig;
pub use egress_app::{read_queries, EgressApp, EgressQuery};
pub use error::AppError;
