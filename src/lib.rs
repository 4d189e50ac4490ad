use std::sync::Arc;

use config::Config;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod upstream;

use cache::{CacheStore, SingleFlight};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn CacheStore>,
    pub http: reqwest::Client,
    pub flights: Arc<SingleFlight>,
}
