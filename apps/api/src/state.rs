use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::session::Session;
use crate::webhook;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory session store. Single logical session — no cross-session
    /// sharing, no persistence.
    pub session: Arc<RwLock<Session>>,
    /// HTTP client for outbound webhook dispatch, built once with a fixed
    /// timeout.
    pub http: reqwest::Client,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            session: Arc::new(RwLock::new(Session::new(config.webhook_url.clone()))),
            http: webhook::build_client(),
            config,
        }
    }
}
