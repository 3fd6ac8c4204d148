use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub mod client_ip;
pub mod config;
pub mod form;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod state;
pub mod tracker;

use crate::state::AppState;

// All routes; split out of main so the integration tests can drive it
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/client.js", get(handlers::client_js_handler))
        .route("/api/send", post(handlers::send_handler))
        .route("/visions/eleven-only", get(handlers::visions_handler))
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
