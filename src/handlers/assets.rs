use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::path::Path;
use std::sync::Arc;

use crate::state::AppState;

// GET /
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Response {
    serve_file(&state.static_dir.join("index.html"), "text/html; charset=utf-8").await
}

// GET /client.js
pub async fn client_js_handler(State(state): State<Arc<AppState>>) -> Response {
    serve_file(&state.static_dir.join("client.js"), "application/javascript").await
}

// Fixed files read per request; a missing file is just a 404
async fn serve_file(path: &Path, content_type: &'static str) -> Response {
    match tokio::fs::read(path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
