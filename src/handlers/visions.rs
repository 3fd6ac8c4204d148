use axum::{
    Json,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::form::{is_operator, parse_pairs};
use crate::metrics::VISIONS_REVEALED;
use crate::models::{AccessDenied, Vision};
use crate::state::AppState;

// GET /visions/eleven-only
//
// Gated on the client-asserted operator flag from the query string.
// Deliberately independent of the send lockout state.
pub async fn visions_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Response {
    let pairs = parse_pairs(query.as_deref().unwrap_or(""));
    if !is_operator(&pairs) {
        return (
            StatusCode::FORBIDDEN,
            Json(AccessDenied {
                error: "Access denied. Signal not elevated.".to_string(),
            }),
        )
            .into_response();
    }

    VISIONS_REVEALED.inc();
    Json(Vision {
        vision: state.flag.clone(),
    })
    .into_response()
}
