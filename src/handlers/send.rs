use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::client_ip::client_ip;
use crate::form::{OPERATOR, extract_last, parse_pairs};
use crate::metrics::{LOCKOUTS_TOTAL, PRIVILEGED_SENDS, SEND_TOTAL, TRACKED_CLIENTS};
use crate::models::{SendAccepted, SendLocked};
use crate::state::AppState;
use crate::tracker::epoch_now;

// POST /api/send
//
// Operator-flagged sends bypass the lock gate entirely and wipe the
// client's failure history; everything else counts as a failure and can
// trip a lockout.
pub async fn send_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: String,
) -> Response {
    SEND_TOTAL.inc();

    let ip = client_ip(&headers, peer);
    let now = epoch_now();
    let pairs = parse_pairs(&body);
    let user = extract_last(&pairs, "user");
    let message = extract_last(&pairs, "message");

    if user != OPERATOR {
        if let Some(remaining) = state.tracker.lock_remaining(&ip, now) {
            TRACKED_CLIENTS.set(state.tracker.tracked_clients() as f64);
            let retry_after = remaining.floor().max(1.0) as u64;
            return locked_response("Relay cooling down. Try later.", retry_after);
        }
    }

    // observational only, no behavioral effect
    info!(
        ip = %ip,
        body = %body.replace('\n', "\\n"),
        user = %user,
        message = %message,
        "api_send attempt"
    );

    if user == OPERATOR {
        state.tracker.clear(&ip);
        PRIVILEGED_SENDS.inc();
        TRACKED_CLIENTS.set(state.tracker.tracked_clients() as f64);
        return Json(SendAccepted {
            status: "ok".to_string(),
            privileged: true,
        })
        .into_response();
    }

    let locked = state.tracker.record_failure(&ip, now);
    TRACKED_CLIENTS.set(state.tracker.tracked_clients() as f64);
    if locked {
        LOCKOUTS_TOTAL.inc();
        return locked_response(
            "Too many noisy attempts. Station locked.",
            state.tracker.lock_duration_secs(),
        );
    }

    Json(SendAccepted {
        status: "ok".to_string(),
        privileged: false,
    })
    .into_response()
}

fn locked_response(message: &str, retry_after: u64) -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(SendLocked {
            status: "locked".to_string(),
            message: message.to_string(),
            retry_after,
        }),
    )
        .into_response()
}
