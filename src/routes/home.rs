//! Greeting endpoint reporting host identity and current time.
//!
//! This is the main route of the demo workload. Responses identify which pod
//! served the request, so rollouts and load-balancer routing can be observed
//! by curling the service repeatedly.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::{APP_VERSION, GREETING_MESSAGE};
use crate::state::AppState;

/// Greeting payload for `GET /`.
///
/// `message` and `version` are constants; `hostname` is the serving pod's
/// identity and `timestamp` is the wall-clock time the request was handled,
/// in ISO-8601 with millisecond precision (`2024-01-01T12:00:00.000Z`).
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub hostname: String,
    pub timestamp: String,
    pub version: &'static str,
}

/// Greeting handler.
///
/// Builds a fresh response per request; only the timestamp varies between
/// calls on the same pod.
pub async fn index(State(state): State<AppState>) -> Json<GreetingResponse> {
    let hostname = &state.identity.hostname;

    tracing::info!("Request received - Pod: {}", hostname);

    Json(GreetingResponse {
        message: GREETING_MESSAGE,
        hostname: hostname.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: APP_VERSION,
    })
}
