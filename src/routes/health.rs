//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by Kubernetes, ECS, and load balancers to verify the
//! service is alive and should keep receiving traffic.

use axum::Json;
use serde::Serialize;

/// Liveness probe payload. Always reports `"healthy"`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler.
///
/// Returns `{"status":"healthy"}` to indicate the service is running.
/// This is a liveness probe - it only checks that the process can respond
/// to HTTP, and never consults any dependency.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_healthy() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
    }

    #[tokio::test]
    async fn health_body_is_stable() {
        let Json(body) = health().await;
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"status":"healthy"}"#);
    }
}
