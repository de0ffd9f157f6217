//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes readiness/liveness probes and ALB target group health checks.

/// Health check handler.
///
/// Returns a plain-text "ok" to indicate the service is running. No request
/// data is consulted.
pub async fn health() -> &'static str {
    "ok"
}
