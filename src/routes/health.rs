//! Health check endpoint for container orchestration.
//!
//! Liveness probe for the ECS task definition and the load balancer's target
//! group health check.

/// Health check handler.
///
/// Returns "ok" when the process can respond to HTTP; no deeper checks exist
/// because the service has no dependencies.
pub async fn health() -> &'static str {
    "ok"
}
