//! Health check endpoint for container orchestration.
//!
//! Used by Kubernetes, systemd, and load balancers to verify the service is
//! alive and should keep receiving traffic.

/// Liveness probe handler.
///
/// Returns a fixed "ok" body. This only checks that the process can respond
/// to HTTP; it touches no other subsystem.
pub async fn health() -> &'static str {
    "ok"
}
