use mongodb::{bson::doc, Client};

/// Ping the server to verify the connection is alive.
///
/// Used by readiness probes; failures are reported as `false` rather than
/// propagated so the probe endpoint can degrade gracefully.
pub async fn check_health(client: &Client) -> bool {
    match client.database("admin").run_command(doc! { "ping": 1 }).await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("MongoDB health check failed: {}", e);
            false
        }
    }
}
