//! `GET /health`, mounted beside `/api` for load balancers and the kiosk.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthPayload {
    /// `ok`, or `degraded` while the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Always 200; a dead pool shows up as `db_healthy: false`.
async fn health(State(state): State<AppState>) -> Json<Envelope<HealthPayload>> {
    let db_healthy = match eindex_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    Json(Envelope::ok(HealthPayload {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
