//! Liveness and readiness check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use todoboard_db::SchemaStatus;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers and its schema is current, otherwise
    /// `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Applied and embedded migration versions. `None` when the database
    /// could not be read or was never migrated.
    pub schema: Option<SchemaStatus>,
}

/// GET /health
///
/// Answers 503 while degraded.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = todoboard_db::health_check(&state.pool).await.is_ok();

    let schema = if db_healthy {
        todoboard_db::schema_status(&state.pool)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Could not read schema status"))
            .ok()
    } else {
        None
    };

    let ready = schema.is_some_and(|s| s.is_current());
    let (code, status) = if ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            schema,
        }),
    )
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
