//! Health check handler.

use axum::Json;
use axum::extract::State;

use cinevault_core::types::envelope::Envelope;

use crate::dto::response::HealthRecord;
use crate::state::AppState;

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<Envelope<HealthRecord>> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
    {
        Ok(_) => "up",
        Err(_) => "down",
    };

    let status = if database == "up" { "healthy" } else { "degraded" };

    Json(Envelope::ok(
        "Health probe",
        HealthRecord {
            status: status.to_string(),
            database: database.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    ))
}
