//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use readings::SnapshotStore;
use readings::reading::format_timestamp;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cities: usize,
    pub generated_at: String,
}

/// GET /health — reports liveness and the age marker of the current snapshot.
pub async fn check(State(store): State<SnapshotStore>) -> Json<HealthResponse> {
    let snapshot = store.current().await;
    Json(HealthResponse {
        status: "ok",
        cities: snapshot.len(),
        generated_at: format_timestamp(&snapshot.generated_at()),
    })
}
